//! Check endpoint tests, driven through the router without a socket.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;
use wordgrid::{AppState, Dictionary, LookupError, PuzzleConfig, WordList, router};

fn app(words: &[&str]) -> axum::Router {
    let config = PuzzleConfig::new(8, "rauch", 6).expect("valid config");
    router(Arc::new(AppState::new(
        config,
        Arc::new(WordList::new(words.iter().copied())),
    )))
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("request handled");
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let response = app(&[])
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_correct_word_scores_all_good() {
    let (status, json) = get_json(app(&[]), "/check?word=rauch").await;
    assert_eq!(status, StatusCode::OK);

    let row = json["match"].as_array().expect("match row");
    assert_eq!(row.len(), 5);
    assert!(row.iter().all(|item| item["score"] == "good"));
}

#[tokio::test]
async fn test_valid_word_gets_mixed_verdicts() {
    let (status, json) = get_json(app(&["chart"]), "/check?word=chart").await;
    assert_eq!(status, StatusCode::OK);

    // secret "rauch": c misplaced, h misplaced, a misplaced, r misplaced,
    // t absent.
    let scores: Vec<_> = json["match"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["score"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(scores, vec!["off", "off", "off", "off", "bad"]);
}

#[tokio::test]
async fn test_unknown_word_reports_error_code() {
    let (status, json) = get_json(app(&[]), "/check?word=zzzzz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["error"], "unknown_word");
    assert!(json.get("match").is_none());
}

#[tokio::test]
async fn test_lookup_failure_reports_api_error() {
    struct Down;
    #[async_trait]
    impl Dictionary for Down {
        async fn contains(&self, _: &str) -> Result<bool, LookupError> {
            Err(LookupError::Unavailable("offline".into()))
        }
    }

    let config = PuzzleConfig::new(8, "rauch", 6).unwrap();
    let app = router(Arc::new(AppState::new(config, Arc::new(Down))));

    let (status, json) = get_json(app, "/check?word=crane").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["error"], "api_error");
}

#[tokio::test]
async fn test_word_is_lowercased_and_truncated() {
    // The original client sends at most word-length letters, but the
    // endpoint normalizes anyway.
    let (status, json) = get_json(app(&[]), "/check?word=RAUCHX").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["match"].as_array().unwrap().iter().all(|i| i["score"] == "good"));
}

#[tokio::test]
async fn test_short_word_is_bad_request() {
    let (status, _) = get_json(app(&["ox"]), "/check?word=ox").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_word_param_is_client_error() {
    let response = app(&[])
        .oneshot(Request::builder().uri("/check").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}
