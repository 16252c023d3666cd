//! HTTP check server.
//!
//! Exposes the stateless word-check endpoint the browser client calls:
//! `GET /check?word=…` answers with per-letter verdicts or an error code.
//! The server holds no session state; clients keep their own history.

use crate::config::PuzzleConfig;
use crate::dictionary::Dictionary;
use crate::game::{self, GuessResult};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Shared state for the check endpoint.
pub struct AppState {
    config: PuzzleConfig,
    dictionary: Arc<dyn Dictionary>,
}

impl AppState {
    /// Bundles the puzzle configuration with a dictionary.
    pub fn new(config: PuzzleConfig, dictionary: Arc<dyn Dictionary>) -> Self {
        Self { config, dictionary }
    }
}

/// Query parameters for `/check`.
#[derive(Debug, Deserialize)]
pub struct CheckParams {
    /// Candidate guess.
    pub word: String,
}

/// Wire response for `/check`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CheckResponse {
    /// The guess was recognized and scored.
    Match {
        /// Per-letter verdicts.
        #[serde(rename = "match")]
        result: GuessResult,
    },
    /// The guess could not be scored.
    Error {
        /// Machine-readable error code.
        error: ErrorCode,
    },
}

/// Error codes the browser client distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The dictionary does not recognize the word.
    UnknownWord,
    /// The dictionary lookup itself failed.
    ApiError,
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/check", get(check))
        .route("/health", get(health))
        .with_state(state)
}

/// Readiness probe.
async fn health() -> &'static str {
    "ok"
}

/// Scores a candidate guess against the configured secret.
///
/// Lowercases and truncates the word to the secret's length before doing
/// anything else, so the core scoring contract (equal lengths) holds for any
/// guess of at least that length. A guess equal to the secret skips the
/// dictionary, keeping the answer playable while the dictionary API is down.
#[instrument(skip(state), fields(puzzle_id = state.config.puzzle_id()))]
async fn check(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CheckParams>,
) -> Response {
    let word: String = params
        .word
        .to_lowercase()
        .chars()
        .take(state.config.word_length())
        .collect();
    debug!(word = %word, "Checking guess");

    if word != *state.config.secret() {
        match state.dictionary.contains(&word).await {
            Ok(true) => {}
            Ok(false) => {
                info!(word = %word, "Unknown word");
                return Json(CheckResponse::Error {
                    error: ErrorCode::UnknownWord,
                })
                .into_response();
            }
            Err(e) => {
                warn!(error = %e, "Dictionary lookup failed");
                return Json(CheckResponse::Error {
                    error: ErrorCode::ApiError,
                })
                .into_response();
            }
        }
    }

    match game::score(&word, state.config.secret()) {
        Ok(result) => Json(CheckResponse::Match { result }).into_response(),
        // Only reachable when the query param is shorter than the secret;
        // the browser client never sends those, but a hand-made request can.
        Err(e) => {
            warn!(error = %e, "Unscorable guess");
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Binds and serves the router until the process ends.
///
/// # Errors
///
/// Returns an error when the listener cannot bind.
#[instrument(skip(state))]
pub async fn serve(state: Arc<AppState>, host: &str, port: u16) -> anyhow::Result<()> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Check server listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
