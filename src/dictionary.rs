//! Word validity lookup.
//!
//! "Not a word" and "lookup failed" are distinct outcomes: the first rejects
//! the guess without consuming an attempt, the second means the attempt could
//! not proceed and the player should retry.

use async_trait::async_trait;
use derive_more::{Display, Error};
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

/// Errors from a dictionary lookup. Never means "not a word".
#[derive(Debug, Clone, Display, Error)]
pub enum LookupError {
    /// The dictionary service could not be reached or errored.
    #[display("dictionary lookup failed: {_0}")]
    Unavailable(#[error(not(source))] String),
}

/// Decides whether a candidate guess is a recognized word.
#[async_trait]
pub trait Dictionary: Send + Sync {
    /// Returns `Ok(true)` for a recognized word, `Ok(false)` for an unknown
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when the lookup itself failed.
    async fn contains(&self, word: &str) -> Result<bool, LookupError>;
}

/// Dictionary backed by the free dictionaryapi.dev lookup service.
#[derive(Debug, Clone)]
pub struct ApiDictionary {
    client: reqwest::Client,
    base_url: String,
}

impl ApiDictionary {
    const DEFAULT_BASE_URL: &'static str = "https://api.dictionaryapi.dev/api/v2/entries/en";

    /// Creates a client against the public API endpoint.
    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_string())
    }

    /// Creates a client against a custom endpoint (used by tests).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

impl Default for ApiDictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Dictionary for ApiDictionary {
    #[instrument(skip(self))]
    async fn contains(&self, word: &str) -> Result<bool, LookupError> {
        let url = entry_url(&self.base_url, word)?;
        debug!(url = %url, "Querying dictionary API");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(error = %e, "Dictionary API unreachable");
            LookupError::Unavailable(e.to_string())
        })?;

        // The API answers an unknown word with a 404 error document.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            debug!("Word not found");
            return Ok(false);
        }
        if !response.status().is_success() {
            warn!(status = %response.status(), "Dictionary API errored");
            return Err(LookupError::Unavailable(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        let entries: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LookupError::Unavailable(e.to_string()))?;

        let known = entries.as_array().is_some_and(|a| !a.is_empty());
        debug!(known, "Dictionary lookup complete");
        Ok(known)
    }
}

/// Builds the entry URL for a word, encoding it as a path segment.
fn entry_url(base: &str, word: &str) -> Result<reqwest::Url, LookupError> {
    let mut url =
        reqwest::Url::parse(base).map_err(|e| LookupError::Unavailable(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| LookupError::Unavailable("base url cannot be a base".into()))?
        .push(word);
    Ok(url)
}

/// In-memory dictionary over a fixed word list, for tests and offline play.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Builds a dictionary from an iterator of words.
    pub fn new(words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl Dictionary for WordList {
    async fn contains(&self, word: &str) -> Result<bool, LookupError> {
        Ok(self.words.contains(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_word_list_recognizes_member() {
        let dict = WordList::new(["crane", "rauch"]);
        assert!(dict.contains("crane").await.unwrap());
    }

    #[tokio::test]
    async fn test_word_list_rejects_unknown() {
        let dict = WordList::new(["crane"]);
        assert!(!dict.contains("zzzzz").await.unwrap());
    }

    #[test]
    fn test_entry_url_appends_word_segment() {
        let url = entry_url("https://example.com/api/v2/entries/en", "crane").unwrap();
        assert_eq!(url.path(), "/api/v2/entries/en/crane");
    }

    #[test]
    fn test_entry_url_encodes_non_alphanumerics() {
        let url = entry_url("https://example.com/api/v2/entries/en", "a b").unwrap();
        assert!(url.path().ends_with("/a%20b"));
    }
}
