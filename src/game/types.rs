//! Core domain types for the word-guessing game.

use serde::{Deserialize, Serialize};

/// Per-letter outcome of scoring a guess against the secret word.
///
/// Serialized with the short names the browser client and snapshot format
/// use: `"good"`, `"off"`, `"bad"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Verdict {
    /// Right letter in the right position.
    #[serde(rename = "good")]
    #[strum(serialize = "good")]
    Exact,
    /// Letter occurs elsewhere in the secret, subject to pool availability.
    #[serde(rename = "off")]
    #[strum(serialize = "off")]
    Present,
    /// Letter not available to credit.
    #[serde(rename = "bad")]
    #[strum(serialize = "bad")]
    Absent,
}

/// A single guessed letter together with its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct LetterScore {
    /// The guessed letter.
    pub letter: char,
    /// Outcome for this position.
    #[serde(rename = "score")]
    pub verdict: Verdict,
}

/// Ordered per-letter verdicts for one guess, position `i` matching guess
/// character `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResult(Vec<LetterScore>);

impl GuessResult {
    /// Wraps an ordered sequence of letter scores.
    pub fn new(scores: Vec<LetterScore>) -> Self {
        Self(scores)
    }

    /// Returns the per-position letter scores.
    pub fn letters(&self) -> &[LetterScore] {
        &self.0
    }

    /// Number of letters in the scored guess.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the guess had no letters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position scored [`Verdict::Exact`].
    pub fn is_winning(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|s| s.verdict == Verdict::Exact)
    }

    /// Reassembles the guessed word.
    pub fn word(&self) -> String {
        self.0.iter().map(|s| s.letter).collect()
    }
}

impl<'a> IntoIterator for &'a GuessResult {
    type Item = &'a LetterScore;
    type IntoIter = std::slice::Iter<'a, LetterScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Where a session stands, derived from its guess history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum SessionState {
    /// No guesses made yet.
    Empty,
    /// At least one guess made, game still open.
    InProgress,
    /// Some guess matched the secret exactly.
    Won,
    /// Attempts exhausted without a win.
    Lost,
}

impl SessionState {
    /// True for [`SessionState::Won`] and [`SessionState::Lost`].
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Won | SessionState::Lost)
    }
}
