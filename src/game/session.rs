//! Session state machine: the ordered guess history for one puzzle and the
//! win/loss determination derived from it.

use super::score::{self, ScoreError};
use super::types::{GuessResult, SessionState};
use crate::config::PuzzleConfig;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Errors from submitting a guess to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The session already ended; the guess was not applied.
    #[display("session is over, no further guesses accepted")]
    GameOver,
    /// The guess failed the scoring contract; the history is unchanged.
    #[display("{_0}")]
    #[from]
    Score(ScoreError),
}

/// Persisted form of a session: the guess history tagged with the puzzle it
/// belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Snapshot {
    /// Puzzle the history was recorded against.
    pub puzzle_id: u32,
    /// Guesses made so far, oldest first.
    pub history: Vec<GuessResult>,
}

/// A single player's game against one secret word.
///
/// The session owns its history exclusively; state (`Empty`, `InProgress`,
/// `Won`, `Lost`) is always derived from the history via [`Session::state`],
/// never stored where it could fall out of sync.
#[derive(Debug, Clone)]
pub struct Session {
    config: PuzzleConfig,
    history: Vec<GuessResult>,
}

impl Session {
    /// Creates an empty session for the given puzzle.
    #[instrument(skip(config), fields(puzzle_id = config.puzzle_id()))]
    pub fn new(config: PuzzleConfig) -> Self {
        info!(puzzle_id = config.puzzle_id(), "Creating session");
        Self {
            config,
            history: Vec::new(),
        }
    }

    /// Returns the puzzle configuration.
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Returns the guesses made so far, oldest first.
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    /// Derives the current state from the history.
    pub fn state(&self) -> SessionState {
        if self.history.is_empty() {
            SessionState::Empty
        } else if self.history.iter().any(GuessResult::is_winning) {
            SessionState::Won
        } else if self.history.len() >= *self.config.max_attempts() {
            SessionState::Lost
        } else {
            SessionState::InProgress
        }
    }

    /// Attempts remaining before the session is lost.
    pub fn attempts_left(&self) -> usize {
        self.config.max_attempts().saturating_sub(self.history.len())
    }

    /// Scores a guess, appends the result, and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GameOver`] from a terminal state and
    /// [`SessionError::Score`] for a length mismatch; the history is never
    /// modified on error.
    #[instrument(skip(self), fields(puzzle_id = self.config.puzzle_id()))]
    pub fn submit_guess(&mut self, guess: &str) -> Result<SessionState, SessionError> {
        if self.state().is_terminal() {
            warn!(state = %self.state(), "Guess submitted after session ended");
            return Err(SessionError::GameOver);
        }

        let result = score::score(guess, self.config.secret())?;
        self.history.push(result);

        let state = self.state();
        info!(
            guesses = self.history.len(),
            state = %state,
            "Guess applied"
        );
        Ok(state)
    }

    /// Clears the history back to [`SessionState::Empty`] from any state.
    #[instrument(skip(self), fields(puzzle_id = self.config.puzzle_id()))]
    pub fn reset(&mut self) {
        info!(discarded = self.history.len(), "Resetting session");
        self.history.clear();
    }

    /// Replaces the history with a persisted snapshot.
    ///
    /// A snapshot for a different puzzle is stale and acts as [`Session::reset`].
    /// Oversized histories are clamped to the attempt budget. The resulting
    /// state is derived, never read from the snapshot.
    #[instrument(skip(self, snapshot), fields(puzzle_id = self.config.puzzle_id()))]
    pub fn restore(&mut self, snapshot: Snapshot) -> SessionState {
        if snapshot.puzzle_id != *self.config.puzzle_id() {
            warn!(
                snapshot_puzzle = snapshot.puzzle_id,
                "Snapshot belongs to another puzzle, starting fresh"
            );
            self.reset();
            return self.state();
        }

        let mut history = snapshot.history;
        if history.len() > *self.config.max_attempts() {
            warn!(
                len = history.len(),
                max = self.config.max_attempts(),
                "Snapshot history exceeds attempt budget, clamping"
            );
            history.truncate(*self.config.max_attempts());
        }

        self.history = history;
        let state = self.state();
        debug!(guesses = self.history.len(), state = %state, "Session restored");
        state
    }

    /// Captures the history as a persistable snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(*self.config.puzzle_id(), self.history.clone())
    }
}
