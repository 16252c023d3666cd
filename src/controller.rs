//! Submission pipeline: dictionary check, scoring, persistence.
//!
//! At most one submission is in flight per session. Each call to
//! [`GameController::submit`] claims a fresh epoch; when the dictionary
//! lookup resolves, the outcome is applied only if no newer submission has
//! started in the meantime. A superseded submission's result is discarded,
//! never written to history.

use crate::dictionary::Dictionary;
use crate::game::{GuessResult, ScoreError, Session, SessionError, SessionState};
use crate::store::{self, SnapshotStore};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// What became of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The guess was scored and appended to history.
    Applied {
        /// Per-letter verdicts for the guess.
        result: GuessResult,
        /// Session state after the append.
        state: SessionState,
    },
    /// The dictionary does not recognize the word; no attempt consumed.
    NotAWord,
    /// The dictionary could not be reached; retry the same attempt.
    LookupFailed,
    /// A newer submission superseded this one before it could apply.
    Cancelled,
    /// The session had already ended.
    Finished,
}

/// Drives one session through validated, persisted guess submissions.
pub struct GameController {
    session: Arc<Mutex<Session>>,
    dictionary: Arc<dyn Dictionary>,
    store: Arc<dyn SnapshotStore>,
    epoch: AtomicU64,
}

impl GameController {
    /// Creates a controller, restoring any saved history for the session's
    /// puzzle. Storage failures fall back to an empty session.
    #[instrument(skip_all)]
    pub fn new(
        mut session: Session,
        dictionary: Arc<dyn Dictionary>,
        store: Arc<dyn SnapshotStore>,
    ) -> Self {
        let puzzle_id = *session.config().puzzle_id();
        if let Some(snapshot) = store::load_or_empty(store.as_ref(), puzzle_id) {
            let state = session.restore(snapshot);
            info!(puzzle_id, state = %state, "Restored saved session");
        }
        Self {
            session: Arc::new(Mutex::new(session)),
            dictionary,
            store,
            epoch: AtomicU64::new(0),
        }
    }

    /// Locks the session for reading.
    pub fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().expect("session mutex poisoned")
    }

    /// Resets the session and persists the cleared history.
    #[instrument(skip(self))]
    pub fn reset(&self) {
        // Invalidate any in-flight submission as well.
        self.epoch.fetch_add(1, Ordering::SeqCst);
        let mut session = self.session();
        session.reset();
        self.persist(&session);
    }

    /// Submits a guess: validates it against the dictionary, scores it, and
    /// persists the grown history.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError`] only for the length-mismatch contract
    /// violation. Every recoverable condition is a [`SubmitOutcome`].
    #[instrument(skip(self))]
    pub async fn submit(&self, word: &str) -> Result<SubmitOutcome, ScoreError> {
        let token = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(token, "Submission started");

        let secret_hit = {
            let session = self.session();
            if session.state().is_terminal() {
                debug!("Session already over");
                return Ok(SubmitOutcome::Finished);
            }
            word == session.config().secret().as_str()
        };

        // The secret itself always scores, even when the dictionary is down.
        if !secret_hit {
            match self.dictionary.contains(word).await {
                Ok(true) => {}
                Ok(false) => {
                    return Ok(if self.superseded(token) {
                        SubmitOutcome::Cancelled
                    } else {
                        info!(word, "Guess is not a recognized word");
                        SubmitOutcome::NotAWord
                    });
                }
                Err(e) => {
                    return Ok(if self.superseded(token) {
                        SubmitOutcome::Cancelled
                    } else {
                        warn!(error = %e, "Dictionary lookup failed");
                        SubmitOutcome::LookupFailed
                    });
                }
            }
        }

        let mut session = self.session();
        if self.superseded(token) {
            debug!(token, "Submission superseded, discarding result");
            return Ok(SubmitOutcome::Cancelled);
        }

        match session.submit_guess(word) {
            Ok(state) => {
                let result = session
                    .history()
                    .last()
                    .cloned()
                    .expect("history grows on successful submit");
                self.persist(&session);
                Ok(SubmitOutcome::Applied { result, state })
            }
            Err(SessionError::GameOver) => Ok(SubmitOutcome::Finished),
            Err(SessionError::Score(e)) => Err(e),
        }
    }

    /// True when a newer submission has claimed the epoch.
    fn superseded(&self, token: u64) -> bool {
        self.epoch.load(Ordering::SeqCst) != token
    }

    /// Writes a snapshot; failures are logged and swallowed.
    fn persist(&self, session: &Session) {
        if let Err(e) = self.store.save(&session.snapshot()) {
            warn!(error = %e, "Snapshot save failed, continuing without persistence");
        }
    }
}
