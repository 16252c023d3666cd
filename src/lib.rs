//! Wordgrid library - word-guessing game core and collaborators
//!
//! A player guesses a fixed-length secret word within a bounded number of
//! attempts, receiving per-letter feedback after each guess.
//!
//! # Architecture
//!
//! - **Scoring**: pure two-pass verdict assignment, correct under duplicate
//!   letters ([`score`])
//! - **Session**: append-only guess history with derived win/loss state
//!   ([`Session`])
//! - **Collaborators**: dictionary validity lookup ([`Dictionary`]),
//!   snapshot persistence ([`SnapshotStore`])
//! - **Controller**: ties the three together with at-most-one in-flight
//!   submission ([`GameController`])
//! - **Server**: stateless axum `/check` endpoint mirroring the scoring
//!   contract over HTTP
//!
//! # Example
//!
//! ```
//! use wordgrid::{PuzzleConfig, Session, SessionState};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = PuzzleConfig::new(1, "rauch", 6)?;
//! let mut session = Session::new(config);
//!
//! session.submit_guess("crane")?;
//! assert_eq!(session.state(), SessionState::InProgress);
//!
//! session.submit_guess("rauch")?;
//! assert_eq!(session.state(), SessionState::Won);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod dictionary;
mod game;
mod server;
mod store;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_MAX_ATTEMPTS, PuzzleConfig, puzzle_id_for};

// Crate-level exports - Game core
pub use game::{
    GuessResult, LetterScore, ScoreError, Session, SessionError, SessionState, Snapshot, Verdict,
    score, share_html, share_text,
};

// Crate-level exports - Collaborators
pub use dictionary::{ApiDictionary, Dictionary, LookupError, WordList};
pub use store::{FileStore, MemoryStore, SnapshotStore, StoreError, load_or_empty};

// Crate-level exports - Controller
pub use controller::{GameController, SubmitOutcome};

// Crate-level exports - Server
pub use server::{AppState, CheckParams, CheckResponse, ErrorCode, router, serve};

// Crate-level exports - Terminal client
pub use tui::run_play;
