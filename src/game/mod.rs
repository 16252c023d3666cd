//! Game core: scoring engine, session state machine, and share text.

mod score;
mod session;
mod share;
mod types;

pub use score::{ScoreError, score};
pub use session::{Session, SessionError, Snapshot};
pub use share::{share_html, share_text};
pub use types::{GuessResult, LetterScore, SessionState, Verdict};
