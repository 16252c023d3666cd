//! Post-game share text: the familiar emoji grid summarizing a finished
//! session without revealing any letters.

use super::session::Session;
use super::types::{SessionState, Verdict};

/// Emoji for one verdict cell.
fn cell(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Exact => "\u{1f7e9}",   // green square
        Verdict::Present => "\u{1f7e8}", // yellow square
        Verdict::Absent => "\u{2b1b}\u{fe0f}", // black square
    }
}

/// Renders the plain-text share grid for a session.
///
/// Header is `wordgrid #<id> <n>/<max>`, with `X` in place of `<n>` for a
/// lost game, followed by one emoji row per guess.
pub fn share_text(session: &Session) -> String {
    let attempts = if session.state() == SessionState::Won {
        session.history().len().to_string()
    } else {
        "X".to_string()
    };

    let mut text = format!(
        "wordgrid #{} {}/{}",
        session.config().puzzle_id(),
        attempts,
        session.config().max_attempts(),
    );

    for result in session.history() {
        text.push('\n');
        for letter in result {
            text.push_str(cell(letter.verdict));
        }
    }

    text
}

/// Renders the share grid as an HTML fragment with `<br>` line breaks.
pub fn share_html(session: &Session) -> String {
    share_text(session).replace('\n', "<br>")
}
