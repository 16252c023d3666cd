//! Session lifecycle and persistence round-trip tests.

use wordgrid::{PuzzleConfig, Session, SessionError, SessionState};

fn session(max_attempts: usize) -> Session {
    Session::new(PuzzleConfig::new(17, "rauch", max_attempts).expect("valid config"))
}

#[test]
fn test_full_losing_game() {
    let mut session = session(6);
    assert_eq!(session.state(), SessionState::Empty);

    for i in 1..=5 {
        let state = session.submit_guess("crane").expect("open session");
        assert_eq!(state, SessionState::InProgress);
        assert_eq!(session.history().len(), i);
    }

    let state = session.submit_guess("crane").expect("last attempt");
    assert_eq!(state, SessionState::Lost);
    assert_eq!(session.attempts_left(), 0);
}

#[test]
fn test_win_on_final_attempt() {
    let mut session = session(3);
    session.submit_guess("crane").unwrap();
    session.submit_guess("stone").unwrap();
    assert_eq!(session.submit_guess("rauch").unwrap(), SessionState::Won);
}

#[test]
fn test_terminal_state_freezes_history() {
    let mut session = session(6);
    session.submit_guess("rauch").unwrap();

    for guess in ["crane", "rauch", "stone"] {
        assert_eq!(session.submit_guess(guess), Err(SessionError::GameOver));
    }
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.state(), SessionState::Won);
}

#[test]
fn test_round_trip_preserves_state_and_history() {
    let mut played = session(6);
    played.submit_guess("crane").unwrap();
    played.submit_guess("stone").unwrap();
    let snapshot = played.snapshot();

    let mut restored = session(6);
    let state = restored.restore(snapshot);

    assert_eq!(state, played.state());
    assert_eq!(restored.history(), played.history());

    // The restored session keeps playing exactly where the original would.
    assert_eq!(restored.submit_guess("rauch").unwrap(), SessionState::Won);
}

#[test]
fn test_restore_with_changed_puzzle_starts_over() {
    let donor = {
        let mut s = Session::new(PuzzleConfig::new(16, "rauch", 6).unwrap());
        s.submit_guess("crane").unwrap();
        s.snapshot()
    };

    let mut current = session(6);
    current.submit_guess("stone").unwrap();

    assert_eq!(current.restore(donor), SessionState::Empty);
    assert!(current.history().is_empty());
}

#[test]
fn test_reset_from_every_state() {
    // Won
    let mut s = session(6);
    s.submit_guess("rauch").unwrap();
    s.reset();
    assert_eq!(s.state(), SessionState::Empty);

    // Lost
    let mut s = session(1);
    s.submit_guess("crane").unwrap();
    s.reset();
    assert_eq!(s.state(), SessionState::Empty);

    // In progress
    let mut s = session(6);
    s.submit_guess("crane").unwrap();
    s.reset();
    assert_eq!(s.state(), SessionState::Empty);
}

#[test]
fn test_snapshot_serializes_with_wire_names() {
    let mut session = session(6);
    session.submit_guess("rauch").unwrap();

    let json = serde_json::to_value(session.snapshot()).expect("serializes");
    assert_eq!(json["puzzle_id"], 17);
    assert_eq!(json["history"][0][0]["score"], "good");
    assert_eq!(json["history"][0][0]["letter"], "r");
}
