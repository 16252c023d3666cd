//! Scoring engine: compares a guess against the secret word.
//!
//! The two-pass algorithm consumes a shared per-letter pool so duplicate
//! letters are credited at most once per occurrence in the secret. Exact
//! matches claim their letters first; remaining letters are then handed out
//! to misplaced positions left to right.

use super::types::{GuessResult, LetterScore, Verdict};
use derive_more::{Display, Error};
use std::collections::HashMap;
use tracing::instrument;

/// Errors that can occur when scoring a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ScoreError {
    /// Guess and secret have different lengths. This is a caller bug; the
    /// engine never truncates.
    #[display("guess has {guess_len} letters but the secret has {secret_len}")]
    LengthMismatch {
        /// Character count of the guess.
        guess_len: usize,
        /// Character count of the secret.
        secret_len: usize,
    },
}

/// Scores `guess` against `secret`, one verdict per position.
///
/// Pure and deterministic: identical inputs always produce identical output.
///
/// # Errors
///
/// Returns [`ScoreError::LengthMismatch`] when the inputs differ in length.
#[instrument(skip(secret))]
pub fn score(guess: &str, secret: &str) -> Result<GuessResult, ScoreError> {
    let guess: Vec<char> = guess.chars().collect();
    let secret: Vec<char> = secret.chars().collect();

    if guess.len() != secret.len() {
        return Err(ScoreError::LengthMismatch {
            guess_len: guess.len(),
            secret_len: secret.len(),
        });
    }

    // Pool of letters still available to credit.
    let mut pool: HashMap<char, usize> = HashMap::new();
    for &letter in &secret {
        *pool.entry(letter).or_insert(0) += 1;
    }

    let mut verdicts = vec![Verdict::Absent; guess.len()];

    // Pass 1: exact matches claim their letter from the pool first, so a
    // misplaced duplicate can never steal it.
    for i in (0..guess.len()).rev() {
        if guess[i] == secret[i] {
            verdicts[i] = Verdict::Exact;
            take(&mut pool, guess[i]);
        }
    }

    // Pass 2: left to right, misplaced letters consume what remains. Once a
    // letter's count hits zero, later duplicates stay absent.
    for i in 0..guess.len() {
        if verdicts[i] != Verdict::Exact && take(&mut pool, guess[i]) {
            verdicts[i] = Verdict::Present;
        }
    }

    Ok(GuessResult::new(
        guess
            .into_iter()
            .zip(verdicts)
            .map(|(letter, verdict)| LetterScore::new(letter, verdict))
            .collect(),
    ))
}

/// Removes one occurrence of `letter` from the pool. Returns false when none
/// remain.
fn take(pool: &mut HashMap<char, usize>, letter: char) -> bool {
    match pool.get_mut(&letter) {
        Some(count) if *count > 0 => {
            *count -= 1;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdicts(guess: &str, secret: &str) -> Vec<Verdict> {
        score(guess, secret)
            .expect("equal lengths")
            .letters()
            .iter()
            .map(|s| s.verdict)
            .collect()
    }

    #[test]
    fn test_identical_words_all_exact() {
        assert_eq!(verdicts("rauch", "rauch"), vec![Verdict::Exact; 5]);
    }

    #[test]
    fn test_anagram_all_present() {
        // "uchra" permutes "rauch" with no letter left in place.
        assert_eq!(verdicts("uchra", "rauch"), vec![Verdict::Present; 5]);
    }

    #[test]
    fn test_reversed_word_keeps_fixed_point_exact() {
        // Reversing "rauch" leaves the middle 'u' in place.
        assert_eq!(
            verdicts("hcuar", "rauch"),
            vec![
                Verdict::Present,
                Verdict::Present,
                Verdict::Exact,
                Verdict::Present,
                Verdict::Present,
            ]
        );
    }

    #[test]
    fn test_disjoint_letters_all_absent() {
        assert_eq!(verdicts("stomp", "rauch"), vec![Verdict::Absent; 5]);
    }

    #[test]
    fn test_no_duplicate_letters_simple_classification() {
        // secret "crate": 'c' exact, 'r' exact, 'e' misplaced, 'x'/'z' absent.
        assert_eq!(
            verdicts("crexz", "crate"),
            vec![
                Verdict::Exact,
                Verdict::Exact,
                Verdict::Present,
                Verdict::Absent,
                Verdict::Absent,
            ]
        );
    }

    #[test]
    fn test_duplicate_letters_consume_pool() {
        // secret "allee" holds a*1 l*2 e*2. Guess "eelle":
        //   pass 1 marks positions 2 ('l') and 4 ('e') exact, leaving a, l, e.
        //   pass 2: pos 0 'e' takes the last e, pos 1 'e' finds none,
        //   pos 3 'l' takes the last l.
        assert_eq!(
            verdicts("eelle", "allee"),
            vec![
                Verdict::Present,
                Verdict::Absent,
                Verdict::Exact,
                Verdict::Present,
                Verdict::Exact,
            ]
        );
    }

    #[test]
    fn test_duplicate_credit_after_exact_claim() {
        // secret "abbey" holds one 'e' and two 'b's. Guess "bebop":
        //   pass 1 marks pos 2 ('b') exact, leaving a, b, e, y.
        //   pass 2: pos 0 'b' takes the last b, pos 1 'e' takes the e;
        //   'o' and 'p' are absent.
        assert_eq!(
            verdicts("bebop", "abbey"),
            vec![
                Verdict::Present,
                Verdict::Present,
                Verdict::Exact,
                Verdict::Absent,
                Verdict::Absent,
            ]
        );
    }

    #[test]
    fn test_exhausted_pool_leaves_later_duplicates_absent() {
        // secret "crane" has one 'e'; only the first misplaced 'e' is credited.
        assert_eq!(
            verdicts("eexyz", "crane"),
            vec![
                Verdict::Present,
                Verdict::Absent,
                Verdict::Absent,
                Verdict::Absent,
                Verdict::Absent,
            ]
        );
    }

    #[test]
    fn test_exact_match_wins_over_earlier_misplaced_duplicate() {
        // secret "maple" has one 'p'. The exact 'p' at position 2 claims it
        // during pass 1, so the misplaced 'p' at position 0 gets nothing.
        assert_eq!(
            verdicts("pxpyz", "maple"),
            vec![
                Verdict::Absent,
                Verdict::Absent,
                Verdict::Exact,
                Verdict::Absent,
                Verdict::Absent,
            ]
        );
    }

    #[test]
    fn test_score_is_idempotent() {
        let first = score("bebop", "abbey").unwrap();
        let second = score("bebop", "abbey").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result = score("word", "rauch");
        assert_eq!(
            result,
            Err(ScoreError::LengthMismatch {
                guess_len: 4,
                secret_len: 5
            })
        );
    }

    #[test]
    fn test_preserves_guess_letters_in_order() {
        let result = score("bebop", "abbey").unwrap();
        assert_eq!(result.word(), "bebop");
    }
}
