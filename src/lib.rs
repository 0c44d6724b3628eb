//! # Wordle Minimax
//!
//! A multithreaded Wordle solver using a minimax strategy.
//!
//! Given the constraints accumulated so far (letters fixed in place, letters
//! known present but unplaced, letters excluded), the solver scores every
//! candidate guess by the size of the largest group of solutions that would
//! remain indistinguishable after feedback, and ranks the guesses so the
//! smallest worst case comes first.

pub mod constraint;
pub mod feedback;
pub mod progress;
pub mod solver;

pub use constraint::{ConstraintState, LetterSet};
pub use feedback::{Feedback, FeedbackPattern};
pub use solver::{evaluate_all, score_guess, top_guesses, ScorePolicy, ScoredGuess, INVALID_SCORE};

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// A dictionary word: exactly [`WORD_LENGTH`] ASCII lowercase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse a word, accepting only `WORD_LENGTH` lowercase ASCII letters.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != WORD_LENGTH {
            return None;
        }
        let mut letters = [0u8; WORD_LENGTH];
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_lowercase() {
                return None;
            }
            letters[i] = b;
        }
        Some(Self(letters))
    }

    pub fn letters(&self) -> [u8; WORD_LENGTH] {
        self.0
    }

    /// Occurrence count per letter, indexed `0..26`.
    pub fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &b in &self.0 {
            counts[(b - b'a') as usize] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

/// Load and normalize a dictionary from a newline-delimited word list.
///
/// Each line is trimmed and lowercased; only exact-length words made of
/// lowercase letters are kept. Duplicates are dropped and the result is
/// sorted. An empty result after normalization is an error.
pub fn load_dictionary(path: &Path) -> io::Result<Vec<Word>> {
    let contents = fs::read_to_string(path)?;
    let mut unique = BTreeSet::new();
    for line in contents.lines() {
        let lowered = line.trim().to_lowercase();
        if let Some(word) = Word::parse(&lowered) {
            unique.insert(word);
        }
    }
    if unique.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("no valid words found in {}", path.display()),
        ));
    }
    Ok(unique.into_iter().collect())
}
