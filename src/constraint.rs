//! Constraint accumulation and candidate filtering.
//!
//! A [`ConstraintState`] is the knowledge gathered about the solution so
//! far: letters fixed in place, letters known present but unplaced, and
//! letters excluded. States are immutable; folding feedback in produces a
//! new value.

use crate::feedback::{Feedback, FeedbackPattern};
use crate::{Word, WORD_LENGTH};

/// Marker for an unknown position in the greens template.
pub const WILDCARD: u8 = b'_';

/// A set of letters `'a'..='z'`, packed into a 26-bit mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    pub fn insert(&mut self, letter: u8) {
        self.0 |= 1 << (letter - b'a');
    }

    pub fn contains(self, letter: u8) -> bool {
        self.0 & (1 << (letter - b'a')) != 0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Letters in `self` but not in `other`.
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

/// Accumulated knowledge about the solution.
///
/// Invariants, restored after every construction: a letter fixed in the
/// greens template is in neither mask, and a letter in the yellow mask is
/// not in the grey mask. The grey mask therefore means "no occurrences
/// beyond those already accounted for by greens".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintState {
    greens: [u8; WORD_LENGTH],
    yellows: LetterSet,
    greys: LetterSet,
}

impl Default for ConstraintState {
    fn default() -> Self {
        Self::new([WILDCARD; WORD_LENGTH], LetterSet::EMPTY, LetterSet::EMPTY)
    }
}

impl ConstraintState {
    /// Build a state from external constraints, reconciling the masks.
    pub fn new(greens: [u8; WORD_LENGTH], yellows: LetterSet, greys: LetterSet) -> Self {
        Self {
            greens,
            yellows,
            greys,
        }
        .reconciled()
    }

    pub fn greens(&self) -> [u8; WORD_LENGTH] {
        self.greens
    }

    pub fn yellows(&self) -> LetterSet {
        self.yellows
    }

    pub fn greys(&self) -> LetterSet {
        self.greys
    }

    /// The set of letters fixed anywhere in the greens template.
    fn green_letters(&self) -> LetterSet {
        let mut letters = LetterSet::EMPTY;
        for &c in &self.greens {
            if c != WILDCARD {
                letters.insert(c);
            }
        }
        letters
    }

    /// Occurrence count per letter fixed in the greens template.
    fn green_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &c in &self.greens {
            if c != WILDCARD {
                counts[(c - b'a') as usize] += 1;
            }
        }
        counts
    }

    // The stronger finding wins: a fixed letter leaves both masks, a
    // present letter leaves the grey mask.
    fn reconciled(mut self) -> Self {
        let fixed = self.green_letters();
        self.yellows = self.yellows.difference(fixed);
        self.greys = self.greys.difference(fixed.union(self.yellows));
        self
    }

    /// Fold one guess's feedback into a new state; `self` is unchanged.
    ///
    /// A letter can be green at one occurrence, yellow at another, and grey
    /// for any occurrence beyond those accounted for, so the merged masks
    /// are reconciled before the state is returned.
    pub fn combine(&self, guess: Word, pattern: FeedbackPattern) -> Self {
        let mut next = *self;
        let digits = pattern.to_feedbacks();
        let letters = guess.letters();
        for i in 0..WORD_LENGTH {
            match digits[i] {
                Feedback::Correct => next.greens[i] = letters[i],
                Feedback::Present => next.yellows.insert(letters[i]),
                Feedback::Absent => next.greys.insert(letters[i]),
            }
        }
        next.reconciled()
    }

    /// Reduce `words` to those still consistent with this state.
    ///
    /// A word is rejected if a fixed green position mismatches, a strictly
    /// grey letter occurs at all, a letter occurs fewer times than the
    /// greens and yellows require, or a grey-flagged letter occurs more
    /// times than its green occurrences account for. Input order is kept.
    pub fn filter(&self, words: &[Word]) -> Vec<Word> {
        let fixed = self.green_letters();
        let green_counts = self.green_counts();

        let mut min_counts = green_counts;
        for letter in self.yellows.iter() {
            let idx = (letter - b'a') as usize;
            if min_counts[idx] == 0 {
                min_counts[idx] = 1;
            }
        }
        // Grey letters with no green or yellow accounting exclude a word
        // outright.
        let strict_greys = self.greys.difference(fixed.union(self.yellows));

        let mut possible = Vec::new();
        'words: for &word in words {
            let letters = word.letters();
            for i in 0..WORD_LENGTH {
                if self.greens[i] != WILDCARD && self.greens[i] != letters[i] {
                    continue 'words;
                }
            }
            let counts = word.letter_counts();
            for idx in 0..26 {
                let letter = b'a' + idx as u8;
                if counts[idx] < min_counts[idx] {
                    continue 'words;
                }
                if counts[idx] == 0 {
                    continue;
                }
                if strict_greys.contains(letter) {
                    continue 'words;
                }
                if self.greys.contains(letter) && counts[idx] > green_counts[idx] {
                    continue 'words;
                }
            }
            possible.push(word);
        }
        possible
    }
}
