//! Minimax guess scoring, parallel evaluation, and ranking.
//!
//! Each candidate guess partitions the remaining solutions by the feedback
//! it would produce. The score of a guess is the size of its largest
//! partition, i.e. the worst-case number of solutions left indistinguishable
//! after playing it, so lower scores are better.

use crate::constraint::ConstraintState;
use crate::feedback::FeedbackPattern;
use crate::Word;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Sentinel score assigned when scoring a candidate fails an internal
/// check; it ranks that candidate last without aborting the run.
pub const INVALID_SCORE: usize = usize::MAX;

/// How solution groups are keyed when scoring a guess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScorePolicy {
    /// Group by the constraint state reached after folding the feedback
    /// into the current state. Feedback patterns that reconcile to the same
    /// state pool their counts, so the score reflects the true remaining
    /// search space.
    #[default]
    ResultingState,
    /// Group by the raw feedback pattern.
    RawPattern,
}

/// A candidate guess and its worst-case partition size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredGuess {
    pub guess: Word,
    pub score: usize,
    /// Whether the guess is itself one of the remaining solutions.
    pub is_possible_solution: bool,
}

/// Score one candidate guess against the remaining solutions.
///
/// Returns 0 for an empty solution set. A nonempty solution set must
/// produce at least one partition; if it does not, or a feedback pattern
/// falls outside the valid range, the defect is reported on stderr and the
/// guess gets [`INVALID_SCORE`].
pub fn score_guess(
    state: &ConstraintState,
    guess: Word,
    solutions: &[Word],
    policy: ScorePolicy,
) -> usize {
    if solutions.is_empty() {
        return 0;
    }

    let mut pattern_counts = [0u32; FeedbackPattern::NUM_PATTERNS];
    for &solution in solutions {
        let pattern = FeedbackPattern::calculate(guess, solution);
        let index = pattern.0 as usize;
        if index < FeedbackPattern::NUM_PATTERNS {
            pattern_counts[index] += 1;
        } else {
            eprintln!(
                "warning: feedback pattern index {} out of range for guess {}",
                index, guess
            );
        }
    }

    let largest = match policy {
        ScorePolicy::RawPattern => pattern_counts.iter().copied().max().unwrap_or(0),
        ScorePolicy::ResultingState => {
            let mut state_counts: HashMap<ConstraintState, u32> = HashMap::new();
            for (index, &count) in pattern_counts.iter().enumerate() {
                if count == 0 {
                    continue;
                }
                let next = state.combine(guess, FeedbackPattern(index as u8));
                *state_counts.entry(next).or_insert(0) += count;
            }
            state_counts.values().copied().max().unwrap_or(0)
        }
    };

    if largest == 0 {
        eprintln!(
            "warning: no partitions produced for guess {} over {} solutions",
            guess,
            solutions.len()
        );
        return INVALID_SCORE;
    }
    largest as usize
}

/// Score every candidate guess concurrently.
///
/// The output is pre-sized to the candidate count and each task writes only
/// its own slot, so the result order always matches `candidates` no matter
/// how the tasks are scheduled. `completed` is bumped once per finished
/// evaluation with relaxed ordering; it is advisory progress only.
pub fn evaluate_all(
    state: &ConstraintState,
    candidates: &[Word],
    solutions: &[Word],
    policy: ScorePolicy,
    completed: &AtomicUsize,
) -> Vec<ScoredGuess> {
    let solution_set: HashSet<Word> = solutions.iter().copied().collect();
    let mut scored: Vec<ScoredGuess> = candidates
        .iter()
        .map(|&guess| ScoredGuess {
            guess,
            score: 0,
            is_possible_solution: solution_set.contains(&guess),
        })
        .collect();

    scored.par_iter_mut().for_each(|entry| {
        entry.score = score_guess(state, entry.guess, solutions, policy);
        completed.fetch_add(1, Ordering::Relaxed);
    });

    scored
}

/// Rank scored guesses and keep the best `n`.
///
/// Ascending by score; on equal scores a guess that is itself a possible
/// solution ranks first, since playing it can win outright. The sort is
/// stable, so remaining ties keep their input order.
pub fn top_guesses(mut scored: Vec<ScoredGuess>, n: usize) -> Vec<ScoredGuess> {
    scored.sort_by(|a, b| {
        a.score
            .cmp(&b.score)
            .then(b.is_possible_solution.cmp(&a.is_possible_solution))
    });
    scored.truncate(n);
    scored
}
