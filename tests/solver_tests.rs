use std::sync::atomic::{AtomicUsize, Ordering};
use wordle_minimax::constraint::WILDCARD;
use wordle_minimax::{
    evaluate_all, score_guess, top_guesses, ConstraintState, LetterSet, ScorePolicy, ScoredGuess,
    Word, INVALID_SCORE, WORD_LENGTH,
};

fn word(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|s| word(s)).collect()
}

fn greens(pattern: &str) -> [u8; WORD_LENGTH] {
    let mut template = [WILDCARD; WORD_LENGTH];
    for (i, b) in pattern.bytes().enumerate() {
        template[i] = b;
    }
    template
}

#[test]
fn test_empty_solutions_score_zero() {
    let state = ConstraintState::default();
    for policy in [ScorePolicy::ResultingState, ScorePolicy::RawPattern] {
        assert_eq!(score_guess(&state, word("crane"), &[], policy), 0);
    }
}

#[test]
fn test_single_solution_scores_one() {
    let state = ConstraintState::default();
    for policy in [ScorePolicy::ResultingState, ScorePolicy::RawPattern] {
        assert_eq!(score_guess(&state, word("crane"), &words(&["slate"]), policy), 1);
    }
}

#[test]
fn test_apple_scenario() {
    let dictionary = words(&["apple", "angle", "ankle", "ample"]);
    let state = ConstraintState::default();

    // No constraints: every word survives filtering.
    assert_eq!(state.filter(&dictionary), dictionary);

    // "angle" and "ankle" give "apple" the same feedback (and the same
    // resulting state), so the largest group has size 2.
    assert_eq!(
        score_guess(&state, word("apple"), &dictionary, ScorePolicy::ResultingState),
        2
    );
    assert_eq!(
        score_guess(&state, word("apple"), &dictionary, ScorePolicy::RawPattern),
        2
    );
}

#[test]
fn test_score_is_largest_group_size() {
    // "blank" splits {blank, plank, flank, crank} into groups of at most 2.
    let state = ConstraintState::new(greens("__ank"), LetterSet::EMPTY, LetterSet::EMPTY);
    let solutions = words(&["blank", "plank", "flank", "crank"]);

    assert_eq!(
        score_guess(&state, word("blank"), &solutions, ScorePolicy::ResultingState),
        2
    );
    // "crank" leaves {blank, plank, flank} indistinguishable.
    assert_eq!(
        score_guess(&state, word("crank"), &solutions, ScorePolicy::ResultingState),
        3
    );
}

#[test]
fn test_policy_grouping_differs_when_states_coincide() {
    // 's' is already known present. Against "bbbsb" the leading 's' comes
    // back yellow; against "bbbbb" it comes back grey, but the grey is
    // dropped again because 's' stays in the yellow mask. Two distinct
    // patterns, one resulting state.
    let mut yellows = LetterSet::EMPTY;
    yellows.insert(b's');
    let state = ConstraintState::new([WILDCARD; WORD_LENGTH], yellows, LetterSet::EMPTY);
    let solutions = words(&["bbbsb", "bbbbb"]);

    assert_eq!(
        score_guess(&state, word("saaaa"), &solutions, ScorePolicy::RawPattern),
        1
    );
    assert_eq!(
        score_guess(&state, word("saaaa"), &solutions, ScorePolicy::ResultingState),
        2
    );
}

#[test]
fn test_evaluate_all_preserves_order_and_counts() {
    let dictionary = words(&["blank", "plank", "flank", "crank", "brick", "table"]);
    let state = ConstraintState::new(greens("__ank"), LetterSet::EMPTY, LetterSet::EMPTY);
    let solutions = state.filter(&dictionary);
    assert_eq!(solutions, words(&["blank", "plank", "flank", "crank"]));

    let completed = AtomicUsize::new(0);
    let scored = evaluate_all(
        &state,
        &dictionary,
        &solutions,
        ScorePolicy::ResultingState,
        &completed,
    );

    assert_eq!(scored.len(), dictionary.len());
    for (entry, &candidate) in scored.iter().zip(&dictionary) {
        assert_eq!(entry.guess, candidate);
        assert_eq!(entry.is_possible_solution, solutions.contains(&candidate));
    }
    assert_eq!(completed.load(Ordering::Relaxed), dictionary.len());
}

#[test]
fn test_evaluate_all_is_deterministic() {
    let dictionary = words(&["blank", "plank", "flank", "crank", "brick", "table"]);
    let state = ConstraintState::new(greens("__ank"), LetterSet::EMPTY, LetterSet::EMPTY);
    let solutions = state.filter(&dictionary);

    let first = evaluate_all(
        &state,
        &dictionary,
        &solutions,
        ScorePolicy::ResultingState,
        &AtomicUsize::new(0),
    );
    let second = evaluate_all(
        &state,
        &dictionary,
        &solutions,
        ScorePolicy::ResultingState,
        &AtomicUsize::new(0),
    );
    assert_eq!(first, second);
    assert_eq!(top_guesses(first, 10), top_guesses(second, 10));
}

#[test]
fn test_ranking_scenario() {
    let dictionary = words(&["blank", "plank", "flank", "crank", "brick", "table"]);
    let state = ConstraintState::new(greens("__ank"), LetterSet::EMPTY, LetterSet::EMPTY);
    let solutions = state.filter(&dictionary);

    let scored = evaluate_all(
        &state,
        &dictionary,
        &solutions,
        ScorePolicy::ResultingState,
        &AtomicUsize::new(0),
    );
    let ranked = top_guesses(scored, 10);

    // Score 2 guesses that are possible solutions come first, in dictionary
    // order; then the score 2 outsiders; "crank" (score 3) is last.
    assert_eq!(ranked.len(), dictionary.len());
    assert_eq!(ranked[0].guess, word("blank"));
    assert_eq!(ranked[1].guess, word("plank"));
    assert_eq!(ranked[2].guess, word("flank"));
    assert!(ranked[0].is_possible_solution);
    assert_eq!(ranked[0].score, 2);
    assert_eq!(ranked[3].guess, word("brick"));
    assert_eq!(ranked[4].guess, word("table"));
    assert!(!ranked[3].is_possible_solution);
    assert_eq!(ranked[5].guess, word("crank"));
    assert_eq!(ranked[5].score, 3);
}

#[test]
fn test_ranking_prefers_possible_solutions_on_ties() {
    let scored = vec![
        ScoredGuess {
            guess: word("aaaaa"),
            score: 2,
            is_possible_solution: false,
        },
        ScoredGuess {
            guess: word("bbbbb"),
            score: 2,
            is_possible_solution: true,
        },
        ScoredGuess {
            guess: word("ccccc"),
            score: 1,
            is_possible_solution: false,
        },
    ];
    let ranked = top_guesses(scored, 3);
    assert_eq!(ranked[0].guess, word("ccccc"));
    assert_eq!(ranked[1].guess, word("bbbbb"));
    assert_eq!(ranked[2].guess, word("aaaaa"));
}

#[test]
fn test_sentinel_score_ranks_last() {
    let scored = vec![
        ScoredGuess {
            guess: word("aaaaa"),
            score: INVALID_SCORE,
            is_possible_solution: true,
        },
        ScoredGuess {
            guess: word("bbbbb"),
            score: 7,
            is_possible_solution: false,
        },
    ];
    let ranked = top_guesses(scored, 2);
    assert_eq!(ranked[0].guess, word("bbbbb"));
    assert_eq!(ranked[1].score, INVALID_SCORE);
}

#[test]
fn test_ranking_truncates() {
    let scored: Vec<ScoredGuess> = (0..5usize)
        .map(|i| ScoredGuess {
            guess: word("crane"),
            score: i,
            is_possible_solution: false,
        })
        .collect();
    assert_eq!(top_guesses(scored, 2).len(), 2);
}
