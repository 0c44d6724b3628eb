//! Wordle Minimax CLI
//!
//! Single-shot solver: pass the constraints known so far, get back the
//! remaining solutions and the guesses with the best worst case.

use std::env;
use std::path::Path;
use std::process;
use std::time::Instant;
use wordle_minimax::constraint::WILDCARD;
use wordle_minimax::progress::ProgressReporter;
use wordle_minimax::{
    evaluate_all, load_dictionary, top_guesses, ConstraintState, LetterSet, ScorePolicy, Word,
    WORD_LENGTH,
};

const WORD_LIST_FILE: &str = "valid-wordle-words.txt";
const MAX_RESULTS_TO_SHOW: usize = 10;
const MAX_SOLUTIONS_TO_PRINT: usize = 10;
/// When false, only the remaining possible solutions are tried as guesses.
const EVALUATE_ALL_WORDS_AS_GUESSES: bool = true;

fn usage_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    eprintln!("Usage: wordle-minimax <greens> <yellows> <greys>");
    eprintln!(
        "  greens:  {}-character pattern, 'a'-'z' for fixed letters, '_' for unknown",
        WORD_LENGTH
    );
    eprintln!("  yellows: letters present but unplaced, or '_' for none");
    eprintln!("  greys:   letters confirmed absent, or '_' for none");
    process::exit(1);
}

fn parse_greens(input: &str) -> [u8; WORD_LENGTH] {
    let bytes = input.as_bytes();
    if bytes.len() != WORD_LENGTH {
        usage_error(&format!(
            "greens pattern must be exactly {} characters",
            WORD_LENGTH
        ));
    }
    let mut greens = [WILDCARD; WORD_LENGTH];
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            WILDCARD => {}
            b'a'..=b'z' => greens[i] = b,
            _ => usage_error("greens pattern may only contain 'a'-'z' or '_'"),
        }
    }
    greens
}

fn parse_letters(input: &str, label: &str) -> LetterSet {
    let mut set = LetterSet::EMPTY;
    if input == "_" {
        return set;
    }
    for &b in input.as_bytes() {
        match b {
            b'a'..=b'z' => set.insert(b),
            _ => usage_error(&format!("{} may only contain 'a'-'z', or be '_'", label)),
        }
    }
    set
}

fn main() {
    let overall_start = Instant::now();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        usage_error("expected exactly three arguments");
    }
    let greens_input = args[1].to_lowercase();
    let yellows_input = args[2].to_lowercase();
    let greys_input = args[3].to_lowercase();

    let greens = parse_greens(&greens_input);
    let yellows = parse_letters(&yellows_input, "yellows");
    let greys = parse_letters(&greys_input, "greys");
    let state = ConstraintState::new(greens, yellows, greys);

    println!("Loading word list from '{}'...", WORD_LIST_FILE);
    let load_start = Instant::now();
    let words = match load_dictionary(Path::new(WORD_LIST_FILE)) {
        Ok(words) => words,
        Err(err) => {
            eprintln!("Error: cannot load '{}': {}", WORD_LIST_FILE, err);
            process::exit(1);
        }
    };
    println!(
        "Loaded {} valid words. ({:.2}s)",
        words.len(),
        load_start.elapsed().as_secs_f64()
    );

    println!();
    println!("Filtering possible solutions...");
    let filter_start = Instant::now();
    let solutions = state.filter(&words);
    println!(
        "Found {} possible solutions matching criteria. (Filter time: {:.2}s)",
        solutions.len(),
        filter_start.elapsed().as_secs_f64()
    );
    if !solutions.is_empty() && solutions.len() <= MAX_SOLUTIONS_TO_PRINT {
        println!();
        println!("Possible solutions ({} total):", solutions.len());
        for solution in &solutions {
            println!("- {}", solution.to_string().to_uppercase());
        }
    }

    if solutions.is_empty() {
        println!();
        println!("No possible words match the given constraints.");
        return;
    }
    if solutions.len() <= 2 {
        println!();
        if solutions.len() == 1 {
            println!("Solution found.");
        } else {
            println!("Only 2 solutions left; guess either one.");
        }
        return;
    }

    println!();
    println!("Evaluating best next guesses...");
    let eval_start = Instant::now();
    let candidates: &[Word] = if EVALUATE_ALL_WORDS_AS_GUESSES {
        &words
    } else {
        &solutions
    };
    let reporter = ProgressReporter::start(candidates.len());
    let counter = reporter.counter();
    let scored = evaluate_all(&state, candidates, &solutions, ScorePolicy::default(), &counter);
    reporter.finish();
    println!(
        "Evaluation complete. (Eval time: {:.2}s)",
        eval_start.elapsed().as_secs_f64()
    );

    let ranked = top_guesses(scored, MAX_RESULTS_TO_SHOW);
    println!();
    match ranked.first() {
        Some(best) => println!(
            "Best score (minimum worst-case remaining solutions): {}",
            best.score
        ),
        None => println!("No valid guesses evaluated."),
    }
    println!("Top guesses:");
    let mut showed_marker = false;
    for (i, entry) in ranked.iter().enumerate() {
        let marker = if entry.is_possible_solution { "*" } else { "" };
        if !marker.is_empty() {
            showed_marker = true;
        }
        println!(
            "  {}. {} (Score: {}){}",
            i + 1,
            entry.guess.to_string().to_uppercase(),
            entry.score,
            marker
        );
    }
    if showed_marker {
        println!();
        println!("  (*) = Guess is also a possible solution.");
    }

    println!();
    println!(
        "Total execution time: {:.2}s",
        overall_start.elapsed().as_secs_f64()
    );
}
