use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::constraints::WordConstraints;
use crate::data::{Corpus, Word};
use crate::results::{strict_verdicts_for_guess, verdicts_for_guess, GameResult, GuessOutcome};
use crate::strategies::GuessStrategy;

/// Fixed parameters for a simulation, constructed once and passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// The fixed word length.
    pub word_len: usize,
    /// Statistics threshold only: games are never cut off at this many
    /// attempts, but the batch report counts how many exceeded it.
    pub max_attempts: u32,
    /// If true, feedback caps duplicate-letter credit at the number of
    /// unmatched occurrences in the answer (the canonical puzzle rule)
    /// instead of the plain membership rule.
    pub strict_feedback: bool,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            word_len: 5,
            max_attempts: 6,
            strict_feedback: false,
        }
    }
}

/// Plays one game against a fixed answer until it is solved or no
/// candidates remain.
///
/// Each round filters the candidates against the accumulated constraints,
/// asks the strategy for a guess, generates feedback against `answer`, and
/// applies it. There is no attempt cap: the loop only ends when every
/// position is confirmed, or when the candidate list becomes empty (which
/// means the constraints are contradictory or the answer is not in the
/// corpus).
pub fn play_game(
    answer: &str,
    corpus: &Corpus,
    config: &GameConfig,
    strategy: &dyn GuessStrategy,
) -> GameResult {
    let mut constraints = WordConstraints::new(config.word_len);
    let mut candidates: Vec<&Word> = corpus.words().iter().collect();
    let mut guesses: Vec<Box<str>> = Vec::new();

    loop {
        candidates.retain(|word| constraints.is_satisfied_by(&word.text));
        let guess: &str = match strategy.select_guess(&candidates, &constraints) {
            Some(word) => &word.text,
            None => {
                log::debug!(
                    "no candidates left for answer {:?} after {} guesses",
                    answer,
                    guesses.len()
                );
                return GameResult::OutOfCandidates(guesses);
            }
        };
        guesses.push(guess.into());

        let verdicts = if config.strict_feedback {
            strict_verdicts_for_guess(guess, answer)
        } else {
            verdicts_for_guess(guess, answer)
        };
        let outcome = GuessOutcome { guess, verdicts };
        if constraints.update(&outcome) {
            return GameResult::Solved(guesses);
        }
    }
}

/// The outcome of one game within a batch run.
#[derive(Debug, PartialEq, Eq)]
pub struct GameRecord {
    /// The answer's index in the corpus.
    pub index: usize,
    pub answer: Box<str>,
    pub result: GameResult,
}

/// Aggregated statistics for a full-corpus run.
#[derive(Debug)]
pub struct BatchReport {
    /// One record per corpus word, in corpus order.
    pub records: Vec<GameRecord>,
    /// Total attempts across solved games.
    pub total_attempts: u64,
    /// Solved games that needed more than `max_attempts` guesses.
    pub exceeded_max: usize,
    /// Games abandoned because no candidates remained.
    pub failed: usize,
    pub corpus_size: usize,
    pub elapsed: Duration,
}

/// Runs one game per corpus word, treating each word as the hidden answer,
/// and aggregates attempt statistics.
///
/// Games are independent, so they run in parallel over rayon's worker pool;
/// each game gets its own constraint state and candidate list while sharing
/// the corpus by reference. Records come back in corpus order.
pub fn evaluate_corpus(
    corpus: &Corpus,
    config: &GameConfig,
    strategy: &dyn GuessStrategy,
) -> BatchReport {
    let start = Instant::now();
    let records: Vec<GameRecord> = corpus
        .words()
        .par_iter()
        .enumerate()
        .map(|(index, word)| GameRecord {
            index,
            answer: word.text.clone(),
            result: play_game(&word.text, corpus, config, strategy),
        })
        .collect();
    let elapsed = start.elapsed();

    let mut total_attempts = 0u64;
    let mut exceeded_max = 0;
    let mut failed = 0;
    for record in &records {
        match &record.result {
            GameResult::Solved(guesses) => {
                total_attempts += guesses.len() as u64;
                if guesses.len() as u32 > config.max_attempts {
                    exceeded_max += 1;
                }
            }
            GameResult::OutOfCandidates(_) => failed += 1,
        }
    }

    BatchReport {
        records,
        total_attempts,
        exceeded_max,
        failed,
        corpus_size: corpus.len(),
        elapsed,
    }
}
