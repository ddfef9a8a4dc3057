use std::fs::File;
use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use wordle_sim::*;

/// Simulates solving Wordle-style puzzles over a frequency-ranked corpus to
/// benchmark guessing strategies.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to a corpus file with one `<frequency> <word>` entry per line.
    #[arg(short = 'f', long)]
    words_file: String,

    /// The guessing strategy to simulate.
    #[arg(long, value_enum, default_value = "immediate")]
    strategy: StrategyArg,

    /// Cap duplicate-letter credit at the answer's unmatched occurrences
    /// (the canonical puzzle rule) instead of the plain membership rule.
    #[arg(long)]
    strict_feedback: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate one game per corpus word and print aggregate statistics.
    Benchmark,
    /// Simulate a single game with the given word as the answer.
    Single { word: String },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    /// Always guess the most frequent remaining candidate.
    Immediate,
    /// Guess the candidate sharing the most positional letters with the
    /// other candidates.
    MaxSimilarity,
}

impl StrategyArg {
    fn strategy(self) -> &'static dyn GuessStrategy {
        match self {
            StrategyArg::Immediate => &ImmediateStrategy,
            StrategyArg::MaxSimilarity => &MaxSimilarityStrategy,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = GameConfig {
        strict_feedback: args.strict_feedback,
        ..GameConfig::default()
    };
    let corpus = match load_corpus(&args.words_file, config.word_len) {
        Ok(corpus) => corpus,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };
    log::info!("loaded {} words from {}", corpus.len(), args.words_file);

    let strategy = args.strategy.strategy();
    match args.command {
        Command::Benchmark => run_benchmark(&corpus, &config, strategy),
        Command::Single { word } => run_single_game(&word, &corpus, &config, strategy),
    }
}

fn load_corpus(path: &str, word_len: usize) -> Result<Corpus, CorpusError> {
    let mut reader = io::BufReader::new(File::open(path)?);
    Corpus::from_reader(&mut reader, word_len)
}

fn run_benchmark(corpus: &Corpus, config: &GameConfig, strategy: &dyn GuessStrategy) -> ExitCode {
    let report = evaluate_corpus(corpus, config, strategy);

    for record in &report.records {
        match &record.result {
            GameResult::Solved(guesses) => {
                println!("{} {} {}", record.index, record.answer, guesses.len());
            }
            GameResult::OutOfCandidates(guesses) => {
                println!(
                    "{} {} === failed after {} guesses (no candidates left)",
                    record.index,
                    record.answer,
                    guesses.len()
                );
            }
        }
    }

    println!("total attempt={}", report.total_attempts);
    println!("exceed max attempt={}", report.exceeded_max);
    if report.failed > 0 {
        println!("failed games={}", report.failed);
    }
    println!("word list size={}", report.corpus_size);
    println!("time elapsed={:.3} seconds", report.elapsed.as_secs_f64());

    ExitCode::SUCCESS
}

fn run_single_game(
    word: &str,
    corpus: &Corpus,
    config: &GameConfig,
    strategy: &dyn GuessStrategy,
) -> ExitCode {
    let answer = word.to_lowercase();
    if answer.len() != config.word_len || !answer.chars().all(|c| c.is_ascii_alphabetic()) {
        eprintln!(
            "Error: the answer must be {} alphabetic characters.",
            config.word_len
        );
        return ExitCode::FAILURE;
    }

    match play_game(&answer, corpus, config, strategy) {
        GameResult::Solved(guesses) => {
            println!("Solved it! It took me {} guesses.", guesses.len());
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
            ExitCode::SUCCESS
        }
        GameResult::OutOfCandidates(guesses) => {
            eprintln!(
                "No candidates left after {} guesses; is the word in the corpus?",
                guesses.len()
            );
            for guess in guesses.iter() {
                eprintln!("\t{}", guess);
            }
            ExitCode::FAILURE
        }
    }
}
