//! Hangman Solver - CLI
//!
//! Reverse hangman: think of a word and the solver guesses it, with TUI and
//! CLI modes plus batch simulation against a dictionary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{
        BenchmarkConfig, analyze_length, run_benchmark, run_simple, select_secrets, simulate_word,
    },
    interactive::{App, run_tui},
    output::{print_analysis_result, print_benchmark_result, print_transcript},
    wordlists::{DEFAULT_DICTIONARY, WordCorpus},
};

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Reverse hangman: think of a word and let the solver guess it",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file with whitespace-separated words
    #[arg(short, long, global = true, default_value = DEFAULT_DICTIONARY)]
    dictionary: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (question and answer on stdin/stdout)
    Simple,

    /// Let the solver play against a word you pick
    Simulate {
        /// The word the automatic responder thinks of
        word: String,

        /// Show candidate counts after each answer
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play every dictionary word of one length and report statistics
    Benchmark {
        /// Word length to benchmark
        #[arg(short, long)]
        length: usize,

        /// Play a random sample of this many words instead of all of them
        #[arg(short = 'n', long)]
        sample: Option<usize>,

        /// Seed for repeatable sampling
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the letter counts the solver starts from for a word length
    Analyze {
        /// Word length to analyze
        length: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let corpus = WordCorpus::load(&cli.dictionary)
        .with_context(|| format!("Failed to load dictionary '{}'", cli.dictionary))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(&corpus)),
        Commands::Simple => run_simple(&corpus),
        Commands::Simulate { word, verbose } => run_simulate_command(&corpus, &word, verbose),
        Commands::Benchmark {
            length,
            sample,
            seed,
        } => run_benchmark_command(
            &corpus,
            BenchmarkConfig {
                length,
                sample,
                seed,
            },
        ),
        Commands::Analyze { length } => run_analyze_command(&corpus, length),
    }
}

fn run_simulate_command(corpus: &WordCorpus, word: &str, verbose: bool) -> Result<()> {
    if !corpus.contains(word) {
        println!("Note: '{word}' is not in the dictionary, so it cannot be found.");
    }

    let transcript = simulate_word(corpus, word).map_err(|e| anyhow::anyhow!(e))?;
    print_transcript(&transcript, word, verbose);
    Ok(())
}

fn run_benchmark_command(corpus: &WordCorpus, config: BenchmarkConfig) -> Result<()> {
    let secrets = select_secrets(corpus, &config);
    println!(
        "Running benchmark on {} words of length {}...",
        secrets.len(),
        config.length
    );

    let result = run_benchmark(corpus, config.length, &secrets).map_err(|e| anyhow::anyhow!(e))?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_analyze_command(corpus: &WordCorpus, length: usize) -> Result<()> {
    let result = analyze_length(corpus, length).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}
