//! Benchmark command
//!
//! Plays every word of one length (or a random sample) against an honest
//! responder and summarises how the engine fares.

use super::simulate::{HonestResponder, play_out};
use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, WordEntry, is_valid_length};
use crate::solver::Outcome;
use crate::wordlists::WordCorpus;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Which words to play
pub struct BenchmarkConfig {
    pub length: usize,
    pub sample: Option<usize>,
    pub seed: Option<u64>,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self {
            length,
            sample: None,
            seed: None,
        }
    }
}

/// How one benchmark game ended, judged against the known secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// The only survivor was the secret
    Found,
    /// The only survivor was some other word
    WrongWord,
    TooManyWrongGuesses,
    NoWordsLeft,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub length: usize,
    pub total_words: usize,
    pub found: usize,
    pub wrong_word: usize,
    pub too_many_wrong_guesses: usize,
    pub no_words_left: usize,
    pub average_questions: f64,
    pub max_questions: usize,
    /// Games per final wrong-guess count
    pub bad_guess_distribution: BTreeMap<usize, usize>,
    /// Secrets the engine failed on, in dictionary order
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    /// Share of games that ended on the secret, in percent
    #[must_use]
    pub fn found_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.found as f64 / self.total_words as f64 * 100.0
        }
    }
}

/// Pick the secrets for a run
///
/// Without a sample size every word of the length is used, in dictionary
/// order. With one, a random subset is drawn; `seed` makes it repeatable.
#[must_use]
pub fn select_secrets(corpus: &WordCorpus, config: &BenchmarkConfig) -> Vec<WordEntry> {
    let pool = corpus.filter_by_length(config.length);

    let Some(sample) = config.sample else {
        return pool;
    };

    let mut rng = config
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    pool.choose_multiple(&mut rng, sample).cloned().collect()
}

/// Play every secret and gather statistics
///
/// Games are independent, so they run in parallel.
///
/// # Errors
///
/// Returns an error if `length` is outside the playable range.
pub fn run_benchmark(
    corpus: &WordCorpus,
    length: usize,
    secrets: &[WordEntry],
) -> Result<BenchmarkResult, String> {
    if !is_valid_length(length) {
        return Err(format!(
            "Word length must be between {MIN_WORD_LENGTH} and {MAX_WORD_LENGTH}, got {length}"
        ));
    }

    let start = Instant::now();

    let pb = ProgressBar::new(secrets.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let games: Vec<(usize, GameResult, usize)> = secrets
        .par_iter()
        .map(|secret| {
            let mut responder = HonestResponder::new(secret.text());
            let game = play_out(corpus, length, &mut responder).map(|transcript| {
                (
                    transcript.steps.len(),
                    classify(&transcript.outcome, secret),
                    transcript.bad_guesses,
                )
            });
            pb.inc(1);
            game
        })
        .collect::<Result<_, _>>()?;

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = secrets.len();

    let mut result = BenchmarkResult {
        length,
        total_words,
        found: 0,
        wrong_word: 0,
        too_many_wrong_guesses: 0,
        no_words_left: 0,
        average_questions: 0.0,
        max_questions: 0,
        bad_guess_distribution: BTreeMap::new(),
        failures: Vec::new(),
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    };

    let mut total_questions = 0;
    for (secret, &(questions, game_result, bad_guesses)) in secrets.iter().zip(&games) {
        total_questions += questions;
        result.max_questions = result.max_questions.max(questions);
        *result.bad_guess_distribution.entry(bad_guesses).or_insert(0) += 1;

        match game_result {
            GameResult::Found => result.found += 1,
            GameResult::WrongWord => result.wrong_word += 1,
            GameResult::TooManyWrongGuesses => result.too_many_wrong_guesses += 1,
            GameResult::NoWordsLeft => result.no_words_left += 1,
        }
        if game_result != GameResult::Found {
            result.failures.push(secret.text().to_string());
        }
    }

    if total_words > 0 {
        result.average_questions = total_questions as f64 / total_words as f64;
    }

    Ok(result)
}

fn classify(outcome: &Outcome, secret: &WordEntry) -> GameResult {
    match outcome {
        Outcome::GaveUp(word) if word == secret => GameResult::Found,
        Outcome::GaveUp(_) => GameResult::WrongWord,
        Outcome::TooManyWrongGuesses => GameResult::TooManyWrongGuesses,
        Outcome::NoWordsLeft => GameResult::NoWordsLeft,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> WordCorpus {
        WordCorpus::from_words(&[
            "dog", "cat", "bat", "rat", "hat", "mat", "pig", "cow", "owl", "ant", "horse", "mouse",
        ])
    }

    #[test]
    fn benchmark_finds_all_dictionary_words() {
        let corpus = corpus();
        let secrets = select_secrets(&corpus, &BenchmarkConfig::new(3));
        let result = run_benchmark(&corpus, 3, &secrets).unwrap();

        assert_eq!(result.total_words, 10);
        assert_eq!(result.found, 10);
        assert!(result.failures.is_empty());
        assert!((result.found_rate() - 100.0).abs() < f64::EPSILON);
        assert!(result.average_questions >= 1.0);
        assert!(result.average_questions <= result.max_questions as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let corpus = corpus();
        let secrets = select_secrets(&corpus, &BenchmarkConfig::new(3));
        let result = run_benchmark(&corpus, 3, &secrets).unwrap();

        let distribution_sum: usize = result.bad_guess_distribution.values().sum();
        assert_eq!(distribution_sum, result.total_words);
    }

    #[test]
    fn benchmark_reports_unknown_secrets_as_failures() {
        let corpus = corpus();
        let secrets = vec![WordEntry::new("fox"), WordEntry::new("cat")];
        let result = run_benchmark(&corpus, 3, &secrets).unwrap();

        assert_eq!(result.found, 1);
        assert_eq!(result.failures, vec!["fox".to_string()]);
        assert_eq!(
            result.wrong_word + result.too_many_wrong_guesses + result.no_words_left,
            1
        );
    }

    #[test]
    fn benchmark_empty_word_list() {
        let corpus = corpus();
        let result = run_benchmark(&corpus, 4, &[]).unwrap();

        assert_eq!(result.total_words, 0);
        assert!(result.found_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_rejects_invalid_length() {
        let corpus = corpus();
        assert!(run_benchmark(&corpus, 2, &[]).is_err());
    }

    #[test]
    fn select_secrets_samples_with_seed() {
        let corpus = corpus();
        let config = BenchmarkConfig {
            length: 3,
            sample: Some(4),
            seed: Some(7),
        };

        let first = select_secrets(&corpus, &config);
        let second = select_secrets(&corpus, &config);

        assert_eq!(first.len(), 4);
        assert_eq!(first, second);
        assert!(first.iter().all(|w| w.len() == 3));
    }

    #[test]
    fn select_secrets_sample_larger_than_pool() {
        let corpus = corpus();
        let config = BenchmarkConfig {
            length: 5,
            sample: Some(50),
            seed: Some(1),
        };
        assert_eq!(select_secrets(&corpus, &config).len(), 2);
    }
}
