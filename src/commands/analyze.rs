//! Letter analysis command
//!
//! Shows the letter totals the engine scores for a fresh session of one
//! word length, and the question it would open with.

use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::session::{Event, SessionController};
use crate::solver::{CandidateSet, LetterTally};
use crate::wordlists::WordCorpus;
use rustc_hash::FxHashSet;

/// Result of analyzing one word length
pub struct AnalysisResult {
    pub length: usize,
    pub total_candidates: usize,
    /// Letters by descending total, ties by ascending letter
    pub letters: Vec<(char, usize)>,
    pub opening_prompt: String,
}

/// Analyze the letter distribution for words of `length`
///
/// # Errors
///
/// Returns an error if `length` is outside the playable range.
pub fn analyze_length(corpus: &WordCorpus, length: usize) -> Result<AnalysisResult, String> {
    let mut session = SessionController::new(corpus);
    if !session.handle(Event::LengthCommitted(length)) {
        return Err(format!(
            "Word length must be between {MIN_WORD_LENGTH} and {MAX_WORD_LENGTH}, got {length}"
        ));
    }

    let candidates = CandidateSet::from_corpus(corpus, length);
    let tally = LetterTally::from_words(candidates.words(), &FxHashSet::default());

    Ok(AnalysisResult {
        length,
        total_candidates: candidates.len(),
        letters: tally.ranked(),
        opening_prompt: session.prompt().text.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_ranks_letters() {
        let corpus = WordCorpus::from_words(&[
            "dog", "cat", "bat", "rat", "hat", "mat", "pig", "horse",
        ]);
        let result = analyze_length(&corpus, 3).unwrap();

        assert_eq!(result.total_candidates, 7);
        assert_eq!(result.letters[0], ('a', 5));
        assert_eq!(result.letters[1], ('t', 5));
        assert_eq!(result.opening_prompt, "Is there a letter 'a'?");
    }

    #[test]
    fn analyze_small_pool_opens_with_word() {
        let corpus = WordCorpus::from_words(&["dog", "cat", "bat"]);
        let result = analyze_length(&corpus, 3).unwrap();

        assert_eq!(result.letters[0], ('a', 2));
        assert_eq!(result.opening_prompt, "Is your word 'dog'?");
    }

    #[test]
    fn analyze_length_without_words() {
        let corpus = WordCorpus::from_words(&["dog"]);
        let result = analyze_length(&corpus, 8).unwrap();

        assert_eq!(result.total_candidates, 0);
        assert!(result.letters.is_empty());
        assert_eq!(result.opening_prompt, "I lost! No possible words left.");
    }

    #[test]
    fn analyze_invalid_length() {
        let corpus = WordCorpus::from_words(&["dog"]);
        assert!(analyze_length(&corpus, 1).is_err());
        assert!(analyze_length(&corpus, 12).is_err());
    }
}
