//! Word lists for reverse hangman
//!
//! The dictionary is read from disk once at startup. There is no embedded
//! fallback: without a dictionary no game can be played.

pub mod loader;

pub use loader::{CorpusError, WordCorpus};

/// Dictionary path used when none is given on the command line
pub const DEFAULT_DICTIONARY: &str = "assets/word_list.txt";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_dictionary_loads() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DICTIONARY);
        let corpus = WordCorpus::load(path).unwrap();

        assert!(!corpus.is_empty());
        for n in crate::core::MIN_WORD_LENGTH..=crate::core::MAX_WORD_LENGTH {
            assert!(
                !corpus.filter_by_length(n).is_empty(),
                "No {n}-letter words in shipped dictionary"
            );
        }
    }

    #[test]
    fn shipped_dictionary_words_are_playable_and_unique() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DICTIONARY);
        let corpus = WordCorpus::load(path).unwrap();

        let mut seen = rustc_hash::FxHashSet::default();
        for word in corpus.words() {
            assert!(crate::core::is_valid_length(word.len()), "'{word}' is not playable");
            assert!(seen.insert(word.text()), "'{word}' is listed twice");
        }
    }
}
