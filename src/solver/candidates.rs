//! The shrinking pool of words still consistent with every answer

use crate::core::WordEntry;
use crate::wordlists::WordCorpus;

/// Candidate words for one session
///
/// Every member has the session's target length and the pool only ever
/// shrinks. Order follows the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    length: usize,
    words: Vec<WordEntry>,
}

impl CandidateSet {
    /// Start a pool from every dictionary word of `length`
    #[must_use]
    pub fn from_corpus(corpus: &WordCorpus, length: usize) -> Self {
        Self {
            length,
            words: corpus.filter_by_length(length),
        }
    }

    /// Build a pool from explicit words, dropping any of the wrong length
    #[must_use]
    pub fn new(length: usize, words: impl IntoIterator<Item = WordEntry>) -> Self {
        Self {
            length,
            words: words.into_iter().filter(|w| w.len() == length).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// First remaining word in dictionary order
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&WordEntry> {
        self.words.first()
    }

    /// The remaining word, if exactly one is left
    #[must_use]
    pub fn only(&self) -> Option<&WordEntry> {
        match self.words.as_slice() {
            [word] => Some(word),
            _ => None,
        }
    }

    #[must_use]
    pub fn contains(&self, word: &WordEntry) -> bool {
        self.words.contains(word)
    }

    /// Keep only words containing `letter` exactly `count` times
    pub fn retain_with_count(&mut self, letter: char, count: usize) {
        self.words.retain(|w| w.occurrences(letter) == count);
    }

    /// Drop every copy of `word`
    ///
    /// Returns how many entries were removed.
    pub fn remove(&mut self, word: &WordEntry) -> usize {
        let before = self.words.len();
        self.words.retain(|w| w != word);
        before - self.words.len()
    }

    /// Collapse to the single entry `word`
    ///
    /// If `word` is no longer a member the pool becomes empty; it never grows.
    pub fn collapse_to(&mut self, word: &WordEntry) {
        self.words.retain(|w| w == word);
        self.words.truncate(1);
    }
}
