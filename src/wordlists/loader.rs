//! Dictionary loading
//!
//! Reads a whitespace-separated word list into an ordered, immutable corpus.

use crate::core::WordEntry;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for dictionary loading
#[derive(Debug)]
pub enum CorpusError {
    /// The dictionary file could not be opened or read
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, .. } => write!(f, "Can't open file {}", path.display()),
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// The full dictionary, in file order
///
/// Source order is kept because the first matching word is the one the
/// engine confirms first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCorpus {
    words: Vec<WordEntry>,
}

impl WordCorpus {
    /// Load the dictionary from a file
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Io` if the file cannot be opened or read.
    ///
    /// # Examples
    /// ```no_run
    /// use hangman_solver::wordlists::WordCorpus;
    ///
    /// let corpus = WordCorpus::load("assets/word_list.txt").unwrap();
    /// println!("Loaded {} words", corpus.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_text(&content))
    }

    /// Build a corpus from already-loaded text
    ///
    /// Every whitespace-separated token becomes one entry, verbatim.
    #[must_use]
    pub fn from_text(content: &str) -> Self {
        Self {
            words: content.split_whitespace().map(WordEntry::new).collect(),
        }
    }

    /// Build a corpus from a list of tokens
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::wordlists::WordCorpus;
    ///
    /// let corpus = WordCorpus::from_words(&["dog", "cat", "horse"]);
    /// assert_eq!(corpus.len(), 3);
    /// ```
    #[must_use]
    pub fn from_words(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|&w| WordEntry::new(w)).collect(),
        }
    }

    /// Every entry whose length equals `length`, in source order
    #[must_use]
    pub fn filter_by_length(&self, length: usize) -> Vec<WordEntry> {
        self.words
            .iter()
            .filter(|w| w.len() == length)
            .cloned()
            .collect()
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

    /// Check whether the exact token is in the dictionary
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.text() == text)
    }
}
