//! Dictionary word representation
//!
//! A `WordEntry` is an opaque token taken verbatim from the dictionary.
//! No case folding, trimming or alphabet checks are applied.

use std::fmt;

/// A single dictionary token
///
/// Length is measured in `char`s, so multi-byte letters count once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordEntry {
    text: String,
    len: usize,
}

impl WordEntry {
    /// Wrap a dictionary token
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::WordEntry;
    ///
    /// let word = WordEntry::new("Cat");
    /// assert_eq!(word.text(), "Cat");
    /// assert_eq!(word.len(), 3);
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self { text, len }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Count how many times `letter` appears in the word
    ///
    /// Case-sensitive: `'a'` and `'A'` are different letters.
    #[must_use]
    pub fn occurrences(&self, letter: char) -> usize {
        self.text.chars().filter(|&c| c == letter).count()
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for WordEntry {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_keeps_text_verbatim() {
        let word = WordEntry::new("CrAnE");
        assert_eq!(word.text(), "CrAnE");
        assert_eq!(format!("{word}"), "CrAnE");
    }

    #[test]
    fn word_accepts_non_alphabetic_tokens() {
        let word = WordEntry::new("r2-d2");
        assert_eq!(word.len(), 5);
        assert_eq!(word.occurrences('2'), 2);
    }

    #[test]
    fn word_length_counts_chars_not_bytes() {
        let word = WordEntry::new("café");
        assert_eq!(word.len(), 4);
        assert_eq!(word.occurrences('é'), 1);
    }

    #[test]
    fn word_occurrences_counts_repeats() {
        let word = WordEntry::new("banana");
        assert_eq!(word.occurrences('a'), 3);
        assert_eq!(word.occurrences('n'), 2);
        assert_eq!(word.occurrences('z'), 0);
    }

    #[test]
    fn word_occurrences_is_case_sensitive() {
        let word = WordEntry::new("Anna");
        assert_eq!(word.occurrences('a'), 1);
        assert_eq!(word.occurrences('A'), 1);
    }

    #[test]
    fn empty_word() {
        let word = WordEntry::new("");
        assert!(word.is_empty());
        assert_eq!(word.occurrences('a'), 0);
    }
}
