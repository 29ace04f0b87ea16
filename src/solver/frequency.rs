//! Letter frequency scoring
//!
//! Totals are summed over every candidate and every occurrence, so a letter
//! appearing twice in one word contributes 2.

use crate::core::WordEntry;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;

/// Occurrence totals for letters not yet asked about
#[derive(Debug, Clone, Default)]
pub struct LetterTally {
    counts: FxHashMap<char, usize>,
}

impl LetterTally {
    /// Count every letter of every word, skipping `excluded`
    pub fn from_words<'a, I>(words: I, excluded: &FxHashSet<char>) -> Self
    where
        I: IntoIterator<Item = &'a WordEntry>,
    {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for word in words {
            for letter in word.text().chars() {
                if !excluded.contains(&letter) {
                    *counts.entry(letter).or_insert(0) += 1;
                }
            }
        }
        Self { counts }
    }

    /// Total occurrences of `letter`
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The most frequent letter
    ///
    /// Ties go to the smallest letter so the choice never depends on hash
    /// iteration order.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::WordEntry;
    /// use hangman_solver::solver::LetterTally;
    /// use rustc_hash::FxHashSet;
    ///
    /// let words = [WordEntry::new("dog"), WordEntry::new("cat"), WordEntry::new("bat")];
    /// let tally = LetterTally::from_words(&words, &FxHashSet::default());
    /// // 'a' and 't' both occur twice
    /// assert_eq!(tally.best(), Some('a'));
    /// ```
    #[must_use]
    pub fn best(&self) -> Option<char> {
        self.counts
            .iter()
            .max_by(|a, b| rank(*a, *b).reverse())
            .map(|(&letter, _)| letter)
    }

    /// All letters, most frequent first, ties by ascending letter
    #[must_use]
    pub fn ranked(&self) -> Vec<(char, usize)> {
        let mut ranked: Vec<(char, usize)> = self.counts.iter().map(|(&c, &n)| (c, n)).collect();
        ranked.sort_by(|a, b| rank((&a.0, &a.1), (&b.0, &b.1)));
        ranked
    }
}

/// Ordering used for both `best` and `ranked`: higher count first, then lower letter
fn rank(a: (&char, &usize), b: (&char, &usize)) -> Ordering {
    b.1.cmp(a.1).then_with(|| a.0.cmp(b.0))
}
