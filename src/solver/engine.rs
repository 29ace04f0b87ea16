//! Guess engine: picks the next question and narrows the candidates
//!
//! The engine holds all mutable session state. It never decides *when* to
//! ask a letter versus a word; that sequencing belongs to the session
//! controller.

use super::candidates::CandidateSet;
use super::frequency::LetterTally;
use crate::core::{MAX_BAD_GUESSES, WordEntry};
use crate::wordlists::WordCorpus;
use rustc_hash::FxHashSet;
use std::fmt;

/// How a finished session ended
///
/// There is no "won" variant: a confirmed word collapses the
/// pool to one entry and is reported like any other single survivor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `MAX_BAD_GUESSES` reached
    TooManyWrongGuesses,
    /// Every candidate was eliminated
    NoWordsLeft,
    /// Exactly one candidate survives
    GaveUp(WordEntry),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyWrongGuesses => write!(f, "I lost! Too many wrong guesses."),
            Self::NoWordsLeft => write!(f, "I lost! No possible words left."),
            Self::GaveUp(word) => write!(f, "I give up! The word might be: {word}"),
        }
    }
}

/// Candidate-elimination engine for a single session
#[derive(Debug, Clone)]
pub struct GuessEngine {
    candidates: CandidateSet,
    guessed_letters: FxHashSet<char>,
    bad_guesses: usize,
    current_letter: Option<char>,
    current_word: Option<WordEntry>,
}

impl GuessEngine {
    /// Create an engine over an existing candidate pool
    #[must_use]
    pub fn new(candidates: CandidateSet) -> Self {
        Self {
            candidates,
            guessed_letters: FxHashSet::default(),
            bad_guesses: 0,
            current_letter: None,
            current_word: None,
        }
    }

    /// Create an engine for every dictionary word of `length`
    #[must_use]
    pub fn for_length(corpus: &WordCorpus, length: usize) -> Self {
        Self::new(CandidateSet::from_corpus(corpus, length))
    }

    /// Pick the most frequent letter not yet asked about
    ///
    /// The letter is recorded as guessed and becomes the pending letter
    /// question. Returns `None` when no unguessed letter occurs in any
    /// candidate.
    pub fn next_letter_guess(&mut self) -> Option<char> {
        let letter =
            LetterTally::from_words(self.candidates.words(), &self.guessed_letters).best()?;

        self.guessed_letters.insert(letter);
        self.current_letter = Some(letter);
        Some(letter)
    }

    /// Pick the first remaining candidate as the pending word question
    pub fn next_word_guess(&mut self) -> Option<&WordEntry> {
        let word = self.candidates.first()?.clone();
        self.current_word = Some(word);
        self.current_word.as_ref()
    }

    /// Apply the answer "the pending letter occurs `count` times"
    ///
    /// A count of zero is a wrong guess. Counts no candidate can satisfy
    /// simply empty the pool. Does nothing if no letter question is pending.
    pub fn process_letter_response(&mut self, count: usize) {
        let Some(letter) = self.current_letter.take() else {
            return;
        };

        self.candidates.retain_with_count(letter, count);
        if count == 0 {
            self.record_bad_guess();
        }
    }

    /// Apply the answer to the pending word question
    ///
    /// Does nothing if no word question is pending.
    pub fn process_word_response(&mut self, correct: bool) {
        let Some(word) = self.current_word.take() else {
            return;
        };

        if correct {
            self.candidates.collapse_to(&word);
        } else {
            self.candidates.remove(&word);
            self.record_bad_guess();
        }
    }

    /// End the session as a loss by exhausting the wrong-guess budget
    pub fn force_loss(&mut self) {
        self.bad_guesses = MAX_BAD_GUESSES;
    }

    fn record_bad_guess(&mut self) {
        self.bad_guesses = (self.bad_guesses + 1).min(MAX_BAD_GUESSES);
    }

    /// Check whether the session has ended
    ///
    /// Once true this stays true: wrong guesses never decrease and the pool
    /// never grows.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.bad_guesses >= MAX_BAD_GUESSES || self.candidates.len() <= 1
    }

    /// Why the session ended, or `None` while it is still running
    ///
    /// An empty pool is reported first, then the wrong-guess limit, then a
    /// single survivor.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.candidates.is_empty() {
            Some(Outcome::NoWordsLeft)
        } else if self.bad_guesses >= MAX_BAD_GUESSES {
            Some(Outcome::TooManyWrongGuesses)
        } else {
            self.candidates.only().cloned().map(Outcome::GaveUp)
        }
    }

    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub const fn guessed_letters(&self) -> &FxHashSet<char> {
        &self.guessed_letters
    }

    #[inline]
    #[must_use]
    pub const fn bad_guesses(&self) -> usize {
        self.bad_guesses
    }

    /// The letter currently being asked about
    #[inline]
    #[must_use]
    pub const fn current_letter(&self) -> Option<char> {
        self.current_letter
    }

    /// The word currently being confirmed
    #[inline]
    #[must_use]
    pub const fn current_word(&self) -> Option<&WordEntry> {
        self.current_word.as_ref()
    }
}
