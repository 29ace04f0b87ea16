//! Core domain types for reverse hangman
//!
//! Dictionary words and the fixed game limits. Nothing here performs I/O.

pub mod rules;
mod word;

pub use rules::{
    MAX_BAD_GUESSES, MAX_WORD_LENGTH, MIN_WORD_LENGTH, WORD_GUESS_THRESHOLD, is_valid_length,
};
pub use word::WordEntry;
