//! Game limits shared by the engine and the front ends

/// Wrong guesses allowed before the engine loses
pub const MAX_BAD_GUESSES: usize = 7;

/// Candidate count at or below which whole words are confirmed directly
pub const WORD_GUESS_THRESHOLD: usize = 5;

/// Shortest word length a session accepts
pub const MIN_WORD_LENGTH: usize = 3;

/// Longest word length a session accepts
pub const MAX_WORD_LENGTH: usize = 9;

/// Check whether a session can be started for words of `length`
#[inline]
#[must_use]
pub const fn is_valid_length(length: usize) -> bool {
    length >= MIN_WORD_LENGTH && length <= MAX_WORD_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(!is_valid_length(MIN_WORD_LENGTH - 1));
        assert!(is_valid_length(MIN_WORD_LENGTH));
        assert!(is_valid_length(MAX_WORD_LENGTH));
        assert!(!is_valid_length(MAX_WORD_LENGTH + 1));
    }

    #[test]
    fn zero_length_rejected() {
        assert!(!is_valid_length(0));
    }
}
