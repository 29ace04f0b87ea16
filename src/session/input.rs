//! Numeric entry buffer for the length and count prompts
//!
//! Front ends collect digits here and commit them as one number. A failed
//! commit only clears the buffer; the session is never touched.

use std::fmt;

/// Why a buffered number could not be committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Nothing was typed
    Empty,
    /// The text is not a non-negative integer that fits in `usize`
    NotANumber(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Please enter a number"),
            Self::NotANumber(text) => write!(f, "'{text}' is not a valid number"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a whole line as a non-negative number
///
/// # Errors
///
/// Returns `InputError::Empty` for blank input and `InputError::NotANumber`
/// for anything that is not a plain decimal integer.
///
/// # Examples
/// ```
/// use hangman_solver::session::{InputError, parse_number};
///
/// assert_eq!(parse_number(" 5 "), Ok(5));
/// assert_eq!(parse_number(""), Err(InputError::Empty));
/// assert!(parse_number("-1").is_err());
/// ```
pub fn parse_number(text: &str) -> Result<usize, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

/// Interpret a typed yes/no answer
///
/// Returns `None` for anything that is neither.
#[must_use]
pub fn parse_yes_no(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Digit-only text buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericInput {
    buffer: String,
}

impl NumericInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character if it is an ASCII digit
    ///
    /// Returns whether the character was accepted.
    pub fn push(&mut self, c: char) -> bool {
        if c.is_ascii_digit() {
            self.buffer.push(c);
            true
        } else {
            false
        }
    }

    pub fn pop(&mut self) -> Option<char> {
        self.buffer.pop()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Take the buffered number, clearing the buffer either way
    ///
    /// # Errors
    ///
    /// Returns an `InputError` if the buffer is empty or overflows `usize`.
    pub fn commit(&mut self) -> Result<usize, InputError> {
        let text = std::mem::take(&mut self.buffer);
        parse_number(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_accepts_only_digits() {
        let mut input = NumericInput::new();
        assert!(input.push('4'));
        assert!(!input.push('x'));
        assert!(!input.push('-'));
        assert!(input.push('2'));
        assert_eq!(input.as_str(), "42");
    }

    #[test]
    fn pop_removes_last_digit() {
        let mut input = NumericInput::new();
        input.push('1');
        input.push('7');
        assert_eq!(input.pop(), Some('7'));
        assert_eq!(input.as_str(), "1");
    }

    #[test]
    fn commit_returns_number_and_clears() {
        let mut input = NumericInput::new();
        input.push('0');
        input.push('5');
        assert_eq!(input.commit(), Ok(5));
        assert!(input.is_empty());
    }

    #[test]
    fn commit_empty_is_error() {
        let mut input = NumericInput::new();
        assert_eq!(input.commit(), Err(InputError::Empty));
    }

    #[test]
    fn commit_overflow_is_error_and_clears() {
        let mut input = NumericInput::new();
        for _ in 0..40 {
            input.push('9');
        }
        assert!(matches!(input.commit(), Err(InputError::NotANumber(_))));
        assert!(input.is_empty());
    }

    #[test]
    fn parse_number_rejects_garbage() {
        assert_eq!(parse_number("7"), Ok(7));
        assert_eq!(parse_number("   "), Err(InputError::Empty));
        assert_eq!(
            parse_number("seven"),
            Err(InputError::NotANumber("seven".to_string()))
        );
        assert!(parse_number("3.5").is_err());
    }

    #[test]
    fn parse_yes_no_variants() {
        assert_eq!(parse_yes_no("Y"), Some(true));
        assert_eq!(parse_yes_no(" yes\n"), Some(true));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no("NO"), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);
        assert_eq!(parse_yes_no(""), None);
    }

    #[test]
    fn error_messages() {
        assert_eq!(InputError::Empty.to_string(), "Please enter a number");
        assert_eq!(
            InputError::NotANumber("x".to_string()).to_string(),
            "'x' is not a valid number"
        );
    }
}
