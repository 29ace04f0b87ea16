//! Automatic play against a scripted responder
//!
//! Drives a `SessionController` exactly as a front end would, but answers
//! each question through a `Responder` instead of a human.

use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, WordEntry};
use crate::session::{Event, SessionController, SessionState};
use crate::solver::{GuessEngine, Outcome};
use crate::wordlists::WordCorpus;

/// Something that answers the engine's questions
pub trait Responder {
    /// How many times `letter` occurs in the hidden word
    fn letter_count(&mut self, letter: char) -> usize;

    /// Whether `word` is the hidden word
    fn confirm(&mut self, word: &WordEntry) -> bool;
}

/// Answers truthfully for a fixed secret word
pub struct HonestResponder {
    secret: WordEntry,
}

impl HonestResponder {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: WordEntry::new(secret),
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &WordEntry {
        &self.secret
    }
}

impl Responder for HonestResponder {
    fn letter_count(&mut self, letter: char) -> usize {
        self.secret.occurrences(letter)
    }

    fn confirm(&mut self, word: &WordEntry) -> bool {
        *word == self.secret
    }
}

/// The responder's answer to one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Letter { letter: char, count: usize },
    Word { word: WordEntry, correct: bool },
}

/// One question and its answer
#[derive(Debug, Clone)]
pub struct Step {
    pub question: String,
    pub answer: Answer,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Full record of a simulated game
#[derive(Debug, Clone)]
pub struct Transcript {
    pub length: usize,
    pub steps: Vec<Step>,
    pub outcome: Outcome,
    pub final_message: String,
    pub bad_guesses: usize,
}

impl Transcript {
    /// Whether the game ended with `secret` as the only survivor
    ///
    /// The engine has no notion of winning; this is judged from outside.
    #[must_use]
    pub fn found(&self, secret: &WordEntry) -> bool {
        matches!(&self.outcome, Outcome::GaveUp(word) if word == secret)
    }
}

/// Play one full session of words of `length`
///
/// # Errors
///
/// Returns an error if `length` is outside the playable range or the
/// session reaches a state that needs no answer before finishing.
pub fn play_out<R: Responder>(
    corpus: &WordCorpus,
    length: usize,
    responder: &mut R,
) -> Result<Transcript, String> {
    let mut session = SessionController::new(corpus);
    if !session.handle(Event::LengthCommitted(length)) {
        return Err(format!(
            "Word length must be between {MIN_WORD_LENGTH} and {MAX_WORD_LENGTH}, got {length}"
        ));
    }

    let mut steps = Vec::new();

    while !session.is_finished() {
        let question = session.prompt().text.clone();
        let candidates_before = session.candidates().len();

        let answer = match session.state() {
            SessionState::AwaitingLetterConfirmation => {
                let letter = session
                    .engine()
                    .and_then(GuessEngine::current_letter)
                    .ok_or_else(|| "Letter question without a pending letter".to_string())?;
                let count = responder.letter_count(letter);
                if count == 0 {
                    session.handle(Event::Affirmation(false));
                } else {
                    session.handle(Event::Affirmation(true));
                    session.handle(Event::CountCommitted(count));
                }
                Answer::Letter { letter, count }
            }
            SessionState::AwaitingWordConfirmation => {
                let word = session
                    .engine()
                    .and_then(GuessEngine::current_word)
                    .cloned()
                    .ok_or_else(|| "Word question without a pending word".to_string())?;
                let correct = responder.confirm(&word);
                session.handle(Event::Affirmation(correct));
                Answer::Word { word, correct }
            }
            state => return Err(format!("Unexpected session state {state:?}")),
        };

        steps.push(Step {
            question,
            answer,
            candidates_before,
            candidates_after: session.candidates().len(),
        });
    }

    let outcome = session
        .outcome()
        .cloned()
        .ok_or_else(|| "Finished session without an outcome".to_string())?;

    Ok(Transcript {
        length,
        steps,
        final_message: session.prompt().text.clone(),
        outcome,
        bad_guesses: session.bad_guess_count(),
    })
}

/// Simulate an honest human thinking of `secret`
///
/// # Errors
///
/// Returns an error if the secret's length is not playable.
pub fn simulate_word(corpus: &WordCorpus, secret: &str) -> Result<Transcript, String> {
    let mut responder = HonestResponder::new(secret);
    let length = responder.secret().len();
    play_out(corpus, length, &mut responder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_BAD_GUESSES, WORD_GUESS_THRESHOLD};

    fn corpus() -> WordCorpus {
        WordCorpus::from_words(&[
            "dog", "cat", "bat", "rat", "hat", "mat", "pig", "cow", "owl", "ant", "horse",
        ])
    }

    /// Says "no" to everything
    struct Denier;

    impl Responder for Denier {
        fn letter_count(&mut self, _letter: char) -> usize {
            0
        }

        fn confirm(&mut self, _word: &WordEntry) -> bool {
            false
        }
    }

    #[test]
    fn honest_responder_answers_truthfully() {
        let mut responder = HonestResponder::new("llama");
        assert_eq!(responder.letter_count('l'), 2);
        assert_eq!(responder.letter_count('z'), 0);
        assert!(responder.confirm(&WordEntry::new("llama")));
        assert!(!responder.confirm(&WordEntry::new("Llama")));
    }

    #[test]
    fn honest_play_finds_every_word() {
        let corpus = corpus();
        for secret in corpus.filter_by_length(3) {
            let transcript = simulate_word(&corpus, secret.text()).unwrap();
            assert!(
                transcript.found(&secret),
                "did not find '{secret}': {}",
                transcript.final_message
            );
        }
    }

    #[test]
    fn transcript_records_shrinking_candidates() {
        let corpus = corpus();
        let transcript = simulate_word(&corpus, "owl").unwrap();

        assert!(!transcript.steps.is_empty());
        for step in &transcript.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert_eq!(transcript.length, 3);
        assert_eq!(transcript.final_message, "I give up! The word might be: owl");
    }

    #[test]
    fn letters_asked_until_threshold() {
        let corpus = corpus();
        let transcript = simulate_word(&corpus, "cat").unwrap();

        for step in &transcript.steps {
            match step.answer {
                Answer::Letter { .. } => assert!(step.candidates_before > WORD_GUESS_THRESHOLD),
                Answer::Word { .. } => assert!(step.candidates_before <= WORD_GUESS_THRESHOLD),
            }
        }
    }

    #[test]
    fn secret_not_in_dictionary_is_not_found() {
        let corpus = corpus();
        let secret = WordEntry::new("fox");
        let transcript = simulate_word(&corpus, "fox").unwrap();

        assert!(!transcript.found(&secret));
    }

    #[test]
    fn denier_exhausts_bad_guesses() {
        let corpus = corpus();
        let transcript = play_out(&corpus, 3, &mut Denier).unwrap();

        assert!(matches!(
            transcript.outcome,
            Outcome::TooManyWrongGuesses | Outcome::NoWordsLeft | Outcome::GaveUp(_)
        ));
        assert!(transcript.bad_guesses <= MAX_BAD_GUESSES);
    }

    #[test]
    fn invalid_length_is_error() {
        let corpus = corpus();
        assert!(simulate_word(&corpus, "ox").is_err());
        assert!(simulate_word(&corpus, "hippopotamus").is_err());
    }
}
