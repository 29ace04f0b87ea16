//! Turn-taking state machine
//!
//! The controller receives one discrete event at a time from a front end,
//! mutates the engine, and publishes the prompt to show next. Events that do
//! not match the current state are ignored.

use crate::core::{WORD_GUESS_THRESHOLD, WordEntry, is_valid_length};
use crate::solver::{GuessEngine, Outcome};
use crate::wordlists::WordCorpus;

const LENGTH_PROMPT: &str = "Enter your word's length: ";

/// Where the conversation currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingLength,
    AwaitingLetterConfirmation,
    AwaitingLetterCount,
    AwaitingWordConfirmation,
    Finished,
}

impl SessionState {
    /// Whether the front end should collect a number for this state
    #[must_use]
    pub const fn wants_number(self) -> bool {
        matches!(self, Self::AwaitingLength | Self::AwaitingLetterCount)
    }

    /// Whether the front end should offer YES/NO for this state
    #[must_use]
    pub const fn wants_yes_no(self) -> bool {
        matches!(
            self,
            Self::AwaitingLetterConfirmation | Self::AwaitingWordConfirmation
        )
    }

    /// The event a committed number stands for in this state
    #[must_use]
    pub const fn number_event(self, value: usize) -> Option<Event> {
        match self {
            Self::AwaitingLength => Some(Event::LengthCommitted(value)),
            Self::AwaitingLetterCount => Some(Event::CountCommitted(value)),
            _ => None,
        }
    }
}

/// Input delivered by a front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The human's word length
    LengthCommitted(usize),
    /// How many times the pending letter occurs
    CountCommitted(usize),
    /// Answer to a yes/no question
    Affirmation(bool),
}

/// Text to show plus whether YES/NO buttons belong beside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub wants_yes_no: bool,
}

impl Prompt {
    fn statement(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            wants_yes_no: false,
        }
    }

    fn question(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            wants_yes_no: true,
        }
    }
}

/// Drives one game from length entry to a terminal message
pub struct SessionController<'a> {
    corpus: &'a WordCorpus,
    state: SessionState,
    engine: Option<GuessEngine>,
    prompt: Prompt,
    outcome: Option<Outcome>,
}

impl<'a> SessionController<'a> {
    #[must_use]
    pub fn new(corpus: &'a WordCorpus) -> Self {
        Self {
            corpus,
            state: SessionState::AwaitingLength,
            engine: None,
            prompt: Prompt::statement(LENGTH_PROMPT),
            outcome: None,
        }
    }

    /// Feed one event to the state machine
    ///
    /// Returns `true` if the event was accepted. Events for another state,
    /// and lengths outside the allowed range, leave everything unchanged.
    pub fn handle(&mut self, event: Event) -> bool {
        match (self.state, event) {
            (SessionState::AwaitingLength, Event::LengthCommitted(length)) => self.start(length),
            (SessionState::AwaitingLetterConfirmation, Event::Affirmation(yes)) => {
                self.answer_letter(yes);
                true
            }
            (SessionState::AwaitingLetterCount, Event::CountCommitted(count)) => {
                self.apply_letter_count(count);
                true
            }
            (SessionState::AwaitingWordConfirmation, Event::Affirmation(yes)) => {
                self.answer_word(yes);
                true
            }
            _ => false,
        }
    }

    fn start(&mut self, length: usize) -> bool {
        if !is_valid_length(length) {
            return false;
        }
        self.engine = Some(GuessEngine::for_length(self.corpus, length));
        self.advance();
        true
    }

    fn answer_letter(&mut self, yes: bool) {
        if yes {
            let letter = self
                .engine
                .as_ref()
                .and_then(GuessEngine::current_letter)
                .unwrap_or_default();
            self.prompt = Prompt::statement(format!("How many letters '{letter}'? "));
            self.state = SessionState::AwaitingLetterCount;
        } else {
            self.apply_letter_count(0);
        }
    }

    fn apply_letter_count(&mut self, count: usize) {
        if let Some(engine) = self.engine.as_mut() {
            engine.process_letter_response(count);
        }
        self.advance();
    }

    fn answer_word(&mut self, yes: bool) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        // Safety net: `advance` finishes a singleton pool before asking about
        // it, so only an engine set up by hand reaches the forced loss
        let sole_candidate = engine.candidates().len() == 1;
        engine.process_word_response(yes);
        if !yes && sole_candidate {
            engine.force_loss();
            self.finish(Outcome::TooManyWrongGuesses);
            return;
        }
        self.advance();
    }

    /// Decide the next question or finish the game
    fn advance(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        if let Some(outcome) = engine.outcome() {
            self.finish(outcome);
            return;
        }

        if engine.candidates().len() > WORD_GUESS_THRESHOLD
            && let Some(letter) = engine.next_letter_guess()
        {
            self.prompt = Prompt::question(format!("Is there a letter '{letter}'?"));
            self.state = SessionState::AwaitingLetterConfirmation;
            return;
        }

        // Also reached when no unguessed letter is left to ask about
        match engine.next_word_guess() {
            Some(word) => {
                self.prompt = Prompt::question(format!("Is your word '{word}'?"));
                self.state = SessionState::AwaitingWordConfirmation;
            }
            None => self.finish(Outcome::NoWordsLeft),
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.prompt = Prompt::statement(outcome.to_string());
        self.outcome = Some(outcome);
        self.state = SessionState::Finished;
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Finished)
    }

    /// How the game ended, once finished
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Wrong guesses so far; zero before a length is chosen
    #[must_use]
    pub fn bad_guess_count(&self) -> usize {
        self.engine.as_ref().map_or(0, GuessEngine::bad_guesses)
    }

    /// Remaining candidates; empty before a length is chosen
    #[must_use]
    pub fn candidates(&self) -> &[WordEntry] {
        self.engine
            .as_ref()
            .map(|engine| engine.candidates().words())
            .unwrap_or_default()
    }

    /// Read-only view of the engine once a session has started
    #[must_use]
    pub const fn engine(&self) -> Option<&GuessEngine> {
        self.engine.as_ref()
    }
}
