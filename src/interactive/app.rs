//! TUI application state and logic

use super::rendering::screen_layout;
use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::session::{Event as SessionEvent, NumericInput, SessionController, SessionState};
use crate::solver::Outcome;
use crate::wordlists::WordCorpus;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;

/// Application state
pub struct App<'a> {
    pub corpus: &'a WordCorpus,
    pub session: SessionController<'a>,
    pub input: NumericInput,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    /// Games that ended with a single word named
    pub words_named: usize,
    pub losses: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(corpus: &'a WordCorpus) -> Self {
        Self {
            corpus,
            session: SessionController::new(corpus),
            input: NumericInput::new(),
            messages: vec![
                Message {
                    text: "Welcome! Think of a word and I'll try to guess it.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: format!(
                        "Type its length ({MIN_WORD_LENGTH}-{MAX_WORD_LENGTH}) and press Enter"
                    ),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Prompt text with any digits typed so far
    #[must_use]
    pub fn prompt_line(&self) -> String {
        let text = &self.session.prompt().text;
        if self.session.state().wants_number() {
            format!("{text}{}", self.input.as_str())
        } else {
            text.clone()
        }
    }

    /// Commit the typed number to the session
    pub fn commit_number(&mut self) {
        let state = self.session.state();
        match self.input.commit() {
            Ok(value) => {
                let accepted = state
                    .number_event(value)
                    .is_some_and(|event| self.session.handle(event));
                if accepted {
                    self.after_event();
                } else if state == SessionState::AwaitingLength {
                    self.add_message(
                        &format!(
                            "Length must be between {MIN_WORD_LENGTH} and {MAX_WORD_LENGTH}"
                        ),
                        MessageStyle::Error,
                    );
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Answer the pending yes/no question
    pub fn answer(&mut self, yes: bool) {
        if self.session.handle(SessionEvent::Affirmation(yes)) {
            self.after_event();
        }
    }

    /// Handle a left click at a terminal position
    ///
    /// `area` must be the full terminal area the last frame was drawn in.
    pub fn click(&mut self, column: u16, row: u16, area: Rect) {
        if !self.session.prompt().wants_yes_no {
            return;
        }
        let layout = screen_layout(area);
        if let Some(button) = layout
            .buttons()
            .into_iter()
            .find(|b| b.is_clicked(column, row))
        {
            self.answer(button.answer);
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        let state = self.session.state();

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if state == SessionState::Finished => {
                self.new_game();
            }
            KeyCode::Char('y') if state.wants_yes_no() => self.answer(true),
            KeyCode::Char('n') if state.wants_yes_no() => self.answer(false),
            KeyCode::Char(c) if state.wants_number() => {
                self.input.push(c);
            }
            KeyCode::Backspace if state.wants_number() => {
                self.input.pop();
            }
            KeyCode::Enter if state.wants_number() => self.commit_number(),
            _ => {}
        }
    }

    pub fn new_game(&mut self) {
        self.session = SessionController::new(self.corpus);
        self.input.clear();
        self.messages.clear();
        self.add_message(
            "New game started! Think of another word.",
            MessageStyle::Info,
        );
    }

    fn after_event(&mut self) {
        let Some(outcome) = self.session.outcome().cloned() else {
            return;
        };

        self.stats.total_games += 1;
        match outcome {
            Outcome::GaveUp(_) => {
                self.stats.words_named += 1;
                self.add_message("Was I right? Press 'r' to play again.", MessageStyle::Success);
            }
            Outcome::TooManyWrongGuesses | Outcome::NoWordsLeft => {
                self.stats.losses += 1;
                self.add_message("You win this one! Press 'r' to play again.", MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                app.click(
                    mouse.column,
                    mouse.row,
                    Rect::new(0, 0, size.width, size.height),
                );
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> WordCorpus {
        WordCorpus::from_words(&["dog", "cat", "bat"])
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_number(app: &mut App, digits: &str) {
        for c in digits.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typed_digits_show_in_prompt() {
        let corpus = corpus();
        let mut app = App::new(&corpus);

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.prompt_line(), "Enter your word's length: 3");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.prompt_line(), "Enter your word's length: ");
    }

    #[test]
    fn enter_commits_length() {
        let corpus = corpus();
        let mut app = App::new(&corpus);

        type_number(&mut app, "3");
        assert_eq!(app.session.state(), SessionState::AwaitingWordConfirmation);
        assert_eq!(app.prompt_line(), "Is your word 'dog'?");
    }

    #[test]
    fn empty_enter_is_reported_and_ignored() {
        let corpus = corpus();
        let mut app = App::new(&corpus);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.state(), SessionState::AwaitingLength);
        assert_eq!(
            app.messages.last().map(|m| m.style.clone()),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn out_of_range_length_is_reported() {
        let corpus = corpus();
        let mut app = App::new(&corpus);

        type_number(&mut app, "12");
        assert_eq!(app.session.state(), SessionState::AwaitingLength);
        assert!(app.input.is_empty());
        assert!(
            app.messages
                .last()
                .is_some_and(|m| m.text.contains("Length must be between"))
        );
    }

    #[test]
    fn yes_no_keys_answer_questions() {
        let corpus = corpus();
        let mut app = App::new(&corpus);
        type_number(&mut app, "3");

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.bad_guess_count(), 1);
        assert_eq!(app.prompt_line(), "Is your word 'cat'?");

        press(&mut app, KeyCode::Char('y'));
        assert!(app.session.is_finished());
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.words_named, 1);
    }

    #[test]
    fn clicking_buttons_answers() {
        let corpus = corpus();
        let mut app = App::new(&corpus);
        type_number(&mut app, "3");

        let area = Rect::new(0, 0, 100, 30);
        let layout = screen_layout(area);

        app.click(layout.no.area.x + 1, layout.no.area.y + 1, area);
        assert_eq!(app.session.bad_guess_count(), 1);

        // Clicking outside both buttons does nothing
        app.click(0, 0, area);
        assert_eq!(app.session.bad_guess_count(), 1);

        app.click(layout.yes.area.x + 1, layout.yes.area.y + 1, area);
        assert!(app.session.is_finished());
    }

    #[test]
    fn restart_after_finish() {
        let corpus = corpus();
        let mut app = App::new(&corpus);
        type_number(&mut app, "3");
        press(&mut app, KeyCode::Char('y'));
        assert!(app.session.is_finished());

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.session.state(), SessionState::AwaitingLength);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn quit_keys() {
        let corpus = corpus();
        let mut app = App::new(&corpus);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::new(&corpus);
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let corpus = corpus();
        let mut app = App::new(&corpus);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
