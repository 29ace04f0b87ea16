//! Simple interactive CLI mode
//!
//! Line-based front end for the session controller, without the TUI.

use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::output::formatters::gallows;
use crate::session::{Event, NumericInput, SessionController, SessionState, parse_yes_no};
use crate::wordlists::WordCorpus;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(corpus: &WordCorpus) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(corpus, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the simple interactive mode over arbitrary streams
///
/// Ends when the input is exhausted or the player quits.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    corpus: &WordCorpus,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(
        output,
        "\n╔══════════════════════════════════════════════════════════════╗"
    )?;
    writeln!(
        output,
        "║              Hangman Solver - Interactive Mode               ║"
    )?;
    writeln!(
        output,
        "╚══════════════════════════════════════════════════════════════╝\n"
    )?;
    writeln!(output, "Think of a word and I'll try to guess it.")?;
    writeln!(output, "Answer numbers with digits and questions with y/n.")?;
    writeln!(output, "Commands: 'quit' to exit, 'new' for new game\n")?;

    let mut session = SessionController::new(corpus);
    let mut number = NumericInput::new();
    let mut shown_bad_guesses = 0;

    loop {
        if session.bad_guess_count() != shown_bad_guesses {
            shown_bad_guesses = session.bad_guess_count();
            for row in gallows(shown_bad_guesses) {
                writeln!(output, "    {row}")?;
            }
        }

        if session.is_finished() {
            writeln!(output, "\n{}\n", session.prompt().text.bright_yellow().bold())?;
            write!(output, "Play again? (yes/no): ")?;
            output.flush()?;

            match read_line(input)? {
                Some(line) if parse_yes_no(&line) == Some(true) => {
                    session = SessionController::new(corpus);
                    shown_bad_guesses = 0;
                    writeln!(output, "\n🔄 New game started!\n")?;
                    continue;
                }
                _ => {
                    writeln!(output, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
            }
        }

        let state = session.state();
        write!(output, "{}", session.prompt().text)?;
        if state.wants_yes_no() {
            write!(output, " (y/n): ")?;
        }
        output.flush()?;

        let Some(line) = read_line(input)? else {
            writeln!(output)?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" => {
                session = SessionController::new(corpus);
                shown_bad_guesses = 0;
                writeln!(output, "\n🔄 New game started!\n")?;
                continue;
            }
            _ => {}
        }

        if state.wants_yes_no() {
            match parse_yes_no(&line) {
                Some(yes) => {
                    session.handle(Event::Affirmation(yes));
                }
                None => writeln!(output, "❌ Please answer y or n")?,
            }
            continue;
        }

        number.clear();
        for c in line.chars() {
            number.push(c);
        }
        if number.as_str().len() != line.len() {
            number.clear();
            writeln!(output, "❌ Please enter digits only")?;
            continue;
        }

        match number.commit() {
            Ok(value) => {
                let accepted = state
                    .number_event(value)
                    .is_some_and(|event| session.handle(event));
                if !accepted && state == SessionState::AwaitingLength {
                    writeln!(
                        output,
                        "❌ Length must be between {MIN_WORD_LENGTH} and {MAX_WORD_LENGTH}"
                    )?;
                }
            }
            Err(e) => writeln!(output, "❌ {e}")?,
        }
    }
}

/// Read one trimmed line, or `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
