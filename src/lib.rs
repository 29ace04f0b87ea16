//! Reverse Hangman Solver
//!
//! The human thinks of a word; the computer narrows the dictionary down by
//! asking how many times each letter occurs, then confirms whole words once
//! few candidates remain.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::session::{Event, SessionController, SessionState};
//! use hangman_solver::wordlists::WordCorpus;
//!
//! let corpus = WordCorpus::from_words(&["dog", "cat", "bat"]);
//! let mut session = SessionController::new(&corpus);
//!
//! session.handle(Event::LengthCommitted(3));
//! assert_eq!(session.state(), SessionState::AwaitingWordConfirmation);
//! assert_eq!(session.prompt().text, "Is your word 'dog'?");
//! ```

// Core domain types
pub mod core;

// Candidate elimination engine
pub mod solver;

// Turn-taking state machine
pub mod session;

// Dictionary loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
