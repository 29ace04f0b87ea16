//! Session sequencing
//!
//! The state machine between the engine and whatever front end delivers the
//! human's answers, plus the numeric entry helper those front ends share.

mod controller;
mod input;

pub use controller::{Event, Prompt, SessionController, SessionState};
pub use input::{InputError, NumericInput, parse_number, parse_yes_no};
