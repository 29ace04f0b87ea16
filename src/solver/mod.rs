//! Candidate elimination
//!
//! Letter scoring, the candidate pool, and the engine that ties them together.

mod candidates;
mod engine;
mod frequency;

pub use candidates::CandidateSet;
pub use engine::{GuessEngine, Outcome};
pub use frequency::LetterTally;
