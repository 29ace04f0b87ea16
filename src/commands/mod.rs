//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod simulate;

pub use analyze::{AnalysisResult, analyze_length};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark, select_secrets};
pub use simple::run_simple;
pub use simulate::{HonestResponder, Responder, Transcript, play_out, simulate_word};
