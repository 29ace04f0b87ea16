//! Formatting utilities for terminal output

use crate::core::MAX_BAD_GUESSES;

/// Draw the gallows for a given number of wrong guesses
///
/// One more piece appears per wrong guess; at `MAX_BAD_GUESSES` the face
/// is crossed out. Counts above the maximum draw the final stage.
#[must_use]
pub fn gallows(bad_guesses: usize) -> Vec<String> {
    let stage = bad_guesses.min(MAX_BAD_GUESSES);
    let part = |from: usize, drawn: char| if stage >= from { drawn } else { ' ' };
    let head = match stage {
        0 => ' ',
        s if s >= MAX_BAD_GUESSES => 'X',
        _ => 'O',
    };

    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {head}   |"),
        format!(" {}{}{}  |", part(3, '/'), part(2, '|'), part(4, '\\')),
        format!(" {} {}  |", part(5, '/'), part(6, '\\')),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many wrong guesses remain
#[must_use]
pub fn lives_bar(bad_guesses: usize, width: usize) -> String {
    let remaining = MAX_BAD_GUESSES.saturating_sub(bad_guesses);
    create_progress_bar(remaining as f64, MAX_BAD_GUESSES as f64, width)
}
