//! Display functions for command results

use super::formatters::{create_progress_bar, gallows, lives_bar};
use crate::commands::simulate::{Answer, Transcript};
use crate::commands::{AnalysisResult, BenchmarkResult};
use crate::core::MAX_BAD_GUESSES;
use crate::solver::Outcome;
use colored::Colorize;

/// Print a simulated game turn by turn
pub fn print_transcript(transcript: &Transcript, secret: &str, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Thinking of: {} ({} letters)",
        secret.bright_yellow().bold(),
        transcript.length
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in transcript.steps.iter().enumerate() {
        let reply = match &step.answer {
            Answer::Letter { count: 0, .. } => "no".red().to_string(),
            Answer::Letter { count, .. } => format!("yes, {count}").green().to_string(),
            Answer::Word { correct: true, .. } => "yes".green().to_string(),
            Answer::Word { correct: false, .. } => "no".red().to_string(),
        };
        println!("\n{:>2}. {} {}", i + 1, step.question, reply);

        if verbose {
            println!(
                "    Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    for row in gallows(transcript.bad_guesses) {
        println!("    {row}");
    }
    println!(
        "\n  Wrong guesses: [{}] {}/{}",
        lives_bar(transcript.bad_guesses, MAX_BAD_GUESSES),
        transcript.bad_guesses,
        MAX_BAD_GUESSES
    );

    let message = match transcript.outcome {
        Outcome::GaveUp(ref word) if word.text() == secret => {
            transcript.final_message.green().bold()
        }
        _ => transcript.final_message.red().bold(),
    };
    println!("\n{message}");
}

/// Print the letter analysis for one word length
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LETTER ANALYSIS:".bright_cyan().bold(),
        format!("{}-letter words", result.length).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {} candidate words", result.total_candidates);

    let top = result.letters.first().map_or(1, |&(_, count)| count.max(1));
    for &(letter, count) in &result.letters {
        let bar = create_progress_bar(count as f64, top as f64, 30);
        println!("   {letter}  [{}] {count:5}", bar.green());
    }

    println!(
        "\n   Opening question: {}",
        result.opening_prompt.bright_yellow()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        format!("({}-letter words)", result.length).bright_black()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:       {}", result.total_words);
    println!(
        "   Found:              {}",
        format!("{} ({:.1}%)", result.found, result.found_rate())
            .green()
            .bold()
    );
    println!(
        "   Wrong final word:   {}",
        result.wrong_word.to_string().yellow()
    );
    println!(
        "   Too many wrong:     {}",
        result.too_many_wrong_guesses.to_string().red()
    );
    println!(
        "   No words left:      {}",
        result.no_words_left.to_string().red()
    );
    println!(
        "   Average questions:  {}",
        format!("{:.2}", result.average_questions)
            .bright_yellow()
            .bold()
    );
    println!("   Most questions:     {}", result.max_questions);
    println!("   Time taken:         {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:       {:.1}", result.words_per_second);

    println!("\n📈 {}", "Wrong guesses per game:".bright_cyan().bold());
    for (&bad_guesses, &count) in &result.bad_guess_distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {bad_guesses}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Not found:".bright_red().bold());
        for word in result.failures.iter().take(20) {
            println!("   • {word}");
        }
        if result.failures.len() > 20 {
            println!("   … and {} more", result.failures.len() - 20);
        }
    }
}
