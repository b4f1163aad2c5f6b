//! Display functions for command results

use super::formatters::{average_line, format_duration, score_line};
use crate::commands::{AnalysisResult, GameResult, PlayReport, SetupTimings};
use crate::core::GameStatus;
use colored::Colorize;

/// Print the score line for one finished game
pub fn print_game_result(result: &GameResult) {
    println!("{}", score_line(result));
}

/// Print the end-of-game status line shown in full transcripts
pub fn print_game_status(result: &GameResult) {
    let status = match result.status {
        GameStatus::Won => result.status.to_string().green(),
        GameStatus::Lost => result.status.to_string().red(),
        GameStatus::KeepGuessing => result.status.to_string().normal(),
    };
    println!("  {} {status}\n", result.word.bright_yellow().bold());
}

/// Print the average score line
pub fn print_summary(report: &PlayReport) {
    println!("{}", average_line(report.average_score()));
}

/// Print the timing breakdown
pub fn print_timing_report(setup: &SetupTimings, report: &PlayReport) {
    println!("\n{}", "Timing:".bright_cyan().bold());
    println!(
        "   {:<18}{}",
        "load dictionary",
        format_duration(setup.load_dictionary)
    );
    println!(
        "   {:<18}{}",
        "build strategy",
        format_duration(setup.build_strategy)
    );
    println!(
        "   {:<18}{} ({} games)",
        "play",
        format_duration(report.total_time),
        report.results.len()
    );
    println!("   {:<18}{}", "per game", format_duration(report.mean_game_time()));
    println!(
        "   {:<18}{} won, {} lost",
        "outcome",
        report.wins(),
        report.losses()
    );

    if let Some(cache) = report.cache {
        println!(
            "   {:<18}{} entries, {} hits, {} misses",
            "cache", cache.entries, cache.hits, cache.misses
        );
    }
}

/// Print the result of a state analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "STATE ANALYSIS:".bright_cyan().bold(),
        result.key.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {} candidates", result.total_candidates);
    for word in &result.sample {
        println!("   {word}");
    }
    if result.total_candidates > result.sample.len() {
        println!(
            "   … and {} more",
            result.total_candidates - result.sample.len()
        );
    }

    if result.ranked_letters.is_empty() {
        return;
    }
    println!("\n📈 {}", "Letters by candidate presence:".bright_cyan().bold());
    for (letter, count) in &result.ranked_letters {
        let pct = *count as f64 / result.total_candidates as f64 * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {letter}: {bar} {count:6} ({pct:5.1}%)");
    }
}
