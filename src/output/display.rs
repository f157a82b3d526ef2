//! Display functions for command results

use super::formatters::share_bar;
use crate::commands::{AnalysisResult, SimulationResult};
use colored::Colorize;

/// Print the result of analyzing an opening letter
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} '{}' over {} candidates of length {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.letter.to_string().bright_yellow().bold(),
        result.total_candidates,
        result.length
    );
    println!("{}", "═".repeat(60).cyan());
    println!();

    for (pattern, size) in &result.groups {
        let bar = share_bar(*size, result.total_candidates, 24);
        let marker = if *pattern == result.kept {
            "◀ kept".bright_green().bold().to_string()
        } else {
            String::new()
        };
        println!("  {pattern}   {bar} {size:>4}  {marker}");
    }

    println!();
    if result.costs_turn {
        println!(
            "{}",
            format!(
                "The engine dodges '{}' entirely: {} of {} words survive and the guess costs a turn.",
                result.letter, result.kept_size, result.total_candidates
            )
            .red()
        );
    } else {
        println!(
            "{}",
            format!(
                "'{}' forces a reveal, but {} of {} words still survive.",
                result.letter, result.kept_size, result.total_candidates
            )
            .green()
        );
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\nGames played:     {}", result.total_games);
    println!(
        "Guesser wins:     {} ({:.1}%)",
        result.wins.to_string().green().bold(),
        percentage(result.wins, result.total_games)
    );
    println!(
        "Engine wins:      {} ({:.1}%)",
        result.losses.to_string().red().bold(),
        percentage(result.losses, result.total_games)
    );
    println!("Avg letters used: {:.2}", result.average_letters);
    println!("Avg wrong:        {:.2}", result.average_wrong);

    if !result.per_length.is_empty() {
        println!("\nBy word length:");
        for summary in &result.per_length {
            println!(
                "  {:>2} letters: {:>4} games, {:>4} won, {:.2} avg wrong",
                summary.length, summary.games, summary.wins, summary.average_wrong
            );
        }
    }

    if !result.wrong_distribution.is_empty() {
        println!("\nWrong-guess distribution:");
        let mut counts: Vec<(usize, usize)> = result
            .wrong_distribution
            .iter()
            .map(|(&wrong, &games)| (wrong, games))
            .collect();
        counts.sort_unstable();

        for (wrong, games) in counts {
            let bar = share_bar(games, result.total_games, 24);
            println!("  {wrong:>2} wrong: {bar} {games:>4}");
        }
    }

    println!(
        "\nFinished in {:.2?} ({:.0} games/sec)",
        result.duration, result.games_per_second
    );
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
