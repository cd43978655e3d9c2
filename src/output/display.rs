//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar, guesses_label};
use crate::commands::{EvaluationResult, SimulationResult};
use crate::game::{GuessRecord, MAX_GUESSES, PlayerStatistics};
use colored::Colorize;
use std::io::{self, Write};

/// Print the feedback for a single guess/target pair
pub fn print_evaluation_result(result: &EvaluationResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().bright_white().bold(),
        result.target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", colored_tiles(&result.evaluation));
    println!("  {}\n", result.evaluation.to_emoji());

    for feedback in result.evaluation.letters() {
        println!("  {}  {}", feedback.letter, feedback.status);
    }
    println!();
}

/// Write the guess board, padded with empty rows up to the guess limit
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_board<W: Write>(
    out: &mut W,
    guesses: &[GuessRecord],
    word_length: usize,
) -> io::Result<()> {
    for record in guesses {
        writeln!(
            out,
            "  {}  {}",
            colored_tiles(&record.evaluation),
            record.evaluation.to_emoji()
        )?;
    }
    for _ in guesses.len()..MAX_GUESSES {
        writeln!(out, "  {}", " _ ".repeat(word_length).bright_black())?;
    }
    Ok(())
}

/// Write a player's statistics with a guess distribution chart
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_statistics<W: Write>(out: &mut W, stats: &PlayerStatistics) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Statistics".bright_cyan().bold())?;
    writeln!(out, "  Played:          {}", stats.games_played())?;
    writeln!(out, "  Won:             {}", stats.games_won())?;
    writeln!(out, "  Lost:            {}", stats.games_lost())?;
    writeln!(
        out,
        "  Win rate:        {}",
        format!("{}%", stats.win_percentage()).bright_yellow()
    )?;
    writeln!(
        out,
        "  Avg guesses/win: {:.2}",
        stats.average_guesses_per_win()
    )?;
    writeln!(out, "  Current streak:  {}", stats.current_streak())?;
    writeln!(out, "  Max streak:      {}", stats.max_streak())?;

    writeln!(out, "\n📈 {}", "Guess Distribution".bright_cyan().bold())?;
    let max_count = stats.guess_distribution().iter().copied().max().unwrap_or(0);
    for guesses in 1..=MAX_GUESSES {
        let count = stats.wins_in(guesses);
        let bar = create_progress_bar(f64::from(count), f64::from(max_count), 30);
        writeln!(out, "  {guesses}: {} {count}", bar.green())?;
    }
    Ok(())
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overall:".bright_cyan().bold());
    println!("   Players:          {}", result.players);
    println!("   Games played:     {}", result.games_played());
    println!(
        "   Won:              {} {}",
        result.won,
        format!("({:.1}%)", result.win_rate() * 100.0).green()
    );
    if result.lost > 0 {
        println!(
            "   Lost:             {} {}",
            result.lost,
            format!("({:.1}%)", (1.0 - result.win_rate()) * 100.0).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!(
        "   Games/second:     {:.1}",
        result.games_played() as f64 / result.duration.as_secs_f64().max(f64::EPSILON)
    );

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in result.guess_distribution.iter().enumerate() {
        let guesses = i + 1;
        let bar = create_progress_bar(f64::from(count), f64::from(max_count), 40);
        println!(
            "   {guesses} {:<7} {} {count:5}",
            guesses_label(guesses),
            bar.green()
        );
    }

    println!("\n🔒 {}", "Invariants:".bright_cyan().bold());
    if result.violations.is_empty() {
        println!(
            "   {}",
            "statistics match finished sessions for every player".green()
        );
    } else {
        for player in &result.violations {
            println!(
                "   {} statistics disagree with sessions",
                player.as_str().red().bold()
            );
        }
    }
}
