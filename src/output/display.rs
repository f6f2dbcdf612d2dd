//! Display functions for command results

use super::formatters::colorize_guess;
use crate::commands::PrecomputeSummary;
use crate::solver::{Outcome, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colorize_guess(&step.word, step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    match &result.outcome {
        Outcome::Solved(n) => println!(
            "{}",
            format!("✅ Solved in {n} {}!", if *n == 1 { "guess" } else { "guesses" })
                .green()
                .bold()
        ),
        Outcome::Exhausted => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        ),
        Outcome::Failed(e) => println!("{}", format!("❌ Word not found: {e}").red().bold()),
    }
}

/// Print the summary of a precompute run
pub fn print_precompute_summary(summary: &PrecomputeSummary) {
    println!(
        "{} {} ({} nodes, depth {}) in {:.2}s",
        "✅ Saved decision tree to".green().bold(),
        summary.output.display(),
        summary.nodes,
        summary.depth,
        summary.duration.as_secs_f64()
    );
}
