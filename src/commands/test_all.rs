//! Test all words - comprehensive strategy evaluation
//!
//! Plays a game against every dictionary word and collects statistics.

use crate::core::{MAX_ATTEMPTS, Word};
use crate::output::formatters::create_progress_bar;
use crate::solver::{Outcome, Session, SolveResult, Strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Options for a test-all run
#[derive(Debug, Clone, Copy)]
pub struct TestAllConfig {
    /// Only play the first N dictionary words
    pub limit: Option<usize>,
    pub max_attempts: usize,
    /// Draw an indicatif progress bar while playing
    pub progress: bool,
}

impl Default for TestAllConfig {
    fn default() -> Self {
        Self {
            limit: None,
            max_attempts: MAX_ATTEMPTS,
            progress: true,
        }
    }
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub strategy: &'static str,
    pub total_words: usize,
    pub solved: usize,
    /// Words the strategy did not find, in dictionary order
    pub failed: Vec<Word>,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub worst_words: Vec<(Word, usize)>,
}

impl TestAllStatistics {
    /// Summarize a batch of finished games
    #[must_use]
    pub fn from_results(strategy: &'static str, results: &[SolveResult], total_time: Duration) -> Self {
        let mut guess_distribution = BTreeMap::new();
        let mut failed = Vec::new();
        let mut worst_words = Vec::new();

        for result in results {
            match result.outcome {
                Outcome::Solved(n) => {
                    *guess_distribution.entry(n).or_insert(0) += 1;
                    if n >= 5 {
                        worst_words.push((result.target, n));
                    }
                }
                Outcome::Exhausted | Outcome::Failed(_) => failed.push(result.target),
            }
        }

        let solved: usize = guess_distribution.values().sum();
        let total_guesses: usize = guess_distribution.iter().map(|(n, count)| n * count).sum();
        let average_guesses = if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        };

        worst_words.sort_by_key(|&(_, n)| std::cmp::Reverse(n));
        worst_words.truncate(10);

        Self {
            strategy,
            total_words: results.len(),
            solved,
            failed,
            max_guesses: guess_distribution.keys().next_back().copied().unwrap_or(0),
            guess_distribution,
            total_time,
            average_guesses,
            worst_words,
        }
    }
}

/// Play every dictionary word (or the first `limit` of them)
///
/// Games run on the rayon pool; each worker plays on its own clone of the
/// strategy.
pub fn run_test_all<S>(strategy: &S, config: TestAllConfig) -> TestAllStatistics
where
    S: Strategy + Clone + Send + Sync,
{
    let dictionary = strategy.dictionary();
    let test_words = &dictionary[..config.limit.map_or(dictionary.len(), |n| n.min(dictionary.len()))];
    let session = Session::new(config.max_attempts);

    let pb = if config.progress {
        ProgressBar::new(test_words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message(strategy.name());

    let start = Instant::now();
    let results: Vec<SolveResult> = test_words
        .par_iter()
        .map_init(
            || strategy.clone(),
            |local, &secret| {
                let result = session.play(local, secret);
                pb.inc(1);
                result
            },
        )
        .collect();
    pb.finish_with_message("Complete!");

    TestAllStatistics::from_results(strategy.name(), &results, start.elapsed())
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ({}) ", stats.strategy);
    println!("{}", "═".repeat(70));

    let total = stats.total_words.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if !stats.failed.is_empty() {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed.len(),
            format!("({:.1}%)", stats.failed.len() as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!("  Total time:          {:.2}s", stats.total_time.as_secs_f64());

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for (guesses, &count) in &stats.guess_distribution {
        let percentage = count as f64 / total * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("  {guesses} guesses: {} {count:4} ({percentage:5.1}%)", bar.green());
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({guesses} guesses)", word.text().to_uppercase().yellow());
        }
    }

    if !stats.failed.is_empty() {
        println!("\n❌ {}", "Not Found".red().bold());
        for word in stats.failed.iter().take(10) {
            println!("  {}", word.text().to_uppercase().red());
        }
    }
}
