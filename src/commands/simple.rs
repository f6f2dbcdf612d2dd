//! Simple interactive CLI mode
//!
//! Suggests a guess, reads the feedback the game showed, and repeats.

use crate::core::{Feedback, Word};
use crate::solver::Strategy;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the interactive assistant on stdin and stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: Strategy>(strategy: &mut S) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(strategy, &mut stdin.lock(), &mut stdout.lock())
}

enum Step {
    Quit,
    Restart,
    Undo,
    Feedback(Feedback),
}

/// Run the interactive assistant over arbitrary streams
///
/// Ends on `quit` or at end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<S, R, W>(strategy: &mut S, input: &mut R, out: &mut W) -> io::Result<()>
where
    S: Strategy,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\nWordle Strategist - Interactive Mode ({})\n", strategy.name())?;
    writeln!(out, "After each guess, enter the feedback pattern:")?;
    writeln!(out, "  - X, G or 🟩 for a letter in the right place")?;
    writeln!(out, "  - ., Y, ? or 🟨 for a letter in the wrong place")?;
    writeln!(out, "  - _, - or ⬜ for a letter not in the word")?;
    writeln!(out, "  - or type 'win' if you got it right!")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n")?;

    strategy.reset();

    loop {
        let turn = strategy.history().len() + 1;
        let guess = match strategy.guess() {
            Ok(guess) => guess,
            Err(e) => {
                writeln!(out, "❌ {e}. Your feedback may be incorrect.")?;
                writeln!(out, "Type 'undo' to go back, or 'new' to start over.")?;
                match read_step(input, out, "Command")? {
                    Some(Step::Undo) => undo(strategy, out)?,
                    Some(Step::Restart) => restart(strategy, out)?,
                    Some(Step::Quit) | None => return Ok(()),
                    Some(Step::Feedback(_)) => {}
                }
                continue;
            }
        };

        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(
            out,
            "Turn {turn}: {} candidates remaining",
            strategy.candidates().len()
        )?;
        writeln!(out, "Suggested guess: {}", guess.text().to_uppercase().bright_yellow().bold())?;

        let feedback = loop {
            match read_step(input, out, "Enter feedback")? {
                Some(Step::Feedback(feedback)) => break Some(feedback),
                Some(Step::Undo) => {
                    undo(strategy, out)?;
                    break None;
                }
                Some(Step::Restart) => {
                    restart(strategy, out)?;
                    break None;
                }
                Some(Step::Quit) | None => return Ok(()),
            }
        };
        let Some(feedback) = feedback else { continue };

        if let Err(e) = strategy.update(guess, feedback) {
            writeln!(out, "❌ {e}")?;
            continue;
        }

        if feedback.is_win() {
            print_win(strategy.history(), out)?;
            restart(strategy, out)?;
        }
    }
}

fn read_step<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<Option<Step>> {
    loop {
        write!(out, "{prompt}: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let step = match line.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => Step::Quit,
            "new" | "n" => Step::Restart,
            "undo" | "u" => Step::Undo,
            "win" | "correct" | "solved" => Step::Feedback(Feedback::WIN),
            text => match text.parse() {
                Ok(feedback) => Step::Feedback(feedback),
                Err(e) => {
                    writeln!(out, "❌ {e}")?;
                    continue;
                }
            },
        };
        return Ok(Some(step));
    }
}

fn undo<S: Strategy, W: Write>(strategy: &mut S, out: &mut W) -> io::Result<()> {
    let mut history = strategy.history().to_vec();
    if history.pop().is_none() {
        return writeln!(out, "Nothing to undo!");
    }

    match strategy.set_history(&history) {
        Ok(()) => writeln!(out, "✓ Undone! Back to turn {}", history.len() + 1),
        Err(e) => {
            strategy.reset();
            writeln!(out, "❌ {e}; starting over")
        }
    }
}

fn restart<S: Strategy, W: Write>(strategy: &mut S, out: &mut W) -> io::Result<()> {
    strategy.reset();
    writeln!(out, "\n🔄 New game started!\n")
}

fn print_win<W: Write>(history: &[(Word, Feedback)], out: &mut W) -> io::Result<()> {
    let turns = history.len();
    writeln!(
        out,
        "\n{} in {turns} {}",
        "🎉 Solved".bright_green().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    )?;
    for (i, (word, feedback)) in history.iter().enumerate() {
        writeln!(out, "  {}. {} {}", i + 1, word.text().to_uppercase(), feedback.to_emoji())?;
    }
    Ok(())
}
