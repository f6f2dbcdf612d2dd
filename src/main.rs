//! Wordle Strategist - CLI
//!
//! Plays Wordle with greedy, minimax or precomputed strategies, and builds
//! the decision trees the precomputed strategy replays.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_strategist::{
    commands::{
        PrecomputeConfig, SolveConfig, TestAllConfig, print_test_all_statistics, run_precompute,
        run_simple, run_test_all, solve_word,
    },
    core::{MAX_ATTEMPTS, Word},
    output::{print_precompute_summary, print_solve_result},
    solver::{PrecomputedStrategy, StrategyType},
    tree::PrecomputedArtifact,
    wordlists::{
        DEFAULT_WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_strategist",
    about = "Wordle solver with greedy, minimax and precomputed decision-tree strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: greedy (default), minimax, precomputed
    #[arg(short, long, global = true, default_value = "greedy")]
    strategy: String,

    /// Dictionary file (whitespace-separated words); embedded list when omitted
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Saved decision tree for the precomputed strategy
    #[arg(long, global = true)]
    tree: Option<PathBuf>,

    /// Strategy the precomputed tree is built from when no tree file is given
    #[arg(long, global = true, default_value = "greedy")]
    inner: String,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple CLI mode (interactive assistant, default)
    Simple,

    /// Solve a target word (random dictionary word when omitted)
    Solve {
        /// The target word to solve
        word: Option<String>,

        /// Maximum number of guesses
        #[arg(short = 'n', long, default_value_t = MAX_ATTEMPTS)]
        max_guesses: usize,
    },

    /// Test the strategy on every dictionary word
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Build a decision tree with the inner strategy and save it
    Precompute {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Deepest history that still gets expanded
        #[arg(long, default_value_t = MAX_ATTEMPTS)]
        max_depth: usize,
    },
}

/// Load the dictionary from the -w flag, or the embedded list
fn load_dictionary(path: Option<&PathBuf>) -> Result<Vec<Word>> {
    let words = match path {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(DEFAULT_WORDS),
    };
    log::info!("dictionary has {} words", words.len());
    Ok(words)
}

fn live_strategy(name: &str, dictionary: Vec<Word>) -> Result<StrategyType> {
    match StrategyType::from_name(name, dictionary) {
        Some(strategy) => Ok(strategy),
        None => bail!("unknown strategy '{name}' (expected greedy or minimax)"),
    }
}

/// Build the strategy selected by the -s flag
fn select_strategy(cli: &Cli, dictionary: Vec<Word>) -> Result<StrategyType> {
    if cli.strategy != "precomputed" {
        return live_strategy(&cli.strategy, dictionary);
    }

    let artifact = cli
        .tree
        .as_ref()
        .map(|path| {
            PrecomputedArtifact::load(path)
                .with_context(|| format!("loading decision tree {}", path.display()))
        })
        .transpose()?;
    let inner = match artifact {
        Some(_) => None,
        None => Some(live_strategy(&cli.inner, dictionary)?),
    };

    Ok(PrecomputedStrategy::from_sources(artifact, inner.as_ref())?.into())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let dictionary = load_dictionary(cli.wordlist.as_ref())?;

    match &cli.command {
        None | Some(Commands::Simple) => {
            let mut strategy = select_strategy(&cli, dictionary)?;
            run_simple(&mut strategy)?;
        }
        Some(Commands::Solve { word, max_guesses }) => {
            let mut strategy = select_strategy(&cli, dictionary)?;
            let config = SolveConfig {
                target: word.clone(),
                max_guesses: *max_guesses,
            };
            let result = solve_word(config, &mut strategy)?;
            print_solve_result(&result, cli.verbose);
        }
        Some(Commands::TestAll { limit }) => {
            let strategy = select_strategy(&cli, dictionary)?;
            let config = TestAllConfig {
                limit: *limit,
                ..TestAllConfig::default()
            };
            print_test_all_statistics(&run_test_all(&strategy, config));
        }
        Some(Commands::Precompute { output, max_depth }) => {
            let strategy = live_strategy(&cli.inner, dictionary)?;
            let config = PrecomputeConfig {
                output: output.clone(),
                max_depth: *max_depth,
            };
            print_precompute_summary(&run_precompute(config, &strategy)?);
        }
    }

    Ok(())
}
