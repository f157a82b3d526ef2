//! Evil Hangman - CLI
//!
//! Hangman against an engine that never commits to a secret word until it has
//! no other choice.

use anyhow::Result;
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{SimulationConfig, analyze_letter, run_play, run_simulation},
    core::Letter,
    output::{print_analysis_result, print_simulation_result},
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman against an adversary that keeps the largest set of words alive",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a word file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play {
        /// Word length to play with
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Wrong guesses allowed
        #[arg(short, long, default_value = "8")]
        guesses: usize,

        /// Show how many words the engine is still considering
        #[arg(long)]
        show_count: bool,
    },

    /// Play automated games and report statistics
    Simulate {
        /// Word lengths to test, comma-separated (default: every length in the list)
        #[arg(short, long, value_delimiter = ',')]
        lengths: Vec<usize>,

        /// Wrong guesses allowed per game
        #[arg(short, long, default_value = "8")]
        guesses: usize,

        /// Games per length
        #[arg(short, long, default_value = "20")]
        trials: usize,

        /// Guesser: frequency (default) or random
        #[arg(short, long, default_value = "frequency")]
        strategy: String,
    },

    /// Show how an opening letter would split the candidate words
    Analyze {
        /// Letter to analyze
        letter: Letter,

        /// Word length to analyze at
        #[arg(short = 'n', long, default_value = "5")]
        length: usize,
    },
}

/// Load the word list selected by the -w flag
fn load_words(wordlist_mode: &str) -> Result<Vec<String>> {
    use evil_hangman::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

/// Every word length present in the list, ascending
fn lengths_in(words: &[String]) -> Vec<usize> {
    let mut lengths: Vec<usize> = words.iter().map(|word| word.chars().count()).collect();
    lengths.sort_unstable();
    lengths.dedup();
    lengths
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        length: 5,
        guesses: 8,
        show_count: false,
    });

    match command {
        Commands::Play {
            length,
            guesses,
            show_count,
        } => run_play(&words, length, guesses, show_count).map_err(|e| anyhow::anyhow!(e)),
        Commands::Simulate {
            lengths,
            guesses,
            trials,
            strategy,
        } => {
            let lengths = if lengths.is_empty() {
                lengths_in(&words)
            } else {
                lengths
            };
            let config = SimulationConfig {
                lengths,
                max_guesses: guesses,
                trials,
                strategy,
            };
            let result = run_simulation(&words, &config);
            print_simulation_result(&result);
            Ok(())
        }
        Commands::Analyze { letter, length } => {
            let result = analyze_letter(&words, length, letter).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}
