//! Interactive game mode
//!
//! Text-based game loop against the evil engine.

use crate::core::Letter;
use crate::engine::{Engine, EngineError};
use crate::output::formatters::format_letters;
use colored::Colorize;
use std::io::{self, Write};

/// How a single game ended
enum GameEnd {
    Won,
    Lost,
    Quit,
    Restart,
}

/// Run the interactive game mode
///
/// Plays games of the given word length and guess budget until the player
/// quits. With `show_count`, the number of words the engine still considers is
/// displayed every turn.
///
/// # Errors
///
/// Returns an error if the word list has no words of the requested length or
/// if reading user input fails.
pub fn run_play(
    words: &[String],
    length: usize,
    max_guesses: usize,
    show_count: bool,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                        Evil Hangman                          ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the {length}-letter word. You can afford {max_guesses} wrong guesses.");
    println!("Fair warning: the word may not be decided until it has to be.\n");
    println!("Commands: 'quit' to exit, 'new' to restart the game\n");

    loop {
        let mut engine =
            Engine::new(words.iter(), length, max_guesses).map_err(|e| e.to_string())?;

        if engine.candidate_words().is_empty() {
            return Err(format!("no words of length {length} in the word list"));
        }

        match play_one(&mut engine, show_count)? {
            GameEnd::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            GameEnd::Restart => {
                println!("\n🔄 New game started!\n");
            }
            GameEnd::Won | GameEnd::Lost => {
                match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" => {
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// Play a single game to its end
fn play_one(engine: &mut Engine, show_count: bool) -> Result<GameEnd, String> {
    loop {
        print_status(engine, show_count)?;

        let input = get_user_input("Guess a letter")?.to_lowercase();
        match input.as_str() {
            "quit" | "exit" => return Ok(GameEnd::Quit),
            "new" => return Ok(GameEnd::Restart),
            _ => {}
        }

        let letter = match input.parse::<Letter>() {
            Ok(letter) => letter,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        match engine.record(letter) {
            Ok(0) => println!("Sorry, there are no {letter}'s."),
            Ok(1) => println!("Yes, there is one {letter}."),
            Ok(n) => println!("Yes, there are {n} {letter}'s."),
            Err(EngineError::DuplicateGuess(ch)) => {
                println!("You already guessed '{ch}'. Try another letter.");
                continue;
            }
            Err(e) => return Err(e.to_string()),
        }

        let pattern = engine.pattern().map_err(|e| e.to_string())?;
        if pattern.is_complete() {
            print_win(engine)?;
            return Ok(GameEnd::Won);
        }
        if engine.guesses_remaining() == 0 {
            print_loss(engine)?;
            return Ok(GameEnd::Lost);
        }
    }
}

fn print_status(engine: &Engine, show_count: bool) -> Result<(), String> {
    let pattern = engine.pattern().map_err(|e| e.to_string())?;

    println!("\n────────────────────────────────────────────────────────────");
    println!("  Word:      {}", pattern.to_string().bold());
    println!("  Guesses:   {}", engine.guesses_remaining());

    let guessed = engine.guessed_letters();
    if !guessed.is_empty() {
        println!("  Guessed:   {}", format_letters(&guessed));
    }
    if show_count {
        println!("  Words:     {}", engine.candidate_words().len());
    }
    println!("────────────────────────────────────────────────────────────");

    Ok(())
}

fn print_win(engine: &Engine) -> Result<(), String> {
    let candidates = engine.candidate_words();
    let word = candidates
        .iter()
        .next()
        .ok_or_else(|| EngineError::EmptyCandidates.to_string())?;

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "    🎉  Y O U   W I N !  🎉    ".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  You cornered {} in {} letters.\n",
        word.to_uppercase().bright_yellow().bold(),
        engine.guessed_letters().len()
    );

    Ok(())
}

fn print_loss(engine: &Engine) -> Result<(), String> {
    // The engine finally commits: reveal the first surviving candidate
    let candidates = engine.candidate_words();
    let word = candidates
        .iter()
        .next()
        .ok_or_else(|| EngineError::EmptyCandidates.to_string())?;

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "    💀  G A M E   O V E R  💀    ".bright_red().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  Out of guesses. The word was {}.\n",
        word.to_uppercase().bright_yellow().bold()
    );

    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
