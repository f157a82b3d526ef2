//! Simulation command
//!
//! Plays automated games against the engine and aggregates statistics.

use crate::engine::Engine;
use crate::player::{Guesser, GuesserType};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulationConfig {
    /// Word lengths to play
    pub lengths: Vec<usize>,
    /// Wrong guesses allowed per game
    pub max_guesses: usize,
    /// Games per length
    pub trials: usize,
    /// Guesser name, resolved via `GuesserType::from_name`
    pub strategy: String,
}

/// Outcome of one automated game
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub length: usize,
    pub won: bool,
    pub letters_used: usize,
    pub wrong_guesses: usize,
    pub final_candidates: usize,
}

/// Per-length aggregate
#[derive(Debug, Clone)]
pub struct LengthSummary {
    pub length: usize,
    pub games: usize,
    pub wins: usize,
    pub average_wrong: f64,
}

/// Aggregated result of a simulation run
pub struct SimulationResult {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub average_letters: f64,
    pub average_wrong: f64,
    pub wrong_distribution: HashMap<usize, usize>,
    pub per_length: Vec<LengthSummary>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run automated games for every configured length
///
/// Games run in parallel; each owns an independent engine, so no state is
/// shared between them. Lengths with no words in the list contribute no games.
///
/// # Panics
///
/// Panics if the progress-bar template fails to parse, which cannot happen
/// with the fixed template used here.
#[must_use]
pub fn run_simulation(words: &[String], config: &SimulationConfig) -> SimulationResult {
    let jobs: Vec<usize> = config
        .lengths
        .iter()
        .flat_map(|&length| std::iter::repeat_n(length, config.trials))
        .collect();

    let pb = ProgressBar::new(jobs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<GameOutcome> = jobs
        .par_iter()
        .filter_map(|&length| {
            let guesser = GuesserType::from_name(&config.strategy);
            let outcome = play_out(words, length, config.max_guesses, &guesser);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    aggregate(outcomes, duration)
}

/// Play a single automated game to its end
///
/// Returns `None` when no words of the requested length exist.
fn play_out(
    words: &[String],
    length: usize,
    max_guesses: usize,
    guesser: &impl Guesser,
) -> Option<GameOutcome> {
    let mut engine = Engine::new(words.iter(), length, max_guesses).ok()?;
    if engine.candidate_words().is_empty() {
        return None;
    }

    let mut letters_used = 0;
    let mut wrong_guesses = 0;

    loop {
        let pattern = engine.pattern().ok()?.clone();

        if pattern.is_complete() {
            return Some(GameOutcome {
                length,
                won: true,
                letters_used,
                wrong_guesses,
                final_candidates: engine.candidate_words().len(),
            });
        }
        if engine.guesses_remaining() == 0 {
            return Some(GameOutcome {
                length,
                won: false,
                letters_used,
                wrong_guesses,
                final_candidates: engine.candidate_words().len(),
            });
        }

        let guessed = engine.guessed_letters();
        let Some(letter) = guesser.next_letter(&pattern, &guessed) else {
            // Alphabet exhausted without completing the pattern
            return Some(GameOutcome {
                length,
                won: false,
                letters_used,
                wrong_guesses,
                final_candidates: engine.candidate_words().len(),
            });
        };

        letters_used += 1;
        match engine.record(letter) {
            Ok(0) => wrong_guesses += 1,
            Ok(_) => {}
            Err(_) => return None,
        }
    }
}

fn aggregate(outcomes: Vec<GameOutcome>, duration: Duration) -> SimulationResult {
    let total_games = outcomes.len();
    let wins = outcomes.iter().filter(|outcome| outcome.won).count();

    let total_letters: usize = outcomes.iter().map(|outcome| outcome.letters_used).sum();
    let total_wrong: usize = outcomes.iter().map(|outcome| outcome.wrong_guesses).sum();

    let mut wrong_distribution: HashMap<usize, usize> = HashMap::new();
    let mut by_length: HashMap<usize, (usize, usize, usize)> = HashMap::new();
    for outcome in &outcomes {
        *wrong_distribution.entry(outcome.wrong_guesses).or_insert(0) += 1;

        let entry = by_length.entry(outcome.length).or_insert((0, 0, 0));
        entry.0 += 1;
        entry.1 += usize::from(outcome.won);
        entry.2 += outcome.wrong_guesses;
    }

    let mut per_length: Vec<LengthSummary> = by_length
        .into_iter()
        .map(|(length, (games, wins, wrong))| LengthSummary {
            length,
            games,
            wins,
            average_wrong: wrong as f64 / games as f64,
        })
        .collect();
    per_length.sort_by_key(|summary| summary.length);

    let divisor = total_games.max(1) as f64;
    SimulationResult {
        total_games,
        wins,
        losses: total_games - wins,
        average_letters: total_letters as f64 / divisor,
        average_wrong: total_wrong as f64 / divisor,
        wrong_distribution,
        per_length,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
