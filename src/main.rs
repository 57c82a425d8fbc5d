//! Main entry point for the whack-a-mole terminal game.
//!
//! Initializes logging, runs the interactive game loop, and records the
//! final score on the high-score leaderboard.

use std::io::{self, Write};
use std::path::Path;

use log::{info, warn};

pub mod config;
mod game;
mod scores;

use config::game::{GRID_SIZE, HIGH_SCORES_FILE, LEADERBOARD_SIZE};
use game::game_loop::run_game_loop;
use game::input::ConsolePositionSource;
use game::state::GameState;
use scores::{read_high_scores, top_scores, validate_username, write_high_scores};

fn main() {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    print_intro();

    let mut rng = rand::rng();
    let mut game_state = GameState::new(GRID_SIZE, &mut rng);
    let mut source = ConsolePositionSource;

    run_game_loop(&mut game_state, &mut rng, &mut source);

    record_on_leaderboard(game_state.score, Path::new(HIGH_SCORES_FILE));
}

fn print_intro() {
    println!("Starting Whack-a-Mole! Enter q to quit.");
    println!("Instructions:");
    println!("- You will see a grid representing mole positions.");
    println!("- Enter the position (0-indexed) where you want to whack.");
    println!("- Alternatively, you can enter coordinates in the format (x,y).");
    println!("- Try to hit the moles when they pop up (indicated by [O]).");
}

/// Ask for a username, append the score to the high-score file, and show
/// the best entries. Store failures are logged and the game still exits
/// cleanly.
fn record_on_leaderboard(score: u32, path: &Path) {
    let Some(name) = prompt_username() else {
        return;
    };

    let mut records = match read_high_scores(path) {
        Ok(records) => records,
        Err(err) => {
            warn!("[Scores] Failed to read {}: {err}", path.display());
            return;
        }
    };

    records.push(vec![name.clone(), score.to_string()]);
    if let Err(err) = write_high_scores(&records, path) {
        warn!("[Scores] Failed to write {}: {err}", path.display());
        return;
    }
    info!("[Scores] Recorded {score} points for {name}");

    println!("--- High scores ---");
    for (rank, (name, score)) in top_scores(&records, LEADERBOARD_SIZE).iter().enumerate() {
        println!("{}. {name}: {score}", rank + 1);
    }
}

/// Prompt until a valid username is entered. An empty line or end of
/// input skips the leaderboard.
fn prompt_username() -> Option<String> {
    let stdin = io::stdin();

    loop {
        print!("Enter a username for the leaderboard (or leave empty to skip): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(err) => {
                warn!("[Input] Failed to read stdin: {err}");
                return None;
            }
        }

        let name = line.trim();
        if name.is_empty() {
            return None;
        }
        if validate_username(name) {
            return Some(name.to_string());
        }
        println!("Invalid username! Use 3-15 letters, digits or underscores.");
    }
}
