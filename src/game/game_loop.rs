//! The turn loop for an interactive game in the terminal.

use std::thread::sleep;
use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use crate::config::game::{POP_UP_CHANCE, TURN_DELAY_SECS};
use crate::game::input::PositionSource;
use crate::game::state::GameState;
use crate::game::systems::{print_grid, print_status, reveal_random_mole, resolve_whack};
use crate::game::types::{GameOutcome, WhackOutcome};

/// Run the game until the clock runs out or the player cancels.
///
/// Each turn: advance the tick, maybe pop a random mole, show the grid,
/// take one validated position from `source`, resolve the whack, then
/// pause briefly before the next turn. The final score is reported either
/// way the loop ends.
pub fn run_game_loop(
    game_state: &mut GameState,
    rng: &mut impl Rng,
    source: &mut impl PositionSource,
) -> GameOutcome {
    while !game_state.is_over() {
        game_state.next_turn();

        if rng.random_bool(POP_UP_CHANCE) {
            reveal_random_mole(game_state, rng);
        }

        print_grid(game_state);
        print_status(game_state);

        let Some(position) = source.next_position(game_state.grid_size) else {
            println!("Game interrupted! Your score: {}", game_state.score);
            info!(
                "[Game] Cancelled with {} ticks left, score {}",
                game_state.time_remaining, game_state.score
            );
            return GameOutcome::Cancelled;
        };

        match resolve_whack(game_state, position) {
            WhackOutcome::Hit => println!("Hit!"),
            WhackOutcome::Miss => {
                println!("Miss! There was no mole at position {position}.");
            }
            WhackOutcome::OutOfBounds => println!(
                "Invalid position! Please enter a number between 0 and {}.",
                game_state.grid_size - 1
            ),
        }

        debug!(
            "[Game] Turn done, score {}, {} ticks left",
            game_state.score, game_state.time_remaining
        );

        sleep(Duration::from_secs(TURN_DELAY_SECS));
    }

    println!("Game over! Your score: {}", game_state.score);
    GameOutcome::Completed
}
