//! Game rendering system (terminal).
//!
//! This module turns the mole grid into its text form and prints it.

use crate::game::state::GameState;

/// Render the grid as one marker per slot, in slot order: `[O]` for a
/// showing mole, `[ ]` for an empty slot. Pure read, no mutation.
pub fn render_grid(game_state: &GameState) -> String {
    game_state
        .moles
        .iter()
        .map(|mole| if mole.visible { "[O]" } else { "[ ]" })
        .collect()
}

/// Print the grid to the terminal.
pub fn print_grid(game_state: &GameState) {
    println!("{}", render_grid(game_state));
}

/// Print the running score and remaining time.
pub fn print_status(game_state: &GameState) {
    println!(
        "Score: {} | Time remaining: {}",
        game_state.score, game_state.time_remaining
    );
}
