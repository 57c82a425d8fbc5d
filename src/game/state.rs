use rand::Rng;

use crate::config::game::GAME_DURATION;
use crate::game::entities::{Mole, spawn_moles};

#[derive(Debug, Clone)]
pub struct GameState {
    pub grid_size: usize,
    pub moles: Vec<Mole>,
    pub score: u32,
    pub time_remaining: u32,
}

impl GameState {
    // Create a new game state with every mole hidden.
    pub fn new(grid_size: usize, rng: &mut impl Rng) -> Self {
        GameState {
            grid_size,
            moles: spawn_moles(grid_size, rng),
            score: 0,
            time_remaining: GAME_DURATION,
        }
    }

    /// Advance the game clock by one tick: run every mole's countdown in
    /// slot order, then burn one unit of remaining time.
    pub fn next_turn(&mut self) {
        for mole in &mut self.moles {
            mole.countdown();
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
    }

    pub fn is_over(&self) -> bool {
        self.time_remaining == 0
    }
}
