/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as grid size,
/// game duration, and mole timing.
pub const GRID_SIZE: usize = 3; // Number of mole slots in the grid.

/// Game duration in ticks. One tick elapses per turn.
pub const GAME_DURATION: u32 = 30;

/// Inclusive lower bound for a mole's initial countdown timer, in ticks.
pub const MOLE_TIMER_MIN: u32 = 3;

/// Inclusive upper bound for a mole's initial countdown timer, in ticks.
pub const MOLE_TIMER_MAX: u32 = 6;

/// Probability that a random mole pops up on any given turn.
pub const POP_UP_CHANCE: f64 = 0.5;

/// Real-time delay between turns (in seconds). Pacing only, the game
/// clock advances one logical tick per turn regardless.
pub const TURN_DELAY_SECS: u64 = 1;

/// File the high-score table is persisted to.
pub const HIGH_SCORES_FILE: &str = "high_scores.csv";

/// Number of entries shown on the post-game leaderboard.
pub const LEADERBOARD_SIZE: usize = 5;
