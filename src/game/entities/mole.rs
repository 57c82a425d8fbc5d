//! Mole entity logic.
//!
//! This module defines the per-slot mole state machine and initial spawning.

use rand::Rng;

use crate::config::game::{MOLE_TIMER_MAX, MOLE_TIMER_MIN};

/// One mole slot on the grid. A mole is either showing or hidden, and
/// carries a countdown timer that runs every tick, visible or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mole {
    pub position: usize,
    pub visible: bool,
    pub timer: u32,
}

impl Mole {
    pub fn new(position: usize, timer: u32) -> Self {
        Self {
            position,
            visible: false,
            timer,
        }
    }

    /// Show the mole. Idempotent.
    pub fn pop_up(&mut self) {
        self.visible = true;
    }

    /// Hide the mole. Idempotent.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Advance the mole's timer by one tick. Once the timer hits zero the
    /// mole is forced back underground, whatever it was doing.
    pub fn countdown(&mut self) {
        if self.timer > 0 {
            self.timer -= 1;
        }
        if self.timer == 0 {
            self.hide();
        }
    }
}

/// Spawn one hidden mole per grid slot, each with a timer drawn uniformly
/// from the configured inclusive range.
pub fn spawn_moles(grid_size: usize, rng: &mut impl Rng) -> Vec<Mole> {
    (0..grid_size)
        .map(|position| Mole::new(position, rng.random_range(MOLE_TIMER_MIN..=MOLE_TIMER_MAX)))
        .collect()
}
