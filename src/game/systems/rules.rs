//! Whack resolution and random reveals.

use log::debug;
use rand::Rng;
use rand::seq::IteratorRandom;

use crate::game::state::GameState;
use crate::game::types::WhackOutcome;

/// Pop up one mole chosen uniformly from the whole grid. Picking a mole
/// that is already showing is a no-op.
pub fn reveal_random_mole(game_state: &mut GameState, rng: &mut impl Rng) {
    if let Some(mole) = game_state.moles.iter_mut().choose(rng) {
        debug!("[Game] Mole {} pops up", mole.position);
        mole.pop_up();
    }
}

/// Resolve a whack at the given position.
///
/// An out-of-range position changes nothing. A showing mole is hidden and
/// scores exactly one point; a hidden slot is a miss and changes nothing.
pub fn resolve_whack(game_state: &mut GameState, position: usize) -> WhackOutcome {
    if position >= game_state.grid_size {
        return WhackOutcome::OutOfBounds;
    }

    let mole = &mut game_state.moles[position];
    if mole.visible {
        mole.hide();
        game_state.score += 1;
        WhackOutcome::Hit
    } else {
        WhackOutcome::Miss
    }
}
