//! Vertical flight integration
//!
//! Semi-implicit Euler under constant gravity. A flap overrides the velocity
//! after gravity is applied, so the flap speed drives this frame's move.

use super::state::PlayerState;
use crate::tuning::Tuning;

/// Advance the player one frame. Returns false when the new height is out
/// of bounds (the player is marked dead). A dead player is left untouched.
pub fn integrate(player: &mut PlayerState, tuning: &Tuning, dt: f32, flap: bool) -> bool {
    if !player.alive {
        return false;
    }

    player.vy += tuning.gravity * dt;
    if flap {
        player.vy = tuning.flap_velocity;
    }
    player.y += player.vy * dt;

    if !in_bounds(player.y, tuning) {
        player.alive = false;
        return false;
    }
    true
}

/// Whether a height lies inside the playable band
#[inline]
pub fn in_bounds(y: f32, tuning: &Tuning) -> bool {
    y >= tuning.min_y && y <= tuning.max_y
}
