//! Gate collision
//!
//! A gate only collides while it is inside a thin z band around the player
//! plane. Inside the band the test is one-dimensional: the player's height
//! must sit inside the gap shrunk by the player radius on both sides.

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Safe vertical interval through a gate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapBounds {
    pub top: f32,
    pub bottom: f32,
}

impl GapBounds {
    pub fn for_gap(gap_y: f32, tuning: &Tuning) -> Self {
        let half_gap = tuning.half_gap();
        Self {
            top: gap_y + half_gap - tuning.player_radius,
            bottom: gap_y - half_gap + tuning.player_radius,
        }
    }

    /// Whether a player centered at `y` clears both pipes
    #[inline]
    pub fn clears(&self, y: f32) -> bool {
        !(y > self.top || y < self.bottom)
    }
}

/// Whether a gate at `z` is passing through the player plane
#[inline]
pub fn in_gate_window(z: f32, tuning: &Tuning) -> bool {
    z > -tuning.collision_half_window && z < tuning.collision_half_window
}

/// True if the player at height `y` hits this gate right now
pub fn hits_gate(obstacle: &Obstacle, y: f32, tuning: &Tuning) -> bool {
    in_gate_window(obstacle.z, tuning) && !GapBounds::for_gap(obstacle.gap_y, tuning).clears(y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(z: f32, gap_y: f32) -> Obstacle {
        Obstacle {
            z,
            gap_y,
            passed: false,
        }
    }

    #[test]
    fn test_bounds_inset_by_radius() {
        let bounds = GapBounds::for_gap(0.0, &Tuning::default());
        assert!((bounds.top - 0.495).abs() < 1e-5);
        assert!((bounds.bottom + 0.495).abs() < 1e-5);
    }

    #[test]
    fn test_above_gap_inside_window_hits() {
        let tuning = Tuning::default();
        assert!(hits_gate(&gate(-0.3, 0.0), 0.5, &tuning));
    }

    #[test]
    fn test_below_gap_hits() {
        let tuning = Tuning::default();
        assert!(hits_gate(&gate(0.1, 1.0), 0.4, &tuning));
    }

    #[test]
    fn test_centered_player_clears() {
        let tuning = Tuning::default();
        assert!(!hits_gate(&gate(0.0, 0.7), 0.7, &tuning));
        assert!(!hits_gate(&gate(0.0, 0.7), 1.1, &tuning));
    }

    #[test]
    fn test_outside_window_never_hits() {
        let tuning = Tuning::default();
        assert!(!hits_gate(&gate(-0.36, 0.0), 2.0, &tuning));
        assert!(!hits_gate(&gate(0.35, 0.0), 2.0, &tuning));
        assert!(!hits_gate(&gate(-5.0, 0.0), -1.0, &tuning));
    }
}
