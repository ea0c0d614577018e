//! Game balance values
//!
//! Everything the simulation reads lives in one serde struct so a page can
//! ship a JSON override without a rebuild. Missing fields fall back to
//! [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics ===
    pub gravity: f32,
    pub flap_velocity: f32,
    pub speed: f32,

    // === Gates ===
    pub gap_size: f32,
    pub spawn_z: f32,
    pub reset_z: f32,
    pub spacing: f32,
    pub pipe_pairs: usize,
    pub gap_min: f32,
    pub gap_max: f32,
    pub collision_half_window: f32,

    // === Player ===
    pub player_radius: f32,
    pub start_y: f32,
    pub min_y: f32,
    pub max_y: f32,

    // === Gesture ===
    pub shoulder_offset: f32,
    pub up_threshold: f32,
    pub down_threshold: f32,
    pub gesture_window: f32,
    pub flap_cooldown: f32,

    // === Presentation (not read by the sim) ===
    pub pipe_height: f32,
    pub pipe_radius: f32,
    pub lane_x: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            speed: SPEED,

            gap_size: GAP_SIZE,
            spawn_z: SPAWN_Z,
            reset_z: RESET_Z,
            spacing: SPACING,
            pipe_pairs: PIPE_PAIRS,
            gap_min: GAP_MIN,
            gap_max: GAP_MAX,
            collision_half_window: COLLISION_HALF_WINDOW,

            player_radius: PLAYER_RADIUS,
            start_y: START_Y,
            min_y: MIN_Y,
            max_y: MAX_Y,

            shoulder_offset: SHOULDER_OFFSET,
            up_threshold: UP_THRESHOLD,
            down_threshold: DOWN_THRESHOLD,
            gesture_window: GESTURE_WINDOW,
            flap_cooldown: FLAP_COOLDOWN,

            pipe_height: PIPE_HEIGHT,
            pipe_radius: PIPE_RADIUS,
            lane_x: LANE_X,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Half the gate opening
    #[inline]
    pub fn half_gap(&self) -> f32 {
        self.gap_size / 2.0
    }

    /// Initial z of the gate at `index` in the pool
    #[inline]
    pub fn spawn_offset(&self, index: usize) -> f32 {
        self.spawn_z - index as f32 * self.spacing
    }

    /// Shoulder height for a given head height
    #[inline]
    pub fn shoulder_y(&self, head_y: f32) -> f32 {
        head_y - self.shoulder_offset
    }

    /// Values that make the game unplayable or odd. Not enforced.
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.gap_size <= 2.0 * self.player_radius {
            warnings.push("gap_size is not wider than the player; every gate is fatal");
        }
        if self.gap_min > self.gap_max {
            warnings.push("gap_min is above gap_max");
        }
        if self.gap_min < self.min_y || self.gap_max > self.max_y {
            warnings.push("gap range reaches outside [min_y, max_y]");
        }
        if self.start_y < self.min_y || self.start_y > self.max_y {
            warnings.push("start_y is outside [min_y, max_y]");
        }
        if self.pipe_pairs == 0 {
            warnings.push("pipe_pairs is zero; no gates will spawn");
        }
        if self.reset_z <= 0.0 {
            warnings.push("reset_z is not behind the player; gates recycle before scoring");
        }
        warnings
    }
}
