//! Wing Flap - flap through the gates with your arms
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, gestures, gates, game state)
//! - `tuning`: Data-driven game balance
//! - `snapshot`: What the render layer needs to draw a frame
//! - `web`: wasm-bindgen facade for the WebXR page

pub mod sim;
pub mod snapshot;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use snapshot::{ObstacleView, RenderSnapshot};
pub use tuning::Tuning;

use glam::Vec3;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Gravity (units/s², negative is down)
    pub const GRAVITY: f32 = -9.5;
    /// Vertical velocity set by a flap
    pub const FLAP_VELOCITY: f32 = 3.6;
    /// Gate approach speed (units/s)
    pub const SPEED: f32 = 5.0;

    /// Gate dimensions
    pub const GAP_SIZE: f32 = 1.35;
    pub const PIPE_HEIGHT: f32 = 10.0;
    pub const PIPE_RADIUS: f32 = 0.25;
    pub const LANE_X: f32 = 0.0;

    /// Gate pool layout along the travel axis
    pub const SPAWN_Z: f32 = -22.0;
    pub const RESET_Z: f32 = 2.0;
    pub const SPACING: f32 = 6.0;
    pub const PIPE_PAIRS: usize = 7;

    /// Range the gap center is drawn from on spawn/recycle
    pub const GAP_MIN: f32 = -0.2;
    pub const GAP_MAX: f32 = 1.4;

    /// Player
    pub const PLAYER_RADIUS: f32 = 0.18;
    pub const START_Y: f32 = 0.8;
    pub const MIN_Y: f32 = -1.2;
    pub const MAX_Y: f32 = 2.4;

    /// Half-width of the z band around the player plane where gates collide
    pub const COLLISION_HALF_WINDOW: f32 = 0.35;

    /// Arm gesture (shoulder = head - offset)
    pub const SHOULDER_OFFSET: f32 = 0.25;
    pub const UP_THRESHOLD: f32 = 0.10;
    pub const DOWN_THRESHOLD: f32 = 0.05;
    /// Seconds allowed between raise and lower
    pub const GESTURE_WINDOW: f32 = 0.65;
    /// Seconds after a flap during which a hand is ignored
    pub const FLAP_COOLDOWN: f32 = 0.22;
}

/// Vertical component of a tracked pose, if it is usable
#[inline]
pub fn tracked_height(pos: Option<Vec3>) -> Option<f32> {
    pos.map(|p| p.y).filter(|y| y.is_finite())
}
