//! Render-facing view of a session
//!
//! The JS/WebXR layer owns meshes, lights and the VR session. Each frame it
//! reads one of these and places things. The world root is offset by `-y`
//! so the camera stays put and the gates move.

use glam::Vec3;
use serde::Serialize;

use crate::sim::{GapSource, GameState};

/// Placement of one gate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleView {
    /// Gate center (lane x, gap center, z) in world-root space
    pub position: Vec3,
    pub gap_y: f32,
    pub passed: bool,
}

/// Everything needed to draw a frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub player_y: f32,
    /// Vertical offset to apply to the world root
    pub world_offset_y: f32,
    pub score: u32,
    pub alive: bool,
    pub hud_text: String,
    pub obstacles: Vec<ObstacleView>,
}

impl RenderSnapshot {
    pub fn capture<G: GapSource>(state: &GameState<G>) -> Self {
        let lane_x = state.tuning.lane_x;
        Self {
            player_y: state.player.y,
            world_offset_y: -state.player.y,
            score: state.score,
            alive: state.is_alive(),
            hud_text: hud_text(state.score, state.is_alive()),
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    position: Vec3::new(lane_x, o.gap_y, o.z),
                    gap_y: o.gap_y,
                    passed: o.passed,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Score line shown in front of the player
pub fn hud_text(score: u32, alive: bool) -> String {
    if alive {
        format!("Score: {}", score)
    } else {
        format!("Game Over | Score: {} | Press any button", score)
    }
}
