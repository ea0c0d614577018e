//! Per-tick input
//!
//! Keyboard and controller callbacks fire between frames. They only set
//! request flags on an [`InputQueue`]; the frame loop drains the queue into
//! a [`TickInput`] right before calling `tick`, so one tick always sees a
//! consistent set of requests.

use glam::Vec3;

use super::gesture::Hand;
use crate::tracked_height;

/// Head and controller positions for one frame (world space)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PoseSample {
    pub head: Option<Vec3>,
    pub left: Option<Vec3>,
    pub right: Option<Vec3>,
}

impl PoseSample {
    /// Build from heights only; non-finite values count as untracked
    pub fn from_heights(head_y: f32, left_y: f32, right_y: f32) -> Self {
        let at = |y: f32| y.is_finite().then(|| Vec3::new(0.0, y, 0.0));
        Self {
            head: at(head_y),
            left: at(left_y),
            right: at(right_y),
        }
    }

    pub fn head_height(&self) -> Option<f32> {
        tracked_height(self.head)
    }

    /// Hand heights indexed by [`Hand::index`]
    pub fn hand_heights(&self) -> [Option<f32>; 2] {
        let mut heights = [None; 2];
        heights[Hand::Left.index()] = tracked_height(self.left);
        heights[Hand::Right.index()] = tracked_height(self.right);
        heights
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Frame timestamp in seconds (render clock), used for gesture timing
    pub now: f32,
    /// Tracked poses for gesture detection
    pub pose: PoseSample,
    /// Flap (space bar)
    pub flap: bool,
    /// Unconditional restart (R key)
    pub reset: bool,
    /// Any controller select/squeeze; restarts only after death
    pub controller_activated: bool,
}

/// Single-shot requests collected between frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputQueue {
    flap: bool,
    reset: bool,
    controller_activated: bool,
}

impl InputQueue {
    pub fn request_flap(&mut self) {
        self.flap = true;
    }

    pub fn request_reset(&mut self) {
        self.reset = true;
    }

    pub fn controller_activated(&mut self) {
        self.controller_activated = true;
    }

    /// Take pending requests, leaving the queue empty
    pub fn drain(&mut self, now: f32, pose: PoseSample) -> TickInput {
        let pending = std::mem::take(self);
        TickInput {
            now,
            pose,
            flap: pending.flap,
            reset: pending.reset,
            controller_activated: pending.controller_activated,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
