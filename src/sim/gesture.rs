//! Arm-flap gesture detection
//!
//! Each hand runs a two-state machine against the shoulder line
//! (head height minus a fixed offset):
//!
//! ```text
//!   Idle --(hand above shoulder + up_threshold)--> Up
//!   Up   --(hand below shoulder - down_threshold)--> Idle, fires a flap
//!   Up   --(gesture_window elapsed)--> Idle, no flap
//! ```
//!
//! A hand that just flapped is ignored for `flap_cooldown` seconds so
//! controller jitter at the bottom of the stroke can't re-trigger it.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Tracked hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub const ALL: [Hand; 2] = [Hand::Left, Hand::Right];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Hand::Left => 0,
            Hand::Right => 1,
        }
    }
}

/// Where a hand is in the raise-then-lower motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GesturePhase {
    #[default]
    Idle,
    /// Raised, waiting for the downstroke
    Up,
}

/// Per-hand gesture state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    pub phase: GesturePhase,
    /// Timestamp the hand went above the raise line
    pub rising_start: f32,
    /// Timestamp of this hand's last flap
    pub last_flap: f32,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            phase: GesturePhase::Idle,
            rising_start: 0.0,
            last_flap: f32::NEG_INFINITY,
        }
    }
}

impl GestureState {
    /// Feed one height sample. Returns true when this sample completes a flap.
    pub fn step(&mut self, now: f32, shoulder_y: f32, y: f32, tuning: &Tuning) -> bool {
        if now - self.last_flap < tuning.flap_cooldown {
            return false;
        }

        match self.phase {
            GesturePhase::Idle => {
                if y > shoulder_y + tuning.up_threshold {
                    self.phase = GesturePhase::Up;
                    self.rising_start = now;
                }
                false
            }
            GesturePhase::Up => {
                if now - self.rising_start > tuning.gesture_window {
                    // Raised too long without a downstroke
                    self.phase = GesturePhase::Idle;
                    return false;
                }
                if y < shoulder_y - tuning.down_threshold {
                    self.last_flap = now;
                    self.phase = GesturePhase::Idle;
                    return true;
                }
                false
            }
        }
    }
}

/// Gesture state for both hands
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureTracker {
    hands: [GestureState; 2],
}

impl GestureTracker {
    pub fn hand(&self, hand: Hand) -> &GestureState {
        &self.hands[hand.index()]
    }

    /// Step both hands against the current head height. `heights` is indexed
    /// by [`Hand::index`]; `None` skips that hand for this sample.
    ///
    /// Returns the first hand (left before right) that completed a flap.
    /// Both hands are always stepped. A non-finite `now` skips the sample.
    pub fn update(
        &mut self,
        now: f32,
        head_y: f32,
        heights: [Option<f32>; 2],
        tuning: &Tuning,
    ) -> Option<Hand> {
        if !now.is_finite() {
            return None;
        }

        let shoulder_y = tuning.shoulder_y(head_y);
        let mut fired = None;

        for hand in Hand::ALL {
            let Some(y) = heights[hand.index()] else {
                continue;
            };
            if self.hands[hand.index()].step(now, shoulder_y, y, tuning) {
                log::debug!("{:?} hand flap at t={:.3}", hand, now);
                fired = fired.or(Some(hand));
            }
        }

        fired
    }
}
