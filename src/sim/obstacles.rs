//! Gate pool: spawn, scroll, score crossing, recycle
//!
//! The pool is allocated once per session. Gates move toward the player
//! (increasing z); once one is fully behind the player it jumps back to the
//! spawn distance with a fresh gap.

use rand::Rng;

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Source of gap centers. Any `rand::Rng` works; tests can script one.
pub trait GapSource {
    /// A value in `[min, max]` (or `min` when the range is empty)
    fn next_gap(&mut self, min: f32, max: f32) -> f32;
}

impl<R: Rng + ?Sized> GapSource for R {
    fn next_gap(&mut self, min: f32, max: f32) -> f32 {
        if min < max {
            self.random_range(min..max)
        } else {
            min
        }
    }
}

/// What happened to one gate during a scroll step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollOutcome {
    /// The gate crossed the player plane this step
    pub scored: bool,
    /// The gate went past `reset_z` and was sent back to spawn
    pub recycled: bool,
}

/// Build the pool: gate `i` at `spawn_z - i * spacing`
pub fn spawn_pool<G: GapSource + ?Sized>(tuning: &Tuning, source: &mut G) -> Vec<Obstacle> {
    (0..tuning.pipe_pairs)
        .map(|i| Obstacle {
            z: tuning.spawn_offset(i),
            gap_y: source.next_gap(tuning.gap_min, tuning.gap_max),
            passed: false,
        })
        .collect()
}

/// Put every gate of an existing pool back at its initial offset
pub fn reset_pool<G: GapSource + ?Sized>(
    obstacles: &mut [Obstacle],
    tuning: &Tuning,
    source: &mut G,
) {
    for (i, obstacle) in obstacles.iter_mut().enumerate() {
        obstacle.z = tuning.spawn_offset(i);
        obstacle.gap_y = source.next_gap(tuning.gap_min, tuning.gap_max);
        obstacle.passed = false;
    }
}

impl Obstacle {
    /// Move the gate toward the player, mark the crossing, recycle if past
    pub fn scroll<G: GapSource + ?Sized>(
        &mut self,
        tuning: &Tuning,
        dt: f32,
        source: &mut G,
    ) -> ScrollOutcome {
        let mut outcome = ScrollOutcome::default();

        self.z += tuning.speed * dt;

        if !self.passed && self.z > 0.0 {
            self.passed = true;
            outcome.scored = true;
        }

        if self.z > tuning.reset_z {
            self.recycle(tuning, source);
            outcome.recycled = true;
        }

        outcome
    }

    /// Back to the spawn distance with a new gap
    pub fn recycle<G: GapSource + ?Sized>(&mut self, tuning: &Tuning, source: &mut G) {
        self.z = tuning.spawn_z;
        self.gap_y = source.next_gap(tuning.gap_min, tuning.gap_max);
        self.passed = false;
    }
}
