//! Per-frame simulation tick
//!
//! Order within a tick:
//! 1. reset requests
//! 2. (dead: stop here, state is frozen)
//! 3. gesture recognition, merged with the keyboard flap
//! 4. vertical integration and bounds check
//! 5. per gate: scroll, score crossing, recycle, collision window

use serde::{Deserialize, Serialize};

use super::collision::hits_gate;
use super::gesture::Hand;
use super::input::TickInput;
use super::obstacles::GapSource;
use super::physics::integrate;
use super::state::{DeathCause, GameState};

/// What triggered a flap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlapSource {
    Keyboard,
    Gesture(Hand),
}

/// Notable things that happened during a tick (for audio/UI hooks)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Reset,
    Flapped(FlapSource),
    Scored { obstacle: usize, score: u32 },
    Recycled { obstacle: usize, gap_y: f32 },
    Died { cause: DeathCause },
}

/// Advance the session by one rendered frame of `dt` seconds
pub fn tick<G: GapSource>(
    state: &mut GameState<G>,
    input: &TickInput,
    dt: f32,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    if input.reset || (input.controller_activated && !state.is_alive()) {
        state.reset();
        events.push(GameEvent::Reset);
        return events;
    }

    state.time_ticks += 1;

    if !state.is_alive() {
        return events;
    }

    state.elapsed += dt;

    // Gestures first so a completed downstroke moves the player this frame
    let gesture_flap = match input.pose.head_height() {
        Some(head_y) => state.gestures.update(
            input.now,
            head_y,
            input.pose.hand_heights(),
            &state.tuning,
        ),
        None => None,
    };
    let flap = if input.flap {
        Some(FlapSource::Keyboard)
    } else {
        gesture_flap.map(FlapSource::Gesture)
    };
    if let Some(source) = flap {
        events.push(GameEvent::Flapped(source));
    }

    if !integrate(&mut state.player, &state.tuning, dt, flap.is_some()) {
        died(state, DeathCause::OutOfBounds, &mut events);
    }

    // Gates still move on the frame the player dies
    let y = state.player.y;
    for index in 0..state.obstacles.len() {
        let mut obstacle = state.obstacles[index];
        let outcome = obstacle.scroll(&state.tuning, dt, &mut state.source);
        state.obstacles[index] = obstacle;

        if outcome.scored {
            state.score += 1;
            log::debug!("Passed gate {} (score {})", index, state.score);
            events.push(GameEvent::Scored {
                obstacle: index,
                score: state.score,
            });
        }
        if outcome.recycled {
            log::trace!("Gate {} recycled, gap {:.2}", index, obstacle.gap_y);
            events.push(GameEvent::Recycled {
                obstacle: index,
                gap_y: obstacle.gap_y,
            });
        }

        if state.is_alive() && hits_gate(&obstacle, y, &state.tuning) {
            state.player.alive = false;
            died(state, DeathCause::Collision { obstacle: index }, &mut events);
        }
    }

    events
}

fn died<G>(state: &GameState<G>, cause: DeathCause, events: &mut Vec<GameEvent>) {
    log::info!(
        "Died ({:?}) with score {} after {} ticks ({:.1}s)",
        cause,
        state.score,
        state.time_ticks,
        state.elapsed
    );
    events.push(GameEvent::Died { cause });
}
