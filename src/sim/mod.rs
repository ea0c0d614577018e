//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only comes in through `tick` (dt and the frame timestamp)
//! - Seeded or injected RNG only
//! - Input arrives as drained requests, never mid-tick
//! - No rendering or platform dependencies

pub mod collision;
pub mod gesture;
pub mod input;
pub mod obstacles;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{GapBounds, hits_gate, in_gate_window};
pub use gesture::{GesturePhase, GestureState, GestureTracker, Hand};
pub use input::{InputQueue, PoseSample, TickInput};
pub use obstacles::{GapSource, ScrollOutcome, reset_pool, spawn_pool};
pub use physics::{in_bounds, integrate};
pub use state::{DeathCause, GamePhase, GameState, Obstacle, PlayerState};
pub use tick::{FlapSource, GameEvent, tick};
