//! Wing Flap entry point
//!
//! The web build is driven from JS through `wing_flap::web`. Natively this
//! runs a headless session with a simple autopilot, which is handy for
//! checking a tuning file without a headset.
//!
//! Usage: `wing-flap [seed] [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);
    let tuning = match args.next() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match wing_flap::Tuning::from_json(&json) {
                Ok(tuning) => tuning,
                Err(e) => {
                    log::error!("Bad tuning file {}: {}", path, e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                log::error!("Can't read {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => wing_flap::Tuning::default(),
    };

    log::info!("Wing Flap (headless) starting, seed {}", seed);
    let score = headless::run(seed, tuning, 90.0, 120.0);
    println!("Autopilot score: {}", score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wing_flap::web::start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use wing_flap::sim::{GameEvent, GameState, InputQueue, PoseSample, tick};
    use wing_flap::{RenderSnapshot, Tuning};

    /// Fly for up to `seconds` at `hz` frames per second, return the score
    pub fn run(seed: u64, tuning: Tuning, hz: f32, seconds: f32) -> u32 {
        let dt = 1.0 / hz;
        let mut state = GameState::new(seed, tuning);
        let mut queue = InputQueue::default();
        let frames = (seconds * hz) as u32;

        for frame in 0..frames {
            if wants_flap(&state) {
                queue.request_flap();
            }

            let now = frame as f32 * dt;
            let input = queue.drain(now, PoseSample::default());
            let events = tick(&mut state, &input, dt);

            if events.iter().any(|e| matches!(e, GameEvent::Died { .. })) {
                log::info!("Autopilot crashed at t={:.2}s", now);
                break;
            }
        }

        match RenderSnapshot::capture(&state).to_json() {
            Ok(json) => log::debug!("Final frame: {}", json),
            Err(e) => log::warn!("Snapshot failed: {}", e),
        }
        state.score
    }

    /// Flap when falling below the next gate's center
    fn wants_flap(state: &GameState) -> bool {
        let target = state
            .obstacles
            .iter()
            .filter(|o| o.z < state.tuning.collision_half_window)
            .max_by(|a, b| a.z.total_cmp(&b.z))
            .map(|o| o.gap_y)
            .unwrap_or(state.tuning.start_y);

        state.player.vy <= 0.0 && state.player.y < target - 0.25
    }
}
