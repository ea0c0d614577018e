//! wasm-bindgen facade for the WebXR page
//!
//! The page's render loop owns the clock and the XR session. It calls
//! `tick` once per frame with the head and controller heights and reads the
//! snapshot back. Keyboard and controller callbacks only enqueue requests.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::sim::{GameState, InputQueue, PoseSample, tick};
use crate::snapshot::RenderSnapshot;
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Wing Flap loaded");
}

/// One game session as seen from JS
#[wasm_bindgen]
pub struct WingFlap {
    state: GameState,
    queue: Rc<RefCell<InputQueue>>,
}

#[wasm_bindgen]
impl WingFlap {
    /// `tuning_json` may override any subset of the tuning fields
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: Option<String>) -> WingFlap {
        let tuning = match tuning_json {
            Some(json) => Tuning::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring bad tuning JSON ({}), using defaults", e);
                Tuning::default()
            }),
            None => Tuning::default(),
        };
        let seed = js_sys::Date::now() as u64;

        WingFlap {
            state: GameState::new(seed, tuning),
            queue: Rc::new(RefCell::new(InputQueue::default())),
        }
    }

    /// Space bar equivalent
    pub fn request_flap(&self) {
        self.queue.borrow_mut().request_flap();
    }

    /// R key equivalent
    pub fn request_reset(&self) {
        self.queue.borrow_mut().request_reset();
    }

    /// Controller select/squeeze
    pub fn controller_activated(&self) {
        self.queue.borrow_mut().controller_activated();
    }

    /// Listen for Space / R on the window
    pub fn attach_keyboard(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let queue = self.queue.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            match event.code().as_str() {
                "Space" => queue.borrow_mut().request_flap(),
                "KeyR" => queue.borrow_mut().request_reset(),
                _ => {}
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Advance one frame. Pass NaN for any untracked pose.
    pub fn tick(&mut self, elapsed: f32, dt: f32, head_y: f32, left_y: f32, right_y: f32) {
        let pose = PoseSample::from_heights(head_y, left_y, right_y);
        let input = self.queue.borrow_mut().drain(elapsed, pose);
        for event in tick(&mut self.state, &input, dt) {
            log::debug!("{:?}", event);
        }
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        RenderSnapshot::capture(&self.state)
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn tuning_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.tuning).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// World root vertical offset
    pub fn world_offset_y(&self) -> f32 {
        -self.state.player.y
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn alive(&self) -> bool {
        self.state.is_alive()
    }

    pub fn hud_text(&self) -> String {
        crate::snapshot::hud_text(self.state.score, self.state.is_alive())
    }
}
