//! Pulse Bloom core crate.
//!
//! A single-screen timing game: a circle pulses around a fixed ring and the player
//! presses Space (or taps the ring) when the two line up. Hits grow a golden-angle
//! particle field; reaching the reset score plays an ending sequence that eats the
//! field away again.
//!
//! Everything except `app` and `render` is plain Rust and runs under `cargo test`
//! on the host; those two modules drive the browser canvas through `web-sys`.

use wasm_bindgen::prelude::*;

mod app;
pub mod config;
pub mod easing;
pub mod ending;
pub mod game;
pub mod judge;
pub mod oscillator;
pub mod phyllotaxis;
mod render;
pub mod ripple;

pub use config::{ConfigError, GameConfig};
pub use easing::Rgba;
pub use game::{DrawCommand, GameState, Outcome, Scene};
pub use judge::InputEvent;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    console_log::init_with_level(log::Level::Info).ok();
}

/// Canvas size in CSS pixels as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Half of the smaller dimension: the largest radius that stays on screen.
    pub fn half_min(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }
}

/// Convert polar (r, theta) to cartesian offsets.
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> (f64, f64) {
    (r * theta.cos(), r * theta.sin())
}

// -----------------------------------------------------------------------------
// Browser entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    app::start(GameConfig::default())
}

/// Start with a JSON config override; missing keys keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let cfg = GameConfig::from_json(json).map_err(|e| {
        log::error!("rejected config: {e}");
        e
    })?;
    app::start(cfg)
}

/// External end-of-round trigger: drops any ending sequence and zeroes the score.
#[wasm_bindgen]
pub fn reset_game() {
    app::reset();
}
