//! The pulsing circle: radius follows a raised cosine over a fixed frame cycle and
//! its color brightens as the radius approaches the target ring.

use std::f64::consts::TAU;

use crate::config::GameConfig;
use crate::easing::{Rgba, ease_in_out_quad, lerp};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynamicCircle {
    pub radius: f64,
    pub color: Rgba,
}

/// Position inside the current cycle, in [0, 1).
#[inline]
pub fn phase(clock: u64, period: u64) -> f64 {
    (clock % period) as f64 / period as f64
}

/// Raised cosine: 1 at phase 0, 0 at phase 0.5, zero slope at both turning points.
#[inline]
pub fn eased_progress(phase: f64) -> f64 {
    ((TAU * phase).cos() + 1.0) / 2.0
}

/// Normalized distance from the target ring, 0 on target and 1 at (or past) the max.
pub fn target_proximity(radius: f64, cfg: &GameConfig) -> f64 {
    ((radius - cfg.target_radius).abs() / (cfg.max_radius - cfg.target_radius)).clamp(0.0, 1.0)
}

/// Bump that is 1 exactly on target and 0 from half the distance to the extreme on.
pub fn highlight(radius: f64, cfg: &GameConfig) -> f64 {
    let proximity = target_proximity(radius, cfg);
    ease_in_out_quad((1.0 - 2.0 * proximity).max(0.0))
}

impl DynamicCircle {
    pub fn at(clock: u64, cfg: &GameConfig) -> Self {
        let eased = eased_progress(phase(clock, cfg.cycle_frames));
        let radius = lerp(cfg.min_radius, cfg.max_radius, eased);
        let color = cfg
            .dynamic_color
            .lerp(cfg.dynamic_peak_color, highlight(radius, cfg));
        Self { radius, color }
    }
}
