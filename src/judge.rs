//! Timing judgement for a single activation (key press or tap).

use crate::Viewport;
use crate::config::GameConfig;

/// Raw input delivered by the host between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Keyboard press carrying the legacy `keyCode`.
    Key { code: u32 },
    /// Pointer / touch press in canvas coordinates.
    Tap { x: f64, y: f64 },
}

impl InputEvent {
    /// Only the configured key, or a tap landing on the static circle, counts.
    pub fn is_activation(&self, cfg: &GameConfig, viewport: Viewport) -> bool {
        match *self {
            InputEvent::Key { code } => code == cfg.activate_key_code,
            InputEvent::Tap { x, y } => {
                let (cx, cy) = viewport.center();
                (x - cx).hypot(y - cy) <= cfg.target_radius
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Judgement {
    Hit,
    Miss,
}

/// Boundary-inclusive comparison of the live radius against the target ring.
/// Only the tolerance magnitude counts, so an exact hit always scores.
pub fn judge(radius: f64, cfg: &GameConfig) -> Judgement {
    if (radius - cfg.target_radius).abs() <= cfg.tolerance.abs() {
        Judgement::Hit
    } else {
        Judgement::Miss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_target_always_hits() {
        let cfg = GameConfig {
            tolerance: 0.0,
            ..GameConfig::default()
        };
        assert_eq!(judge(cfg.target_radius, &cfg), Judgement::Hit);
        let negative = GameConfig {
            tolerance: -5.0,
            ..GameConfig::default()
        };
        assert_eq!(judge(negative.target_radius, &negative), Judgement::Hit);
        assert_eq!(judge(negative.target_radius + 5.0, &negative), Judgement::Hit);
        assert_eq!(judge(negative.target_radius + 6.0, &negative), Judgement::Miss);
    }

    #[test]
    fn tolerance_boundary_is_inclusive() {
        let cfg = GameConfig::default();
        assert_eq!(judge(cfg.target_radius + cfg.tolerance, &cfg), Judgement::Hit);
        assert_eq!(judge(cfg.target_radius - cfg.tolerance, &cfg), Judgement::Hit);
        assert_eq!(judge(cfg.target_radius + cfg.tolerance + 1.0, &cfg), Judgement::Miss);
        assert_eq!(judge(cfg.target_radius - cfg.tolerance - 1.0, &cfg), Judgement::Miss);
    }

    #[test]
    fn only_designated_key_activates() {
        let cfg = GameConfig::default();
        let vp = Viewport::new(800.0, 600.0);
        assert!(InputEvent::Key { code: 32 }.is_activation(&cfg, vp));
        assert!(!InputEvent::Key { code: 13 }.is_activation(&cfg, vp));
    }

    #[test]
    fn tap_must_land_on_static_circle() {
        let cfg = GameConfig::default();
        let vp = Viewport::new(800.0, 600.0);
        assert!(InputEvent::Tap { x: 400.0, y: 300.0 }.is_activation(&cfg, vp));
        assert!(InputEvent::Tap { x: 500.0, y: 300.0 }.is_activation(&cfg, vp));
        assert!(!InputEvent::Tap { x: 501.0, y: 300.0 }.is_activation(&cfg, vp));
        assert!(!InputEvent::Tap { x: 10.0, y: 10.0 }.is_activation(&cfg, vp));
    }
}
