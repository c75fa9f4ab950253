//! Tunable game constants.
//!
//! Every value the round depends on lives in [`GameConfig`]. A JSON override can be
//! supplied when the `serde_json` feature is enabled (missing keys keep their
//! defaults).

use thiserror::Error;

use crate::easing::Rgba;

pub const STARTING_RADIUS: f64 = 100.0;
pub const GROWTH_FACTOR: f64 = 1.5;
pub const SHRINK_FACTOR: f64 = 0.5;
pub const TOLERANCE: f64 = 20.0;
pub const EFFECT_DURATION: u32 = 15;
/// Frames for one complete grow + shrink cycle.
pub const CYCLE_DURATION: u64 = 480;
pub const SCORE_POSITION_Y: f64 = 50.0;
pub const TEXT_SIZE: f64 = 32.0;
/// `keyCode` of the spacebar.
pub const ACTIVATE_KEY_CODE: u32 = 32;

pub const GOLDEN_ANGLE_DEG: f64 = 137.5;
pub const SPIRAL_SCALE: f64 = 12.0;
pub const POINTS_PER_SCORE: u32 = 5;
pub const RESET_SCORE_AMOUNT: u32 = 20;
/// Frames between two particle removals while the ending plays.
pub const DECAY_SPEED: u32 = 6;
/// Upper bound on particles in one field; keeps the O(n²) link pass bounded.
pub const MAX_FIELD_PARTICLES: usize = 2_000;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    // --- Circles / timing ---
    /// Radius of the static target ring; also the radius a hit is judged against.
    pub target_radius: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub cycle_frames: u64,
    pub tolerance: f64,
    pub effect_duration: u32,
    pub activate_key_code: u32,

    // --- HUD ---
    pub score_y: f64,
    pub text_size: f64,

    // --- Phyllotaxis field ---
    pub golden_angle_deg: f64,
    pub spiral_scale: f64,
    /// Minimum spiral radius; must clear the static circle.
    pub field_offset: f64,
    pub points_per_score: u32,
    pub particle_radius: f64,
    /// Pairs closer than this are linked with a line.
    pub link_distance: f64,
    pub link_width: f64,

    // --- Ripple ---
    pub ripple_speed: f64,
    pub ripple_width: f64,
    pub ripple_amplitude: f64,
    pub ripple_offset: f64,

    // --- Ending sequence ---
    pub reset_score: u32,
    pub decay_speed: u32,

    // --- Palette ---
    pub background: Rgba,
    pub static_color: Rgba,
    pub dynamic_color: Rgba,
    /// Dynamic circle color when its radius sits exactly on the target.
    pub dynamic_peak_color: Rgba,
    pub effect_color: Rgba,
    pub score_color: Rgba,
    pub gradient_inner: Rgba,
    pub gradient_outer: Rgba,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_radius: STARTING_RADIUS,
            min_radius: STARTING_RADIUS * SHRINK_FACTOR,
            max_radius: STARTING_RADIUS * GROWTH_FACTOR,
            cycle_frames: CYCLE_DURATION,
            tolerance: TOLERANCE,
            effect_duration: EFFECT_DURATION,
            activate_key_code: ACTIVATE_KEY_CODE,
            score_y: SCORE_POSITION_Y,
            text_size: TEXT_SIZE,
            golden_angle_deg: GOLDEN_ANGLE_DEG,
            spiral_scale: SPIRAL_SCALE,
            field_offset: STARTING_RADIUS + 10.0,
            points_per_score: POINTS_PER_SCORE,
            particle_radius: 3.0,
            link_distance: 28.0,
            link_width: 1.0,
            ripple_speed: 6.0,
            ripple_width: 60.0,
            ripple_amplitude: 14.0,
            ripple_offset: STARTING_RADIUS,
            reset_score: RESET_SCORE_AMOUNT,
            decay_speed: DECAY_SPEED,
            background: Rgba::rgb(18.0, 18.0, 18.0),
            static_color: Rgba::rgb(60.0, 60.0, 60.0),
            dynamic_color: Rgba::rgba(70.0, 130.0, 180.0, 100.0),
            dynamic_peak_color: Rgba::rgba(0.0, 255.0, 100.0, 160.0),
            effect_color: Rgba::rgb(0.0, 255.0, 100.0),
            score_color: Rgba::grey(255.0),
            gradient_inner: Rgba::rgb(255.0, 190.0, 70.0),
            gradient_outer: Rgba::rgb(110.0, 70.0, 230.0),
        }
    }
}

/// A configuration rule that a [`GameConfig`] breaks.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Needs `min_radius < target_radius < max_radius`.
    #[error("radii must satisfy min < target < max (got {min} / {target} / {max})")]
    RadiusOrder { min: f64, target: f64, max: f64 },
    #[error("cycle_frames must be positive")]
    ZeroCycle,
    #[error("tolerance must be >= 0 (got {0})")]
    NegativeTolerance(f64),
    #[error("spiral_scale must be > 0 (got {0})")]
    NonPositiveScale(f64),
    #[error("points_per_score must be positive")]
    ZeroDensity,
    #[error("ripple_width must be > 0 (got {0})")]
    NonPositiveRippleWidth(f64),
    #[error("decay_speed must be positive")]
    ZeroDecaySpeed,
    #[error("reset_score must be positive")]
    ZeroResetScore,
    /// A full field at the reset score would exceed [`MAX_FIELD_PARTICLES`].
    #[error(
        "reset_score {reset_score} x points_per_score {points_per_score} exceeds {max} particles"
    )]
    FieldTooLarge {
        reset_score: u32,
        points_per_score: u32,
        max: usize,
    },
    /// The spiral would start inside the static circle.
    #[error("field_offset {offset} must clear the static circle of radius {target}")]
    OffsetInsideCircle { offset: f64, target: f64 },
    #[cfg(feature = "serde_json")]
    #[error("invalid config json: {0}")]
    Json(String),
}

impl From<ConfigError> for wasm_bindgen::JsValue {
    fn from(err: ConfigError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_radius < self.target_radius && self.target_radius < self.max_radius) {
            return Err(ConfigError::RadiusOrder {
                min: self.min_radius,
                target: self.target_radius,
                max: self.max_radius,
            });
        }
        if self.cycle_frames == 0 {
            return Err(ConfigError::ZeroCycle);
        }
        if self.tolerance < 0.0 {
            return Err(ConfigError::NegativeTolerance(self.tolerance));
        }
        if self.spiral_scale <= 0.0 {
            return Err(ConfigError::NonPositiveScale(self.spiral_scale));
        }
        if self.points_per_score == 0 {
            return Err(ConfigError::ZeroDensity);
        }
        if self.ripple_width <= 0.0 {
            return Err(ConfigError::NonPositiveRippleWidth(self.ripple_width));
        }
        if self.decay_speed == 0 {
            return Err(ConfigError::ZeroDecaySpeed);
        }
        if self.reset_score == 0 {
            return Err(ConfigError::ZeroResetScore);
        }
        let full_field = (self.reset_score as usize).checked_mul(self.points_per_score as usize);
        if full_field.is_none_or(|n| n > MAX_FIELD_PARTICLES) {
            return Err(ConfigError::FieldTooLarge {
                reset_score: self.reset_score,
                points_per_score: self.points_per_score,
                max: MAX_FIELD_PARTICLES,
            });
        }
        if self.field_offset < self.target_radius {
            return Err(ConfigError::OffsetInsideCircle {
                offset: self.field_offset,
                target: self.target_radius,
            });
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON override and validate the result.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.max_radius, 150.0);
        assert_eq!(cfg.min_radius, 50.0);
        assert_eq!(cfg.cycle_frames, 480);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_target_at_max() {
        let cfg = GameConfig {
            max_radius: 100.0,
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::RadiusOrder { .. })));
    }

    #[test]
    fn rejects_offset_inside_static_circle() {
        let cfg = GameConfig {
            field_offset: 40.0,
            ..GameConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("field_offset"));
    }

    #[test]
    fn rejects_zero_decay_speed() {
        let cfg = GameConfig {
            decay_speed: 0,
            ..GameConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroDecaySpeed));
    }

    #[test]
    fn rejects_oversized_field() {
        let cfg = GameConfig {
            points_per_score: u32::MAX,
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::FieldTooLarge { .. })));
        let at_cap = GameConfig {
            reset_score: 20,
            points_per_score: (MAX_FIELD_PARTICLES / 20) as u32,
            ..GameConfig::default()
        };
        assert!(at_cap.validate().is_ok());
        let over_cap = GameConfig {
            points_per_score: at_cap.points_per_score + 1,
            ..at_cap.clone()
        };
        assert!(over_cap.validate().is_err());
    }

    #[test]
    fn error_messages_name_the_field() {
        assert_eq!(
            ConfigError::NegativeTolerance(-2.0).to_string(),
            "tolerance must be >= 0 (got -2)"
        );
        assert_eq!(ConfigError::ZeroCycle.to_string(), "cycle_frames must be positive");
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn huge_density_json_is_rejected() {
        let err = GameConfig::from_json(r#"{ "points_per_score": 4294967295 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::FieldTooLarge { .. }));
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = GameConfig::from_json(r#"{ "tolerance": 12.5, "reset_score": 5 }"#).unwrap();
        assert_eq!(cfg.tolerance, 12.5);
        assert_eq!(cfg.reset_score, 5);
        assert_eq!(cfg.cycle_frames, CYCLE_DURATION);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_breaking_invariants_is_rejected() {
        let err = GameConfig::from_json(r#"{ "min_radius": 120.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::RadiusOrder { .. }));
    }
}
