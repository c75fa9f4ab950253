//! One-shot shockwave that sweeps outward from the center after every activation.

use std::f64::consts::PI;

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Ripple {
    #[default]
    Idle,
    Expanding {
        radius: f64,
    },
}

impl Ripple {
    /// Start (or restart) the wave at radius 0. Only one wave exists at a time.
    pub fn activate(&mut self) {
        *self = Ripple::Expanding { radius: 0.0 };
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Ripple::Expanding { .. })
    }

    pub fn radius(&self) -> Option<f64> {
        match *self {
            Ripple::Expanding { radius } => Some(radius),
            Ripple::Idle => None,
        }
    }

    /// Move the wave front by one frame; it dies once it has left the canvas.
    pub fn advance(&mut self, canvas_width: f64, cfg: &GameConfig) {
        if let Ripple::Expanding { radius } = *self {
            let next = radius + cfg.ripple_speed;
            *self = if next - cfg.ripple_offset > canvas_width {
                Ripple::Idle
            } else {
                Ripple::Expanding { radius: next }
            };
        }
    }

    /// Outward displacement for a point `distance` away from the center, or `None`
    /// if the point is outside the band trailing the wave front.
    pub fn displacement(&self, distance: f64, cfg: &GameConfig) -> Option<f64> {
        let radius = self.radius()?;
        let adjusted = distance - cfg.ripple_offset;
        if adjusted > radius - cfg.ripple_width && adjusted < radius {
            Some(((radius - adjusted) / cfg.ripple_width * PI).sin() * cfg.ripple_amplitude)
        } else {
            None
        }
    }

    /// Push `point` outward along its radial direction from `center`.
    /// Returns the (possibly) moved point and whether it sat inside the band.
    pub fn displace(&self, center: (f64, f64), point: (f64, f64), cfg: &GameConfig) -> ((f64, f64), bool) {
        let (dx, dy) = (point.0 - center.0, point.1 - center.1);
        match self.displacement(dx.hypot(dy), cfg) {
            Some(d) => {
                let theta = dy.atan2(dx);
                ((point.0 + d * theta.cos(), point.1 + d * theta.sin()), true)
            }
            None => (point, false),
        }
    }
}
