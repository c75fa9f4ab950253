//! Golden-angle particle field that grows with the score.
//!
//! The field is regenerated from scratch every frame: particle `i` sits at angle
//! `i * golden_angle` and radius `scale * sqrt(i)`, which packs points with equal
//! area per particle. Indices start at the first one whose radius clears the static
//! circle, so the spiral never overlaps the play area.

use crate::config::{GameConfig, MAX_FIELD_PARTICLES};
use crate::easing::{Rgba, map_clamped};
use crate::ripple::Ripple;
use crate::{Viewport, polar_to_cartesian};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub color: Rgba,
}

/// Line between two particles that sit close to each other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub color: Rgba,
}

/// Smallest index whose spiral radius reaches `field_offset`.
pub fn start_index(cfg: &GameConfig) -> u64 {
    let radius_at = |i: u64| cfg.spiral_scale * (i as f64).sqrt();
    let mut i = (cfg.field_offset / cfg.spiral_scale).powi(2).ceil().max(0.0) as u64;
    // float rounding can land one step off either way
    while radius_at(i) < cfg.field_offset {
        i += 1;
    }
    while i > 0 && radius_at(i - 1) >= cfg.field_offset {
        i -= 1;
    }
    i
}

/// `score × density`, clamped to [`MAX_FIELD_PARTICLES`].
pub fn particle_count(score: u32, cfg: &GameConfig) -> usize {
    (score as usize)
        .saturating_mul(cfg.points_per_score as usize)
        .min(MAX_FIELD_PARTICLES)
}

/// Build the ordered particle sequence for `score`, displaced by the live ripple.
pub fn generate(score: u32, viewport: Viewport, ripple: &Ripple, cfg: &GameConfig) -> Vec<Particle> {
    let count = particle_count(score, cfg);
    let center = viewport.center();
    let outer = viewport.half_min();
    let first = start_index(cfg);
    let golden = cfg.golden_angle_deg.to_radians();

    (first..first + count as u64)
        .map(|i| {
            let radius = cfg.spiral_scale * (i as f64).sqrt();
            let (px, py) = polar_to_cartesian(radius, i as f64 * golden);
            let (pos, in_band) = ripple.displace(center, (center.0 + px, center.1 + py), cfg);
            let color = if in_band {
                cfg.effect_color
            } else {
                let t = map_clamped(radius, cfg.field_offset, outer);
                cfg.gradient_inner.lerp(cfg.gradient_outer, t)
            };
            Particle {
                x: pos.0,
                y: pos.1,
                color,
            }
        })
        .collect()
}

/// Every pair closer than `max_distance`, colored by the blend of both ends.
pub fn links(particles: &[Particle], max_distance: f64) -> Vec<Link> {
    let mut out = Vec::new();
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            if (a.x - b.x).hypot(a.y - b.y) < max_distance {
                out.push(Link {
                    from: (a.x, a.y),
                    to: (b.x, b.y),
                    color: a.color.midpoint(b.color),
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn start_index_is_first_outside_offset() {
        let cfg = GameConfig::default();
        let i = start_index(&cfg);
        assert!(cfg.spiral_scale * (i as f64).sqrt() >= cfg.field_offset);
        assert!(cfg.spiral_scale * ((i - 1) as f64).sqrt() < cfg.field_offset);
        // (110 / 12)^2 = 84.03 -> 85
        assert_eq!(i, 85);
    }

    #[test]
    fn start_index_on_exact_square() {
        let cfg = GameConfig {
            spiral_scale: 10.0,
            field_offset: 110.0,
            ..GameConfig::default()
        };
        assert_eq!(start_index(&cfg), 121);
    }

    #[test]
    fn count_scales_linearly_with_score() {
        let cfg = GameConfig::default();
        for score in [0, 1, 7, 19] {
            let field = generate(score, viewport(), &Ripple::Idle, &cfg);
            assert_eq!(field.len(), score as usize * cfg.points_per_score as usize);
        }
    }

    #[test]
    fn count_is_clamped_for_unvalidated_density() {
        let cfg = GameConfig {
            points_per_score: u32::MAX,
            ..GameConfig::default()
        };
        assert_eq!(particle_count(u32::MAX, &cfg), MAX_FIELD_PARTICLES);
        assert_eq!(particle_count(0, &cfg), 0);
        let field = generate(3, viewport(), &Ripple::Idle, &cfg);
        assert_eq!(field.len(), MAX_FIELD_PARTICLES);
    }

    #[test]
    fn particles_clear_static_circle() {
        let cfg = GameConfig::default();
        let vp = viewport();
        let (cx, cy) = vp.center();
        for p in generate(10, vp, &Ripple::Idle, &cfg) {
            assert!((p.x - cx).hypot(p.y - cy) >= cfg.field_offset - 1e-9);
        }
    }

    #[test]
    fn first_particle_takes_inner_gradient_color() {
        let cfg = GameConfig {
            spiral_scale: 10.0,
            field_offset: 110.0,
            ..GameConfig::default()
        };
        let field = generate(1, viewport(), &Ripple::Idle, &cfg);
        assert_eq!(field[0].color, cfg.gradient_inner);
    }

    #[test]
    fn ripple_band_recolors_and_pushes_particles() {
        let cfg = GameConfig::default();
        let vp = viewport();
        let calm = generate(8, vp, &Ripple::Idle, &cfg);
        // Put the band right over the innermost particles.
        let ripple = Ripple::Expanding {
            radius: cfg.field_offset - cfg.ripple_offset + cfg.ripple_width / 2.0,
        };
        let rippled = generate(8, vp, &ripple, &cfg);
        let (cx, cy) = vp.center();
        let moved = calm.iter().zip(&rippled).filter(|(a, b)| {
            let da = (a.x - cx).hypot(a.y - cy);
            let db = (b.x - cx).hypot(b.y - cy);
            db > da + 1e-6 && b.color == cfg.effect_color
        });
        assert!(moved.count() > 0);
    }

    #[test]
    fn links_use_strict_threshold_and_blend_colors() {
        let white = Rgba::grey(255.0);
        let black = Rgba::grey(0.0);
        let ps = [
            Particle { x: 0.0, y: 0.0, color: white },
            Particle { x: 10.0, y: 0.0, color: black },
            Particle { x: 40.0, y: 0.0, color: white },
        ];
        let ls = links(&ps, 10.0);
        assert!(ls.is_empty());
        let ls = links(&ps, 10.5);
        assert_eq!(ls.len(), 1);
        assert_eq!(ls[0].from, (0.0, 0.0));
        assert_eq!(ls[0].to, (10.0, 0.0));
        assert!((ls[0].color.r - 127.5).abs() < 1e-9);
        assert_eq!(links(&ps, 100.0).len(), 3);
    }
}
