//! Easing curves and color blending shared by every visual layer.

/// RGBA color with channels in the 0..=255 range (kept as f64 so blends stay smooth).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[cfg_attr(feature = "serde", serde(default = "opaque"))]
    pub a: f64,
}

#[cfg(feature = "serde")]
fn opaque() -> f64 {
    255.0
}

impl Rgba {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 255.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque grey.
    pub const fn grey(v: f64) -> Self {
        Self::rgb(v, v, v)
    }

    /// Channel-wise linear blend; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        Rgba {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
            a: lerp(self.a, other.a, t),
        }
    }

    pub fn midpoint(self, other: Rgba) -> Rgba {
        self.lerp(other, 0.5)
    }

    /// CSS color string for canvas fill / stroke styles.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({},{},{},{:.3})",
            self.r.round().clamp(0.0, 255.0) as u8,
            self.g.round().clamp(0.0, 255.0) as u8,
            self.b.round().clamp(0.0, 255.0) as u8,
            (self.a / 255.0).clamp(0.0, 1.0)
        )
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Quadratic ease-in-out on [0, 1].
#[inline]
pub fn ease_in_out_quad(x: f64) -> f64 {
    if x < 0.5 {
        2.0 * x * x
    } else {
        1.0 - 2.0 * (1.0 - x) * (1.0 - x)
    }
}

/// Linearly map `v` from [lo, hi] onto [0, 1], clamping outside the range.
/// A degenerate range maps everything at or past `hi` to 1.
pub fn map_clamped(v: f64, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return if v >= hi { 1.0 } else { 0.0 };
    }
    ((v - lo) / (hi - lo)).clamp(0.0, 1.0)
}
