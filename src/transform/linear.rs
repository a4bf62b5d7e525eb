//! Linear interpolation helpers.

use crate::foundation::core::Vec2;

#[inline]
/// Unclamped linear interpolation. Callers clamp `t` when they need clamped output.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
/// Linearly interpolate between two vectors with clamped parameter `t`.
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f64) -> Vec2 {
    let t = t.clamp(0.0, 1.0);
    Vec2::new(a.x + ((b.x - a.x) * t), a.y + ((b.y - a.y) * t))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/linear.rs"]
mod tests;
