//! Non-linear shaping and curve evaluation.

use kurbo::{ParamCurve, QuadBez};

use crate::foundation::core::Point;

#[inline]
/// Clamp `x` to `[lo, hi]`. `lo <= hi` is the caller's contract.
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    x.max(lo).min(hi)
}

#[inline]
/// Clamp scalar value to normalized range `[0, 1]`.
pub fn clamp01(x: f64) -> f64 {
    clamp(x, 0.0, 1.0)
}

#[inline]
/// Hermite S-curve `p² · (3 − 2p)`: symmetric, zero slope at both ends.
///
/// Not clamped; multi-phase handoffs rely on the exact polynomial.
pub fn smooth_step(p: f64) -> f64 {
    p * p * (3.0 - 2.0 * p)
}

/// Point on the quadratic bezier `p0 -> p1 -> p2` at `t`.
///
/// Values of `t` outside `[0, 1]` extrapolate; clamp first if that is not wanted.
pub fn quadratic_bezier_point(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    QuadBez::new(p0, p1, p2).eval(t)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/non_linear.rs"]
mod tests;
