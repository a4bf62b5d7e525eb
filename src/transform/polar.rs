//! Compass-style angles: 0° points up and angles grow clockwise on screen
//! (y axis pointing down).

use crate::foundation::core::{Point, Vec2};

#[inline]
/// Point at `radius` from `center` along compass angle `degrees`.
pub fn polar_point(center: Point, radius: f64, degrees: f64) -> Point {
    let rad = (degrees - 90.0).to_radians();
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

#[inline]
/// Compass angle of `v` in `[0, 360)`.
pub fn compass_degrees(v: Vec2) -> f64 {
    let deg = v.y.atan2(v.x).to_degrees();
    let a = (deg + 90.0 + 360.0) % 360.0;
    // `% 360.0` can round up to exactly 360 for tiny negative inputs.
    if a >= 360.0 { 0.0 } else { a }
}
