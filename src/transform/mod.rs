//! Shared numeric helpers: interpolation, shaping curves and compass-angle geometry.

pub mod linear;
pub mod non_linear;
pub mod polar;

pub use linear::{lerp, lerp_vec2};
pub use non_linear::{clamp, clamp01, quadratic_bezier_point, smooth_step};
pub use polar::{compass_degrees, polar_point};
