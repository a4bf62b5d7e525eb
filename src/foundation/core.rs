use crate::foundation::error::{ScrollFxError, ScrollFxResult};

pub use kurbo::{Affine, BezPath, Point, Vec2};

/// Smallest scale a resolver will ever emit. Scale must stay strictly positive.
pub const MIN_SCALE: f64 = 1e-4;

/// Viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Anything narrower or shorter than this is treated as "not laid out yet".
    pub const DEGENERATE_EPS: f64 = 1.0;

    pub fn new(width: f64, height: f64) -> ScrollFxResult<Self> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ScrollFxError::geometry(
                "viewport width/height must be finite and >= 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Zero or near-zero viewports pause animation instead of dividing by zero.
    pub fn is_degenerate(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width < Self::DEGENERATE_EPS
            || self.height < Self::DEGENERATE_EPS
    }

    pub fn center_y(self) -> f64 {
        self.height / 2.0
    }
}

/// One animated item among an ordered sequence sharing a scroll region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Entity {
    pub index: usize,
    pub total: usize, // always > 0 once a region is bound
}

impl Entity {
    pub fn new(index: usize, total: usize) -> ScrollFxResult<Self> {
        if total == 0 {
            return Err(ScrollFxError::config("entity total must be > 0"));
        }
        if index >= total {
            return Err(ScrollFxError::config(format!(
                "entity index {index} out of range for total {total}"
            )));
        }
        Ok(Self { index, total })
    }

    pub fn is_last(self) -> bool {
        self.index + 1 == self.total
    }

    pub fn all(total: usize) -> impl Iterator<Item = Entity> {
        (0..total).map(move |index| Entity { index, total })
    }
}

/// Resolved visual state for one element at one instant.
///
/// Translation comes in two flavours that add together when applied:
/// absolute pixels and percent of the element's own box. Rotations are in
/// degrees; `rotation_y` is the flip axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformRecord {
    pub translate_x: f64,
    pub translate_y: f64,
    pub translate_x_pct: f64,
    pub translate_y_pct: f64,
    pub scale: f64,
    pub rotation_z: f64,
    pub rotation_y: f64,
    pub opacity: f64,
    pub z_index: i32,
}

impl Default for TransformRecord {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransformRecord {
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        translate_x_pct: 0.0,
        translate_y_pct: 0.0,
        scale: 1.0,
        rotation_z: 0.0,
        rotation_y: 0.0,
        opacity: 1.0,
        z_index: 0,
    };

    /// Natural, non-animated layout position for the entity at `index`.
    pub fn resting(index: usize) -> Self {
        Self {
            z_index: i32::try_from(index).unwrap_or(i32::MAX),
            ..Self::IDENTITY
        }
    }

    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::IDENTITY
        }
    }

    /// Force every field into its valid domain: finite values, opacity in
    /// `[0, 1]` and scale of at least [`MIN_SCALE`].
    pub fn sanitized(self) -> Self {
        fn finite_or(v: f64, fallback: f64) -> f64 {
            if v.is_finite() { v } else { fallback }
        }

        Self {
            translate_x: finite_or(self.translate_x, 0.0),
            translate_y: finite_or(self.translate_y, 0.0),
            translate_x_pct: finite_or(self.translate_x_pct, 0.0),
            translate_y_pct: finite_or(self.translate_y_pct, 0.0),
            scale: finite_or(self.scale, 1.0).max(MIN_SCALE),
            rotation_z: finite_or(self.rotation_z, 0.0),
            rotation_y: finite_or(self.rotation_y, 0.0),
            opacity: finite_or(self.opacity, 1.0).clamp(0.0, 1.0),
            z_index: self.z_index,
        }
    }

    /// Combine two independently scrubbed sub-animations targeting the same
    /// element. Translations and rotations add, scale and opacity multiply,
    /// paint order takes the higher layer.
    pub fn compose(self, other: Self) -> Self {
        Self {
            translate_x: self.translate_x + other.translate_x,
            translate_y: self.translate_y + other.translate_y,
            translate_x_pct: self.translate_x_pct + other.translate_x_pct,
            translate_y_pct: self.translate_y_pct + other.translate_y_pct,
            scale: self.scale * other.scale,
            rotation_z: self.rotation_z + other.rotation_z,
            rotation_y: self.rotation_y + other.rotation_y,
            opacity: self.opacity * other.opacity,
            z_index: self.z_index.max(other.z_index),
        }
        .sanitized()
    }

    /// 2D part of the transform around the element's own origin. Percent
    /// translation needs the element size, so it is resolved against `size`.
    pub fn to_affine(self, size: Vec2) -> Affine {
        let t_translate = Affine::translate(Vec2::new(
            self.translate_x + self.translate_x_pct / 100.0 * size.x,
            self.translate_y + self.translate_y_pct / 100.0 * size.y,
        ));
        let t_rotate = Affine::rotate(self.rotation_z.to_radians());
        let t_scale = Affine::scale(self.scale);

        // T(translate) * R(rot) * S(scale)
        t_translate * t_rotate * t_scale
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
