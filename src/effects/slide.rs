//! Pinned "slide together": card contents swing in from the right, later
//! cards from further away, then grow to full size on a later stagger.

use crate::{
    animation::phase::{Stagger, Window},
    effects::{EffectResolver, EntityFrame},
    foundation::core::{Entity, TransformRecord, Viewport},
    foundation::error::{ScrollFxError, ScrollFxResult},
    transform::lerp,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SlideTogether {
    pub slide: Stagger,
    /// Lateral start offset (percent) of the first card.
    pub start_offset_pct: f64,
    /// How much closer each following card starts.
    pub offset_step_pct: f64,
    pub start_rotation: f64,
    pub scale_from: f64,
    /// Scale ramps run from `scale_offset + i * scale_step` to the end of the region.
    pub scale_offset: f64,
    pub scale_step: f64,
}

impl Default for SlideTogether {
    fn default() -> Self {
        Self {
            slide: Stagger::new(0.0, 0.075, 0.4),
            start_offset_pct: 300.0,
            offset_step_pct: 100.0,
            start_rotation: 20.0,
            scale_from: 0.75,
            scale_offset: 0.4,
            scale_step: 0.12,
        }
    }
}

impl SlideTogether {
    pub fn start_offset(&self, index: usize) -> f64 {
        self.start_offset_pct - (index as f64) * self.offset_step_pct
    }

    pub fn scale_window(&self, index: usize) -> Window {
        let start = self.scale_offset + (index as f64) * self.scale_step;
        Window::new(start, (1.0 - start).max(0.0))
    }
}

impl EffectResolver for SlideTogether {
    fn validate(&self, _total: usize) -> ScrollFxResult<()> {
        self.slide.validate("slide")?;
        if self.slide.len <= 0.0 {
            return Err(ScrollFxError::config("slide_together slide.len must be > 0"));
        }
        for (name, v) in [
            ("start_offset_pct", self.start_offset_pct),
            ("offset_step_pct", self.offset_step_pct),
            ("start_rotation", self.start_rotation),
            ("scale_offset", self.scale_offset),
            ("scale_step", self.scale_step),
        ] {
            if !v.is_finite() {
                return Err(ScrollFxError::config(format!(
                    "slide_together {name} must be finite"
                )));
            }
        }
        if !self.scale_from.is_finite() || self.scale_from <= 0.0 {
            return Err(ScrollFxError::config("slide_together scale_from must be > 0"));
        }
        Ok(())
    }

    fn resolve_entity(&self, progress: f64, entity: Entity, _viewport: Viewport) -> EntityFrame {
        let slide = self.slide.window(entity.index).sample(progress);
        let grow = self.scale_window(entity.index).sample(progress);
        let t = TransformRecord {
            translate_x_pct: lerp(self.start_offset(entity.index), 0.0, slide.local),
            rotation_z: lerp(self.start_rotation, 0.0, slide.local),
            scale: lerp(self.scale_from, 1.0, grow.local),
            z_index: i32::try_from(entity.index).unwrap_or(0),
            ..TransformRecord::IDENTITY
        };
        EntityFrame::new(entity.index, t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/slide.rs"]
mod tests;
