//! Stacked sticky sections: every section but the last pins at the top of the
//! viewport and shrinks, tilts and dims while the next one slides over it.

use crate::{
    animation::phase::Window,
    effects::{EffectResolver, EntityFrame},
    foundation::core::{Entity, TransformRecord, Viewport},
    foundation::error::{ScrollFxError, ScrollFxResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StickyStack {
    /// Scale lost by a fully covered section (`scale = 1 - decay * local`).
    pub scale_decay: f64,
    /// Tilt (deg) of a fully covered section; even indices tilt positive.
    pub rotation: f64,
}

impl Default for StickyStack {
    fn default() -> Self {
        Self {
            scale_decay: 0.25,
            rotation: 5.0,
        }
    }
}

impl StickyStack {
    /// Stretch of region progress during which section `index + 1` covers
    /// section `index`. `None` for the last section.
    pub fn cover_window(entity: Entity) -> Option<Window> {
        if entity.is_last() || entity.total < 2 {
            return None;
        }
        let step = 1.0 / (entity.total as f64 - 1.0);
        Some(Window::new(entity.index as f64 * step, step))
    }

    /// Held in place from the start of its cover window until the region ends.
    /// Nothing is pinned before scrolling reaches the region.
    pub fn is_pinned(progress: f64, entity: Entity) -> bool {
        Self::cover_window(entity)
            .is_some_and(|w| progress > 0.0 && progress >= w.start && progress < 1.0)
    }
}

impl EffectResolver for StickyStack {
    fn validate(&self, _total: usize) -> ScrollFxResult<()> {
        if !self.scale_decay.is_finite() || !(0.0..1.0).contains(&self.scale_decay) {
            return Err(ScrollFxError::config(
                "sticky_stack scale_decay must be in [0, 1)",
            ));
        }
        if !self.rotation.is_finite() {
            return Err(ScrollFxError::config("sticky_stack rotation must be finite"));
        }
        Ok(())
    }

    fn resolve_entity(&self, progress: f64, entity: Entity, _viewport: Viewport) -> EntityFrame {
        let z_index = i32::try_from(entity.index).unwrap_or(0);
        let Some(window) = Self::cover_window(entity) else {
            return EntityFrame::new(
                entity.index,
                TransformRecord {
                    z_index,
                    ..TransformRecord::IDENTITY
                },
            );
        };

        let covered = window.sample(progress).local;
        let sign = if entity.index % 2 == 0 { 1.0 } else { -1.0 };
        EntityFrame {
            overlay_opacity: covered,
            pinned: Self::is_pinned(progress, entity),
            ..EntityFrame::new(
                entity.index,
                TransformRecord {
                    scale: 1.0 - self.scale_decay * covered,
                    rotation_z: sign * self.rotation * covered,
                    z_index,
                    ..TransformRecord::IDENTITY
                },
            )
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/sticky.rs"]
mod tests;
