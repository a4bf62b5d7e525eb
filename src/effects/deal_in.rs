//! Staggered "deal-in" entrance: each card rises into place inside its own
//! window while its initial letter pops in during the back part of it.

use crate::{
    animation::phase::Stagger,
    effects::{EffectResolver, EntityFrame},
    foundation::core::{Entity, TransformRecord, Viewport},
    foundation::error::{ScrollFxError, ScrollFxResult},
    transform::lerp,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DealIn {
    pub entrance: Stagger,
    /// Starting vertical offset in percent of the card's own height.
    pub rise_pct: f64,
    /// Fraction of the entrance window that passes before the letter grows.
    pub letter_delay: f64,
}

impl Default for DealIn {
    fn default() -> Self {
        Self {
            entrance: Stagger::new(0.0, 0.15, 0.7),
            rise_pct: 125.0,
            letter_delay: 0.4,
        }
    }
}

impl DealIn {
    /// Scale of the nested letter for a given entrance-local progress.
    pub fn letter_scale(&self, local: f64) -> f64 {
        ((local - self.letter_delay) / (1.0 - self.letter_delay)).max(0.0)
    }
}

impl EffectResolver for DealIn {
    fn validate(&self, _total: usize) -> ScrollFxResult<()> {
        self.entrance.validate("entrance")?;
        if self.entrance.len <= 0.0 {
            return Err(ScrollFxError::config("deal_in entrance.len must be > 0"));
        }
        if !self.rise_pct.is_finite() {
            return Err(ScrollFxError::config("deal_in rise_pct must be finite"));
        }
        if !(0.0..1.0).contains(&self.letter_delay) {
            return Err(ScrollFxError::config("deal_in letter_delay must be in [0, 1)"));
        }
        Ok(())
    }

    fn resolve_entity(&self, progress: f64, entity: Entity, _viewport: Viewport) -> EntityFrame {
        let sample = self.entrance.window(entity.index).sample(progress);
        let card = TransformRecord {
            translate_y_pct: lerp(self.rise_pct, 0.0, sample.local),
            z_index: i32::try_from(entity.index).unwrap_or(0),
            ..TransformRecord::IDENTITY
        };
        let letter = TransformRecord {
            scale: self.letter_scale(sample.local),
            ..TransformRecord::IDENTITY
        };
        EntityFrame {
            inner: Some(letter),
            ..EntityFrame::new(entity.index, card)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/deal_in.rs"]
mod tests;
