//! Card deck that fades in, gathers into a fanned stack, then flips card by
//! card. Shared phases up to `hold_end`; the flip itself is staggered per index.

use crate::{
    animation::ease::Ease,
    animation::phase::{PhaseSample, PhaseTable, Stagger},
    effects::{EffectResolver, EntityFrame},
    foundation::core::{Entity, TransformRecord, Viewport},
    foundation::error::{ScrollFxError, ScrollFxResult},
    transform::{lerp, smooth_step},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum StackFlipPhase {
    Entrance,
    Stack,
    Hold,
    /// Stacked, waiting for this entity's own flip window.
    Waiting,
    Flip,
    Flipped,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StackFlip {
    pub entrance_end: f64,
    /// Defaults to 0.3 so the fan has settled by then; raise to 0.4 for a
    /// slower gather.
    pub stack_end: f64,
    pub hold_end: f64,
    pub flip: Stagger,
    /// Lateral start offset (px) per step away from the middle card.
    pub spread_x: f64,
    /// Start rotation (deg) per step away from the middle card.
    pub spread_rotation: f64,
    /// Fan rotation (deg) per step away from the middle card once stacked.
    pub fan_rotation: f64,
    /// Residual vertical offset (px) per index while stacking.
    pub stack_drop: f64,
    pub entrance_scale: f64,
    pub flip_peak_scale: f64,
}

impl Default for StackFlip {
    fn default() -> Self {
        Self {
            entrance_end: 0.2,
            stack_end: 0.3,
            hold_end: 0.5,
            flip: Stagger::new(0.5, 0.15, 0.15),
            spread_x: 50.0,
            spread_rotation: 8.0,
            fan_rotation: 3.0,
            stack_drop: 10.0,
            entrance_scale: 0.8,
            flip_peak_scale: 1.05,
        }
    }
}

impl StackFlip {
    pub fn phase_table(&self, entity: Entity) -> ScrollFxResult<PhaseTable<StackFlipPhase>> {
        let flip = self.flip.window(entity.index);
        PhaseTable::contiguous([
            (StackFlipPhase::Entrance, self.entrance_end, Ease::SmoothStep),
            (StackFlipPhase::Stack, self.stack_end, Ease::SmoothStep),
            (StackFlipPhase::Hold, self.hold_end, Ease::Linear),
            (StackFlipPhase::Waiting, flip.start, Ease::Linear),
            (StackFlipPhase::Flip, flip.end(), Ease::SmoothStep),
            (StackFlipPhase::Flipped, 1.0, Ease::Linear),
        ])
    }

    pub fn phase_at(&self, progress: f64, entity: Entity) -> ScrollFxResult<PhaseSample<StackFlipPhase>> {
        Ok(self.phase_table(entity)?.resolve(progress))
    }

    /// Signed distance from the middle of the deck, in card steps.
    fn from_middle(entity: Entity) -> f64 {
        entity.index as f64 - (entity.total as f64 - 1.0) / 2.0
    }

    fn stacked_z(entity: Entity) -> i32 {
        i32::try_from(entity.total - 1 - entity.index).unwrap_or(0)
    }

    /// Paint layer for a flipping card; always above every idle card.
    fn flipping_z(entity: Entity) -> i32 {
        let base = i32::try_from(entity.total).unwrap_or(i32::MAX).max(10);
        base.saturating_add(i32::try_from(entity.index).unwrap_or(0))
    }
}

impl EffectResolver for StackFlip {
    fn validate(&self, total: usize) -> ScrollFxResult<()> {
        self.flip.validate("flip")?;
        let bounds = [self.entrance_end, self.stack_end, self.hold_end];
        if bounds.iter().any(|v| !v.is_finite()) {
            return Err(ScrollFxError::config("stack_flip phase bounds must be finite"));
        }
        if !(0.0 < self.entrance_end
            && self.entrance_end < self.stack_end
            && self.stack_end < self.hold_end
            && self.hold_end <= self.flip.offset)
        {
            return Err(ScrollFxError::config(
                "stack_flip requires 0 < entrance_end < stack_end < hold_end <= flip.offset",
            ));
        }
        if self.flip.len <= 0.0 {
            return Err(ScrollFxError::config("stack_flip flip.len must be > 0"));
        }
        let last_end = self.flip.window(total.saturating_sub(1)).end();
        if last_end > 1.0 + 1e-9 {
            return Err(ScrollFxError::config(format!(
                "stack_flip flip windows for {total} entities end at {last_end:.3}, past the region"
            )));
        }
        for v in [self.entrance_scale, self.flip_peak_scale] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ScrollFxError::config("stack_flip scales must be > 0"));
            }
        }
        for e in Entity::all(total) {
            self.phase_table(e)?;
        }
        Ok(())
    }

    fn resolve_entity(&self, progress: f64, entity: Entity, _viewport: Viewport) -> EntityFrame {
        let Ok(sample) = self.phase_at(progress, entity) else {
            return EntityFrame::resting(entity.index);
        };

        let d = Self::from_middle(entity);
        let fan = d * self.fan_rotation;
        let stacked = TransformRecord {
            rotation_z: fan,
            z_index: Self::stacked_z(entity),
            ..TransformRecord::IDENTITY
        };

        let t = match sample.kind {
            StackFlipPhase::Entrance => TransformRecord {
                opacity: sample.eased,
                scale: lerp(self.entrance_scale, 1.0, sample.eased),
                z_index: i32::try_from(entity.index).unwrap_or(0),
                ..TransformRecord::IDENTITY
            },
            StackFlipPhase::Stack => TransformRecord {
                translate_x: lerp(d * self.spread_x, 0.0, sample.eased),
                translate_y: entity.index as f64 * self.stack_drop * (1.0 - sample.eased),
                rotation_z: lerp(d * self.spread_rotation, fan, sample.eased),
                ..stacked
            },
            StackFlipPhase::Hold | StackFlipPhase::Waiting => stacked,
            StackFlipPhase::Flip => {
                let f = sample.local;
                let scale = if f < 0.5 {
                    lerp(1.0, self.flip_peak_scale, smooth_step(f * 2.0))
                } else {
                    lerp(self.flip_peak_scale, 1.0, smooth_step((f - 0.5) * 2.0))
                };
                TransformRecord {
                    rotation_z: lerp(fan, 0.0, sample.eased),
                    rotation_y: lerp(0.0, 180.0, sample.eased),
                    scale,
                    z_index: Self::flipping_z(entity),
                    ..TransformRecord::IDENTITY
                }
            }
            StackFlipPhase::Flipped => TransformRecord {
                rotation_y: 180.0,
                z_index: Self::flipping_z(entity),
                ..TransformRecord::IDENTITY
            },
        };
        EntityFrame::new(entity.index, t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/stack_flip.rs"]
mod tests;
