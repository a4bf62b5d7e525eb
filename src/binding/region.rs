use std::fmt;

use crate::{
    effects::{Effect, EffectFrame, EntityFrame, SceneFrame},
    foundation::core::{TransformRecord, Viewport},
    foundation::error::{ScrollFxError, ScrollFxResult},
    transform::clamp01,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct RegionId(pub(crate) u64);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region#{}", self.0)
    }
}

/// Which viewport edge the region's top must reach for progress to start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartEdge {
    /// Region top at viewport top (pinned sections).
    #[default]
    Top,
    /// Region top at viewport bottom (entrances).
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum RangeLength {
    Pixels(f64),
    ViewportHeights(f64),
}

impl RangeLength {
    pub fn to_px(self, viewport: Viewport) -> f64 {
        match self {
            Self::Pixels(px) => px,
            Self::ViewportHeights(k) => k * viewport.height,
        }
    }
}

/// Scroll distance over which a region's progress runs from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRange {
    /// Document offset of the region's top edge.
    pub element_top: f64,
    #[serde(default)]
    pub start_edge: StartEdge,
    pub length: RangeLength,
}

impl ScrollRange {
    pub fn new(element_top: f64, start_edge: StartEdge, length: RangeLength) -> Self {
        Self {
            element_top,
            start_edge,
            length,
        }
    }

    pub fn validate(&self) -> ScrollFxResult<()> {
        if !self.element_top.is_finite() {
            return Err(ScrollFxError::config("scroll range element_top must be finite"));
        }
        let len = match self.length {
            RangeLength::Pixels(v) | RangeLength::ViewportHeights(v) => v,
        };
        if !len.is_finite() || len <= 0.0 {
            return Err(ScrollFxError::config(format!(
                "scroll range length must be finite and > 0 (got {len})"
            )));
        }
        Ok(())
    }

    /// Scroll offset at which progress is 0.
    pub fn start(&self, viewport: Viewport) -> f64 {
        match self.start_edge {
            StartEdge::Top => self.element_top,
            StartEdge::Bottom => self.element_top - viewport.height,
        }
    }

    pub fn progress(&self, scroll_y: f64, viewport: Viewport) -> f64 {
        let start = self.start(viewport);
        let len = self.length.to_px(viewport);
        if len.is_nan() || len <= 0.0 {
            return if scroll_y >= start { 1.0 } else { 0.0 };
        }
        clamp01((scroll_y - start) / len)
    }

    /// Pin state for content held fixed across the range. The offset is the
    /// translation that cancels scrolling, so it is continuous at both ends.
    pub fn pin_state(&self, scroll_y: f64, viewport: Viewport) -> PinState {
        let start = self.start(viewport);
        let len = self.length.to_px(viewport).max(0.0);
        if scroll_y < start {
            PinState::Before
        } else if scroll_y < start + len {
            PinState::Pinned {
                offset: scroll_y - start,
            }
        } else {
            PinState::After { offset: len }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PinState {
    /// Region is not pinned, or has been torn down.
    Inactive,
    Before,
    Pinned { offset: f64 },
    After { offset: f64 },
}

impl PinState {
    pub fn is_pinned(self) -> bool {
        matches!(self, Self::Pinned { .. })
    }

    pub fn offset(self) -> f64 {
        match self {
            Self::Pinned { offset } | Self::After { offset } => offset,
            Self::Inactive | Self::Before => 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RegionConfig {
    #[serde(default)]
    pub label: String,
    pub range: ScrollRange,
    #[serde(default)]
    pub pinned: bool,
    pub entity_count: usize,
    /// Motion capability decided by the caller; `false` renders the resting layout.
    #[serde(default = "default_animate")]
    pub animate: bool,
    pub effect: Effect,
}

fn default_animate() -> bool {
    true
}

impl RegionConfig {
    pub fn new(label: impl Into<String>, range: ScrollRange, entity_count: usize, effect: Effect) -> Self {
        Self {
            label: label.into(),
            range,
            pinned: false,
            entity_count,
            animate: true,
            effect,
        }
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn validate(&self) -> ScrollFxResult<()> {
        if self.entity_count == 0 {
            return Err(ScrollFxError::config(format!(
                "region '{}' needs at least one entity",
                self.label
            )));
        }
        self.range.validate()?;
        self.effect.validate(self.entity_count)
    }

    /// Resolve a frame for the given scroll snapshot.
    pub(crate) fn resolve(&self, id: RegionId, scroll_y: f64, viewport: Viewport) -> RegionFrame {
        let progress = self.range.progress(scroll_y, viewport);
        let animated = self.animate && !viewport.is_degenerate();
        let pin = if self.pinned && animated {
            self.range.pin_state(scroll_y, viewport)
        } else {
            PinState::Inactive
        };
        let EffectFrame { entities, scene } = if animated {
            self.effect.resolve(progress, self.entity_count, viewport)
        } else {
            EffectFrame::resting(self.entity_count)
        };
        RegionFrame {
            region: id,
            progress,
            pin,
            animated,
            entities,
            scene,
            active_changed: false,
        }
    }
}

/// Snapshot delivered to `on_update` subscribers.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RegionFrame {
    pub region: RegionId,
    pub progress: f64,
    pub pin: PinState,
    pub animated: bool,
    pub entities: Vec<EntityFrame>,
    pub scene: SceneFrame,
    /// The scene's active entity differs from the previous delivered frame.
    pub active_changed: bool,
}

impl RegionFrame {
    pub fn transforms(&self) -> impl Iterator<Item = TransformRecord> + '_ {
        self.entities.iter().map(|e| e.transform)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/binding/region.rs"]
mod tests;
