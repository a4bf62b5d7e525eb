//! Transform resolvers: one strategy per visual effect, all sharing the phase
//! scheduler and the easing helpers.

pub mod deal_in;
pub mod slide;
pub mod spotlight;
pub mod stack_flip;
pub mod sticky;

use smallvec::SmallVec;

use crate::{
    foundation::core::{Entity, TransformRecord, Viewport},
    foundation::error::{ScrollFxError, ScrollFxResult},
    foundation::math::finite_clamp,
};

pub use deal_in::DealIn;
pub use slide::SlideTogether;
pub use spotlight::{Spotlight, TitleLayout};
pub use stack_flip::StackFlip;
pub use sticky::StickyStack;

/// Resolved state for one entity of a region.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EntityFrame {
    pub index: usize,
    pub transform: TransformRecord,
    /// Nested element animated on its own timeline (initial letter, title).
    pub inner: Option<TransformRecord>,
    /// Opacity of the dimming overlay drawn over the entity.
    pub overlay_opacity: f64,
    /// Entity is held fixed in the viewport.
    pub pinned: bool,
    /// Entity is the highlighted one of its region.
    pub highlighted: bool,
}

impl EntityFrame {
    pub fn new(index: usize, transform: TransformRecord) -> Self {
        Self {
            index,
            transform,
            inner: None,
            overlay_opacity: 0.0,
            pinned: false,
            highlighted: false,
        }
    }

    pub fn resting(index: usize) -> Self {
        Self::new(index, TransformRecord::resting(index))
    }

    fn sanitized(mut self) -> Self {
        self.transform = self.transform.sanitized();
        self.inner = self.inner.map(TransformRecord::sanitized);
        self.overlay_opacity = finite_clamp(self.overlay_opacity, 0.0, 1.0, 0.0);
        self
    }
}

/// Region-level elements that are not one of the entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SceneRole {
    IntroLeading,
    IntroTrailing,
    Backdrop,
    BackdropImage,
    Header,
    TitleList,
    TitleFrame,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScenePart {
    pub role: SceneRole,
    pub transform: TransformRecord,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct SceneFrame {
    pub parts: SmallVec<[ScenePart; 8]>,
    /// Entity whose content drives region-wide state (e.g. the backdrop image).
    pub active: Option<usize>,
}

impl SceneFrame {
    pub fn part(&self, role: SceneRole) -> Option<&TransformRecord> {
        self.parts
            .iter()
            .find(|p| p.role == role)
            .map(|p| &p.transform)
    }

    pub(crate) fn push(&mut self, role: SceneRole, transform: TransformRecord) {
        self.parts.push(ScenePart { role, transform });
    }
}

/// Every entity of a region resolved against one consistent progress snapshot.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct EffectFrame {
    pub entities: Vec<EntityFrame>,
    pub scene: SceneFrame,
}

impl EffectFrame {
    /// Natural layout with no motion applied.
    pub fn resting(total: usize) -> Self {
        Self {
            entities: (0..total).map(EntityFrame::resting).collect(),
            scene: SceneFrame::default(),
        }
    }

    fn sanitized(mut self) -> Self {
        for e in &mut self.entities {
            *e = e.sanitized();
        }
        for p in &mut self.scene.parts {
            p.transform = p.transform.sanitized();
        }
        self
    }
}

/// Strategy interface shared by all effects.
///
/// `progress` handed to resolvers is already clamped to `[0, 1]` and the
/// viewport is known to be non-degenerate.
pub trait EffectResolver {
    fn validate(&self, total: usize) -> ScrollFxResult<()>;

    fn resolve_entity(&self, progress: f64, entity: Entity, viewport: Viewport) -> EntityFrame;

    fn resolve_scene(&self, _progress: f64, _total: usize, _viewport: Viewport) -> SceneFrame {
        SceneFrame::default()
    }

    /// Resolve every entity first, then the scene, so cross-entity decisions
    /// see a complete snapshot.
    fn resolve_frame(&self, progress: f64, total: usize, viewport: Viewport) -> EffectFrame {
        EffectFrame {
            entities: Entity::all(total)
                .map(|e| self.resolve_entity(progress, e, viewport))
                .collect(),
            scene: self.resolve_scene(progress, total, viewport),
        }
    }
}

/// Tagged effect kind bound to a scroll region.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "params", rename_all = "snake_case")]
pub enum Effect {
    StackFlip(StackFlip),
    DealIn(DealIn),
    SlideTogether(SlideTogether),
    StickyStack(StickyStack),
    Spotlight(Spotlight),
}

impl Effect {
    pub fn name(&self) -> &'static str {
        match self {
            Self::StackFlip(_) => "stack_flip",
            Self::DealIn(_) => "deal_in",
            Self::SlideTogether(_) => "slide_together",
            Self::StickyStack(_) => "sticky_stack",
            Self::Spotlight(_) => "spotlight",
        }
    }

    fn resolver(&self) -> &dyn EffectResolver {
        match self {
            Self::StackFlip(e) => e,
            Self::DealIn(e) => e,
            Self::SlideTogether(e) => e,
            Self::StickyStack(e) => e,
            Self::Spotlight(e) => e,
        }
    }

    pub fn validate(&self, total: usize) -> ScrollFxResult<()> {
        if total == 0 {
            return Err(ScrollFxError::config(format!(
                "{} needs at least one entity",
                self.name()
            )));
        }
        self.resolver().validate(total)
    }

    /// Resolve one entity. Out-of-range progress is clamped; a degenerate
    /// viewport yields the resting transform.
    pub fn resolve_entity(&self, progress: f64, entity: Entity, viewport: Viewport) -> EntityFrame {
        if viewport.is_degenerate() {
            return EntityFrame::resting(entity.index);
        }
        let p = finite_clamp(progress, 0.0, 1.0, 0.0);
        self.resolver()
            .resolve_entity(p, entity, viewport)
            .sanitized()
    }

    /// Resolve the whole region for one progress value.
    pub fn resolve(&self, progress: f64, total: usize, viewport: Viewport) -> EffectFrame {
        if viewport.is_degenerate() {
            return EffectFrame::resting(total);
        }
        let p = finite_clamp(progress, 0.0, 1.0, 0.0);
        self.resolver().resolve_frame(p, total, viewport).sanitized()
    }
}

/// Merge two frames resolved for the same entities by independently scrubbed
/// regions (e.g. an entrance region and a pinned slide region).
///
/// Entity transforms and nested records are composed; flags are OR-ed and the
/// first frame's scene wins. Entities present in only one frame pass through.
pub fn compose_frames(a: &EffectFrame, b: &EffectFrame) -> EffectFrame {
    let n = a.entities.len().max(b.entities.len());
    let entities = (0..n)
        .map(|i| match (a.entities.get(i), b.entities.get(i)) {
            (Some(x), Some(y)) => EntityFrame {
                index: x.index,
                transform: x.transform.compose(y.transform),
                inner: match (x.inner, y.inner) {
                    (Some(p), Some(q)) => Some(p.compose(q)),
                    (p, q) => p.or(q),
                },
                overlay_opacity: x.overlay_opacity.max(y.overlay_opacity),
                pinned: x.pinned || y.pinned,
                highlighted: x.highlighted || y.highlighted,
            },
            (Some(x), None) => *x,
            (None, Some(y)) => *y,
            (None, None) => EntityFrame::resting(i),
        })
        .collect();
    EffectFrame {
        entities,
        scene: if a.scene.parts.is_empty() {
            b.scene.clone()
        } else {
            a.scene.clone()
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/mod.rs"]
mod tests;
