//! Project spotlight: one long pinned region split into an intro, a short
//! snap, the main scrub and an outro.
//!
//! During the scrub a title list travels from below the viewport to above
//! it, project images travel along a fixed quadratic arc in staggered
//! windows, and the title nearest the vertical center becomes active.

use crate::{
    animation::phase::{Phase, PhaseTable, Stagger, WindowState},
    effects::{EffectFrame, EffectResolver, EntityFrame, SceneFrame, SceneRole},
    foundation::core::{Entity, Point, TransformRecord, Viewport},
    foundation::error::{ScrollFxError, ScrollFxResult},
    transform::{clamp01, quadratic_bezier_point},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SpotlightPhase {
    Intro,
    Snap,
    Scrub,
    Outro,
}

/// Measured vertical layout of the title list, supplied by the host.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TitleLayout {
    /// Title centers relative to the top of the list.
    pub centers: Vec<f64>,
    pub list_height: f64,
}

impl TitleLayout {
    /// Evenly spaced rows of `row_height`.
    pub fn uniform(count: usize, row_height: f64) -> Self {
        Self {
            centers: (0..count)
                .map(|i| (i as f64 + 0.5) * row_height)
                .collect(),
            list_height: count as f64 * row_height,
        }
    }
}

/// Arc the images travel along, relative to a container that is
/// `container_width_frac` of the viewport wide and as tall as the viewport.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArcSpec {
    pub container_width_frac: f64,
    /// Distance of the arc endpoints from the container's right edge.
    pub start_inset: f64,
    /// How far above/below the viewport the endpoints sit.
    pub overshoot: f64,
    /// Horizontal reach of the control point past the endpoints.
    pub radius: f64,
}

impl Default for ArcSpec {
    fn default() -> Self {
        Self {
            container_width_frac: 0.3,
            start_inset: 220.0,
            overshoot: 200.0,
            radius: 500.0,
        }
    }
}

impl ArcSpec {
    pub fn control_points(&self, viewport: Viewport) -> (Point, Point, Point) {
        let x = viewport.width * self.container_width_frac - self.start_inset;
        (
            Point::new(x, -self.overshoot),
            Point::new(x + self.radius, viewport.center_y()),
            Point::new(x, viewport.height + self.overshoot),
        )
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Spotlight {
    pub intro_end: f64,
    pub snap_end: f64,
    pub scrub_end: f64,
    /// Image windows inside the scrub's local progress.
    pub images: Stagger,
    pub arc: ArcSpec,
    pub image_half_width: f64,
    pub image_half_height: f64,
    /// Intro texts part by this fraction of the viewport width.
    pub intro_travel_frac: f64,
    pub backdrop_image_start_scale: f64,
    pub dimmed_opacity: f64,
    pub titles: TitleLayout,
}

impl Default for Spotlight {
    fn default() -> Self {
        Self {
            intro_end: 0.2,
            snap_end: 0.25,
            scrub_end: 0.95,
            images: Stagger::new(0.0, 0.08, 0.3),
            arc: ArcSpec::default(),
            image_half_width: 100.0,
            image_half_height: 75.0,
            intro_travel_frac: 0.6,
            backdrop_image_start_scale: 1.5,
            dimmed_opacity: 0.25,
            titles: TitleLayout::default(),
        }
    }
}

impl Spotlight {
    pub fn with_titles(titles: TitleLayout) -> Self {
        Self {
            titles,
            ..Self::default()
        }
    }

    pub fn phase_table(&self) -> ScrollFxResult<PhaseTable<SpotlightPhase>> {
        PhaseTable::new([
            Phase::new(SpotlightPhase::Intro, 0.0, self.intro_end),
            Phase::new(SpotlightPhase::Snap, self.intro_end, self.snap_end),
            Phase::new(SpotlightPhase::Scrub, self.snap_end, self.scrub_end),
            Phase::new(SpotlightPhase::Outro, self.scrub_end, 1.0),
        ])
    }

    /// Scrub-local progress, held at 0 before and at 1 after the scrub.
    pub fn switch_progress(&self, progress: f64) -> f64 {
        clamp01((progress - self.snap_end) / (self.scrub_end - self.snap_end))
    }

    /// Top of the title list in viewport coordinates.
    pub fn title_list_y(&self, switch_progress: f64, viewport: Viewport) -> f64 {
        let start = viewport.height;
        let target = -self.titles.list_height;
        start - switch_progress * (start - target)
    }

    /// Title whose center is closest to the viewport's vertical center.
    /// Ties go to the lower index.
    pub fn nearest_title(&self, list_y: f64, viewport: Viewport) -> Option<usize> {
        let middle = viewport.center_y();
        self.titles
            .centers
            .iter()
            .enumerate()
            .map(|(i, c)| (i, (list_y + c - middle).abs()))
            .fold(None, |best: Option<(usize, f64)>, (i, d)| match best {
                Some((_, bd)) if bd <= d => best,
                _ => Some((i, d)),
            })
            .map(|(i, _)| i)
    }

    fn image(&self, phase: SpotlightPhase, switch: f64, entity: Entity, viewport: Viewport) -> TransformRecord {
        if matches!(phase, SpotlightPhase::Intro | SpotlightPhase::Snap) {
            return TransformRecord::hidden();
        }
        let sample = self.images.window(entity.index).sample(switch);
        if sample.state != WindowState::Active {
            return TransformRecord::hidden();
        }
        let (p0, p1, p2) = self.arc.control_points(viewport);
        let pos = quadratic_bezier_point(p0, p1, p2, sample.local);
        TransformRecord {
            translate_x: pos.x - self.image_half_width,
            translate_y: pos.y - self.image_half_height,
            ..TransformRecord::IDENTITY
        }
    }

    fn entity_frame(
        &self,
        phase: SpotlightPhase,
        switch: f64,
        active: Option<usize>,
        entity: Entity,
        viewport: Viewport,
    ) -> EntityFrame {
        let highlighted = active == Some(entity.index);
        let title = TransformRecord {
            opacity: if highlighted { 1.0 } else { self.dimmed_opacity },
            ..TransformRecord::IDENTITY
        };
        EntityFrame {
            inner: Some(title),
            highlighted,
            ..EntityFrame::new(entity.index, self.image(phase, switch, entity, viewport))
        }
    }
}

impl EffectResolver for Spotlight {
    fn validate(&self, total: usize) -> ScrollFxResult<()> {
        if !(0.0 < self.intro_end && self.intro_end < self.snap_end && self.snap_end < self.scrub_end && self.scrub_end < 1.0) {
            return Err(ScrollFxError::config(
                "spotlight requires 0 < intro_end < snap_end < scrub_end < 1",
            ));
        }
        self.phase_table()?;
        self.images.validate("images")?;
        if self.images.len <= 0.0 {
            return Err(ScrollFxError::config("spotlight images.len must be > 0"));
        }
        if self.titles.centers.len() != total {
            return Err(ScrollFxError::config(format!(
                "spotlight has {} title positions for {total} entities",
                self.titles.centers.len()
            )));
        }
        if !self.titles.list_height.is_finite() || self.titles.list_height < 0.0 {
            return Err(ScrollFxError::config(
                "spotlight titles.list_height must be finite and >= 0",
            ));
        }
        if self.titles.centers.iter().any(|c| !c.is_finite()) {
            return Err(ScrollFxError::config("spotlight title centers must be finite"));
        }
        if !(0.0..=1.0).contains(&self.dimmed_opacity) {
            return Err(ScrollFxError::config("spotlight dimmed_opacity must be in [0, 1]"));
        }
        Ok(())
    }

    fn resolve_entity(&self, progress: f64, entity: Entity, viewport: Viewport) -> EntityFrame {
        let Ok(table) = self.phase_table() else {
            return EntityFrame::resting(entity.index);
        };
        let phase = table.resolve(progress).kind;
        let switch = self.switch_progress(progress);
        let active = self.nearest_title(self.title_list_y(switch, viewport), viewport);
        self.entity_frame(phase, switch, active, entity, viewport)
    }

    fn resolve_scene(&self, progress: f64, _total: usize, viewport: Viewport) -> SceneFrame {
        let Ok(table) = self.phase_table() else {
            return SceneFrame::default();
        };
        let sample = table.resolve(progress);
        let switch = self.switch_progress(progress);
        let list_y = self.title_list_y(switch, viewport);
        let travel = viewport.width * self.intro_travel_frac;

        let (intro_t, intro_opacity, backdrop, backdrop_image) = match sample.kind {
            SpotlightPhase::Intro => {
                let a = sample.local;
                (
                    a,
                    1.0,
                    a,
                    self.backdrop_image_start_scale - a * (self.backdrop_image_start_scale - 1.0),
                )
            }
            _ => (1.0, 0.0, 1.0, 1.0),
        };
        let chrome = match sample.kind {
            SpotlightPhase::Snap | SpotlightPhase::Scrub => 1.0,
            SpotlightPhase::Intro | SpotlightPhase::Outro => 0.0,
        };

        let mut scene = SceneFrame::default();
        scene.push(
            SceneRole::IntroLeading,
            TransformRecord {
                translate_x: -intro_t * travel,
                opacity: intro_opacity,
                ..TransformRecord::IDENTITY
            },
        );
        scene.push(
            SceneRole::IntroTrailing,
            TransformRecord {
                translate_x: intro_t * travel,
                opacity: intro_opacity,
                ..TransformRecord::IDENTITY
            },
        );
        scene.push(
            SceneRole::Backdrop,
            TransformRecord {
                scale: backdrop,
                ..TransformRecord::IDENTITY
            },
        );
        scene.push(
            SceneRole::BackdropImage,
            TransformRecord {
                scale: backdrop_image,
                ..TransformRecord::IDENTITY
            },
        );
        scene.push(
            SceneRole::Header,
            TransformRecord {
                opacity: chrome,
                ..TransformRecord::IDENTITY
            },
        );
        scene.push(
            SceneRole::TitleFrame,
            TransformRecord {
                opacity: chrome,
                ..TransformRecord::IDENTITY
            },
        );
        scene.push(
            SceneRole::TitleList,
            TransformRecord {
                translate_y: list_y,
                ..TransformRecord::IDENTITY
            },
        );
        scene.active = self.nearest_title(list_y, viewport);
        scene
    }

    fn resolve_frame(&self, progress: f64, total: usize, viewport: Viewport) -> EffectFrame {
        let Ok(table) = self.phase_table() else {
            return EffectFrame::resting(total);
        };
        let phase = table.resolve(progress).kind;
        let switch = self.switch_progress(progress);
        let scene = self.resolve_scene(progress, total, viewport);
        let entities = Entity::all(total)
            .map(|e| self.entity_frame(phase, switch, scene.active, e, viewport))
            .collect();
        EffectFrame { entities, scene }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/spotlight.rs"]
mod tests;
