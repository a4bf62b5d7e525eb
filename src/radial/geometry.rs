use kurbo::{Arc, BezPath};

use crate::{
    foundation::core::{Point, Vec2, Viewport},
    foundation::error::{ScrollFxError, ScrollFxResult},
    radial::pointer::PointerMapping,
    radial::reveal::RevealConfig,
    transform::{compass_degrees, polar_point},
};

/// Flattening tolerance for sector outlines, in px.
const OUTLINE_TOLERANCE: f64 = 0.1;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RadialConfig {
    /// Viewports at least this wide get the fixed desktop size.
    pub breakpoint_px: f64,
    pub desktop_size: f64,
    pub compact_max_size: f64,
    /// Compact menus fit inside this fraction of both viewport dimensions.
    pub compact_viewport_frac: f64,
    pub inner_radius_frac: f64,
    pub outer_radius_frac: f64,
    pub content_radius_frac: f64,
    /// Angular gap (deg) on each side of every sector.
    pub gutter_deg: f64,
    pub pointer: PointerMapping,
    pub reveal: RevealConfig,
}

impl Default for RadialConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 1000.0,
            desktop_size: 700.0,
            compact_max_size: 480.0,
            compact_viewport_frac: 0.9,
            inner_radius_frac: 0.08,
            outer_radius_frac: 0.42,
            content_radius_frac: 0.28,
            gutter_deg: 0.19,
            pointer: PointerMapping::default(),
            reveal: RevealConfig::default(),
        }
    }
}

impl RadialConfig {
    pub fn validate(&self) -> ScrollFxResult<()> {
        for (name, v) in [
            ("breakpoint_px", self.breakpoint_px),
            ("desktop_size", self.desktop_size),
            ("compact_max_size", self.compact_max_size),
            ("compact_viewport_frac", self.compact_viewport_frac),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ScrollFxError::config(format!("menu {name} must be > 0")));
            }
        }
        if !(0.0 <= self.inner_radius_frac
            && self.inner_radius_frac < self.outer_radius_frac
            && self.outer_radius_frac <= 0.5)
        {
            return Err(ScrollFxError::config(
                "menu radii require 0 <= inner < outer <= 0.5 of the menu size",
            ));
        }
        if !self.content_radius_frac.is_finite() || self.content_radius_frac < 0.0 {
            return Err(ScrollFxError::config("menu content_radius_frac must be >= 0"));
        }
        if !self.gutter_deg.is_finite() || self.gutter_deg < 0.0 {
            return Err(ScrollFxError::config("menu gutter_deg must be >= 0"));
        }
        self.pointer.validate()?;
        self.reveal.validate()
    }

    /// Menu edge length for the viewport.
    pub fn menu_size(&self, viewport: Viewport) -> f64 {
        if viewport.width >= self.breakpoint_px {
            self.desktop_size
        } else {
            (viewport.width * self.compact_viewport_frac)
                .min(viewport.height * self.compact_viewport_frac)
                .min(self.compact_max_size)
        }
    }

    pub fn responsive(&self, viewport: Viewport) -> RadialLayout {
        self.layout(self.menu_size(viewport))
    }

    pub fn layout(&self, size: f64) -> RadialLayout {
        RadialLayout {
            size,
            inner_radius: size * self.inner_radius_frac,
            outer_radius: size * self.outer_radius_frac,
            content_radius: size * self.content_radius_frac,
            gutter_deg: self.gutter_deg,
        }
    }
}

/// Concrete radii for one menu size. Coordinates are relative to the menu's
/// top-left corner; the center sits at `(size / 2, size / 2)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RadialLayout {
    pub size: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub content_radius: f64,
    pub gutter_deg: f64,
}

impl RadialLayout {
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }

    pub fn sectors(&self, count: usize) -> ScrollFxResult<Vec<RadialSector>> {
        if count == 0 {
            return Err(ScrollFxError::geometry("radial menu needs at least one item"));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ScrollFxError::geometry(format!(
                "radial menu size must be finite and > 0 (got {})",
                self.size
            )));
        }
        let per = 360.0 / count as f64;
        if 2.0 * self.gutter_deg >= per {
            return Err(ScrollFxError::geometry(format!(
                "{count} sectors leave no room inside a {}deg gutter",
                self.gutter_deg
            )));
        }
        let center = self.center();
        Ok((0..count)
            .map(|index| {
                let base = per * index as f64;
                let start_angle = base + self.gutter_deg;
                let end_angle = base + per - self.gutter_deg;
                RadialSector {
                    index,
                    start_angle,
                    end_angle,
                    inner_radius: self.inner_radius,
                    outer_radius: self.outer_radius,
                    center,
                    anchor: polar_point(center, self.content_radius, base + per / 2.0),
                }
            })
            .collect())
    }
}

/// One wedge of the annulus. Angles are compass degrees: 0 is up, clockwise.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RadialSector {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub center: Point,
    /// Label position at the mid-angle on the content radius.
    pub anchor: Point,
}

impl RadialSector {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    fn large_arc(&self) -> u8 {
        u8::from(self.span() > 180.0)
    }

    fn corners(&self) -> [Point; 4] {
        [
            polar_point(self.center, self.inner_radius, self.start_angle),
            polar_point(self.center, self.outer_radius, self.start_angle),
            polar_point(self.center, self.outer_radius, self.end_angle),
            polar_point(self.center, self.inner_radius, self.end_angle),
        ]
    }

    /// SVG path data: inner start, out to the outer arc, sweep clockwise,
    /// back in and sweep the inner arc home.
    pub fn svg_path(&self) -> String {
        let [is, os, oe, ie] = self.corners();
        let (ro, ri, large) = (self.outer_radius, self.inner_radius, self.large_arc());
        format!(
            "M {} {} L {} {} A {ro} {ro} 0 {large} 1 {} {} L {} {} A {ri} {ri} 0 {large} 0 {} {} Z",
            is.x, is.y, os.x, os.y, oe.x, oe.y, ie.x, ie.y, is.x, is.y
        )
    }

    pub fn to_bez_path(&self) -> BezPath {
        let [is, os, _, ie] = self.corners();
        let start = (self.start_angle - 90.0).to_radians();
        let end = (self.end_angle - 90.0).to_radians();
        let sweep = end - start;

        let outer = Arc {
            center: self.center,
            radii: Vec2::new(self.outer_radius, self.outer_radius),
            start_angle: start,
            sweep_angle: sweep,
            x_rotation: 0.0,
        };
        let inner = Arc {
            center: self.center,
            radii: Vec2::new(self.inner_radius, self.inner_radius),
            start_angle: end,
            sweep_angle: -sweep,
            x_rotation: 0.0,
        };

        let mut path = BezPath::new();
        path.move_to(is);
        path.line_to(os);
        path.extend(outer.append_iter(OUTLINE_TOLERANCE));
        path.line_to(ie);
        path.extend(inner.append_iter(OUTLINE_TOLERANCE));
        path.close_path();
        path
    }

    pub fn contains(&self, point: Point) -> bool {
        let d = point - self.center;
        let r = d.hypot();
        if r < self.inner_radius || r > self.outer_radius {
            return false;
        }
        let a = compass_degrees(d);
        self.start_angle <= a && a < self.end_angle
    }
}

/// Sector list for `item_count` entries of a `container_size` menu with
/// the default proportions.
#[tracing::instrument]
pub fn resolve_radial_geometry(item_count: usize, container_size: f64) -> ScrollFxResult<Vec<RadialSector>> {
    RadialConfig::default().layout(container_size).sectors(item_count)
}

#[cfg(test)]
#[path = "../../tests/unit/radial/geometry.rs"]
mod tests;
