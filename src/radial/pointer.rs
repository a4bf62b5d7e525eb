//! Drag-to-select: the joystick knob follows the pointer through a damped
//! approach and the smoothed displacement picks a sector by compass angle.

use smallvec::SmallVec;

use crate::{
    foundation::core::Vec2,
    foundation::error::{ScrollFxError, ScrollFxResult},
    foundation::math::approx_eq,
    transform::compass_degrees,
};

/// Paint layer of the highlighted sector.
pub const HIGHLIGHT_Z_INDEX: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PointerMapping {
    /// Displacements at or below this select nothing.
    pub dead_zone: f64,
    /// Knob travel limit.
    pub max_drag: f64,
    /// Fraction of the remaining distance covered per frame.
    pub smoothing: f64,
    /// Distance below which a released knob snaps home.
    pub settle_epsilon: f64,
}

impl Default for PointerMapping {
    fn default() -> Self {
        Self {
            dead_zone: 20.0,
            max_drag: 25.0,
            smoothing: 0.15,
            settle_epsilon: 0.01,
        }
    }
}

impl PointerMapping {
    pub fn validate(&self) -> ScrollFxResult<()> {
        if !(self.dead_zone.is_finite() && self.max_drag.is_finite())
            || self.dead_zone < 0.0
            || self.max_drag <= self.dead_zone
        {
            return Err(ScrollFxError::config(
                "pointer mapping requires 0 <= dead_zone < max_drag",
            ));
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ScrollFxError::config("pointer smoothing must be in (0, 1]"));
        }
        if !self.settle_epsilon.is_finite() || self.settle_epsilon < 0.0 {
            return Err(ScrollFxError::config("pointer settle_epsilon must be >= 0"));
        }
        Ok(())
    }

    /// Knob target for a raw pointer displacement: zero inside the dead zone,
    /// limited to `max_drag` outside it.
    pub fn clamp_drag(&self, displacement: Vec2) -> Vec2 {
        let len = displacement.hypot();
        if !len.is_finite() || len <= self.dead_zone {
            Vec2::ZERO
        } else if len > self.max_drag {
            displacement * (self.max_drag / len)
        } else {
            displacement
        }
    }

    pub fn sector_at(&self, displacement: Vec2, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let len = displacement.hypot();
        if !len.is_finite() || len.min(self.max_drag) <= self.dead_zone {
            return None;
        }
        let per = 360.0 / count as f64;
        Some(((compass_degrees(displacement) / per).floor() as usize) % count)
    }
}

/// Sector under a drag displacement with the default dead zone and travel.
pub fn map_pointer_to_sector(displacement: Vec2, count: usize) -> Option<usize> {
    PointerMapping::default().sector_at(displacement, count)
}

/// Center knob of the menu. Call [`Joystick::tick`] once per frame; it keeps
/// approaching the latest target after the pointer stops moving and goes idle
/// once a released knob is home.
#[derive(Clone, Debug, PartialEq)]
pub struct Joystick {
    mapping: PointerMapping,
    target: Vec2,
    current: Vec2,
    dragging: bool,
    running: bool,
}

impl Joystick {
    pub fn new(mapping: PointerMapping) -> Self {
        Self {
            mapping,
            target: Vec2::ZERO,
            current: Vec2::ZERO,
            dragging: false,
            running: false,
        }
    }

    pub fn press(&mut self) {
        self.dragging = true;
        self.running = true;
    }

    pub fn drag(&mut self, displacement: Vec2) {
        if self.dragging {
            self.target = self.mapping.clamp_drag(displacement);
        }
    }

    pub fn release(&mut self) {
        self.dragging = false;
        self.target = Vec2::ZERO;
    }

    /// Stop the frame loop immediately and recenter.
    pub fn cancel(&mut self) {
        self.dragging = false;
        self.running = false;
        self.target = Vec2::ZERO;
        self.current = Vec2::ZERO;
    }

    pub fn position(&self) -> Vec2 {
        self.current
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether the frame loop still has work to do.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance one frame and return the sector under the smoothed knob.
    pub fn tick(&mut self, count: usize) -> Option<usize> {
        if !self.running {
            return None;
        }
        self.current += (self.target - self.current) * self.mapping.smoothing;
        if !self.dragging {
            let rest = (self.target - self.current).hypot();
            if approx_eq(rest, 0.0, self.mapping.settle_epsilon) {
                self.current = self.target;
                self.running = false;
            }
        }
        if !self.dragging || self.current.hypot() <= self.mapping.dead_zone {
            return None;
        }
        self.mapping.sector_at(self.current, count)
    }
}

impl Default for Joystick {
    fn default() -> Self {
        Self::new(PointerMapping::default())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum SelectionEvent {
    Entered(usize),
    Left(usize),
}

/// Turns per-frame sector readings into edge-triggered events. At most one
/// sector is highlighted at a time; a new one always follows the `Left` of
/// the previous one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    active: Option<usize>,
}

impl SelectionTracker {
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn update(&mut self, next: Option<usize>) -> SmallVec<[SelectionEvent; 2]> {
        let mut events = SmallVec::new();
        if next == self.active {
            return events;
        }
        if let Some(prev) = self.active {
            events.push(SelectionEvent::Left(prev));
        }
        if let Some(idx) = next {
            events.push(SelectionEvent::Entered(idx));
        }
        tracing::debug!(from = ?self.active, to = ?next, "menu selection changed");
        self.active = next;
        events
    }

    pub fn clear(&mut self) -> Option<SelectionEvent> {
        self.active.take().map(SelectionEvent::Left)
    }

    pub fn z_index(&self, index: usize) -> i32 {
        if self.active == Some(index) {
            HIGHLIGHT_Z_INDEX
        } else {
            0
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/radial/pointer.rs"]
mod tests;
