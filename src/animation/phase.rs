//! Phase scheduling: turning one scalar progress value into "which named
//! sub-interval is active, and how far through it are we".
//!
//! Two shapes are supported:
//!
//! - [`PhaseTable`]: an ordered, gap-free cover of `[0, 1]` for one entity.
//!   Per-index tables are produced by the effects by shifting a shared
//!   template by a stagger offset.
//! - [`Window`] / [`Stagger`]: a single per-index window with resting states
//!   before and after it. Windows of different indices may overlap and may run
//!   past `1.0`; local progress is always normalized by the window's own length.
//!
//! Resolution is total: every input, including NaN and values outside `[0, 1]`,
//! yields exactly one phase and a local progress in `[0, 1]`.

use smallvec::SmallVec;

use crate::{
    animation::ease::Ease,
    foundation::error::{ScrollFxError, ScrollFxResult},
    foundation::math::finite_clamp,
    transform::non_linear::clamp01,
};

/// Boundary slack when checking that phases meet without gaps.
const BOUNDARY_EPS: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phase<K> {
    pub kind: K,
    pub start: f64,
    pub end: f64, // exclusive, except for the final phase of a table
    pub ease: Ease,
}

impl<K> Phase<K> {
    pub fn new(kind: K, start: f64, end: f64) -> Self {
        Self {
            kind,
            start,
            end,
            ease: Ease::Linear,
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn len(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, progress: f64) -> bool {
        self.start <= progress && progress < self.end
    }

    /// Linear position inside the phase, clamped to `[0, 1]`.
    pub fn local(&self, progress: f64) -> f64 {
        let len = self.len();
        if len <= 0.0 {
            return if progress >= self.end { 1.0 } else { 0.0 };
        }
        clamp01((progress - self.start) / len)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseSample<K> {
    pub kind: K,
    /// Position of the phase inside its table.
    pub position: usize,
    /// Linear local progress in `[0, 1]`.
    pub local: f64,
    /// `local` shaped by the phase's ease.
    pub eased: f64,
}

/// Ordered, non-overlapping phases covering `[0, 1]` without gaps.
#[derive(Clone, Debug)]
pub struct PhaseTable<K> {
    phases: SmallVec<[Phase<K>; 6]>,
}

impl<K> PhaseTable<K>
where
    K: Copy + std::fmt::Debug,
{
    pub fn new(phases: impl IntoIterator<Item = Phase<K>>) -> ScrollFxResult<Self> {
        let phases: SmallVec<[Phase<K>; 6]> = phases.into_iter().collect();
        validate_phases(&phases)?;
        Ok(Self { phases })
    }

    /// Build a table from consecutive `(kind, end, ease)` steps starting at 0.
    /// Steps that would be empty (end not past the previous boundary) are
    /// skipped, which is how staggered templates drop a zero-length wait.
    pub fn contiguous(steps: impl IntoIterator<Item = (K, f64, Ease)>) -> ScrollFxResult<Self> {
        let mut phases = SmallVec::<[Phase<K>; 6]>::new();
        let mut cursor = 0.0;
        for (kind, end, ease) in steps {
            if end <= cursor + BOUNDARY_EPS {
                continue;
            }
            phases.push(Phase::new(kind, cursor, end).with_ease(ease));
            cursor = end;
        }
        Self::new(phases)
    }

    pub fn phases(&self) -> &[Phase<K>] {
        &self.phases
    }

    /// Resolve `progress` to exactly one phase.
    ///
    /// The first phase containing progress wins; progress before every phase
    /// maps to the first one at local 0, progress past every phase to the
    /// last one at local 1.
    pub fn resolve(&self, progress: f64) -> PhaseSample<K> {
        let p = finite_clamp(progress, 0.0, 1.0, 0.0);
        let (position, phase) = self
            .phases
            .iter()
            .enumerate()
            .find(|(_, ph)| ph.contains(p))
            .unwrap_or_else(|| {
                if p < self.phases[0].start {
                    (0, &self.phases[0])
                } else {
                    let last = self.phases.len() - 1;
                    (last, &self.phases[last])
                }
            });
        let local = phase.local(p);
        PhaseSample {
            kind: phase.kind,
            position,
            local,
            eased: phase.ease.apply(local),
        }
    }
}

fn validate_phases<K: std::fmt::Debug>(phases: &[Phase<K>]) -> ScrollFxResult<()> {
    let (Some(first), Some(last)) = (phases.first(), phases.last()) else {
        return Err(ScrollFxError::config("phase table must not be empty"));
    };
    for ph in phases {
        if !ph.start.is_finite() || !ph.end.is_finite() {
            return Err(ScrollFxError::config(format!(
                "phase {:?} bounds must be finite",
                ph.kind
            )));
        }
        if ph.start >= ph.end {
            return Err(ScrollFxError::config(format!(
                "phase {:?} start must be < end (got {} >= {})",
                ph.kind, ph.start, ph.end
            )));
        }
        if ph.start < 0.0 || ph.end > 1.0 + BOUNDARY_EPS {
            return Err(ScrollFxError::config(format!(
                "phase {:?} must lie within [0, 1] (got [{}, {}])",
                ph.kind, ph.start, ph.end
            )));
        }
    }
    if first.start.abs() > BOUNDARY_EPS {
        return Err(ScrollFxError::config("phase table must start at 0"));
    }
    if (last.end - 1.0).abs() > BOUNDARY_EPS {
        return Err(ScrollFxError::config("phase table must end at 1"));
    }
    for w in phases.windows(2) {
        let gap = w[1].start - w[0].end;
        if gap > BOUNDARY_EPS {
            return Err(ScrollFxError::config(format!(
                "gap between phases {:?} and {:?}",
                w[0].kind, w[1].kind
            )));
        }
        if gap < -BOUNDARY_EPS {
            return Err(ScrollFxError::config(format!(
                "phases {:?} and {:?} overlap",
                w[0].kind, w[1].kind
            )));
        }
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WindowState {
    Before,
    Active,
    After,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowSample {
    pub state: WindowState,
    /// 0 before the window, 1 after it, linear in between.
    pub local: f64,
}

/// One entity's animation window in region progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Window {
    pub start: f64,
    pub len: f64,
}

impl Window {
    pub fn new(start: f64, len: f64) -> Self {
        Self { start, len }
    }

    pub fn end(self) -> f64 {
        self.start + self.len
    }

    pub fn sample(self, progress: f64) -> WindowSample {
        let p = finite_clamp(progress, 0.0, 1.0, 0.0);
        if p < self.start {
            return WindowSample {
                state: WindowState::Before,
                local: 0.0,
            };
        }
        if self.len <= 0.0 || p > self.end() {
            return WindowSample {
                state: WindowState::After,
                local: 1.0,
            };
        }
        WindowSample {
            state: WindowState::Active,
            local: clamp01((p - self.start) / self.len),
        }
    }
}

/// Shared window template shifted by `step` per index.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stagger {
    pub offset: f64,
    pub step: f64,
    pub len: f64,
}

impl Stagger {
    pub fn new(offset: f64, step: f64, len: f64) -> Self {
        Self { offset, step, len }
    }

    pub fn window(self, index: usize) -> Window {
        Window::new(self.offset + (index as f64) * self.step, self.len)
    }

    pub fn validate(self, what: &str) -> ScrollFxResult<()> {
        for (name, v) in [("offset", self.offset), ("step", self.step), ("len", self.len)] {
            if !v.is_finite() || v < 0.0 {
                return Err(ScrollFxError::config(format!(
                    "{what} stagger {name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/phase.rs"]
mod tests;
