//! Menu open/close reveal. Segments flicker in a shuffled order; the state
//! machine refuses toggles until the running reveal has finished.
//!
//! A closed menu can also show a one-off preview hint after first load: it
//! half-appears, holds, and fades out again. Any toggle cancels it.

use std::time::Duration;

use crate::{
    animation::ease::Ease,
    foundation::error::{ScrollFxError, ScrollFxResult},
    foundation::math::Rng64,
    transform::{clamp01, lerp},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum MenuState {
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FlickerParams {
    /// Delay between consecutive segments in shuffled order.
    pub step_ms: u64,
    /// One half-cycle of the flicker.
    pub duration_ms: u64,
    /// Extra yoyo half-cycles after the first.
    pub repeats: u32,
}

impl FlickerParams {
    pub fn step(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn run_length(&self) -> Duration {
        self.duration().saturating_mul(self.repeats.saturating_add(1))
    }
}

/// Center knob scale-in on open and scale-out on close.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KnobParams {
    pub delay_ms: u64,
    pub open_ms: u64,
    pub close_ms: u64,
}

impl Default for KnobParams {
    fn default() -> Self {
        Self {
            delay_ms: 200,
            open_ms: 400,
            close_ms: 300,
        }
    }
}

/// First-load hint shown while the menu is closed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PreviewParams {
    pub delay_ms: u64,
    /// Time between the start of the show and the start of the hide.
    pub hold_ms: u64,
    pub overlay_opacity: f64,
    pub knob_scale: f64,
    pub segment_opacity: f64,
    pub overlay_show_ms: u64,
    pub overlay_hide_ms: u64,
    pub knob_show_ms: u64,
    pub knob_hide_ms: u64,
    pub segment_show_ms: u64,
    pub segment_show_stagger_ms: u64,
    pub segment_hide_ms: u64,
    pub segment_hide_stagger_ms: u64,
}

impl Default for PreviewParams {
    fn default() -> Self {
        Self {
            delay_ms: 500,
            hold_ms: 2500,
            overlay_opacity: 0.3,
            knob_scale: 0.4,
            segment_opacity: 0.6,
            overlay_show_ms: 500,
            overlay_hide_ms: 500,
            knob_show_ms: 400,
            knob_hide_ms: 300,
            segment_show_ms: 500,
            segment_show_stagger_ms: 50,
            segment_hide_ms: 300,
            segment_hide_stagger_ms: 30,
        }
    }
}

impl PreviewParams {
    fn hide_at(&self) -> u64 {
        self.delay_ms.saturating_add(self.hold_ms)
    }

    /// Time from the preview start until everything has faded out.
    pub fn run_length(&self, segments: usize) -> Duration {
        let last = u64::try_from(segments.saturating_sub(1)).unwrap_or(u64::MAX);
        let segments_done = self
            .segment_hide_ms
            .saturating_add(self.segment_hide_stagger_ms.saturating_mul(last));
        let tail = segments_done
            .max(self.overlay_hide_ms)
            .max(self.knob_hide_ms);
        Duration::from_millis(self.hide_at().saturating_add(tail))
    }
}

/// Value of a show-then-hide tween pair at `t` ms.
fn show_hide(t: f64, show: (f64, f64, Ease), hide: (f64, f64, Ease), peak: f64) -> f64 {
    let (show_at, show_ms, show_ease) = show;
    let (hide_at, hide_ms, hide_ease) = hide;
    let progress = |start: f64, len: f64| {
        if len > 0.0 {
            clamp01((t - start) / len)
        } else if t >= start {
            1.0
        } else {
            0.0
        }
    };
    if t < hide_at {
        lerp(0.0, peak, show_ease.apply(progress(show_at, show_ms)))
    } else {
        lerp(peak, 0.0, hide_ease.apply(progress(hide_at, hide_ms)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub open: FlickerParams,
    pub close: FlickerParams,
    pub overlay_fade_ms: u64,
    /// Overlay stays up this long into a close before fading.
    pub overlay_close_delay_ms: u64,
    pub knob: KnobParams,
    pub preview: PreviewParams,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            open: FlickerParams {
                step_ms: 75,
                duration_ms: 75,
                repeats: 3,
            },
            close: FlickerParams {
                step_ms: 50,
                duration_ms: 50,
                repeats: 2,
            },
            overlay_fade_ms: 300,
            overlay_close_delay_ms: 600,
            knob: KnobParams::default(),
            preview: PreviewParams::default(),
        }
    }
}

impl RevealConfig {
    pub fn validate(&self) -> ScrollFxResult<()> {
        if self.open.duration_ms == 0 || self.close.duration_ms == 0 {
            return Err(ScrollFxError::config("flicker duration_ms must be > 0"));
        }
        let p = &self.preview;
        for (name, v) in [
            ("overlay_opacity", p.overlay_opacity),
            ("segment_opacity", p.segment_opacity),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(ScrollFxError::config(format!(
                    "preview {name} must be in [0, 1]"
                )));
            }
        }
        if !p.knob_scale.is_finite() || p.knob_scale < 0.0 {
            return Err(ScrollFxError::config("preview knob_scale must be finite and >= 0"));
        }
        Ok(())
    }
}

/// Scheduled flicker of one segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flicker {
    pub segment: usize,
    pub delay: Duration,
    pub duration: Duration,
    pub repeats: u32,
    pub from: f64,
    pub to: f64,
}

impl Flicker {
    pub fn end(&self) -> Duration {
        self.delay
            .saturating_add(self.duration.saturating_mul(self.repeats.saturating_add(1)))
    }

    /// Opacity `elapsed` after the reveal started. Settles on `to`.
    pub fn opacity_at(&self, elapsed: Duration) -> f64 {
        if elapsed < self.delay {
            return self.from;
        }
        if elapsed >= self.end() {
            return self.to;
        }
        let half = self.duration.as_secs_f64();
        if half <= 0.0 {
            return self.to;
        }
        let t = (elapsed - self.delay).as_secs_f64() / half;
        let cycle = t.floor();
        let eased = Ease::InOutQuad.apply(t - cycle);
        if (cycle as u64) % 2 == 0 {
            self.from + (self.to - self.from) * eased
        } else {
            self.to + (self.from - self.to) * eased
        }
    }
}

#[derive(Clone, Debug)]
pub struct MenuReveal {
    config: RevealConfig,
    segments: usize,
    rng: Rng64,
    state: MenuState,
    started: Duration,
    /// Indexed by segment.
    flickers: Vec<Flicker>,
    preview: Option<Duration>,
}

impl MenuReveal {
    pub fn new(segments: usize, config: RevealConfig, seed: u64) -> Self {
        Self {
            config,
            segments,
            rng: Rng64::new(seed),
            state: MenuState::Closed,
            started: Duration::ZERO,
            flickers: Vec::new(),
            preview: None,
        }
    }

    /// Schedule the first-load hint from `now`. Ignored unless closed.
    pub fn start_preview(&mut self, now: Duration) {
        if self.state == MenuState::Closed {
            self.preview = Some(now);
            tracing::debug!("menu preview scheduled");
        }
    }

    /// Hint is scheduled or still visible.
    pub fn preview_active(&self, now: Duration) -> bool {
        self.preview.is_some_and(|start| {
            now.saturating_sub(start) < self.config.preview.run_length(self.segments)
        })
    }

    fn preview_ms(&self, now: Duration) -> Option<f64> {
        let start = self.preview?;
        if self.state != MenuState::Closed || !self.preview_active(now) {
            return None;
        }
        Some(now.saturating_sub(start).as_secs_f64() * 1000.0)
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, MenuState::Opening | MenuState::Closing)
    }

    /// Overlay captures pointer input from the start of an open until a
    /// close has finished.
    pub fn overlay_interactive(&self) -> bool {
        self.state != MenuState::Closed
    }

    pub fn flickers(&self) -> &[Flicker] {
        &self.flickers
    }

    /// Start opening or closing. Returns `false` if a reveal is still running.
    pub fn toggle(&mut self, now: Duration) -> bool {
        let (next, params, from, to) = match self.state {
            MenuState::Closed => (MenuState::Opening, self.config.open, 0.0, 1.0),
            MenuState::Open => (MenuState::Closing, self.config.close, 1.0, 0.0),
            MenuState::Opening | MenuState::Closing => {
                tracing::debug!(state = ?self.state, "menu toggle ignored while animating");
                return false;
            }
        };
        if self.preview.take().is_some() {
            tracing::debug!("menu preview cancelled");
        }
        let order = self.rng.permutation(self.segments);
        let mut flickers: Vec<Flicker> = order
            .iter()
            .enumerate()
            .map(|(pos, &segment)| Flicker {
                segment,
                delay: params.step().saturating_mul(u32::try_from(pos).unwrap_or(u32::MAX)),
                duration: params.duration(),
                repeats: params.repeats,
                from,
                to,
            })
            .collect();
        flickers.sort_by_key(|f| f.segment);
        self.flickers = flickers;
        self.started = now;
        self.state = next;
        tracing::debug!(state = ?next, "menu reveal started");
        true
    }

    fn finish_time(&self) -> Duration {
        let flickers = self
            .flickers
            .iter()
            .map(Flicker::end)
            .max()
            .unwrap_or(Duration::ZERO);
        let fade = Duration::from_millis(self.config.overlay_fade_ms);
        let knob = &self.config.knob;
        let (overlay, knob) = match self.state {
            MenuState::Closing => (
                Duration::from_millis(self.config.overlay_close_delay_ms).saturating_add(fade),
                knob.delay_ms.saturating_add(knob.close_ms),
            ),
            _ => (fade, knob.delay_ms.saturating_add(knob.open_ms)),
        };
        flickers.max(overlay).max(Duration::from_millis(knob))
    }

    /// Advance the state machine. Returns the new state on a transition.
    pub fn tick(&mut self, now: Duration) -> Option<MenuState> {
        if !self.is_animating() || now.saturating_sub(self.started) < self.finish_time() {
            return None;
        }
        self.state = match self.state {
            MenuState::Opening => MenuState::Open,
            _ => MenuState::Closed,
        };
        tracing::debug!(state = ?self.state, "menu reveal finished");
        Some(self.state)
    }

    pub fn segment_opacity(&self, segment: usize, now: Duration) -> f64 {
        match self.state {
            MenuState::Closed => self.preview_ms(now).map_or(0.0, |t| {
                if segment >= self.segments {
                    return 0.0;
                }
                let p = &self.config.preview;
                let i = segment as f64;
                show_hide(
                    t,
                    (
                        p.delay_ms as f64 + i * p.segment_show_stagger_ms as f64,
                        p.segment_show_ms as f64,
                        Ease::OutQuad,
                    ),
                    (
                        p.hide_at() as f64 + i * p.segment_hide_stagger_ms as f64,
                        p.segment_hide_ms as f64,
                        Ease::OutQuad,
                    ),
                    p.segment_opacity,
                )
            }),
            MenuState::Open => 1.0,
            MenuState::Opening | MenuState::Closing => self
                .flickers
                .get(segment)
                .map_or(0.0, |f| f.opacity_at(now.saturating_sub(self.started))),
        }
    }

    pub fn overlay_opacity(&self, now: Duration) -> f64 {
        let elapsed = now.saturating_sub(self.started).as_secs_f64() * 1000.0;
        let fade = self.config.overlay_fade_ms as f64;
        let ramp = |t: f64| {
            if fade > 0.0 {
                clamp01(t / fade)
            } else if t >= 0.0 {
                1.0
            } else {
                0.0
            }
        };
        match self.state {
            MenuState::Closed => self.preview_ms(now).map_or(0.0, |t| {
                let p = &self.config.preview;
                show_hide(
                    t,
                    (p.delay_ms as f64, p.overlay_show_ms as f64, Ease::OutQuad),
                    (p.hide_at() as f64, p.overlay_hide_ms as f64, Ease::OutQuad),
                    p.overlay_opacity,
                )
            }),
            MenuState::Open => 1.0,
            MenuState::Opening => ramp(elapsed),
            MenuState::Closing => 1.0 - ramp(elapsed - self.config.overlay_close_delay_ms as f64),
        }
    }

    /// Scale of the center knob. Back eases overshoot past the end values.
    pub fn knob_scale(&self, now: Duration) -> f64 {
        let elapsed = now.saturating_sub(self.started).as_secs_f64() * 1000.0;
        let knob = &self.config.knob;
        let local = |len: u64| {
            let len = len as f64;
            let t = elapsed - knob.delay_ms as f64;
            if len > 0.0 {
                clamp01(t / len)
            } else if t >= 0.0 {
                1.0
            } else {
                0.0
            }
        };
        match self.state {
            MenuState::Closed => self.preview_ms(now).map_or(0.0, |t| {
                let p = &self.config.preview;
                show_hide(
                    t,
                    (p.delay_ms as f64, p.knob_show_ms as f64, Ease::BackOut),
                    (p.hide_at() as f64, p.knob_hide_ms as f64, Ease::BackIn),
                    p.knob_scale,
                )
            }),
            MenuState::Open => 1.0,
            MenuState::Opening => Ease::BackOut.apply(local(knob.open_ms)),
            MenuState::Closing => lerp(1.0, 0.0, Ease::BackIn.apply(local(knob.close_ms))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/radial/reveal.rs"]
mod tests;
