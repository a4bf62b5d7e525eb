//! Engine-wide settings loaded from JSON.

use std::time::Duration;

use crate::{
    binding::ScrollBinder,
    effects::{DealIn, SlideTogether, Spotlight, StackFlip, StickyStack},
    foundation::core::Viewport,
    foundation::error::{ScrollFxError, ScrollFxResult},
    radial::RadialConfig,
};

/// Default parameters handed to new regions of each effect kind.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EffectDefaults {
    pub stack_flip: StackFlip,
    pub deal_in: DealIn,
    pub slide_together: SlideTogether,
    pub sticky_stack: StickyStack,
    pub spotlight: Spotlight,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Viewports narrower than this get no scroll motion.
    pub mobile_breakpoint_px: f64,
    pub resize_debounce_ms: u64,
    pub menu: RadialConfig,
    pub effects: EffectDefaults,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 1000.0,
            resize_debounce_ms: 250,
            menu: RadialConfig::default(),
            effects: EffectDefaults::default(),
        }
    }
}

impl EngineConfig {
    #[tracing::instrument(skip(json), fields(bytes = json.len()))]
    pub fn from_json(json: &str) -> ScrollFxResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        tracing::debug!(
            breakpoint = cfg.mobile_breakpoint_px,
            debounce_ms = cfg.resize_debounce_ms,
            "engine config loaded"
        );
        Ok(cfg)
    }

    pub fn to_json_pretty(&self) -> ScrollFxResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Effect parameters are checked when a region binds, against its entity count.
    pub fn validate(&self) -> ScrollFxResult<()> {
        if !self.mobile_breakpoint_px.is_finite() || self.mobile_breakpoint_px < 0.0 {
            return Err(ScrollFxError::config(
                "mobile_breakpoint_px must be finite and >= 0",
            ));
        }
        self.menu.validate()
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn is_mobile(&self, viewport: Viewport) -> bool {
        viewport.width < self.mobile_breakpoint_px
    }

    /// Caller-side motion decision: wide enough and laid out.
    pub fn motion_allowed(&self, viewport: Viewport) -> bool {
        !self.is_mobile(viewport) && !viewport.is_degenerate()
    }

    pub fn binder(&self, viewport: Viewport) -> ScrollBinder {
        ScrollBinder::new(viewport, self.resize_debounce())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
