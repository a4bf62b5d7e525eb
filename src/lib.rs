//! scrollfx is a scroll-progress-driven animation engine.
//!
//! Every visual effect is a pure function from a normalized scroll progress
//! value (plus entity index, entity count and viewport) to a
//! [`TransformRecord`]. A thin binding layer maps host scroll offsets onto
//! region progress, owns pinning and pushes resolved frames to subscribers.
//! A separate geometry module builds the circular navigation menu.
//!
//! # Pipeline overview
//!
//! 1. **Bind**: [`RegionConfig`] -> [`RegionHandle`] via [`ScrollBinder::bind_scroll_region`]
//! 2. **Schedule**: progress -> active phase and local progress ([`PhaseTable`], [`Stagger`])
//! 3. **Resolve**: phase -> [`TransformRecord`] per entity ([`Effect`])
//! 4. **Deliver**: [`ScrollBinder::frame`] hands a [`RegionFrame`] to every `on_update` callback
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: resolution is pure; the only randomness (menu flicker
//!   order) comes from a seeded generator.
//! - **Total resolution**: any progress value, including NaN, yields a valid
//!   record with opacity in `[0, 1]` and positive scale.
//! - **No rendering**: the host applies the records however it draws.
//!
//! See [`crate::guide`] for a walkthrough.
#![forbid(unsafe_code)]

mod animation;
mod binding;
mod config;
mod effects;
mod foundation;
mod radial;

/// Standalone walkthrough of scrollfx concepts and API.
pub mod guide;
/// Shared numeric helpers (interpolation, easing curves, polar math).
pub mod transform;

pub use animation::ease::Ease;
pub use animation::phase::{
    Phase, PhaseSample, PhaseTable, Stagger, Window, WindowSample, WindowState,
};
pub use binding::{
    Debounce, PinState, RangeLength, RegionConfig, RegionFrame, RegionHandle, RegionId,
    ScrollBinder, ScrollRange, StartEdge, UpdateCallback,
};
pub use config::{EffectDefaults, EngineConfig};
pub use effects::deal_in::DealIn;
pub use effects::slide::SlideTogether;
pub use effects::spotlight::{ArcSpec, Spotlight, SpotlightPhase, TitleLayout};
pub use effects::stack_flip::{StackFlip, StackFlipPhase};
pub use effects::sticky::StickyStack;
pub use effects::{
    Effect, EffectFrame, EffectResolver, EntityFrame, SceneFrame, ScenePart, SceneRole,
    compose_frames,
};
pub use foundation::core::{
    Affine, BezPath, Entity, MIN_SCALE, Point, TransformRecord, Vec2, Viewport,
};
pub use foundation::error::{ScrollFxError, ScrollFxResult};
pub use foundation::math::Rng64;
pub use radial::{
    Flicker, FlickerParams, HIGHLIGHT_Z_INDEX, Joystick, KnobParams, MenuReveal, MenuState,
    PointerMapping, PreviewParams, RadialConfig, RadialLayout, RadialSector, RevealConfig,
    SelectionEvent, SelectionTracker, map_pointer_to_sector, resolve_radial_geometry,
};
