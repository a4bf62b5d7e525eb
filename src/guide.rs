//! # scrollfx guide
//!
//! A standalone walkthrough of the engine's model and public API. For the
//! short version, start with the repository `README.md`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - **Progress**: a normalized `f64` in `[0, 1]` describing how far scrolling has advanced
//!   through a region. Values outside the range (and NaN) are clamped, never propagated.
//! - [`Entity`](crate::Entity): one animated item among `total` items sharing a region.
//! - [`TransformRecord`](crate::TransformRecord): the resolved visual state of one element
//!   (pixel and percent translation, scale, z/y rotation, opacity, paint order).
//! - [`Effect`](crate::Effect): a tagged set of effect parameters; each variant implements
//!   [`EffectResolver`](crate::EffectResolver).
//! - [`ScrollBinder`](crate::ScrollBinder): the registry that turns host scroll offsets into
//!   region progress and delivers [`RegionFrame`](crate::RegionFrame)s.
//!
//! ---
//!
//! ## Phases, windows and staggers
//!
//! Effects sequence their motion with two scheduling shapes:
//!
//! - [`PhaseTable`](crate::PhaseTable): ordered phases covering `[0, 1]` without gaps.
//!   [`PhaseTable::resolve`](crate::PhaseTable::resolve) always returns exactly one phase and
//!   a local progress in `[0, 1]`, shaped by the phase's [`Ease`](crate::Ease).
//! - [`Window`](crate::Window) and [`Stagger`](crate::Stagger): a per-index window with resting
//!   states before and after it. Windows of different entities may overlap.
//!
//! ```
//! use scrollfx::{Stagger, WindowState};
//!
//! let entrance = Stagger::new(0.0, 0.15, 0.7);
//! let s = entrance.window(2).sample(0.65);
//! assert_eq!(s.state, WindowState::Active);
//! assert!((s.local - 0.5).abs() < 1e-9);
//! ```
//!
//! ---
//!
//! ## Effects
//!
//! | Effect | What moves |
//! |---|---|
//! | [`StackFlip`](crate::StackFlip) | cards fade in, gather into a fanned stack, flip one by one |
//! | [`DealIn`](crate::DealIn) | cards rise into place, initial letters pop in late |
//! | [`SlideTogether`](crate::SlideTogether) | card contents swing in from the right, then grow |
//! | [`StickyStack`](crate::StickyStack) | sections pin, shrink, tilt and dim as the next covers them |
//! | [`Spotlight`](crate::Spotlight) | titles scroll past center while images travel an arc |
//!
//! Effects are pure. Resolve one directly when no scrolling is involved:
//!
//! ```
//! use scrollfx::{Effect, StackFlip, Viewport};
//!
//! let fx = Effect::StackFlip(StackFlip::default());
//! fx.validate(3)?;
//! let frame = fx.resolve(1.0, 3, Viewport::new(1440.0, 900.0)?);
//! assert!(frame.entities.iter().all(|e| e.transform.rotation_y == 180.0));
//! # Ok::<(), scrollfx::ScrollFxError>(())
//! ```
//!
//! Two regions scrubbing the same elements (the deal-in entrance and the pinned slide) are
//! merged with [`compose_frames`](crate::compose_frames): translations and rotations add,
//! scale and opacity multiply.
//!
//! ---
//!
//! ## Binding regions to scroll
//!
//! The host owns the event loop. It forwards scroll offsets and resizes and pumps one frame
//! per animation tick:
//!
//! ```
//! use std::time::Duration;
//! use scrollfx::{
//!     Effect, EngineConfig, RangeLength, RegionConfig, ScrollRange, StartEdge, StickyStack,
//!     Viewport,
//! };
//!
//! let cfg = EngineConfig::default();
//! let viewport = Viewport::new(1440.0, 900.0)?;
//! let mut binder = cfg.binder(viewport);
//!
//! let services = binder.bind_scroll_region(
//!     RegionConfig::new(
//!         "services",
//!         ScrollRange::new(900.0, StartEdge::Top, RangeLength::ViewportHeights(3.0)),
//!         4,
//!         Effect::StickyStack(StickyStack::default()),
//!     )
//!     .pinned(true)
//!     .animate(cfg.motion_allowed(viewport)),
//! )?;
//! services.on_update(|frame| {
//!     for t in frame.transforms() {
//!         let _ = t.scale; // apply to the element
//!     }
//! });
//!
//! binder.on_scroll(1800.0);
//! assert_eq!(binder.frame(Duration::ZERO), 1);
//! services.teardown();
//! # Ok::<(), scrollfx::ScrollFxError>(())
//! ```
//!
//! Within one frame every region is resolved before any callback runs. Callbacks may tear
//! down regions, including their own; torn-down regions receive nothing further. Dropping a
//! [`RegionHandle`](crate::RegionHandle) tears its region down.
//!
//! Pinned regions report a [`PinState`](crate::PinState) whose offset is the translation that
//! cancels scrolling. It grows with scroll while pinned and stays at the range length after
//! release, so there is no jump at progress 1.
//!
//! ---
//!
//! ## Motion on narrow viewports
//!
//! The core never senses the viewport on its own. Callers decide with
//! [`EngineConfig::motion_allowed`](crate::EngineConfig::motion_allowed) (or any rule of their
//! own), pass the result as `RegionConfig::animate` and flip it later with
//! [`RegionHandle::set_animate`](crate::RegionHandle::set_animate). Without motion a region
//! reports the resting layout and never pins.
//!
//! ---
//!
//! ## Radial menu
//!
//! - [`resolve_radial_geometry`](crate::resolve_radial_geometry) builds equal annulus sectors
//!   with a small gutter, an SVG path and a [`BezPath`](crate::BezPath) outline each.
//! - [`map_pointer_to_sector`](crate::map_pointer_to_sector) turns a drag displacement into a
//!   sector index by compass angle (0 is up, clockwise), with a dead zone around the center.
//! - [`Joystick`](crate::Joystick) smooths the knob toward the pointer every frame and
//!   [`SelectionTracker`](crate::SelectionTracker) reports only changes.
//! - [`MenuReveal`](crate::MenuReveal) runs the flickering open/close sequence and the
//!   center knob scale, and ignores toggles until it is done. `start_preview` schedules the
//!   first-load hint; the first toggle cancels it.
//!
//! ```
//! use scrollfx::{Vec2, map_pointer_to_sector};
//!
//! assert_eq!(map_pointer_to_sector(Vec2::new(0.0, -50.0), 6), Some(0));
//! assert_eq!(map_pointer_to_sector(Vec2::new(0.0, -10.0), 6), None);
//! ```
//!
//! ---
//!
//! ## Errors and logging
//!
//! Configuration problems surface as [`ScrollFxError`](crate::ScrollFxError) when a region is
//! bound or a config is loaded. Resolution itself never fails. Lifecycle edges (bind, teardown,
//! resize rebuilds, menu transitions) are logged through `tracing`; install any subscriber to
//! see them.
