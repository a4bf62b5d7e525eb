//! Circular navigation menu: annulus sector geometry, drag-to-select pointer
//! mapping and the flickering open/close reveal.

pub mod geometry;
pub mod pointer;
pub mod reveal;

pub use geometry::{RadialConfig, RadialLayout, RadialSector, resolve_radial_geometry};
pub use pointer::{
    HIGHLIGHT_Z_INDEX, Joystick, PointerMapping, SelectionEvent, SelectionTracker,
    map_pointer_to_sector,
};
pub use reveal::{
    Flicker, FlickerParams, KnobParams, MenuReveal, MenuState, PreviewParams, RevealConfig,
};
