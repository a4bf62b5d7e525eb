//! Scroll-binding adapter: maps host scroll offsets onto region progress,
//! owns the pin lifecycle and pushes resolved frames to subscribers.

pub mod binder;
pub mod debounce;
pub mod region;

pub use binder::{RegionHandle, ScrollBinder, UpdateCallback};
pub use debounce::Debounce;
pub use region::{PinState, RangeLength, RegionConfig, RegionFrame, RegionId, ScrollRange, StartEdge};
