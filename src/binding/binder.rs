//! Region registry and frame pump.
//!
//! The host feeds scroll and resize events and calls [`ScrollBinder::frame`]
//! once per animation frame. Each frame first resolves every live region
//! against one scroll snapshot, then delivers the results. Callbacks are
//! taken out of the region while they run, so a callback may tear down its
//! own or any other region without re-entrancy problems.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

use crate::{
    binding::debounce::Debounce,
    binding::region::{PinState, RegionConfig, RegionFrame, RegionId, ScrollRange},
    foundation::core::Viewport,
    foundation::error::ScrollFxResult,
};

pub type UpdateCallback = Box<dyn FnMut(&RegionFrame)>;

struct RegionState {
    id: RegionId,
    config: RegionConfig,
    live: bool,
    /// Needs a resolve even if the binder saw no new input.
    stale: bool,
    /// Bumped on every config change made through the handle.
    generation: u64,
    callbacks: Vec<UpdateCallback>,
    last_frame: Option<RegionFrame>,
    last_active: Option<usize>,
}

pub struct ScrollBinder {
    regions: Vec<Weak<RefCell<RegionState>>>,
    next_id: u64,
    scroll_y: f64,
    viewport: Viewport,
    pending_viewport: Option<Viewport>,
    resize: Debounce,
    dirty: bool,
}

impl ScrollBinder {
    pub fn new(viewport: Viewport, resize_debounce: Duration) -> Self {
        Self {
            regions: Vec::new(),
            next_id: 0,
            scroll_y: 0.0,
            viewport,
            pending_viewport: None,
            resize: Debounce::new(resize_debounce),
            dirty: true,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Register a region. Configuration errors are reported here, never
    /// during frame resolution.
    #[tracing::instrument(skip(self, config), fields(label = %config.label, effect = config.effect.name()))]
    pub fn bind_scroll_region(&mut self, config: RegionConfig) -> ScrollFxResult<RegionHandle> {
        config.validate()?;
        let id = RegionId(self.next_id);
        self.next_id += 1;
        let state = Rc::new(RefCell::new(RegionState {
            id,
            config,
            live: true,
            stale: true,
            generation: 0,
            callbacks: Vec::new(),
            last_frame: None,
            last_active: None,
        }));
        self.regions.push(Rc::downgrade(&state));
        tracing::debug!(%id, "bound scroll region");
        Ok(RegionHandle { state })
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        if !scroll_y.is_finite() {
            tracing::debug!(scroll_y, "ignoring non-finite scroll offset");
            return;
        }
        if scroll_y != self.scroll_y {
            self.scroll_y = scroll_y;
            self.dirty = true;
        }
    }

    /// Geometry is rebuilt once resizing has been quiet for the debounce delay.
    pub fn on_resize(&mut self, viewport: Viewport, now: Duration) {
        self.pending_viewport = Some(viewport);
        self.resize.schedule(now);
    }

    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    /// Regions that are bound and not torn down.
    pub fn live_regions(&self) -> usize {
        self.regions
            .iter()
            .filter_map(Weak::upgrade)
            .filter(|r| r.borrow().live)
            .count()
    }

    /// Resolve and deliver one animation frame. Returns the number of regions
    /// that received an update.
    pub fn frame(&mut self, now: Duration) -> usize {
        if self.resize.poll(now) {
            if let Some(viewport) = self.pending_viewport.take() {
                tracing::debug!(width = viewport.width, height = viewport.height, "viewport rebuilt");
                self.viewport = viewport;
                self.dirty = true;
            }
        }

        let mut live = Vec::with_capacity(self.regions.len());
        self.regions.retain(|weak| match weak.upgrade() {
            Some(region) if region.borrow().live => {
                live.push(region);
                true
            }
            _ => false,
        });

        // Resolve everything before anything is applied.
        let pending: Vec<_> = live
            .into_iter()
            .filter_map(|region| {
                let frame = {
                    let state = region.borrow();
                    if !(self.dirty || state.stale) {
                        return None;
                    }
                    let mut frame = state.config.resolve(state.id, self.scroll_y, self.viewport);
                    frame.active_changed = frame.scene.active != state.last_active;
                    (state.generation, frame)
                };
                Some((region, frame))
            })
            .collect();
        self.dirty = false;

        let mut delivered = 0;
        for (region, (generation, mut frame)) in pending {
            let mut callbacks = {
                let mut state = region.borrow_mut();
                // Torn down by an earlier callback in this frame.
                if !state.live {
                    continue;
                }
                // Reconfigured by an earlier callback in this frame.
                if state.generation != generation {
                    frame = state.config.resolve(state.id, self.scroll_y, self.viewport);
                    frame.active_changed = frame.scene.active != state.last_active;
                }
                state.stale = false;
                state.last_active = frame.scene.active;
                state.last_frame = Some(frame.clone());
                std::mem::take(&mut state.callbacks)
            };
            tracing::trace!(region = %frame.region, progress = frame.progress, "frame");
            for cb in &mut callbacks {
                if !region.borrow().live {
                    break;
                }
                cb(&frame);
            }
            let mut state = region.borrow_mut();
            if state.live {
                callbacks.append(&mut state.callbacks);
                state.callbacks = callbacks;
            }
            delivered += 1;
        }
        delivered
    }
}

/// Owner's handle to a bound region. Dropping the handle tears the region down.
pub struct RegionHandle {
    state: Rc<RefCell<RegionState>>,
}

impl RegionHandle {
    pub fn id(&self) -> RegionId {
        self.state.borrow().id
    }

    pub fn is_live(&self) -> bool {
        self.state.borrow().live
    }

    /// Subscribe to resolved frames. Ignored after teardown.
    pub fn on_update(&self, callback: impl FnMut(&RegionFrame) + 'static) {
        let mut state = self.state.borrow_mut();
        if state.live {
            state.callbacks.push(Box::new(callback));
        }
    }

    /// Release the binding: drop callbacks and lift any pin. Safe to call
    /// any number of times.
    pub fn teardown(&self) {
        let mut state = self.state.borrow_mut();
        if !state.live {
            return;
        }
        state.live = false;
        state.callbacks.clear();
        state.last_frame = None;
        tracing::debug!(id = %state.id, "tore down scroll region");
    }

    /// Current pin state; `Inactive` once torn down.
    pub fn pin(&self) -> PinState {
        self.state
            .borrow()
            .last_frame
            .as_ref()
            .map_or(PinState::Inactive, |f| f.pin)
    }

    pub fn last_frame(&self) -> Option<RegionFrame> {
        self.state.borrow().last_frame.clone()
    }

    /// Toggle motion, e.g. after the caller re-evaluated its breakpoint.
    /// No-op after teardown.
    pub fn set_animate(&self, animate: bool) {
        let mut state = self.state.borrow_mut();
        if !state.live {
            return;
        }
        if state.config.animate != animate {
            tracing::debug!(id = %state.id, animate, "motion toggled");
            state.config.animate = animate;
            state.stale = true;
            state.generation += 1;
        }
    }

    /// Replace the scroll range after a layout change. No-op after teardown.
    pub fn set_range(&self, range: ScrollRange) -> ScrollFxResult<()> {
        range.validate()?;
        let mut state = self.state.borrow_mut();
        if state.live {
            state.config.range = range;
            state.stale = true;
            state.generation += 1;
        }
        Ok(())
    }
}

impl Drop for RegionHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/binding/binder.rs"]
mod tests;
