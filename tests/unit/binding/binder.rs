use std::{cell::Cell, rc::Rc};

use super::*;
use crate::binding::region::{RangeLength, StartEdge};
use crate::effects::{Effect, Spotlight, StackFlip, StickyStack, TitleLayout};

fn vp() -> Viewport {
    Viewport::new(1440.0, 900.0).unwrap()
}

fn binder() -> ScrollBinder {
    ScrollBinder::new(vp(), Duration::from_millis(250))
}

fn deck() -> RegionConfig {
    RegionConfig::new(
        "about",
        ScrollRange::new(0.0, StartEdge::Top, RangeLength::Pixels(1000.0)),
        3,
        Effect::StackFlip(StackFlip::default()),
    )
    .pinned(true)
}

fn counter(handle: &RegionHandle) -> Rc<Cell<usize>> {
    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    handle.on_update(move |_| h.set(h.get() + 1));
    hits
}

#[test]
fn bind_rejects_invalid_config() {
    let mut b = binder();
    let bad = RegionConfig::new(
        "deck",
        ScrollRange::new(0.0, StartEdge::Top, RangeLength::Pixels(1000.0)),
        4,
        Effect::StackFlip(StackFlip::default()),
    );
    assert!(b.bind_scroll_region(bad).is_err());
    assert_eq!(b.live_regions(), 0);
}

#[test]
fn scroll_drives_callbacks_once_per_frame() {
    let mut b = binder();
    let h = b.bind_scroll_region(deck()).unwrap();
    let hits = counter(&h);

    assert_eq!(b.frame(Duration::ZERO), 1);
    assert_eq!(hits.get(), 1);

    // nothing changed
    assert_eq!(b.frame(Duration::from_millis(16)), 0);
    assert_eq!(hits.get(), 1);

    b.on_scroll(300.0);
    b.on_scroll(300.0);
    b.frame(Duration::from_millis(32));
    assert_eq!(hits.get(), 2);

    let frame = h.last_frame().unwrap();
    assert!((frame.progress - 0.3).abs() < 1e-12);
    assert_eq!(frame.pin, PinState::Pinned { offset: 300.0 });
    let rot: Vec<_> = frame.transforms().map(|t| t.rotation_z).collect();
    assert!((rot[0] + 3.0).abs() < 1e-9 && rot[1].abs() < 1e-9 && (rot[2] - 3.0).abs() < 1e-9);
}

#[test]
fn teardown_is_idempotent_and_silences_callbacks() {
    let mut b = binder();
    let h = b.bind_scroll_region(deck()).unwrap();
    let hits = counter(&h);
    b.on_scroll(500.0);
    b.frame(Duration::ZERO);
    assert!(h.pin().is_pinned());

    h.teardown();
    h.teardown();
    assert!(!h.is_live());
    assert_eq!(h.pin(), PinState::Inactive);
    assert_eq!(b.live_regions(), 0);

    b.on_scroll(600.0);
    assert_eq!(b.frame(Duration::from_millis(16)), 0);
    assert_eq!(hits.get(), 1);

    // late subscriptions are ignored
    h.on_update(|_| panic!("torn down region must not fire"));
    b.on_scroll(700.0);
    b.frame(Duration::from_millis(32));
}

#[test]
fn teardown_before_first_frame_is_fine() {
    let mut b = binder();
    let h = b.bind_scroll_region(deck()).unwrap();
    h.teardown();
    assert_eq!(b.frame(Duration::ZERO), 0);
    assert!(h.last_frame().is_none());
}

#[test]
fn dropping_the_handle_detaches_the_region() {
    let mut b = binder();
    {
        let _h = b.bind_scroll_region(deck()).unwrap();
        assert_eq!(b.live_regions(), 1);
    }
    assert_eq!(b.live_regions(), 0);
    assert_eq!(b.frame(Duration::ZERO), 0);
}

#[test]
fn callback_tearing_down_another_region_stops_its_delivery() {
    let mut b = binder();
    let first = b.bind_scroll_region(deck()).unwrap();
    let second = Rc::new(b.bind_scroll_region(deck()).unwrap());
    let second_hits = counter(&second);

    let victim = second.clone();
    first.on_update(move |_| victim.teardown());

    assert_eq!(b.frame(Duration::ZERO), 1);
    assert_eq!(second_hits.get(), 0);
    assert!(!second.is_live());
}

#[test]
fn callback_reconfiguring_a_later_region_is_applied_in_the_same_frame() {
    let mut b = binder();
    let first = b.bind_scroll_region(deck()).unwrap();
    let second = Rc::new(b.bind_scroll_region(deck()).unwrap());

    let target = second.clone();
    first.on_update(move |_| target.set_animate(false));

    b.on_scroll(300.0);
    assert_eq!(b.frame(Duration::ZERO), 2);
    let frame = second.last_frame().unwrap();
    assert!(!frame.animated);
    assert_eq!(frame.pin, PinState::Inactive);

    // nothing left over for the next frame
    assert_eq!(b.frame(Duration::ZERO), 0);
    assert!(!second.last_frame().unwrap().animated);
}

#[test]
fn set_animate_after_teardown_is_ignored() {
    let mut b = binder();
    let h = b.bind_scroll_region(deck()).unwrap();
    h.teardown();
    h.set_animate(false);
    assert_eq!(b.frame(Duration::ZERO), 0);
    assert!(h.last_frame().is_none());
    assert_eq!(h.pin(), PinState::Inactive);
}

#[test]
fn callback_can_tear_down_its_own_region() {
    let mut b = binder();
    let h = Rc::new(b.bind_scroll_region(deck()).unwrap());
    let hits = counter(&h);
    let me = Rc::downgrade(&h);
    h.on_update(move |_| {
        if let Some(h) = me.upgrade() {
            h.teardown();
        }
    });
    b.frame(Duration::ZERO);
    assert!(!h.is_live());
    assert_eq!(hits.get(), 1);
}

#[test]
fn resize_applies_after_debounce() {
    let mut b = binder();
    let _h = b.bind_scroll_region(deck()).unwrap();
    b.frame(Duration::ZERO);

    let small = Viewport::new(800.0, 600.0).unwrap();
    b.on_resize(small, Duration::from_millis(100));
    assert_eq!(b.frame(Duration::from_millis(200)), 0);
    assert_eq!(b.viewport(), vp());
    assert!(b.resize_pending());

    assert_eq!(b.frame(Duration::from_millis(350)), 1);
    assert_eq!(b.viewport(), small);
}

#[test]
fn set_animate_refreshes_the_region() {
    let mut b = binder();
    let h = b.bind_scroll_region(deck()).unwrap();
    b.on_scroll(100.0);
    b.frame(Duration::ZERO);
    assert!(h.last_frame().unwrap().animated);

    h.set_animate(false);
    assert_eq!(b.frame(Duration::from_millis(16)), 1);
    let frame = h.last_frame().unwrap();
    assert!(!frame.animated);
    assert_eq!(frame.pin, PinState::Inactive);
    assert!(frame.transforms().all(|t| t.opacity == 1.0 && t.scale == 1.0));
}

#[test]
fn active_change_is_edge_triggered() {
    let mut b = binder();
    let cfg = RegionConfig::new(
        "projects",
        ScrollRange::new(0.0, StartEdge::Top, RangeLength::Pixels(1000.0)),
        5,
        Effect::Spotlight(Spotlight::with_titles(TitleLayout::uniform(5, 100.0))),
    );
    let h = b.bind_scroll_region(cfg).unwrap();

    b.on_scroll(600.0);
    b.frame(Duration::ZERO);
    assert!(h.last_frame().unwrap().active_changed);

    b.on_scroll(601.0);
    b.frame(Duration::from_millis(16));
    let f = h.last_frame().unwrap();
    assert_eq!(f.scene.active, Some(2));
    assert!(!f.active_changed);
}

#[test]
fn non_finite_scroll_is_ignored() {
    let mut b = binder();
    let h = b.bind_scroll_region(
        RegionConfig::new(
            "services",
            ScrollRange::new(0.0, StartEdge::Top, RangeLength::Pixels(1000.0)),
            3,
            Effect::StickyStack(StickyStack::default()),
        ),
    )
    .unwrap();
    b.on_scroll(250.0);
    b.on_scroll(f64::NAN);
    b.frame(Duration::ZERO);
    assert_eq!(b.scroll_y(), 250.0);
    assert!((h.last_frame().unwrap().progress - 0.25).abs() < 1e-12);
}
