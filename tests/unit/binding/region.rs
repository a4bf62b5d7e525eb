use super::*;
use crate::effects::{StackFlip, StickyStack};

fn vp() -> Viewport {
    Viewport::new(1440.0, 900.0).unwrap()
}

fn range() -> ScrollRange {
    ScrollRange::new(1000.0, StartEdge::Top, RangeLength::ViewportHeights(2.0))
}

#[test]
fn progress_is_clamped_over_the_range() {
    let r = range();
    assert_eq!(r.progress(0.0, vp()), 0.0);
    assert_eq!(r.progress(1000.0, vp()), 0.0);
    assert!((r.progress(1900.0, vp()) - 0.5).abs() < 1e-12);
    assert_eq!(r.progress(2800.0, vp()), 1.0);
    assert_eq!(r.progress(9000.0, vp()), 1.0);
}

#[test]
fn bottom_edge_starts_one_viewport_earlier() {
    let r = ScrollRange::new(1000.0, StartEdge::Bottom, RangeLength::Pixels(450.0));
    assert_eq!(r.start(vp()), 100.0);
    assert!((r.progress(325.0, vp()) - 0.5).abs() < 1e-12);
}

#[test]
fn pin_offset_is_continuous_at_release() {
    let r = range();
    assert_eq!(r.pin_state(999.0, vp()), PinState::Before);
    assert_eq!(r.pin_state(1000.0, vp()), PinState::Pinned { offset: 0.0 });
    let just_before = r.pin_state(2799.999, vp()).offset();
    let at_end = r.pin_state(2800.0, vp());
    assert_eq!(at_end, PinState::After { offset: 1800.0 });
    assert!((at_end.offset() - just_before).abs() < 1e-2);
    assert_eq!(r.pin_state(5000.0, vp()).offset(), 1800.0);
}

#[test]
fn invalid_ranges_and_counts_are_rejected() {
    let zero = ScrollRange::new(0.0, StartEdge::Top, RangeLength::Pixels(0.0));
    assert!(zero.validate().is_err());
    let nan = ScrollRange::new(f64::NAN, StartEdge::Top, RangeLength::Pixels(10.0));
    assert!(nan.validate().is_err());

    let cfg = RegionConfig::new("deck", range(), 0, Effect::StackFlip(StackFlip::default()));
    assert!(cfg.validate().is_err());
}

#[test]
fn motion_disabled_yields_resting_layout_without_pin() {
    let cfg = RegionConfig::new("cards", range(), 3, Effect::StickyStack(StickyStack::default()))
        .pinned(true)
        .animate(false);
    let frame = cfg.resolve(RegionId(0), 1900.0, vp());
    assert!(!frame.animated);
    assert_eq!(frame.pin, PinState::Inactive);
    assert!((frame.progress - 0.5).abs() < 1e-12);
    assert_eq!(frame.entities, EffectFrame::resting(3).entities);
}

#[test]
fn pinned_region_reports_pin_state() {
    let cfg = RegionConfig::new("cards", range(), 3, Effect::StickyStack(StickyStack::default()))
        .pinned(true);
    let frame = cfg.resolve(RegionId(7), 1900.0, vp());
    assert!(frame.pin.is_pinned());
    assert_eq!(frame.region.to_string(), "region#7");
    assert_eq!(frame.transforms().count(), 3);
}

#[test]
fn region_config_reads_from_json() {
    let cfg: RegionConfig = serde_json::from_str(
        r#"{
            "label": "services",
            "range": {"element_top": 1200, "length": {"unit": "viewport_heights", "value": 3}},
            "pinned": true,
            "entity_count": 4,
            "effect": {"kind": "sticky_stack", "params": {}}
        }"#,
    )
    .unwrap();
    assert!(cfg.animate);
    assert_eq!(cfg.range.start_edge, StartEdge::Top);
    assert_eq!(cfg.range.length, RangeLength::ViewportHeights(3.0));
    assert!(cfg.validate().is_ok());
}
