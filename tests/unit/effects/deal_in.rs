use super::*;
use crate::animation::phase::WindowState;

fn vp() -> Viewport {
    Viewport::new(1280.0, 800.0).unwrap()
}

#[test]
fn cards_start_below_their_slot() {
    let fx = DealIn::default();
    for e in Entity::all(4) {
        let f = fx.resolve_entity(0.0, e, vp());
        assert_eq!(f.transform.translate_y_pct, 125.0);
        assert_eq!(f.inner.unwrap().scale, 0.0);
    }
    assert_eq!(fx.entrance.window(0).sample(0.0).state, WindowState::Active);
    assert_eq!(fx.entrance.window(2).sample(0.0).state, WindowState::Before);
}

#[test]
fn letter_waits_for_the_back_part_of_the_window() {
    let fx = DealIn::default();
    assert_eq!(fx.letter_scale(0.0), 0.0);
    assert_eq!(fx.letter_scale(0.4), 0.0);
    assert!((fx.letter_scale(0.7) - 0.5).abs() < 1e-12);
    assert!((fx.letter_scale(1.0) - 1.0).abs() < 1e-12);
}

#[test]
fn later_cards_trail_by_the_stagger_step() {
    let fx = DealIn::default();
    let e0 = Entity::new(0, 3).unwrap();
    let e1 = Entity::new(1, 3).unwrap();
    let a = fx.resolve_entity(0.35, e0, vp()).transform.translate_y_pct;
    let b = fx.resolve_entity(0.5, e1, vp()).transform.translate_y_pct;
    assert!((a - 62.5).abs() < 1e-9);
    assert!((a - b).abs() < 1e-9);
}

#[test]
fn cards_within_the_region_land_by_the_end() {
    let fx = DealIn::default();
    for e in Entity::all(3) {
        let f = fx.resolve_entity(1.0, e, vp());
        assert!(f.transform.translate_y_pct.abs() < 1e-9);
        assert!((f.inner.unwrap().scale - 1.0).abs() < 1e-9);
        assert_eq!(f.transform.z_index, e.index as i32);
    }
}

#[test]
fn invalid_params_are_rejected() {
    let bad_delay = DealIn {
        letter_delay: 1.0,
        ..DealIn::default()
    };
    assert!(bad_delay.validate(3).is_err());

    let empty = DealIn {
        entrance: Stagger::new(0.0, 0.15, 0.0),
        ..DealIn::default()
    };
    assert!(empty.validate(3).is_err());
    assert!(DealIn::default().validate(6).is_ok());
}
