use super::*;

fn vp() -> Viewport {
    Viewport::new(1280.0, 800.0).unwrap()
}

#[test]
fn last_section_is_never_pinned() {
    let fx = StickyStack::default();
    for total in 1..=8 {
        let last = Entity::new(total - 1, total).unwrap();
        for i in 0..=20 {
            let p = i as f64 / 20.0;
            let f = fx.resolve_entity(p, last, vp());
            assert!(!f.pinned, "total={total} p={p}");
            assert_eq!(f.transform.scale, 1.0);
            assert_eq!(f.overlay_opacity, 0.0);
        }
    }
}

#[test]
fn covered_section_shrinks_tilts_and_dims() {
    let fx = StickyStack::default();
    let e0 = Entity::new(0, 3).unwrap();
    let f = fx.resolve_entity(0.25, e0, vp());
    assert!(f.pinned);
    assert!((f.transform.scale - 0.875).abs() < 1e-12);
    assert!((f.transform.rotation_z - 2.5).abs() < 1e-12);
    assert!((f.overlay_opacity - 0.5).abs() < 1e-12);

    let e1 = Entity::new(1, 3).unwrap();
    let f = fx.resolve_entity(0.75, e1, vp());
    assert!((f.transform.rotation_z + 2.5).abs() < 1e-12);
}

#[test]
fn sections_pin_only_once_reached() {
    let fx = StickyStack::default();
    let e1 = Entity::new(1, 3).unwrap();
    assert!(!fx.resolve_entity(0.25, e1, vp()).pinned);
    assert!(fx.resolve_entity(0.5, e1, vp()).pinned);
    assert!(!fx.resolve_entity(1.0, e1, vp()).pinned);
}

#[test]
fn fully_covered_section_keeps_final_pose() {
    let fx = StickyStack::default();
    let e0 = Entity::new(0, 3).unwrap();
    let f = fx.resolve_entity(0.9, e0, vp());
    assert!((f.transform.scale - 0.75).abs() < 1e-12);
    assert!((f.overlay_opacity - 1.0).abs() < 1e-12);
}

#[test]
fn decay_of_one_or_more_is_rejected() {
    let fx = StickyStack {
        scale_decay: 1.0,
        ..StickyStack::default()
    };
    assert!(fx.validate(3).is_err());
    assert!(StickyStack::default().validate(1).is_ok());
}
