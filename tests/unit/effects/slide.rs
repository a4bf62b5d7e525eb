use super::*;

fn vp() -> Viewport {
    Viewport::new(1280.0, 800.0).unwrap()
}

#[test]
fn cards_start_offset_to_the_right_and_tilted() {
    let fx = SlideTogether::default();
    let offsets: Vec<_> = Entity::all(3)
        .map(|e| fx.resolve_entity(0.0, e, vp()).transform)
        .collect();
    assert_eq!(
        offsets.iter().map(|t| t.translate_x_pct).collect::<Vec<_>>(),
        vec![300.0, 200.0, 100.0]
    );
    for t in &offsets {
        assert_eq!(t.rotation_z, 20.0);
        assert_eq!(t.scale, 0.75);
    }
}

#[test]
fn slide_finishes_after_its_staggered_window() {
    let fx = SlideTogether::default();
    for e in Entity::all(3) {
        let done = 0.4 + 0.075 * e.index as f64 + 0.01;
        let t = fx.resolve_entity(done, e, vp()).transform;
        assert!(t.translate_x_pct.abs() < 1e-9);
        assert!(t.rotation_z.abs() < 1e-9);
    }
}

#[test]
fn scale_holds_until_its_own_window_then_reaches_full_size() {
    let fx = SlideTogether::default();
    for e in Entity::all(3) {
        let start = 0.4 + 0.12 * e.index as f64;
        let before = fx.resolve_entity(start - 0.01, e, vp()).transform;
        assert_eq!(before.scale, 0.75);
        let end = fx.resolve_entity(1.0, e, vp()).transform;
        assert!((end.scale - 1.0).abs() < 1e-9);
    }
}

#[test]
fn scale_window_never_runs_backwards() {
    let fx = SlideTogether::default();
    let w = fx.scale_window(8);
    assert!(w.start > 1.0);
    assert_eq!(w.len, 0.0);
}

#[test]
fn rejects_non_positive_scale_from() {
    let fx = SlideTogether {
        scale_from: 0.0,
        ..SlideTogether::default()
    };
    assert!(fx.validate(3).is_err());
}
