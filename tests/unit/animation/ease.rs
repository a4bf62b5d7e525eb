use super::*;

#[test]
fn every_ease_pins_endpoints() {
    for ease in [
        Ease::Linear,
        Ease::SmoothStep,
        Ease::InOutQuad,
        Ease::OutQuad,
        Ease::BackOut,
        Ease::BackIn,
    ] {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn apply_clamps_input() {
    assert_eq!(Ease::SmoothStep.apply(-3.0), 0.0);
    assert_eq!(Ease::SmoothStep.apply(3.0), 1.0);
    assert_eq!(Ease::Linear.apply(f64::NAN), 0.0);
}

#[test]
fn smooth_step_variant_matches_free_function() {
    for i in 0..=20 {
        let t = i as f64 / 20.0;
        assert_eq!(Ease::SmoothStep.apply(t), smooth_step(t));
    }
}

#[test]
fn back_eases_overshoot_inside_the_range() {
    assert!(Ease::BackOut.apply(0.7) > 1.0);
    assert!(Ease::BackIn.apply(0.3) < 0.0);
    assert!((Ease::OutQuad.apply(0.5) - 0.75).abs() < 1e-12);
}
