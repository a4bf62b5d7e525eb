use super::*;

fn vp() -> Viewport {
    Viewport::new(1440.0, 900.0).unwrap()
}

fn five() -> Spotlight {
    Spotlight::with_titles(TitleLayout::uniform(5, 100.0))
}

#[test]
fn phases_follow_the_region_split() {
    let t = five().phase_table().unwrap();
    assert_eq!(t.resolve(0.1).kind, SpotlightPhase::Intro);
    assert_eq!(t.resolve(0.22).kind, SpotlightPhase::Snap);
    assert_eq!(t.resolve(0.5).kind, SpotlightPhase::Scrub);
    assert_eq!(t.resolve(0.97).kind, SpotlightPhase::Outro);
}

#[test]
fn switch_progress_is_held_outside_the_scrub() {
    let fx = five();
    assert_eq!(fx.switch_progress(0.1), 0.0);
    assert_eq!(fx.switch_progress(0.25), 0.0);
    assert!((fx.switch_progress(0.6) - 0.5).abs() < 1e-12);
    assert_eq!(fx.switch_progress(0.99), 1.0);
}

#[test]
fn title_list_travels_from_below_to_above() {
    let fx = five();
    assert_eq!(fx.title_list_y(0.0, vp()), 900.0);
    assert_eq!(fx.title_list_y(1.0, vp()), -500.0);
}

#[test]
fn nearest_title_tracks_the_viewport_center() {
    let fx = five();
    assert_eq!(fx.nearest_title(900.0, vp()), Some(0));
    assert_eq!(fx.nearest_title(200.0, vp()), Some(2));
    assert_eq!(fx.nearest_title(-500.0, vp()), Some(4));
    // centers 150 and 250 are equally far from 200
    assert_eq!(fx.nearest_title(0.0, Viewport::new(1440.0, 400.0).unwrap()), Some(1));
    assert_eq!(Spotlight::default().nearest_title(0.0, vp()), None);
}

#[test]
fn active_title_is_highlighted_and_others_dimmed() {
    let fx = five();
    let frame = fx.resolve_frame(0.6, 5, vp());
    assert_eq!(frame.scene.active, Some(2));
    for e in &frame.entities {
        let title = e.inner.unwrap();
        if e.index == 2 {
            assert!(e.highlighted);
            assert_eq!(title.opacity, 1.0);
        } else {
            assert!(!e.highlighted);
            assert_eq!(title.opacity, 0.25);
        }
    }
    let list = frame.scene.part(SceneRole::TitleList).unwrap();
    assert!((list.translate_y - 200.0).abs() < 1e-9);
}

#[test]
fn images_follow_the_arc_inside_their_window() {
    let fx = five();
    // switch 0.15 puts image 0 halfway along its window
    let p = 0.25 + 0.15 * 0.7;
    let img = fx.resolve_entity(p, Entity::new(0, 5).unwrap(), vp()).transform;
    assert!((img.translate_x - 362.0).abs() < 1e-6, "{}", img.translate_x);
    assert!((img.translate_y - 375.0).abs() < 1e-6, "{}", img.translate_y);
    assert_eq!(img.opacity, 1.0);

    // image 4 has not started yet
    let later = fx.resolve_entity(p, Entity::new(4, 5).unwrap(), vp()).transform;
    assert_eq!(later.opacity, 0.0);
}

#[test]
fn images_are_hidden_outside_the_scrub() {
    let fx = five();
    for p in [0.0, 0.1, 0.22, 0.97, 1.0] {
        for e in Entity::all(5) {
            assert_eq!(fx.resolve_entity(p, e, vp()).transform.opacity, 0.0, "p={p}");
        }
    }
}

#[test]
fn intro_parts_texts_and_settles_the_backdrop() {
    let fx = five();
    let scene = fx.resolve_scene(0.1, 5, vp());
    let lead = scene.part(SceneRole::IntroLeading).unwrap();
    let trail = scene.part(SceneRole::IntroTrailing).unwrap();
    assert!((lead.translate_x + 432.0).abs() < 1e-9);
    assert!((trail.translate_x - 432.0).abs() < 1e-9);
    let inner = scene.part(SceneRole::BackdropImage).unwrap();
    assert!((inner.scale - 1.25).abs() < 1e-9);
    assert_eq!(scene.part(SceneRole::Header).unwrap().opacity, 0.0);

    let scrub = fx.resolve_scene(0.5, 5, vp());
    assert_eq!(scrub.part(SceneRole::Header).unwrap().opacity, 1.0);
    assert_eq!(scrub.part(SceneRole::Backdrop).unwrap().scale, 1.0);
    assert_eq!(scrub.part(SceneRole::IntroLeading).unwrap().opacity, 0.0);
}

#[test]
fn title_count_must_match_entities() {
    assert!(five().validate(5).is_ok());
    assert!(five().validate(4).is_err());
    let squashed = Spotlight {
        snap_end: 0.1,
        ..five()
    };
    assert!(squashed.validate(5).is_err());
}
