use kurbo::{PathEl, Shape};

use super::*;

fn desktop() -> Viewport {
    Viewport::new(1440.0, 900.0).unwrap()
}

#[test]
fn spans_and_gutters_cover_the_full_circle() {
    for n in 1..=12 {
        let sectors = resolve_radial_geometry(n, 700.0).unwrap();
        assert_eq!(sectors.len(), n);
        let total: f64 = sectors.iter().map(|s| s.span() + 2.0 * 0.19).sum();
        assert!((total - 360.0).abs() < 1e-9, "n={n} total={total}");
    }
}

#[test]
fn sectors_start_at_twelve_o_clock() {
    let sectors = resolve_radial_geometry(6, 700.0).unwrap();
    assert!((sectors[0].start_angle - 0.19).abs() < 1e-12);
    assert!((sectors[0].end_angle - 59.81).abs() < 1e-9);
    assert!((sectors[5].end_angle - 359.81).abs() < 1e-9);

    let anchor = sectors[0].anchor;
    assert!((anchor.x - 448.0).abs() < 1e-6, "{anchor:?}");
    assert!((anchor.y - (350.0 - 196.0 * 60f64.to_radians().sin())).abs() < 1e-6);
}

#[test]
fn svg_path_has_two_arcs_and_large_flag_for_wide_sectors() {
    let six = resolve_radial_geometry(6, 700.0).unwrap();
    let d = six[0].svg_path();
    assert!(d.starts_with("M "));
    assert!(d.ends_with(" Z"));
    assert_eq!(d.matches(" A ").count(), 2);
    assert!(d.contains(" 0 0 1 "));
    assert!(d.contains(" 0 0 0 "));

    let one = resolve_radial_geometry(1, 700.0).unwrap();
    let d = one[0].svg_path();
    assert!(d.contains(" 0 1 1 "));
    assert!(d.contains(" 0 1 0 "));
}

#[test]
fn outline_stays_inside_the_annulus_bounds() {
    let sectors = resolve_radial_geometry(6, 700.0).unwrap();
    for s in &sectors {
        let path = s.to_bez_path();
        assert!(matches!(path.elements().first(), Some(PathEl::MoveTo(_))));
        assert!(matches!(path.elements().last(), Some(PathEl::ClosePath)));
        let bb = path.bounding_box();
        let r = s.outer_radius + 0.1;
        assert!(bb.x0 >= 350.0 - r && bb.x1 <= 350.0 + r, "{bb:?}");
        assert!(bb.y0 >= 350.0 - r && bb.y1 <= 350.0 + r, "{bb:?}");
    }
    // sector 0 hugs the top of the ring
    let top = sectors[0].to_bez_path().bounding_box();
    assert!((top.y0 - (350.0 - sectors[0].outer_radius)).abs() < 0.1);
}

#[test]
fn anchor_belongs_to_its_own_sector_only() {
    let sectors = resolve_radial_geometry(5, 480.0).unwrap();
    for s in &sectors {
        let owners: Vec<_> = sectors
            .iter()
            .filter(|o| o.contains(s.anchor))
            .map(|o| o.index)
            .collect();
        assert_eq!(owners, vec![s.index]);
    }
    assert!(!sectors[0].contains(sectors[0].center));
}

#[test]
fn invalid_geometry_is_rejected() {
    assert!(resolve_radial_geometry(0, 700.0).is_err());
    assert!(resolve_radial_geometry(6, 0.0).is_err());
    assert!(resolve_radial_geometry(6, f64::NAN).is_err());
    assert!(resolve_radial_geometry(1000, 700.0).is_err());
}

#[test]
fn menu_size_follows_the_breakpoint() {
    let cfg = RadialConfig::default();
    assert_eq!(cfg.menu_size(desktop()), 700.0);
    assert_eq!(cfg.menu_size(Viewport::new(800.0, 600.0).unwrap()), 480.0);
    assert!((cfg.menu_size(Viewport::new(400.0, 700.0).unwrap()) - 360.0).abs() < 1e-9);

    let layout = cfg.responsive(desktop());
    assert_eq!(layout.center(), Point::new(350.0, 350.0));
    assert!((layout.inner_radius - 56.0).abs() < 1e-9);
    assert!((layout.content_radius - 196.0).abs() < 1e-9);
    assert!(cfg.validate().is_ok());
}
