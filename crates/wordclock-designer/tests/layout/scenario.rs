use crate::common::{approx, reference_config, small_config, BoxProvider};
use wordclock_designer::model::path_bounds;
use wordclock_designer::{ClockDesign, Geometry, LayerKind, ShapeRole};

#[test]
fn test_two_by_two_pitch() {
    let config = small_config();
    let design = ClockDesign::new(&config, &BoxProvider::new(8.0, 10.0)).unwrap();
    let layout = design.layout();

    assert_eq!(layout.rows, 2);
    assert_eq!(layout.columns, 2);
    assert_eq!(layout.factor_x, 80.0 - 4.0 - 4.0);
    assert_eq!(layout.factor_y, 10.0 + (80.0 - 2.0 * 10.0));
    assert_eq!(layout.inner_width, 94.0);
}

#[test]
fn test_two_by_two_front_centers_glyphs() {
    let config = small_config();
    let design = ClockDesign::new(&config, &BoxProvider::new(8.0, 10.0)).unwrap();
    let plans = design.render_all().unwrap();
    let front = plans.iter().find(|p| p.layer == LayerKind::Front).unwrap();

    assert_eq!(front.glyph_count(), 4);

    let layout = design.layout();
    let mut centers = Vec::new();
    for shape in front.with_role(|r| matches!(r, ShapeRole::Glyph(_))) {
        let Geometry::Path(path) = &shape.geometry else {
            panic!("glyph is not a path");
        };
        let (min_x, min_y, max_x, max_y) = path_bounds(path);
        centers.push(((min_x + max_x) / 2.0, max_y));
        assert!(approx(max_y - min_y, 10.0));
    }

    let col_center = |j: f64| 10.0 + 4.0 + j * layout.factor_x;
    let baseline = |i: f64| 10.0 + 10.0 + i * layout.factor_y;
    let expected = [
        (col_center(0.0), baseline(0.0)),
        (col_center(1.0), baseline(0.0)),
        (col_center(0.0), baseline(1.0)),
        (col_center(1.0), baseline(1.0)),
    ];
    for (got, want) in centers.iter().zip(expected) {
        assert!(approx(got.0, want.0), "{got:?} vs {want:?}");
        assert!(approx(got.1, want.1), "{got:?} vs {want:?}");
    }
}

#[test]
fn test_rejects_single_row() {
    let mut config = small_config();
    config.text = vec!["AAAA".to_string()];
    let err = ClockDesign::new(&config, &BoxProvider::new(8.0, 10.0)).unwrap_err();
    assert!(err.is_config_error());
}

#[test]
fn test_rejects_single_column() {
    let mut config = small_config();
    config.text = vec!["A".to_string(), "A".to_string()];
    let err = ClockDesign::new(&config, &BoxProvider::new(8.0, 10.0)).unwrap_err();
    assert!(err.is_config_error());
}

#[test]
fn test_missing_glyph_aborts_before_layout() {
    let config = reference_config();
    let provider = BoxProvider::new(8.0, 10.0).without('Ü');
    let err = ClockDesign::new(&config, &provider).unwrap_err();
    assert!(err.is_missing_glyph());
}

#[test]
fn test_reference_clock_layout() {
    let config = reference_config();
    let design = ClockDesign::new(&config, &BoxProvider::new(12.0, 14.0)).unwrap();
    let layout = design.layout();
    assert_eq!(layout.rows, 9);
    assert_eq!(layout.columns, 11);
    assert_eq!(layout.factor_x, (300.0 - 70.0 - 12.0) / 10.0);
    assert_eq!(layout.size, 18.0);
}
