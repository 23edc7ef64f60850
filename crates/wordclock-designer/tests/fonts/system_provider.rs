//! Outlines from the installed system fonts.
//!
//! Hosts without a usable face skip these tests.

use wordclock_core::Error;
use wordclock_designer::model::path_bounds;
use wordclock_designer::{
    ClockDesign, Geometry, GlyphMetricsProvider, GlyphOutline, LayerKind, Placement, ShapeRole,
    SystemFontProvider,
};
use wordclock_settings::{ClockConfig, FontDescriptor};

const TOLERANCE: f64 = 0.01;

fn font() -> FontDescriptor {
    FontDescriptor {
        family: "DejaVu Sans".to_string(),
        size: 16.0,
        bold: false,
        italic: false,
    }
}

fn outline(font: &FontDescriptor, character: char) -> Option<GlyphOutline> {
    match SystemFontProvider.outline(font, character) {
        Ok(outline) => Some(outline),
        Err(err @ Error::Font(_)) | Err(err @ Error::MissingGlyph { .. }) => {
            eprintln!("skipping, no installed outline for '{}': {}", character, err);
            None
        }
        Err(err) => panic!("unexpected error for '{}': {}", character, err),
    }
}

#[test]
fn test_outline_sits_on_baseline() {
    let font = font();
    let Some(a) = outline(&font, 'A') else {
        return;
    };
    let (min_x, min_y, _, max_y) = path_bounds(a.path());

    assert!(min_x.abs() < TOLERANCE);
    assert!(max_y.abs() < TOLERANCE, "'A' bottom at {}", max_y);
    assert!(min_y < 0.0, "'A' top at {}", min_y);
    assert!(a.height() < font.size);
}

#[test]
fn test_descender_below_baseline() {
    let font = font();
    let Some(g) = outline(&font, 'g') else {
        return;
    };
    let (_, min_y, _, max_y) = path_bounds(g.path());

    assert!(max_y > 0.0, "'g' bottom at {}", max_y);
    assert!(min_y < 0.0);
}

#[test]
fn test_front_row_shares_baseline() {
    let font = font();
    if "AXgx".chars().any(|c| outline(&font, c).is_none()) {
        return;
    }

    let mut config = ClockConfig::default();
    config.font = font;
    config.text = vec!["AX".to_string(), "gx".to_string()];
    config.panel.width = 100.0;
    config.panel.height = 100.0;
    config.panel.border_x = 10.0;
    config.panel.border_y = 10.0;

    let design = ClockDesign::new(&config, &SystemFontProvider).unwrap();
    let placement = Placement::new(design.layout(), &config);
    let plans = design.render_all().unwrap();
    let front = plans.iter().find(|p| p.layer == LayerKind::Front).unwrap();

    let mut bottoms = Vec::new();
    for shape in front.with_role(|r| matches!(r, ShapeRole::Glyph(_))) {
        let ShapeRole::Glyph(character) = shape.role else {
            unreachable!();
        };
        let Geometry::Path(path) = &shape.geometry else {
            panic!("glyph is not a path");
        };
        let (_, min_y, _, max_y) = path_bounds(path);
        bottoms.push((character, min_y, max_y));
    }
    assert_eq!(bottoms.len(), 4);

    let row0 = placement.baseline(0);
    let row1 = placement.baseline(1);
    for (character, min_y, max_y) in bottoms {
        match character {
            'A' | 'X' => {
                assert!((max_y - row0).abs() < TOLERANCE, "'{}' bottom {}", character, max_y);
                assert!(min_y < row0);
            }
            'x' => assert!((max_y - row1).abs() < TOLERANCE, "'x' bottom {}", max_y),
            'g' => assert!(max_y > row1, "'g' bottom {}", max_y),
            other => panic!("unexpected glyph '{}'", other),
        }
    }
}
