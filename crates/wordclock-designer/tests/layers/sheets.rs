use crate::common::{approx, reference_config, BoxProvider};
use wordclock_designer::model::path_bounds;
use wordclock_designer::{ClockDesign, Geometry, LayerKind, ShapePlan, ShapeRole};
use wordclock_settings::ClockConfig;

fn render(config: &ClockConfig, kind: LayerKind) -> ShapePlan {
    let design = ClockDesign::new(config, &BoxProvider::new(12.0, 14.0)).unwrap();
    design
        .render_all()
        .unwrap()
        .into_iter()
        .find(|p| p.layer == kind)
        .unwrap()
}

fn path_width(plan: &ShapePlan, role: ShapeRole) -> f64 {
    let shape = plan.with_role(move |r| r == role).next().unwrap();
    match &shape.geometry {
        Geometry::Path(path) => {
            let (min_x, _, max_x, _) = path_bounds(path);
            max_x - min_x
        }
        other => panic!("unexpected geometry {other:?}"),
    }
}

#[test]
fn test_all_sheets_use_panel_page() {
    let config = reference_config();
    let design = ClockDesign::new(&config, &BoxProvider::new(12.0, 14.0)).unwrap();
    let plans = design.render_all().unwrap();
    let kinds: Vec<LayerKind> = plans.iter().map(|p| p.layer).collect();
    assert_eq!(kinds, LayerKind::ALL.to_vec());
    for plan in &plans {
        assert_eq!(plan.width, 300.0);
        assert_eq!(plan.height, 300.0);
    }
}

#[test]
fn test_front_sheet() {
    let plan = render(&reference_config(), LayerKind::Front);
    assert_eq!(plan.count(ShapeRole::Outline), 1);
    assert_eq!(plan.glyph_count(), 99);
}

#[test]
fn test_light_shade_cells() {
    let plan = render(&reference_config(), LayerKind::LightShade);
    // six even columns of nine cells, five odd columns of nine top edges plus a lower rim each
    assert_eq!(plan.count(ShapeRole::ShadeCell), 6 * 9 + 5 * 9 + 5);
}

#[test]
fn test_light_shade_raster_flaps() {
    let config = reference_config();
    let plan = render(&config, LayerKind::LightShadeRaster);
    assert_eq!(plan.count(ShapeRole::Outline), 1);
    assert_eq!(plan.count(ShapeRole::LedHole), 99);
    assert_eq!(plan.count(ShapeRole::FoldTab), 2);
    assert_eq!(plan.count(ShapeRole::FoldLine), 2);

    let fold_lines = plan.anchors(ShapeRole::FoldLine);
    assert!(approx(fold_lines[0].y, 294.0 + config.panel.depth));
    assert!(approx(fold_lines[1].x, 294.0 + config.panel.depth));
}

#[test]
fn test_distance_raster_1_shrinks_led_holes() {
    let config = reference_config();
    let dr1 = render(&config, LayerKind::DistanceRaster1);
    let raster = render(&config, LayerKind::LightShadeRaster);

    assert_eq!(dr1.count(ShapeRole::Outline), 0);
    assert_eq!(dr1.count(ShapeRole::ConnectorRoute), 1);
    assert_eq!(dr1.count(ShapeRole::ScrewHole), 8);
    assert_eq!(dr1.count(ShapeRole::LedHole), 99);

    // flat-topped hexagon width is 4r/√3
    let shrink = 2.0 * config.panel.light_shade_extra / 3f64.sqrt();
    let diff = path_width(&raster, ShapeRole::LedHole) - path_width(&dr1, ShapeRole::LedHole);
    assert!((diff - shrink).abs() < 1e-3);
}

#[test]
fn test_distance_raster_2_holes() {
    let plan = render(&reference_config(), LayerKind::DistanceRaster2);
    assert_eq!(plan.count(ShapeRole::Outline), 1);
    assert_eq!(plan.count(ShapeRole::LedHole), 99);
    assert_eq!(plan.count(ShapeRole::ScrewHole), 8);
    assert_eq!(plan.count(ShapeRole::NutCutout), 8);
    assert_eq!(plan.count(ShapeRole::PcbHole), 3);
}

#[test]
fn test_led_carrier_holes() {
    let config = reference_config();
    let plan = render(&config, LayerKind::LedCarrier);
    assert_eq!(plan.count(ShapeRole::LedFootprint), 99);
    assert_eq!(plan.count(ShapeRole::ScrewHole), 8);
    assert_eq!(plan.count(ShapeRole::PcbHole), 3);
    assert_eq!(plan.count(ShapeRole::ConnectorHole), 9 + 11);
    assert_eq!(plan.count(ShapeRole::WireHole), 9 + 11);

    let hw = &config.hardware;
    let connectors = plan.anchors(ShapeRole::ConnectorHole);
    // anode pins run along the bottom strip at connector pitch
    assert!(approx(connectors[1].x - connectors[0].x, hw.connector_distance));
    assert!(approx(connectors[0].y, 294.0 - hw.anodes_connector_offset_y));
    // cathode pins climb the left strip
    assert!(approx(connectors[9].x, hw.cathodes_connector_offset_x));
    assert!(approx(connectors[9].y - connectors[10].y, hw.connector_distance));

    let wires = plan.anchors(ShapeRole::WireHole);
    let leds = plan.anchors(ShapeRole::LedFootprint);
    assert!(approx(wires[0].y, leds[0].y + hw.led_pin_distance_y / 2.0));
    assert!(approx(wires[9].x, leds[10].x + hw.led_pin_distance_x / 2.0));
}
