use super::{inner_outline, pcb_holes, screw_holes, LayerContext, LayerRenderer};
use crate::model::translated;
use crate::plan::{Geometry, LayerKind, ShapePlan, ShapeRole};
use crate::primitives::led_footprint;
use wordclock_core::Result;

/// Board carrying the LEDs and their wiring
///
/// Anode rows are wired from the connector strip along the bottom, cathode
/// columns from the strip on the left.
#[derive(Debug, Clone, Copy, Default)]
pub struct LedCarrier;

impl LayerRenderer for LedCarrier {
    fn kind(&self) -> LayerKind {
        LayerKind::LedCarrier
    }

    fn render(&self, ctx: &LayerContext<'_>) -> Result<ShapePlan> {
        let placement = ctx.placement();
        let hw = &ctx.config.hardware;
        let mut plan = ctx.new_plan(self.kind());

        inner_outline(&mut plan, ctx.layout);

        let footprint = led_footprint(
            hw.led_pin_width,
            hw.led_pin_height,
            hw.led_pin_distance_x,
            hw.led_pin_distance_y,
        );
        for center in placement.led_centers() {
            plan.cut(
                ShapeRole::LedFootprint,
                center,
                Geometry::Path(translated(&footprint, center)),
            );
        }

        screw_holes(&mut plan, &placement);

        for row in 0..ctx.layout.rows {
            let connector = placement.anode_connector(row);
            let wire = placement.anode_wire(row);
            plan.cut(
                ShapeRole::ConnectorHole,
                connector,
                Geometry::circle(connector, hw.connector_diameter),
            );
            plan.cut(ShapeRole::WireHole, wire, Geometry::circle(wire, hw.wire_diameter));
        }
        for column in 0..ctx.layout.columns {
            let connector = placement.cathode_connector(column);
            let wire = placement.cathode_wire(column);
            plan.cut(
                ShapeRole::ConnectorHole,
                connector,
                Geometry::circle(connector, hw.connector_diameter),
            );
            plan.cut(ShapeRole::WireHole, wire, Geometry::circle(wire, hw.wire_diameter));
        }

        pcb_holes(&mut plan, &placement);

        Ok(plan)
    }
}
