use super::{inner_outline, led_holes, pcb_holes, screw_holes, LayerContext, LayerRenderer};
use crate::model::translated;
use crate::plan::{Geometry, LayerKind, ShapePlan, ShapeRole};
use crate::primitives::hexagon;
use wordclock_core::Result;

/// Spacer holding the frame screw nuts and the PCB screws
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceRaster2;

impl LayerRenderer for DistanceRaster2 {
    fn kind(&self) -> LayerKind {
        LayerKind::DistanceRaster2
    }

    fn render(&self, ctx: &LayerContext<'_>) -> Result<ShapePlan> {
        let placement = ctx.placement();
        let mut plan = ctx.new_plan(self.kind());

        inner_outline(&mut plan, ctx.layout);
        led_holes(&mut plan, &placement, ctx.layout.size);
        screw_holes(&mut plan, &placement);
        pcb_holes(&mut plan, &placement);

        let nut = hexagon(ctx.config.hardware.nut_size / 2.0);
        for center in placement.screw_centers() {
            plan.cut(
                ShapeRole::NutCutout,
                center,
                Geometry::Path(translated(&nut, center)),
            );
        }

        Ok(plan)
    }
}
