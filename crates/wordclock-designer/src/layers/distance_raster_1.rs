use super::{led_holes, screw_holes, LayerContext, LayerRenderer};
use crate::model::Point;
use crate::plan::{Geometry, LayerKind, ShapePlan, ShapeRole};
use crate::primitives::ConnectorRoute;
use tracing::debug;
use wordclock_core::Result;

/// Spacer with the wiring channel
///
/// LED openings shrink by the light shade margin. The connector route
/// doubles as the sheet outline, so no separate frame is cut.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceRaster1;

impl LayerRenderer for DistanceRaster1 {
    fn kind(&self) -> LayerKind {
        LayerKind::DistanceRaster1
    }

    fn render(&self, ctx: &LayerContext<'_>) -> Result<ShapePlan> {
        let placement = ctx.placement();
        let mut plan = ctx.new_plan(self.kind());

        led_holes(
            &mut plan,
            &placement,
            ctx.layout.size - ctx.config.panel.light_shade_extra,
        );
        screw_holes(&mut plan, &placement);

        let route = ConnectorRoute::new(&placement);
        debug!(waypoints = route.waypoints().len(), "Connector route");
        plan.cut(
            ShapeRole::ConnectorRoute,
            Point::default(),
            Geometry::Path(route.to_path()),
        );

        Ok(plan)
    }
}
