use super::{inner_outline, led_holes, LayerContext, LayerRenderer};
use crate::model::Point;
use crate::plan::{Geometry, LayerKind, ShapePlan, ShapeRole};
use crate::primitives::polyline;
use wordclock_core::Result;

/// Holder for the diffuser with two fold-up flaps
///
/// The flap below the sheet is as wide as the inner frame; the flap to the
/// right reaches over the full panel height. Each flap is `2·depth` deep
/// and folds along its middle.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightShadeRaster;

impl LayerRenderer for LightShadeRaster {
    fn kind(&self) -> LayerKind {
        LayerKind::LightShadeRaster
    }

    fn render(&self, ctx: &LayerContext<'_>) -> Result<ShapePlan> {
        let placement = ctx.placement();
        let layout = ctx.layout;
        let mut plan = ctx.new_plan(self.kind());

        inner_outline(&mut plan, layout);
        led_holes(&mut plan, &placement, layout.size);

        let w = layout.inner_width;
        let h = layout.inner_height;
        let d = ctx.config.panel.depth;
        let right_h = h + 2.0 * ctx.config.panel.frame_width;

        let bottom = [
            Point::new(0.0, h),
            Point::new(0.0, h + 2.0 * d),
            Point::new(w, h + 2.0 * d),
            Point::new(w, h),
        ];
        plan.cut(
            ShapeRole::FoldTab,
            bottom[0],
            Geometry::Path(polyline(&bottom, false)),
        );
        plan.cut(
            ShapeRole::FoldLine,
            Point::new(0.0, h + d),
            Geometry::line(Point::new(0.0, h + d), Point::new(w, h + d)),
        );

        let right = [
            Point::new(w, 0.0),
            Point::new(w + 2.0 * d, 0.0),
            Point::new(w + 2.0 * d, right_h),
            Point::new(w, right_h),
        ];
        plan.cut(
            ShapeRole::FoldTab,
            right[0],
            Geometry::Path(polyline(&right, false)),
        );
        plan.cut(
            ShapeRole::FoldLine,
            Point::new(w + d, 0.0),
            Geometry::line(Point::new(w + d, 0.0), Point::new(w + d, right_h)),
        );

        Ok(plan)
    }
}
