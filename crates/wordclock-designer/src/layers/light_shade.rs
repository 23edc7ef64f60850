use super::{LayerContext, LayerRenderer};
use crate::model::translated;
use crate::plan::{Geometry, LayerKind, ShapePlan, ShapeRole};
use crate::primitives::ShadeCell;
use wordclock_core::Result;

/// Honeycomb diffuser separating the lit cells
///
/// Columns are walked left to right and rows top to bottom; every cell
/// cuts only the edges no neighbour has cut before it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightShade;

impl LayerRenderer for LightShade {
    fn kind(&self) -> LayerKind {
        LayerKind::LightShade
    }

    fn render(&self, ctx: &LayerContext<'_>) -> Result<ShapePlan> {
        let placement = ctx.placement();
        let layout = ctx.layout;
        let incircle_radius = layout.size / 2.0;
        let mut plan = ctx.new_plan(self.kind());

        for column in 0..layout.columns {
            for row in 0..layout.rows {
                let center = placement.shade_cell_center(row, column);
                for cell in ShadeCell::for_cell(row, column, layout.rows) {
                    plan.cut(
                        ShapeRole::ShadeCell,
                        center,
                        Geometry::Path(translated(&cell.path(incircle_radius), center)),
                    );
                }
            }
        }

        Ok(plan)
    }
}
