use super::{LayerContext, LayerRenderer};
use crate::model::Point;
use crate::plan::{
    Geometry, LayerKind, Paint, ShapePlan, ShapeRole, COLOR_BACKGROUND, COLOR_CUT, COLOR_GLYPHS,
};
use wordclock_core::Result;

/// Faceplate with the clock wording
///
/// In fill mode the background is filled black and glyphs white for
/// engraving; otherwise outline and glyphs are cut.
#[derive(Debug, Clone, Copy, Default)]
pub struct Front;

impl LayerRenderer for Front {
    fn kind(&self) -> LayerKind {
        LayerKind::Front
    }

    fn render(&self, ctx: &LayerContext<'_>) -> Result<ShapePlan> {
        let placement = ctx.placement();
        let panel = &ctx.config.panel;
        let mut plan = ctx.new_plan(self.kind());

        let (frame_paint, glyph_paint, frame_role) = if ctx.config.output.fill {
            (
                Paint::Fill(COLOR_BACKGROUND),
                Paint::Fill(COLOR_GLYPHS),
                ShapeRole::Background,
            )
        } else {
            (
                Paint::Stroke(COLOR_CUT),
                Paint::Stroke(COLOR_CUT),
                ShapeRole::Outline,
            )
        };

        plan.push(
            frame_role,
            Point::default(),
            Geometry::rect(Point::default(), panel.width, panel.height),
            frame_paint,
        );

        for (row, column, character) in ctx.grid.cells() {
            let outline = ctx.glyphs.get(character)?;
            let origin = placement.glyph_origin(row, column, outline.width());
            plan.push(
                ShapeRole::Glyph(character),
                origin,
                Geometry::Path(outline.placed_at(origin)),
                glyph_paint,
            );
        }

        Ok(plan)
    }
}
