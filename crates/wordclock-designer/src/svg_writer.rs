//! SVG output for shape plans.
//!
//! Documents are sized in millimeters with a matching `viewBox`, so one user
//! unit is one millimeter on the laser bed.

use crate::plan::{Geometry, Paint, PlannedShape, ShapePlan, STROKE_WIDTH};
use lyon::path::Path as LyonPath;
use std::path::{Path, PathBuf};
use tracing::debug;
use wordclock_core::{Error, Result};

/// Persists one plan as a vector document
pub trait DocumentWriter {
    fn write(&self, plan: &ShapePlan, path: &Path) -> Result<()>;
}

/// Writes plain SVG 1.1
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgWriter;

impl SvgWriter {
    pub fn new() -> Self {
        Self
    }

    /// The whole document as a string
    pub fn render(&self, plan: &ShapePlan) -> String {
        let mut svg = String::new();
        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{w}mm\" height=\"{h}mm\" viewBox=\"0 0 {w} {h}\">\n",
            w = plan.width,
            h = plan.height
        ));
        for shape in plan.shapes() {
            svg.push_str("  ");
            svg.push_str(&element(shape));
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl DocumentWriter for SvgWriter {
    fn write(&self, plan: &ShapePlan, path: &Path) -> Result<()> {
        let document = self.render(plan);
        std::fs::write(path, document).map_err(|source| Error::OutputWrite {
            path: PathBuf::from(path),
            source,
        })?;
        debug!(layer = %plan.layer, path = %path.display(), "Wrote SVG");
        Ok(())
    }
}

fn paint_attributes(paint: &Paint) -> String {
    match paint {
        Paint::Stroke(color) => format!(
            "fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"",
            color.to_hex(),
            STROKE_WIDTH
        ),
        Paint::Fill(color) => format!("fill=\"{}\" stroke=\"none\"", color.to_hex()),
    }
}

fn element(shape: &PlannedShape) -> String {
    let paint = paint_attributes(&shape.paint);
    match &shape.geometry {
        Geometry::Rect {
            origin,
            width,
            height,
        } => format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {} />",
            origin.x, origin.y, width, height, paint
        ),
        Geometry::Circle { center, radius } => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {} />",
            center.x, center.y, radius, paint
        ),
        Geometry::Line { from, to } => format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {} />",
            from.x, from.y, to.x, to.y, paint
        ),
        Geometry::Path(path) => format!("<path d=\"{}\" {} />", path_data(path), paint),
    }
}

/// SVG path data using absolute `M`, `L`, `Q`, `C` and `Z` commands
pub fn path_data(path: &LyonPath) -> String {
    let mut svg = String::new();
    for event in path.iter() {
        match event {
            lyon::path::Event::Begin { at } => svg.push_str(&format!("M {} {} ", at.x, at.y)),
            lyon::path::Event::Line { to, .. } => svg.push_str(&format!("L {} {} ", to.x, to.y)),
            lyon::path::Event::Quadratic { ctrl, to, .. } => {
                svg.push_str(&format!("Q {} {} {} {} ", ctrl.x, ctrl.y, to.x, to.y))
            }
            lyon::path::Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => svg.push_str(&format!(
                "C {} {} {} {} {} {} ",
                ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            )),
            lyon::path::Event::End { close, .. } => {
                if close {
                    svg.push_str("Z ");
                }
            }
        }
    }
    svg.trim_end().to_string()
}
