//! The six layer renderers.
//!
//! Each renderer turns the shared layout into a [`ShapePlan`] for one cut
//! sheet. Renderers only read the context, so they can run in any order.

mod distance_raster_1;
mod distance_raster_2;
mod front;
mod led_carrier;
mod light_shade;
mod light_shade_raster;

pub use distance_raster_1::DistanceRaster1;
pub use distance_raster_2::DistanceRaster2;
pub use front::Front;
pub use led_carrier::LedCarrier;
pub use light_shade::LightShade;
pub use light_shade_raster::LightShadeRaster;

use crate::glyphs::GlyphSet;
use crate::layout::DerivedLayout;
use crate::model::{translated, Point};
use crate::placement::Placement;
use crate::plan::{Geometry, LayerKind, ShapePlan, ShapeRole};
use crate::primitives::hexagon;
use tracing::debug;
use wordclock_core::{Result, TextGrid};
use wordclock_settings::ClockConfig;

/// Everything a renderer may read
#[derive(Debug, Clone, Copy)]
pub struct LayerContext<'a> {
    pub layout: &'a DerivedLayout,
    pub config: &'a ClockConfig,
    pub grid: &'a TextGrid,
    pub glyphs: &'a GlyphSet,
}

impl<'a> LayerContext<'a> {
    pub fn placement(&self) -> Placement<'a> {
        Placement::new(self.layout, self.config)
    }

    /// Empty plan on the panel-sized page
    pub fn new_plan(&self, layer: LayerKind) -> ShapePlan {
        ShapePlan::new(layer, self.config.panel.width, self.config.panel.height)
    }
}

/// One cut sheet
pub trait LayerRenderer {
    fn kind(&self) -> LayerKind;

    fn render(&self, ctx: &LayerContext<'_>) -> Result<ShapePlan>;
}

/// Renderer for `kind`
pub fn renderer_for(kind: LayerKind) -> Box<dyn LayerRenderer> {
    match kind {
        LayerKind::Front => Box::new(Front),
        LayerKind::LightShade => Box::new(LightShade),
        LayerKind::LightShadeRaster => Box::new(LightShadeRaster),
        LayerKind::DistanceRaster1 => Box::new(DistanceRaster1),
        LayerKind::DistanceRaster2 => Box::new(DistanceRaster2),
        LayerKind::LedCarrier => Box::new(LedCarrier),
    }
}

/// Render all six sheets in [`LayerKind::ALL`] order.
pub fn render_all(ctx: &LayerContext<'_>) -> Result<Vec<ShapePlan>> {
    let mut plans = Vec::with_capacity(LayerKind::ALL.len());
    for kind in LayerKind::ALL {
        let plan = renderer_for(kind).render(ctx)?;
        debug!(layer = %kind, shapes = plan.len(), "Rendered layer");
        plans.push(plan);
    }
    Ok(plans)
}

// Pieces several sheets share

/// Inner frame outline
fn inner_outline(plan: &mut ShapePlan, layout: &DerivedLayout) {
    plan.cut(
        ShapeRole::Outline,
        Point::default(),
        Geometry::rect(Point::default(), layout.inner_width, layout.inner_height),
    );
}

/// One hexagonal LED opening of incircle diameter `diameter` per cell
fn led_holes(plan: &mut ShapePlan, placement: &Placement<'_>, diameter: f64) {
    let hole = hexagon(diameter / 2.0);
    for center in placement.led_centers() {
        plan.cut(
            ShapeRole::LedHole,
            center,
            Geometry::Path(translated(&hole, center)),
        );
    }
}

fn screw_holes(plan: &mut ShapePlan, placement: &Placement<'_>) {
    let diameter = placement.config().hardware.screw_diameter;
    for center in placement.screw_centers() {
        plan.cut(ShapeRole::ScrewHole, center, Geometry::circle(center, diameter));
    }
}

fn pcb_holes(plan: &mut ShapePlan, placement: &Placement<'_>) {
    let diameter = placement.config().hardware.screw_diameter;
    for center in placement.pcb_screw_centers() {
        plan.cut(ShapeRole::PcbHole, center, Geometry::circle(center, diameter));
    }
}
