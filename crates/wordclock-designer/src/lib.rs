//! # Word Clock Designer
//!
//! Lays out the six laser-cut sheets of a word clock from one set of derived
//! measurements, so that glyphs, diffuser cells, LED openings and screw holes
//! line up when the sheets are stacked.
//!
//! ## Core Components
//!
//! - **Glyphs**: character outlines from system fonts (fontdb + rusttype)
//! - **Layout**: grid pitch, glyph extents and cell size derived once per run
//! - **Placement**: named offsets (LED centers, screws, connector pins)
//! - **Primitives**: hexagons, hexagon fractions, LED footprints, the connector route
//! - **Layers**: one renderer per sheet producing a [`ShapePlan`]
//! - **SVG Writer**: millimeter-sized SVG documents
//!
//! ## Architecture
//!
//! ```text
//! GlyphMetricsProvider ──> GlyphSet ──> DerivedLayout
//!                                          │
//!        Front, LightShade, LightShadeRaster, DistanceRaster1/2, LedCarrier
//!                                          │
//!                                   ShapePlan ──> DocumentWriter
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wordclock_designer::{generate, SvgWriter, SystemFontProvider};
//! use wordclock_settings::ClockConfig;
//!
//! let config = ClockConfig::default();
//! let written = generate(&config, &SystemFontProvider, &SvgWriter::new())?;
//! ```

pub mod font_manager;
pub mod generator;
pub mod glyphs;
pub mod layers;
pub mod layout;
pub mod model;
pub mod placement;
pub mod plan;
pub mod primitives;
pub mod svg_writer;

pub use generator::{generate, ClockDesign};
pub use glyphs::{GlyphMetricsProvider, GlyphOutline, GlyphSet, SystemFontProvider};
pub use layers::{render_all, LayerContext, LayerRenderer};
pub use layout::DerivedLayout;
pub use model::Point;
pub use placement::Placement;
pub use plan::{
    Color, Geometry, LayerKind, Paint, PlannedShape, ShapePlan, ShapeRole, COLOR_BACKGROUND,
    COLOR_CUT, COLOR_GLYPHS, STROKE_WIDTH,
};
pub use primitives::{ConnectorRoute, Corner, RouteStep, ShadeCell};
pub use svg_writer::{DocumentWriter, SvgWriter};
