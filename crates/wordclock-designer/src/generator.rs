//! Run orchestration: glyphs, layout, the six plans and their artifacts.

use crate::glyphs::{GlyphMetricsProvider, GlyphSet};
use crate::layers::{self, LayerContext};
use crate::layout::DerivedLayout;
use crate::plan::ShapePlan;
use crate::svg_writer::DocumentWriter;
use std::path::PathBuf;
use tracing::info;
use wordclock_core::{Result, TextGrid};
use wordclock_settings::ClockConfig;

/// A validated configuration with its glyphs and derived layout
///
/// Built once per run; every layer renders from the same instance.
#[derive(Debug, Clone)]
pub struct ClockDesign<'a> {
    config: &'a ClockConfig,
    grid: TextGrid,
    glyphs: GlyphSet,
    layout: DerivedLayout,
}

impl<'a> ClockDesign<'a> {
    /// Validate `config`, outline every glyph and derive the layout.
    ///
    /// Fails before anything is rendered on a bad configuration or a
    /// character the font cannot draw.
    pub fn new(config: &'a ClockConfig, provider: &impl GlyphMetricsProvider) -> Result<Self> {
        config.validate()?;
        let grid = config.text_grid()?;
        let glyphs = GlyphSet::load(&grid, &config.font, provider)?;
        let layout = DerivedLayout::compute(&grid, &glyphs, config)?;
        Ok(Self {
            config,
            grid,
            glyphs,
            layout,
        })
    }

    pub fn config(&self) -> &ClockConfig {
        self.config
    }

    pub fn grid(&self) -> &TextGrid {
        &self.grid
    }

    pub fn glyphs(&self) -> &GlyphSet {
        &self.glyphs
    }

    pub fn layout(&self) -> &DerivedLayout {
        &self.layout
    }

    pub fn context(&self) -> LayerContext<'_> {
        LayerContext {
            layout: &self.layout,
            config: self.config,
            grid: &self.grid,
            glyphs: &self.glyphs,
        }
    }

    /// All six plans, without touching the file system
    pub fn render_all(&self) -> Result<Vec<ShapePlan>> {
        layers::render_all(&self.context())
    }
}

/// Render every layer and write it to the configured output directory.
///
/// Stops at the first failed write; artifacts written before it stay on disk.
/// Returns the written paths in layer order.
pub fn generate(
    config: &ClockConfig,
    provider: &impl GlyphMetricsProvider,
    writer: &impl DocumentWriter,
) -> Result<Vec<PathBuf>> {
    info!(
        rows = config.text.len(),
        font = %config.font.family,
        fill = config.output.fill,
        "Generating word clock cut sheets"
    );

    let design = ClockDesign::new(config, provider)?;
    let plans = design.render_all()?;

    let mut written = Vec::with_capacity(plans.len());
    for plan in &plans {
        let path = config
            .output
            .directory
            .join(plan.layer.file_name(&config.output));
        writer.write(plan, &path)?;
        info!(layer = %plan.layer, path = %path.display(), "Wrote cut sheet");
        written.push(path);
    }

    info!(count = written.len(), "Cut sheets complete");
    Ok(written)
}
