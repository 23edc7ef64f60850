//! Derived layout shared by all six cut sheets.
//!
//! Every layer reads the same grid pitch, glyph extents and frame size from
//! a single [`DerivedLayout`], which is what keeps holes, cells and glyphs
//! aligned once the sheets are stacked.
//!
//! ## Pitch
//!
//! Column centers are spaced evenly while the outer columns keep exactly
//! half of their widest glyph inside the border:
//!
//! ```text
//! factor_x = (width - 2·border_x - first_column_width/2 - last_column_width/2) / (columns - 1)
//! factor_y = max_character_height + (height - 2·border_y - rows·max_character_height) / (rows - 1)
//! ```

use crate::glyphs::GlyphSet;
use tracing::{debug, warn};
use wordclock_core::{ConfigError, Result, TextGrid};
use wordclock_settings::ClockConfig;

/// Layout constants derived from the text, the glyphs and the panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedLayout {
    pub rows: usize,
    pub columns: usize,
    /// Tallest glyph bounding box of the text
    pub max_character_height: f64,
    /// Widest glyph bounding box of the text
    pub max_character_width: f64,
    /// Widest glyph that starts a row
    pub first_column_width: f64,
    /// Widest glyph that ends a row
    pub last_column_width: f64,
    /// Center-to-center column pitch
    pub factor_x: f64,
    /// Baseline-to-baseline row pitch
    pub factor_y: f64,
    pub inner_width: f64,
    pub inner_height: f64,
    /// Light shade cell incircle diameter
    pub size: f64,
}

impl DerivedLayout {
    /// Derive the layout; fails only on a missing glyph or a non-positive panel.
    pub fn compute(grid: &TextGrid, glyphs: &GlyphSet, config: &ClockConfig) -> Result<Self> {
        let panel = &config.panel;
        for (name, value) in [("panel.width", panel.width), ("panel.height", panel.height)] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveDimension {
                    name: name.to_string(),
                    value,
                }
                .into());
            }
        }

        let rows = grid.rows();
        let columns = grid.columns();

        let mut max_character_height: f64 = 0.0;
        let mut max_character_width: f64 = 0.0;
        for character in grid.distinct_chars() {
            let outline = glyphs.get(character)?;
            max_character_height = max_character_height.max(outline.height());
            max_character_width = max_character_width.max(outline.width());
        }

        let mut first_column_width: f64 = 0.0;
        for character in grid.first_column() {
            first_column_width = first_column_width.max(glyphs.get(character)?.width());
        }
        let mut last_column_width: f64 = 0.0;
        for character in grid.last_column() {
            last_column_width = last_column_width.max(glyphs.get(character)?.width());
        }

        let factor_x = (panel.width
            - 2.0 * panel.border_x
            - first_column_width / 2.0
            - last_column_width / 2.0)
            / (columns as f64 - 1.0);
        let factor_y = max_character_height
            + (panel.height - 2.0 * panel.border_y - rows as f64 * max_character_height)
                / (rows as f64 - 1.0);

        let layout = Self {
            rows,
            columns,
            max_character_height,
            max_character_width,
            first_column_width,
            last_column_width,
            factor_x,
            factor_y,
            inner_width: config.inner_width(),
            inner_height: config.inner_height(),
            size: max_character_height.max(max_character_width) + panel.light_shade_extra,
        };

        if layout.factor_x <= 0.0 {
            warn!(factor_x = layout.factor_x, "Glyph columns overlap, panel too narrow");
        }
        if layout.factor_y < layout.max_character_height {
            warn!(factor_y = layout.factor_y, "Glyph rows overlap, panel too short");
        }
        debug!(?layout, "Derived layout");

        Ok(layout)
    }
}
