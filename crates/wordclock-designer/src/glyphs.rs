//! Glyph outlines and the provider boundary that produces them.
//!
//! A [`GlyphOutline`] is a character's closed outline in y-down sheet space
//! with the baseline at y = 0 and the leftmost ink at x = 0. Outlines are
//! built once per distinct character and shared read-only by every layer.

use crate::font_manager;
use crate::model::{path_bounds, translated, Point};
use lyon::math::point;
use lyon::path::Path;
use rusttype::{Font, OutlineBuilder, Scale};
use std::collections::BTreeMap;
use tracing::debug;
use wordclock_core::{Error, Result, TextGrid};
use wordclock_settings::FontDescriptor;

/// Outline of one character plus its bounding box size
#[derive(Debug, Clone)]
pub struct GlyphOutline {
    path: Path,
    width: f64,
    height: f64,
}

impl GlyphOutline {
    /// Normalize `path` so its bounding box starts at x = 0.
    pub fn from_path(path: Path) -> Self {
        let (min_x, min_y, max_x, max_y) = path_bounds(&path);
        let path = if min_x != 0.0 {
            translated(&path, Point::new(-min_x, 0.0))
        } else {
            path
        };
        Self {
            path,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The outline moved so its origin lands on `at`; the shared outline is untouched.
    pub fn placed_at(&self, at: Point) -> Path {
        translated(&self.path, at)
    }
}

/// Source of glyph outlines for a font
pub trait GlyphMetricsProvider {
    fn outline(&self, font: &FontDescriptor, character: char) -> Result<GlyphOutline>;
}

/// Outlines from system fonts via fontdb and rusttype
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFontProvider;

impl GlyphMetricsProvider for SystemFontProvider {
    fn outline(&self, font: &FontDescriptor, character: char) -> Result<GlyphOutline> {
        let face = font_manager::get_font_for(&font.family, font.bold, font.italic)?;
        let glyph = face.glyph(character);
        if glyph.id().0 == 0 {
            return Err(Error::missing_glyph(character));
        }

        // Outlines come back y-down around the glyph origin, baseline at 0.
        let scaled = glyph.scaled(em_scale(face, font.size)?);
        let mut builder = GlyphPathBuilder::default();
        scaled.build_outline(&mut builder);
        Ok(GlyphOutline::from_path(builder.build()))
    }
}

/// rusttype scale whose em square is `size` millimeters
///
/// rusttype scales the ascent-to-descent height, so the em size is converted
/// through the face's unscaled vertical metrics.
fn em_scale(face: &Font<'_>, size: f64) -> Result<Scale> {
    let units_per_em = f64::from(face.units_per_em());
    let metrics = face.v_metrics_unscaled();
    let line_height = f64::from(metrics.ascent - metrics.descent);
    if units_per_em <= 0.0 || line_height <= 0.0 {
        return Err(Error::Font("face has no usable vertical metrics".to_string()));
    }
    Ok(Scale::uniform((size * line_height / units_per_em) as f32))
}

struct GlyphPathBuilder {
    builder: lyon::path::path::Builder,
    open: bool,
}

impl Default for GlyphPathBuilder {
    fn default() -> Self {
        Self {
            builder: Path::builder(),
            open: false,
        }
    }
}

impl GlyphPathBuilder {
    fn build(mut self) -> Path {
        if self.open {
            self.builder.end(false);
        }
        self.builder.build()
    }
}

impl OutlineBuilder for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        if self.open {
            self.builder.end(false);
        }
        self.builder.begin(point(x, y));
        self.open = true;
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(point(x, y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder
            .quadratic_bezier_to(point(x1, y1), point(x, y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder
            .cubic_bezier_to(point(x1, y1), point(x2, y2), point(x, y));
    }

    fn close(&mut self) {
        if self.open {
            self.builder.end(true);
            self.open = false;
        }
    }
}

/// Outlines for every distinct character of a text grid
#[derive(Debug, Clone, Default)]
pub struct GlyphSet {
    outlines: BTreeMap<char, GlyphOutline>,
}

impl GlyphSet {
    /// Ask `provider` once per distinct character of `grid`.
    pub fn load(
        grid: &TextGrid,
        font: &FontDescriptor,
        provider: &impl GlyphMetricsProvider,
    ) -> Result<Self> {
        let mut outlines = BTreeMap::new();
        for character in grid.distinct_chars() {
            let outline = provider.outline(font, character)?;
            debug!(
                %character,
                width = outline.width(),
                height = outline.height(),
                "Outlined glyph"
            );
            outlines.insert(character, outline);
        }
        debug!(count = outlines.len(), "Loaded glyph set");
        Ok(Self { outlines })
    }

    pub fn insert(&mut self, character: char, outline: GlyphOutline) {
        self.outlines.insert(character, outline);
    }

    /// Outline for `character`, or `MissingGlyph`
    pub fn get(&self, character: char) -> Result<&GlyphOutline> {
        self.outlines
            .get(&character)
            .ok_or_else(|| Error::missing_glyph(character))
    }
}
