#![allow(dead_code)]

use lyon::math::point;
use lyon::path::Path;
use std::collections::HashMap;
use wordclock_core::{Error, Result};
use wordclock_designer::{GlyphMetricsProvider, GlyphOutline};
use wordclock_settings::{ClockConfig, FontDescriptor};

/// Outlines every character as a plain box sitting on the baseline
#[derive(Debug, Clone)]
pub struct BoxProvider {
    pub width: f32,
    pub height: f32,
    pub overrides: HashMap<char, (f32, f32)>,
    pub missing: Vec<char>,
}

impl BoxProvider {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            overrides: HashMap::new(),
            missing: Vec::new(),
        }
    }

    pub fn with_glyph(mut self, character: char, width: f32, height: f32) -> Self {
        self.overrides.insert(character, (width, height));
        self
    }

    pub fn without(mut self, character: char) -> Self {
        self.missing.push(character);
        self
    }
}

impl GlyphMetricsProvider for BoxProvider {
    fn outline(&self, _font: &FontDescriptor, character: char) -> Result<GlyphOutline> {
        if self.missing.contains(&character) {
            return Err(Error::missing_glyph(character));
        }
        let (w, h) = self
            .overrides
            .get(&character)
            .copied()
            .unwrap_or((self.width, self.height));
        Ok(GlyphOutline::from_path(glyph_box(w, h)))
    }
}

pub fn glyph_box(w: f32, h: f32) -> Path {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(w, 0.0));
    builder.line_to(point(w, -h));
    builder.line_to(point(0.0, -h));
    builder.end(true);
    builder.build()
}

/// Reference clock with every measurement left at its default
pub fn reference_config() -> ClockConfig {
    ClockConfig::default()
}

/// A 2×2 grid of identical characters on a 100 mm panel with 10 mm borders
pub fn small_config() -> ClockConfig {
    let mut config = ClockConfig::default();
    config.text = vec!["AA".to_string(), "AA".to_string()];
    config.panel.width = 100.0;
    config.panel.height = 100.0;
    config.panel.border_x = 10.0;
    config.panel.border_y = 10.0;
    config
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
