//! Configuration for the word clock cut sheets
//!
//! One immutable value object holds every input the generator needs:
//! - Font descriptor used to outline the clock wording
//! - The text grid itself
//! - Panel measurements (size, borders, frame, light shade margin)
//! - Hardware measurements (screws, nuts, connectors, LED pins, PCB screws)
//! - Output file names and the fill/outline mode
//!
//! All measurements are millimeters. Files may be JSON or TOML; missing
//! sections fall back to the reference clock.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use wordclock_core::{ConfigError, Result, TextGrid};

/// Font family and size used to outline the glyphs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontDescriptor {
    /// Family name as known to the system font database
    pub family: String,
    /// Em size in millimeters; the font's em square is scaled to this size
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "DIN Schablonierschrift".to_string(),
            size: 16.0,
            bold: false,
            italic: false,
        }
    }
}

/// Panel measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// Front panel width
    pub width: f64,
    /// Front panel height
    pub height: f64,
    /// Distance from the left/right panel edge to the outer glyph columns
    pub border_x: f64,
    /// Distance from the top/bottom panel edge to the outer glyph rows
    pub border_y: f64,
    /// Width of the frame around the inner layers
    pub frame_width: f64,
    /// Margin added around the largest glyph to size a light shade cell
    pub light_shade_extra: f64,
    /// Depth of the light shade box (fold tab height)
    pub depth: f64,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 300.0,
            border_x: 35.0,
            border_y: 35.0,
            frame_width: 3.0,
            light_shade_extra: 4.0,
            depth: 44.0,
        }
    }
}

/// Position of a PCB mounting screw, measured from the lower left PCB corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrewPosition {
    pub x: f64,
    pub y: f64,
}

impl ScrewPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Hardware measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HardwareSettings {
    pub screw_diameter: f64,
    pub connector_diameter: f64,
    pub wire_diameter: f64,
    /// Nut width across flats
    pub nut_size: f64,
    /// Pitch between neighbouring connector pins
    pub connector_distance: f64,
    pub anodes_connector_offset_x: f64,
    pub anodes_connector_offset_y: f64,
    pub cathodes_connector_offset_x: f64,
    pub cathodes_connector_offset_y: f64,
    /// The three PCB mounting screws; the second one gets a nut detour in the wiring channel
    pub pcb_screws: [ScrewPosition; 3],
    pub led_pin_width: f64,
    pub led_pin_height: f64,
    pub led_pin_distance_x: f64,
    pub led_pin_distance_y: f64,
}

impl Default for HardwareSettings {
    fn default() -> Self {
        Self {
            screw_diameter: 3.2,
            connector_diameter: 0.7,
            wire_diameter: 1.1,
            nut_size: 5.5,
            connector_distance: 2.54,
            anodes_connector_offset_x: 1.905,
            anodes_connector_offset_y: 77.47,
            cathodes_connector_offset_x: 31.115,
            cathodes_connector_offset_y: 1.905,
            pcb_screws: [
                ScrewPosition::new(3.81, 91.44),
                ScrewPosition::new(26.035, 50.165),
                ScrewPosition::new(15.24, 3.81),
            ],
            led_pin_width: 0.86,
            led_pin_height: 0.5,
            led_pin_distance_x: 5.08,
            led_pin_distance_y: 5.08,
        }
    }
}

/// Output artifact names and drawing mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory the six artifacts are written into
    pub directory: PathBuf,
    pub front: String,
    pub light_shades: String,
    pub light_shade_raster: String,
    pub distance_raster_1: String,
    pub distance_raster_2: String,
    pub led_carrier: String,
    /// Fill background and glyphs on the front instead of cutting outlines
    pub fill: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            front: "front.svg".to_string(),
            light_shades: "shades.svg".to_string(),
            light_shade_raster: "raster.svg".to_string(),
            distance_raster_1: "distance1.svg".to_string(),
            distance_raster_2: "distance2.svg".to_string(),
            led_carrier: "led.svg".to_string(),
            fill: false,
        }
    }
}

/// The reference clock wording (German, 9 rows by 11 columns)
pub fn reference_text() -> Vec<String> {
    [
        "ESLISTEFÜNF",
        "VIERTELZEHN",
        "ZWANZIGXVOR",
        "NACHDASHALB",
        "ZWEINSDREIS",
        "VIEROTNACHT",
        "ELFZWÖLFÜNF",
        "USECHSIEBEN",
        "ZEHNEUNDUHR",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Complete generator configuration
///
/// Constructed once (defaults, struct literal or file) and only borrowed
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub font: FontDescriptor,
    pub text: Vec<String>,
    pub panel: PanelSettings,
    pub hardware: HardwareSettings,
    pub output: OutputSettings,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            font: FontDescriptor::default(),
            text: reference_text(),
            panel: PanelSettings::default(),
            hardware: HardwareSettings::default(),
            output: OutputSettings::default(),
        }
    }
}

impl ClockConfig {
    /// Create new config with the reference clock values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = extension(path);
        if !matches!(format, Some("json" | "toml")) {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into());
        }
        let content = std::fs::read_to_string(path)?;

        let config: Self = if format == Some("json") {
            serde_json::from_str(&content)
                .map_err(|e| ConfigError::Parse(format!("Invalid JSON config: {}", e)))?
        } else {
            toml::from_str(&content)
                .map_err(|e| ConfigError::Parse(format!("Invalid TOML config: {}", e)))?
        };

        config.validate()?;
        debug!(path = %path.display(), "Loaded clock configuration");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)
                .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?,
            Some("toml") => toml::to_string_pretty(self)
                .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?,
            _ => {
                return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into());
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    ///
    /// Rejects degenerate grids and non-positive or non-finite measurements.
    pub fn validate(&self) -> Result<()> {
        self.text_grid()?;

        if !self.font.size.is_finite() {
            return Err(non_finite("font.size"));
        }
        if self.font.size <= 0.0 {
            return Err(non_positive("font.size", self.font.size));
        }

        let panel = &self.panel;
        for (name, value) in [
            ("panel.width", panel.width),
            ("panel.height", panel.height),
        ] {
            if !value.is_finite() {
                return Err(non_finite(name));
            }
            if value <= 0.0 {
                return Err(non_positive(name, value));
            }
        }

        let hw = &self.hardware;
        for (name, value) in [
            ("hardware.screw_diameter", hw.screw_diameter),
            ("hardware.connector_diameter", hw.connector_diameter),
            ("hardware.wire_diameter", hw.wire_diameter),
            ("hardware.nut_size", hw.nut_size),
            ("hardware.connector_distance", hw.connector_distance),
        ] {
            if !value.is_finite() {
                return Err(non_finite(name));
            }
            if value <= 0.0 {
                return Err(non_positive(name, value));
            }
        }

        let finite_only = [
            ("panel.border_x", panel.border_x),
            ("panel.border_y", panel.border_y),
            ("panel.frame_width", panel.frame_width),
            ("panel.light_shade_extra", panel.light_shade_extra),
            ("panel.depth", panel.depth),
            ("hardware.anodes_connector_offset_x", hw.anodes_connector_offset_x),
            ("hardware.anodes_connector_offset_y", hw.anodes_connector_offset_y),
            ("hardware.cathodes_connector_offset_x", hw.cathodes_connector_offset_x),
            ("hardware.cathodes_connector_offset_y", hw.cathodes_connector_offset_y),
            ("hardware.led_pin_width", hw.led_pin_width),
            ("hardware.led_pin_height", hw.led_pin_height),
            ("hardware.led_pin_distance_x", hw.led_pin_distance_x),
            ("hardware.led_pin_distance_y", hw.led_pin_distance_y),
        ];
        for (name, value) in finite_only {
            if !value.is_finite() {
                return Err(non_finite(name));
            }
        }
        if hw.pcb_screws.iter().any(|s| !s.x.is_finite() || !s.y.is_finite()) {
            return Err(non_finite("hardware.pcb_screws"));
        }

        Ok(())
    }

    /// The clock wording as a validated grid
    pub fn text_grid(&self) -> Result<TextGrid> {
        TextGrid::new(&self.text)
    }

    /// Panel width minus the frame on both sides
    pub fn inner_width(&self) -> f64 {
        self.panel.width - 2.0 * self.panel.frame_width
    }

    /// Panel height minus the frame on both sides
    pub fn inner_height(&self) -> f64 {
        self.panel.height - 2.0 * self.panel.frame_width
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

fn non_positive(name: &str, value: f64) -> wordclock_core::Error {
    ConfigError::NonPositiveDimension {
        name: name.to_string(),
        value,
    }
    .into()
}

fn non_finite(name: &str) -> wordclock_core::Error {
    ConfigError::NonFinite {
        name: name.to_string(),
    }
    .into()
}
