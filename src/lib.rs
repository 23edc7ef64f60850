//! # Word Clock
//!
//! Generates the six laser-cut sheets of a word clock as SVG:
//! - Front faceplate with the clock wording
//! - Honeycomb light shade and its folding raster
//! - Two distance rasters (wiring channel, nut and PCB holes)
//! - LED carrier with pad footprints and connector holes
//!
//! ## Architecture
//!
//! The workspace is split into four crates:
//!
//! 1. **wordclock-core** - Error taxonomy and the text grid
//! 2. **wordclock-settings** - The configuration value object and its file formats
//! 3. **wordclock-designer** - Glyphs, layout, layer renderers and SVG output
//! 4. **wordclock** - This binary, which wires logging and configuration together

use std::path::{Path, PathBuf};
use tracing::info;

pub use wordclock_core::{ConfigError, Error, Result, TextGrid};
pub use wordclock_designer as designer;
pub use wordclock_designer::{
    generate, ClockDesign, DerivedLayout, LayerKind, ShapePlan, SvgWriter, SystemFontProvider,
};
pub use wordclock_settings::ClockConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}

/// Load the configuration from `path`, or the reference clock when absent.
pub fn load_config(path: Option<&Path>) -> Result<ClockConfig> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            ClockConfig::load_from_file(path)
        }
        None => {
            info!("No configuration file given, using the reference clock");
            Ok(ClockConfig::default())
        }
    }
}

/// Generate every cut sheet with system fonts and SVG output.
pub fn run(config: &ClockConfig) -> Result<Vec<PathBuf>> {
    generate(config, &SystemFontProvider, &SvgWriter::new())
}
