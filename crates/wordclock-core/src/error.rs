//! Error handling for the word clock generator
//!
//! Provides the error taxonomy shared by every crate in the workspace:
//! - Configuration errors (degenerate grid, non-positive dimensions, bad files)
//! - Missing glyph errors (a text character the font cannot draw)
//! - Output errors (an artifact could not be written)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration error type
///
/// Raised before any layout is derived, since the pitch formulas divide by
/// `rows - 1` and `columns - 1`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The text grid has fewer than two rows
    #[error("Text grid needs at least 2 rows, got {rows}")]
    TooFewRows {
        /// Number of rows found.
        rows: usize,
    },

    /// The text grid has fewer than two columns
    #[error("Text grid needs at least 2 columns, got {columns}")]
    TooFewColumns {
        /// Number of columns found.
        columns: usize,
    },

    /// A text row differs in length from the first row
    #[error("Row {row} has {found} characters, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A dimension that must be positive is zero or negative
    #[error("'{name}' must be positive, got {value}")]
    NonPositiveDimension {
        /// Name of the setting.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// A measurement is NaN or infinite
    #[error("'{name}' must be a finite number")]
    NonFinite {
        /// Name of the setting.
        name: String,
    },

    /// The configuration file extension is not supported
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// The configuration file could not be parsed
    #[error("Invalid config file: {0}")]
    Parse(String),
}

/// Main error type
///
/// Aggregates every failure the generator can report.
#[derive(Error, Debug)]
pub enum Error {
    /// A character in the text grid has no resolvable outline
    #[error("No glyph outline for character '{character}'")]
    MissingGlyph {
        /// The character that could not be resolved.
        character: char,
    },

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An output artifact could not be written
    #[error("Failed to write {}: {source}", path.display())]
    OutputWrite {
        /// Destination of the failed write.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Font lookup or parsing failed
    #[error("Font error: {0}")]
    Font(String),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a missing glyph error
    pub fn missing_glyph(character: char) -> Self {
        Error::MissingGlyph { character }
    }

    /// Check if this is a missing glyph error
    pub fn is_missing_glyph(&self) -> bool {
        matches!(self, Error::MissingGlyph { .. })
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this is an output write error
    pub fn is_output_error(&self) -> bool {
        matches!(self, Error::OutputWrite { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
