//! # Word Clock Core
//!
//! Core types shared by the word clock cut-sheet generator.
//! Provides the error taxonomy and the text grid that every layer is laid
//! out from.

pub mod error;
pub mod text_grid;

pub use error::{ConfigError, Error, Result};
pub use text_grid::TextGrid;
