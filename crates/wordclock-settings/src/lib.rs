//! Word Clock Settings Crate
//!
//! Handles the generator configuration: reference defaults, JSON/TOML files
//! and validation.

pub mod config;

pub use config::{
    reference_text, ClockConfig, FontDescriptor, HardwareSettings, OutputSettings, PanelSettings,
    ScrewPosition,
};
