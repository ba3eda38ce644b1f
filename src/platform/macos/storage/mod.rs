//! Storage for macOS using NSUserDefaults.
//!
//! Reads configuration overrides from the macOS preferences system.

pub mod preferences;

pub use preferences::*;
