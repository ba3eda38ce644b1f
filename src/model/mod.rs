//! Application domain model.
//!
//! This module contains pure configuration logic (no FFI dependencies)
//! including the shell configuration and its constants.
//!
//! NSUserDefaults overrides are read in `platform::macos::storage`.

pub mod app_config;
pub mod constants;

pub use app_config::AppConfig;
pub use constants::*;
