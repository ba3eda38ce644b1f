//! Platform-specific implementations.
//!
//! Only macOS is supported; the pure core (titlebar classification,
//! delegation, events, configuration) builds everywhere.

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::*;
