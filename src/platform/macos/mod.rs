//! macOS implementation using AppKit and WebKit via objc2.
//!
//! This module contains all macOS-specific code:
//! - FFI helpers and WebKit linkage
//! - UI components (window, web view, drag strip, menus)
//! - Input handling (web view mouse events through the titlebar classifier)
//! - Event dispatching
//! - Storage (NSUserDefaults configuration overrides)

pub mod app;
pub mod ffi;
pub mod handlers;
pub mod input;
pub mod storage;
pub mod ui;

// Re-export commonly used items
pub use app::*;
pub use ffi::bridge;
pub use handlers::*;
pub use storage::*;
pub use ui::*;
