//! FFI bindings for Cocoa and WebKit.

pub mod bridge;
pub mod types;
pub mod webkit;

pub use types::*;
pub use webkit::*;
