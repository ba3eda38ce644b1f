//! Input handling module.
//!
//! - pointer.rs: mouse events on the web view, routed through the titlebar classifier

pub mod pointer;

pub use pointer::{route_pointer_event, SuperForwarder, WindowDragger};
