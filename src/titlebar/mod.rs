//! Titlebar drag handling.
//!
//! A band at the top of the window overlaps the web content. Presses that
//! start inside the band and travel beyond a small threshold move the
//! window; everything else reaches the content as if the band were not
//! there.
//!
//! This module is pure Rust. The platform layer adapts `NSEvent`s into
//! [`PointerEvent`]s and implements [`ContentSurface`] and [`WindowMover`].
//!
//! # Module Structure
//!
//! - [`band`]: band geometry and height parsing
//! - [`gesture`]: per-gesture bookkeeping
//! - [`classifier`]: the click/drag state machine
//! - [`surface`]: pointer events and collaborator traits

pub mod band;
pub mod classifier;
pub mod gesture;
pub mod surface;

pub use band::{is_in_band, parse_length, TitlebarBand};
pub use classifier::{ClassifierState, Disposition, DragClassifier, GestureOutcome};
pub use gesture::{GestureClass, PointerGesture};
pub use surface::{drag_origin, ContentSurface, Point, PointerEvent, PointerPhase, WindowMover};
