//! Pointer events and the collaborators the classifier drives.

use crate::error::ShellError;

/// A location in window space (points, origin bottom-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Window origin that keeps `anchor`, the window-space grab point, under
/// the pointer at screen location `mouse`.
///
/// Depends only on where the pointer is now, so one move catches up any
/// travel the window has not followed yet.
pub fn drag_origin(mouse: Point, anchor: Point) -> Point {
    Point::new(mouse.x - anchor.x, mouse.y - anchor.y)
}

/// Phase of a single-button pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Moved,
    Up,
}

/// One pointer event as delivered to the content surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    /// Location in window space.
    pub location: Point,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self {
            phase,
            location: Point::new(x, y),
        }
    }

    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Down, x, y)
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Moved, x, y)
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Up, x, y)
    }
}

/// The embedded web content that normally receives pointer events.
pub trait ContentSurface {
    /// Deliver `event` to the content unmodified.
    fn forward(&mut self, event: &PointerEvent);
}

/// The window hosting the content surface.
pub trait WindowMover {
    /// Move the window so that `anchor`, the window-space point where the
    /// drag was grabbed, stays under the pointer of `event`.
    ///
    /// Returns [`ShellError::NoWindow`] when the surface is not attached to a window.
    fn move_window(&mut self, event: &PointerEvent, anchor: Point) -> Result<(), ShellError>;
}
