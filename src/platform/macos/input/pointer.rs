//! Routing of web view mouse events through the titlebar classifier.
//!
//! `SitewrapWebView` overrides `mouseDown:`, `mouseDragged:` and `mouseUp:`
//! and hands each event to [`route_pointer_event`]. Forwarding to the
//! content means calling WKWebView's own implementation via `super`.

use std::ffi::c_void;

use objc2_core_foundation::CGFloat;
use tracing::trace;

use crate::delegate::{Coordinator, ShellDelegate};
use crate::error::ShellError;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, AnyClass, NSPoint, NSRect, ObjectExt,
};
use crate::platform::macos::ui::web_view::WEB_VIEW_SUPERCLASS;
use crate::titlebar::{
    drag_origin, ContentSurface, Disposition, DragClassifier, Point, PointerEvent, PointerPhase,
    WindowMover,
};

/// Build a [`PointerEvent`] from an `NSEvent`.
///
/// # Safety
/// `event` must be a valid mouse NSEvent.
pub unsafe fn pointer_event_from(event: id, phase: PointerPhase) -> PointerEvent {
    let location: NSPoint = msg_send![event, locationInWindow];
    PointerEvent::new(phase, location.x, location.y)
}

/// Delivers events to WKWebView's own mouse handlers.
pub struct SuperForwarder {
    view: id,
    event: id,
    superclass: &'static AnyClass,
}

impl SuperForwarder {
    /// # Safety
    /// `view` must be a SitewrapWebView and `event` the NSEvent being routed.
    pub unsafe fn new(view: id, event: id) -> Self {
        Self {
            view,
            event,
            superclass: get_class(WEB_VIEW_SUPERCLASS),
        }
    }
}

impl ContentSurface for SuperForwarder {
    fn forward(&mut self, pointer: &PointerEvent) {
        unsafe {
            match pointer.phase {
                PointerPhase::Down => {
                    let _: () = msg_send![super(self.view, self.superclass), mouseDown: self.event];
                }
                PointerPhase::Moved => {
                    let _: () =
                        msg_send![super(self.view, self.superclass), mouseDragged: self.event];
                }
                PointerPhase::Up => {
                    let _: () = msg_send![super(self.view, self.superclass), mouseUp: self.event];
                }
            }
        }
    }
}

/// Moves an NSWindow so the grab point follows the mouse.
pub struct WindowDragger {
    window: id,
}

impl WindowDragger {
    pub fn new(window: id) -> Self {
        Self { window }
    }
}

impl WindowMover for WindowDragger {
    fn move_window(&mut self, _event: &PointerEvent, anchor: Point) -> Result<(), ShellError> {
        if self.window.is_null() {
            return Err(ShellError::NoWindow);
        }
        unsafe {
            // Screen coordinates, unaffected by the window moving under the pointer
            let mouse: NSPoint = msg_send![get_class("NSEvent"), mouseLocation];
            let origin = drag_origin(Point::new(mouse.x, mouse.y), anchor);
            let origin = NSPoint::new(origin.x as CGFloat, origin.y as CGFloat);
            let _: () = msg_send![self.window, setFrameOrigin: origin];
        }
        Ok(())
    }
}

/// Run one mouse event through the view's classifier.
///
/// # Safety
/// Must be called from the main thread. `view` must be a SitewrapWebView
/// and `event` a valid mouse NSEvent.
pub unsafe fn route_pointer_event(view: id, event: id, phase: PointerPhase) {
    let pointer = pointer_event_from(event, phase);
    let window: id = msg_send![view, window];
    let window_height = if window.is_null() {
        let bounds: NSRect = msg_send![view, bounds];
        bounds.size.height
    } else {
        let frame: NSRect = msg_send![window, frame];
        frame.size.height
    };

    let mut surface = SuperForwarder::new(view, event);
    let classifier_ptr = *(*view).load_ivar::<*mut c_void>("_classifier");
    if classifier_ptr.is_null() {
        // Not wired yet: behave like a plain WKWebView
        surface.forward(&pointer);
        return;
    }
    let classifier = &mut *(classifier_ptr as *mut DragClassifier);

    let mut mover = WindowDragger::new(window);
    let disposition = classifier.handle(&pointer, window_height, &mut surface, &mut mover);
    trace!(?phase, ?disposition, "pointer routed");

    if disposition == Disposition::DragStarted {
        let coordinator_ptr = *(*view).load_ivar::<*const c_void>("_coordinator");
        if let (Some(coordinator), Some(gesture)) = (
            (coordinator_ptr as *const Coordinator).as_ref(),
            classifier.gesture(),
        ) {
            coordinator.on_gesture_start(gesture);
        }
    }
}
