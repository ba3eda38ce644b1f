//! SitewrapDragStrip: colored strip above the web view that drags the window.
//!
//! A press on the strip hands the event straight to AppKit's window drag,
//! no classification needed since the strip has no content of its own.

use block2::RcBlock;
use tracing::{debug, trace};

use crate::delegate::page_script::PAGE_BACKGROUND_SCRIPT;
use crate::error::ShellError;
use crate::parse_css_color;
use crate::platform::macos::ffi::bridge::{
    get_class, id, is_nsstring, lookup_class, msg_send, nil, nsstring, sel, string_from_nsstring,
    AnyClass, AnyObject, Bool, ClassBuilder, NSRect, ObjectExt, Sel, YES,
};
use crate::platform::macos::ffi::{NS_VIEW_MIN_Y_MARGIN, NS_VIEW_WIDTH_SIZABLE};

/// Objective-C class name of the strip view.
pub const DRAG_STRIP_CLASS: &str = "SitewrapDragStrip";

/// Register the SitewrapDragStrip class, once per process.
///
/// # Safety
/// Must be called from the main thread.
unsafe fn drag_strip_class() -> Result<&'static AnyClass, ShellError> {
    if let Ok(cls) = lookup_class(DRAG_STRIP_CLASS) {
        return Ok(cls);
    }

    let mut builder = ClassBuilder::new(c"SitewrapDragStrip", get_class("NSView"))
        .ok_or_else(|| ShellError::Native(format!("cannot declare {DRAG_STRIP_CLASS}")))?;

    builder.add_ivar::<f64>(c"_red");
    builder.add_ivar::<f64>(c"_green");
    builder.add_ivar::<f64>(c"_blue");
    builder.add_ivar::<f64>(c"_alpha");

    builder.add_method(
        sel!(drawRect:),
        draw_rect as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(mouseDown:),
        mouse_down as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(acceptsFirstMouse:),
        accepts_first_mouse as unsafe extern "C-unwind" fn(_, _, _) -> _,
    );

    Ok(builder.register())
}

/// Create a strip pinned to the top edge of its superview.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn create_drag_strip(
    frame: NSRect,
    rgba: (f64, f64, f64, f64),
) -> Result<id, ShellError> {
    let cls = drag_strip_class()?;
    let strip: id = msg_send![cls, alloc];
    let strip: id = msg_send![strip, initWithFrame: frame];
    if strip == nil {
        return Err(ShellError::Native("failed to create drag strip".to_string()));
    }
    let _: () = msg_send![strip, setAutoresizingMask: NS_VIEW_WIDTH_SIZABLE | NS_VIEW_MIN_Y_MARGIN];
    set_strip_color(strip, rgba);
    Ok(strip)
}

/// Recolor the strip.
///
/// # Safety
/// `strip` must be a SitewrapDragStrip; main thread only.
pub unsafe fn set_strip_color(strip: id, (r, g, b, a): (f64, f64, f64, f64)) {
    (*strip).store_ivar::<f64>("_red", r);
    (*strip).store_ivar::<f64>("_green", g);
    (*strip).store_ivar::<f64>("_blue", b);
    (*strip).store_ivar::<f64>("_alpha", a);
    let _: () = msg_send![strip, setNeedsDisplay: YES];
}

/// Sample the page background and apply it to the strip once WebKit answers.
///
/// Transparent or unparseable colors leave the strip unchanged.
///
/// # Safety
/// `web_view` must be a WKWebView and `strip` a SitewrapDragStrip that
/// both live for the rest of the process; main thread only.
pub unsafe fn follow_page_background(web_view: id, strip: id) {
    let handler = RcBlock::new(move |result: id, _error: id| {
        if result == nil || !is_nsstring(result) {
            trace!("page background unavailable");
            return;
        }
        let css = string_from_nsstring(result).unwrap_or_default();
        match parse_css_color(&css) {
            Some(rgba) => {
                debug!(color = %css, "titlebar strip follows page background");
                set_strip_color(strip, rgba);
            }
            None => trace!(color = %css, "page background not usable"),
        }
    });

    let script = nsstring(PAGE_BACKGROUND_SCRIPT);
    let _: () = msg_send![web_view, evaluateJavaScript: &*script, completionHandler: &*handler];
}

// ============================================================================
// SitewrapDragStrip methods (extern "C-unwind" for Objective-C runtime)
// ============================================================================

unsafe extern "C-unwind" fn draw_rect(this: &mut AnyObject, _cmd: Sel, _dirty: NSRect) {
    let r = *this.load_ivar::<f64>("_red");
    let g = *this.load_ivar::<f64>("_green");
    let b = *this.load_ivar::<f64>("_blue");
    let a = *this.load_ivar::<f64>("_alpha");

    let view: id = this as *mut _ as id;
    let bounds: NSRect = msg_send![view, bounds];
    let color: id = msg_send![
        get_class("NSColor"),
        colorWithSRGBRed: r,
        green: g,
        blue: b,
        alpha: a
    ];
    let _: () = msg_send![color, setFill];
    let _: () = msg_send![get_class("NSBezierPath"), fillRect: bounds];
}

unsafe extern "C-unwind" fn mouse_down(this: &mut AnyObject, _cmd: Sel, event: id) {
    let view: id = this as *mut _ as id;
    let window: id = msg_send![view, window];
    if window != nil {
        let _: () = msg_send![window, performWindowDragWithEvent: event];
    }
}

unsafe extern "C-unwind" fn accepts_first_mouse(
    _this: &mut AnyObject,
    _cmd: Sel,
    _event: id,
) -> Bool {
    YES
}
