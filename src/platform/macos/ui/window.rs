//! The main shell window.
//!
//! Layout (content view, origin bottom-left):
//!
//! ```text
//! ┌──────────────────────────────┐ ─┐
//! │ drag strip (extra titlebar)  │  │ band height
//! ├──────────────────────────────┤ ─┘
//! │                              │
//! │        SitewrapWebView       │
//! │                              │
//! └──────────────────────────────┘
//! ```
//!
//! Without the extra titlebar the web view fills the whole window and the
//! titlebar classifier provides dragging.

use tracing::info;

use crate::delegate::Coordinator;
use crate::error::ShellError;
use crate::model::constants::*;
use crate::model::AppConfig;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring, NSPoint, NSRect, NSSize, NO, YES,
};
use crate::platform::macos::ffi::*;
use crate::platform::macos::ui::drag_strip::create_drag_strip;
use crate::platform::macos::ui::web_view::{attach_titlebar_strip, create_web_view};

/// Split the content height into strip and web view heights.
fn split_content(height: f64, strip_height: Option<f64>) -> (f64, f64) {
    match strip_height {
        Some(strip) => {
            let strip = strip.min(height).max(0.0);
            (strip, height - strip)
        }
        None => (0.0, height),
    }
}

/// Create and show the main window, returning the web view inside it.
///
/// The window is not released when closed; the app terminates instead.
/// # Safety
/// Must be called from the main thread after NSApplication is initialized.
/// `navigation_delegate` must outlive the window.
pub unsafe fn create_main_window(
    config: &AppConfig,
    coordinator: &'static Coordinator,
    navigation_delegate: id,
) -> Result<id, ShellError> {
    let style = NS_WINDOW_STYLE_TITLED
        | NS_WINDOW_STYLE_CLOSABLE
        | NS_WINDOW_STYLE_MINIATURIZABLE
        | NS_WINDOW_STYLE_RESIZABLE
        | NS_WINDOW_STYLE_FULL_SIZE_CONTENT_VIEW;

    let (w, h) = (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT);
    let window: id = msg_send![get_class("NSWindow"), alloc];
    let window: id = msg_send![
        window,
        initWithContentRect: NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(w, h)),
        styleMask: style,
        backing: NS_BACKING_STORE_BUFFERED,
        defer: NO
    ];
    if window == nil {
        return Err(ShellError::NoWindow);
    }

    let title = nsstring(&config.titlebar_title);
    let _: () = msg_send![window, setTitle: &*title];
    let _: () = msg_send![window, setTitlebarAppearsTransparent: YES];
    let _: () = msg_send![window, setTitleVisibility: NS_WINDOW_TITLE_HIDDEN];
    let _: () = msg_send![window, setMinSize: NSSize::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)];
    let _: () = msg_send![window, setReleasedWhenClosed: NO];

    // Clear window; the web view and strip paint everything visible
    let clear: id = msg_send![get_class("NSColor"), clearColor];
    let _: () = msg_send![window, setOpaque: NO];
    let _: () = msg_send![window, setBackgroundColor: clear];

    let content: id = msg_send![window, contentView];
    let bounds: NSRect = msg_send![content, bounds];
    let band = config.titlebar_band();
    let strip_height = config.extra_titlebar.then(|| band.height());
    let (strip_h, web_h) = split_content(bounds.size.height, strip_height);

    let web_frame = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(bounds.size.width, web_h));
    let web_view = create_web_view(web_frame, config, coordinator, navigation_delegate)?;
    let _: () = msg_send![content, addSubview: web_view];

    if config.extra_titlebar {
        let strip_frame = NSRect::new(
            NSPoint::new(0.0, web_h),
            NSSize::new(bounds.size.width, strip_h),
        );
        let strip = create_drag_strip(strip_frame, config.titlebar_rgba())?;
        let _: () = msg_send![content, addSubview: strip];
        attach_titlebar_strip(web_view, strip, config.strip_follows_page());
        let _: () = msg_send![strip, release];
    }
    let _: () = msg_send![web_view, release];

    let _: bool = msg_send![window, makeFirstResponder: web_view];
    let _: () = msg_send![window, center];
    let _: () = msg_send![window, makeKeyAndOrderFront: nil];

    info!(
        title = config.titlebar_title.as_str(),
        extra_titlebar = config.extra_titlebar,
        band = band.height(),
        "main window ready"
    );
    Ok(web_view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_without_strip() {
        assert_eq!(split_content(800.0, None), (0.0, 800.0));
    }

    #[test]
    fn test_split_with_strip() {
        assert_eq!(split_content(800.0, Some(30.0)), (30.0, 770.0));
    }

    #[test]
    fn test_split_clamps_oversized_strip() {
        assert_eq!(split_content(20.0, Some(30.0)), (20.0, 0.0));
    }
}
