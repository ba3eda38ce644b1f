//! Web view context menu: link and history actions only.
//!
//! WebKit's own items are removed. The link under the pointer is only
//! known once the page answers a script, so "Open in Default Browser" is
//! inserted into the open menu when that answer arrives.

use block2::RcBlock;
use tracing::trace;

use crate::delegate::is_external_url;
use crate::delegate::page_script::{css_point, link_at_point_script};
use crate::model::constants::*;
use crate::platform::macos::ffi::bridge::{
    get_class, id, is_nsstring, msg_send, nil, nsstring, nsstring_id, sel, string_from_nsstring,
    Bool, NSPoint, NSRect, ObjectExt, Sel, NO,
};

/// Create a menu item targeting `target`.
///
/// # Safety
/// Main thread only.
unsafe fn menu_item(title: &str, action: Sel, target: id, enabled: bool) -> id {
    let title = nsstring(title);
    let empty = nsstring("");
    let item: id = msg_send![get_class("NSMenuItem"), alloc];
    let item: id = msg_send![item, initWithTitle: &*title, action: action, keyEquivalent: &*empty];
    let _: () = msg_send![item, setTarget: target];
    let _: () = msg_send![item, setEnabled: Bool::new(enabled)];
    let _: id = msg_send![item, autorelease];
    item
}

/// Replace the pending link, releasing the previous one.
///
/// # Safety
/// `view` must be a SitewrapWebView; `link` retained or nil.
unsafe fn replace_last_link(view: id, link: id) {
    let old = *(*view).load_ivar::<id>("_lastLinkURL");
    if old != nil {
        let _: () = msg_send![old, release];
    }
    (*view).store_ivar::<id>("_lastLinkURL", link);
}

/// Rebuild `menu` for a right click described by `event`.
///
/// # Safety
/// Main thread only. `view` must be a SitewrapWebView, `menu` the NSMenu
/// about to open and `event` the triggering NSEvent.
pub unsafe fn prepare_context_menu(view: id, menu: id, event: id) {
    replace_last_link(view, nil);

    let _: () = msg_send![menu, removeAllItems];
    let _: () = msg_send![menu, setAutoenablesItems: NO];

    let can_back: bool = msg_send![view, canGoBack];
    let can_forward: bool = msg_send![view, canGoForward];
    let back = menu_item(MENU_BACK, sel!(menuGoBack:), view, can_back);
    let forward = menu_item(MENU_FORWARD, sel!(menuGoForward:), view, can_forward);
    let reload = menu_item(MENU_RELOAD, sel!(menuReload:), view, true);
    for item in [back, forward, reload] {
        let _: () = msg_send![menu, addItem: item];
    }

    let in_window: NSPoint = msg_send![event, locationInWindow];
    let local: NSPoint = msg_send![view, convertPoint: in_window, fromView: nil];
    let bounds: NSRect = msg_send![view, bounds];
    let flipped: bool = msg_send![view, isFlipped];
    let (x, y) = css_point(local.x, local.y, bounds.size.height, flipped);

    // Kept alive until the lookup answers, even if the menu closes first
    let _: id = msg_send![menu, retain];
    let handler = RcBlock::new(move |result: id, _error: id| {
        if let Some(url) = link_from_result(result) {
            trace!(url = url.as_str(), "context menu link");
            replace_last_link(view, nsstring_id(&url));
            let open = menu_item(MENU_OPEN_IN_BROWSER, sel!(menuOpenLink:), view, true);
            let separator: id = msg_send![get_class("NSMenuItem"), separatorItem];
            let _: () = msg_send![menu, insertItem: open, atIndex: 0isize];
            let _: () = msg_send![menu, insertItem: separator, atIndex: 1isize];
        }
        let _: () = msg_send![menu, release];
    });

    let script = nsstring(&link_at_point_script(x, y));
    let _: () = msg_send![view, evaluateJavaScript: &*script, completionHandler: &*handler];
}

/// The link URL from a script result, if it can be opened externally.
///
/// # Safety
/// `result` must be nil or a valid object.
unsafe fn link_from_result(result: id) -> Option<String> {
    if result == nil || !is_nsstring(result) {
        return None;
    }
    string_from_nsstring(result).filter(|url| is_external_url(url))
}
