//! Application main menu.
//!
//! - App: About, Hide, Quit
//! - Edit: standard text editing actions, routed through the responder chain
//! - View: Back, Forward, Reload, targeting the web view
//! - Window: Minimize, Close

use crate::model::constants::{MENU_BACK, MENU_FORWARD, MENU_RELOAD};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring, sel, NSApp, Sel};
use crate::platform::macos::ffi::{
    NS_EVENT_MODIFIER_COMMAND, NS_EVENT_MODIFIER_OPTION, NS_EVENT_MODIFIER_SHIFT,
};

/// Add an item to `menu`. A nil `target` leaves the action to the responder chain.
///
/// # Safety
/// Main thread only.
unsafe fn add_item(menu: id, title: &str, action: Sel, key: &str, modifiers: u64, target: id) {
    let title = nsstring(title);
    let key = nsstring(key);
    let item: id = msg_send![get_class("NSMenuItem"), alloc];
    let item: id = msg_send![item, initWithTitle: &*title, action: action, keyEquivalent: &*key];
    if modifiers != NS_EVENT_MODIFIER_COMMAND {
        let _: () = msg_send![item, setKeyEquivalentModifierMask: modifiers];
    }
    if target != nil {
        let _: () = msg_send![item, setTarget: target];
    }
    let _: () = msg_send![menu, addItem: item];
    let _: () = msg_send![item, release];
}

unsafe fn add_separator(menu: id) {
    let separator: id = msg_send![get_class("NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: separator];
}

/// Create a titled submenu and attach it to `menu_bar`.
///
/// # Safety
/// Main thread only.
unsafe fn add_submenu(menu_bar: id, title: &str) -> id {
    let title = nsstring(title);
    let submenu: id = msg_send![get_class("NSMenu"), alloc];
    let submenu: id = msg_send![submenu, initWithTitle: &*title];

    let holder: id = msg_send![get_class("NSMenuItem"), new];
    let _: () = msg_send![holder, setSubmenu: submenu];
    let _: () = msg_send![menu_bar, addItem: holder];
    let _: () = msg_send![holder, release];
    let _: () = msg_send![submenu, release];
    submenu
}

/// Install the main menu. `web_view` receives the View menu actions.
///
/// # Safety
/// Must be called from main thread, after the app is initialized.
pub unsafe fn install_main_menu(app_name: &str, web_view: id) {
    let cmd = NS_EVENT_MODIFIER_COMMAND;

    let menu_bar: id = msg_send![get_class("NSMenu"), new];

    // App
    let app_menu = add_submenu(menu_bar, app_name);
    let about = format!("About {app_name}");
    add_item(app_menu, &about, sel!(orderFrontStandardAboutPanel:), "", cmd, nil);
    add_separator(app_menu);
    add_item(app_menu, &format!("Hide {app_name}"), sel!(hide:), "h", cmd, nil);
    let cmd_option = cmd | NS_EVENT_MODIFIER_OPTION;
    add_item(app_menu, "Hide Others", sel!(hideOtherApplications:), "h", cmd_option, nil);
    add_item(app_menu, "Show All", sel!(unhideAllApplications:), "", cmd, nil);
    add_separator(app_menu);
    add_item(app_menu, &format!("Quit {app_name}"), sel!(terminate:), "q", cmd, nil);

    // Edit
    let edit_menu = add_submenu(menu_bar, "Edit");
    add_item(edit_menu, "Undo", sel!(undo:), "z", cmd, nil);
    add_item(edit_menu, "Redo", sel!(redo:), "z", cmd | NS_EVENT_MODIFIER_SHIFT, nil);
    add_separator(edit_menu);
    add_item(edit_menu, "Cut", sel!(cut:), "x", cmd, nil);
    add_item(edit_menu, "Copy", sel!(copy:), "c", cmd, nil);
    add_item(edit_menu, "Paste", sel!(paste:), "v", cmd, nil);
    add_item(edit_menu, "Select All", sel!(selectAll:), "a", cmd, nil);

    // View
    let view_menu = add_submenu(menu_bar, "View");
    add_item(view_menu, MENU_BACK, sel!(menuGoBack:), "[", cmd, web_view);
    add_item(view_menu, MENU_FORWARD, sel!(menuGoForward:), "]", cmd, web_view);
    add_item(view_menu, MENU_RELOAD, sel!(menuReload:), "r", cmd, web_view);

    // Window
    let window_menu = add_submenu(menu_bar, "Window");
    add_item(window_menu, "Minimize", sel!(performMiniaturize:), "m", cmd, nil);
    add_item(window_menu, "Close", sel!(performClose:), "w", cmd, nil);

    let app = NSApp();
    let _: () = msg_send![app, setMainMenu: menu_bar];
    let _: () = msg_send![app, setWindowsMenu: window_menu];
    let _: () = msg_send![menu_bar, release];
}
