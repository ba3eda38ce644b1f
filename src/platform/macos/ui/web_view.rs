//! SitewrapWebView: the WKWebView subclass showing the target site.
//!
//! The subclass exists for three reasons:
//! - Mouse events pass through the titlebar classifier before WebKit sees them
//! - The context menu is replaced with link/history actions
//! - Menu actions publish events to the event bus

use std::ffi::c_void;

use tracing::{debug, info};

use crate::delegate::Coordinator;
use crate::error::ShellError;
use crate::events::{publish, AppEvent};
use crate::model::constants::*;
use crate::model::AppConfig;
use crate::platform::macos::ffi::bridge::{
    get_class, id, lookup_class, msg_send, nil, nsstring, sel, set_bool_ivar, set_bool_value,
    string_from_nsstring, AnyClass, AnyObject, ClassBuilder, NSRect, ObjectExt, Sel, NO, YES,
};
use crate::platform::macos::ffi::{
    NSURL_REQUEST_RETURN_CACHE_DATA_ELSE_LOAD, NS_VIEW_HEIGHT_SIZABLE, NS_VIEW_WIDTH_SIZABLE,
    WK_MEDIA_TYPES_NONE,
};
use crate::platform::macos::handlers::dispatch_events;
use crate::platform::macos::input::route_pointer_event;
use crate::platform::macos::ui::context_menu::prepare_context_menu;
use crate::titlebar::{DragClassifier, PointerPhase};

/// Objective-C class name of the web view subclass.
pub const WEB_VIEW_CLASS: &str = "SitewrapWebView";

/// WebKit class the web view derives from.
pub const WEB_VIEW_SUPERCLASS: &str = "WKWebView";

/// WKPreferences keys without public API, enabled through KVC.
const PRIVATE_PREFERENCES: [&str; 5] = [
    "developerExtrasEnabled",
    "acceleratedDrawingEnabled",
    "canvasUsesAcceleratedDrawing",
    "webGLEnabled",
    "offlineWebApplicationCacheEnabled",
];

// ============================================================================
// Class registration and creation
// ============================================================================

/// Register the SitewrapWebView class, once per process.
///
/// # Safety
/// Must be called from the main thread.
unsafe fn web_view_class() -> Result<&'static AnyClass, ShellError> {
    if let Ok(cls) = lookup_class(WEB_VIEW_CLASS) {
        return Ok(cls);
    }

    let superclass = lookup_class(WEB_VIEW_SUPERCLASS)?;
    let mut builder = ClassBuilder::new(c"SitewrapWebView", superclass)
        .ok_or_else(|| ShellError::Native(format!("cannot declare {WEB_VIEW_CLASS}")))?;

    register_ivars(&mut builder);
    register_methods(&mut builder);

    Ok(builder.register())
}

/// Register all instance variables for the web view.
///
/// # Safety
/// Must be called during class registration.
unsafe fn register_ivars(builder: &mut ClassBuilder) {
    builder.add_ivar::<*mut c_void>(c"_classifier"); // Box<DragClassifier>, process lifetime
    builder.add_ivar::<*const c_void>(c"_coordinator"); // &'static Coordinator
    builder.add_ivar::<id>(c"_lastLinkURL"); // retained NSString or nil
    builder.add_ivar::<id>(c"_titlebarStrip"); // SitewrapDragStrip or nil
    builder.add_ivar::<u8>(c"_followPageColor"); // bool as u8
}

/// Register all methods for the web view.
///
/// # Safety
/// Must be called during class registration.
unsafe fn register_methods(builder: &mut ClassBuilder) {
    // Pointer routing
    builder.add_method(
        sel!(mouseDown:),
        mouse_down as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(mouseDragged:),
        mouse_dragged as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(mouseUp:),
        mouse_up as unsafe extern "C-unwind" fn(_, _, _),
    );

    // Context menu
    builder.add_method(
        sel!(willOpenMenu:withEvent:),
        will_open_menu as unsafe extern "C-unwind" fn(_, _, _, _),
    );

    // Menu actions
    builder.add_method(
        sel!(menuOpenLink:),
        menu_open_link as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(menuGoBack:),
        menu_go_back as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(menuGoForward:),
        menu_go_forward as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(menuReload:),
        menu_reload as unsafe extern "C-unwind" fn(_, _, _),
    );
}

/// Build the WKWebViewConfiguration shared by the shell.
///
/// # Safety
/// Must be called from the main thread.
unsafe fn make_configuration(config: &AppConfig) -> Result<id, ShellError> {
    let config_cls = lookup_class("WKWebViewConfiguration")?;
    let web_config: id = msg_send![config_cls, new];
    if web_config == nil {
        return Err(ShellError::Native(
            "failed to create WKWebViewConfiguration".to_string(),
        ));
    }

    // Persistent cookies and cache
    let store_cls = lookup_class("WKWebsiteDataStore")?;
    let store: id = msg_send![store_cls, defaultDataStore];
    if store != nil {
        let _: () = msg_send![web_config, setWebsiteDataStore: store];
    }

    let user_agent = nsstring(&config.user_agent);
    let _: () = msg_send![web_config, setApplicationNameForUserAgent: &*user_agent];
    let _: () = msg_send![web_config, setAllowsAirPlayForMediaPlayback: YES];
    let _: () = msg_send![
        web_config,
        setMediaTypesRequiringUserActionForPlayback: WK_MEDIA_TYPES_NONE
    ];
    let _: () = msg_send![web_config, setSuppressesIncrementalRendering: NO];

    let prefs: id = msg_send![web_config, preferences];
    let _: () = msg_send![prefs, setJavaScriptCanOpenWindowsAutomatically: YES];

    // Private preferences: Web Inspector entry and GPU-backed rendering
    for key in PRIVATE_PREFERENCES {
        if !set_bool_value(prefs, key, true) {
            debug!(key, "preference not supported");
        }
    }

    let page_prefs: id = msg_send![web_config, defaultWebpagePreferences];
    if page_prefs != nil {
        let _: () = msg_send![page_prefs, setAllowsContentJavaScript: YES];
    }

    Ok(web_config)
}

/// Create the web view, wire its classifier and delegates, and start
/// loading the configured site.
///
/// # Safety
/// Must be called from the main thread. `navigation_delegate` must be a
/// SitewrapNavigationDelegate that outlives the web view.
pub unsafe fn create_web_view(
    frame: NSRect,
    config: &AppConfig,
    coordinator: &'static Coordinator,
    navigation_delegate: id,
) -> Result<id, ShellError> {
    let cls = web_view_class()?;
    let web_config = make_configuration(config)?;

    let view: id = msg_send![cls, alloc];
    let view: id = msg_send![view, initWithFrame: frame, configuration: web_config];
    if view == nil {
        return Err(ShellError::Native("failed to create WKWebView".to_string()));
    }
    let mask = NS_VIEW_WIDTH_SIZABLE | NS_VIEW_HEIGHT_SIZABLE;
    let _: () = msg_send![view, setAutoresizingMask: mask];

    let classifier = Box::new(DragClassifier::new(config.titlebar_band()));
    debug!(band = classifier.band().height(), "titlebar classifier attached");
    (*view).store_ivar::<*mut c_void>("_classifier", Box::into_raw(classifier) as *mut c_void);
    (*view).store_ivar::<*const c_void>(
        "_coordinator",
        coordinator as *const Coordinator as *const c_void,
    );
    (*view).store_ivar::<id>("_lastLinkURL", nil);
    (*view).store_ivar::<id>("_titlebarStrip", nil);
    set_bool_ivar(view, "_followPageColor", false);

    let _: () = msg_send![view, setAllowsBackForwardNavigationGestures: YES];
    if !set_bool_value(view, "drawsBackground", true) {
        debug!("drawsBackground not supported");
    }
    let _: () = msg_send![view, setWantsLayer: YES];
    let layer: id = msg_send![view, layer];
    if layer != nil {
        let _: () = msg_send![layer, setDrawsAsynchronously: YES];
    }
    let user_agent = nsstring(&config.user_agent);
    let _: () = msg_send![view, setCustomUserAgent: &*user_agent];

    // WebKit holds delegates weakly; the caller keeps navigation_delegate alive
    let _: () = msg_send![view, setUIDelegate: navigation_delegate];
    let _: () = msg_send![view, setNavigationDelegate: navigation_delegate];

    load_url(view, &config.target_url)?;
    Ok(view)
}

/// Load `url` with the "return cache data else load" policy.
///
/// # Safety
/// Must be called from the main thread with a valid WKWebView.
pub unsafe fn load_url(web_view: id, url: &str) -> Result<(), ShellError> {
    let url_string = nsstring(url);
    let nsurl: id = msg_send![get_class("NSURL"), URLWithString: &*url_string];
    if nsurl == nil {
        return Err(ShellError::InvalidUrl(url.to_string()));
    }

    let request: id = msg_send![
        get_class("NSURLRequest"),
        requestWithURL: nsurl,
        cachePolicy: NSURL_REQUEST_RETURN_CACHE_DATA_ELSE_LOAD,
        timeoutInterval: REQUEST_TIMEOUT_SECS
    ];
    if request == nil {
        return Err(ShellError::Native("failed to create NSURLRequest".to_string()));
    }

    info!(url, "loading");
    let _: id = msg_send![web_view, loadRequest: request];
    Ok(())
}

/// Attach the titlebar strip so the dispatcher can recolor it.
///
/// # Safety
/// `web_view` must be a SitewrapWebView; `strip` a SitewrapDragStrip or nil.
pub unsafe fn attach_titlebar_strip(web_view: id, strip: id, follow_page_color: bool) {
    (*web_view).store_ivar::<id>("_titlebarStrip", strip);
    set_bool_ivar(web_view, "_followPageColor", follow_page_color && strip != nil);
}

// ============================================================================
// SitewrapWebView methods (extern "C-unwind" for Objective-C runtime)
// ============================================================================

unsafe extern "C-unwind" fn mouse_down(this: &mut AnyObject, _cmd: Sel, event: id) {
    route_pointer_event(this as *mut _ as id, event, PointerPhase::Down);
}

unsafe extern "C-unwind" fn mouse_dragged(this: &mut AnyObject, _cmd: Sel, event: id) {
    route_pointer_event(this as *mut _ as id, event, PointerPhase::Moved);
}

unsafe extern "C-unwind" fn mouse_up(this: &mut AnyObject, _cmd: Sel, event: id) {
    route_pointer_event(this as *mut _ as id, event, PointerPhase::Up);
}

unsafe extern "C-unwind" fn will_open_menu(this: &mut AnyObject, _cmd: Sel, menu: id, event: id) {
    let view: id = this as *mut _ as id;
    prepare_context_menu(view, menu, event);
    let superclass = get_class(WEB_VIEW_SUPERCLASS);
    let _: () = msg_send![super(view, superclass), willOpenMenu: menu, withEvent: event];
}

/// Publish `event` and handle it right away; menu actions run on the main thread.
unsafe fn publish_and_dispatch(view: id, event: AppEvent) {
    publish(event);
    dispatch_events(view);
}

unsafe extern "C-unwind" fn menu_open_link(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    let view: id = this as *mut _ as id;
    let link: id = *(*view).load_ivar::<id>("_lastLinkURL");
    if let Some(url) = string_from_nsstring(link) {
        publish_and_dispatch(view, AppEvent::OpenExternal(url));
    }
}

unsafe extern "C-unwind" fn menu_go_back(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish_and_dispatch(this as *mut _ as id, AppEvent::GoBack);
}

unsafe extern "C-unwind" fn menu_go_forward(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish_and_dispatch(this as *mut _ as id, AppEvent::GoForward);
}

unsafe extern "C-unwind" fn menu_reload(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish_and_dispatch(this as *mut _ as id, AppEvent::Reload);
}
