//! SitewrapNavigationDelegate: WKUIDelegate and WKNavigationDelegate.
//!
//! Every callback is translated into a [`ShellDelegate`] call on the
//! process-wide [`Coordinator`]; events the coordinator publishes are
//! dispatched before returning to WebKit.

use std::ffi::c_void;

use tracing::warn;

use crate::delegate::{Coordinator, NavigationPolicy, NavigationRequest, ShellDelegate};
use crate::error::ShellError;
use crate::platform::macos::ffi::bridge::{
    get_class, id, lookup_class, msg_send, nil, sel, string_from_nsurl, AnyClass, AnyObject,
    AnyProtocol, Block, ClassBuilder, ObjectExt, Sel,
};
use crate::platform::macos::ffi::{WK_NAVIGATION_POLICY_ALLOW, WK_NAVIGATION_POLICY_CANCEL};
use crate::platform::macos::handlers::dispatch_events;

/// Objective-C class name of the delegate.
pub const NAVIGATION_DELEGATE_CLASS: &str = "SitewrapNavigationDelegate";

/// Register the delegate class, once per process.
///
/// # Safety
/// Must be called from the main thread.
unsafe fn navigation_delegate_class() -> Result<&'static AnyClass, ShellError> {
    if let Ok(cls) = lookup_class(NAVIGATION_DELEGATE_CLASS) {
        return Ok(cls);
    }

    let mut builder = ClassBuilder::new(c"SitewrapNavigationDelegate", get_class("NSObject"))
        .ok_or_else(|| ShellError::Native(format!("cannot declare {NAVIGATION_DELEGATE_CLASS}")))?;

    for protocol in [c"WKUIDelegate", c"WKNavigationDelegate"] {
        match AnyProtocol::get(protocol) {
            Some(p) => {
                builder.add_protocol(p);
            }
            None => warn!(protocol = ?protocol, "protocol not found"),
        }
    }

    builder.add_ivar::<*const c_void>(c"_coordinator");

    builder.add_method(
        sel!(webView:createWebViewWithConfiguration:forNavigationAction:windowFeatures:),
        create_web_view as unsafe extern "C-unwind" fn(_, _, _, _, _, _) -> _,
    );
    builder.add_method(
        sel!(webView:decidePolicyForNavigationAction:decisionHandler:),
        decide_policy as unsafe extern "C-unwind" fn(_, _, _, _, _),
    );
    builder.add_method(
        sel!(webView:didFinishNavigation:),
        did_finish_navigation as unsafe extern "C-unwind" fn(_, _, _, _),
    );

    Ok(builder.register())
}

/// Create the delegate object bound to `coordinator`.
///
/// The returned object is owned by the caller and must outlive every web
/// view using it.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn create_navigation_delegate(
    coordinator: &'static Coordinator,
) -> Result<id, ShellError> {
    let cls = navigation_delegate_class()?;
    let delegate: id = msg_send![cls, new];
    if delegate == nil {
        return Err(ShellError::Native(
            "failed to create navigation delegate".to_string(),
        ));
    }
    (*delegate).store_ivar::<*const c_void>(
        "_coordinator",
        coordinator as *const Coordinator as *const c_void,
    );
    Ok(delegate)
}

/// The coordinator bound to a delegate object.
///
/// # Safety
/// `this` must be a SitewrapNavigationDelegate.
unsafe fn coordinator_of(this: &AnyObject) -> Option<&'static Coordinator> {
    let ptr = *this.load_ivar::<*const c_void>("_coordinator");
    (ptr as *const Coordinator).as_ref()
}

/// URL of a WKNavigationAction's request.
///
/// # Safety
/// `action` must be a WKNavigationAction.
unsafe fn action_url(action: id) -> Option<String> {
    let request: id = msg_send![action, request];
    if request == nil {
        return None;
    }
    let url: id = msg_send![request, URL];
    string_from_nsurl(url)
}

// ============================================================================
// Delegate methods (extern "C-unwind" for Objective-C runtime)
// ============================================================================

unsafe extern "C-unwind" fn create_web_view(
    this: &mut AnyObject,
    _cmd: Sel,
    web_view: id,
    _configuration: id,
    action: id,
    _features: id,
) -> id {
    if let Some(coordinator) = coordinator_of(this) {
        coordinator.on_new_window_request(action_url(action).as_deref());
        dispatch_events(web_view);
    }
    nil
}

unsafe extern "C-unwind" fn decide_policy(
    this: &mut AnyObject,
    _cmd: Sel,
    web_view: id,
    action: id,
    decision_handler: &Block<dyn Fn(isize)>,
) {
    let policy = match coordinator_of(this) {
        Some(coordinator) => {
            let target_frame: id = msg_send![action, targetFrame];
            let request = NavigationRequest::new(action_url(action), target_frame == nil);
            let policy = coordinator.on_navigation_request(&request);
            dispatch_events(web_view);
            policy
        }
        None => NavigationPolicy::Allow,
    };

    let raw = match policy {
        NavigationPolicy::Cancel => WK_NAVIGATION_POLICY_CANCEL,
        NavigationPolicy::Allow => WK_NAVIGATION_POLICY_ALLOW,
    };
    decision_handler.call((raw,));
}

unsafe extern "C-unwind" fn did_finish_navigation(
    this: &mut AnyObject,
    _cmd: Sel,
    web_view: id,
    _navigation: id,
) {
    if let Some(coordinator) = coordinator_of(this) {
        let url: id = msg_send![web_view, URL];
        coordinator.on_load_complete(string_from_nsurl(url).as_deref());
        dispatch_events(web_view);
    }
}
