//! Event dispatcher for handling application events.
//!
//! The dispatcher receives events from the event bus and executes
//! the corresponding actions on the web view. Menu actions and the
//! navigation delegate publish an event and then dispatch right away,
//! so every event is handled on the main thread that produced it.
//!
//! # Architecture
//!
//! ```text
//! publish() → EventBus → dispatch_events() → web view / browser
//! ```

use std::ffi::c_void;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace};

use crate::delegate::Coordinator;
use crate::events::{drain_events, AppEvent};
use crate::platform::macos::ffi::bridge::{get_bool_ivar, id, msg_send, nil, ObjectExt};
use crate::platform::macos::ui::drag_strip::follow_page_background;

/// Guard against re-entrant dispatch.
///
/// `goBack` and friends can synchronously call back into the navigation
/// delegate, which dispatches again. The nested call returns immediately
/// and the outer loop picks up whatever it published.
static DISPATCH_GUARD: AtomicBool = AtomicBool::new(false);

/// Dispatch all pending events from the global event bus.
///
/// # Safety
///
/// Must be called from the main thread. `web_view` must be a SitewrapWebView.
pub unsafe fn dispatch_events(web_view: id) {
    if DISPATCH_GUARD
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        trace!("dispatch already running");
        return;
    }

    // Handling an event can publish more; keep draining until quiet
    loop {
        let events = drain_events();
        if events.is_empty() {
            break;
        }
        for event in &events {
            dispatch_single_event(web_view, event);
        }
    }

    DISPATCH_GUARD.store(false, Ordering::SeqCst);
}

/// Dispatch a single event.
///
/// # Safety
///
/// Must be called from the main thread. `web_view` must be a SitewrapWebView.
unsafe fn dispatch_single_event(web_view: id, event: &AppEvent) {
    debug!(event = event.description(), "dispatch");
    match event {
        AppEvent::GoBack => {
            let can: bool = msg_send![web_view, canGoBack];
            if can {
                let _: id = msg_send![web_view, goBack];
            }
        }

        AppEvent::GoForward => {
            let can: bool = msg_send![web_view, canGoForward];
            if can {
                let _: id = msg_send![web_view, goForward];
            }
        }

        AppEvent::Reload => {
            let _: id = msg_send![web_view, reload];
        }

        AppEvent::OpenExternal(url) => {
            let ptr = *(*web_view).load_ivar::<*const c_void>("_coordinator");
            match (ptr as *const Coordinator).as_ref() {
                Some(coordinator) => {
                    coordinator.open_external(url);
                }
                None => debug!(url = url.as_str(), "no coordinator, link dropped"),
            }
        }

        AppEvent::LoadFinished(_) => {
            if get_bool_ivar(web_view, "_followPageColor") {
                let strip = *(*web_view).load_ivar::<id>("_titlebarStrip");
                if strip != nil {
                    follow_page_background(web_view, strip);
                }
            }
        }
    }
}
