//! Web view delegation.
//!
//! WebKit reports navigation decisions, new-window requests and page loads
//! through delegate callbacks. The platform layer translates those into the
//! calls of [`ShellDelegate`], implemented once by [`Coordinator`].

pub mod coordinator;
pub mod opener;
pub mod page_script;

pub use coordinator::Coordinator;
pub use opener::{is_external_url, LinkOpener, SystemBrowser};

use crate::titlebar::PointerGesture;

/// A navigation WebKit asks permission for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Requested URL, if WebKit provided one.
    pub url: Option<String>,
    /// True when the navigation has no target frame (`target="_blank"`).
    pub targets_new_window: bool,
}

impl NavigationRequest {
    pub fn new(url: Option<String>, targets_new_window: bool) -> Self {
        Self {
            url,
            targets_new_window,
        }
    }
}

/// Decision returned for a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPolicy {
    Cancel,
    Allow,
}

/// Callbacks from the web view and the titlebar classifier.
pub trait ShellDelegate {
    /// A titlebar press has become a window drag.
    fn on_gesture_start(&self, gesture: &PointerGesture);

    /// Decide whether a navigation may proceed inside the web view.
    fn on_navigation_request(&self, request: &NavigationRequest) -> NavigationPolicy;

    /// The page asked for a new window. No web view is ever created for it.
    fn on_new_window_request(&self, url: Option<&str>);

    /// A main-frame navigation finished.
    fn on_load_complete(&self, url: Option<&str>);
}
