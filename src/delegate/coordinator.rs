//! The single object answering all web view delegate callbacks.

use tracing::{debug, info, warn};

use super::opener::{is_external_url, LinkOpener};
use super::{NavigationPolicy, NavigationRequest, ShellDelegate};
use crate::events::{AppEvent, EventPublisher};
use crate::titlebar::PointerGesture;

/// Keeps the site inside the shell and sends everything that wants a new
/// window to the default browser.
pub struct Coordinator {
    opener: Box<dyn LinkOpener>,
    publisher: Option<EventPublisher>,
}

impl Coordinator {
    pub fn new(opener: Box<dyn LinkOpener>) -> Self {
        Self {
            opener,
            publisher: None,
        }
    }

    /// Publish page lifecycle events to `publisher`.
    pub fn with_publisher(mut self, publisher: EventPublisher) -> Self {
        self.publisher = Some(publisher);
        self
    }

    /// Open `url` externally if it is a web or mail link.
    ///
    /// Returns true if the opener accepted it.
    pub fn open_external(&self, url: &str) -> bool {
        if !is_external_url(url) {
            debug!(url, "not opening non-web link externally");
            return false;
        }
        match self.opener.open(url) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "external open failed");
                false
            }
        }
    }
}

impl ShellDelegate for Coordinator {
    fn on_gesture_start(&self, gesture: &PointerGesture) {
        debug!(
            x = gesture.origin().x,
            y = gesture.origin().y,
            displacement = gesture.displacement(),
            "window drag started"
        );
    }

    fn on_navigation_request(&self, request: &NavigationRequest) -> NavigationPolicy {
        if !request.targets_new_window {
            return NavigationPolicy::Allow;
        }
        match request.url.as_deref() {
            Some(url) => {
                info!(url, "target=_blank link, sending to default browser");
                self.open_external(url);
                NavigationPolicy::Cancel
            }
            None => NavigationPolicy::Allow,
        }
    }

    fn on_new_window_request(&self, url: Option<&str>) {
        match url {
            Some(url) => {
                info!(url, "new window request, sending to default browser");
                self.open_external(url);
            }
            None => debug!("new window request without URL ignored"),
        }
    }

    fn on_load_complete(&self, url: Option<&str>) {
        info!(url = url.unwrap_or("<none>"), "page loaded");
        if let Some(publisher) = &self.publisher {
            publisher.publish(AppEvent::LoadFinished(url.map(str::to_string)));
        }
    }
}
