//! macOS-specific entry point and application setup.
//!
//! The web view, drag strip and delegates are implemented under
//! platform/macos/ui; this module only wires them together.

use tracing::info;

use sitewrap::delegate::{Coordinator, SystemBrowser};
use sitewrap::events;
use sitewrap::platform::macos::app::create_app_delegate;
use sitewrap::platform::macos::ffi::bridge::{autoreleasepool, id, msg_send, NSApp, YES};
use sitewrap::platform::macos::ffi::NS_ACTIVATION_POLICY_REGULAR;
use sitewrap::platform::macos::storage::load_config;
use sitewrap::platform::macos::ui::{
    create_main_window, create_navigation_delegate, install_main_menu,
};
use sitewrap::ShellError;

/// Main entry point for macOS. Returns when the application terminates.
pub fn run() -> Result<(), ShellError> {
    autoreleasepool(|| unsafe {
        let app = NSApp();
        let _: bool = msg_send![app, setActivationPolicy: NS_ACTIVATION_POLICY_REGULAR];

        let config = load_config();
        if !config.has_loadable_url() {
            return Err(ShellError::InvalidUrl(config.target_url));
        }

        let _delegate: id = create_app_delegate(app)?;
        let coordinator = leak_coordinator();
        let navigation_delegate = create_navigation_delegate(coordinator)?;
        let web_view = create_main_window(&config, coordinator, navigation_delegate)?;
        install_main_menu(&config.app_name, web_view);

        let _: () = msg_send![app, activateIgnoringOtherApps: YES];
        info!(app = config.app_name.as_str(), "running");
        let _: () = msg_send![app, run];
        Ok(())
    })
}

/// The coordinator lives for the rest of the process; Objective-C objects
/// hold raw pointers to it.
fn leak_coordinator() -> &'static Coordinator {
    let mut coordinator = Coordinator::new(Box::new(SystemBrowser));
    if let Some(publisher) = events::publisher() {
        coordinator = coordinator.with_publisher(publisher);
    }
    Box::leak(Box::new(coordinator))
}
