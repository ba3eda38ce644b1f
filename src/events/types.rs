//! Application events for inter-module communication.
//!
//! These events represent high-level shell actions that can be published
//! by menus and web view delegates and handled by the event dispatcher.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

/// Application-level events for decoupled communication between modules.
///
/// Events flow from producers (context menu, main menu, navigation
/// delegate) through the EventBus to the dispatcher, which executes the
/// appropriate web view actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Navigation Commands ===
    /// Go back in the web view's history
    GoBack,

    /// Go forward in the web view's history
    GoForward,

    /// Reload the current page (Cmd+R)
    Reload,

    // === External Links ===
    /// Open a URL in the user's default browser
    OpenExternal(String),

    // === Page Lifecycle ===
    /// A main-frame navigation finished loading
    LoadFinished(Option<String>),
}

impl AppEvent {
    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::GoBack => "Go back",
            AppEvent::GoForward => "Go forward",
            AppEvent::Reload => "Reload page",
            AppEvent::OpenExternal(_) => "Open link in default browser",
            AppEvent::LoadFinished(_) => "Page finished loading",
        }
    }
}
