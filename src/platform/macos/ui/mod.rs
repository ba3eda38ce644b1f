//! User interface components.
//!
//! - web_view.rs: SitewrapWebView, the WKWebView subclass hosting the site
//! - navigation.rs: WebKit UI and navigation delegate
//! - context_menu.rs: link and history context menu
//! - drag_strip.rs: extra titlebar strip
//! - main_menu.rs: application menu bar
//! - window.rs: main window layout

pub mod context_menu;
pub mod drag_strip;
pub mod main_menu;
pub mod navigation;
pub mod web_view;
pub mod window;

pub use main_menu::install_main_menu;
pub use navigation::create_navigation_delegate;
pub use web_view::{create_web_view, load_url};
pub use window::create_main_window;
