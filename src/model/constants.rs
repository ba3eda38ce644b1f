//! Configuration constants and default values.
//!
//! This module contains all application constants including the shipped
//! site configuration, titlebar geometry, NSUserDefaults keys and the
//! strings shown in menus.

// === Shipped Site Configuration ===

/// Default application name.
pub const DEFAULT_APP_NAME: &str = "sitewrap";

/// Default website wrapped by the shell.
pub const DEFAULT_TARGET_URL: &str = "https://notebooklm.google.com";

/// Default titlebar color (hex).
pub const DEFAULT_TITLEBAR_COLOR: &str = "#ff2200";

/// Default window title. Hidden by the transparent titlebar but used by
/// Mission Control and the Window menu.
pub const DEFAULT_TITLEBAR_TITLE: &str = "Google App";

/// Default titlebar height string, as written in configuration.
pub const DEFAULT_TITLEBAR_HEIGHT_STR: &str = "30px";

/// Full Safari user agent, required by sites that gate sign-in on the browser.
pub const SAFARI_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15";

// === Titlebar Geometry ===

/// Band height in points used when the configured height cannot be parsed.
pub const DEFAULT_TITLEBAR_HEIGHT: f64 = 40.0;

/// Minimum distance in points a titlebar press must travel to become a window drag.
pub const DRAG_THRESHOLD: f64 = 5.0;

/// Fallback titlebar color (R, G, B, A) when the configured hex is invalid: opaque black.
pub const FALLBACK_TITLEBAR_RGBA: (f64, f64, f64, f64) = (0.0, 0.0, 0.0, 1.0);

// === Window Defaults ===

/// Initial content width in points.
pub const DEFAULT_WINDOW_WIDTH: f64 = 1200.0;

/// Initial content height in points.
pub const DEFAULT_WINDOW_HEIGHT: f64 = 800.0;

/// Minimum content width in points.
pub const MIN_WINDOW_WIDTH: f64 = 480.0;

/// Minimum content height in points.
pub const MIN_WINDOW_HEIGHT: f64 = 320.0;

/// Timeout for the initial page request, in seconds.
pub const REQUEST_TIMEOUT_SECS: f64 = 60.0;

// === NSUserDefaults Keys ===

/// Key for the target URL override.
pub const PREF_TARGET_URL: &str = "targetURL";

/// Key for the titlebar height override (e.g. "60px").
pub const PREF_TITLEBAR_HEIGHT: &str = "titlebarHeight";

/// Key for the titlebar color override (hex).
pub const PREF_TITLEBAR_COLOR: &str = "titlebarColor";

/// Key for the window title override.
pub const PREF_TITLEBAR_TITLE: &str = "titlebarTitle";

/// Key for toggling the extra titlebar strip.
pub const PREF_EXTRA_TITLEBAR: &str = "extraTitlebar";

/// Key for using the configured color on the strip instead of the page background.
pub const PREF_EXTRA_TITLEBAR_CUSTOM_COLOR: &str = "extraTitlebarCustomColor";

// === Menu Titles ===

/// Context menu item that opens the clicked link externally.
pub const MENU_OPEN_IN_BROWSER: &str = "Open in Default Browser";

/// Context/main menu item for history back.
pub const MENU_BACK: &str = "Back";

/// Context/main menu item for history forward.
pub const MENU_FORWARD: &str = "Forward";

/// Context/main menu item for reloading the page.
pub const MENU_RELOAD: &str = "Reload";

// === Logging ===

/// Environment variable selecting the log level.
pub const LOG_ENV_VAR: &str = "SITEWRAP_LOG";
