//! Application configuration (pure Rust, no FFI).
//!
//! This module defines the configuration passed into the window and web
//! view constructors at startup. Values can be overridden from
//! NSUserDefaults by the platform layer.

use tracing::warn;

use super::constants::*;
use crate::parse_hex_color;
use crate::titlebar::TitlebarBand;

/// Complete shell configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Application name, used in the main menu.
    pub app_name: String,
    /// Website loaded in the web view.
    pub target_url: String,
    /// Titlebar color as a hex string.
    pub titlebar_color: String,
    /// Window title.
    pub titlebar_title: String,
    /// Show a colored strip of `titlebar_height` above the web view.
    ///
    /// When false the web view extends under the transparent titlebar and
    /// the top band of the web view acts as the drag handle.
    pub extra_titlebar: bool,
    /// Titlebar height with unit, e.g. "30px".
    pub titlebar_height: String,
    /// Paint the strip with `titlebar_color` instead of the page background.
    pub extra_titlebar_custom_color: bool,
    /// User agent presented to the site.
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            target_url: DEFAULT_TARGET_URL.to_string(),
            titlebar_color: DEFAULT_TITLEBAR_COLOR.to_string(),
            titlebar_title: DEFAULT_TITLEBAR_TITLE.to_string(),
            extra_titlebar: true,
            titlebar_height: DEFAULT_TITLEBAR_HEIGHT_STR.to_string(),
            extra_titlebar_custom_color: false,
            user_agent: SAFARI_USER_AGENT.to_string(),
        }
    }
}

impl AppConfig {
    /// Normalises values in place.
    ///
    /// Trims the URL and strings, restores the default color when the
    /// configured one is not valid hex, and falls back to the app name for
    /// an empty title.
    pub fn validate(&mut self) {
        self.target_url = self.target_url.trim().to_string();
        self.titlebar_height = self.titlebar_height.trim().to_string();
        self.titlebar_title = self.titlebar_title.trim().to_string();

        if parse_hex_color(&self.titlebar_color).is_none() {
            warn!(color = %self.titlebar_color, "invalid titlebar color, using default");
            self.titlebar_color = DEFAULT_TITLEBAR_COLOR.to_string();
        }
        if self.titlebar_title.is_empty() {
            self.titlebar_title = self.app_name.clone();
        }
    }

    /// The draggable band derived from `titlebar_height`.
    pub fn titlebar_band(&self) -> TitlebarBand {
        TitlebarBand::from_config(&self.titlebar_height)
    }

    /// Titlebar color as normalised RGBA, opaque black if unparseable.
    pub fn titlebar_rgba(&self) -> (f64, f64, f64, f64) {
        parse_hex_color(&self.titlebar_color).unwrap_or(FALLBACK_TITLEBAR_RGBA)
    }

    /// Returns true if the strip should follow the page background color.
    pub fn strip_follows_page(&self) -> bool {
        self.extra_titlebar && !self.extra_titlebar_custom_color
    }

    /// Returns true if the target URL can be loaded by the web view.
    pub fn has_loadable_url(&self) -> bool {
        let url = self.target_url.trim();
        url.starts_with("https://") || url.starts_with("http://")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_band_comes_from_height_string() {
        let config = AppConfig::default();
        assert_eq!(config.titlebar_band().height(), 30.0);
    }

    #[test]
    fn test_strip_follows_page_only_with_extra_titlebar() {
        let mut config = AppConfig::default();
        assert!(config.strip_follows_page());

        config.extra_titlebar_custom_color = true;
        assert!(!config.strip_follows_page());

        config.extra_titlebar = false;
        config.extra_titlebar_custom_color = false;
        assert!(!config.strip_follows_page());
    }
}
