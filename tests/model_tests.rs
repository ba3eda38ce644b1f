//! Tests for the model layer (AppConfig).
//!
//! Note: We intentionally use `Default::default()` then field reassignment
//! to test individual field validation. This is clearer than struct update syntax.
#![allow(clippy::field_reassign_with_default)]

use sitewrap::model::constants::*;
use sitewrap::model::AppConfig;

// === Default Values Tests ===

#[test]
fn app_config_default_url() {
    let config = AppConfig::default();
    assert_eq!(config.target_url, DEFAULT_TARGET_URL);
    assert!(config.has_loadable_url());
}

#[test]
fn app_config_default_titlebar() {
    let config = AppConfig::default();
    assert_eq!(config.titlebar_color, DEFAULT_TITLEBAR_COLOR);
    assert_eq!(config.titlebar_title, DEFAULT_TITLEBAR_TITLE);
    assert!(config.extra_titlebar);
    assert!(!config.extra_titlebar_custom_color);
}

#[test]
fn app_config_default_user_agent_is_safari() {
    let config = AppConfig::default();
    assert!(config.user_agent.contains("Safari"));
}

// === Validation Tests ===

#[test]
fn validate_trims_strings() {
    let mut config = AppConfig::default();
    config.target_url = "  https://example.com  ".to_string();
    config.titlebar_height = " 50px ".to_string();
    config.validate();
    assert_eq!(config.target_url, "https://example.com");
    assert_eq!(config.titlebar_band().height(), 50.0);
}

#[test]
fn validate_restores_invalid_color() {
    let mut config = AppConfig::default();
    config.titlebar_color = "blue".to_string();
    config.validate();
    assert_eq!(config.titlebar_color, DEFAULT_TITLEBAR_COLOR);
}

#[test]
fn validate_keeps_valid_color() {
    let mut config = AppConfig::default();
    config.titlebar_color = "#123456".to_string();
    config.validate();
    assert_eq!(config.titlebar_color, "#123456");
}

#[test]
fn validate_empty_title_falls_back_to_app_name() {
    let mut config = AppConfig::default();
    config.titlebar_title = "   ".to_string();
    config.validate();
    assert_eq!(config.titlebar_title, config.app_name);
}

// === Derived Values Tests ===

#[test]
fn unparseable_height_uses_default_band() {
    let mut config = AppConfig::default();
    config.titlebar_height = "tall".to_string();
    assert_eq!(config.titlebar_band().height(), DEFAULT_TITLEBAR_HEIGHT);
}

#[test]
fn titlebar_rgba_falls_back_to_black() {
    let mut config = AppConfig::default();
    config.titlebar_color = "nope".to_string();
    assert_eq!(config.titlebar_rgba(), FALLBACK_TITLEBAR_RGBA);
}

#[test]
fn titlebar_rgba_parses_hex() {
    let config = AppConfig::default();
    let (r, g, b, a) = config.titlebar_rgba();
    assert_eq!((r, b, a), (1.0, 0.0, 1.0));
    assert!((g - 34.0 / 255.0).abs() < 1e-6);
}

#[test]
fn non_web_urls_are_not_loadable() {
    let mut config = AppConfig::default();
    config.target_url = String::new();
    assert!(!config.has_loadable_url());
    config.target_url = "file:///etc/hosts".to_string();
    assert!(!config.has_loadable_url());
    config.target_url = "http://localhost:8080".to_string();
    assert!(config.has_loadable_url());
}
