//! Configuration overrides from NSUserDefaults.
//!
//! Every key is optional; absent keys keep the built-in value. Users set
//! them with `defaults write <bundle-id> targetURL https://...`.

use tracing::{debug, info};

use crate::model::constants::*;
use crate::model::AppConfig;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring, string_from_nsstring,
};

/// The standard user defaults object.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
unsafe fn user_defaults() -> id {
    msg_send![get_class("NSUserDefaults"), standardUserDefaults]
}

/// Reads a string from NSUserDefaults, `None` if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_string(key: &str) -> Option<String> {
    let ud = user_defaults();
    let k = nsstring(key);
    let obj: id = msg_send![ud, stringForKey: &*k];
    if obj == nil {
        None
    } else {
        string_from_nsstring(obj)
    }
}

/// Reads a boolean from NSUserDefaults, `None` if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_bool(key: &str) -> Option<bool> {
    let ud = user_defaults();
    let k = nsstring(key);
    let obj: id = msg_send![ud, objectForKey: &*k];
    if obj == nil {
        None
    } else {
        let val: bool = msg_send![ud, boolForKey: &*k];
        Some(val)
    }
}

/// Apply any NSUserDefaults overrides to `config`.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn apply_overrides(config: &mut AppConfig) {
    let strings: [(&str, &mut String); 4] = [
        (PREF_TARGET_URL, &mut config.target_url),
        (PREF_TITLEBAR_HEIGHT, &mut config.titlebar_height),
        (PREF_TITLEBAR_COLOR, &mut config.titlebar_color),
        (PREF_TITLEBAR_TITLE, &mut config.titlebar_title),
    ];
    for (key, field) in strings {
        if let Some(value) = prefs_get_string(key) {
            debug!(key, value = value.as_str(), "preference override");
            *field = value;
        }
    }

    if let Some(value) = prefs_get_bool(PREF_EXTRA_TITLEBAR) {
        debug!(key = PREF_EXTRA_TITLEBAR, value, "preference override");
        config.extra_titlebar = value;
    }
    if let Some(value) = prefs_get_bool(PREF_EXTRA_TITLEBAR_CUSTOM_COLOR) {
        debug!(key = PREF_EXTRA_TITLEBAR_CUSTOM_COLOR, value, "preference override");
        config.extra_titlebar_custom_color = value;
    }
}

/// Loads the complete configuration: built-in values, then overrides.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn load_config() -> AppConfig {
    let mut config = AppConfig::default();
    apply_overrides(&mut config);
    config.validate();
    info!(
        url = config.target_url.as_str(),
        titlebar_height = config.titlebar_height.as_str(),
        extra_titlebar = config.extra_titlebar,
        "configuration loaded"
    );
    config
}
