//! Tracing subscriber setup.

use std::str::FromStr;

use tracing::Level;

use crate::model::constants::LOG_ENV_VAR;

/// Level used when the environment does not select one.
pub const DEFAULT_LEVEL: Level = Level::INFO;

/// Parse a level name such as `debug` or `WARN`, falling back to [`DEFAULT_LEVEL`].
pub fn level_from(value: Option<&str>) -> Level {
    value
        .and_then(|v| Level::from_str(v.trim()).ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Initialize a compact stderr subscriber. The level comes from
/// `SITEWRAP_LOG`. Safe to call multiple times; later calls are no-ops.
pub fn init() {
    let level = level_from(std::env::var(LOG_ENV_VAR).ok().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_known_names() {
        assert_eq!(level_from(Some("debug")), Level::DEBUG);
        assert_eq!(level_from(Some(" WARN ")), Level::WARN);
        assert_eq!(level_from(Some("trace")), Level::TRACE);
    }

    #[test]
    fn test_level_from_falls_back() {
        assert_eq!(level_from(None), DEFAULT_LEVEL);
        assert_eq!(level_from(Some("loud")), DEFAULT_LEVEL);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        init();
    }
}
