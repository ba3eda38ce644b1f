//! Pure helpers and state machines used by the shell. Everything outside
//! `platform` is free of macOS FFI so tests can run as normal integration
//! tests.

pub mod delegate;
pub mod error;
pub mod events;
pub mod logging;
pub mod model;
pub mod platform;
pub mod titlebar;

// Re-export the types most callers need
pub use delegate::{Coordinator, ShellDelegate};
pub use error::ShellError;
pub use events::{AppEvent, EventBus, EventPublisher};
pub use model::AppConfig;
pub use titlebar::{DragClassifier, TitlebarBand};

/// Parse `#RRGGBB` or `#RRGGBBAA` into normalised floats [0..1].
pub fn parse_hex_color(s: &str) -> Option<(f64, f64, f64, f64)> {
    let t = s.trim();
    let t = t.strip_prefix('#').unwrap_or(t);
    let hex = t.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    if !hex.is_ascii() {
        return None;
    }
    let (r, g, b, a) = match hex.len() {
        6 => {
            let rv = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let gv = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let bv = u8::from_str_radix(&hex[4..6], 16).ok()?;
            (rv, gv, bv, 255u8)
        }
        8 => {
            let rv = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let gv = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let bv = u8::from_str_radix(&hex[4..6], 16).ok()?;
            let av = u8::from_str_radix(&hex[6..8], 16).ok()?;
            (rv, gv, bv, av)
        }
        _ => return None,
    };
    Some((
        r as f64 / 255.0,
        g as f64 / 255.0,
        b as f64 / 255.0,
        a as f64 / 255.0,
    ))
}

/// Parse a computed CSS color (`rgb(r, g, b)`, `rgba(r, g, b, a)` or hex)
/// into normalised floats [0..1].
///
/// Fully transparent colors return `None`: the page has no background of
/// its own and the caller should keep its current color.
pub fn parse_css_color(s: &str) -> Option<(f64, f64, f64, f64)> {
    let t = s.trim();
    if t.starts_with('#') {
        return parse_hex_color(t);
    }

    let args = t
        .strip_prefix("rgba(")
        .or_else(|| t.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let parts = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>();

    let channel = |p: &str| -> Option<f64> {
        let v = p.parse::<f64>().ok()?;
        v.is_finite().then(|| v.clamp(0.0, 255.0) / 255.0)
    };
    let (r, g, b, a) = match parts.as_slice() {
        [r, g, b] => (channel(r)?, channel(g)?, channel(b)?, 1.0),
        [r, g, b, a] => {
            let a = a.parse::<f64>().ok().filter(|a| a.is_finite())?;
            (channel(r)?, channel(g)?, channel(b)?, a.clamp(0.0, 1.0))
        }
        _ => return None,
    };

    if a == 0.0 {
        None
    } else {
        Some((r, g, b, a))
    }
}
