//! Titlebar band geometry.
//!
//! The band is the strip at the top of the window that acts as a drag
//! handle. Coordinates are in window space with the origin at the
//! bottom-left, as AppKit delivers them.

use tracing::warn;

use crate::model::constants::DEFAULT_TITLEBAR_HEIGHT;

/// Returns true if `pointer_y` lies inside a band of `band_height` at the
/// top of a window `window_height` tall.
///
/// The lower edge belongs to the band.
pub fn is_in_band(pointer_y: f64, window_height: f64, band_height: f64) -> bool {
    pointer_y >= window_height - band_height
}

/// Parse a length such as `"60px"`, `"60"` or `"12.5 px"` into points.
///
/// Any trailing alphabetic unit is ignored. Returns `None` for empty,
/// non-numeric, negative or non-finite values.
pub fn parse_length(s: &str) -> Option<f64> {
    let number = s.trim().trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let value = number.trim().parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Height of the draggable band, fixed for the window's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitlebarBand {
    height: f64,
}

impl TitlebarBand {
    /// Create a band of `height` points.
    ///
    /// Negative or non-finite heights are replaced by the default.
    pub fn new(height: f64) -> Self {
        if height.is_finite() && height >= 0.0 {
            Self { height }
        } else {
            warn!(height, "invalid titlebar height, using default");
            Self::default()
        }
    }

    /// Create a band from a configured height string like `"60px"`.
    ///
    /// Falls back to [`DEFAULT_TITLEBAR_HEIGHT`] when the string does not parse.
    pub fn from_config(value: &str) -> Self {
        match parse_length(value) {
            Some(height) => Self { height },
            None => {
                warn!(
                    value,
                    default = DEFAULT_TITLEBAR_HEIGHT,
                    "unparseable titlebar height, using default"
                );
                Self::default()
            }
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns true if `pointer_y` falls inside this band for a window of `window_height`.
    pub fn contains(&self, pointer_y: f64, window_height: f64) -> bool {
        is_in_band(pointer_y, window_height, self.height)
    }
}

impl Default for TitlebarBand {
    fn default() -> Self {
        Self {
            height: DEFAULT_TITLEBAR_HEIGHT,
        }
    }
}
