//! JavaScript snippets evaluated in the page.

/// Script returning the page background color as a CSS string, falling
/// back to the root element when the body is transparent.
pub const PAGE_BACKGROUND_SCRIPT: &str = r#"(function() {
    var transparent = function(c) { return !c || c === 'transparent' || c === 'rgba(0, 0, 0, 0)'; };
    var c = document.body ? getComputedStyle(document.body).backgroundColor : '';
    if (transparent(c)) { c = getComputedStyle(document.documentElement).backgroundColor; }
    return c || null;
})();"#;

/// Convert a view-space point to CSS viewport coordinates (origin top-left).
///
/// Unflipped views have their origin at the bottom-left and need the y
/// axis mirrored against the view height.
pub fn css_point(x: f64, y: f64, view_height: f64, flipped: bool) -> (f64, f64) {
    if flipped {
        (x, y)
    } else {
        (x, view_height - y)
    }
}

/// Script returning the `href` of the closest enclosing anchor at `(x, y)`
/// in CSS viewport coordinates, or `null`.
pub fn link_at_point_script(x: f64, y: f64) -> String {
    let x = if x.is_finite() { x } else { 0.0 };
    let y = if y.is_finite() { y } else { 0.0 };
    format!(
        r#"(function() {{
    var el = document.elementFromPoint({x}, {y});
    while (el && el.tagName !== 'A') {{ el = el.parentElement; }}
    return el && el.href ? el.href : null;
}})();"#
    )
}
