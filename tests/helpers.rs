use sitewrap::titlebar::{is_in_band, parse_length};
use sitewrap::{parse_css_color, parse_hex_color};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn parse_hex_rgb() {
    let (r, g, b, a) = parse_hex_color("#FF0080").expect("valid rgb hex");
    assert!(approx_eq(r, 1.0));
    assert!(approx_eq(g, 0.0));
    assert!(approx_eq(b, 128.0 / 255.0));
    assert!(approx_eq(a, 1.0));
}

#[test]
fn parse_hex_rgba() {
    let (_, _, _, a) = parse_hex_color("#00000080").expect("valid rgba hex");
    assert!(approx_eq(a, 128.0 / 255.0));
}

#[test]
fn parse_hex_without_hash_and_lowercase() {
    let (r, g, b, _) = parse_hex_color("ff2200").expect("valid hex");
    assert!(approx_eq(r, 1.0));
    assert!(approx_eq(g, 34.0 / 255.0));
    assert!(approx_eq(b, 0.0));
}

#[test]
fn parse_hex_rejects_bad_input() {
    assert!(parse_hex_color("#GG0000").is_none());
    assert!(parse_hex_color("#FFF").is_none());
    assert!(parse_hex_color("").is_none());
    assert!(parse_hex_color("#ÿÿÿ").is_none());
}

#[test]
fn parse_css_rgb() {
    let (r, g, b, a) = parse_css_color("rgb(255, 0, 128)").expect("valid rgb()");
    assert!(approx_eq(r, 1.0));
    assert!(approx_eq(g, 0.0));
    assert!(approx_eq(b, 128.0 / 255.0));
    assert!(approx_eq(a, 1.0));
}

#[test]
fn parse_css_rgba_keeps_alpha() {
    let (_, _, _, a) = parse_css_color("rgba(10, 20, 30, 0.5)").expect("valid rgba()");
    assert!(approx_eq(a, 0.5));
}

#[test]
fn parse_css_transparent_is_none() {
    assert!(parse_css_color("rgba(0, 0, 0, 0)").is_none());
    assert!(parse_css_color("transparent").is_none());
}

#[test]
fn parse_css_accepts_hex() {
    assert!(parse_css_color("#ffffff").is_some());
}

#[test]
fn parse_css_rejects_garbage() {
    assert!(parse_css_color("rgb(1, 2)").is_none());
    assert!(parse_css_color("rgb(a, b, c)").is_none());
    assert!(parse_css_color("hsl(0, 0%, 0%)").is_none());
}

#[test]
fn parse_length_ignores_unit() {
    assert_eq!(parse_length("60px"), Some(60.0));
    assert_eq!(parse_length(" 30 "), Some(30.0));
    assert_eq!(parse_length("12.5pt"), Some(12.5));
}

#[test]
fn parse_length_rejects_non_numbers() {
    assert_eq!(parse_length("px"), None);
    assert_eq!(parse_length(""), None);
    assert_eq!(parse_length("-4px"), None);
}

#[test]
fn band_boundary_is_inclusive() {
    assert!(is_in_band(740.0, 800.0, 60.0));
    assert!(!is_in_band(739.9, 800.0, 60.0));
    assert!(is_in_band(800.0, 800.0, 60.0));
}

#[test]
fn zero_band_only_contains_top_edge() {
    assert!(is_in_band(800.0, 800.0, 0.0));
    assert!(!is_in_band(799.0, 800.0, 0.0));
}
