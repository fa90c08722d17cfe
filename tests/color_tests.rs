use approx::assert_relative_eq;
use brandscale::color::{
    OklchColor, angular_distance, normalize_hex, p3_of_hex, signed_hue_delta, srgb_of_hex,
    to_oklch,
};

#[test]
fn test_parse_six_digit_hex() {
    let color = to_oklch("#30a46c").unwrap();
    assert!(color.l > 0.5 && color.l < 0.8);
    assert!(color.c > 0.05);
}

#[test]
fn test_parse_three_digit_hex_expands() {
    let short = to_oklch("#f00").unwrap();
    let long = to_oklch("#ff0000").unwrap();
    assert_relative_eq!(short.l, long.l, epsilon = 1e-9);
    assert_relative_eq!(short.h, long.h, epsilon = 1e-9);
}

#[test]
fn test_parse_eight_digit_hex_carries_alpha() {
    let color = to_oklch("#ff000080").unwrap();
    assert_relative_eq!(color.alpha, 128.0 / 255.0, epsilon = 1e-9);
}

#[test]
fn test_parse_rgb_function() {
    let rgb = to_oklch("rgb(255, 0, 0)").unwrap();
    let hex = to_oklch("#ff0000").unwrap();
    assert_relative_eq!(rgb.l, hex.l, epsilon = 1e-9);
}

#[test]
fn test_parse_named_color() {
    assert!(to_oklch("rebeccapurple").is_some());
    assert!(to_oklch("tomato").is_some());
}

#[test]
fn test_parse_failure_is_none() {
    assert!(to_oklch("").is_none());
    assert!(to_oklch("#zzzzzz").is_none());
    assert!(to_oklch("nonsense").is_none());
}

#[test]
fn test_achromatic_pins_hue_to_zero() {
    let gray = to_oklch("#777777").unwrap();
    assert_eq!(gray.c, 0.0);
    assert_eq!(gray.h, 0.0);
}

#[test]
fn test_hex_round_trip() {
    for hex in ["#30a46c", "#f76b15", "#0090ff", "#111111", "#fefefe"] {
        let color = to_oklch(hex).unwrap();
        assert_eq!(color.to_hex(), hex);
    }
}

#[test]
fn test_normalize_hex_lowercases() {
    assert_eq!(normalize_hex("#FF6A00").as_deref(), Some("#ff6a00"));
}

#[test]
fn test_clamp_normalizes_components() {
    let clamped = OklchColor {
        l: 1.5,
        c: -0.2,
        h: 400.0,
        alpha: 2.0,
    }
    .clamp();
    assert_eq!(clamped.l, 1.0);
    assert_eq!(clamped.c, 0.0);
    assert_relative_eq!(clamped.h, 40.0, epsilon = 1e-9);
    assert_eq!(clamped.alpha, 1.0);
}

#[test]
fn test_out_of_gamut_chroma_is_clipped_in_hex() {
    // A chroma far outside sRGB still yields a valid hex.
    let wild = OklchColor::new(0.6, 0.5, 150.0);
    let hex = wild.to_hex();
    assert_eq!(hex.len(), 7);
    assert!(hex.starts_with('#'));
}

#[test]
fn test_srgb_of_hex_white() {
    let [r, g, b] = srgb_of_hex("#ffffff").unwrap();
    assert_relative_eq!(r, 1.0, epsilon = 1e-9);
    assert_relative_eq!(g, 1.0, epsilon = 1e-9);
    assert_relative_eq!(b, 1.0, epsilon = 1e-9);
}

#[test]
fn test_p3_of_hex_white_stays_white() {
    let [r, g, b] = p3_of_hex("#ffffff").unwrap();
    assert_relative_eq!(r, 1.0, epsilon = 1e-6);
    assert_relative_eq!(g, 1.0, epsilon = 1e-6);
    assert_relative_eq!(b, 1.0, epsilon = 1e-6);
}

#[test]
fn test_p3_of_hex_red_desaturates() {
    // Pure sRGB red maps inside the wider P3 gamut: red channel drops,
    // green picks up a little.
    let [r, g, b] = p3_of_hex("#ff0000").unwrap();
    assert!(r < 1.0 && r > 0.85);
    assert!(g > 0.0 && g < 0.35);
    assert!(b < 0.1);
}

#[test]
fn test_angular_distance_wraps() {
    assert_relative_eq!(angular_distance(350.0, 10.0), 20.0, epsilon = 1e-9);
    assert_relative_eq!(angular_distance(0.0, 180.0), 180.0, epsilon = 1e-9);
}

#[test]
fn test_signed_delta_range() {
    assert_relative_eq!(signed_hue_delta(0.0, 180.0), 180.0, epsilon = 1e-9);
    assert_relative_eq!(signed_hue_delta(0.0, 181.0), -179.0, epsilon = 1e-9);
}

#[test]
fn test_css_string_format() {
    let s = OklchColor::new(0.645, 0.1234, 152.0).css_string();
    assert!(s.starts_with("oklch(64.5% "));
    assert!(s.ends_with(" 152)"));
}
