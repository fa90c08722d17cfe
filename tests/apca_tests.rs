use approx::assert_relative_eq;
use brandscale::apca::{absolute_apca_hex, apca_contrast, apca_hex, thresholds};

#[test]
fn test_black_on_white() {
    let lc = apca_contrast([0, 0, 0], [255, 255, 255]);

    // Black on white should be approximately 106 Lc
    assert_relative_eq!(lc, 106.0, epsilon = 3.0);
    assert!(lc > 0.0, "Dark text on light bg should be positive");
}

#[test]
fn test_white_on_black() {
    let lc = apca_contrast([255, 255, 255], [0, 0, 0]);

    // White on black should be approximately -108 Lc
    assert_relative_eq!(lc, -108.0, epsilon = 3.0);
    assert!(lc < 0.0, "Light text on dark bg should be negative");
}

#[test]
fn test_same_color_zero_contrast() {
    let gray = [128, 128, 128];

    let lc = apca_contrast(gray, gray);

    assert_relative_eq!(lc, 0.0, epsilon = 1.0);
}

#[test]
fn test_mid_gray_on_white() {
    let lc = apca_contrast([128, 128, 128], [255, 255, 255]);

    // Mid-gray on white should have moderate contrast
    assert!(lc > 30.0, "Should have at least UI component contrast");
    assert!(lc < 80.0, "Should be less than body text contrast");
}

#[test]
fn test_polarity_asymmetry() {
    // APCA is polarity-sensitive: swapping fg/bg gives different absolute values
    let dark = [30, 30, 30];
    let light = [220, 220, 220];

    let lc_dark_on_light = apca_contrast(dark, light);
    let lc_light_on_dark = apca_contrast(light, dark);

    assert!(lc_dark_on_light.abs() > 60.0);
    assert!(lc_light_on_dark.abs() > 60.0);
    assert!(lc_dark_on_light > 0.0);
    assert!(lc_light_on_dark < 0.0);
}

#[test]
fn test_hex_wrapper_matches_channel_form() {
    let from_hex = apca_hex("#000000", "#ffffff").unwrap();
    let from_channels = apca_contrast([0, 0, 0], [255, 255, 255]);
    assert_relative_eq!(from_hex, from_channels, epsilon = 1e-9);
}

#[test]
fn test_hex_wrapper_rejects_invalid_input() {
    assert!(apca_hex("#gggggg", "#ffffff").is_none());
    assert!(apca_hex("#ffffff", "not a color").is_none());
}

#[test]
fn test_absolute_wrapper_is_unsigned() {
    let lc = absolute_apca_hex("#ffffff", "#000000").unwrap();
    assert!(lc > 100.0);
}

#[test]
fn test_threshold_ordering() {
    assert!(thresholds::BODY_TEXT.min_lc > thresholds::LARGE_TEXT.min_lc);
    assert!(thresholds::LARGE_TEXT.min_lc > thresholds::DECORATIVE.min_lc);
}
