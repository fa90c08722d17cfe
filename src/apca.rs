//! APCA (Accessible Perceptual Contrast Algorithm) implementation.
//!
//! Calculates perceptual contrast between foreground and background colors
//! following the APCA-W3 specification for WCAG 3.0.

use crate::color;

/// APCA luminance coefficients for sRGB D65
const COEF_R: f64 = 0.2126729;
const COEF_G: f64 = 0.7151522;
const COEF_B: f64 = 0.0721750;

/// Simple gamma applied to 8-bit channels before the luminance sum
const GAMMA: f64 = 2.4;

/// Threshold for low-luminance soft clamp
const LOW_Y_THRESHOLD: f64 = 0.022;
const LOW_Y_EXPONENT: f64 = 1.414;

/// APCA contrast calculation constants
const SCALE: f64 = 1.14;
const OFFSET: f64 = 0.027;
const THRESHOLD: f64 = 0.1;

/// Exponents for light background (dark text on light bg)
const EXP_BG_LIGHT: f64 = 0.56;
const EXP_FG_LIGHT: f64 = 0.57;

/// Exponents for dark background (light text on dark bg)
const EXP_BG_DARK: f64 = 0.65;
const EXP_FG_DARK: f64 = 0.62;

/// Convert 8-bit sRGB channels to APCA luminance (Y).
pub fn srgb_to_luminance(rgb: [u8; 3]) -> f64 {
    let ch = |c: u8| (f64::from(c) / 255.0).powf(GAMMA);
    let y = COEF_R * ch(rgb[0]) + COEF_G * ch(rgb[1]) + COEF_B * ch(rgb[2]);

    // Low-luminance soft clamp
    if y < LOW_Y_THRESHOLD {
        y + (LOW_Y_THRESHOLD - y).powf(LOW_Y_EXPONENT)
    } else {
        y
    }
}

/// Calculate APCA contrast (Lc) between foreground and background colors.
///
/// Returns the Lc value:
/// - Positive values indicate dark text on light background
/// - Negative values indicate light text on dark background
/// - Typical range: -108 to +105
///
/// # Example
///
/// ```
/// use brandscale::apca::apca_contrast;
///
/// // Black text on white background
/// let lc = apca_contrast([0, 0, 0], [255, 255, 255]);
/// assert!(lc > 100.0);
///
/// // White text on black background
/// let lc = apca_contrast([255, 255, 255], [0, 0, 0]);
/// assert!(lc < -100.0);
/// ```
pub fn apca_contrast(fg: [u8; 3], bg: [u8; 3]) -> f64 {
    contrast_from_luminances(srgb_to_luminance(fg), srgb_to_luminance(bg))
}

/// Compute APCA contrast from pre-computed luminance values.
/// Use when background luminance is fixed across many foreground evaluations.
pub fn contrast_from_luminances(y_fg: f64, y_bg: f64) -> f64 {
    let c = if y_bg > y_fg {
        // Light background, dark text (positive contrast)
        SCALE * (y_bg.powf(EXP_BG_LIGHT) - y_fg.powf(EXP_FG_LIGHT))
    } else {
        // Dark background, light text (negative contrast)
        SCALE * (y_bg.powf(EXP_BG_DARK) - y_fg.powf(EXP_FG_DARK))
    };

    // Apply threshold and offset
    if c.abs() < THRESHOLD {
        0.0
    } else if c > 0.0 {
        (c - OFFSET) * 100.0
    } else {
        (c + OFFSET) * 100.0
    }
}

/// Signed APCA contrast between two parseable color strings.
///
/// Returns `None` when either color fails to parse.
pub fn apca_hex(fg: &str, bg: &str) -> Option<f64> {
    let fg = color::to_oklch(fg)?.srgb_u8();
    let bg = color::to_oklch(bg)?.srgb_u8();
    Some(apca_contrast(fg, bg))
}

/// `|apca_hex|` for callers that only care about magnitude.
pub fn absolute_apca_hex(fg: &str, bg: &str) -> Option<f64> {
    apca_hex(fg, bg).map(f64::abs)
}

/// APCA contrast thresholds for different use cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub min_lc: f64,
    pub description: &'static str,
}

/// Predefined APCA thresholds
pub mod thresholds {
    use super::Threshold;

    /// Body text (minimum level) - Lc 75
    pub const BODY_TEXT: Threshold = Threshold {
        min_lc: 75.0,
        description: "Body text",
    };

    /// Large text and UI components - Lc 60
    pub const LARGE_TEXT: Threshold = Threshold {
        min_lc: 60.0,
        description: "Large text",
    };

    /// Decorative and non-text elements - Lc 45
    pub const DECORATIVE: Threshold = Threshold {
        min_lc: 45.0,
        description: "Decorative",
    };
}
