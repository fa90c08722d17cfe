//! OKLCH color values and colorspace conversion.
//!
//! Everything downstream works in OKLCH; this module owns the boundary to
//! sRGB hex strings and Display P3 components.

use csscolorparser::Color as CssColor;
use palette::convert::{FromColorUnclamped, IntoColorUnclamped};
use palette::{Oklch, Srgb};

/// Chroma below which a color is treated as achromatic and its hue pinned to 0.
const ACHROMATIC_CHROMA: f64 = 1e-4;

/// A point in OKLCH space.
///
/// `l` is lightness in `[0, 1]`, `c` is chroma (non-negative), `h` is the hue
/// angle in degrees `[0, 360)`, `alpha` is opacity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OklchColor {
    pub l: f64,
    pub c: f64,
    pub h: f64,
    pub alpha: f64,
}

impl OklchColor {
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h, alpha: 1.0 }
    }

    /// Clamp all components into their legal ranges.
    ///
    /// Lightness and alpha clamp to `[0, 1]`, chroma to `>= 0`, and the hue
    /// is normalized into `[0, 360)`.
    pub fn clamp(self) -> Self {
        Self {
            l: self.l.clamp(0.0, 1.0),
            c: self.c.max(0.0),
            h: self.h.rem_euclid(360.0),
            alpha: self.alpha.clamp(0.0, 1.0),
        }
    }

    /// Convert to a lowercase `#rrggbb` hex string.
    ///
    /// The conversion goes through sRGB and clamps each channel, so
    /// out-of-gamut chroma is silently reduced. Callers that care pick
    /// lightness values known to stay inside the gamut.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.srgb_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// sRGB channels as bytes, gamut-clamped.
    pub fn srgb_u8(&self) -> [u8; 3] {
        let [r, g, b] = self.srgb_f64();
        [
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        ]
    }

    /// sRGB channels in `[0, 1]`, gamut-clamped.
    pub fn srgb_f64(&self) -> [f64; 3] {
        let oklch = Oklch::new(self.l, self.c, self.h);
        let srgb: Srgb<f64> = Srgb::from_color_unclamped(oklch);
        [
            srgb.red.clamp(0.0, 1.0),
            srgb.green.clamp(0.0, 1.0),
            srgb.blue.clamp(0.0, 1.0),
        ]
    }

    /// CSS `oklch()` string for wide-gamut output.
    pub fn css_string(&self) -> String {
        let l_percent = (self.l * 1000.0).round() / 10.0;
        let c = (self.c * 10000.0).round() / 10000.0;
        let h = (self.h * 10.0).round() / 10.0;
        format!("oklch({l_percent}% {c} {h})")
    }
}

/// Parse any CSS color (hex 3/6/8-digit, `rgb()`, named, ...) into OKLCH.
///
/// Returns `None` on unparseable input; invalid colors are not an error the
/// core raises. Achromatic inputs come back with `c = 0` and `h = 0`.
pub fn to_oklch(input: &str) -> Option<OklchColor> {
    let css: CssColor = input.parse().ok()?;
    let [r, g, b, a] = css.to_rgba8();
    let srgb = Srgb::new(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    );
    let oklch: Oklch<f64> = srgb.into_color_unclamped();

    let mut color = OklchColor {
        l: oklch.l,
        c: oklch.chroma.max(0.0),
        h: f64::from(oklch.hue.into_positive_degrees()),
        alpha: f64::from(a) / 255.0,
    };
    if color.c < ACHROMATIC_CHROMA {
        color.c = 0.0;
        color.h = 0.0;
    }
    Some(color.clamp())
}

/// Normalize any parseable color to its lowercase `#rrggbb` form.
pub fn normalize_hex(input: &str) -> Option<String> {
    to_oklch(input).map(|c| c.to_hex())
}

/// sRGB channels of a hex string in `[0, 1]`, for emitters.
pub fn srgb_of_hex(hex: &str) -> Option<[f64; 3]> {
    to_oklch(hex).map(|c| c.srgb_f64())
}

/// Display P3 channels of a hex string in `[0, 1]`, for wide-gamut emitters.
///
/// Uses the CSS Color 4 linear-sRGB to linear-P3 matrix; sRGB and Display P3
/// share the same transfer function.
pub fn p3_of_hex(hex: &str) -> Option<[f64; 3]> {
    const LINEAR_SRGB_TO_DISPLAYP3: [[f64; 3]; 3] = [
        [0.822_461_96, 0.177_538_04, 0.0],
        [0.033_194_2, 0.966_805_8, 0.0],
        [0.017_082_632, 0.072_397_44, 0.910_519_96],
    ];

    let [r, g, b] = srgb_of_hex(hex)?;
    let lin = [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)];
    let p3 = LINEAR_SRGB_TO_DISPLAYP3.map(|row| {
        linear_to_srgb(row[0] * lin[0] + row[1] * lin[1] + row[2] * lin[2]).clamp(0.0, 1.0)
    });
    Some(p3)
}

fn srgb_to_linear(x: f64) -> f64 {
    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(x: f64) -> f64 {
    if x <= 0.003_130_8 {
        x * 12.92
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

/// Wrap-aware angular distance between two hue angles, in `[0, 180]`.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Signed hue delta `to - from`, normalized into `(-180, 180]`.
pub fn signed_hue_delta(from: f64, to: f64) -> f64 {
    let d = (to - from).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}
