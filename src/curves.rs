//! Access to the measured per-slot reference curves and APCA step targets.

use serde::{Deserialize, Serialize};

pub use crate::curve_data::{ModeCurves, SLOT_CURVES, SlotCurves};
use crate::registry::{self, is_bright};

/// Palette mode. Every reference table exists once per mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    /// Stable string key used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The page background each mode's contrast is measured against.
    pub fn background_hex(self) -> &'static str {
        match self {
            Self::Light => "#ffffff",
            Self::Dark => "#111111",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measured curves for a baseline slot in the given mode.
pub fn curves_for(key: &str, mode: Mode) -> Option<&'static ModeCurves> {
    SLOT_CURVES.iter().find(|s| s.key == key).map(|s| match mode {
        Mode::Light => &s.light,
        Mode::Dark => &s.dark,
    })
}

/// Step-9 reference chroma for a slot in the given mode; 0.0 for unknown keys.
pub fn reference_chroma(key: &str, mode: Mode) -> f64 {
    curves_for(key, mode).map_or(0.0, |c| c.reference_chroma)
}

/// APCA Lc targets per step against the mode background, measured from the
/// chromatic scales. Informational; the synthesis path is curve-driven.
pub const APCA_TARGET_STANDARD: [f64; 12] = [
    0.8, 2.2, 6.9, 12.3, 18.8, 26.5, 36.4, 49.7, 57.1, 61.4, 74.8, 93.2,
];

/// Targets for the bright slots. Step 9 is intentionally below step 8: the
/// solid step of a bright hue is lighter than its border steps.
pub const APCA_TARGET_BRIGHT: [f64; 12] = [
    0.8, 2.2, 6.9, 12.3, 18.8, 26.5, 36.4, 49.7, 25.4, 31.2, 74.8, 93.2,
];

/// Targets for the neutral scales, which run slightly darker at the text end.
pub const APCA_TARGET_NEUTRAL: [f64; 12] = [
    0.9, 2.4, 7.2, 12.8, 19.4, 27.2, 37.3, 50.6, 58.2, 62.7, 76.5, 97.1,
];

/// The APCA target table appropriate for a slot key.
pub fn apca_targets(key: &str) -> &'static [f64; 12] {
    if is_bright(key) {
        &APCA_TARGET_BRIGHT
    } else if registry::slot(key).is_some_and(|s| s.is_neutral()) {
        &APCA_TARGET_NEUTRAL
    } else {
        &APCA_TARGET_STANDARD
    }
}
