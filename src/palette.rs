//! The palette data contract consumed by emitters.
//!
//! A [`Palette`] holds the light and dark scale maps in canonical slot order
//! plus generation metadata. Emitters rely on that order, never on map
//! iteration order of some intermediate structure.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::{self, OklchColor};

/// Radix step to Tailwind shade, for Tailwind-flavored emitters.
pub const TAILWIND_STEPS: [(usize, u32); 12] = [
    (1, 50),
    (2, 100),
    (3, 200),
    (4, 300),
    (5, 400),
    (6, 500),
    (7, 600),
    (8, 700),
    (9, 800),
    (10, 850),
    (11, 900),
    (12, 950),
];

/// Twelve lowercase `#rrggbb` values keyed by step 1-12.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale(pub [String; 12]);

impl Scale {
    /// Hex at `step` (1-12).
    ///
    /// # Panics
    ///
    /// Panics when `step` is outside 1-12.
    pub fn step(&self, step: usize) -> &str {
        &self.0[step - 1]
    }

    pub fn set_step(&mut self, step: usize, hex: String) {
        self.0[step - 1] = hex;
    }

    /// `(step, hex)` pairs in step order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.0.iter().enumerate().map(|(i, h)| (i + 1, h.as_str()))
    }
}

impl Serialize for Scale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(12))?;
        for (step, hex) in self.entries() {
            map.serialize_entry(&step.to_string(), hex)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Scale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScaleVisitor;

        impl<'de> Visitor<'de> for ScaleVisitor {
            type Value = Scale;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of steps 1-12 to hex strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Scale, A::Error> {
                let mut steps: [Option<String>; 12] = Default::default();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    let step: usize = key
                        .parse()
                        .map_err(|_| de::Error::custom(format!("bad step key '{key}'")))?;
                    if !(1..=12).contains(&step) {
                        return Err(de::Error::custom(format!("step {step} outside 1-12")));
                    }
                    steps[step - 1] = Some(value);
                }
                let mut out: [String; 12] = Default::default();
                for (i, slot) in steps.into_iter().enumerate() {
                    out[i] =
                        slot.ok_or_else(|| de::Error::custom(format!("missing step {}", i + 1)))?;
                }
                Ok(Scale(out))
            }
        }

        deserializer.deserialize_map(ScaleVisitor)
    }
}

/// Ordered `slot key -> Scale` map. Serializes as a JSON object preserving
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaleMap(pub Vec<(String, Scale)>);

impl ScaleMap {
    pub fn get(&self, key: &str) -> Option<&Scale> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, s)| s)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Scale> {
        self.0.iter_mut().find(|(k, _)| k == key).map(|(_, s)| s)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scale)> {
        self.0.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ScaleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, scale) in &self.0 {
            map.serialize_entry(key, scale)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ScaleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScaleMapVisitor;

        impl<'de> Visitor<'de> for ScaleMapVisitor {
            type Value = ScaleMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of slot keys to scales")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ScaleMap, A::Error> {
                let mut entries = Vec::new();
                while let Some((key, scale)) = access.next_entry::<String, Scale>()? {
                    entries.push((key, scale));
                }
                Ok(ScaleMap(entries))
            }
        }

        deserializer.deserialize_map(ScaleMapVisitor)
    }
}

/// The scalar tuning deltas exposed in serialized metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TuningSummary {
    pub hue_shift: f64,
    pub chroma_multiplier: f64,
    pub lightness_shift: f64,
}

/// Generation metadata carried alongside the scales.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteMeta {
    pub tuning_profile: TuningSummary,
    pub input_colors: Vec<String>,
    /// Unix timestamp (seconds) of generation.
    pub generated_at: u64,
    /// Slots carrying a brand anchor, custom rows included.
    pub anchored_slots: Vec<String>,
    /// Custom row keys, always a subset of `anchored_slots`.
    pub custom_slots: Vec<String>,
    /// `(slot, step)` for every brand anchor, used by the accessibility
    /// guard to keep anchor steps untouched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub anchor_steps: Vec<(String, usize)>,
}

/// A complete generated palette: both modes plus metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    pub light: ScaleMap,
    pub dark: ScaleMap,
    pub meta: PaletteMeta,
}

impl Palette {
    pub fn scales(&self, mode: crate::curves::Mode) -> &ScaleMap {
        match mode {
            crate::curves::Mode::Light => &self.light,
            crate::curves::Mode::Dark => &self.dark,
        }
    }

    pub fn scales_mut(&mut self, mode: crate::curves::Mode) -> &mut ScaleMap {
        match mode {
            crate::curves::Mode::Light => &mut self.light,
            crate::curves::Mode::Dark => &mut self.dark,
        }
    }
}

/// Persisted snapshot document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteSnapshot {
    pub id: String,
    pub name: String,
    pub input_colors: Vec<String>,
    pub generated_at: u64,
    pub scales: SnapshotScales,
    pub meta: SnapshotMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotScales {
    pub light: ScaleMap,
    pub dark: ScaleMap,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMeta {
    pub anchored_slots: Vec<String>,
    pub custom_slots: Vec<String>,
    pub tuning_profile: TuningSummary,
}

impl PaletteSnapshot {
    /// Build a snapshot document from a palette.
    pub fn from_palette(id: &str, name: &str, palette: &Palette) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            input_colors: palette.meta.input_colors.clone(),
            generated_at: palette.meta.generated_at,
            scales: SnapshotScales {
                light: palette.light.clone(),
                dark: palette.dark.clone(),
            },
            meta: SnapshotMeta {
                anchored_slots: palette.meta.anchored_slots.clone(),
                custom_slots: palette.meta.custom_slots.clone(),
                tuning_profile: palette.meta.tuning_profile,
            },
        }
    }
}

/// Solve the translucent `#rrggbbaa` overlay that composites to `target`
/// over `background`.
///
/// Returns `None` when either input fails to parse. Browsers round each
/// channel separately when compositing, so the solved channels are nudged to
/// survive that rounding.
pub fn alpha_hex(target: &str, background: &str) -> Option<String> {
    let t = color::to_oklch(target)?.srgb_u8().map(f64::from);
    let b = color::to_oklch(background)?.srgb_u8().map(f64::from);

    // Overlay white when lightening, black when darkening.
    let lightening = t.iter().zip(&b).any(|(tc, bc)| tc > bc);
    let desired = if lightening { 255.0 } else { 0.0 };

    let mut alpha: f64 = 0.0;
    for i in 0..3 {
        if (desired - b[i]).abs() > f64::EPSILON {
            alpha = alpha.max((t[i] - b[i]).abs() / (desired - b[i]).abs());
        }
    }
    if alpha <= 0.0 {
        let [r, g, bch] = t.map(|c| c as u8);
        return Some(format!("#{r:02x}{g:02x}{bch:02x}00"));
    }
    let alpha = ((alpha * 255.0).ceil() / 255.0).clamp(0.0, 1.0);

    let mut channels = [0u8; 3];
    for i in 0..3 {
        let mut c = ((t[i] - b[i] * (1.0 - alpha)) / alpha).clamp(0.0, 255.0).round();
        // Nudge against the browser's per-channel rounding.
        let blended = (b[i] * (1.0 - alpha)).round() + (c * alpha).round();
        if (blended - t[i]).abs() > 0.5 {
            c = (c + if blended < t[i] { 1.0 } else { -1.0 }).clamp(0.0, 255.0);
        }
        channels[i] = c as u8;
    }

    let a = (alpha * 255.0).round() as u8;
    Some(format!(
        "#{:02x}{:02x}{:02x}{:02x}",
        channels[0], channels[1], channels[2], a
    ))
}

/// `color(display-p3 r g b)` string for a hex color.
pub fn p3_string(hex: &str) -> Option<String> {
    let [r, g, b] = color::p3_of_hex(hex)?;
    Some(format!("color(display-p3 {r:.4} {g:.4} {b:.4})"))
}

/// CSS `oklch()` string for a hex color.
pub fn oklch_string(hex: &str) -> Option<String> {
    color::to_oklch(hex).as_ref().map(OklchColor::css_string)
}

/// Alpha variants for every step of a scale against one background.
pub fn scale_alpha(scale: &Scale, background: &str) -> [String; 12] {
    std::array::from_fn(|i| {
        alpha_hex(&scale.0[i], background).unwrap_or_else(|| scale.0[i].clone())
    })
}

/// Wide-gamut `oklch()` variants for every step of a scale.
pub fn scale_wide_gamut(scale: &Scale) -> [String; 12] {
    std::array::from_fn(|i| oklch_string(&scale.0[i]).unwrap_or_else(|| scale.0[i].clone()))
}
