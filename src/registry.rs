//! The 31 baseline hue slots and closest-slot search.
//!
//! Slot keys, canonical hue angles, and step-9 reference chromas are measured
//! from the Radix scales. The array order is the canonical serialization
//! order that every emitter must preserve.

use crate::color::angular_distance;

/// Hue families. A slot is `Neutral` when its measured step-9 chroma is
/// below 0.05 (gray through sand sit below 0.03; bronze and gold are the
/// warm low-chroma outliers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
    Neutral,
}

/// One of the 31 baseline hue positions.
#[derive(Debug, Clone, Copy)]
pub struct HueSlot {
    pub key: &'static str,
    pub name: &'static str,
    pub category: Category,
    /// Canonical OKLCH hue angle in degrees (step 9, light mode).
    pub canonical_hue: f64,
    /// Measured OKLCH chroma at step 9, light mode.
    pub reference_chroma: f64,
    /// The step-9 hex the measurements were taken from.
    pub source_hex: &'static str,
}

impl HueSlot {
    pub fn is_neutral(&self) -> bool {
        self.category == Category::Neutral
    }
}

/// Snap window for matching a brand hue to a slot, in degrees.
pub const SNAP_THRESHOLD_DEG: f64 = 10.0;

/// Slots whose lightness curve is non-monotone at step 9 (the solid step is
/// lighter than step 8).
pub const BRIGHT_HUES: [&str; 5] = ["yellow", "lime", "amber", "mint", "sky"];

/// Whether a slot key names a bright hue.
pub fn is_bright(key: &str) -> bool {
    BRIGHT_HUES.contains(&key)
}

/// All 31 baseline slots, in canonical serialization order.
pub static SLOTS: [HueSlot; 31] = [
    HueSlot { key: "gray", name: "Gray", category: Category::Neutral, canonical_hue: 0.0, reference_chroma: 0.000, source_hex: "#8d8d8d" },
    HueSlot { key: "mauve", name: "Mauve", category: Category::Neutral, canonical_hue: 314.0, reference_chroma: 0.010, source_hex: "#8e8c99" },
    HueSlot { key: "slate", name: "Slate", category: Category::Neutral, canonical_hue: 257.0, reference_chroma: 0.011, source_hex: "#8b8d98" },
    HueSlot { key: "sage", name: "Sage", category: Category::Neutral, canonical_hue: 155.0, reference_chroma: 0.006, source_hex: "#868e8b" },
    HueSlot { key: "olive", name: "Olive", category: Category::Neutral, canonical_hue: 131.0, reference_chroma: 0.007, source_hex: "#898e87" },
    HueSlot { key: "sand", name: "Sand", category: Category::Neutral, canonical_hue: 98.0, reference_chroma: 0.006, source_hex: "#8d8d86" },
    HueSlot { key: "tomato", name: "Tomato", category: Category::Red, canonical_hue: 34.0, reference_chroma: 0.166, source_hex: "#e54d2e" },
    HueSlot { key: "red", name: "Red", category: Category::Red, canonical_hue: 25.0, reference_chroma: 0.174, source_hex: "#e5484b" },
    HueSlot { key: "ruby", name: "Ruby", category: Category::Red, canonical_hue: 13.0, reference_chroma: 0.158, source_hex: "#e54666" },
    HueSlot { key: "crimson", name: "Crimson", category: Category::Red, canonical_hue: 358.0, reference_chroma: 0.178, source_hex: "#e93d82" },
    HueSlot { key: "pink", name: "Pink", category: Category::Pink, canonical_hue: 337.0, reference_chroma: 0.176, source_hex: "#d6409f" },
    HueSlot { key: "plum", name: "Plum", category: Category::Pink, canonical_hue: 320.0, reference_chroma: 0.136, source_hex: "#ab4aba" },
    HueSlot { key: "purple", name: "Purple", category: Category::Purple, canonical_hue: 303.0, reference_chroma: 0.134, source_hex: "#8e4ec6" },
    HueSlot { key: "violet", name: "Violet", category: Category::Purple, canonical_hue: 288.0, reference_chroma: 0.138, source_hex: "#6e56cf" },
    HueSlot { key: "iris", name: "Iris", category: Category::Purple, canonical_hue: 277.0, reference_chroma: 0.142, source_hex: "#5b5bd6" },
    HueSlot { key: "indigo", name: "Indigo", category: Category::Blue, canonical_hue: 266.0, reference_chroma: 0.148, source_hex: "#3e63dd" },
    HueSlot { key: "blue", name: "Blue", category: Category::Blue, canonical_hue: 252.0, reference_chroma: 0.146, source_hex: "#0090ff" },
    HueSlot { key: "cyan", name: "Cyan", category: Category::Cyan, canonical_hue: 209.0, reference_chroma: 0.124, source_hex: "#00a2c7" },
    HueSlot { key: "teal", name: "Teal", category: Category::Cyan, canonical_hue: 189.0, reference_chroma: 0.124, source_hex: "#12a594" },
    HueSlot { key: "jade", name: "Jade", category: Category::Green, canonical_hue: 163.0, reference_chroma: 0.112, source_hex: "#29a383" },
    HueSlot { key: "green", name: "Green", category: Category::Green, canonical_hue: 152.0, reference_chroma: 0.114, source_hex: "#30a46c" },
    HueSlot { key: "grass", name: "Grass", category: Category::Green, canonical_hue: 141.0, reference_chroma: 0.108, source_hex: "#46a758" },
    HueSlot { key: "bronze", name: "Bronze", category: Category::Neutral, canonical_hue: 55.0, reference_chroma: 0.037, source_hex: "#a18072" },
    HueSlot { key: "gold", name: "Gold", category: Category::Neutral, canonical_hue: 88.0, reference_chroma: 0.033, source_hex: "#978365" },
    HueSlot { key: "brown", name: "Brown", category: Category::Orange, canonical_hue: 63.0, reference_chroma: 0.072, source_hex: "#ad7f58" },
    HueSlot { key: "orange", name: "Orange", category: Category::Orange, canonical_hue: 47.0, reference_chroma: 0.171, source_hex: "#f76b15" },
    HueSlot { key: "amber", name: "Amber", category: Category::Yellow, canonical_hue: 82.0, reference_chroma: 0.152, source_hex: "#ffc53d" },
    HueSlot { key: "yellow", name: "Yellow", category: Category::Yellow, canonical_hue: 102.0, reference_chroma: 0.164, source_hex: "#ffe629" },
    HueSlot { key: "lime", name: "Lime", category: Category::Green, canonical_hue: 127.0, reference_chroma: 0.146, source_hex: "#bdee63" },
    HueSlot { key: "mint", name: "Mint", category: Category::Green, canonical_hue: 172.0, reference_chroma: 0.092, source_hex: "#86ead4" },
    HueSlot { key: "sky", name: "Sky", category: Category::Blue, canonical_hue: 221.0, reference_chroma: 0.086, source_hex: "#7ce2fe" },
];

/// Which slots a closest-slot search may consider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotFilter {
    /// Chromatic slots only.
    ExcludeNeutrals,
    /// Neutral slots only.
    NeutralsOnly,
}

/// Find the slot whose canonical hue is angularly closest to `hue`.
///
/// Returns the slot and its wrap-aware angular distance in degrees.
pub fn find_closest_slot(hue: f64, filter: SlotFilter) -> (&'static HueSlot, f64) {
    let mut best: Option<(&'static HueSlot, f64)> = None;
    for slot in &SLOTS {
        let eligible = match filter {
            SlotFilter::ExcludeNeutrals => !slot.is_neutral(),
            SlotFilter::NeutralsOnly => slot.is_neutral(),
        };
        if !eligible {
            continue;
        }
        let distance = angular_distance(hue, slot.canonical_hue);
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((slot, distance));
        }
    }
    // Both filters always match at least one of the 31 slots.
    best.expect("slot table is never empty")
}

/// Look up a baseline slot by key.
pub fn slot(key: &str) -> Option<&'static HueSlot> {
    SLOTS.iter().find(|s| s.key == key)
}

/// The canonical serialization order of the 31 baseline keys.
pub fn canonical_order() -> impl Iterator<Item = &'static str> {
    SLOTS.iter().map(|s| s.key)
}
