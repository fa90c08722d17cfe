//! Brand color analysis and tuning-profile derivation.
//!
//! Each brand input is parsed, matched against the baseline slots, and either
//! accepted as a standard anchor or promoted to its own custom row. The
//! aggregate deltas (hue shift, chroma multiplier, lightness shift) capture
//! the brand's overall character and are applied to every non-anchored slot.

use tracing::debug;

#[cfg(debug_assertions)]
use tracing::instrument;

use crate::color::{self, OklchColor, angular_distance, signed_hue_delta};
use crate::curves::{self, Mode};
use crate::registry::{self, SNAP_THRESHOLD_DEG, SlotFilter, is_bright};

/// Brand inputs beyond this count are dropped with a warning.
pub const MAX_BRAND_COLORS: usize = 7;

/// Chroma above which an input is routed to the chromatic slots.
const CHROMATIC_MIN_CHROMA: f64 = 0.03;

/// Chroma-ratio window outside which an input becomes a custom row.
const LOW_CHROMA_RATIO: f64 = 0.5;
const HIGH_CHROMA_RATIO: f64 = 1.3;

/// Chroma above which a lightness mismatch is a semantic problem. Muted
/// colors are acceptable even when they sit off-curve.
const VIVID_CHROMA: f64 = 0.12;

/// Lightness distance from the matched step that counts as a mismatch.
const LIGHTNESS_GAP: f64 = 0.10;

/// Anchor steps where a vivid brand color is semantically wrong (backgrounds
/// and the high-contrast text step).
const RESERVED_STEPS: [usize; 4] = [1, 2, 3, 12];

/// Why a brand color cannot live inside a baseline slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutOfBoundsReason {
    /// Chroma ratio below 0.5 of the matched slot (pastel).
    LowChroma,
    /// Chroma ratio above 1.3 of the matched slot (neon).
    HighChroma,
    /// More than the snap window away from every slot hue.
    HueGap,
    /// Vivid color anchored at a background or text step.
    ExtremeLightness,
}

impl OutOfBoundsReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LowChroma => "low-chroma",
            Self::HighChroma => "high-chroma",
            Self::HueGap => "hue-gap",
            Self::ExtremeLightness => "extreme-lightness",
        }
    }

    /// Custom-row key prefix. Extreme-lightness rows split on which end of
    /// the lightness axis the brand color sits.
    fn row_prefix(self, lightness: f64) -> &'static str {
        match self {
            Self::LowChroma => "pastel",
            Self::HighChroma => "neon",
            Self::HueGap => "custom",
            Self::ExtremeLightness => {
                if lightness > 0.5 {
                    "bright"
                } else {
                    "dark"
                }
            }
        }
    }
}

/// Analysis of a single brand color against the baseline slots.
#[derive(Debug, Clone)]
pub struct ColorAnalysis {
    /// Normalized lowercase `#rrggbb` form of the input.
    pub input_hex: String,
    pub color: OklchColor,
    /// Key of the matched slot.
    pub slot: &'static str,
    /// Angular distance to the matched slot's canonical hue, degrees.
    pub hue_distance: f64,
    /// Whether the input sits inside the snap window.
    pub snaps: bool,
    /// Signed hue offset from the matched slot's canonical hue, `(-180, 180]`.
    pub hue_offset: f64,
    /// Input chroma over the slot's reference chroma (1.0 when the slot is
    /// achromatic).
    pub chroma_ratio: f64,
    /// Step (1-12) whose reference lightness is closest to the input's.
    pub anchor_step: usize,
    /// Set when the color must become a custom row.
    pub out_of_bounds: Option<OutOfBoundsReason>,
    /// Absolute lightness distance from the matched step's reference.
    pub lightness_gap: f64,
}

impl ColorAnalysis {
    pub fn is_chromatic(&self) -> bool {
        self.color.c > CHROMATIC_MIN_CHROMA
    }
}

/// Anchor record for one brand color.
#[derive(Debug, Clone)]
pub struct AnchorInfo {
    /// Baseline slot key, or a custom row key when `is_custom_row` is set.
    pub slot: String,
    /// Step (1-12) the brand hex is inserted at verbatim.
    pub step: usize,
    pub is_custom_row: bool,
}

/// A brand color materialized as its own row.
#[derive(Debug, Clone)]
pub struct CustomRowInfo {
    pub row_key: String,
    pub source_hex: String,
    pub color: OklchColor,
    pub chroma_ratio: f64,
    pub reason: OutOfBoundsReason,
    /// The angularly closest baseline slot.
    pub nearest_slot: &'static str,
    /// Baseline slot whose curves shape the row. Usually the nearest slot;
    /// neon rows next to a bright hue switch to a monotone neighbor.
    pub curve_slot: &'static str,
    /// Step carrying the brand hex verbatim, against `curve_slot`'s curve.
    pub anchor_step: usize,
    /// The brand color's own hue angle, degrees.
    pub hue: f64,
    /// Angular distance to the nearest slot, recorded for hue-gap rows.
    pub hue_distance: Option<f64>,
}

/// Global brand deltas applied to non-anchored slots.
#[derive(Debug, Clone)]
pub struct TuningProfile {
    /// Mean signed hue offset of the snapping standard anchors, degrees.
    pub hue_shift: f64,
    /// Mean clamped chroma ratio across all chromatic inputs.
    pub chroma_multiplier: f64,
    /// Mean lightness minus the mid-scale reference 0.65.
    pub lightness_shift: f64,
    /// Normalized hex to anchor record, in input order.
    pub anchors: Vec<(String, AnchorInfo)>,
    /// Custom rows in input order.
    pub custom_rows: Vec<CustomRowInfo>,
}

impl TuningProfile {
    /// The identity profile produced by an empty brand set.
    pub fn identity() -> Self {
        Self {
            hue_shift: 0.0,
            chroma_multiplier: 1.0,
            lightness_shift: 0.0,
            anchors: Vec::new(),
            custom_rows: Vec::new(),
        }
    }

    /// Anchor record for a normalized hex, if that hex is a brand anchor.
    pub fn anchor_for(&self, hex: &str) -> Option<&AnchorInfo> {
        self.anchors.iter().find(|(h, _)| h == hex).map(|(_, a)| a)
    }
}

/// Profile plus the recoverable warnings collected while building it.
#[derive(Debug, Clone)]
pub struct BrandAnalysis {
    pub profile: TuningProfile,
    pub warnings: Vec<String>,
}

/// Analyze one brand color against the baseline slots.
///
/// Returns `None` when the input does not parse. Near-achromatic inputs are
/// matched only against the neutral slots so that, for example, a near-black
/// never routes into the red family.
pub fn analyze_color(input: &str, mode: Mode) -> Option<ColorAnalysis> {
    let parsed = color::to_oklch(input)?;
    let chromatic = parsed.c > CHROMATIC_MIN_CHROMA;
    let filter = if chromatic {
        SlotFilter::ExcludeNeutrals
    } else {
        SlotFilter::NeutralsOnly
    };

    let (slot, hue_distance) = registry::find_closest_slot(parsed.h, filter);
    let snaps = hue_distance <= SNAP_THRESHOLD_DEG;
    let hue_offset = signed_hue_delta(slot.canonical_hue, parsed.h);

    let reference = curves::reference_chroma(slot.key, mode);
    let chroma_ratio = if reference > 0.0 {
        parsed.c / reference
    } else {
        1.0
    };

    let lightness_curve = curves::curves_for(slot.key, mode)
        .map(|c| c.lightness)
        .unwrap_or([0.5; 12]);
    let anchor_step = closest_step(parsed.l, &lightness_curve);
    let lightness_gap = (parsed.l - lightness_curve[anchor_step - 1]).abs();

    let out_of_bounds = classify(
        chromatic,
        chroma_ratio,
        snaps,
        parsed.c,
        lightness_gap,
        anchor_step,
    );

    Some(ColorAnalysis {
        input_hex: parsed.to_hex(),
        color: parsed,
        slot: slot.key,
        hue_distance,
        snaps,
        hue_offset,
        chroma_ratio,
        anchor_step,
        out_of_bounds,
        lightness_gap,
    })
}

/// First applicable reason wins; order is load-bearing.
fn classify(
    chromatic: bool,
    chroma_ratio: f64,
    snaps: bool,
    chroma: f64,
    lightness_gap: f64,
    anchor_step: usize,
) -> Option<OutOfBoundsReason> {
    if chromatic && chroma_ratio < LOW_CHROMA_RATIO {
        Some(OutOfBoundsReason::LowChroma)
    } else if chromatic && chroma_ratio > HIGH_CHROMA_RATIO {
        Some(OutOfBoundsReason::HighChroma)
    } else if chromatic && !snaps {
        Some(OutOfBoundsReason::HueGap)
    } else if chroma > VIVID_CHROMA
        && (lightness_gap > LIGHTNESS_GAP || RESERVED_STEPS.contains(&anchor_step))
    {
        Some(OutOfBoundsReason::ExtremeLightness)
    } else {
        None
    }
}

/// Step (1-12) whose reference lightness is closest to `l`.
pub(crate) fn closest_step(l: f64, curve: &[f64; 12]) -> usize {
    let mut best = 1;
    let mut best_gap = f64::INFINITY;
    for (i, &reference) in curve.iter().enumerate() {
        let gap = (l - reference).abs();
        if gap < best_gap {
            best_gap = gap;
            best = i + 1;
        }
    }
    best
}

/// Analyze the full brand set and derive the tuning profile.
///
/// Invalid entries are dropped, inputs beyond [`MAX_BRAND_COLORS`] are
/// truncated; both produce warnings rather than errors.
#[cfg_attr(debug_assertions, instrument(skip(colors), fields(count = colors.len(), mode = %mode)))]
pub fn analyze_brand_colors(colors: &[String], mode: Mode) -> BrandAnalysis {
    let mut warnings = Vec::new();

    if colors.len() > MAX_BRAND_COLORS {
        warnings.push(format!(
            "{} brand colors supplied; only the first {MAX_BRAND_COLORS} are used",
            colors.len()
        ));
    }

    let mut analyses = Vec::new();
    for input in colors.iter().take(MAX_BRAND_COLORS) {
        match analyze_color(input, mode) {
            Some(analysis) => analyses.push(analysis),
            None => warnings.push(format!("ignoring unparseable brand color '{input}'")),
        }
    }

    if analyses.is_empty() {
        return BrandAnalysis {
            profile: TuningProfile::identity(),
            warnings,
        };
    }

    let snap_offsets: Vec<f64> = analyses
        .iter()
        .filter(|a| a.out_of_bounds.is_none() && a.is_chromatic() && a.snaps)
        .map(|a| a.hue_offset)
        .collect();
    let hue_shift = mean(&snap_offsets).unwrap_or(0.0);

    let clamped_ratios: Vec<f64> = analyses
        .iter()
        .filter(|a| a.is_chromatic())
        .map(|a| a.chroma_ratio.clamp(LOW_CHROMA_RATIO, HIGH_CHROMA_RATIO))
        .collect();
    let chroma_multiplier = mean(&clamped_ratios).unwrap_or(1.0);

    let lightnesses: Vec<f64> = analyses.iter().map(|a| a.color.l).collect();
    let lightness_shift = mean(&lightnesses).unwrap_or(0.65) - 0.65;

    let mut anchors = Vec::new();
    let mut custom_rows: Vec<CustomRowInfo> = Vec::new();

    for analysis in &analyses {
        match analysis.out_of_bounds {
            None => {
                anchors.push((
                    analysis.input_hex.clone(),
                    AnchorInfo {
                        slot: analysis.slot.to_string(),
                        step: analysis.anchor_step,
                        is_custom_row: false,
                    },
                ));
            }
            Some(reason) => {
                let row_key = unique_row_key(
                    reason.row_prefix(analysis.color.l),
                    analysis.slot,
                    &custom_rows,
                );
                let (curve_slot, anchor_step) = custom_row_curve_slot(reason, analysis, mode);
                debug!(row = %row_key, reason = reason.as_str(), "brand color becomes custom row");
                custom_rows.push(CustomRowInfo {
                    row_key: row_key.clone(),
                    source_hex: analysis.input_hex.clone(),
                    color: analysis.color,
                    chroma_ratio: analysis.chroma_ratio,
                    reason,
                    nearest_slot: analysis.slot,
                    curve_slot,
                    anchor_step,
                    hue: analysis.color.h,
                    hue_distance: (reason == OutOfBoundsReason::HueGap)
                        .then_some(analysis.hue_distance),
                });
                anchors.push((
                    analysis.input_hex.clone(),
                    AnchorInfo {
                        slot: row_key,
                        step: anchor_step,
                        is_custom_row: true,
                    },
                ));
            }
        }
    }

    BrandAnalysis {
        profile: TuningProfile {
            hue_shift,
            chroma_multiplier,
            lightness_shift,
            anchors,
            custom_rows,
        },
        warnings,
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Which baseline slot supplies the curve shape for a custom row, and the
/// step its brand hex anchors at.
///
/// A neon row whose nearest slot is a bright hue would put its most vivid
/// step above its border steps on that slot's non-monotone lightness curve,
/// so it switches to the nearest non-bright chromatic slot and re-anchors
/// against that curve.
fn custom_row_curve_slot(
    reason: OutOfBoundsReason,
    analysis: &ColorAnalysis,
    mode: Mode,
) -> (&'static str, usize) {
    if reason != OutOfBoundsReason::HighChroma || !is_bright(analysis.slot) {
        return (analysis.slot, analysis.anchor_step);
    }

    let fallback = registry::SLOTS
        .iter()
        .filter(|s| !s.is_neutral() && !is_bright(s.key))
        .min_by(|a, b| {
            angular_distance(analysis.color.h, a.canonical_hue)
                .total_cmp(&angular_distance(analysis.color.h, b.canonical_hue))
        })
        .expect("chromatic non-bright slots exist");

    let lightness = curves::curves_for(fallback.key, mode)
        .map(|c| c.lightness)
        .unwrap_or([0.5; 12]);
    (fallback.key, closest_step(analysis.color.l, &lightness))
}

/// `<prefix>-<slot>` with a numeric suffix when the key is already taken.
fn unique_row_key(prefix: &str, slot: &str, existing: &[CustomRowInfo]) -> String {
    let base = format!("{prefix}-{slot}");
    if !existing.iter().any(|r| r.row_key == base) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base}-{n}");
        if !existing.iter().any(|r| r.row_key == candidate) {
            return candidate;
        }
        n += 1;
    }
}
