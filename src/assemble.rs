//! Full palette assembly.
//!
//! Walks the 31 baseline slots, choosing for each either the brand anchor or
//! a synthetic tuned parent, then appends the custom rows. The output is the
//! [`Palette`] contract from [`crate::palette`].

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::info;

#[cfg(debug_assertions)]
use tracing::instrument;

use crate::analyze::{self, AnchorInfo, CustomRowInfo, OutOfBoundsReason, TuningProfile};
use crate::color::{self, OklchColor};
use crate::curves::{self, Mode};
use crate::palette::{Palette, PaletteMeta, Scale, ScaleMap, TuningSummary};
use crate::registry;
use crate::synth::{GlobalTuning, SynthesisRequest, SynthesizedScale, synthesize_scale};

/// Chroma multiplier bounds for non-anchored chromatic slots.
const CHROMA_MULT_MIN: f64 = 0.5;
const CHROMA_MULT_MAX: f64 = 1.3;

/// Inputs for one mode's generation.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub brand_colors: Vec<String>,
    pub mode: Mode,
    /// Reuse a precomputed profile; when absent one is derived from
    /// `brand_colors` in this mode.
    pub tuning: Option<TuningProfile>,
}

/// One mode's generated scales plus bookkeeping.
#[derive(Debug, Clone)]
pub struct ModeGeneration {
    pub mode: Mode,
    /// Baseline slots in canonical order, then custom rows in input order.
    pub scales: ScaleMap,
    /// Slot and custom-row keys carrying a brand anchor.
    pub anchored_slots: Vec<String>,
    /// Custom row keys only.
    pub custom_slots: Vec<String>,
    /// `(slot, step)` of every anchor, for the accessibility guard.
    pub anchor_steps: Vec<(String, usize)>,
    pub profile: TuningProfile,
    pub warnings: Vec<String>,
}

/// A complete two-mode palette plus the warnings gathered on the way.
#[derive(Debug, Clone)]
pub struct PaletteGeneration {
    pub palette: Palette,
    pub warnings: Vec<String>,
}

/// Generate all scales for one mode.
#[cfg_attr(debug_assertions, instrument(skip(options), fields(mode = %options.mode, brand = options.brand_colors.len())))]
pub fn generate_scales(options: &GenerateOptions) -> ModeGeneration {
    let mode = options.mode;
    let (profile, warnings) = match &options.tuning {
        Some(profile) => (profile.clone(), Vec::new()),
        None => {
            let analysis = analyze::analyze_brand_colors(&options.brand_colors, mode);
            (analysis.profile, analysis.warnings)
        }
    };

    let mut scales = ScaleMap::default();
    let mut anchored_slots = Vec::new();
    let mut anchor_steps = Vec::new();

    for slot in &registry::SLOTS {
        let anchor = baseline_anchor(&profile, slot.key);
        let scale = match anchor {
            Some((hex, info)) => {
                let synthesized = synthesize_anchored(hex, info, slot.key, &profile, mode);
                let mut scale = to_scale(&synthesized);
                // The anchor step carries the brand color verbatim.
                scale.set_step(info.step, hex.to_string());
                anchored_slots.push(slot.key.to_string());
                anchor_steps.push((slot.key.to_string(), info.step));
                scale
            }
            None => to_scale(&synthesize_tuned(slot.key, &profile, mode)),
        };
        scales.0.push((slot.key.to_string(), scale));
    }

    let mut custom_slots = Vec::new();
    for row in &profile.custom_rows {
        let scale = synthesize_custom_row(row, &profile, mode);
        anchored_slots.push(row.row_key.clone());
        custom_slots.push(row.row_key.clone());
        anchor_steps.push((row.row_key.clone(), row.anchor_step));
        scales.0.push((row.row_key.clone(), scale));
    }

    info!(
        mode = %mode,
        slots = scales.len(),
        anchored = anchored_slots.len(),
        custom = custom_slots.len(),
        "generated scales"
    );

    ModeGeneration {
        mode,
        scales,
        anchored_slots,
        custom_slots,
        anchor_steps,
        profile,
        warnings,
    }
}

/// Generate the complete light + dark palette for a brand set.
///
/// The tuning profile is derived once, in light mode, and shared by both
/// modes so that the two scale maps carry identical keys.
pub fn generate_palette(brand_colors: &[String]) -> PaletteGeneration {
    let analysis = analyze::analyze_brand_colors(brand_colors, Mode::Light);
    let mut warnings = analysis.warnings.clone();

    let light = generate_scales(&GenerateOptions {
        brand_colors: brand_colors.to_vec(),
        mode: Mode::Light,
        tuning: Some(analysis.profile.clone()),
    });
    let dark = generate_scales(&GenerateOptions {
        brand_colors: brand_colors.to_vec(),
        mode: Mode::Dark,
        tuning: Some(analysis.profile),
    });

    warnings.extend(light.warnings.iter().cloned());
    warnings.extend(dark.warnings.iter().cloned());

    PaletteGeneration {
        palette: build_palette(light, dark, brand_colors),
        warnings,
    }
}

/// Combine two mode generations into the palette contract.
///
/// Both generations must come from the same tuning profile; their scale maps
/// then carry identical keys.
pub fn build_palette(light: ModeGeneration, dark: ModeGeneration, input: &[String]) -> Palette {
    debug_assert!(
        light.scales.keys().eq(dark.scales.keys()),
        "light and dark scale keys diverged"
    );

    let generated_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());

    let meta = PaletteMeta {
        tuning_profile: TuningSummary {
            hue_shift: light.profile.hue_shift,
            chroma_multiplier: light.profile.chroma_multiplier,
            lightness_shift: light.profile.lightness_shift,
        },
        input_colors: input.to_vec(),
        generated_at,
        anchored_slots: light.anchored_slots,
        custom_slots: light.custom_slots,
        anchor_steps: light.anchor_steps,
    };

    Palette {
        light: light.scales,
        dark: dark.scales,
        meta,
    }
}

/// First non-custom anchor pointing at `slot_key`, if any.
fn baseline_anchor<'a>(
    profile: &'a TuningProfile,
    slot_key: &str,
) -> Option<(&'a str, &'a AnchorInfo)> {
    profile
        .anchors
        .iter()
        .find(|(_, info)| !info.is_custom_row && info.slot == slot_key)
        .map(|(hex, info)| (hex.as_str(), info))
}

fn to_scale(synthesized: &SynthesizedScale) -> Scale {
    Scale(std::array::from_fn(|i| synthesized.steps[i].hex.clone()))
}

fn global_tuning(profile: &TuningProfile) -> GlobalTuning {
    GlobalTuning {
        hue_shift: profile.hue_shift,
        chroma_multiplier: profile.chroma_multiplier,
    }
}

/// Scale for a slot carrying a real brand anchor.
fn synthesize_anchored(
    hex: &str,
    info: &AnchorInfo,
    slot_key: &str,
    profile: &TuningProfile,
    mode: Mode,
) -> SynthesizedScale {
    // Anchor hexes were produced by analysis, so they always parse; a bad
    // hex can only arrive through a hand-built profile.
    let parent = color::to_oklch(hex)
        .unwrap_or_else(|| panic!("anchor hex '{hex}' in tuning profile does not parse"));
    synthesize_scale(&SynthesisRequest {
        parent,
        anchor_step: info.step,
        hue_key: slot_key,
        use_full_curve: false,
        global_tuning: Some(global_tuning(profile)),
        mode,
    })
}

/// Scale for a non-anchored slot: a synthetic parent sampled from the slot's
/// own curves with the brand tuning applied.
fn synthesize_tuned(slot_key: &str, profile: &TuningProfile, mode: Mode) -> SynthesizedScale {
    let slot = registry::slot(slot_key).expect("baseline slot key");
    let tables = curves::curves_for(slot_key, mode).expect("baseline slot curves");

    // Neutrals ignore the hue shift: at their chroma, a shifted hue reads as
    // a different neutral entirely.
    let hue = if slot.is_neutral() {
        tables.hue[8]
    } else {
        (tables.hue[8] + profile.hue_shift).rem_euclid(360.0)
    };
    let multiplier = if slot.is_neutral() {
        profile.chroma_multiplier.min(1.0)
    } else {
        profile
            .chroma_multiplier
            .clamp(CHROMA_MULT_MIN, CHROMA_MULT_MAX)
    };

    // Step-9 lightness keeps the parent inside the sRGB gamut; mid-range
    // lightness costs bright hues like yellow a third of their chroma.
    let parent = OklchColor::new(
        tables.lightness[8],
        tables.reference_chroma * multiplier,
        hue,
    );

    synthesize_scale(&SynthesisRequest {
        parent,
        anchor_step: 9,
        hue_key: slot_key,
        use_full_curve: true,
        global_tuning: Some(global_tuning(profile)),
        mode,
    })
}

/// Scale for a custom row, shaped by its resolved curve slot.
fn synthesize_custom_row(row: &CustomRowInfo, profile: &TuningProfile, mode: Mode) -> Scale {
    // Pastel and hue-gap rows keep their hue untouched: the brand's exact
    // hue is the point, and low-chroma hues over-rotate easily. Neon colors
    // are robust enough to carry the global shift.
    let apply_shift = row.reason == OutOfBoundsReason::HighChroma;

    let tables = curves::curves_for(row.curve_slot, mode).expect("baseline slot curves");

    let hue = if apply_shift {
        (row.hue + profile.hue_shift).rem_euclid(360.0)
    } else {
        row.hue
    };

    // Lightness from the curve, chroma from the brand (unclamped): the hex
    // conversion clips whatever the gamut cannot carry.
    let parent = OklchColor::new(tables.lightness[row.anchor_step - 1], row.color.c, hue);

    let synthesized = synthesize_scale(&SynthesisRequest {
        parent,
        anchor_step: row.anchor_step,
        hue_key: row.curve_slot,
        use_full_curve: false,
        global_tuning: None,
        mode,
    });

    let mut scale = to_scale(&synthesized);
    scale.set_step(row.anchor_step, row.source_hex.clone());
    scale
}
