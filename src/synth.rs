//! Twelve-step scale synthesis against the measured reference curves.
//!
//! A scale is shaped by three forces: the slot's measured curves, the parent
//! color's departure from those curves at the anchor step, and the global
//! brand tuning. Departures are propagated to neighboring steps with a
//! distance-based dampening so the extreme steps stay close to reference.

#[cfg(debug_assertions)]
use tracing::instrument;

use crate::apca;
use crate::color::{OklchColor, signed_hue_delta};
use crate::curves::{self, Mode, ModeCurves};

/// Hue window, in degrees, for the nearly-Radix short circuit.
const NEARLY_RADIX_HUE_DEG: f64 = 3.0;

/// Chroma-departure window for the nearly-Radix short circuit.
const NEARLY_RADIX_CHROMA_MIN: f64 = 0.90;
const NEARLY_RADIX_CHROMA_MAX: f64 = 1.10;

/// Residual propagation at the step farthest from the anchor.
const MIN_DAMPENING: f64 = 0.3;

/// Hue fallback drift applied to steps 10-12 when a slot has no hue curve.
const FALLBACK_DARK_DRIFT_DEG: f64 = -3.0;

/// Brand-wide deltas handed down from the tuning profile.
#[derive(Debug, Clone, Copy)]
pub struct GlobalTuning {
    pub hue_shift: f64,
    pub chroma_multiplier: f64,
}

/// Inputs for one scale synthesis.
#[derive(Debug, Clone)]
pub struct SynthesisRequest<'a> {
    /// The color the scale is built around. For brand anchors this is the
    /// parsed brand color; for non-anchored slots it is a tuned parent
    /// sampled from the reference curves.
    pub parent: OklchColor,
    /// Step (1-12) the parent sits at.
    pub anchor_step: usize,
    /// Baseline slot whose curves shape the scale.
    pub hue_key: &'a str,
    /// True for synthetic parents: track the reference curve throughout and
    /// skip the anchor-relative normalizations.
    pub use_full_curve: bool,
    pub global_tuning: Option<GlobalTuning>,
    pub mode: Mode,
}

/// One synthesized step.
#[derive(Debug, Clone)]
pub struct SynthesizedStep {
    pub hex: String,
    pub color: OklchColor,
    /// Signed Lc against the mode background, recorded for diagnostics.
    pub apca_vs_background: f64,
}

/// A synthesized 12-step scale.
#[derive(Debug, Clone)]
pub struct SynthesizedScale {
    pub steps: [SynthesizedStep; 12],
    /// Whether the nearly-Radix short circuit fired.
    pub nearly_radix: bool,
}

/// Synthesize a 12-step scale from a parent color.
///
/// The anchor step of a real brand anchor is later overwritten with the
/// exact brand hex; the modeled value produced here only tunes the
/// surrounding steps.
///
/// # Panics
///
/// Panics when the parent color has non-finite components or `anchor_step`
/// is outside 1-12. Both are caller bugs, not data conditions.
#[cfg_attr(debug_assertions, instrument(skip(request), fields(hue = request.hue_key, mode = %request.mode)))]
pub fn synthesize_scale(request: &SynthesisRequest<'_>) -> SynthesizedScale {
    let parent = request.parent;
    assert!(
        parent.l.is_finite() && parent.c.is_finite() && parent.h.is_finite(),
        "invalid parent color for scale synthesis: {parent:?}"
    );
    assert!(
        (1..=12).contains(&request.anchor_step),
        "anchor step {} outside 1-12",
        request.anchor_step
    );

    let tables = curves::curves_for(request.hue_key, request.mode);
    let reference_chroma = tables.map_or(parent.c, |t| t.reference_chroma);

    let chroma_departure = if reference_chroma > 0.0 {
        parent.c / reference_chroma
    } else {
        1.0
    };

    let anchor_idx = request.anchor_step - 1;
    let radix_anchor_hue = tables.map_or(parent.h, |t| t.hue[anchor_idx]);
    let hue_offset = signed_hue_delta(radix_anchor_hue, parent.h);

    let (nearly_radix, effective_offset, effective_departure) = resolve_departure(
        request,
        tables,
        hue_offset,
        chroma_departure,
        parent.h,
    );

    let chroma_curve = adjusted_chroma_curve(request, tables, nearly_radix, anchor_idx);

    let max_distance = (request.anchor_step - 1).max(12 - request.anchor_step);
    let background = request.mode.background_hex();

    let steps: [SynthesizedStep; 12] = std::array::from_fn(|i| {
        let step = i + 1;
        let distance = step.abs_diff(request.anchor_step);
        let t = if max_distance > 0 {
            distance as f64 / max_distance as f64
        } else {
            0.0
        };
        let dampening = 1.0 - t.powf(1.5) * (1.0 - MIN_DAMPENING);

        let dampened_departure = 1.0 + (effective_departure - 1.0) * dampening;
        let chroma = reference_chroma * dampened_departure * chroma_curve[i];

        let hue = match tables {
            Some(t) => (t.hue[i] + effective_offset * dampening).rem_euclid(360.0),
            // Steps 10-12 drift slightly toward the darker rendering.
            None if step >= 10 => (parent.h + FALLBACK_DARK_DRIFT_DEG).rem_euclid(360.0),
            None => parent.h,
        };

        let use_parent_lightness =
            !request.use_full_curve && step == request.anchor_step && !nearly_radix;
        let lightness = if use_parent_lightness {
            parent.l
        } else {
            tables.map_or(parent.l, |t| t.lightness[i])
        };

        let color = OklchColor::new(lightness, chroma, hue).clamp();
        let hex = color.to_hex();
        let apca_vs_background = apca::apca_hex(&hex, background).unwrap_or(0.0);
        SynthesizedStep {
            hex,
            color,
            apca_vs_background,
        }
    });

    SynthesizedScale {
        steps,
        nearly_radix,
    }
}

/// Decide the effective hue offset and chroma departure, applying the
/// nearly-Radix short circuit for real brand anchors.
fn resolve_departure(
    request: &SynthesisRequest<'_>,
    tables: Option<&'static ModeCurves>,
    hue_offset: f64,
    chroma_departure: f64,
    parent_hue: f64,
) -> (bool, f64, f64) {
    if request.use_full_curve {
        return (false, hue_offset, chroma_departure);
    }
    let Some(t) = tables else {
        return (false, hue_offset, chroma_departure);
    };

    let offset_from_step9 = signed_hue_delta(t.hue[8], parent_hue);
    let nearly = offset_from_step9.abs() < NEARLY_RADIX_HUE_DEG
        && (NEARLY_RADIX_CHROMA_MIN..=NEARLY_RADIX_CHROMA_MAX).contains(&chroma_departure);
    if !nearly {
        return (false, hue_offset, chroma_departure);
    }

    // A brand whose anchor happens to sit on the reference still deserves
    // the uniform global character when that character is the larger signal.
    if let Some(global) = request.global_tuning
        && global.hue_shift.abs() > offset_from_step9.abs()
    {
        return (true, global.hue_shift, global.chroma_multiplier);
    }
    (true, 0.0, 1.0)
}

/// Chroma curve, re-normalized so the anchor index equals 1.0 for real brand
/// anchors. Synthetic parents and nearly-Radix rows keep the measured curve.
fn adjusted_chroma_curve(
    request: &SynthesisRequest<'_>,
    tables: Option<&'static ModeCurves>,
    nearly_radix: bool,
    anchor_idx: usize,
) -> [f64; 12] {
    let Some(t) = tables else {
        return [1.0; 12];
    };
    if request.use_full_curve || nearly_radix {
        return t.chroma_ratio;
    }
    let at_anchor = t.chroma_ratio[anchor_idx];
    if at_anchor <= f64::EPSILON {
        return t.chroma_ratio;
    }
    std::array::from_fn(|i| t.chroma_ratio[i] / at_anchor)
}
