//! APCA validation and post-hoc contrast repair.
//!
//! The guard walks the text steps (11 and 12) of every scale against the
//! background steps (1 and 2) and, where a check fails, boosts the text
//! step's lightness away from the background until it passes. Chroma and hue
//! are preserved; brand anchor steps are never touched.

use std::collections::HashSet;

use float_cmp::approx_eq;
use tracing::debug;

use crate::apca::{self, Threshold, thresholds};
use crate::color;
use crate::curves::Mode;
use crate::palette::{Palette, Scale};

/// Lightness moved per boost iteration.
const BOOST_STEP_L: f64 = 0.01;

/// Upper bound on boost iterations for one check.
const MAX_BOOST_ITERATIONS: usize = 50;

/// Slack on threshold comparisons, matching display precision.
const PASS_EPSILON: f64 = 0.5;

/// Text steps and the contrast each must reach against steps 1 and 2.
const TEXT_CHECKS: [(usize, Threshold); 2] = [
    (11, thresholds::LARGE_TEXT),
    (12, thresholds::BODY_TEXT),
];

/// Background steps text is read against.
const BACKGROUND_STEPS: [usize; 2] = [1, 2];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Must pass; repaired by [`ensure_accessibility`].
    Fail,
    /// Reported but never repaired.
    Warning,
}

/// One failed contrast check.
#[derive(Debug, Clone)]
pub struct ContrastIssue {
    pub mode: Mode,
    pub slot: String,
    pub foreground_step: usize,
    /// `None` for the solid-button check against pure white/black.
    pub background_step: Option<usize>,
    pub required: f64,
    pub actual: f64,
    pub severity: Severity,
}

impl std::fmt::Display for ContrastIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.background_step {
            Some(bg) => write!(
                f,
                "{} {} step {} on step {}: Lc={:.1} (required: {:.0})",
                self.mode, self.slot, self.foreground_step, bg, self.actual, self.required
            ),
            None => write!(
                f,
                "{} {} step {} solid contrast: Lc={:.1} (required: {:.0})",
                self.mode, self.slot, self.foreground_step, self.actual, self.required
            ),
        }
    }
}

/// Issue counts grouped for reporting.
#[derive(Debug, Clone, Default)]
pub struct ContrastSummary {
    pub by_hue: Vec<(String, usize)>,
    pub by_mode: Vec<(String, usize)>,
}

/// Result of a validation pass over a palette.
#[derive(Debug, Clone)]
pub struct ContrastReport {
    /// True when no fail-severity issue remains; warnings are allowed.
    pub passed: bool,
    pub total_checks: usize,
    pub passed_checks: usize,
    pub issues: Vec<ContrastIssue>,
    pub summary: ContrastSummary,
}

/// Validate every scale of a palette. Pure; mutates nothing.
pub fn validate_palette_contrast(palette: &Palette) -> ContrastReport {
    let mut total_checks = 0;
    let mut passed_checks = 0;
    let mut issues = Vec::new();

    for mode in [Mode::Light, Mode::Dark] {
        for (slot, scale) in palette.scales(mode).iter() {
            for (fg_step, threshold) in TEXT_CHECKS {
                for bg_step in BACKGROUND_STEPS {
                    total_checks += 1;
                    let actual = apca::absolute_apca_hex(scale.step(fg_step), scale.step(bg_step))
                        .unwrap_or(0.0);
                    if passes(actual, threshold.min_lc) {
                        passed_checks += 1;
                    } else {
                        issues.push(ContrastIssue {
                            mode,
                            slot: slot.to_string(),
                            foreground_step: fg_step,
                            background_step: Some(bg_step),
                            required: threshold.min_lc,
                            actual,
                            severity: Severity::Fail,
                        });
                    }
                }
            }

            // Solid-button text check: the better of white or black text on
            // step 9. Some hues are intentionally light-solid (yellow), so
            // this never blocks and is never repaired.
            total_checks += 1;
            let solid = scale.step(9);
            let actual = apca::absolute_apca_hex("#ffffff", solid)
                .unwrap_or(0.0)
                .max(apca::absolute_apca_hex("#000000", solid).unwrap_or(0.0));
            if passes(actual, thresholds::LARGE_TEXT.min_lc) {
                passed_checks += 1;
            } else {
                issues.push(ContrastIssue {
                    mode,
                    slot: slot.to_string(),
                    foreground_step: 9,
                    background_step: None,
                    required: thresholds::LARGE_TEXT.min_lc,
                    actual,
                    severity: Severity::Warning,
                });
            }
        }
    }

    let summary = summarize(&issues);
    let passed = !issues.iter().any(|i| i.severity == Severity::Fail);

    ContrastReport {
        passed,
        total_checks,
        passed_checks,
        issues,
        summary,
    }
}

/// Repair failing text-step contrast by boosting lightness.
///
/// Idempotent: a palette that already passes comes back unchanged, and
/// running the guard twice equals running it once. Brand anchor steps are
/// skipped so the anchor-hex invariant survives.
pub fn ensure_accessibility(mut palette: Palette) -> Palette {
    let anchored: HashSet<(String, usize)> = palette
        .meta
        .anchor_steps
        .iter()
        .map(|(slot, step)| (slot.clone(), *step))
        .collect();

    for mode in [Mode::Light, Mode::Dark] {
        let scales = palette.scales_mut(mode);
        for (slot, scale) in scales.0.iter_mut() {
            for (fg_step, threshold) in TEXT_CHECKS {
                if anchored.contains(&(slot.clone(), fg_step)) {
                    continue;
                }
                for bg_step in BACKGROUND_STEPS {
                    boost_step(slot, scale, fg_step, bg_step, threshold, mode);
                }
            }
        }
    }

    palette
}

/// Walk one text step's lightness away from the background until the
/// threshold is met, preserving chroma and hue.
fn boost_step(
    slot: &str,
    scale: &mut Scale,
    fg_step: usize,
    bg_step: usize,
    threshold: Threshold,
    mode: Mode,
) {
    let bg_hex = scale.step(bg_step).to_string();
    let (Some(mut fg), Some(bg)) = (
        color::to_oklch(scale.step(fg_step)),
        color::to_oklch(&bg_hex),
    ) else {
        return;
    };

    let direction = if fg.l >= bg.l {
        BOOST_STEP_L
    } else {
        -BOOST_STEP_L
    };

    let mut hex = scale.step(fg_step).to_string();
    let mut boosted = false;
    for _ in 0..MAX_BOOST_ITERATIONS {
        let actual = apca::absolute_apca_hex(&hex, &bg_hex).unwrap_or(f64::MAX);
        if passes(actual, threshold.min_lc) {
            break;
        }
        fg.l = (fg.l + direction).clamp(0.0, 1.0);
        hex = fg.clamp().to_hex();
        boosted = true;
    }

    if boosted {
        debug!(
            %mode,
            slot,
            step = fg_step,
            against = bg_step,
            "boosted text-step lightness for contrast"
        );
        scale.set_step(fg_step, hex);
    }
}

fn passes(actual: f64, required: f64) -> bool {
    actual > required || approx_eq!(f64, actual, required, epsilon = PASS_EPSILON)
}

fn summarize(issues: &[ContrastIssue]) -> ContrastSummary {
    let mut summary = ContrastSummary::default();
    for issue in issues {
        bump(&mut summary.by_hue, &issue.slot);
        bump(&mut summary.by_mode, issue.mode.as_str());
    }
    summary
}

fn bump(counts: &mut Vec<(String, usize)>, key: &str) {
    match counts.iter_mut().find(|(k, _)| k == key) {
        Some((_, n)) => *n += 1,
        None => counts.push((key.to_string(), 1)),
    }
}
