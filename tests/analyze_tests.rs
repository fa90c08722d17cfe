use brandscale::analyze::{
    MAX_BRAND_COLORS, OutOfBoundsReason, analyze_brand_colors, analyze_color,
};
use brandscale::color::OklchColor;
use brandscale::curves::{Mode, curves_for};
use brandscale::registry::slot;

#[test]
fn test_invalid_input_yields_nothing() {
    assert!(analyze_color("", Mode::Light).is_none());
    assert!(analyze_color("#zz0011", Mode::Light).is_none());
}

#[test]
fn test_pure_gray_routes_to_gray_slot() {
    let analysis = analyze_color("#808080", Mode::Light).unwrap();
    assert_eq!(analysis.slot, "gray");
    assert!(!analysis.is_chromatic());
    assert!(analysis.snaps);
    assert!(analysis.out_of_bounds.is_none());
}

#[test]
fn test_near_black_anchors_at_step_twelve() {
    let analysis = analyze_color("#0a0a0a", Mode::Light).unwrap();
    let matched = slot(analysis.slot).unwrap();
    assert!(matched.is_neutral(), "near-black routed to {}", analysis.slot);
    assert_eq!(analysis.anchor_step, 12);
    assert!(analysis.out_of_bounds.is_none());
}

#[test]
fn test_vivid_orange_is_a_standard_anchor() {
    let analysis = analyze_color("#FF6A00", Mode::Light).unwrap();
    assert_eq!(analysis.input_hex, "#ff6a00");
    assert_eq!(analysis.slot, "orange");
    assert!(analysis.snaps);
    assert!(analysis.out_of_bounds.is_none());
    assert!(analysis.chroma_ratio > 0.5 && analysis.chroma_ratio < 1.3);
}

#[test]
fn test_pastel_pink_is_low_chroma() {
    let analysis = analyze_color("#FFD1DC", Mode::Light).unwrap();
    assert!(analysis.is_chromatic());
    assert_eq!(analysis.out_of_bounds, Some(OutOfBoundsReason::LowChroma));
    assert!(analysis.chroma_ratio < 0.5);
}

#[test]
fn test_neon_green_is_high_chroma() {
    let analysis = analyze_color("#39FF14", Mode::Light).unwrap();
    assert_eq!(analysis.out_of_bounds, Some(OutOfBoundsReason::HighChroma));
    assert!(analysis.chroma_ratio > 1.3);
}

#[test]
fn test_distinct_hue_with_moderate_chroma_is_hue_gap() {
    // A muted blue between the sky and blue hue positions: more than the
    // snap window from both, chroma inside the acceptance band.
    let hex = OklchColor::new(0.70, 0.10, 236.0).to_hex();
    let analysis = analyze_color(&hex, Mode::Light).unwrap();
    assert!(!analysis.snaps, "distance {} should not snap", analysis.hue_distance);
    assert_eq!(analysis.out_of_bounds, Some(OutOfBoundsReason::HueGap));
}

#[test]
fn test_saturated_cyan_splits_by_mode() {
    // Light mode: anchors mid-scale, acceptable.
    let light = analyze_color("#25F4EE", Mode::Light).unwrap();
    assert_eq!(light.slot, "teal");
    assert!(light.out_of_bounds.is_none());
    assert!((4..=6).contains(&light.anchor_step));

    // Dark mode: the same color lands on the high-contrast text step, which
    // is no place for a vivid brand color.
    let dark = analyze_color("#25F4EE", Mode::Dark).unwrap();
    assert_eq!(dark.anchor_step, 12);
    assert_eq!(dark.out_of_bounds, Some(OutOfBoundsReason::ExtremeLightness));
}

#[test]
fn test_classification_precedence() {
    // Any out-of-bounds analysis must carry the first applicable reason.
    for input in ["#FFD1DC", "#39FF14", "#25F4EE"] {
        for mode in [Mode::Light, Mode::Dark] {
            let Some(a) = analyze_color(input, mode) else {
                continue;
            };
            let Some(reason) = a.out_of_bounds else {
                continue;
            };
            let chromatic = a.is_chromatic();
            let expected = if chromatic && a.chroma_ratio < 0.5 {
                OutOfBoundsReason::LowChroma
            } else if chromatic && a.chroma_ratio > 1.3 {
                OutOfBoundsReason::HighChroma
            } else if chromatic && !a.snaps {
                OutOfBoundsReason::HueGap
            } else {
                OutOfBoundsReason::ExtremeLightness
            };
            assert_eq!(reason, expected, "{input} in {mode}");
        }
    }
}

#[test]
fn test_empty_brand_set_yields_identity_profile() {
    let analysis = analyze_brand_colors(&[], Mode::Light);
    let p = &analysis.profile;
    assert_eq!(p.hue_shift, 0.0);
    assert_eq!(p.chroma_multiplier, 1.0);
    assert_eq!(p.lightness_shift, 0.0);
    assert!(p.anchors.is_empty());
    assert!(p.custom_rows.is_empty());
    assert!(analysis.warnings.is_empty());
}

#[test]
fn test_unparseable_entries_are_dropped_with_warnings() {
    let colors = vec!["oops".to_string(), "#30a46c".to_string()];
    let analysis = analyze_brand_colors(&colors, Mode::Light);
    assert_eq!(analysis.warnings.len(), 1);
    assert!(analysis.warnings[0].contains("oops"));
    assert_eq!(analysis.profile.anchors.len(), 1);
}

#[test]
fn test_all_invalid_falls_back_to_identity() {
    let colors = vec!["bad".to_string(), "worse".to_string()];
    let analysis = analyze_brand_colors(&colors, Mode::Light);
    assert_eq!(analysis.profile.chroma_multiplier, 1.0);
    assert_eq!(analysis.warnings.len(), 2);
}

#[test]
fn test_inputs_beyond_seven_are_truncated() {
    let colors: Vec<String> = (0..9).map(|i| format!("#ff{i}{i}00", i = i)).collect();
    let analysis = analyze_brand_colors(&colors, Mode::Light);
    assert!(
        analysis
            .warnings
            .iter()
            .any(|w| w.contains(&MAX_BRAND_COLORS.to_string()))
    );
    assert!(analysis.profile.anchors.len() <= MAX_BRAND_COLORS);
}

#[test]
fn test_chroma_multiplier_stays_clamped() {
    for colors in [
        vec!["#39FF14".to_string()],
        vec!["#FFD1DC".to_string()],
        vec!["#39FF14".to_string(), "#FFD1DC".to_string()],
    ] {
        let analysis = analyze_brand_colors(&colors, Mode::Light);
        let m = analysis.profile.chroma_multiplier;
        assert!((0.5..=1.3).contains(&m), "multiplier {m} escaped clamp");
    }
}

#[test]
fn test_custom_row_prefixes_follow_reason() {
    let colors = vec!["#FFD1DC".to_string(), "#39FF14".to_string()];
    let analysis = analyze_brand_colors(&colors, Mode::Light);
    let rows = &analysis.profile.custom_rows;
    assert_eq!(rows.len(), 2);
    assert!(rows[0].row_key.starts_with("pastel-"), "{}", rows[0].row_key);
    assert!(rows[1].row_key.starts_with("neon-"), "{}", rows[1].row_key);
}

#[test]
fn test_custom_row_keys_are_unique() {
    // Two pastels near the same slot must not collide.
    let colors = vec!["#FFD1DC".to_string(), "#FFD4DE".to_string()];
    let analysis = analyze_brand_colors(&colors, Mode::Light);
    let rows = &analysis.profile.custom_rows;
    assert_eq!(rows.len(), 2);
    assert_ne!(rows[0].row_key, rows[1].row_key);
}

#[test]
fn test_custom_rows_also_register_as_anchors() {
    let analysis = analyze_brand_colors(&["#39FF14".to_string()], Mode::Light);
    let profile = analysis.profile;
    assert_eq!(profile.custom_rows.len(), 1);
    let row = &profile.custom_rows[0];
    let anchor = profile.anchor_for(&row.source_hex).unwrap();
    assert!(anchor.is_custom_row);
    assert_eq!(anchor.slot, row.row_key);
    assert_eq!(anchor.step, row.anchor_step);
}

#[test]
fn test_snapping_brand_produces_small_hue_shift() {
    let analysis = analyze_brand_colors(&["#FF6A00".to_string()], Mode::Light);
    assert!(analysis.profile.hue_shift.abs() <= 10.0);
    assert_eq!(analysis.profile.custom_rows.len(), 0);
}

#[test]
fn test_lightness_shift_tracks_brand_lightness() {
    // A parent sampled straight off the mid-scale reference sits near the
    // 0.65 baseline, so the shift should be small.
    let curves = curves_for("green", Mode::Light).unwrap();
    let hex = OklchColor::new(curves.lightness[8], curves.reference_chroma, curves.hue[8]).to_hex();
    let analysis = analyze_brand_colors(&[hex], Mode::Light);
    assert!(analysis.profile.lightness_shift.abs() < 0.05);
}
