use approx::assert_relative_eq;
use brandscale::color::{OklchColor, signed_hue_delta};
use brandscale::curves::{Mode, curves_for};
use brandscale::registry::SLOTS;
use brandscale::synth::{GlobalTuning, SynthesisRequest, synthesize_scale};

/// Parent sampled exactly from a slot's step-9 measurements.
fn reference_parent(key: &str, mode: Mode) -> OklchColor {
    let t = curves_for(key, mode).unwrap();
    OklchColor::new(t.lightness[8], t.reference_chroma, t.hue[8])
}

fn full_curve_request(key: &str, mode: Mode) -> SynthesisRequest<'_> {
    SynthesisRequest {
        parent: reference_parent(key, mode),
        anchor_step: 9,
        hue_key: key,
        use_full_curve: true,
        global_tuning: None,
        mode,
    }
}

#[test]
fn test_reference_parent_reproduces_measured_tables() {
    // With the parent sampled off the measurement, synthesis must return the
    // table-derived hex at every step, byte for byte, in both modes.
    for slot in &SLOTS {
        for mode in [Mode::Light, Mode::Dark] {
            let t = curves_for(slot.key, mode).unwrap();
            let scale = synthesize_scale(&full_curve_request(slot.key, mode));
            for i in 0..12 {
                let expected = OklchColor::new(
                    t.lightness[i],
                    t.reference_chroma * t.chroma_ratio[i],
                    t.hue[i],
                )
                .clamp()
                .to_hex();
                assert_eq!(
                    scale.steps[i].hex,
                    expected,
                    "{} {mode} step {}",
                    slot.key,
                    i + 1
                );
            }
        }
    }
}

#[test]
fn test_anchor_step_takes_parent_lightness() {
    // A muted green anchored mid-scale: not nearly reference (chroma
    // departure 0.70), so the anchor step carries the parent's lightness.
    let parent = OklchColor::new(0.5, 0.08, 150.0);
    let scale = synthesize_scale(&SynthesisRequest {
        parent,
        anchor_step: 6,
        hue_key: "green",
        use_full_curve: false,
        global_tuning: None,
        mode: Mode::Light,
    });
    assert!(!scale.nearly_radix);
    assert_relative_eq!(scale.steps[5].color.l, 0.5, epsilon = 1e-9);

    // Steps away from the anchor track the reference lightness curve.
    let t = curves_for("green", Mode::Light).unwrap();
    assert_relative_eq!(scale.steps[0].color.l, t.lightness[0], epsilon = 1e-9);
    assert_relative_eq!(scale.steps[11].color.l, t.lightness[11], epsilon = 1e-9);
}

#[test]
fn test_nearly_reference_anchor_zeroes_the_row() {
    // One degree of hue off the measurement with unit chroma: the row
    // snaps back to the pure reference scale.
    let t = curves_for("green", Mode::Light).unwrap();
    let parent = OklchColor::new(t.lightness[8], t.reference_chroma, t.hue[8] + 1.0);
    let anchored = synthesize_scale(&SynthesisRequest {
        parent,
        anchor_step: 9,
        hue_key: "green",
        use_full_curve: false,
        global_tuning: None,
        mode: Mode::Light,
    });
    assert!(anchored.nearly_radix);

    let reference = synthesize_scale(&full_curve_request("green", Mode::Light));
    for i in 0..12 {
        assert_eq!(anchored.steps[i].hex, reference.steps[i].hex, "step {}", i + 1);
    }
}

#[test]
fn test_nearly_reference_defers_to_larger_global_shift() {
    let t = curves_for("green", Mode::Light).unwrap();
    let parent = OklchColor::new(t.lightness[8], t.reference_chroma, t.hue[8] + 1.0);
    let scale = synthesize_scale(&SynthesisRequest {
        parent,
        anchor_step: 9,
        hue_key: "green",
        use_full_curve: false,
        global_tuning: Some(GlobalTuning {
            hue_shift: 5.0,
            chroma_multiplier: 1.0,
        }),
        mode: Mode::Light,
    });
    assert!(scale.nearly_radix);
    // Full shift lands at the anchor step (dampening factor 1 there).
    let drift = signed_hue_delta(t.hue[8], scale.steps[8].color.h);
    assert_relative_eq!(drift, 5.0, epsilon = 1e-6);
}

#[test]
fn test_hue_offset_is_dampened_toward_extremes() {
    let t = curves_for("blue", Mode::Light).unwrap();
    // Eight degrees off reference: outside the nearly-reference window.
    let parent = OklchColor::new(t.lightness[8], t.reference_chroma, t.hue[8] + 8.0);
    let scale = synthesize_scale(&SynthesisRequest {
        parent,
        anchor_step: 9,
        hue_key: "blue",
        use_full_curve: false,
        global_tuning: None,
        mode: Mode::Light,
    });
    assert!(!scale.nearly_radix);

    // Anchor step gets the full offset.
    let at_anchor = signed_hue_delta(t.hue[8], scale.steps[8].color.h);
    assert_relative_eq!(at_anchor, 8.0, epsilon = 1e-6);

    // The farthest step keeps only the residual 30%.
    let at_far = signed_hue_delta(t.hue[0], scale.steps[0].color.h);
    assert_relative_eq!(at_far, 8.0 * 0.3, epsilon = 1e-6);
}

#[test]
fn test_chroma_departure_is_dampened_toward_extremes() {
    let t = curves_for("blue", Mode::Light).unwrap();
    let parent = OklchColor::new(t.lightness[8], t.reference_chroma * 1.25, t.hue[8] + 8.0);
    let scale = synthesize_scale(&SynthesisRequest {
        parent,
        anchor_step: 9,
        hue_key: "blue",
        use_full_curve: false,
        global_tuning: None,
        mode: Mode::Light,
    });

    // Anchor chroma carries the full departure over the renormalized curve.
    assert_relative_eq!(
        scale.steps[8].color.c,
        t.reference_chroma * 1.25,
        epsilon = 1e-9
    );

    // At the farthest step only 30% of the departure survives.
    let expected_far = t.reference_chroma
        * (1.0 + 0.25 * 0.3)
        * (t.chroma_ratio[0] / t.chroma_ratio[8]);
    assert_relative_eq!(scale.steps[0].color.c, expected_far, epsilon = 1e-9);
}

#[test]
fn test_synthetic_scale_hue_tracks_measured_curve() {
    for key in ["red", "teal", "violet", "amber"] {
        let t = curves_for(key, Mode::Light).unwrap();
        let scale = synthesize_scale(&full_curve_request(key, Mode::Light));
        for i in 0..12 {
            let drift = signed_hue_delta(t.hue[i], scale.steps[i].color.h).abs();
            assert!(drift < 5.0, "{key} step {} drifted {drift:.2}", i + 1);
        }
    }
}

#[test]
fn test_unknown_hue_key_falls_back_to_parent() {
    let parent = OklchColor::new(0.6, 0.1, 200.0);
    let scale = synthesize_scale(&SynthesisRequest {
        parent,
        anchor_step: 9,
        hue_key: "not-a-slot",
        use_full_curve: true,
        global_tuning: None,
        mode: Mode::Light,
    });
    // No curve: lightness and hue come from the parent, with a slight dark
    // drift on the text steps.
    assert_relative_eq!(scale.steps[0].color.l, 0.6, epsilon = 1e-9);
    assert_relative_eq!(scale.steps[4].color.h, 200.0, epsilon = 1e-9);
    assert_relative_eq!(scale.steps[10].color.h, 197.0, epsilon = 1e-9);
}

#[test]
fn test_gray_scale_stays_achromatic() {
    let scale = synthesize_scale(&full_curve_request("gray", Mode::Light));
    for step in &scale.steps {
        assert_eq!(step.color.c, 0.0);
    }
}

#[test]
fn test_apca_is_recorded_per_step() {
    let scale = synthesize_scale(&full_curve_request("blue", Mode::Light));
    // The text steps must contrast strongly against the light background.
    assert!(scale.steps[11].apca_vs_background.abs() > 60.0);
}

#[test]
#[should_panic(expected = "invalid parent color")]
fn test_non_finite_parent_panics() {
    let parent = OklchColor::new(f64::NAN, 0.1, 100.0);
    synthesize_scale(&SynthesisRequest {
        parent,
        anchor_step: 9,
        hue_key: "blue",
        use_full_curve: false,
        global_tuning: None,
        mode: Mode::Light,
    });
}

#[test]
#[should_panic(expected = "anchor step")]
fn test_out_of_range_anchor_panics() {
    synthesize_scale(&SynthesisRequest {
        parent: OklchColor::new(0.5, 0.1, 100.0),
        anchor_step: 0,
        hue_key: "blue",
        use_full_curve: false,
        global_tuning: None,
        mode: Mode::Light,
    });
}
