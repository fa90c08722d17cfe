//! Artifact serializers over the palette contract.
//!
//! Emitters walk the palette's scale maps in the order they carry (canonical
//! slot order, then custom rows) and never reorder keys.

use crate::curves::Mode;
use crate::palette::{self, Palette, PaletteSnapshot, Scale, TAILWIND_STEPS};

/// CSS custom properties: solid and alpha steps in `:root`, dark values
/// under a `.dark` class, wide-gamut `oklch()` overrides behind `@supports`.
pub fn css_tokens(palette: &Palette) -> String {
    let mut out = String::new();

    out.push_str(":root {\n");
    push_mode_block(&mut out, palette, Mode::Light);
    out.push_str("}\n\n.dark {\n");
    push_mode_block(&mut out, palette, Mode::Dark);
    out.push_str("}\n\n@supports (color: oklch(0% 0 0)) {\n  :root {\n");
    push_wide_gamut_block(&mut out, palette, Mode::Light);
    out.push_str("  }\n  .dark {\n");
    push_wide_gamut_block(&mut out, palette, Mode::Dark);
    out.push_str("  }\n}\n");

    out
}

fn push_mode_block(out: &mut String, palette: &Palette, mode: Mode) {
    let background = mode.background_hex();
    for (slot, scale) in palette.scales(mode).iter() {
        for (step, hex) in scale.entries() {
            out.push_str(&format!("  --{slot}-{step}: {hex};\n"));
        }
        for (i, alpha) in palette::scale_alpha(scale, background).iter().enumerate() {
            out.push_str(&format!("  --{slot}-a{}: {alpha};\n", i + 1));
        }
    }
}

fn push_wide_gamut_block(out: &mut String, palette: &Palette, mode: Mode) {
    for (slot, scale) in palette.scales(mode).iter() {
        for (i, wide) in palette::scale_wide_gamut(scale).iter().enumerate() {
            out.push_str(&format!("    --{slot}-{}: {wide};\n", i + 1));
        }
    }
}

/// Tailwind theme fragment for one mode, using the Radix-to-Tailwind step
/// mapping (1 -> 50 through 12 -> 950).
pub fn tailwind_theme(palette: &Palette, mode: Mode) -> String {
    let mut out = String::new();
    out.push_str("module.exports = {\n  theme: {\n    extend: {\n      colors: {\n");
    for (slot, scale) in palette.scales(mode).iter() {
        out.push_str(&format!("        \"{slot}\": {{\n"));
        for (step, shade) in TAILWIND_STEPS {
            out.push_str(&format!("          \"{shade}\": \"{}\",\n", scale.step(step)));
        }
        out.push_str("        },\n");
    }
    out.push_str("      },\n    },\n  },\n};\n");
    out
}

/// The JSON snapshot document.
pub fn json_document(palette: &Palette, name: &str) -> serde_json::Result<String> {
    let snapshot = PaletteSnapshot::from_palette(&slugify(name), name, palette);
    serde_json::to_string_pretty(&snapshot)
}

/// Plain-text swatch listing, used by the check output.
pub fn text_summary(palette: &Palette) -> String {
    let mut out = String::new();
    for mode in [Mode::Light, Mode::Dark] {
        out.push_str(&format!("{mode}:\n"));
        for (slot, scale) in palette.scales(mode).iter() {
            out.push_str(&format!("  {slot}: {}\n", step_line(scale)));
        }
    }
    out
}

fn step_line(scale: &Scale) -> String {
    scale
        .entries()
        .map(|(_, hex)| hex)
        .collect::<Vec<_>>()
        .join(" ")
}

fn slugify(name: &str) -> String {
    name.to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect()
}
