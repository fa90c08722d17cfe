//! Radix-compatible design-system palette synthesis from brand colors.
//!
//! A small set of brand colors (1-7) is analyzed into a tuning profile,
//! every brand color is either anchored into one of the 31 baseline hue
//! scales or promoted to its own custom row, and each scale is synthesized
//! in light and dark mode against measured reference curves. An APCA-based
//! accessibility guard repairs text-step contrast before the palette is
//! handed to the emitters.
//!
//! Pipeline: [`analyze`] derives the [`analyze::TuningProfile`],
//! [`assemble`] walks the slots and calls [`synth`] per scale,
//! [`accessibility`] validates and repairs the result, and [`emit`]
//! serializes the [`palette::Palette`] contract.

pub mod accessibility;
pub mod analyze;
pub mod apca;
pub mod assemble;
pub mod cli;
pub mod cli_args;
pub mod color;
pub mod config;
pub mod curve_data;
pub mod curves;
pub mod emit;
pub mod logging;
pub mod palette;
pub mod registry;
pub mod synth;
