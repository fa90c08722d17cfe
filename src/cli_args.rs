//! CLI argument definitions.
//!
//! This module contains only struct/enum definitions with no dependencies on
//! other crate modules, so it stays usable from build tooling.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Mode selection for emitted artifacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Emit light and dark together
    #[default]
    Both,
    /// Light mode only
    Light,
    /// Dark mode only
    Dark,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// CSS custom properties with alpha and wide-gamut layers
    #[default]
    Css,
    /// JSON snapshot document
    Json,
    /// Tailwind theme fragment
    Tailwind,
}

/// Radix-compatible design-system palette synthesis from brand colors.
#[derive(Parser, Debug)]
#[command(name = "brandscale")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Brand color (repeatable, up to 7) in any CSS format (hex, rgb(), named)
    #[arg(
        short,
        long = "color",
        value_name = "COLOR",
        value_parser = |s: &str| s.parse::<csscolorparser::Color>().map(|_| s.to_string()).map_err(|e| e.to_string())
    )]
    pub colors: Vec<String>,

    /// Palette name used in generated artifacts
    #[arg(long, default_value = "Brand Palette")]
    pub name: String,

    /// Mode for the tailwind emitter (css and json always carry both)
    #[arg(long, value_enum, default_value_t = ModeArg::Both)]
    pub mode: ModeArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Css)]
    pub format: FormatArg,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Load configuration from TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Save current configuration to TOML file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Print the contrast report and a swatch listing, emit nothing
    #[arg(long)]
    pub check: bool,

    /// Fail on contrast violations instead of repairing them
    #[arg(long)]
    pub no_adjust: bool,

    /// Log file path (default: brandscale.log)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}
