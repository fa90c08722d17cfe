//! CLI argument parsing and command handling.

pub use crate::cli_args::*;

use crate::config::BrandConfig;

impl FormatArg {
    /// Stable key used in config files and output filenames.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Json => "json",
            Self::Tailwind => "tailwind",
        }
    }

    /// File extension for artifacts of this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Json => "json",
            Self::Tailwind => "js",
        }
    }
}

impl Cli {
    /// Brand colors after merging with an optional config file. Flags win;
    /// the config only fills in what the command line left empty.
    pub fn effective_colors(&self, config: Option<&BrandConfig>) -> Vec<String> {
        if !self.colors.is_empty() {
            return self.colors.clone();
        }
        config
            .map(|c| c.brand.colors.clone())
            .unwrap_or_default()
    }

    /// Palette name after merging with an optional config file.
    pub fn effective_name(&self, config: Option<&BrandConfig>) -> String {
        if self.name != "Brand Palette" {
            return self.name.clone();
        }
        match config {
            Some(c) if !c.brand.name.is_empty() => c.brand.name.clone(),
            _ => self.name.clone(),
        }
    }

    /// Snapshot of the effective settings, for `--save-config`.
    pub fn to_config(&self) -> BrandConfig {
        let mut config = BrandConfig::default();
        config.brand.name = self.name.clone();
        config.brand.colors = self.colors.clone();
        config.output.formats = vec![self.format.as_str().to_string()];
        config.contrast.no_adjust = self.no_adjust;
        config
    }
}
