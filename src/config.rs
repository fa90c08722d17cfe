//! TOML configuration file support for palette generation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analyze::MAX_BRAND_COLORS;

/// Output formats the emitters understand.
const KNOWN_FORMATS: [&str; 3] = ["css", "json", "tailwind"];

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read or written
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Malformed TOML
    Parse(toml::de::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// A brand color that does not parse as a CSS color
    BadBrandColor { color: String, reason: String },
    /// More brand colors than a palette accepts
    TooManyBrandColors(usize),
    /// An output format no emitter understands
    UnknownFormat(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File { path, source } => {
                write!(f, "config file {}: {source}", path.display())
            }
            Self::Parse(e) => write!(f, "malformed config: {e}"),
            Self::Serialize(e) => write!(f, "could not serialize config: {e}"),
            Self::BadBrandColor { color, reason } => {
                write!(f, "brand color '{color}' is not a CSS color: {reason}")
            }
            Self::TooManyBrandColors(count) => write!(
                f,
                "{count} brand colors configured; a palette takes at most {MAX_BRAND_COLORS}"
            ),
            Self::UnknownFormat(format) => write!(
                f,
                "unknown output format '{format}' (expected one of: {})",
                KNOWN_FORMATS.join(", ")
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::File { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            Self::Serialize(e) => Some(e),
            Self::BadBrandColor { .. } | Self::TooManyBrandColors(_) | Self::UnknownFormat(_) => {
                None
            }
        }
    }
}

/// Root configuration structure for TOML files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    /// Brand inputs
    pub brand: BrandSection,
    /// Output settings
    pub output: OutputConfig,
    /// Contrast handling
    pub contrast: ContrastConfig,
}

/// Brand inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandSection {
    /// Palette name used in generated artifacts
    pub name: String,
    /// Brand colors (up to 7) in any CSS color format
    pub colors: Vec<String>,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory artifacts are written into (stdout when unset)
    pub directory: Option<PathBuf>,
    /// Formats to emit: css, json, tailwind
    pub formats: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            formats: vec!["css".to_string()],
        }
    }
}

/// Contrast handling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastConfig {
    /// Fail on contrast violations instead of repairing them
    pub no_adjust: bool,
}

impl BrandConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, content).map_err(|source| ConfigError::File {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check the whole config before generation: every brand color must
    /// parse, the set must fit a palette, and every format must have an
    /// emitter. Unlike command-line input, a config file is a durable
    /// artifact, so an oversized color set is an error here rather than a
    /// truncation warning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validated_colors()?;
        for format in &self.output.formats {
            if !KNOWN_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::UnknownFormat(format.clone()));
            }
        }
        Ok(())
    }

    /// The configured brand colors, after checking each parses as a CSS
    /// color and the set fits a palette.
    pub fn validated_colors(&self) -> Result<Vec<String>, ConfigError> {
        if self.brand.colors.len() > MAX_BRAND_COLORS {
            return Err(ConfigError::TooManyBrandColors(self.brand.colors.len()));
        }
        for color in &self.brand.colors {
            if let Err(e) = color.parse::<csscolorparser::Color>() {
                return Err(ConfigError::BadBrandColor {
                    color: color.clone(),
                    reason: e.to_string(),
                });
            }
        }
        Ok(self.brand.colors.clone())
    }
}
