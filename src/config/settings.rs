//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use std::path::PathBuf;

use serde::Deserialize;

use crate::element::PackageDescriptor;
use crate::error::ConfigError;

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Path to a JSON file with extra presets, merged over the builtins.
    #[serde(default)]
    pub preset_file: Option<PathBuf>,

    /// Descriptor pre-fill defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Invalid {
                message: format!(
                    "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                ),
            });
        }
        for (name, value) in [
            (
                "defaults.silkscreen_line_width",
                self.defaults.silkscreen_line_width,
            ),
            (
                "defaults.courtyard_line_width",
                self.defaults.courtyard_line_width,
            ),
            (
                "defaults.courtyard_clearance_with_package",
                self.defaults.courtyard_clearance_with_package,
            ),
        ] {
            if let Some(v) = value {
                if v <= 0.0 {
                    return Err(ConfigError::Invalid {
                        message: format!("'{name}' must be positive, got {v}"),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Descriptor pre-fill defaults.
///
/// Each value is applied to a descriptor only where the descriptor leaves
/// the corresponding field empty or zero; explicit descriptor values always
/// win. Lengths are interpreted in the descriptor's own unit system.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Reference designator prefix, e.g. "C?".
    #[serde(default)]
    pub refdes: Option<String>,

    /// Silkscreen line width.
    #[serde(default)]
    pub silkscreen_line_width: Option<f64>,

    /// Courtyard line width.
    #[serde(default)]
    pub courtyard_line_width: Option<f64>,

    /// Minimum courtyard clearance around the package body.
    #[serde(default)]
    pub courtyard_clearance_with_package: Option<f64>,
}

impl DefaultsConfig {
    /// Fills the unset fields of a descriptor from these defaults.
    pub fn apply(&self, descriptor: &mut PackageDescriptor) {
        if descriptor.refdes.is_empty() {
            if let Some(ref refdes) = self.refdes {
                descriptor.refdes.clone_from(refdes);
            }
        }
        if descriptor.silkscreen_line_width <= 0.0 {
            if let Some(width) = self.silkscreen_line_width {
                descriptor.silkscreen_line_width = width;
            }
        }
        if descriptor.courtyard_line_width <= 0.0 {
            if let Some(width) = self.courtyard_line_width {
                descriptor.courtyard_line_width = width;
            }
        }
        if descriptor.courtyard_clearance_with_package <= 0.0 {
            if let Some(clearance) = self.courtyard_clearance_with_package {
                descriptor.courtyard_clearance_with_package = clearance;
            }
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
