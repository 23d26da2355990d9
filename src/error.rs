//! Error types for configuration handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the tool configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("cannot read configuration file: {path}")]
    Read {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("cannot parse configuration file: {path}")]
    Parse {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// A configured value is out of range or unknown.
    #[error("invalid configuration: {message}")]
    Invalid {
        /// Description of the rejected value.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_the_path() {
        let error = ConfigError::NotFound {
            path: PathBuf::from("/home/user/.fpgen/config.json"),
        };
        let msg = error.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains(".fpgen"));
    }

    #[test]
    fn invalid_display_carries_the_message() {
        let error = ConfigError::Invalid {
            message: "'defaults.courtyard_line_width' must be positive, got -1".to_string(),
        };
        assert!(error.to_string().contains("must be positive"));
    }
}
