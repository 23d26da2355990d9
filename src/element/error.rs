//! Error types for footprint element operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for element operations.
pub type ElementResult<T> = Result<T, ElementError>;

/// Errors that can occur while generating or writing a footprint element.
#[derive(Debug, Error)]
pub enum ElementError {
    /// Failed to open or write the destination file.
    #[error("Failed to write footprint file: {path}")]
    FileWrite {
        /// Path to the destination file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to read a descriptor or preset file.
    #[error("Failed to read file: {path}")]
    FileRead {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to parse a descriptor or preset file.
    #[error("Failed to parse file: {path}")]
    ParseError {
        /// Path to the file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Preset lookup key not found in the catalog.
    #[error("Unknown preset: {key}")]
    PresetNotFound {
        /// The lookup key that was not found.
        key: String,
    },

    /// The element has no copper primitives, so there is nothing to write.
    #[error("Element '{name}' contains no pins or pads")]
    EmptyElement {
        /// Footprint name of the empty element.
        name: String,
    },

    /// A write to an already-open stream failed.
    #[error("I/O error")]
    Io {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl From<io::Error> for ElementError {
    fn from(source: io::Error) -> Self {
        Self::Io { source }
    }
}

impl ElementError {
    /// Creates a file write error.
    pub fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Creates a file read error.
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a preset-not-found error.
    pub fn preset_not_found(key: impl Into<String>) -> Self {
        Self::PresetNotFound { key: key.into() }
    }

    /// Creates an empty-element error.
    pub fn empty_element(name: impl Into<String>) -> Self {
        Self::EmptyElement { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_not_found_display() {
        let err = ElementError::preset_not_found("?CAPC9999X99N");
        assert_eq!(err.to_string(), "Unknown preset: ?CAPC9999X99N");
    }

    #[test]
    fn empty_element_display() {
        let err = ElementError::empty_element("CAPC0603X33N");
        assert!(err.to_string().contains("no pins or pads"));
    }
}
