//! Unit systems and scaling onto the integer output grid.
//!
//! All coordinates in a written footprint file are integers in hundredths of
//! a mil (1 unit = 0.01 mil). A descriptor declares its own unit system and
//! every length in it is converted with a single scalar multiplier:
//!
//! | Unit system | Multiplier |
//! |-------------|------------|
//! | mil         | 100        |
//! | mil/100     | 1          |
//! | millimetre  | 3937.007874... |
//!
//! A descriptor without a unit system still converts (multiplier 1.0) so the
//! builder never panics; the design rule checker rejects it instead.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Conversion factor from millimetres to output grid units.
/// Grid units: 100 = 1 mil = 0.0254 mm.
pub const MM_TO_GRID: f64 = 100.0 / 0.0254;

/// Unit system of a package descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// No unit system selected. Converts with 1.0; always a DRC failure.
    #[default]
    None,
    /// Mil (1/1000 inch).
    Mil,
    /// Hundredths of a mil (the output grid itself).
    Mil100,
    /// Millimetre.
    Mm,
}

impl UnitSystem {
    /// Returns the multiplier converting descriptor lengths to grid units.
    ///
    /// Always positive. `None` defaults to 1.0; the DRC flags it separately.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::None | Self::Mil100 => 1.0,
            Self::Mil => 100.0,
            Self::Mm => MM_TO_GRID,
        }
    }

    /// Parses a unit system from a string.
    ///
    /// Accepts: "mil", "mil/100", "mm", "millimeter" (case-insensitive).
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mil" => Some(Self::Mil),
            "mil/100" | "mil100" => Some(Self::Mil100),
            "mm" | "millimeter" | "millimetre" => Some(Self::Mm),
            _ => None,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "(no units)"),
            Self::Mil => write!(f, "mil"),
            Self::Mil100 => write!(f, "mil/100"),
            Self::Mm => write!(f, "mm"),
        }
    }
}

/// Converts a descriptor-space length to grid units, rounded to nearest.
#[allow(clippy::cast_possible_truncation)] // Footprint coordinates fit in i64
#[must_use]
pub fn to_grid(value: f64, multiplier: f64) -> i64 {
    (value * multiplier).round() as i64
}
