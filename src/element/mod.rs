//! Footprint element generation.
//!
//! This module is the core engine: it turns an immutable [`PackageDescriptor`]
//! into primitive geometry, runs the design rule check, and writes the
//! textual footprint file.
//!
//! The shell (CLI or any other front end) drives exactly three entry points:
//!
//! - [`build_primitives`] — descriptor to ordered primitive list + courtyard
//! - [`check_rules`] — descriptor to a design-rule-check result
//! - [`serialize`] / [`serialize_to_path`] — primitive list to the output file
//!
//! The descriptor is read-only during all three; there is no shared mutable
//! state, so independent generation runs never interfere.

pub mod courtyard;
pub mod drc;
pub mod error;
pub mod families;
pub mod layout;
pub mod presets;
pub mod primitives;
pub mod units;
pub mod writer;

use serde::{Deserialize, Serialize};

pub use courtyard::CourtyardBound;
pub use drc::DrcResult;
pub use error::{ElementError, ElementResult};
pub use presets::PresetCatalog;
pub use primitives::{Label, Primitive, ShapeFlags};
pub use units::UnitSystem;
pub use writer::{serialize, serialize_to_path};

use std::fmt;

/// Package family: a class of packages sharing a layout strategy and a pin
/// numbering convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Two-pad surface-mount chip parts (CAPC/RESC style).
    Chip,
    /// Two-pad molded polarized parts (CAPM style).
    Molded,
    /// Polarized radial through-hole parts (CAPPR style).
    Radial,
    /// Dual-in-line connector, zig-zag interleaved row numbering.
    Dil,
    /// Dual-in-line package, mirrored-column numbering (down one side,
    /// back up the other).
    Dip,
    /// Header grid, column-major numbering.
    Header,
    /// Single-in-line row.
    Sil,
    /// Transistor outline (TO92-style radial ring).
    To92,
}

impl Family {
    /// Returns the short uppercase token used to tag diagnostics.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Chip => "CHIP",
            Self::Molded => "MOLDED",
            Self::Radial => "RADIAL",
            Self::Dil => "DIL",
            Self::Dip => "DIP",
            Self::Header => "HDR",
            Self::Sil => "SIL",
            Self::To92 => "TO92",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Copper shape of a pad or pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PadShape {
    /// No shape selected.
    #[default]
    NoShape,
    /// Round pad (uses `pad_diameter`).
    Round,
    /// Square pad (uses `pad_diameter`).
    Square,
    /// Octagonal pad (uses `pad_diameter`).
    Octagon,
    /// Rounded pad, elongated: a slotted shape using `pad_length` and
    /// `pad_width`.
    RoundElongated,
}

/// The complete, immutable-per-run input driving one footprint instance.
///
/// Constructed once per generation run (from explicit values, a JSON
/// parameter file, or the preset catalog), read-only during building,
/// rule checking and serialization, and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageDescriptor {
    /// Package family.
    pub family: Family,
    /// Footprint name (becomes the element description).
    pub name: String,
    /// Reference designator, e.g. "C?".
    pub refdes: String,
    /// Component value, e.g. "100n".
    pub value: String,

    /// Unit system of every length field below.
    pub unit_system: UnitSystem,

    /// Pin/pad pitch along X.
    pub pitch_x: f64,
    /// Pin/pad pitch along Y. Exactly 0 for two-terminal and single-row
    /// families.
    pub pitch_y: f64,
    /// Number of rows in grid layouts.
    pub number_of_rows: u32,
    /// Number of columns in grid layouts.
    pub number_of_columns: u32,
    /// Total number of pins or pads.
    pub number_of_pins: u32,
    /// Occupied positions along X (grids with gaps). Widens the courtyard
    /// pad extent when it exceeds `number_of_columns`.
    pub count_x: u32,
    /// Occupied positions along Y (grids with gaps). Widens the courtyard
    /// pad extent when it exceeds `number_of_rows`.
    pub count_y: u32,

    /// Copper shape of pads and pins.
    pub pad_shape: PadShape,
    /// Pad length (along the pad's long axis).
    pub pad_length: f64,
    /// Pad width (along the pad's short axis).
    pub pad_width: f64,
    /// Pad/pin copper diameter, for round/square/octagonal shapes.
    pub pad_diameter: f64,
    /// Drill diameter for through-hole pins.
    pub pin_drill_diameter: f64,
    /// Copper clearance around pads and pins.
    pub pad_clearance: f64,
    /// Solder mask clearance around pads and pins.
    pub pad_solder_mask_clearance: f64,
    /// Force a square shape on pin/pad #1 regardless of `pad_shape`.
    pub pin1_square: bool,

    /// Package body length (X).
    pub package_body_length: f64,
    /// Package body width (Y).
    pub package_body_width: f64,
    /// Package body height (Z).
    pub package_body_height: f64,
    /// Whether the package body is radial (round).
    pub package_is_radial: bool,

    /// Whether to draw the courtyard.
    pub courtyard_enabled: bool,
    /// User-declared courtyard length (X).
    pub courtyard_length: f64,
    /// User-declared courtyard width (Y).
    pub courtyard_width: f64,
    /// Courtyard line width.
    pub courtyard_line_width: f64,
    /// Minimum clearance the courtyard must leave around the body.
    pub courtyard_clearance_with_package: f64,

    /// Whether to draw the package outline on the silkscreen.
    pub silkscreen_package_outline: bool,
    /// Silkscreen line width.
    pub silkscreen_line_width: f64,
    /// Whether to mark pin 1 on the silkscreen.
    pub silkscreen_indicate_pin1: bool,

    /// Whether to place fiducial pads.
    pub fiducial: bool,
    /// Fiducial pad diameter.
    pub fiducial_pad_diameter: f64,
    /// Fiducial pad solder mask clearance.
    pub fiducial_solder_mask_clearance: f64,
    /// Whether to place a central thermal pad.
    pub thermal: bool,
    /// Thermal pad length (X).
    pub thermal_length: f64,
    /// Thermal pad width (Y).
    pub thermal_width: f64,
    /// Whether to embed attribute records in the footprint file.
    pub attributes_in_footprint: bool,
}

impl Default for PackageDescriptor {
    fn default() -> Self {
        Self::new(Family::Chip, "")
    }
}

impl PackageDescriptor {
    /// Creates an empty descriptor for the given family.
    #[must_use]
    pub fn new(family: Family, name: impl Into<String>) -> Self {
        Self {
            family,
            name: name.into(),
            refdes: String::new(),
            value: String::new(),
            unit_system: UnitSystem::None,
            pitch_x: 0.0,
            pitch_y: 0.0,
            number_of_rows: 0,
            number_of_columns: 0,
            number_of_pins: 0,
            count_x: 0,
            count_y: 0,
            pad_shape: PadShape::NoShape,
            pad_length: 0.0,
            pad_width: 0.0,
            pad_diameter: 0.0,
            pin_drill_diameter: 0.0,
            pad_clearance: 0.0,
            pad_solder_mask_clearance: 0.0,
            pin1_square: false,
            package_body_length: 0.0,
            package_body_width: 0.0,
            package_body_height: 0.0,
            package_is_radial: false,
            courtyard_enabled: false,
            courtyard_length: 0.0,
            courtyard_width: 0.0,
            courtyard_line_width: 0.0,
            courtyard_clearance_with_package: 0.0,
            silkscreen_package_outline: false,
            silkscreen_line_width: 0.0,
            silkscreen_indicate_pin1: false,
            fiducial: false,
            fiducial_pad_diameter: 0.0,
            fiducial_solder_mask_clearance: 0.0,
            thermal: false,
            thermal_length: 0.0,
            thermal_width: 0.0,
            attributes_in_footprint: false,
        }
    }

    /// Returns the scalar converting this descriptor's lengths to grid
    /// units. Always positive.
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        self.unit_system.multiplier()
    }

    /// The governing pad dimension along X: the larger of pad length and
    /// pad diameter, except for round-elongated shapes which always use
    /// the length.
    #[must_use]
    pub fn pad_dimension_x(&self) -> f64 {
        match self.pad_shape {
            PadShape::RoundElongated => self.pad_length,
            _ => self.pad_length.max(self.pad_diameter),
        }
    }

    /// The governing pad dimension along Y: the larger of pad width and
    /// pad diameter, except for round-elongated shapes which always use
    /// the width.
    #[must_use]
    pub fn pad_dimension_y(&self) -> f64 {
        match self.pad_shape {
            PadShape::RoundElongated => self.pad_width,
            _ => self.pad_width.max(self.pad_diameter),
        }
    }
}

/// A built footprint element: the ordered primitive list, grouped into the
/// structural sections the serializer annotates, plus the courtyard bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Footprint name.
    pub name: String,
    /// Reference designator.
    pub refdes: String,
    /// Component value.
    pub value: String,
    /// The three label primitives (name, refdes, value).
    pub labels: Vec<Label>,
    /// Copper primitives (pins and pads), in placement order.
    pub copper: Vec<Primitive>,
    /// Silkscreen package outline primitives.
    pub silkscreen: Vec<Primitive>,
    /// Pin-1 marker primitives.
    pub pin1_marker: Vec<Primitive>,
    /// Courtyard primitives (four lines, or one arc for radial packages).
    pub courtyard: Vec<Primitive>,
    /// Attribute records to embed, in emission order.
    pub attributes: Vec<(String, String)>,
    /// The computed courtyard bound.
    pub bound: CourtyardBound,
}

impl Element {
    /// Creates an element shell from a descriptor, with no primitives yet.
    #[must_use]
    pub fn from_descriptor(descriptor: &PackageDescriptor, bound: CourtyardBound) -> Self {
        Self {
            name: descriptor.name.clone(),
            refdes: descriptor.refdes.clone(),
            value: descriptor.value.clone(),
            labels: Vec::new(),
            copper: Vec::new(),
            silkscreen: Vec::new(),
            pin1_marker: Vec::new(),
            courtyard: Vec::new(),
            attributes: Vec::new(),
            bound,
        }
    }

    /// Returns true when the element carries no copper primitives.
    ///
    /// Serializing such an element is refused with
    /// [`ElementError::EmptyElement`]; callers should treat it as an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.copper.is_empty()
    }

    /// Iterates over every primitive in file emission order.
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.copper
            .iter()
            .chain(&self.silkscreen)
            .chain(&self.pin1_marker)
            .chain(&self.courtyard)
    }
}

/// Builds the ordered primitive list for a descriptor.
///
/// Never fails outright: a descriptor whose family strategy produces no
/// copper yields an element with an empty primitive list (and a warning in
/// the log); callers must check [`Element::is_empty`] before serializing.
#[must_use]
pub fn build_primitives(descriptor: &PackageDescriptor) -> Element {
    let element = families::build(descriptor);
    if element.is_empty() {
        tracing::warn!(
            family = %descriptor.family,
            name = %descriptor.name,
            "descriptor produced no copper primitives"
        );
    }
    element
}

/// Runs the family's design rule table against a descriptor.
///
/// Every rule is evaluated; the result carries one diagnostic per violated
/// rule. The core never refuses to serialize on DRC failure — that policy
/// belongs to the caller.
#[must_use]
pub fn check_rules(descriptor: &PackageDescriptor) -> DrcResult {
    drc::evaluate(&families::rule_table(descriptor.family), descriptor)
}
