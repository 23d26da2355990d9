//! Preset catalog: named, ready-to-generate package descriptors.
//!
//! Every builtin preset passes its family's design rule check as shipped,
//! so `fpgen --preset '?NAME'` always yields a valid footprint. User preset
//! files loaded from JSON extend (and may shadow) the builtin set.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use super::error::{ElementError, ElementResult};
use super::{Family, PackageDescriptor, PadShape, UnitSystem};

/// An ordered catalog of named descriptors.
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    presets: IndexMap<String, PackageDescriptor>,
}

impl PresetCatalog {
    /// Creates a catalog containing the builtin presets.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut catalog = Self::default();
        for preset in builtin_presets() {
            catalog.insert(preset);
        }
        catalog
    }

    /// Inserts a preset under its footprint name, replacing any existing
    /// entry with the same name.
    pub fn insert(&mut self, preset: PackageDescriptor) {
        self.presets.insert(preset.name.clone(), preset);
    }

    /// Looks up a preset by name.
    ///
    /// A leading `?` (the catalog lookup sigil) is stripped, so both
    /// `"CAPC0603X33N"` and `"?CAPC0603X33N"` resolve the same entry.
    pub fn lookup(&self, key: &str) -> ElementResult<&PackageDescriptor> {
        let name = key.strip_prefix('?').unwrap_or(key);
        self.presets
            .get(name)
            .ok_or_else(|| ElementError::preset_not_found(key))
    }

    /// Loads additional presets from a JSON file holding an array of
    /// descriptors. Later entries shadow earlier ones of the same name.
    pub fn extend_from_path(&mut self, path: &Path) -> ElementResult<()> {
        let text = fs::read_to_string(path).map_err(|source| ElementError::file_read(path, source))?;
        let presets: Vec<PackageDescriptor> =
            serde_json::from_str(&text).map_err(|source| ElementError::ParseError {
                path: path.to_path_buf(),
                source,
            })?;
        for preset in presets {
            self.insert(preset);
        }
        Ok(())
    }

    /// Preset names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    /// Number of presets in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Returns true when the catalog holds no presets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

fn builtin_presets() -> Vec<PackageDescriptor> {
    vec![
        capc0603x33n(),
        capc0816x61n(),
        resc1608x45n(),
        capm3216x180n(),
        cappr200_500(),
        to92(),
        dip8(),
        dil16(),
        hdr2x5(),
        sil6(),
    ]
}

/// 0201-class chip capacitor, nominal density.
fn capc0603x33n() -> PackageDescriptor {
    let mut d = PackageDescriptor::new(Family::Chip, "CAPC0603X33N");
    d.refdes = "C?".to_string();
    d.unit_system = UnitSystem::Mm;
    d.number_of_pins = 2;
    d.pitch_x = 0.66;
    d.pad_shape = PadShape::Square;
    d.pad_length = 0.46;
    d.pad_width = 0.42;
    d.pad_clearance = 0.15;
    d.pad_solder_mask_clearance = 0.075;
    d.package_body_length = 0.63;
    d.package_body_width = 0.30;
    d.package_body_height = 0.33;
    d.courtyard_enabled = true;
    d.courtyard_length = 1.63;
    d.courtyard_width = 1.00;
    d.courtyard_line_width = 0.05;
    d.courtyard_clearance_with_package = 0.25;
    d.silkscreen_package_outline = true;
    d.silkscreen_line_width = 0.20;
    d
}

/// Wide chip capacitor whose pads are taller than they are long, so the
/// pad pair runs perpendicular to the pitch axis.
fn capc0816x61n() -> PackageDescriptor {
    let mut d = PackageDescriptor::new(Family::Chip, "CAPC0816X61N");
    d.refdes = "C?".to_string();
    d.unit_system = UnitSystem::Mm;
    d.number_of_pins = 2;
    d.pitch_x = 0.80;
    d.pad_shape = PadShape::Square;
    d.pad_length = 0.50;
    d.pad_width = 1.60;
    d.pad_clearance = 0.15;
    d.pad_solder_mask_clearance = 0.075;
    d.package_body_length = 0.80;
    d.package_body_width = 1.60;
    d.package_body_height = 0.61;
    d.courtyard_enabled = true;
    d.courtyard_length = 1.90;
    d.courtyard_width = 2.30;
    d.courtyard_line_width = 0.05;
    d.courtyard_clearance_with_package = 0.25;
    d.silkscreen_package_outline = true;
    d.silkscreen_line_width = 0.20;
    d
}

/// 0603-class chip resistor.
fn resc1608x45n() -> PackageDescriptor {
    let mut d = PackageDescriptor::new(Family::Chip, "RESC1608X45N");
    d.refdes = "R?".to_string();
    d.unit_system = UnitSystem::Mm;
    d.number_of_pins = 2;
    d.pitch_x = 1.45;
    d.pad_shape = PadShape::Square;
    d.pad_length = 0.95;
    d.pad_width = 1.00;
    d.pad_clearance = 0.25;
    d.pad_solder_mask_clearance = 0.075;
    d.package_body_length = 1.60;
    d.package_body_width = 0.80;
    d.package_body_height = 0.45;
    d.courtyard_enabled = true;
    d.courtyard_length = 2.90;
    d.courtyard_width = 1.50;
    d.courtyard_line_width = 0.05;
    d.courtyard_clearance_with_package = 0.25;
    d.silkscreen_package_outline = true;
    d.silkscreen_line_width = 0.20;
    d
}

/// Molded polarized tantalum capacitor, EIA 3216.
fn capm3216x180n() -> PackageDescriptor {
    let mut d = PackageDescriptor::new(Family::Molded, "CAPM3216X180N");
    d.refdes = "C?".to_string();
    d.unit_system = UnitSystem::Mm;
    d.number_of_pins = 2;
    d.pitch_x = 2.40;
    d.pad_shape = PadShape::Square;
    d.pad_length = 1.50;
    d.pad_width = 1.40;
    d.pad_clearance = 0.25;
    d.pad_solder_mask_clearance = 0.075;
    d.pin1_square = true;
    d.package_body_length = 3.20;
    d.package_body_width = 1.60;
    d.package_body_height = 1.80;
    d.courtyard_enabled = true;
    d.courtyard_length = 4.80;
    d.courtyard_width = 2.40;
    d.courtyard_line_width = 0.05;
    d.courtyard_clearance_with_package = 0.50;
    d.silkscreen_package_outline = true;
    d.silkscreen_line_width = 0.20;
    d.silkscreen_indicate_pin1 = true;
    d
}

/// Radial electrolytic capacitor, 2.0 mm lead spacing, 5.0 mm can.
fn cappr200_500() -> PackageDescriptor {
    let mut d = PackageDescriptor::new(Family::Radial, "CAPPR200-500");
    d.refdes = "C?".to_string();
    d.unit_system = UnitSystem::Mm;
    d.number_of_pins = 2;
    d.pitch_x = 2.00;
    d.pad_shape = PadShape::Round;
    d.pad_diameter = 1.30;
    d.pin_drill_diameter = 0.70;
    d.pad_clearance = 0.30;
    d.pad_solder_mask_clearance = 0.15;
    d.pin1_square = true;
    d.package_body_length = 5.00;
    d.package_body_width = 5.00;
    d.package_body_height = 11.00;
    d.package_is_radial = true;
    d.courtyard_enabled = true;
    d.courtyard_length = 6.00;
    d.courtyard_width = 6.00;
    d.courtyard_line_width = 0.05;
    d.courtyard_clearance_with_package = 0.50;
    d.silkscreen_package_outline = true;
    d.silkscreen_line_width = 0.20;
    d.silkscreen_indicate_pin1 = true;
    d
}

/// TO92 transistor can.
fn to92() -> PackageDescriptor {
    let mut d = PackageDescriptor::new(Family::To92, "TO92");
    d.refdes = "Q?".to_string();
    d.unit_system = UnitSystem::Mil;
    d.number_of_pins = 3;
    d.pad_shape = PadShape::Round;
    d.pad_diameter = 72.0;
    d.pin_drill_diameter = 32.0;
    d.pad_clearance = 10.0;
    d.pad_solder_mask_clearance = 6.0;
    d.pin1_square = true;
    d.package_body_height = 190.0;
    d.package_is_radial = true;
    d.courtyard_enabled = true;
    d.courtyard_line_width = 2.0;
    d.courtyard_clearance_with_package = 25.0;
    d.silkscreen_package_outline = true;
    d.silkscreen_line_width = 10.0;
    d.silkscreen_indicate_pin1 = true;
    d
}

/// 8-pin dual-in-line package, 300 mil row spacing.
fn dip8() -> PackageDescriptor {
    let mut d = PackageDescriptor::new(Family::Dip, "DIP8");
    d.refdes = "U?".to_string();
    d.unit_system = UnitSystem::Mil;
    d.number_of_rows = 4;
    d.number_of_columns = 2;
    d.number_of_pins = 8;
    d.pitch_x = 300.0;
    d.pitch_y = 100.0;
    d.pad_shape = PadShape::Octagon;
    d.pad_diameter = 60.0;
    d.pin_drill_diameter = 28.0;
    d.pad_clearance = 10.0;
    d.pad_solder_mask_clearance = 6.0;
    d.pin1_square = true;
    d.package_body_length = 260.0;
    d.package_body_width = 420.0;
    d.package_body_height = 130.0;
    d.courtyard_enabled = true;
    d.courtyard_length = 460.0;
    d.courtyard_width = 560.0;
    d.courtyard_line_width = 2.0;
    d.courtyard_clearance_with_package = 20.0;
    d.silkscreen_package_outline = true;
    d.silkscreen_line_width = 10.0;
    d.silkscreen_indicate_pin1 = true;
    d
}

/// 16-pin dual-in-line connector with interleaved numbering.
fn dil16() -> PackageDescriptor {
    let mut d = PackageDescriptor::new(Family::Dil, "DIL16");
    d.refdes = "J?".to_string();
    d.unit_system = UnitSystem::Mil;
    d.number_of_rows = 8;
    d.number_of_columns = 2;
    d.number_of_pins = 16;
    d.pitch_x = 100.0;
    d.pitch_y = 100.0;
    d.pad_shape = PadShape::Round;
    d.pad_diameter = 62.0;
    d.pin_drill_diameter = 40.0;
    d.pad_clearance = 10.0;
    d.pad_solder_mask_clearance = 6.0;
    d.pin1_square = true;
    d.package_body_length = 200.0;
    d.package_body_width = 820.0;
    d.package_body_height = 350.0;
    d.courtyard_enabled = true;
    d.courtyard_length = 280.0;
    d.courtyard_width = 900.0;
    d.courtyard_line_width = 2.0;
    d.courtyard_clearance_with_package = 20.0;
    d.silkscreen_package_outline = true;
    d.silkscreen_line_width = 10.0;
    d.silkscreen_indicate_pin1 = true;
    d
}

/// 2x5 pin header, column-major numbering.
fn hdr2x5() -> PackageDescriptor {
    let mut d = PackageDescriptor::new(Family::Header, "HDR2X5");
    d.refdes = "J?".to_string();
    d.unit_system = UnitSystem::Mil;
    d.number_of_rows = 5;
    d.number_of_columns = 2;
    d.number_of_pins = 10;
    d.pitch_x = 100.0;
    d.pitch_y = 100.0;
    d.pad_shape = PadShape::Square;
    d.pad_diameter = 62.0;
    d.pin_drill_diameter = 40.0;
    d.pad_clearance = 10.0;
    d.pad_solder_mask_clearance = 6.0;
    d.pin1_square = true;
    d.package_body_length = 200.0;
    d.package_body_width = 500.0;
    d.package_body_height = 340.0;
    d.courtyard_enabled = true;
    d.courtyard_length = 280.0;
    d.courtyard_width = 580.0;
    d.courtyard_line_width = 2.0;
    d.courtyard_clearance_with_package = 20.0;
    d.silkscreen_package_outline = true;
    d.silkscreen_line_width = 10.0;
    d.silkscreen_indicate_pin1 = true;
    d
}

/// 6-pin single-in-line row.
fn sil6() -> PackageDescriptor {
    let mut d = PackageDescriptor::new(Family::Sil, "SIL6");
    d.refdes = "J?".to_string();
    d.unit_system = UnitSystem::Mil;
    d.number_of_rows = 1;
    d.number_of_columns = 6;
    d.number_of_pins = 6;
    d.pitch_x = 100.0;
    d.pad_shape = PadShape::Round;
    d.pad_diameter = 62.0;
    d.pin_drill_diameter = 40.0;
    d.pad_clearance = 10.0;
    d.pad_solder_mask_clearance = 6.0;
    d.pin1_square = true;
    d.package_body_length = 620.0;
    d.package_body_width = 100.0;
    d.package_body_height = 340.0;
    d.courtyard_enabled = true;
    d.courtyard_length = 700.0;
    d.courtyard_width = 180.0;
    d.courtyard_line_width = 2.0;
    d.courtyard_clearance_with_package = 20.0;
    d.silkscreen_package_outline = true;
    d.silkscreen_line_width = 10.0;
    d.silkscreen_indicate_pin1 = true;
    d
}
