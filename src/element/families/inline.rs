//! Linear grid strategies for in-line connectors and headers.
//!
//! Four sub-families share the grid layout and differ only in their pin
//! numbering convention, which in turn fixes where the silkscreen pin-1
//! marker lands:
//!
//! - `DIL`: zig-zag interleaved rows (odd numbers left, even right),
//! - `DIP`: mirrored columns (down one side, back up the other),
//! - `HDR`: column-major (each column numbered before the next),
//! - `SIL`: a single row numbered left to right.

use crate::element::courtyard::compute_bound;
use crate::element::drc::{self, Rule};
use crate::element::layout::{self, GridNumbering};
use crate::element::units::to_grid;
use crate::element::{Element, Family, PackageDescriptor, PadShape};

/// Pad shapes accepted for drilled connector pins.
const ALLOWED_SHAPES: &[PadShape] = &[PadShape::Round, PadShape::Square, PadShape::Octagon];

/// The numbering convention declared for each sub-family.
#[must_use]
pub const fn numbering(family: Family) -> GridNumbering {
    match family {
        Family::Dil => GridNumbering::Zigzag,
        Family::Dip => GridNumbering::MirroredColumns,
        Family::Sil => GridNumbering::Row,
        // Header grids and any family routed here without its own
        // convention number column-major.
        _ => GridNumbering::ColumnMajor,
    }
}

/// Builds an in-line connector element.
#[must_use]
pub fn build(descriptor: &PackageDescriptor) -> Element {
    let bound = compute_bound(descriptor);
    let mut element = Element::from_descriptor(descriptor, bound);

    element.copper = layout::grid_pins(descriptor, numbering(descriptor.family));

    element.silkscreen = layout::silkscreen_rectangle(descriptor);
    if let Some((x, y)) = layout::position_of(&element.copper, 1) {
        // The marker sits half a pitch outside pin 1, on the side the
        // numbering starts from.
        let m = descriptor.multiplier();
        let offset = to_grid(descriptor.pitch_x.max(descriptor.pitch_y) / 2.0, m);
        element.pin1_marker = layout::pin1_marker_dot(descriptor, x - offset, y + offset);
    }

    element.courtyard = layout::courtyard_primitives(descriptor, bound, false);
    element.labels = layout::labels(descriptor, bound);
    element.attributes = layout::attributes(descriptor);
    element
}

/// `number_of_pins` must equal `number_of_rows x number_of_columns`.
///
/// Compared in `u64` so an absurd grid declaration is diagnosed instead of
/// overflowing.
#[must_use]
fn pin_count_matches_grid() -> Rule {
    Rule::new("pin-count-matches-grid", |d| {
        let cells = u64::from(d.number_of_rows) * u64::from(d.number_of_columns);
        (u64::from(d.number_of_pins) != cells).then(|| {
            format!(
                "{} pins do not fill a {} x {} grid",
                d.number_of_pins, d.number_of_rows, d.number_of_columns
            )
        })
    })
}

/// The mirrored and interleaved numbering conventions are defined for
/// exactly two columns.
#[must_use]
fn two_columns() -> Rule {
    Rule::new("two-columns", |d| {
        (d.number_of_columns != 2).then(|| {
            format!(
                "{} columns declared, this numbering needs exactly 2",
                d.number_of_columns
            )
        })
    })
}

/// The design rule table for the in-line families.
#[must_use]
pub fn rules(family: Family) -> Vec<Rule> {
    let mut rules = vec![
        drc::units_selected(),
        drc::allowed_pad_shapes(ALLOWED_SHAPES),
        pin_count_matches_grid(),
        drc::body_length_positive(),
        drc::body_width_positive(),
        drc::body_height_positive(),
        drc::courtyard_length_positive(),
        drc::courtyard_width_positive(),
        drc::copper_clearance_x(),
        drc::copper_clearance_y(),
        drc::courtyard_body_clearance_x(),
        drc::courtyard_body_clearance_y(),
        drc::silkscreen_line_width_bounds(),
        drc::courtyard_line_width_bounds(),
    ];
    match family {
        Family::Dil | Family::Dip => rules.push(two_columns()),
        Family::Sil => {
            // A single row has no second axis.
            rules.push(drc::pitch_y_zero());
        }
        _ => {}
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::primitives::Primitive;
    use crate::element::{check_rules, UnitSystem};

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

    fn find_pin(element: &Element, number: &str) -> (i64, i64) {
        element
            .copper
            .iter()
            .find_map(|p| match p {
                Primitive::Pin(pin) if pin.number == number => Some((pin.x, pin.y)),
                _ => None,
            })
            .expect("pin present")
    }

    #[test]
    fn dip8_passes_drc() {
        let result = check_rules(&dip8());
        assert!(result.passed, "diagnostics: {:?}", result.diagnostics);
    }

    #[test]
    fn dip_numbering_mirrors_columns() {
        let element = build(&dip8());
        // Pin 1 top-left, pin 4 bottom-left, pin 5 bottom-right,
        // pin 8 top-right.
        assert_eq!(find_pin(&element, "1"), (-15_000, 15_000));
        assert_eq!(find_pin(&element, "4"), (-15_000, -15_000));
        assert_eq!(find_pin(&element, "5"), (15_000, -15_000));
        assert_eq!(find_pin(&element, "8"), (15_000, 15_000));
    }

    #[test]
    fn dil_numbering_interleaves() {
        let mut d = dip8();
        d.family = Family::Dil;
        d.name = "DIL8".to_string();
        let element = build(&d);
        // Odd numbers down the left column, even down the right.
        assert_eq!(find_pin(&element, "1"), (-15_000, 15_000));
        assert_eq!(find_pin(&element, "2"), (15_000, 15_000));
        assert_eq!(find_pin(&element, "7"), (-15_000, -15_000));
        assert_eq!(find_pin(&element, "8"), (15_000, -15_000));
    }

    #[test]
    fn header_numbering_is_column_major() {
        let mut d = dip8();
        d.family = Family::Header;
        d.name = "HDR2X4".to_string();
        let element = build(&d);
        assert_eq!(find_pin(&element, "1"), (-15_000, 15_000));
        assert_eq!(find_pin(&element, "4"), (-15_000, -15_000));
        assert_eq!(find_pin(&element, "5"), (15_000, 15_000));
        assert_eq!(find_pin(&element, "8"), (15_000, -15_000));
    }

    #[test]
    fn pin1_marker_near_pin1() {
        let element = build(&dip8());
        assert_eq!(element.pin1_marker.len(), 1);
        match &element.pin1_marker[0] {
            Primitive::Arc(arc) => {
                assert!(arc.x < -15_000);
                assert!(arc.y > 15_000);
            }
            other => panic!("expected an arc marker, got {other:?}"),
        }
    }

    #[test]
    fn grid_mismatch_reported() {
        let mut d = dip8();
        d.number_of_pins = 10;
        let result = check_rules(&d);
        assert!(result
            .diagnostics
            .iter()
            .any(|diag| diag.rule_id == "pin-count-matches-grid"));
    }

    #[test]
    fn dip_rejects_third_column() {
        let mut d = dip8();
        d.number_of_rows = 2;
        d.number_of_columns = 3;
        d.number_of_pins = 6;
        let result = check_rules(&d);
        assert!(!result.passed);
        assert!(result
            .diagnostics
            .iter()
            .any(|diag| diag.rule_id == "two-columns"));
    }

    #[test]
    fn dip_pin_numbers_are_unique() {
        let element = build(&dip8());
        let mut numbers: Vec<String> = element
            .copper
            .iter()
            .filter_map(|p| match p {
                Primitive::Pin(pin) => Some(pin.number.clone()),
                _ => None,
            })
            .collect();
        numbers.sort();
        numbers.dedup();
        assert_eq!(numbers.len(), 8);
    }

    #[test]
    fn oversized_grid_is_diagnosed_not_fatal() {
        let mut d = dip8();
        d.number_of_rows = 100_000;
        d.number_of_columns = 100_000;
        let result = check_rules(&d);
        assert!(!result.passed);
        assert!(result
            .diagnostics
            .iter()
            .any(|diag| diag.rule_id == "pin-count-matches-grid"));
    }

    #[test]
    fn sil_requires_zero_y_pitch() {
        let mut d = dip8();
        d.family = Family::Sil;
        d.number_of_rows = 1;
        d.number_of_columns = 8;
        let result = check_rules(&d);
        assert!(result
            .diagnostics
            .iter()
            .any(|diag| diag.rule_id == "pitch-y-zero"));
    }
}
