//! Paired-pad strategy for two-terminal surface-mount parts.
//!
//! Covers plain chip parts (CAPC/RESC/INDC style) and molded polarized
//! parts (CAPM style). Exactly two pads sit symmetric about the origin
//! along whichever axis carries the larger pad dimension; pad 1 is the
//! negative-axis pad and may carry the square pin-1 override.

use crate::element::courtyard::compute_bound;
use crate::element::drc::{self, Rule};
use crate::element::layout;
use crate::element::units::to_grid;
use crate::element::{Element, PackageDescriptor, PadShape};

/// Pad shapes a paired-pad part may use. Rectangular pads only: the
/// round shapes reserved for drilled parts are rejected.
const ALLOWED_SHAPES: &[PadShape] = &[PadShape::Square, PadShape::RoundElongated];

/// Builds a two-pad chip or molded element.
#[must_use]
pub fn build(descriptor: &PackageDescriptor) -> Element {
    let bound = compute_bound(descriptor);
    let mut element = Element::from_descriptor(descriptor, bound);

    element.copper = layout::paired_pads(descriptor);
    element.copper.extend(layout::thermal_pad(descriptor));
    element.copper.extend(layout::fiducial_pads(descriptor, bound));

    element.silkscreen = layout::silkscreen_rectangle(descriptor);
    if let Some((x, _)) = layout::position_of(&element.copper, 1) {
        let m = descriptor.multiplier();
        let y = to_grid(descriptor.package_body_width / 2.0, m)
            + 4 * to_grid(descriptor.silkscreen_line_width, m);
        element.pin1_marker = layout::pin1_marker_dot(descriptor, x, y);
    }

    element.courtyard = layout::courtyard_primitives(descriptor, bound, false);
    element.labels = layout::labels(descriptor, bound);
    element.attributes = layout::attributes(descriptor);
    element
}

/// The design rule table shared by the chip and molded families.
#[must_use]
pub fn rules() -> Vec<Rule> {
    vec![
        drc::units_selected(),
        drc::allowed_pad_shapes(ALLOWED_SHAPES),
        drc::two_terminals(),
        drc::pitch_y_zero(),
        drc::body_length_positive(),
        drc::body_width_positive(),
        drc::body_height_positive(),
        drc::courtyard_length_positive(),
        drc::courtyard_width_positive(),
        drc::copper_clearance_x(),
        drc::copper_clearance_y(),
        drc::fiducial_diameter_set(),
        drc::fiducial_mask_set(),
        drc::courtyard_body_clearance_x(),
        drc::courtyard_body_clearance_y(),
        drc::silkscreen_line_width_bounds(),
        drc::courtyard_line_width_bounds(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::primitives::Primitive;
    use crate::element::{check_rules, Family, UnitSystem};

    fn capc0603() -> PackageDescriptor {
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
        d.silkscreen_indicate_pin1 = false;
        d
    }

    #[test]
    fn capc_scenario_geometry() {
        let element = build(&capc0603());
        assert_eq!(element.copper.len(), 2);
        let (p1, p2) = match (&element.copper[0], &element.copper[1]) {
            (Primitive::Pad(a), Primitive::Pad(b)) => (a, b),
            _ => panic!("expected pads"),
        };
        // (0.66 - 0.46 + 0.42)/2 mm and (0.66 + 0.46 - 0.42)/2 mm on the grid.
        assert_eq!(p2.x1, 1220);
        assert_eq!(p2.x2, 1378);
        assert_eq!(p2.y1, 0);
        assert_eq!(p1.x1, -1378);
        assert_eq!(p1.x2, -1220);
        // 0.42 mm wide.
        assert_eq!(p2.thickness, 1654);
    }

    #[test]
    fn capc_scenario_passes_drc() {
        let result = check_rules(&capc0603());
        assert!(result.passed, "diagnostics: {:?}", result.diagnostics);
    }

    #[test]
    fn round_shape_rejected() {
        let mut d = capc0603();
        d.pad_shape = PadShape::Round;
        let result = check_rules(&d);
        assert!(!result.passed);
        assert!(result
            .diagnostics
            .iter()
            .any(|diag| diag.rule_id == "pad-shape-allowed"));
    }

    #[test]
    fn courtyard_drawn_as_closed_rectangle() {
        let element = build(&capc0603());
        assert_eq!(element.courtyard.len(), 4);
    }

    #[test]
    fn fiducials_added_when_requested() {
        let mut d = capc0603();
        d.fiducial = true;
        d.fiducial_pad_diameter = 0.5;
        d.fiducial_solder_mask_clearance = 0.1;
        let element = build(&d);
        assert_eq!(element.copper.len(), 4);
    }
}
