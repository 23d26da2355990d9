//! Two-pin polarized through-hole strategy (radial capacitor style).
//!
//! One drilled pin per pole, mirrored about the origin along X. For
//! round-elongated pad shapes an auxiliary surface pad pair is added on
//! both board sides to support lead-forming footprints; the solder-side
//! pad carries the `onsolder` flag.

use crate::element::courtyard::compute_bound;
use crate::element::drc::{self, Rule};
use crate::element::layout;
use crate::element::units::to_grid;
use crate::element::{Element, PackageDescriptor, PadShape};

/// Pad shapes accepted for drilled radial parts.
const ALLOWED_SHAPES: &[PadShape] = &[
    PadShape::Round,
    PadShape::Square,
    PadShape::Octagon,
    PadShape::RoundElongated,
];

/// Builds a polarized radial through-hole element.
#[must_use]
pub fn build(descriptor: &PackageDescriptor) -> Element {
    let bound = compute_bound(descriptor);
    let mut element = Element::from_descriptor(descriptor, bound);

    element.copper = layout::polarized_pins(descriptor);

    element.silkscreen = if descriptor.package_is_radial {
        layout::silkscreen_circle(descriptor)
    } else {
        layout::silkscreen_rectangle(descriptor)
    };
    if let Some((x, y)) = layout::position_of(&element.copper, 1) {
        // Polarity mark beyond the positive pole, outside the body.
        let m = descriptor.multiplier();
        let offset = to_grid(
            descriptor.package_body_length / 2.0 - descriptor.pitch_x / 2.0
                + 2.0 * descriptor.silkscreen_line_width,
            m,
        );
        element.pin1_marker = layout::pin1_marker_dot(descriptor, x - offset.max(0), y);
    }

    element.courtyard =
        layout::courtyard_primitives(descriptor, bound, descriptor.package_is_radial);
    element.labels = layout::labels(descriptor, bound);
    element.attributes = layout::attributes(descriptor);
    element
}

/// The design rule table for the radial family.
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
        drc::courtyard_body_clearance_x(),
        drc::courtyard_body_clearance_y(),
        drc::silkscreen_line_width_bounds(),
        drc::courtyard_line_width_bounds(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::primitives::{Primitive, ShapeFlags};
    use crate::element::{check_rules, Family, UnitSystem};

    fn cappr() -> PackageDescriptor {
        let mut d = PackageDescriptor::new(Family::Radial, "CAPPR200-500");
        d.refdes = "C?".to_string();
        d.unit_system = UnitSystem::Mm;
        d.number_of_pins = 2;
        d.pitch_x = 2.0;
        d.pad_shape = PadShape::Round;
        d.pad_diameter = 1.6;
        d.pin_drill_diameter = 0.8;
        d.pad_clearance = 0.3;
        d.pad_solder_mask_clearance = 0.1;
        d.package_body_length = 5.0;
        d.package_body_width = 5.0;
        d.package_body_height = 11.0;
        d.package_is_radial = true;
        d.courtyard_enabled = true;
        d.courtyard_length = 5.6;
        d.courtyard_width = 5.6;
        d.courtyard_line_width = 0.05;
        d.courtyard_clearance_with_package = 0.25;
        d.silkscreen_package_outline = true;
        d.silkscreen_line_width = 0.2;
        d
    }

    #[test]
    fn two_pins_mirrored_about_origin() {
        let element = build(&cappr());
        let pins: Vec<_> = element
            .copper
            .iter()
            .filter_map(|p| match p {
                Primitive::Pin(pin) => Some(pin),
                _ => None,
            })
            .collect();
        assert_eq!(pins.len(), 2);
        assert_eq!(pins[0].x, -pins[1].x);
        assert_eq!(pins[0].y, 0);
        assert_eq!(pins[0].number, "1");
    }

    #[test]
    fn radial_body_drawn_as_circle() {
        let element = build(&cappr());
        assert_eq!(element.silkscreen.len(), 1);
        assert!(matches!(element.silkscreen[0], Primitive::Arc(_)));
        // Courtyard is one arc as well.
        assert_eq!(element.courtyard.len(), 1);
    }

    #[test]
    fn elongated_shape_adds_pad_pairs() {
        let mut d = cappr();
        d.pad_shape = PadShape::RoundElongated;
        d.pad_length = 2.0;
        d.pad_width = 1.4;
        let element = build(&d);
        let pads: Vec<_> = element
            .copper
            .iter()
            .filter_map(|p| match p {
                Primitive::Pad(pad) => Some(pad),
                _ => None,
            })
            .collect();
        assert_eq!(pads.len(), 4);
        assert_eq!(
            pads.iter()
                .filter(|p| p.flags.contains(ShapeFlags::ONSOLDER))
                .count(),
            2
        );
    }

    #[test]
    fn octagonal_shape_accepted() {
        let mut d = cappr();
        d.pad_shape = PadShape::Octagon;
        let result = check_rules(&d);
        assert!(result.passed, "diagnostics: {:?}", result.diagnostics);
    }

    #[test]
    fn pin1_square_override_only_on_pole_one() {
        let mut d = cappr();
        d.pin1_square = true;
        let element = build(&d);
        let pins: Vec<_> = element
            .copper
            .iter()
            .filter_map(|p| match p {
                Primitive::Pin(pin) => Some(pin),
                _ => None,
            })
            .collect();
        assert!(pins[0].flags.contains(ShapeFlags::SQUARE));
        assert!(pins[1].flags.is_empty());
    }
}
