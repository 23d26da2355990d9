//! Transistor-outline (TO92) strategy.
//!
//! The TO92 lead pattern is standardized, so the three drilled pins sit at
//! fixed board positions regardless of the declared unit system; only the
//! pad and drill sizes come from the descriptor. The silkscreen body circle
//! is likewise drawn at the standardized can radius.

use crate::element::courtyard::{compute_bound, CourtyardBound};
use crate::element::drc::{self, Rule};
use crate::element::layout::{self, resolve_shape_flags};
use crate::element::primitives::{Pin, Primitive, SilkArc};
use crate::element::units::to_grid;
use crate::element::{Element, PackageDescriptor, PadShape};

/// Pad shapes accepted for TO92 leads.
const ALLOWED_SHAPES: &[PadShape] = &[PadShape::Round, PadShape::Square, PadShape::Octagon];

/// Fixed lead X positions in grid units (50 mil lead spacing).
const LEAD_X: [i64; 3] = [-5_000, 0, 5_000];

/// Standardized can outline radius in grid units (105 mil).
const BODY_SILK_RADIUS: i64 = 10_500;

/// Builds a TO92 element.
#[must_use]
pub fn build(descriptor: &PackageDescriptor) -> Element {
    let m = descriptor.multiplier();

    // The keep-out circle covers both the computed bound and the can
    // outline expanded by the declared body clearance.
    let radius = compute_bound(descriptor).radius().max(
        BODY_SILK_RADIUS + to_grid(descriptor.courtyard_clearance_with_package, m),
    );
    let bound = CourtyardBound {
        xmin: -radius,
        ymin: -radius,
        xmax: radius,
        ymax: radius,
    };
    let mut element = Element::from_descriptor(descriptor, bound);

    if descriptor.pad_diameter > 0.0 && descriptor.pin_drill_diameter > 0.0 {
        let thickness = to_grid(descriptor.pad_diameter, m);
        let clearance = to_grid(descriptor.pad_clearance, m);
        let mask = to_grid(
            descriptor.pad_diameter + 2.0 * descriptor.pad_solder_mask_clearance,
            m,
        );
        let drill = to_grid(descriptor.pin_drill_diameter, m);
        for (index, x) in LEAD_X.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let number = index as u32 + 1;
            let flags =
                resolve_shape_flags(descriptor.pad_shape, number == 1, descriptor.pin1_square);
            element.copper.push(Primitive::Pin(Pin::numbered(
                number, *x, 0, thickness, clearance, mask, drill, flags,
            )));
        }
    }

    if descriptor.silkscreen_package_outline && descriptor.silkscreen_line_width > 0.0 {
        let t = to_grid(descriptor.silkscreen_line_width, m);
        element.silkscreen = vec![Primitive::Arc(SilkArc::circle(
            0,
            0,
            BODY_SILK_RADIUS,
            t,
        ))];
        if descriptor.silkscreen_indicate_pin1 {
            // Dot on the pin-1 side, just outside the can outline.
            element.pin1_marker =
                layout::pin1_marker_dot(descriptor, -(BODY_SILK_RADIUS + 4 * t), 0);
        }
    }

    element.courtyard = layout::courtyard_primitives(descriptor, bound, true);
    element.labels = layout::labels(descriptor, bound);
    element.attributes = layout::attributes(descriptor);
    element
}

/// A TO92 can always has exactly three leads.
#[must_use]
fn three_leads() -> Rule {
    Rule::new("three-leads", |d| {
        (d.number_of_pins != 3).then(|| format!("{} pins declared, expected 3", d.number_of_pins))
    })
}

/// The drill must leave an annular ring.
#[must_use]
fn drill_fits_pad() -> Rule {
    Rule::new("drill-fits-pad", |d| {
        (d.pin_drill_diameter >= d.pad_diameter).then(|| {
            format!(
                "drill diameter {} leaves no annular ring inside pad diameter {}",
                d.pin_drill_diameter, d.pad_diameter
            )
        })
    })
}

/// The design rule table for the TO92 family.
#[must_use]
pub fn rules() -> Vec<Rule> {
    vec![
        drc::units_selected(),
        drc::allowed_pad_shapes(ALLOWED_SHAPES),
        three_leads(),
        drill_fits_pad(),
        drc::body_height_positive(),
        drc::silkscreen_line_width_bounds(),
        drc::courtyard_line_width_bounds(),
    ]
}
