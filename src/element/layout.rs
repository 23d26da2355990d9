//! Shared layout machinery for the family strategies.
//!
//! Each package family combines these building blocks: paired surface pads,
//! linear pin grids with a family numbering convention, polarized
//! through-hole pin pairs, silkscreen outlines, pin-1 markers, the courtyard
//! drawing, and the three label primitives.
//!
//! All functions are pure: they read the descriptor, scale through its
//! multiplier, and return primitives in grid units.

use super::primitives::{Label, Pad, Pin, Primitive, ShapeFlags, SilkArc, SilkLine};
use super::units::to_grid;
use super::{CourtyardBound, PackageDescriptor, PadShape};

/// Vertical distance from the courtyard bottom edge to the label anchor,
/// in grid units (100 mil).
pub const LABEL_OFFSET: i64 = 10_000;

/// Resolves the shape flags for one pad or pin.
///
/// The family-wide default shape is applied first; the pin-1 square
/// override is applied after it and wins, replacing any default shape flag.
#[must_use]
pub fn resolve_shape_flags(default_shape: PadShape, is_pin1: bool, pin1_square: bool) -> ShapeFlags {
    let mut flags = match default_shape {
        PadShape::Square => ShapeFlags::SQUARE,
        PadShape::Octagon => ShapeFlags::OCTAGON,
        PadShape::NoShape | PadShape::Round | PadShape::RoundElongated => ShapeFlags::empty(),
    };
    if is_pin1 && pin1_square {
        flags.remove(ShapeFlags::OCTAGON);
        flags.insert(ShapeFlags::SQUARE);
    }
    flags
}

/// Places the three label primitives (name, refdes, value) below the
/// courtyard, at `(0, ymin - LABEL_OFFSET)`.
#[must_use]
pub fn labels(descriptor: &PackageDescriptor, bound: CourtyardBound) -> Vec<Label> {
    let y = bound.ymin - LABEL_OFFSET;
    vec![
        Label::new(0, y, descriptor.name.clone()),
        Label::new(0, y, descriptor.refdes.clone()),
        Label::new(0, y, descriptor.value.clone()),
    ]
}

/// Solder mask opening for a copper dimension, in grid units.
fn mask_opening(descriptor: &PackageDescriptor, copper_dim: f64) -> i64 {
    to_grid(
        copper_dim + 2.0 * descriptor.pad_solder_mask_clearance,
        descriptor.multiplier(),
    )
}

/// Places exactly two surface pads symmetric about the origin.
///
/// The pads run parallel to whichever axis has the larger pad dimension:
/// `pad_length > pad_width` puts both pads on the X axis, otherwise the pads
/// sit at mirrored X positions as segments along Y. Pad 1 is always the
/// negative-axis pad.
#[must_use]
pub fn paired_pads(descriptor: &PackageDescriptor) -> Vec<Primitive> {
    if descriptor.pad_length <= 0.0 && descriptor.pad_width <= 0.0 {
        return Vec::new();
    }
    let m = descriptor.multiplier();
    let clearance = to_grid(descriptor.pad_clearance, m);
    let length = descriptor.pad_length;
    let width = descriptor.pad_width;

    let flags1 = resolve_shape_flags(descriptor.pad_shape, true, descriptor.pin1_square);
    let flags2 = resolve_shape_flags(descriptor.pad_shape, false, descriptor.pin1_square);

    let (pad1, pad2) = if length > width {
        // Pads parallel to X, both at y = 0.
        let inner = to_grid((descriptor.pitch_x - length + width) / 2.0, m);
        let outer = to_grid((descriptor.pitch_x + length - width) / 2.0, m);
        let thickness = to_grid(width, m);
        let mask = mask_opening(descriptor, width);
        (
            Pad::numbered(1, -outer, 0, -inner, 0, thickness, clearance, mask, flags1),
            Pad::numbered(2, inner, 0, outer, 0, thickness, clearance, mask, flags2),
        )
    } else {
        // Pads perpendicular, mirrored about x = 0 as segments along Y.
        let x = to_grid(descriptor.pitch_x / 2.0, m);
        let half = to_grid((width - length) / 2.0, m);
        let thickness = to_grid(length, m);
        let mask = mask_opening(descriptor, length);
        (
            Pad::numbered(1, -x, -half, -x, half, thickness, clearance, mask, flags1),
            Pad::numbered(2, x, -half, x, half, thickness, clearance, mask, flags2),
        )
    };
    vec![Primitive::Pad(pad1), Primitive::Pad(pad2)]
}

/// Pin numbering convention for grid layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridNumbering {
    /// Zig-zag interleaved rows: numbers run across each row, so with two
    /// columns the odd numbers fill the left column and the even numbers
    /// the right one.
    Zigzag,
    /// Mirrored columns: down the first column, then back up the second.
    MirroredColumns,
    /// Column-major: each column is numbered top to bottom before moving
    /// to the next column.
    ColumnMajor,
    /// A single row numbered left to right.
    Row,
}

impl GridNumbering {
    /// Pin number for the cell at (row, column), zero-based.
    #[must_use]
    pub const fn pin_number(self, row: u32, column: u32, rows: u32, columns: u32) -> u32 {
        match self {
            Self::Zigzag => row * columns + column + 1,
            Self::MirroredColumns => {
                if column == 0 {
                    row + 1
                } else {
                    2 * rows - row
                }
            }
            Self::ColumnMajor => column * rows + row + 1,
            Self::Row => column + 1,
        }
    }
}

/// Places a `rows x columns` grid of through-hole pins centred on the
/// origin, numbered by the given convention. Row 0 is the top row.
#[must_use]
pub fn grid_pins(descriptor: &PackageDescriptor, numbering: GridNumbering) -> Vec<Primitive> {
    let rows = descriptor.number_of_rows;
    let columns = descriptor.number_of_columns;
    if rows == 0 || columns == 0 || descriptor.pad_diameter <= 0.0 {
        return Vec::new();
    }
    let m = descriptor.multiplier();
    let thickness = to_grid(descriptor.pad_diameter, m);
    let clearance = to_grid(descriptor.pad_clearance, m);
    let mask = mask_opening(descriptor, descriptor.pad_diameter);
    let drill = to_grid(descriptor.pin_drill_diameter, m);

    let mut pins = Vec::with_capacity((rows as usize).saturating_mul(columns as usize));
    for column in 0..columns {
        for row in 0..rows {
            let number = numbering.pin_number(row, column, rows, columns);
            let x = to_grid(
                (f64::from(column) - f64::from(columns - 1) / 2.0) * descriptor.pitch_x,
                m,
            );
            let y = to_grid(
                (f64::from(rows - 1) / 2.0 - f64::from(row)) * descriptor.pitch_y,
                m,
            );
            let flags =
                resolve_shape_flags(descriptor.pad_shape, number == 1, descriptor.pin1_square);
            pins.push(Primitive::Pin(Pin::numbered(
                number, x, y, thickness, clearance, mask, drill, flags,
            )));
        }
    }
    pins
}

/// Grid-unit position of the pin carrying a given number, if present.
#[must_use]
pub fn position_of(pins: &[Primitive], number: u32) -> Option<(i64, i64)> {
    let wanted = number.to_string();
    pins.iter().find_map(|p| match p {
        Primitive::Pin(pin) if pin.number == wanted => Some((pin.x, pin.y)),
        Primitive::Pad(pad) if pad.number == wanted => {
            Some(((pad.x1 + pad.x2) / 2, (pad.y1 + pad.y2) / 2))
        }
        _ => None,
    })
}

/// Places one drilled pin per pole for a two-pin polarized part, plus, for
/// round-elongated shapes, an auxiliary surface pad pair on both board
/// sides (the mirrored pad carries the `onsolder` flag) to support
/// lead-forming footprints.
#[must_use]
pub fn polarized_pins(descriptor: &PackageDescriptor) -> Vec<Primitive> {
    if descriptor.pad_diameter <= 0.0 || descriptor.pin_drill_diameter <= 0.0 {
        return Vec::new();
    }
    let m = descriptor.multiplier();
    let thickness = to_grid(descriptor.pad_diameter, m);
    let clearance = to_grid(descriptor.pad_clearance, m);
    let mask = mask_opening(descriptor, descriptor.pad_diameter);
    let drill = to_grid(descriptor.pin_drill_diameter, m);
    let x = to_grid(descriptor.pitch_x / 2.0, m);

    let mut primitives = Vec::new();
    for (number, px) in [(1_u32, -x), (2, x)] {
        let flags = resolve_shape_flags(descriptor.pad_shape, number == 1, descriptor.pin1_square);
        primitives.push(Primitive::Pin(Pin::numbered(
            number, px, 0, thickness, clearance, mask, drill, flags,
        )));
        if descriptor.pad_shape == PadShape::RoundElongated
            && descriptor.pad_length > descriptor.pad_width
            && descriptor.pad_width > 0.0
        {
            let half = to_grid((descriptor.pad_length - descriptor.pad_width) / 2.0, m);
            let pad_thickness = to_grid(descriptor.pad_width, m);
            let pad_mask = mask_opening(descriptor, descriptor.pad_width);
            let top = Pad::numbered(
                number,
                px - half,
                0,
                px + half,
                0,
                pad_thickness,
                clearance,
                pad_mask,
                flags,
            );
            let mut bottom = top.clone();
            bottom.flags.insert(ShapeFlags::ONSOLDER);
            primitives.push(Primitive::Pad(top));
            primitives.push(Primitive::Pad(bottom));
        }
    }
    primitives
}

/// Rectangular silkscreen package outline at the body edges.
#[must_use]
pub fn silkscreen_rectangle(descriptor: &PackageDescriptor) -> Vec<Primitive> {
    if !descriptor.silkscreen_package_outline
        || descriptor.silkscreen_line_width <= 0.0
        || descriptor.package_body_length <= 0.0
        || descriptor.package_body_width <= 0.0
    {
        return Vec::new();
    }
    let m = descriptor.multiplier();
    let hx = to_grid(descriptor.package_body_length / 2.0, m);
    let hy = to_grid(descriptor.package_body_width / 2.0, m);
    let t = to_grid(descriptor.silkscreen_line_width, m);
    vec![
        Primitive::Line(SilkLine::new(-hx, -hy, hx, -hy, t)),
        Primitive::Line(SilkLine::new(hx, -hy, hx, hy, t)),
        Primitive::Line(SilkLine::new(hx, hy, -hx, hy, t)),
        Primitive::Line(SilkLine::new(-hx, hy, -hx, -hy, t)),
    ]
}

/// Circular silkscreen body outline for radial packages, with the body
/// length taken as the diameter.
#[must_use]
pub fn silkscreen_circle(descriptor: &PackageDescriptor) -> Vec<Primitive> {
    if !descriptor.silkscreen_package_outline
        || descriptor.silkscreen_line_width <= 0.0
        || descriptor.package_body_length <= 0.0
    {
        return Vec::new();
    }
    let m = descriptor.multiplier();
    let radius = to_grid(descriptor.package_body_length / 2.0, m);
    let t = to_grid(descriptor.silkscreen_line_width, m);
    vec![Primitive::Arc(SilkArc::circle(0, 0, radius, t))]
}

/// A small circular pin-1 marker centred at the given grid position.
#[must_use]
pub fn pin1_marker_dot(descriptor: &PackageDescriptor, x: i64, y: i64) -> Vec<Primitive> {
    if !descriptor.silkscreen_indicate_pin1 || descriptor.silkscreen_line_width <= 0.0 {
        return Vec::new();
    }
    let t = to_grid(descriptor.silkscreen_line_width, descriptor.multiplier());
    vec![Primitive::Arc(SilkArc::circle(x, y, 2 * t, t))]
}

/// Courtyard drawing: four lines closing a rectangle at the bound, or a
/// single full-circle arc for radial packages.
#[must_use]
pub fn courtyard_primitives(
    descriptor: &PackageDescriptor,
    bound: CourtyardBound,
    radial: bool,
) -> Vec<Primitive> {
    if !descriptor.courtyard_enabled || descriptor.courtyard_line_width <= 0.0 {
        return Vec::new();
    }
    let t = to_grid(descriptor.courtyard_line_width, descriptor.multiplier());
    if radial {
        return vec![Primitive::Arc(SilkArc::circle(0, 0, bound.radius(), t))];
    }
    let CourtyardBound {
        xmin,
        ymin,
        xmax,
        ymax,
    } = bound;
    vec![
        Primitive::Line(SilkLine::new(xmin, ymin, xmax, ymin, t)),
        Primitive::Line(SilkLine::new(xmax, ymin, xmax, ymax, t)),
        Primitive::Line(SilkLine::new(xmax, ymax, xmin, ymax, t)),
        Primitive::Line(SilkLine::new(xmin, ymax, xmin, ymin, t)),
    ]
}

/// Two round fiducial pads at opposite courtyard corners, inset by one
/// fiducial diameter.
#[must_use]
pub fn fiducial_pads(descriptor: &PackageDescriptor, bound: CourtyardBound) -> Vec<Primitive> {
    if !descriptor.fiducial || descriptor.fiducial_pad_diameter <= 0.0 {
        return Vec::new();
    }
    let m = descriptor.multiplier();
    let d = to_grid(descriptor.fiducial_pad_diameter, m);
    let mask = to_grid(
        descriptor.fiducial_pad_diameter + 2.0 * descriptor.fiducial_solder_mask_clearance,
        m,
    );
    vec![
        Primitive::Pad(Pad::round_named(
            "FID1",
            bound.xmin + d,
            bound.ymin + d,
            d,
            0,
            mask,
        )),
        Primitive::Pad(Pad::round_named(
            "FID2",
            bound.xmax - d,
            bound.ymax - d,
            d,
            0,
            mask,
        )),
    ]
}

/// A central thermal pad as a segment along X.
#[must_use]
pub fn thermal_pad(descriptor: &PackageDescriptor) -> Vec<Primitive> {
    if !descriptor.thermal || descriptor.thermal_length <= 0.0 || descriptor.thermal_width <= 0.0 {
        return Vec::new();
    }
    let m = descriptor.multiplier();
    let clearance = to_grid(descriptor.pad_clearance, m);
    let mask = mask_opening(descriptor, descriptor.thermal_width);
    let thickness = to_grid(descriptor.thermal_width, m);
    let half = to_grid(
        (descriptor.thermal_length - descriptor.thermal_width).max(0.0) / 2.0,
        m,
    );
    vec![Primitive::Pad(Pad::numbered(
        descriptor.number_of_pins + 1,
        -half,
        0,
        half,
        0,
        thickness,
        clearance,
        mask,
        ShapeFlags::SQUARE,
    ))]
}

/// Attribute records for the optional attribute block.
#[must_use]
pub fn attributes(descriptor: &PackageDescriptor) -> Vec<(String, String)> {
    if !descriptor.attributes_in_footprint {
        return Vec::new();
    }
    vec![
        ("footprint".to_string(), descriptor.name.clone()),
        ("family".to_string(), descriptor.family.token().to_string()),
        ("value".to_string(), descriptor.value.clone()),
    ]
}
