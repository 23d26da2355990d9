//! Courtyard bound calculation.
//!
//! The courtyard is the keep-out rectangle (or circle, for radial packages)
//! around a footprint. Its bound is derived from three independent candidate
//! sources:
//!
//! 1. the pad/pin extent, including solder mask clearance,
//! 2. the package body extent, expanded by the declared body clearance,
//! 3. the user-declared courtyard dimensions.
//!
//! Each edge of the result is the algebraic extreme of the three
//! corresponding candidate edges. This is NOT a geometric union of three
//! rectangles: evaluating the edges independently guarantees the drawn
//! keep-out never clips any input even when the candidates are not centred
//! identically. Replacing it with a bounding-box union would change both the
//! DRC outcome and the rendered output for asymmetric packages, so the
//! per-edge rule must be preserved exactly.

use serde::{Deserialize, Serialize};

use super::units::to_grid;
use super::PackageDescriptor;

/// The enclosing courtyard bound, in grid units.
///
/// A derived value: always computed from the descriptor, never set
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CourtyardBound {
    /// Left edge.
    pub xmin: i64,
    /// Bottom edge.
    pub ymin: i64,
    /// Right edge.
    pub xmax: i64,
    /// Top edge.
    pub ymax: i64,
}

impl CourtyardBound {
    /// Radius of the equivalent keep-out circle for radial packages: the
    /// outermost of the four edges.
    #[must_use]
    pub fn radius(&self) -> i64 {
        self.xmin
            .abs()
            .max(self.xmax.abs())
            .max(self.ymin.abs())
            .max(self.ymax.abs())
    }
}

/// One candidate rectangle, in descriptor units.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl Candidate {
    /// A rectangle centred on the origin with the given half-extents.
    fn centred(half_x: f64, half_y: f64) -> Self {
        Self {
            xmin: -half_x,
            ymin: -half_y,
            xmax: half_x,
            ymax: half_y,
        }
    }
}

/// Computes the courtyard bound for a descriptor.
///
/// Always returns a value; a descriptor with all dimensions zero yields a
/// degenerate bound, which the DRC reports separately.
#[must_use]
pub fn compute_bound(descriptor: &PackageDescriptor) -> CourtyardBound {
    let pads = pad_extent(descriptor);
    let body = body_extent(descriptor);
    let user = user_extent(descriptor);

    // Per-edge extremum across the three sources; see the module docs for
    // why this is not a rectangle union.
    let xmin = pads.xmin.min(body.xmin).min(user.xmin);
    let ymin = pads.ymin.min(body.ymin).min(user.ymin);
    let xmax = pads.xmax.max(body.xmax).max(user.xmax);
    let ymax = pads.ymax.max(body.ymax).max(user.ymax);

    let m = descriptor.multiplier();
    CourtyardBound {
        xmin: to_grid(xmin, m),
        ymin: to_grid(ymin, m),
        xmax: to_grid(xmax, m),
        ymax: to_grid(ymax, m),
    }
}

/// Pad/pin extent: half of the copper span across every pad position on
/// the axis, `(positions - 1) * pitch + governing pad dimension`, plus the
/// solder mask clearance.
fn pad_extent(descriptor: &PackageDescriptor) -> Candidate {
    let nx = axis_positions(descriptor.number_of_columns, descriptor.count_x);
    let ny = axis_positions(descriptor.number_of_rows, descriptor.count_y);
    let half_x = ((nx - 1.0) * descriptor.pitch_x + descriptor.pad_dimension_x()) / 2.0
        + descriptor.pad_solder_mask_clearance;
    let half_y = ((ny - 1.0) * descriptor.pitch_y + descriptor.pad_dimension_y()) / 2.0
        + descriptor.pad_solder_mask_clearance;
    Candidate::centred(half_x, half_y)
}

/// Pad positions along one axis: the declared grid dimension or the
/// occupied-position count, whichever is larger. Never below the two
/// positions a paired layout occupies.
fn axis_positions(declared: u32, occupied: u32) -> f64 {
    f64::from(declared.max(occupied).max(2))
}

/// Package body extent, expanded by the declared body clearance.
fn body_extent(descriptor: &PackageDescriptor) -> Candidate {
    let half_x =
        descriptor.package_body_length / 2.0 + descriptor.courtyard_clearance_with_package;
    let half_y = descriptor.package_body_width / 2.0 + descriptor.courtyard_clearance_with_package;
    Candidate::centred(half_x, half_y)
}

/// User-declared courtyard extent, as supplied.
fn user_extent(descriptor: &PackageDescriptor) -> Candidate {
    Candidate::centred(
        descriptor.courtyard_length / 2.0,
        descriptor.courtyard_width / 2.0,
    )
}
