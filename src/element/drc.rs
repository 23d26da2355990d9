//! Design rule checking.
//!
//! A family supplies an ordered list of independent [`Rule`]s; the engine
//! evaluates every rule against the descriptor and collects one diagnostic
//! per violation. Evaluation never short-circuits, so a single run reports
//! every problem at once.

use serde::Serialize;

use super::units::UnitSystem;
use super::{PackageDescriptor, PadShape};

/// One design rule: an identifier plus a predicate that returns a message
/// when the descriptor violates it.
pub struct Rule {
    /// Stable rule identifier, e.g. `"units-selected"`.
    pub id: &'static str,
    check: Box<dyn Fn(&PackageDescriptor) -> Option<String> + Send + Sync>,
}

impl Rule {
    /// Creates a rule from an identifier and a violation predicate.
    pub fn new(
        id: &'static str,
        check: impl Fn(&PackageDescriptor) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            id,
            check: Box::new(check),
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("id", &self.id).finish()
    }
}

/// One reported rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Identifier of the violated rule.
    pub rule_id: &'static str,
    /// Human-readable message, tagged with the originating family.
    pub message: String,
}

/// Result of a design rule check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrcResult {
    /// True when no rule was violated.
    pub passed: bool,
    /// One diagnostic per violated rule, in rule order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Evaluates every rule in order against the descriptor.
#[must_use]
pub fn evaluate(rules: &[Rule], descriptor: &PackageDescriptor) -> DrcResult {
    let family = descriptor.family.token();
    let mut diagnostics = Vec::new();
    for rule in rules {
        if let Some(message) = (rule.check)(descriptor) {
            diagnostics.push(Diagnostic {
                rule_id: rule.id,
                message: format!("{family}: {message}"),
            });
        }
    }
    DrcResult {
        passed: diagnostics.is_empty(),
        diagnostics,
    }
}

// --- Universal rule constructors, parameterized per family. ---

/// A unit system must be selected.
#[must_use]
pub fn units_selected() -> Rule {
    Rule::new("units-selected", |d| {
        (d.unit_system == UnitSystem::None).then(|| "no unit system selected".to_string())
    })
}

/// The pad shape must be in the family's allow-list.
#[must_use]
pub fn allowed_pad_shapes(allowed: &'static [PadShape]) -> Rule {
    Rule::new("pad-shape-allowed", move |d| {
        (!allowed.contains(&d.pad_shape))
            .then(|| format!("pad shape {:?} is not valid for this family", d.pad_shape))
    })
}

/// `package_body_length > 0`.
#[must_use]
pub fn body_length_positive() -> Rule {
    Rule::new("body-length-positive", |d| {
        (d.package_body_length <= 0.0).then(|| "package body length is not positive".to_string())
    })
}

/// `package_body_width > 0`.
#[must_use]
pub fn body_width_positive() -> Rule {
    Rule::new("body-width-positive", |d| {
        (d.package_body_width <= 0.0).then(|| "package body width is not positive".to_string())
    })
}

/// `package_body_height > 0`.
#[must_use]
pub fn body_height_positive() -> Rule {
    Rule::new("body-height-positive", |d| {
        (d.package_body_height <= 0.0).then(|| "package body height is not positive".to_string())
    })
}

/// `courtyard_length > 0`.
#[must_use]
pub fn courtyard_length_positive() -> Rule {
    Rule::new("courtyard-length-positive", |d| {
        (d.courtyard_length <= 0.0).then(|| "courtyard length is not positive".to_string())
    })
}

/// `courtyard_width > 0`.
#[must_use]
pub fn courtyard_width_positive() -> Rule {
    Rule::new("courtyard-width-positive", |d| {
        (d.courtyard_width <= 0.0).then(|| "courtyard width is not positive".to_string())
    })
}

/// Minimum copper clearance along X: where the X pitch is nonzero, the gap
/// `pitch_x - governing pad dimension` must be at least the pad clearance.
#[must_use]
pub fn copper_clearance_x() -> Rule {
    Rule::new("copper-clearance-x", |d| {
        (d.pitch_x > 0.0 && d.pitch_x - d.pad_dimension_x() < d.pad_clearance).then(|| {
            format!(
                "horizontal gap between pads ({}) is below the pad clearance ({})",
                d.pitch_x - d.pad_dimension_x(),
                d.pad_clearance
            )
        })
    })
}

/// Minimum copper clearance along Y, evaluated only where the Y pitch is
/// nonzero.
#[must_use]
pub fn copper_clearance_y() -> Rule {
    Rule::new("copper-clearance-y", |d| {
        (d.pitch_y > 0.0 && d.pitch_y - d.pad_dimension_y() < d.pad_clearance).then(|| {
            format!(
                "vertical gap between pads ({}) is below the pad clearance ({})",
                d.pitch_y - d.pad_dimension_y(),
                d.pad_clearance
            )
        })
    })
}

/// The Y pitch must remain exactly 0 for two-terminal and single-row
/// families.
#[must_use]
pub fn pitch_y_zero() -> Rule {
    Rule::new("pitch-y-zero", |d| {
        (d.pitch_y != 0.0).then(|| "pitch along Y must be 0 for this family".to_string())
    })
}

/// Exactly two pins/pads for two-terminal families.
#[must_use]
pub fn two_terminals() -> Rule {
    Rule::new("two-terminals", |d| {
        (d.number_of_pins != 2).then(|| {
            format!(
                "expected exactly 2 pins for a two-terminal part, got {}",
                d.number_of_pins
            )
        })
    })
}

/// If fiducials are requested, the fiducial pad diameter and solder mask
/// clearance must both be nonzero.
#[must_use]
pub fn fiducial_diameter_set() -> Rule {
    Rule::new("fiducial-diameter-set", |d| {
        (d.fiducial && d.fiducial_pad_diameter <= 0.0)
            .then(|| "fiducials requested but the fiducial pad diameter is zero".to_string())
    })
}

/// Companion to [`fiducial_diameter_set`] for the mask clearance.
#[must_use]
pub fn fiducial_mask_set() -> Rule {
    Rule::new("fiducial-mask-set", |d| {
        (d.fiducial && d.fiducial_solder_mask_clearance <= 0.0).then(|| {
            "fiducials requested but the fiducial solder mask clearance is zero".to_string()
        })
    })
}

/// The courtyard must leave at least the declared clearance around the
/// package body, along X.
#[must_use]
pub fn courtyard_body_clearance_x() -> Rule {
    Rule::new("courtyard-body-clearance-x", |d| {
        (d.courtyard_length - d.package_body_length < d.courtyard_clearance_with_package).then(
            || {
                "courtyard length leaves less than the declared clearance around the body"
                    .to_string()
            },
        )
    })
}

/// Companion to [`courtyard_body_clearance_x`] along Y.
#[must_use]
pub fn courtyard_body_clearance_y() -> Rule {
    Rule::new("courtyard-body-clearance-y", |d| {
        (d.courtyard_width - d.package_body_width < d.courtyard_clearance_with_package).then(|| {
            "courtyard width leaves less than the declared clearance around the body".to_string()
        })
    })
}

/// Upper bound for a line width in the descriptor's unit system:
/// 40 mil, 4000 mil/100, or 1.0 mm. No unit system always fails.
fn line_width_limit(unit: UnitSystem) -> Option<f64> {
    match unit {
        UnitSystem::None => None,
        UnitSystem::Mil => Some(40.0),
        UnitSystem::Mil100 => Some(4000.0),
        UnitSystem::Mm => Some(1.0),
    }
}

/// Silkscreen line width must be positive and below the per-unit bound
/// when the package outline is drawn.
#[must_use]
pub fn silkscreen_line_width_bounds() -> Rule {
    Rule::new("silkscreen-line-width", |d| {
        if !d.silkscreen_package_outline {
            return None;
        }
        match line_width_limit(d.unit_system) {
            None => Some("silkscreen line width cannot be checked without units".to_string()),
            Some(limit) => (d.silkscreen_line_width <= 0.0 || d.silkscreen_line_width > limit)
                .then(|| {
                    format!(
                        "silkscreen line width {} is outside (0, {limit}] {}",
                        d.silkscreen_line_width, d.unit_system
                    )
                }),
        }
    })
}

/// Courtyard line width must be positive and below the per-unit bound when
/// the courtyard is drawn.
#[must_use]
pub fn courtyard_line_width_bounds() -> Rule {
    Rule::new("courtyard-line-width", |d| {
        if !d.courtyard_enabled {
            return None;
        }
        match line_width_limit(d.unit_system) {
            None => Some("courtyard line width cannot be checked without units".to_string()),
            Some(limit) => (d.courtyard_line_width <= 0.0 || d.courtyard_line_width > limit)
                .then(|| {
                    format!(
                        "courtyard line width {} is outside (0, {limit}] {}",
                        d.courtyard_line_width, d.unit_system
                    )
                }),
        }
    })
}
