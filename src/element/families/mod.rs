//! Per-family strategy descriptors.
//!
//! The engine (bound calculator, layout machinery, rule evaluator, writer)
//! is shared; each family module contributes only its layout function and
//! its design rule table.

pub mod chip;
pub mod inline;
pub mod radial;
pub mod to;

use super::drc::Rule;
use super::{Element, Family, PackageDescriptor};

/// Builds the element for a descriptor using its family's layout strategy.
#[must_use]
pub fn build(descriptor: &PackageDescriptor) -> Element {
    match descriptor.family {
        Family::Chip | Family::Molded => chip::build(descriptor),
        Family::Radial => radial::build(descriptor),
        Family::Dil | Family::Dip | Family::Header | Family::Sil => inline::build(descriptor),
        Family::To92 => to::build(descriptor),
    }
}

/// Returns the ordered design rule table for a family.
#[must_use]
pub fn rule_table(family: Family) -> Vec<Rule> {
    match family {
        Family::Chip | Family::Molded => chip::rules(),
        Family::Radial => radial::rules(),
        Family::Dil | Family::Dip | Family::Header | Family::Sil => inline::rules(family),
        Family::To92 => to::rules(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_family_has_rules() {
        for family in [
            Family::Chip,
            Family::Molded,
            Family::Radial,
            Family::Dil,
            Family::Dip,
            Family::Header,
            Family::Sil,
            Family::To92,
        ] {
            assert!(!rule_table(family).is_empty());
        }
    }
}
