//! Footprint primitive types.
//!
//! These are the output-side geometric records of an element: through-hole
//! pins, surface pads, silkscreen lines and arcs, and label text. All
//! coordinates are integers in the scaled output grid (hundredths of a mil);
//! scaling happens in the layout code, not here.

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Shape flags attached to a pin or pad record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct ShapeFlags: u8 {
        /// Square copper shape instead of the round default.
        const SQUARE = 0b0000_0001;
        /// Octagonal copper shape.
        const OCTAGON = 0b0000_0010;
        /// Pad lives on the solder (far) side of the board.
        const ONSOLDER = 0b0000_0100;
    }
}

impl ShapeFlags {
    /// Returns the comma-separated token form used in footprint files,
    /// e.g. `"square"` or `"square,onsolder"`. Empty for a round pad.
    #[must_use]
    pub fn token(&self) -> String {
        let mut parts = Vec::new();
        if self.contains(Self::SQUARE) {
            parts.push("square");
        }
        if self.contains(Self::OCTAGON) {
            parts.push("octagon");
        }
        if self.contains(Self::ONSOLDER) {
            parts.push("onsolder");
        }
        parts.join(",")
    }
}

/// A through-hole pin: copper annulus plus drill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    /// Centre X in grid units.
    pub x: i64,
    /// Centre Y in grid units.
    pub y: i64,
    /// Copper annulus outer diameter in grid units.
    pub thickness: i64,
    /// Copper clearance in grid units.
    pub clearance: i64,
    /// Solder mask opening diameter in grid units.
    pub mask: i64,
    /// Drill diameter in grid units.
    pub drill: i64,
    /// Pin name.
    pub name: String,
    /// Pin number.
    pub number: String,
    /// Shape flags.
    pub flags: ShapeFlags,
}

impl Pin {
    /// Creates a pin with name equal to its number.
    #[must_use]
    pub fn numbered(
        number: u32,
        x: i64,
        y: i64,
        thickness: i64,
        clearance: i64,
        mask: i64,
        drill: i64,
        flags: ShapeFlags,
    ) -> Self {
        Self {
            x,
            y,
            thickness,
            clearance,
            mask,
            drill,
            name: number.to_string(),
            number: number.to_string(),
            flags,
        }
    }
}

/// A surface pad: a line segment with thickness.
///
/// The copper rectangle spans the segment endpoints expanded by half the
/// thickness in every direction; a zero-length segment is a round pad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pad {
    /// Segment start X in grid units.
    pub x1: i64,
    /// Segment start Y in grid units.
    pub y1: i64,
    /// Segment end X in grid units.
    pub x2: i64,
    /// Segment end Y in grid units.
    pub y2: i64,
    /// Segment thickness (pad width) in grid units.
    pub thickness: i64,
    /// Copper clearance in grid units.
    pub clearance: i64,
    /// Solder mask opening in grid units.
    pub mask: i64,
    /// Pad name.
    pub name: String,
    /// Pad number.
    pub number: String,
    /// Shape flags.
    pub flags: ShapeFlags,
}

impl Pad {
    /// Creates a pad with name equal to its number.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn numbered(
        number: u32,
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        thickness: i64,
        clearance: i64,
        mask: i64,
        flags: ShapeFlags,
    ) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            thickness,
            clearance,
            mask,
            name: number.to_string(),
            number: number.to_string(),
            flags,
        }
    }

    /// Creates a named round (zero-length segment) pad, e.g. a fiducial.
    #[must_use]
    pub fn round_named(
        name: impl Into<String>,
        x: i64,
        y: i64,
        diameter: i64,
        clearance: i64,
        mask: i64,
    ) -> Self {
        let name = name.into();
        Self {
            x1: x,
            y1: y,
            x2: x,
            y2: y,
            thickness: diameter,
            clearance,
            mask,
            number: name.clone(),
            name,
            flags: ShapeFlags::empty(),
        }
    }
}

/// A silkscreen line segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SilkLine {
    /// Start X in grid units.
    pub x1: i64,
    /// Start Y in grid units.
    pub y1: i64,
    /// End X in grid units.
    pub x2: i64,
    /// End Y in grid units.
    pub y2: i64,
    /// Line thickness in grid units.
    pub thickness: i64,
}

impl SilkLine {
    /// Creates a new line segment.
    #[must_use]
    pub const fn new(x1: i64, y1: i64, x2: i64, y2: i64, thickness: i64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            thickness,
        }
    }
}

/// A silkscreen arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SilkArc {
    /// Centre X in grid units.
    pub x: i64,
    /// Centre Y in grid units.
    pub y: i64,
    /// Horizontal radius in grid units.
    pub width: i64,
    /// Vertical radius in grid units.
    pub height: i64,
    /// Start angle in degrees.
    pub start_angle: i64,
    /// Sweep angle in degrees.
    pub delta_angle: i64,
    /// Line thickness in grid units.
    pub thickness: i64,
}

impl SilkArc {
    /// Creates a full circle.
    #[must_use]
    pub const fn circle(x: i64, y: i64, radius: i64, thickness: i64) -> Self {
        Self {
            x,
            y,
            width: radius,
            height: radius,
            start_angle: 0,
            delta_angle: 360,
            thickness,
        }
    }
}

/// A label text anchor (footprint name, refdes or value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Anchor X in grid units.
    pub x: i64,
    /// Anchor Y in grid units.
    pub y: i64,
    /// Text scale in percent of the default font size.
    pub scale: i64,
    /// Text content.
    pub text: String,
    /// Text direction (0 = horizontal, 1..3 = 90-degree steps).
    pub direction: i64,
}

/// Default label text scale (percent).
pub const LABEL_SCALE: i64 = 100;

impl Label {
    /// Creates a horizontal label at the given anchor with the default scale.
    #[must_use]
    pub fn new(x: i64, y: i64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            scale: LABEL_SCALE,
            text: text.into(),
            direction: 0,
        }
    }
}

/// A footprint primitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    /// Through-hole pin.
    Pin(Pin),
    /// Surface pad.
    Pad(Pad),
    /// Silkscreen line.
    Line(SilkLine),
    /// Silkscreen arc.
    Arc(SilkArc),
}

impl Primitive {
    /// Returns true for copper primitives (pins and pads).
    #[must_use]
    pub const fn is_copper(&self) -> bool {
        matches!(self, Self::Pin(_) | Self::Pad(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_tokens() {
        assert_eq!(ShapeFlags::empty().token(), "");
        assert_eq!(ShapeFlags::SQUARE.token(), "square");
        assert_eq!(ShapeFlags::OCTAGON.token(), "octagon");
        assert_eq!(
            (ShapeFlags::SQUARE | ShapeFlags::ONSOLDER).token(),
            "square,onsolder"
        );
    }

    #[test]
    fn numbered_pin_name_matches_number() {
        let pin = Pin::numbered(3, 0, 0, 6000, 1000, 6600, 2800, ShapeFlags::empty());
        assert_eq!(pin.name, "3");
        assert_eq!(pin.number, "3");
    }

    #[test]
    fn round_pad_has_zero_length_segment() {
        let pad = Pad::round_named("FID1", 100, -200, 4000, 0, 4400);
        assert_eq!(pad.x1, pad.x2);
        assert_eq!(pad.y1, pad.y2);
        assert!(pad.flags.is_empty());
    }

    #[test]
    fn copper_classification() {
        let line = Primitive::Line(SilkLine::new(0, 0, 10, 0, 10));
        assert!(!line.is_copper());
        let pin = Primitive::Pin(Pin::numbered(1, 0, 0, 1, 0, 1, 1, ShapeFlags::empty()));
        assert!(pin.is_copper());
    }
}
