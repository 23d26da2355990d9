//! gEDA footprint file serializer.
//!
//! Emits the textual `Element` record: a header line carrying the names and
//! the text anchor, a parenthesized body with one tab-indented line per
//! primitive, optional `Attribute` records, and the closing parenthesis.
//! Output is deterministic: the same element always serializes to the same
//! bytes.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::error::{ElementError, ElementResult};
use super::layout::LABEL_OFFSET;
use super::primitives::Primitive;
use super::Element;

/// Serializes an element to the given writer.
///
/// Returns [`ElementError::EmptyElement`] when the element carries no copper
/// primitives; a footprint without pins or pads is never written.
pub fn serialize<W: Write>(element: &Element, out: &mut W) -> ElementResult<()> {
    if element.is_empty() {
        return Err(ElementError::empty_element(element.name.clone()));
    }

    let (tx, ty) = element.labels.first().map_or_else(
        || (0, element.bound.ymin - LABEL_OFFSET),
        |label| (label.x, label.y),
    );
    writeln!(
        out,
        "Element[\"\" \"{}\" \"{}\" \"{}\" 0 0 {tx} {ty} 0 100 \"\"]",
        element.name, element.refdes, element.value
    )?;
    writeln!(out, "(")?;

    write_section(out, None, &element.copper)?;
    write_section(out, Some("silkscreen outline"), &element.silkscreen)?;
    write_section(out, Some("pin 1 marker"), &element.pin1_marker)?;
    write_section(out, Some("courtyard"), &element.courtyard)?;

    for (name, value) in &element.attributes {
        writeln!(out, "\tAttribute(\"{name}\" \"{value}\")")?;
    }
    writeln!(out, ")")?;
    Ok(())
}

/// Serializes an element to a file, creating or truncating it.
pub fn serialize_to_path(element: &Element, path: &Path) -> ElementResult<()> {
    let file = File::create(path).map_err(|source| ElementError::file_write(path, source))?;
    let mut out = BufWriter::new(file);
    serialize(element, &mut out)?;
    out.flush()
        .map_err(|source| ElementError::file_write(path, source))
}

fn write_section<W: Write>(
    out: &mut W,
    comment: Option<&str>,
    primitives: &[Primitive],
) -> io::Result<()> {
    if primitives.is_empty() {
        return Ok(());
    }
    if let Some(comment) = comment {
        writeln!(out, "\t# {comment}")?;
    }
    for primitive in primitives {
        write_primitive(out, primitive)?;
    }
    Ok(())
}

fn write_primitive<W: Write>(out: &mut W, primitive: &Primitive) -> io::Result<()> {
    match primitive {
        Primitive::Pin(p) => writeln!(
            out,
            "\tPin[{} {} {} {} {} {} \"{}\" \"{}\" \"{}\"]",
            p.x,
            p.y,
            p.thickness,
            p.clearance,
            p.mask,
            p.drill,
            p.name,
            p.number,
            p.flags.token()
        ),
        Primitive::Pad(p) => writeln!(
            out,
            "\tPad[{} {} {} {} {} {} {} \"{}\" \"{}\" \"{}\"]",
            p.x1,
            p.y1,
            p.x2,
            p.y2,
            p.thickness,
            p.clearance,
            p.mask,
            p.name,
            p.number,
            p.flags.token()
        ),
        Primitive::Line(l) => writeln!(
            out,
            "\tElementLine[{} {} {} {} {}]",
            l.x1, l.y1, l.x2, l.y2, l.thickness
        ),
        Primitive::Arc(a) => writeln!(
            out,
            "\tElementArc[{} {} {} {} {} {} {}]",
            a.x, a.y, a.width, a.height, a.start_angle, a.delta_angle, a.thickness
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::primitives::{Pin, ShapeFlags, SilkLine};
    use crate::element::{CourtyardBound, PackageDescriptor};
    use crate::element::{Family, Label};

    fn small_element() -> Element {
        let desc = PackageDescriptor::new(Family::Sil, "SIL2");
        let mut element = Element::from_descriptor(
            &desc,
            CourtyardBound {
                xmin: -8_000,
                ymin: -4_000,
                xmax: 8_000,
                ymax: 4_000,
            },
        );
        element.refdes = "J?".to_string();
        element.labels = vec![Label::new(0, -14_000, "SIL2")];
        element.copper = vec![
            Primitive::Pin(Pin::numbered(
                1,
                -5_000,
                0,
                6_000,
                1_000,
                6_600,
                2_800,
                ShapeFlags::SQUARE,
            )),
            Primitive::Pin(Pin::numbered(
                2,
                5_000,
                0,
                6_000,
                1_000,
                6_600,
                2_800,
                ShapeFlags::empty(),
            )),
        ];
        element.silkscreen = vec![Primitive::Line(SilkLine::new(
            -8_000, -4_000, 8_000, -4_000, 1_000,
        ))];
        element
    }

    fn render(element: &Element) -> String {
        let mut buf = Vec::new();
        serialize(element, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_carries_names_and_anchor() {
        let text = render(&small_element());
        let first = text.lines().next().unwrap();
        assert_eq!(
            first,
            "Element[\"\" \"SIL2\" \"J?\" \"\" 0 0 0 -14000 0 100 \"\"]"
        );
    }

    #[test]
    fn body_is_parenthesized_and_tab_indented() {
        let text = render(&small_element());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "(");
        assert_eq!(lines.last(), Some(&")"));
        assert!(lines[2].starts_with("\tPin["));
        assert_eq!(
            lines[2],
            "\tPin[-5000 0 6000 1000 6600 2800 \"1\" \"1\" \"square\"]"
        );
    }

    #[test]
    fn sections_are_commented() {
        let text = render(&small_element());
        assert!(text.contains("\t# silkscreen outline\n\tElementLine["));
        // Empty sections emit no comment.
        assert!(!text.contains("# courtyard"));
    }

    #[test]
    fn serialization_is_deterministic() {
        let element = small_element();
        assert_eq!(render(&element), render(&element));
    }

    #[test]
    fn empty_element_refused() {
        let desc = PackageDescriptor::new(Family::Chip, "EMPTY");
        let element = Element::from_descriptor(&desc, CourtyardBound::default());
        let mut buf = Vec::new();
        let err = serialize(&element, &mut buf).unwrap_err();
        assert!(matches!(err, ElementError::EmptyElement { .. }));
        assert!(buf.is_empty());
    }

    #[test]
    fn anchor_falls_back_below_bound() {
        let mut element = small_element();
        element.labels.clear();
        let text = render(&element);
        assert!(text.starts_with("Element[\"\" \"SIL2\" \"J?\" \"\" 0 0 0 -14000 0 100 \"\"]"));
    }
}
