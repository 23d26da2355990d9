//! End-to-end generation tests: descriptor in, footprint file out.

use fpgen::element::{
    build_primitives, check_rules, serialize, serialize_to_path, Family, PackageDescriptor,
    PadShape, Primitive, UnitSystem,
};

fn capc0603x33n() -> PackageDescriptor {
    let mut d = PackageDescriptor::new(Family::Chip, "CAPC0603X33N");
    d.refdes = "C?".to_string();
    d.value = "100n".to_string();
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
    d
}

fn to92() -> PackageDescriptor {
    let mut d = PackageDescriptor::new(Family::To92, "TO92");
    d.refdes = "Q?".to_string();
    d.unit_system = UnitSystem::Mil;
    d.number_of_pins = 3;
    d.pad_shape = PadShape::Round;
    d.pad_diameter = 72.0;
    d.pin_drill_diameter = 32.0;
    d.pad_clearance = 10.0;
    d.pad_solder_mask_clearance = 6.0;
    d.package_body_height = 190.0;
    d.package_is_radial = true;
    d.courtyard_enabled = true;
    d.courtyard_line_width = 2.0;
    d.courtyard_clearance_with_package = 25.0;
    d.silkscreen_package_outline = true;
    d.silkscreen_line_width = 10.0;
    d
}

fn render(element: &fpgen::element::Element) -> String {
    let mut buf = Vec::new();
    serialize(element, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn capc_generates_two_pads_inside_courtyard() {
    let descriptor = capc0603x33n();
    assert!(check_rules(&descriptor).passed);

    let element = build_primitives(&descriptor);
    let pads: Vec<_> = element
        .copper
        .iter()
        .filter_map(|p| match p {
            Primitive::Pad(pad) => Some(pad),
            _ => None,
        })
        .collect();
    assert_eq!(pads.len(), 2);

    // Every pad rectangle sits inside the courtyard bound.
    for pad in pads {
        let half = pad.thickness / 2;
        let reach = pad.x1.abs().max(pad.x2.abs()) + half;
        assert!(reach <= element.bound.xmax);
        assert!(pad.y1.abs() + half <= element.bound.ymax);
    }
}

#[test]
fn capc_file_has_expected_records() {
    let element = build_primitives(&capc0603x33n());
    let text = render(&element);

    assert!(text.starts_with("Element[\"\" \"CAPC0603X33N\" \"C?\" \"100n\" "));
    assert_eq!(text.matches("\tPad[").count(), 2);
    // Silkscreen rectangle and courtyard rectangle, four lines each.
    assert_eq!(text.matches("\tElementLine[").count(), 8);
    assert!(text.trim_end().ends_with(')'));

    // Pad 2 endpoints: (0.66 - 0.46 + 0.42)/2 mm and (0.66 + 0.46 - 0.42)/2 mm.
    assert!(text.contains("\tPad[1220 0 1378 0 1654"));
}

#[test]
fn to92_generates_three_pins_and_circular_outline() {
    let descriptor = to92();
    assert!(check_rules(&descriptor).passed);

    let element = build_primitives(&descriptor);
    let text = render(&element);

    assert_eq!(text.matches("\tPin[").count(), 3);
    assert!(text.contains("\tPin[-5000 0 "));
    assert!(text.contains("\tPin[0 0 "));
    assert!(text.contains("\tPin[5000 0 "));
    // Body circle plus the courtyard circle.
    assert_eq!(text.matches("\tElementArc[").count(), 2);
}

#[test]
fn sil_outer_pins_stay_inside_courtyard() {
    // Six pins at 100 mil pitch with a user courtyard narrower than the
    // pin row. The computed bound must still enclose the outermost copper.
    let mut d = PackageDescriptor::new(Family::Sil, "SIL6");
    d.refdes = "J?".to_string();
    d.unit_system = UnitSystem::Mil;
    d.number_of_rows = 1;
    d.number_of_columns = 6;
    d.number_of_pins = 6;
    d.pitch_x = 100.0;
    d.pad_shape = PadShape::Round;
    d.pad_diameter = 60.0;
    d.pin_drill_diameter = 28.0;
    d.pad_clearance = 10.0;
    d.pad_solder_mask_clearance = 6.0;
    d.package_body_length = 180.0;
    d.package_body_width = 100.0;
    d.package_body_height = 80.0;
    d.courtyard_enabled = true;
    d.courtyard_length = 220.0;
    d.courtyard_width = 140.0;
    d.courtyard_line_width = 2.0;
    d.courtyard_clearance_with_package = 20.0;
    d.silkscreen_package_outline = true;
    d.silkscreen_line_width = 10.0;
    assert!(check_rules(&d).passed);

    let element = build_primitives(&d);
    let pins: Vec<_> = element
        .copper
        .iter()
        .filter_map(|p| match p {
            Primitive::Pin(pin) => Some(pin),
            _ => None,
        })
        .collect();
    assert_eq!(pins.len(), 6);
    for pin in pins {
        // Outer pin centres are at +/-25000 with 3000 of copper beyond.
        let reach = pin.x.abs() + pin.thickness / 2;
        assert!(
            reach <= element.bound.xmax,
            "pin {} reaches {reach}, bound ends at {}",
            pin.number,
            element.bound.xmax
        );
    }
}

#[test]
fn serialization_is_idempotent() {
    let element = build_primitives(&capc0603x33n());
    let first = render(&element);
    let second = render(&element);
    assert_eq!(first, second);
}

#[test]
fn writes_footprint_file_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("CAPC0603X33N.fp");

    let element = build_primitives(&capc0603x33n());
    serialize_to_path(&element, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render(&element));
}

#[test]
fn empty_descriptor_is_never_written() {
    let descriptor = PackageDescriptor::new(Family::Chip, "EMPTY");
    let element = build_primitives(&descriptor);
    assert!(element.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("EMPTY.fp");
    assert!(serialize_to_path(&element, &path).is_err());
}

#[test]
fn perpendicular_pads_follow_the_larger_dimension() {
    let mut descriptor = capc0603x33n();
    descriptor.name = "CAPC0816X61N".to_string();
    descriptor.pitch_x = 0.80;
    descriptor.pad_length = 0.50;
    descriptor.pad_width = 1.60;
    descriptor.package_body_length = 0.80;
    descriptor.package_body_width = 1.60;
    descriptor.courtyard_length = 1.90;
    descriptor.courtyard_width = 2.30;
    assert!(check_rules(&descriptor).passed);

    let element = build_primitives(&descriptor);
    for primitive in &element.copper {
        let Primitive::Pad(pad) = primitive else {
            panic!("expected pads only");
        };
        // Pads run along Y at mirrored X positions.
        assert_eq!(pad.x1, pad.x2);
        assert!(pad.y1 < pad.y2);
    }
}
