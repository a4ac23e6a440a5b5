//! Layout metadata as consumed by documentation and tooling.

use std::str::FromStr;

use types::{DatatypeId, FieldDescriptor, LayoutDefect, SegmentLayout, TableId};

static ZOB: SegmentLayout = SegmentLayout::new(
    "ZOB",
    "Observation Extension",
    &[
        FieldDescriptor::new(1, DatatypeId::Si, 4, "Set ID").required(),
        FieldDescriptor::new(2, DatatypeId::Cwe, 250, "Finding")
            .repeating(8)
            .table(TableId(78)),
        FieldDescriptor::new(3, DatatypeId::Varies, 0, "Payload").unbounded(),
    ],
);

static GAPPED: SegmentLayout = SegmentLayout::new(
    "ZGP",
    "Gapped",
    &[
        FieldDescriptor::new(1, DatatypeId::St, 0, "First"),
        FieldDescriptor::new(2, DatatypeId::St, 0, "Second"),
        FieldDescriptor::new(2, DatatypeId::St, 0, "Second again"),
    ],
);

#[test]
fn test_layout_serializes_for_tooling() {
    let json = serde_json::to_value(&ZOB).unwrap();

    assert_eq!(json["id"], "ZOB");
    let fields = json["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[1]["slot"], 2);
    assert_eq!(fields[1]["max_repetitions"], 8);
    assert_eq!(fields[1]["table"], 78);
    assert_eq!(fields[2]["max_repetitions"], 0);
    assert!(fields[2]["table"].is_null());
    assert_eq!(fields[0]["required"], true);
}

#[test]
fn test_datatype_names_round_trip_through_layout_text() {
    for descriptor in ZOB.fields {
        let name = descriptor.datatype.name();
        assert_eq!(DatatypeId::from_str(name), Ok(descriptor.datatype));
    }
    assert!(DatatypeId::from_str("XYZ").is_err());
}

#[test]
fn test_duplicate_slot_is_a_defect() {
    assert_eq!(
        GAPPED.check_contiguous(),
        Err(LayoutDefect::NonContiguous {
            segment: "ZGP",
            position: 2,
            expected: 3,
            found: 2,
        })
    );
    assert!(ZOB.check_contiguous().is_ok());
}

#[test]
fn test_required_slots_and_markdown() {
    assert_eq!(ZOB.required_slots().collect::<Vec<_>>(), vec![1]);

    let table = ZOB.markdown_table();
    assert!(table.contains("## ZOB - Observation Extension"));
    assert!(table.contains("Finding"));
    assert!(table.contains("0078"));
}
