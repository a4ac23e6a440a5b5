//! # Segment Layout Tables
//!
//! A layout is the ordered, static list of field descriptors that defines one
//! segment type. Layouts are produced by code generation and consumed verbatim
//! when a segment is constructed; the store re-checks contiguity while
//! registering, `check_contiguous` lets tooling and tests check a table up
//! front.

use crate::descriptor::FieldDescriptor;
use crate::errors::LayoutDefect;

/// Static field layout of one segment type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SegmentLayout {
    /// Three-character segment identifier (e.g. "PID")
    pub id: &'static str,
    pub description: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl SegmentLayout {
    pub const fn new(
        id: &'static str,
        description: &'static str,
        fields: &'static [FieldDescriptor],
    ) -> Self {
        Self {
            id,
            description,
            fields,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Descriptor of a 1-based slot
    pub fn field(&self, slot: usize) -> Option<&FieldDescriptor> {
        slot.checked_sub(1).and_then(|i| self.fields.get(i))
    }

    pub fn required_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.fields.iter().filter(|d| d.required).map(|d| d.slot)
    }

    /// Verify slot numbers run 1..N in order
    pub fn check_contiguous(&self) -> Result<(), LayoutDefect> {
        for (position, descriptor) in self.fields.iter().enumerate() {
            let expected = position + 1;
            if descriptor.slot != expected {
                return Err(LayoutDefect::NonContiguous {
                    segment: self.id,
                    position,
                    expected,
                    found: descriptor.slot,
                });
            }
        }
        Ok(())
    }

    /// Render the layout as a markdown reference table
    pub fn markdown_table(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("## {} - {}\n\n", self.id, self.description));
        output.push_str("| Seq | Name | Type | Req | Rep | Len | Table |\n");
        output.push_str("|-----|------|------|-----|-----|-----|-------|\n");

        for d in self.fields {
            let table = d
                .table
                .map(|t| t.to_string())
                .unwrap_or_default();
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                d.slot,
                d.name,
                d.datatype,
                if d.required { "R" } else { "O" },
                d.repetition_label(),
                d.max_length,
                table,
            ));
        }
        output.push('\n');
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DatatypeId, TableId};

    static GOOD: SegmentLayout = SegmentLayout::new(
        "ZTS",
        "Test segment",
        &[
            FieldDescriptor::new(1, DatatypeId::Si, 4, "Set ID").required(),
            FieldDescriptor::new(2, DatatypeId::Ce, 250, "Code")
                .repeating(3)
                .table(TableId(78)),
        ],
    );

    static GAPPED: SegmentLayout = SegmentLayout::new(
        "ZGP",
        "Gapped segment",
        &[
            FieldDescriptor::new(1, DatatypeId::St, 10, "First"),
            FieldDescriptor::new(3, DatatypeId::St, 10, "Third"),
        ],
    );

    #[test]
    fn test_field_lookup_is_one_based() {
        assert_eq!(GOOD.field(1).unwrap().name, "Set ID");
        assert_eq!(GOOD.field(2).unwrap().datatype, DatatypeId::Ce);
        assert!(GOOD.field(0).is_none());
        assert!(GOOD.field(3).is_none());
        assert_eq!(GOOD.required_slots().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_contiguity_check() {
        assert!(GOOD.check_contiguous().is_ok());
        assert_eq!(
            GAPPED.check_contiguous().unwrap_err(),
            LayoutDefect::NonContiguous {
                segment: "ZGP",
                position: 1,
                expected: 2,
                found: 3,
            }
        );
    }

    #[test]
    fn test_markdown_table() {
        let table = GOOD.markdown_table();
        assert!(table.starts_with("## ZTS - Test segment"));
        assert!(table.contains("| 1 | Set ID | SI | R | 1 | 4 |  |"));
        assert!(table.contains("| 2 | Code | CE | O | 3 | 250 | 0078 |"));
    }
}
