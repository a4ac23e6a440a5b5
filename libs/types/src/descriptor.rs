//! # Field Descriptor - Immutable Slot Metadata
//!
//! One descriptor per field slot of a segment layout: datatype, optionality,
//! repetition cap, maximum serialized length, optional table binding and the
//! human-readable field name. Descriptors are `Copy` and built with `const fn`
//! so generated layout tables can be plain `static` data:
//!
//! ```rust
//! use types::{DatatypeId, FieldDescriptor, TableId};
//!
//! static FIELDS: &[FieldDescriptor] = &[
//!     FieldDescriptor::new(1, DatatypeId::Si, 4, "Set ID").required(),
//!     FieldDescriptor::new(2, DatatypeId::Cx, 250, "Patient Identifier List")
//!         .required()
//!         .unbounded(),
//!     FieldDescriptor::new(3, DatatypeId::Is, 1, "Administrative Sex").table(TableId(1)),
//! ];
//! ```

use std::fmt;

use crate::datatype::DatatypeId;

/// Repetition cap meaning "no limit"
pub const UNBOUNDED: usize = 0;

/// Identifier of an external coded-value table (e.g. HL7 table 0001)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableId(pub u16);

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Metadata of one field slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldDescriptor {
    /// 1-based position within the segment
    pub slot: usize,
    pub datatype: DatatypeId,
    pub required: bool,
    /// 0 means unbounded, 1 means non-repeating
    pub max_repetitions: usize,
    /// Maximum serialized length; 0 disables the check
    pub max_length: usize,
    pub table: Option<TableId>,
    pub name: &'static str,
}

impl FieldDescriptor {
    /// Optional, non-repeating field without table binding
    pub const fn new(
        slot: usize,
        datatype: DatatypeId,
        max_length: usize,
        name: &'static str,
    ) -> Self {
        Self {
            slot,
            datatype,
            required: false,
            max_repetitions: 1,
            max_length,
            table: None,
            name,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Allow up to `max` repetitions
    pub const fn repeating(mut self, max: usize) -> Self {
        self.max_repetitions = max;
        self
    }

    pub const fn unbounded(mut self) -> Self {
        self.max_repetitions = UNBOUNDED;
        self
    }

    /// Bind the field to an external coded-value table
    pub const fn table(mut self, table: TableId) -> Self {
        self.table = Some(table);
        self
    }

    pub fn is_repeating(&self) -> bool {
        self.max_repetitions != 1
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_repetitions == UNBOUNDED
    }

    /// Whether a slot holding `count` values may accept one more
    pub fn allows_another(&self, count: usize) -> bool {
        self.is_unbounded() || count < self.max_repetitions
    }

    /// Repetition cap rendered for documentation ("*" when unbounded)
    pub fn repetition_label(&self) -> String {
        if self.is_unbounded() {
            "*".to_string()
        } else {
            self.max_repetitions.to_string()
        }
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.slot, self.datatype, self.name)
    }
}
