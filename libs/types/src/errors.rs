//! Error types for layout table metadata
//!
//! These cover static layout data only. Runtime store errors live in the
//! codec crate.

use thiserror::Error;

/// A datatype name that is not part of the closed datatype set
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown datatype '{name}': not in the closed datatype set")]
pub struct UnknownDatatype {
    pub name: String,
}

/// Structural defect found in a static layout table
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutDefect {
    /// Slot numbers must run 1..N without gaps or duplicates
    #[error("Segment {segment}: field at position {position} declares slot {found}, expected {expected}")]
    NonContiguous {
        segment: &'static str,
        position: usize,
        expected: usize,
        found: usize,
    },
}
