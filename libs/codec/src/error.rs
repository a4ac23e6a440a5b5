//! Field store errors
//!
//! Every store operation returns one of these as an explicit `Result`. Each
//! variant carries the segment id, slot number and field name so a failure
//! can be traced to its layout entry without a debugger.

use thiserror::Error;
use types::DatatypeId;

/// Inconsistent field layout detected while registering descriptors
///
/// Always a defect in the generated layout table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Slot registered out of order, duplicated or with a gap
    #[error("Segment {segment}: slot {slot} registered out of order, expected slot {expected}")]
    NonContiguous {
        segment: &'static str,
        slot: usize,
        expected: usize,
    },

    /// Descriptor declares a different slot than it was registered at
    #[error("Segment {segment}: descriptor for slot {declared} registered at slot {slot}")]
    SlotMismatch {
        segment: &'static str,
        slot: usize,
        declared: usize,
    },

    /// Registration attempted after the segment left the construction phase
    #[error("Segment {segment}: cannot register slot {slot} after construction completed")]
    Sealed { segment: &'static str, slot: usize },
}

/// Failure reported by a datatype instantiator
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot construct {datatype} from {text:?}: {reason}")]
pub struct ConstructionError {
    pub datatype: DatatypeId,
    pub text: String,
    pub reason: String,
}

impl ConstructionError {
    pub fn new(datatype: DatatypeId, text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            datatype,
            text: text.into(),
            reason: reason.into(),
        }
    }
}

/// Errors returned by field store and segment operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Field layout is internally inconsistent
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Slot number outside the registered range
    #[error("Unknown slot {slot} in segment {segment}: {}", registered_range(.slot_count))]
    UnknownSlot {
        segment: &'static str,
        slot: usize,
        slot_count: usize,
    },

    /// Repetition index not (yet) present
    #[error("Repetition {repetition} of {segment}-{slot} ({name}) is not present: {count} repetition(s) populated")]
    RepetitionOutOfRange {
        segment: &'static str,
        slot: usize,
        name: &'static str,
        repetition: usize,
        count: usize,
    },

    /// Append beyond the declared maximum repetitions
    #[error("Repetition limit exceeded for {segment}-{slot} ({name}): at most {max} repetition(s) allowed")]
    RepetitionLimitExceeded {
        segment: &'static str,
        slot: usize,
        name: &'static str,
        max: usize,
    },

    /// Raw text could not be turned into a typed value
    #[error("Datatype construction failed for {segment}-{slot} ({name}) repetition {repetition}: {source}")]
    DatatypeConstruction {
        segment: &'static str,
        slot: usize,
        name: &'static str,
        repetition: usize,
        #[source]
        source: ConstructionError,
    },

    /// Value is not of the datatype the slot declares
    #[error("Datatype mismatch for {segment}-{slot} ({name}): declared {expected}, got {actual}")]
    DatatypeMismatch {
        segment: &'static str,
        slot: usize,
        name: &'static str,
        expected: DatatypeId,
        actual: String,
    },

    /// Field access attempted while descriptors are still being registered
    #[error("Segment {segment} is still under construction: {operation} is not allowed before layout registration completes")]
    NotPopulated {
        segment: &'static str,
        operation: &'static str,
    },
}

impl StoreError {
    pub fn unknown_slot(segment: &'static str, slot: usize, slot_count: usize) -> Self {
        Self::UnknownSlot {
            segment,
            slot,
            slot_count,
        }
    }

    pub fn repetition_out_of_range(
        segment: &'static str,
        slot: usize,
        name: &'static str,
        repetition: usize,
        count: usize,
    ) -> Self {
        Self::RepetitionOutOfRange {
            segment,
            slot,
            name,
            repetition,
            count,
        }
    }

    pub fn repetition_limit_exceeded(
        segment: &'static str,
        slot: usize,
        name: &'static str,
        max: usize,
    ) -> Self {
        Self::RepetitionLimitExceeded {
            segment,
            slot,
            name,
            max,
        }
    }

    pub fn datatype_construction(
        segment: &'static str,
        slot: usize,
        name: &'static str,
        repetition: usize,
        source: ConstructionError,
    ) -> Self {
        Self::DatatypeConstruction {
            segment,
            slot,
            name,
            repetition,
            source,
        }
    }

    pub fn datatype_mismatch(
        segment: &'static str,
        slot: usize,
        name: &'static str,
        expected: DatatypeId,
        actual: impl Into<String>,
    ) -> Self {
        Self::DatatypeMismatch {
            segment,
            slot,
            name,
            expected,
            actual: actual.into(),
        }
    }

    /// Caller-side defects, as opposed to conditions a count-first caller
    /// may legitimately probe for
    pub fn is_defect(&self) -> bool {
        !matches!(self, StoreError::RepetitionOutOfRange { .. })
    }
}

fn registered_range(slot_count: &usize) -> String {
    match slot_count {
        0 => "segment has no registered slots".to_string(),
        n => format!("registered slots are 1-{n}"),
    }
}

/// Result type for field store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type for segment-facing accessors
pub type SegmentResult<T> = StoreResult<T>;
