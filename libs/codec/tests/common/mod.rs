//! Shared fixtures: a minimal pipe-delimited tokenizer/encoder pair and an
//! instantiator that counts construction calls.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use codec::types::{DatatypeId, FieldDescriptor, SegmentLayout, TableId};
use codec::{
    ConstructionArgs, ConstructionError, DatatypeInstantiator, EncodedField, FieldValue,
    MessageContext, RawSegment, Segment, StandardInstantiator,
};

pub const FIELD_SEPARATOR: &str = "|";
pub const REPETITION_SEPARATOR: &str = "~";

/// Slot 1 required and non-repeating, slot 2 optional with up to 3 repetitions
pub static SCENARIO_LAYOUT: SegmentLayout = SegmentLayout::new(
    "ZSC",
    "Scenario segment",
    &[
        FieldDescriptor::new(1, DatatypeId::St, 20, "Identifier").required(),
        FieldDescriptor::new(2, DatatypeId::Ce, 250, "Codes")
            .repeating(3)
            .table(TableId(78)),
        FieldDescriptor::new(3, DatatypeId::Tx, 0, "Notes").unbounded(),
    ],
);

/// Split one segment line into its id and raw repetitions per field
pub fn tokenize(line: &str) -> RawSegment {
    let mut parts = line.split(FIELD_SEPARATOR);
    let id = parts.next().unwrap_or_default();
    parts.fold(RawSegment::new(id), |segment, field| {
        if field.is_empty() {
            segment.with_field(Vec::<String>::new())
        } else {
            segment.with_field(field.split(REPETITION_SEPARATOR))
        }
    })
}

/// Join encoded fields back into one segment line
pub fn encode(id: &str, fields: &[EncodedField]) -> String {
    let width = fields.last().map(|field| field.slot).unwrap_or(0);
    let mut columns = vec![String::new(); width];
    for field in fields {
        columns[field.slot - 1] = field.repetitions.join(REPETITION_SEPARATOR);
    }
    std::iter::once(id.to_string())
        .chain(columns)
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR)
}

pub fn context() -> Arc<MessageContext> {
    Arc::new(
        MessageContext::new("2.5")
            .with_message_type("ORU^R01")
            .with_control_id("MSG00001"),
    )
}

pub fn scenario_segment() -> Segment {
    Segment::new(&SCENARIO_LAYOUT, context(), Arc::new(StandardInstantiator))
}

/// Delegates to `StandardInstantiator` and counts every construction
#[derive(Debug, Default)]
pub struct CountingInstantiator {
    calls: AtomicUsize,
}

impl CountingInstantiator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DatatypeInstantiator for CountingInstantiator {
    fn construct(
        &self,
        datatype: DatatypeId,
        args: &ConstructionArgs<'_>,
        raw: &str,
    ) -> Result<Box<dyn FieldValue>, ConstructionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        StandardInstantiator.construct(datatype, args, raw)
    }
}
