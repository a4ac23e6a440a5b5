//! # Segment Builder - Outbound Segment Construction
//!
//! Fluent construction of outbound segments. Each call appends one repetition
//! to a slot; the first failing append is kept and returned by `build()`, the
//! remaining calls are skipped.
//!
//! ```rust
//! use std::sync::Arc;
//! use codec::{MessageContext, SegmentBuilder, StandardInstantiator};
//! use codec::segments::MSA_LAYOUT;
//!
//! let ack = SegmentBuilder::new(
//!     &MSA_LAYOUT,
//!     Arc::new(MessageContext::default()),
//!     Arc::new(StandardInstantiator),
//! )
//! .raw(1, "AA")
//! .raw(2, "MSG00001")
//! .build()
//! .unwrap();
//!
//! assert_eq!(ack.repetition_count(2).unwrap(), 1);
//! ```

use std::sync::Arc;

use tracing::debug;
use types::SegmentLayout;

use crate::error::{SegmentResult, StoreError};
use crate::instantiator::{DatatypeInstantiator, MessageContext};
use crate::segment::Segment;
use crate::value::FieldValue;

/// Fluent builder for an outbound segment
#[derive(Debug)]
pub struct SegmentBuilder {
    segment: Segment,
    error: Option<StoreError>,
}

impl SegmentBuilder {
    pub fn new(
        layout: &'static SegmentLayout,
        context: Arc<MessageContext>,
        instantiator: Arc<dyn DatatypeInstantiator>,
    ) -> Self {
        Self::from_segment(Segment::new(layout, context, instantiator))
    }

    /// Continue building on an existing segment
    pub fn from_segment(segment: Segment) -> Self {
        let error = segment.layout_error().cloned().map(StoreError::from);
        Self { segment, error }
    }

    /// Append raw text, constructed lazily like inbound text
    pub fn raw(mut self, slot: usize, text: impl Into<String>) -> Self {
        if self.error.is_none() {
            if let Err(err) = self.segment.append_raw(slot, text) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Append an already constructed value
    pub fn value(mut self, slot: usize, value: Box<dyn FieldValue>) -> Self {
        if self.error.is_none() {
            if let Err(err) = self.segment.append_value(slot, value) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Append several raw repetitions to one slot
    pub fn repetitions<I, S>(mut self, slot: usize, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for text in texts {
            self = self.raw(slot, text);
        }
        self
    }

    /// Finish, returning the first append error if any
    pub fn build(self) -> SegmentResult<Segment> {
        match self.error {
            Some(err) => {
                debug!(segment = self.segment.id(), error = %err, "segment build failed");
                Err(err)
            }
            None => Ok(self.segment),
        }
    }
}
