//! # Tokenizer/Encoder Boundary
//!
//! The store neither splits nor joins delimiters. The tokenizer hands it
//! pre-split raw text per slot and repetition (`RawSegment`), and the encoder
//! receives, per populated slot, the rendered text of every repetition
//! (`EncodedField`), in ascending slot order.

use std::sync::Arc;

use tracing::warn;

use crate::error::SegmentResult;
use crate::instantiator::{DatatypeInstantiator, MessageContext};
use crate::segment::Segment;
use crate::segments::SegmentRegistry;

/// Rendered repetitions of one populated slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedField {
    pub slot: usize,
    pub repetitions: Vec<String>,
}

/// Tokenizer output for one segment occurrence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSegment {
    /// Segment identifier, e.g. "OBX"
    pub id: String,
    /// Raw repetition texts per field, field 1 first
    pub fields: Vec<Vec<String>>,
}

impl RawSegment {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    /// Append the raw repetitions of the next field
    pub fn with_field<I, S>(mut self, repetitions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields
            .push(repetitions.into_iter().map(Into::into).collect());
        self
    }

    /// Build and populate the registered segment type for this id
    ///
    /// Returns `Ok(None)` for segment ids without a registered layout.
    pub fn into_segment(
        self,
        context: Arc<MessageContext>,
        instantiator: Arc<dyn DatatypeInstantiator>,
    ) -> SegmentResult<Option<Segment>> {
        let Some(mut segment) = SegmentRegistry::instantiate(&self.id, context, instantiator)
        else {
            warn!(segment = %self.id, "no layout registered for segment");
            return Ok(None);
        };
        segment.populate(self.fields)?;
        Ok(Some(segment))
    }
}

impl Segment {
    /// Every slot with at least one value, with each repetition rendered
    pub fn encode_fields(&self) -> SegmentResult<Vec<EncodedField>> {
        self.store()
            .populated_slots()
            .map(|field| {
                let slot = field.descriptor().slot;
                let repetitions = self
                    .get_all_values(slot)?
                    .into_iter()
                    .map(|value| value.encode())
                    .collect();
                Ok(EncodedField { slot, repetitions })
            })
            .collect()
    }
}
