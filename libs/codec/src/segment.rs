//! # Segment Base - Layout-Driven Segment Engine
//!
//! ## Purpose
//!
//! One generic engine for every segment type. A segment registers its static
//! layout table into a `FieldSlotStore` at construction and then exposes the
//! store's positional operations. Concrete segment types generated with
//! `define_segment!` only add typed pass-through accessors on top.
//!
//! ## Construction
//!
//! - `Segment::try_new` fails with the `LayoutError` of the first bad slot
//! - `Segment::new` logs the layout error once and returns a usable but empty
//!   segment (no registered slots), so one broken segment type does not abort
//!   processing of the rest of a message. The error stays available through
//!   `layout_error()`
//!
//! Both seal the store before returning: a constructed segment is always in
//! the `Populated` phase.

use std::sync::Arc;

use tracing::{debug, error};
use types::{DatatypeId, FieldDescriptor, SegmentLayout};

use crate::error::{LayoutError, SegmentResult, StoreError};
use crate::instantiator::{DatatypeInstantiator, MessageContext};
use crate::store::{FieldSlotStore, Lifecycle};
use crate::value::FieldValue;

/// One segment instance within a message
#[derive(Debug)]
pub struct Segment {
    layout: &'static SegmentLayout,
    store: FieldSlotStore,
    layout_error: Option<LayoutError>,
    eager: bool,
}

impl Segment {
    /// Build a segment, degrading to an empty segment on a broken layout
    pub fn new(
        layout: &'static SegmentLayout,
        context: Arc<MessageContext>,
        instantiator: Arc<dyn DatatypeInstantiator>,
    ) -> Self {
        match Self::try_new(layout, context.clone(), instantiator.clone()) {
            Ok(segment) => segment,
            Err(err) => {
                error!(
                    segment = layout.id,
                    error = %err,
                    "segment layout rejected, continuing with an empty segment"
                );
                let mut store = FieldSlotStore::new(layout.id, context, instantiator);
                store.seal();
                Self {
                    layout,
                    store,
                    layout_error: Some(err),
                    eager: false,
                }
            }
        }
    }

    /// Build a segment, failing on the first inconsistent layout entry
    pub fn try_new(
        layout: &'static SegmentLayout,
        context: Arc<MessageContext>,
        instantiator: Arc<dyn DatatypeInstantiator>,
    ) -> Result<Self, LayoutError> {
        let mut store = FieldSlotStore::new(layout.id, context, instantiator);
        for descriptor in layout.fields {
            store.register(descriptor.slot, *descriptor)?;
        }
        store.seal();
        debug!(segment = layout.id, slots = store.slot_count(), "segment constructed");

        Ok(Self {
            layout,
            store,
            layout_error: None,
            eager: false,
        })
    }

    /// Materialize values as soon as `populate` stores them
    pub fn with_eager_materialization(mut self, eager: bool) -> Self {
        self.eager = eager;
        self
    }

    /// Segment identifier, e.g. "PID"
    pub fn id(&self) -> &'static str {
        self.layout.id
    }

    pub fn layout(&self) -> &'static SegmentLayout {
        self.layout
    }

    /// Layout error recorded by lenient construction
    pub fn layout_error(&self) -> Option<&LayoutError> {
        self.layout_error.as_ref()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.store.lifecycle()
    }

    pub fn context(&self) -> &MessageContext {
        self.store.context()
    }

    pub fn store(&self) -> &FieldSlotStore {
        &self.store
    }

    /// Number of registered slots
    pub fn slot_count(&self) -> usize {
        self.store.slot_count()
    }

    pub fn descriptor(&self, slot: usize) -> SegmentResult<&FieldDescriptor> {
        self.store.descriptor(slot)
    }

    pub fn get_value(&self, slot: usize, repetition: usize) -> SegmentResult<&dyn FieldValue> {
        self.store.get_value(slot, repetition)
    }

    pub fn get_all_values(&self, slot: usize) -> SegmentResult<Vec<&dyn FieldValue>> {
        self.store.get_all_values(slot)
    }

    pub fn repetition_count(&self, slot: usize) -> SegmentResult<usize> {
        self.store.repetition_count(slot)
    }

    pub fn append_raw(&mut self, slot: usize, raw: impl Into<String>) -> SegmentResult<usize> {
        self.store.append_raw(slot, raw)
    }

    pub fn append_value(
        &mut self,
        slot: usize,
        value: Box<dyn FieldValue>,
    ) -> SegmentResult<usize> {
        self.store.append_value(slot, value)
    }

    pub fn materialize_all(&self) -> SegmentResult<usize> {
        self.store.materialize_all()
    }

    /// Value checked against the datatype a generated accessor declares
    pub fn get_typed(
        &self,
        slot: usize,
        repetition: usize,
        expected: DatatypeId,
    ) -> SegmentResult<&dyn FieldValue> {
        let value = self.store.get_value(slot, repetition)?;
        self.check_datatype(slot, value, expected)?;
        Ok(value)
    }

    /// All repetitions checked against a declared datatype
    pub fn get_all_typed(
        &self,
        slot: usize,
        expected: DatatypeId,
    ) -> SegmentResult<Vec<&dyn FieldValue>> {
        let values = self.store.get_all_values(slot)?;
        for value in &values {
            self.check_datatype(slot, *value, expected)?;
        }
        Ok(values)
    }

    /// Value downcast to a concrete value type
    pub fn get_as<T: FieldValue>(&self, slot: usize, repetition: usize) -> SegmentResult<&T> {
        let value = self.store.get_value(slot, repetition)?;
        match value.downcast_ref::<T>() {
            Some(typed) => Ok(typed),
            None => {
                let descriptor = self.store.descriptor(slot)?;
                Err(StoreError::datatype_mismatch(
                    self.layout.id,
                    slot,
                    descriptor.name,
                    descriptor.datatype,
                    format!(
                        "{} value requested as {}",
                        value.datatype(),
                        std::any::type_name::<T>()
                    ),
                ))
            }
        }
    }

    /// Store tokenizer output: raw repetition texts per slot, starting at 1
    ///
    /// Empty repetition lists are skipped. Fields beyond the layout fail with
    /// `UnknownSlot` only when they carry at least one repetition. Slot range
    /// and repetition caps are checked for every field before the first
    /// append, so a rejected population leaves the segment untouched.
    pub fn populate<I, R, S>(&mut self, fields: I) -> SegmentResult<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<Vec<String>> = fields
            .into_iter()
            .map(|repetitions| repetitions.into_iter().map(Into::into).collect())
            .collect();

        for (index, repetitions) in fields.iter().enumerate() {
            if !repetitions.is_empty() {
                self.check_capacity(index + 1, repetitions.len())?;
            }
        }

        for (index, repetitions) in fields.into_iter().enumerate() {
            let slot = index + 1;
            for raw in repetitions {
                self.store.append_raw(slot, raw)?;
            }
        }
        if self.eager {
            self.store.materialize_all()?;
        }
        Ok(())
    }

    /// Whether `slot` exists and can take `incoming` more repetitions
    fn check_capacity(&self, slot: usize, incoming: usize) -> SegmentResult<()> {
        let descriptor = self.store.descriptor(slot)?;
        let existing = self.store.repetition_count(slot)?;
        if descriptor.allows_another(existing + incoming - 1) {
            return Ok(());
        }
        Err(StoreError::repetition_limit_exceeded(
            self.layout.id,
            slot,
            descriptor.name,
            descriptor.max_repetitions,
        ))
    }

    fn check_datatype(
        &self,
        slot: usize,
        value: &dyn FieldValue,
        expected: DatatypeId,
    ) -> SegmentResult<()> {
        if expected == DatatypeId::Varies || value.datatype() == expected {
            return Ok(());
        }
        let descriptor = self.store.descriptor(slot)?;
        Err(StoreError::datatype_mismatch(
            self.layout.id,
            slot,
            descriptor.name,
            expected,
            value.datatype().name(),
        ))
    }
}
