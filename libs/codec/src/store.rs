//! # Field Slot Store - Positional, Repetition-Aware Field Storage
//!
//! ## Purpose
//!
//! Owns the field descriptors of one segment instance together with the
//! values present in each slot, and mediates every positional access. Every
//! segment type is a thin configuration of this store: the only thing that
//! differs between segment types is the layout registered into it.
//!
//! ## Lifecycle
//!
//! ```text
//! Constructing --seal()--> Populated
//!  register() allowed        get/get_all/count/append allowed
//!  access -> NotPopulated    register() -> LayoutError::Sealed
//! ```
//!
//! The transition is one-way. There is no closed state; the store lives until
//! its owning segment is dropped.
//!
//! ## Materialization
//!
//! Inbound repetitions are stored as raw text and turned into typed values on
//! first read, through the datatype instantiator. The result is cached in a
//! `OnceCell` per repetition, so concurrent readers of a shared segment
//! construct each value at most once and never observe a torn value.
//! Construction failures are returned as `StoreError::DatatypeConstruction`
//! and leave the repetition unmaterialized.
//!
//! ## Invariants
//!
//! - Slot numbers are contiguous from 1, registered in ascending order
//! - `values.len() <= max_repetitions` unless the slot is unbounded
//! - Repetitions are only appended, at index `values.len()`; no gaps, no
//!   update in place, no removal

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{debug, trace};
use types::{DatatypeId, FieldDescriptor};

use crate::error::{LayoutError, StoreError, StoreResult};
use crate::instantiator::{ConstructionArgs, DatatypeInstantiator, MessageContext};
use crate::value::FieldValue;

/// Lifecycle phase of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Descriptors are being registered; field access is forbidden
    Constructing,
    /// Layout is complete; access and appends are allowed
    Populated,
}

/// One repetition: raw inbound text, the materialized value, or both
#[derive(Debug)]
struct Repetition {
    raw: Option<String>,
    value: OnceCell<Box<dyn FieldValue>>,
}

impl Repetition {
    fn raw(text: String) -> Self {
        Self {
            raw: Some(text),
            value: OnceCell::new(),
        }
    }

    fn constructed(value: Box<dyn FieldValue>) -> Self {
        Self {
            raw: None,
            value: OnceCell::with_value(value),
        }
    }
}

/// A registered field slot and the repetitions present in it
#[derive(Debug)]
pub struct FieldSlot {
    descriptor: FieldDescriptor,
    values: Vec<Repetition>,
}

impl FieldSlot {
    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    /// Number of repetitions present
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Positional field storage for one segment instance
#[derive(Debug)]
pub struct FieldSlotStore {
    segment: &'static str,
    slots: Vec<FieldSlot>,
    lifecycle: Lifecycle,
    context: Arc<MessageContext>,
    instantiator: Arc<dyn DatatypeInstantiator>,
}

impl FieldSlotStore {
    /// Create an empty store in the `Constructing` phase
    pub fn new(
        segment: &'static str,
        context: Arc<MessageContext>,
        instantiator: Arc<dyn DatatypeInstantiator>,
    ) -> Self {
        Self {
            segment,
            slots: Vec::new(),
            lifecycle: Lifecycle::Constructing,
            context,
            instantiator,
        }
    }

    /// Register the descriptor of the next slot
    ///
    /// `slot` must be exactly one past the highest registered slot, and the
    /// descriptor must declare the same slot number.
    pub fn register(
        &mut self,
        slot: usize,
        descriptor: FieldDescriptor,
    ) -> Result<(), LayoutError> {
        if self.lifecycle == Lifecycle::Populated {
            return Err(LayoutError::Sealed {
                segment: self.segment,
                slot,
            });
        }

        let expected = self.slots.len() + 1;
        if slot != expected {
            return Err(LayoutError::NonContiguous {
                segment: self.segment,
                slot,
                expected,
            });
        }
        if descriptor.slot != slot {
            return Err(LayoutError::SlotMismatch {
                segment: self.segment,
                slot,
                declared: descriptor.slot,
            });
        }

        self.slots.push(FieldSlot {
            descriptor,
            values: Vec::new(),
        });
        Ok(())
    }

    /// Leave the construction phase; later calls are no-ops
    pub fn seal(&mut self) {
        if self.lifecycle == Lifecycle::Constructing {
            trace!(segment = self.segment, slots = self.slots.len(), "field layout sealed");
            self.lifecycle = Lifecycle::Populated;
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn segment(&self) -> &'static str {
        self.segment
    }

    pub fn context(&self) -> &MessageContext {
        &self.context
    }

    /// Number of registered slots (N)
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Descriptor of a registered slot
    pub fn descriptor(&self, slot: usize) -> StoreResult<&FieldDescriptor> {
        Ok(&self.slot("descriptor", slot)?.descriptor)
    }

    /// Value at `repetition` of `slot`, materializing it on first access
    pub fn get_value(&self, slot: usize, repetition: usize) -> StoreResult<&dyn FieldValue> {
        let field = self.slot("get_value", slot)?;
        let entry = field.values.get(repetition).ok_or_else(|| {
            StoreError::repetition_out_of_range(
                self.segment,
                slot,
                field.descriptor.name,
                repetition,
                field.values.len(),
            )
        })?;
        self.materialize(field, entry, repetition)
    }

    /// Every present repetition of `slot`, in index order
    pub fn get_all_values(&self, slot: usize) -> StoreResult<Vec<&dyn FieldValue>> {
        let field = self.slot("get_all_values", slot)?;
        field
            .values
            .iter()
            .enumerate()
            .map(|(repetition, entry)| self.materialize(field, entry, repetition))
            .collect()
    }

    /// Number of present repetitions; never materializes
    pub fn repetition_count(&self, slot: usize) -> StoreResult<usize> {
        Ok(self.slot("repetition_count", slot)?.values.len())
    }

    /// Whether a present repetition has already been materialized
    pub fn is_materialized(&self, slot: usize, repetition: usize) -> StoreResult<bool> {
        let field = self.slot("is_materialized", slot)?;
        field
            .values
            .get(repetition)
            .map(|entry| entry.value.get().is_some())
            .ok_or_else(|| {
                StoreError::repetition_out_of_range(
                    self.segment,
                    slot,
                    field.descriptor.name,
                    repetition,
                    field.values.len(),
                )
            })
    }

    /// Append raw inbound text as the next repetition; returns its index
    ///
    /// The text is forwarded to the instantiator verbatim on first read.
    pub fn append_raw(&mut self, slot: usize, raw: impl Into<String>) -> StoreResult<usize> {
        let field = self.slot_for_append(slot)?;
        field.values.push(Repetition::raw(raw.into()));
        Ok(field.values.len() - 1)
    }

    /// Append an already constructed value as the next repetition
    ///
    /// The value's datatype must match the slot's declared datatype unless
    /// the slot is declared `VARIES`.
    pub fn append_value(&mut self, slot: usize, value: Box<dyn FieldValue>) -> StoreResult<usize> {
        let segment = self.segment;
        let field = self.slot_for_append(slot)?;
        let declared = field.descriptor.datatype;
        if declared != DatatypeId::Varies && value.datatype() != declared {
            return Err(StoreError::datatype_mismatch(
                segment,
                slot,
                field.descriptor.name,
                declared,
                value.datatype().name(),
            ));
        }
        field.values.push(Repetition::constructed(value));
        Ok(field.values.len() - 1)
    }

    /// Materialize every raw repetition; returns how many were constructed
    pub fn materialize_all(&self) -> StoreResult<usize> {
        self.ensure_populated("materialize_all")?;
        let mut constructed = 0;
        for field in &self.slots {
            for (repetition, entry) in field.values.iter().enumerate() {
                if entry.value.get().is_none() {
                    self.materialize(field, entry, repetition)?;
                    constructed += 1;
                }
            }
        }
        Ok(constructed)
    }

    /// Slots holding at least one value, in ascending slot order
    pub fn populated_slots(&self) -> impl Iterator<Item = &FieldSlot> + '_ {
        self.slots.iter().filter(|field| !field.is_empty())
    }

    /// All registered slots, in ascending slot order
    pub fn slots(&self) -> &[FieldSlot] {
        &self.slots
    }

    fn ensure_populated(&self, operation: &'static str) -> StoreResult<()> {
        match self.lifecycle {
            Lifecycle::Populated => Ok(()),
            Lifecycle::Constructing => Err(StoreError::NotPopulated {
                segment: self.segment,
                operation,
            }),
        }
    }

    fn slot(&self, operation: &'static str, slot: usize) -> StoreResult<&FieldSlot> {
        self.ensure_populated(operation)?;
        slot.checked_sub(1)
            .and_then(|index| self.slots.get(index))
            .ok_or_else(|| StoreError::unknown_slot(self.segment, slot, self.slots.len()))
    }

    fn slot_for_append(&mut self, slot: usize) -> StoreResult<&mut FieldSlot> {
        self.ensure_populated("append")?;
        let segment = self.segment;
        let slot_count = self.slots.len();
        let field = slot
            .checked_sub(1)
            .and_then(|index| self.slots.get_mut(index))
            .ok_or_else(|| StoreError::unknown_slot(segment, slot, slot_count))?;

        if !field.descriptor.allows_another(field.values.len()) {
            return Err(StoreError::repetition_limit_exceeded(
                segment,
                slot,
                field.descriptor.name,
                field.descriptor.max_repetitions,
            ));
        }
        Ok(field)
    }

    fn materialize<'a>(
        &'a self,
        field: &'a FieldSlot,
        entry: &'a Repetition,
        repetition: usize,
    ) -> StoreResult<&'a dyn FieldValue> {
        let descriptor = &field.descriptor;
        entry
            .value
            .get_or_try_init(|| {
                debug!(
                    segment = self.segment,
                    slot = descriptor.slot,
                    repetition,
                    datatype = %descriptor.datatype,
                    "materializing field value"
                );
                let args = ConstructionArgs {
                    context: &self.context,
                    segment: self.segment,
                    descriptor,
                    repetition,
                };
                let raw = entry.raw.as_deref().unwrap_or_default();
                self.instantiator.construct(descriptor.datatype, &args, raw)
            })
            .map(|value| value.as_ref())
            .map_err(|source| {
                StoreError::datatype_construction(
                    self.segment,
                    descriptor.slot,
                    descriptor.name,
                    repetition,
                    source,
                )
            })
    }
}
