//! Opaque field values
//!
//! The store never looks inside a value. It only needs the datatype tag, a
//! way to render the value back to text for the encoder, and a way for typed
//! accessors to downcast to the concrete type.

use std::any::Any;
use std::fmt;

use types::{DatatypeId, TableId};

/// A typed value occupying one repetition of a field slot
pub trait FieldValue: Any + fmt::Debug + Send + Sync + 'static {
    /// Datatype this value was constructed as
    fn datatype(&self) -> DatatypeId;

    /// Serialized form handed to the encoder
    fn encode(&self) -> String;

    /// Coded-value table the value is bound to, if any
    fn table(&self) -> Option<TableId> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

impl dyn FieldValue {
    pub fn downcast_ref<T: FieldValue>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn is<T: FieldValue>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// Text-backed value produced by the standard instantiator
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextValue {
    datatype: DatatypeId,
    table: Option<TableId>,
    text: String,
}

impl TextValue {
    pub fn new(datatype: DatatypeId, text: impl Into<String>) -> Self {
        Self {
            datatype,
            table: None,
            text: text.into(),
        }
    }

    pub fn with_table(mut self, table: Option<TableId>) -> Self {
        self.table = table;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl FieldValue for TextValue {
    fn datatype(&self) -> DatatypeId {
        self.datatype
    }

    fn encode(&self) -> String {
        self.text.clone()
    }

    fn table(&self) -> Option<TableId> {
        self.table
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for TextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
