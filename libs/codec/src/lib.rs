//! # HL7 Field Store Codec
//!
//! ## Purpose
//!
//! Positional, repetition-aware storage of HL7 v2 segment fields and the
//! segment abstraction built on top of it:
//! - Field slot store with lazy, cached datatype materialization
//! - Segment base type driven by static layout tables
//! - Pluggable datatype instantiation
//! - Generated segment types and a layout registry
//! - Populated-segment validation
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] ← external tokenizer / encoder
//!     ↑           ↓
//! Layout      Field storage
//! Tables      Segments, Validation
//! ```
//!
//! ## What This Crate Contains
//! - **FieldSlotStore**: slot/repetition storage, raw text or typed values
//! - **Segment**: layout-driven construction, typed access, population
//! - **DatatypeInstantiator**: raw text → typed value, with `StandardInstantiator`
//! - **SegmentBuilder**: fluent population with first-error reporting
//! - **SegmentRegistry**: MSA, EVN, NTE, OBX, PID and ERR layouts
//! - **SegmentValidator**: required, max-length and table binding checks
//! - **RawSegment / EncodedField**: boundary types for tokenizers and encoders
//!
//! ## What This Crate Does NOT Contain
//! - Message tokenizing or encoding (delimiters, escapes)
//! - Component/sub-component structure of composite datatypes
//! - Message-level grouping of segments
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use codec::segments::NteSegment;
//! use codec::{MessageContext, StandardInstantiator};
//!
//! let mut nte = NteSegment::new(
//!     Arc::new(MessageContext::default()),
//!     Arc::new(StandardInstantiator),
//! );
//! nte.append_raw(3, "first line").unwrap();
//! nte.append_raw(3, "second line").unwrap();
//!
//! assert_eq!(nte.comment_count().unwrap(), 2);
//! assert_eq!(nte.comment(1).unwrap().encode(), "second line");
//! ```

// Core modules
pub mod builder;
pub mod error;
pub mod instantiator;
pub mod macros;
pub mod segment;
pub mod segments;
pub mod store;
pub mod validation;
pub mod value;
pub mod wire;

// Layout metadata, re-exported for generated segment types
pub use types;

#[doc(hidden)]
pub use paste;

// Re-export key types for convenience
pub use builder::SegmentBuilder;
pub use error::{ConstructionError, LayoutError, SegmentResult, StoreError, StoreResult};
pub use instantiator::{
    ConstructionArgs, DatatypeInstantiator, MessageContext, StandardInstantiator,
};
pub use segment::Segment;
pub use segments::SegmentRegistry;
pub use store::{FieldSlot, FieldSlotStore, Lifecycle};
pub use validation::{SegmentValidator, ValidationIssue, ValidationPolicy, ValidationReport};
pub use value::{FieldValue, TextValue};
pub use wire::{EncodedField, RawSegment};
