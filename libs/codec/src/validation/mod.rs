//! # Segment Validation
//!
//! ## Purpose
//!
//! Validation of populated segments against their layout tables, separate
//! from the store's per-operation checks.
//!
//! ## Architecture
//!
//! ```text
//! Populated Segment → SegmentValidator → ValidationReport
//!                          ↓
//!                   ValidationPolicy (from ValidationSettings)
//! ```
//!
//! The store enforces slot range, repetition caps and datatype construction on
//! every operation. The validator covers what only makes sense once a segment
//! is complete: required slots, maximum lengths and table bindings.

pub mod policy;
pub mod validator;

pub use policy::ValidationPolicy;
pub use validator::{SegmentValidator, ValidationIssue, ValidationReport};
