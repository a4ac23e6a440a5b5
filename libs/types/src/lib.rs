//! # HL7 Field Store Types
//!
//! Pure metadata for the positional field store: the closed datatype set,
//! field descriptors and static segment layout tables.
//!
//! ## Design Philosophy
//!
//! - **Static Layouts**: layout tables are `static` data built with `const fn`
//!   descriptors; no allocation to describe a segment type
//! - **Closed Datatypes**: `DatatypeId` is an enum matched exhaustively by
//!   every instantiator
//! - **Clear Boundaries**: no storage or validation logic lives here; the
//!   codec crate owns all runtime behavior
//!
//! ## Quick Start
//!
//! ```rust
//! use types::{DatatypeId, FieldDescriptor, SegmentLayout};
//!
//! static NTE: SegmentLayout = SegmentLayout::new(
//!     "NTE",
//!     "Notes and Comments",
//!     &[
//!         FieldDescriptor::new(1, DatatypeId::Si, 4, "Set ID - NTE"),
//!         FieldDescriptor::new(2, DatatypeId::Id, 8, "Source of Comment"),
//!         FieldDescriptor::new(3, DatatypeId::Ft, 65536, "Comment").unbounded(),
//!     ],
//! );
//!
//! assert!(NTE.check_contiguous().is_ok());
//! assert_eq!(NTE.field(3).unwrap().datatype, DatatypeId::Ft);
//! ```

pub mod datatype;
pub mod descriptor;
pub mod errors;
pub mod layout;

pub use datatype::DatatypeId;
pub use descriptor::{FieldDescriptor, TableId, UNBOUNDED};
pub use errors::{LayoutDefect, UnknownDatatype};
pub use layout::SegmentLayout;
