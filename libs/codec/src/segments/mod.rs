//! # Segment Definitions and Layout Registry
//!
//! Generated segment types (HL7 v2.5 field tables) and the registry that maps
//! segment identifiers to their layouts. Every type here is a layout table
//! plus typed accessors; all behavior lives in `Segment` and the field store.

mod err;
mod evn;
mod msa;
mod nte;
mod obx;
mod pid;

pub use err::{ErrSegment, ERR_LAYOUT};
pub use evn::{EvnSegment, EVN_LAYOUT};
pub use msa::{MsaSegment, MSA_LAYOUT};
pub use nte::{NteSegment, NTE_LAYOUT};
pub use obx::{ObxSegment, OBX_LAYOUT};
pub use pid::{PidSegment, PID_LAYOUT};

use std::sync::Arc;

use types::SegmentLayout;

use crate::instantiator::{DatatypeInstantiator, MessageContext};
use crate::segment::Segment;

static LAYOUTS: [&SegmentLayout; 6] = [
    &ERR_LAYOUT,
    &EVN_LAYOUT,
    &MSA_LAYOUT,
    &NTE_LAYOUT,
    &OBX_LAYOUT,
    &PID_LAYOUT,
];

/// Registry of the segment layouts known to this crate
pub struct SegmentRegistry;

impl SegmentRegistry {
    /// All registered layouts, ordered by segment id
    pub fn all() -> &'static [&'static SegmentLayout] {
        &LAYOUTS
    }

    pub fn layout(id: &str) -> Option<&'static SegmentLayout> {
        LAYOUTS.iter().copied().find(|layout| layout.id == id)
    }

    /// Construct an empty segment of the given type
    pub fn instantiate(
        id: &str,
        context: Arc<MessageContext>,
        instantiator: Arc<dyn DatatypeInstantiator>,
    ) -> Option<Segment> {
        Self::layout(id).map(|layout| Segment::new(layout, context, instantiator))
    }

    /// Markdown reference of every registered layout
    pub fn markdown_reference() -> String {
        let mut output = String::new();
        output.push_str("# Segment Field Reference\n\n");
        output.push_str(&format!("{} segment types registered.\n\n", LAYOUTS.len()));
        for layout in LAYOUTS {
            output.push_str(&layout.markdown_table());
        }
        output
    }
}
