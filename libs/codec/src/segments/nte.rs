//! NTE - notes and comments

use types::TableId;

use crate::define_segment;

define_segment! {
    /// Notes and comments segment
    NteSegment, NTE_LAYOUT = "NTE", "Notes and Comments" {
        1 => set_id: Si(4, "Set ID - NTE");
        2 => source_of_comment: Id(8, "Source of Comment").table(TableId(105));
        3 => comment: Ft(65536, "Comment").unbounded();
        4 => comment_type: Ce(250, "Comment Type").table(TableId(364));
    }
}
