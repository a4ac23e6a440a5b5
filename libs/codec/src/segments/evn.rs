//! EVN - event type

use types::TableId;

use crate::define_segment;

define_segment! {
    /// Event type segment
    EvnSegment, EVN_LAYOUT = "EVN", "Event Type" {
        1 => event_type_code: Id(3, "Event Type Code").table(TableId(3));
        2 => recorded_date_time: Ts(26, "Recorded Date/Time").required();
        3 => date_time_planned_event: Ts(26, "Date/Time Planned Event");
        4 => event_reason_code: Is(3, "Event Reason Code").table(TableId(62));
        5 => operator_id: Xcn(250, "Operator ID").unbounded().table(TableId(188));
        6 => event_occurred: Ts(26, "Event Occurred");
        7 => event_facility: Hd(241, "Event Facility");
    }
}
