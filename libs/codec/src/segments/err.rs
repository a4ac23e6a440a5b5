//! ERR - error

use types::TableId;

use crate::define_segment;

define_segment! {
    /// Error segment
    ErrSegment, ERR_LAYOUT = "ERR", "Error" {
        1 => error_code_and_location: Eld(493, "Error Code and Location").unbounded();
        2 => error_location: Erl(18, "Error Location").unbounded();
        3 => hl7_error_code: Cwe(705, "HL7 Error Code").required().table(TableId(357));
        4 => severity: Id(2, "Severity").required().table(TableId(516));
        5 => application_error_code: Cwe(705, "Application Error Code").table(TableId(533));
        6 => application_error_parameter: St(80, "Application Error Parameter").repeating(10);
        7 => diagnostic_information: Tx(2048, "Diagnostic Information");
        8 => user_message: Tx(250, "User Message");
        9 => inform_person_indicator: Is(20, "Inform Person Indicator").unbounded().table(TableId(517));
        10 => override_type: Cwe(705, "Override Type").table(TableId(518));
        11 => override_reason_code: Cwe(705, "Override Reason Code").unbounded().table(TableId(519));
        12 => help_desk_contact_point: Xtn(652, "Help Desk Contact Point").unbounded();
    }
}
