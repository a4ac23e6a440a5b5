//! MSA - message acknowledgment

use types::TableId;

use crate::define_segment;

define_segment! {
    /// Message acknowledgment segment
    MsaSegment, MSA_LAYOUT = "MSA", "Message Acknowledgment" {
        1 => acknowledgment_code: Id(2, "Acknowledgment Code").required().table(TableId(8));
        2 => message_control_id: St(20, "Message Control ID").required();
        3 => text_message: St(80, "Text Message");
        4 => expected_sequence_number: Nm(15, "Expected Sequence Number");
        5 => delayed_acknowledgment_type: Id(1, "Delayed Acknowledgment Type").table(TableId(102));
        6 => error_condition: Ce(250, "Error Condition").table(TableId(357));
    }
}
