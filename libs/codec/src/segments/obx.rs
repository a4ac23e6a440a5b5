//! OBX - observation/result

use types::TableId;

use crate::define_segment;

define_segment! {
    /// Observation/result segment
    ObxSegment, OBX_LAYOUT = "OBX", "Observation/Result" {
        1 => set_id: Si(4, "Set ID - OBX");
        2 => value_type: Id(2, "Value Type").table(TableId(125));
        3 => observation_identifier: Ce(250, "Observation Identifier").required();
        4 => observation_sub_id: St(20, "Observation Sub-ID");
        5 => observation_value: Varies(99999, "Observation Value").unbounded();
        6 => units: Ce(250, "Units");
        7 => references_range: St(60, "References Range");
        8 => abnormal_flags: Is(5, "Abnormal Flags").unbounded().table(TableId(78));
        9 => probability: Nm(5, "Probability");
        10 => nature_of_abnormal_test: Id(2, "Nature of Abnormal Test").unbounded().table(TableId(80));
        11 => observation_result_status: Id(1, "Observation Result Status").required().table(TableId(85));
        12 => effective_date_of_reference_range: Ts(26, "Effective Date of Reference Range");
        13 => user_defined_access_checks: St(20, "User Defined Access Checks");
        14 => date_time_of_the_observation: Ts(26, "Date/Time of the Observation");
        15 => producers_id: Ce(250, "Producer's ID");
        16 => responsible_observer: Xcn(250, "Responsible Observer").unbounded();
        17 => observation_method: Ce(250, "Observation Method").unbounded();
        18 => equipment_instance_identifier: Ei(22, "Equipment Instance Identifier").unbounded();
        19 => date_time_of_the_analysis: Ts(26, "Date/Time of the Analysis");
    }
}
