//! PID - patient identification

use types::TableId;

use crate::define_segment;

define_segment! {
    /// Patient identification segment
    PidSegment, PID_LAYOUT = "PID", "Patient Identification" {
        1 => set_id: Si(4, "Set ID - PID");
        2 => patient_id: Cx(20, "Patient ID");
        3 => patient_identifier_list: Cx(250, "Patient Identifier List").required().unbounded();
        4 => alternate_patient_id: Cx(20, "Alternate Patient ID - PID").unbounded();
        5 => patient_name: Xpn(250, "Patient Name").required().unbounded();
        6 => mothers_maiden_name: Xpn(250, "Mother's Maiden Name").unbounded();
        7 => date_time_of_birth: Ts(26, "Date/Time of Birth");
        8 => administrative_sex: Is(1, "Administrative Sex").table(TableId(1));
        9 => patient_alias: Xpn(250, "Patient Alias").unbounded();
        10 => race: Ce(250, "Race").unbounded().table(TableId(5));
        11 => patient_address: Xad(250, "Patient Address").unbounded();
        12 => county_code: Is(4, "County Code").table(TableId(289));
        13 => phone_number_home: Xtn(250, "Phone Number - Home").unbounded();
        14 => phone_number_business: Xtn(250, "Phone Number - Business").unbounded();
        15 => primary_language: Ce(250, "Primary Language").table(TableId(296));
        16 => marital_status: Ce(250, "Marital Status").table(TableId(2));
        17 => religion: Ce(250, "Religion").table(TableId(6));
        18 => patient_account_number: Cx(250, "Patient Account Number");
        19 => ssn_number: St(16, "SSN Number - Patient");
        20 => drivers_license_number: Dln(25, "Driver's License Number - Patient");
        21 => mothers_identifier: Cx(250, "Mother's Identifier").unbounded();
        22 => ethnic_group: Ce(250, "Ethnic Group").unbounded().table(TableId(189));
        23 => birth_place: St(250, "Birth Place");
        24 => multiple_birth_indicator: Id(1, "Multiple Birth Indicator").table(TableId(136));
        25 => birth_order: Nm(2, "Birth Order");
        26 => citizenship: Ce(250, "Citizenship").unbounded().table(TableId(171));
        27 => veterans_military_status: Ce(250, "Veterans Military Status").table(TableId(172));
        28 => nationality: Ce(250, "Nationality").table(TableId(212));
        29 => patient_death_date_and_time: Ts(26, "Patient Death Date and Time");
        30 => patient_death_indicator: Id(1, "Patient Death Indicator").table(TableId(136));
        31 => identity_unknown_indicator: Id(1, "Identity Unknown Indicator").table(TableId(136));
        32 => identity_reliability_code: Is(20, "Identity Reliability Code").unbounded().table(TableId(445));
        33 => last_update_date_time: Ts(26, "Last Update Date/Time");
        34 => last_update_facility: Hd(241, "Last Update Facility");
        35 => species_code: Ce(250, "Species Code").table(TableId(446));
        36 => breed_code: Ce(250, "Breed Code").table(TableId(447));
        37 => strain: St(80, "Strain");
        38 => production_class_code: Ce(250, "Production Class Code").repeating(2).table(TableId(429));
        39 => tribal_citizenship: Cwe(250, "Tribal Citizenship").unbounded().table(TableId(171));
    }
}
