//! # Datatype Identifiers - Closed Field Datatype Set
//!
//! ## Purpose
//!
//! Every field slot declares the datatype of the values it holds. The set of
//! datatypes is closed: instantiators dispatch with an exhaustive `match`, so
//! adding a datatype is a compile-time change to every instantiator rather
//! than a runtime lookup that can silently miss.
//!
//! ## Organization
//!
//! - **Primitive (1-19)**: single-component values (strings, numbers, dates)
//! - **Composite (20-59)**: multi-component values (coded elements, names,
//!   addresses, identifiers)
//! - **Variable (60)**: `VARIES`, the type is decided by a sibling field

use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;
use std::str::FromStr;

use crate::errors::UnknownDatatype;

/// Datatype identifier of a field slot
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DatatypeId {
    // Primitive datatypes (1-19)
    St = 1,
    Id = 2,
    Is = 3,
    Nm = 4,
    Si = 5,
    Tx = 6,
    Ft = 7,
    Dt = 8,
    Dtm = 9,
    Tm = 10,
    Ts = 11,

    // Composite datatypes (20-59)
    Ce = 20,
    Cwe = 21,
    Cne = 22,
    Cx = 23,
    Cq = 24,
    Ei = 25,
    Hd = 26,
    Pl = 27,
    Xad = 28,
    Xcn = 29,
    Xon = 30,
    Xpn = 31,
    Xtn = 32,
    Msg = 33,
    Pt = 34,
    Vid = 35,
    Eld = 36,
    Erl = 37,
    Dld = 38,
    Dln = 39,

    // Variable datatype
    Varies = 60,
}

impl DatatypeId {
    /// Wire name of the datatype, as it appears in layout tables
    pub fn name(&self) -> &'static str {
        match self {
            DatatypeId::St => "ST",
            DatatypeId::Id => "ID",
            DatatypeId::Is => "IS",
            DatatypeId::Nm => "NM",
            DatatypeId::Si => "SI",
            DatatypeId::Tx => "TX",
            DatatypeId::Ft => "FT",
            DatatypeId::Dt => "DT",
            DatatypeId::Dtm => "DTM",
            DatatypeId::Tm => "TM",
            DatatypeId::Ts => "TS",
            DatatypeId::Ce => "CE",
            DatatypeId::Cwe => "CWE",
            DatatypeId::Cne => "CNE",
            DatatypeId::Cx => "CX",
            DatatypeId::Cq => "CQ",
            DatatypeId::Ei => "EI",
            DatatypeId::Hd => "HD",
            DatatypeId::Pl => "PL",
            DatatypeId::Xad => "XAD",
            DatatypeId::Xcn => "XCN",
            DatatypeId::Xon => "XON",
            DatatypeId::Xpn => "XPN",
            DatatypeId::Xtn => "XTN",
            DatatypeId::Msg => "MSG",
            DatatypeId::Pt => "PT",
            DatatypeId::Vid => "VID",
            DatatypeId::Eld => "ELD",
            DatatypeId::Erl => "ERL",
            DatatypeId::Dld => "DLD",
            DatatypeId::Dln => "DLN",
            DatatypeId::Varies => "VARIES",
        }
    }

    /// Human-readable description for documentation tables
    pub fn description(&self) -> &'static str {
        match self {
            DatatypeId::St => "String data",
            DatatypeId::Id => "Coded value for HL7-defined tables",
            DatatypeId::Is => "Coded value for user-defined tables",
            DatatypeId::Nm => "Numeric",
            DatatypeId::Si => "Sequence ID",
            DatatypeId::Tx => "Text data",
            DatatypeId::Ft => "Formatted text data",
            DatatypeId::Dt => "Date",
            DatatypeId::Dtm => "Date/time",
            DatatypeId::Tm => "Time",
            DatatypeId::Ts => "Time stamp",
            DatatypeId::Ce => "Coded element",
            DatatypeId::Cwe => "Coded with exceptions",
            DatatypeId::Cne => "Coded with no exceptions",
            DatatypeId::Cx => "Extended composite ID with check digit",
            DatatypeId::Cq => "Composite quantity with units",
            DatatypeId::Ei => "Entity identifier",
            DatatypeId::Hd => "Hierarchic designator",
            DatatypeId::Pl => "Person location",
            DatatypeId::Xad => "Extended address",
            DatatypeId::Xcn => "Extended composite ID number and name for persons",
            DatatypeId::Xon => "Extended composite name and ID for organizations",
            DatatypeId::Xpn => "Extended person name",
            DatatypeId::Xtn => "Extended telecommunication number",
            DatatypeId::Msg => "Message type",
            DatatypeId::Pt => "Processing type",
            DatatypeId::Vid => "Version identifier",
            DatatypeId::Eld => "Error location and description",
            DatatypeId::Erl => "Error location",
            DatatypeId::Dld => "Discharge to location and date",
            DatatypeId::Dln => "Driver's license number",
            DatatypeId::Varies => "Variable datatype",
        }
    }

    /// Single-component datatypes
    pub fn is_primitive(&self) -> bool {
        (*self as u8) < 20
    }

    /// Datatypes whose text must parse as a number
    pub fn is_numeric(&self) -> bool {
        matches!(self, DatatypeId::Nm | DatatypeId::Si)
    }

    /// Datatypes carrying a date, time or timestamp
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            DatatypeId::Dt | DatatypeId::Dtm | DatatypeId::Tm | DatatypeId::Ts
        )
    }

    /// All datatypes, in identifier order
    pub fn all() -> Vec<DatatypeId> {
        (0..=u8::MAX)
            .filter_map(|n| DatatypeId::try_from(n).ok())
            .collect()
    }
}

impl fmt::Display for DatatypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatatypeId {
    type Err = UnknownDatatype;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatatypeId::all()
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDatatype {
                name: s.to_string(),
            })
    }
}
