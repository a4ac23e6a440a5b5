//! # Datatype Instantiation
//!
//! ## Purpose
//!
//! The store turns raw field text into typed values through a
//! `DatatypeInstantiator`. It hands over the datatype identifier, the
//! construction arguments (owning message context, slot descriptor and table
//! binding) and the raw repetition text, verbatim as the tokenizer produced it.
//!
//! Implementations must be deterministic and must report failures instead of
//! substituting a default: the store surfaces them unchanged as
//! `StoreError::DatatypeConstruction`.
//!
//! `StandardInstantiator` covers every `DatatypeId` with a text-backed value
//! and a lexical check for numeric and temporal datatypes.

use std::fmt;

use types::{DatatypeId, FieldDescriptor, TableId};

use crate::error::ConstructionError;
use crate::value::{FieldValue, TextValue};

/// Message-level context shared by every segment of one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    /// Version identifier of the message (MSH-12)
    pub version: String,
    /// Message type (MSH-9), when known
    pub message_type: Option<String>,
    /// Message control id (MSH-10), when known
    pub control_id: Option<String>,
    /// Component separator in effect for this message
    pub component_separator: char,
}

impl MessageContext {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            message_type: None,
            control_id: None,
            component_separator: '^',
        }
    }

    pub fn with_message_type(mut self, message_type: impl Into<String>) -> Self {
        self.message_type = Some(message_type.into());
        self
    }

    pub fn with_control_id(mut self, control_id: impl Into<String>) -> Self {
        self.control_id = Some(control_id.into());
        self
    }

    pub fn with_component_separator(mut self, separator: char) -> Self {
        self.component_separator = separator;
        self
    }
}

impl Default for MessageContext {
    fn default() -> Self {
        Self::new("2.5")
    }
}

/// Arguments passed alongside the raw text of one repetition
#[derive(Debug, Clone, Copy)]
pub struct ConstructionArgs<'a> {
    pub context: &'a MessageContext,
    pub segment: &'static str,
    pub descriptor: &'a FieldDescriptor,
    pub repetition: usize,
}

impl ConstructionArgs<'_> {
    /// Table number for table-bound fields
    pub fn table(&self) -> Option<TableId> {
        self.descriptor.table
    }
}

/// Capability that turns raw field text into typed values
pub trait DatatypeInstantiator: Send + Sync {
    fn construct(
        &self,
        datatype: DatatypeId,
        args: &ConstructionArgs<'_>,
        raw: &str,
    ) -> Result<Box<dyn FieldValue>, ConstructionError>;
}

impl fmt::Debug for dyn DatatypeInstantiator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DatatypeInstantiator")
    }
}

/// Text-backed instantiator for the complete datatype set
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardInstantiator;

impl DatatypeInstantiator for StandardInstantiator {
    fn construct(
        &self,
        datatype: DatatypeId,
        args: &ConstructionArgs<'_>,
        raw: &str,
    ) -> Result<Box<dyn FieldValue>, ConstructionError> {
        if !raw.is_empty() {
            check_lexical_form(datatype, raw, args.context.component_separator)?;
        }
        Ok(Box::new(
            TextValue::new(datatype, raw).with_table(args.table()),
        ))
    }
}

fn check_lexical_form(
    datatype: DatatypeId,
    raw: &str,
    component_separator: char,
) -> Result<(), ConstructionError> {
    let fail = |reason: &str| ConstructionError::new(datatype, raw, reason);

    match datatype {
        DatatypeId::Nm => {
            let numeric = raw
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-'));
            if !numeric || raw.parse::<f64>().is_err() {
                return Err(fail("not a decimal number"));
            }
        }
        DatatypeId::Si => {
            if raw.parse::<u32>().is_err() {
                return Err(fail("not a non-negative sequence number"));
            }
        }
        DatatypeId::Dt => {
            if !all_digits(raw) || !matches!(raw.len(), 4 | 6 | 8) {
                return Err(fail("date must be YYYY[MM[DD]]"));
            }
        }
        DatatypeId::Tm => {
            if !is_time(raw) {
                return Err(fail("time must be HH[MM[SS[.S[S[S[S]]]]]][+/-ZZZZ]"));
            }
        }
        DatatypeId::Dtm => {
            if !is_date_time(raw) {
                return Err(fail(
                    "date/time must be YYYY[MM[DD[HH[MM[SS[.S[S[S[S]]]]]]]]][+/-ZZZZ]",
                ));
            }
        }
        DatatypeId::Ts => {
            // First component carries the instant, the second the precision
            let instant = raw.split(component_separator).next().unwrap_or_default();
            if !instant.is_empty() && !is_date_time(instant) {
                return Err(fail("time stamp must start with a date/time"));
            }
        }
        DatatypeId::St
        | DatatypeId::Id
        | DatatypeId::Is
        | DatatypeId::Tx
        | DatatypeId::Ft
        | DatatypeId::Ce
        | DatatypeId::Cwe
        | DatatypeId::Cne
        | DatatypeId::Cx
        | DatatypeId::Cq
        | DatatypeId::Ei
        | DatatypeId::Hd
        | DatatypeId::Pl
        | DatatypeId::Xad
        | DatatypeId::Xcn
        | DatatypeId::Xon
        | DatatypeId::Xpn
        | DatatypeId::Xtn
        | DatatypeId::Msg
        | DatatypeId::Pt
        | DatatypeId::Vid
        | DatatypeId::Eld
        | DatatypeId::Erl
        | DatatypeId::Dld
        | DatatypeId::Dln
        | DatatypeId::Varies => {}
    }
    Ok(())
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Split a trailing +ZZZZ/-ZZZZ offset, rejecting malformed offsets
fn split_offset(s: &str) -> Option<(&str, Option<&str>)> {
    match s.find(['+', '-']) {
        Some(pos) => {
            let offset = &s[pos + 1..];
            (offset.len() == 4 && all_digits(offset)).then_some((&s[..pos], Some(offset)))
        }
        None => Some((s, None)),
    }
}

/// Digits with an optional 1-4 digit fraction after the seconds
fn split_fraction(s: &str) -> Option<(&str, Option<&str>)> {
    match s.split_once('.') {
        Some((whole, fraction)) => {
            (fraction.len() <= 4 && all_digits(fraction)).then_some((whole, Some(fraction)))
        }
        None => Some((s, None)),
    }
}

fn is_time(s: &str) -> bool {
    let Some((body, _)) = split_offset(s) else {
        return false;
    };
    let Some((whole, fraction)) = split_fraction(body) else {
        return false;
    };
    all_digits(whole)
        && matches!(whole.len(), 2 | 4 | 6)
        && (fraction.is_none() || whole.len() == 6)
}

fn is_date_time(s: &str) -> bool {
    let Some((body, _)) = split_offset(s) else {
        return false;
    };
    let Some((whole, fraction)) = split_fraction(body) else {
        return false;
    };
    all_digits(whole)
        && matches!(whole.len(), 4 | 6 | 8 | 10 | 12 | 14)
        && (fraction.is_none() || whole.len() == 14)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn construct(
        datatype: DatatypeId,
        raw: &str,
    ) -> Result<Box<dyn FieldValue>, ConstructionError> {
        let context = MessageContext::default();
        let descriptor = FieldDescriptor::new(1, datatype, 0, "Test").table(TableId(1));
        let args = ConstructionArgs {
            context: &context,
            segment: "ZTS",
            descriptor: &descriptor,
            repetition: 0,
        };
        StandardInstantiator.construct(datatype, &args, raw)
    }

    #[test]
    fn test_text_passes_through_verbatim() {
        let value = construct(DatatypeId::Xpn, "DOE^JOHN^Q").unwrap();
        assert_eq!(value.datatype(), DatatypeId::Xpn);
        assert_eq!(value.encode(), "DOE^JOHN^Q");
        assert_eq!(value.table(), Some(TableId(1)));
    }

    #[test]
    fn test_numeric_forms() {
        assert!(construct(DatatypeId::Nm, "-12.5").is_ok());
        assert!(construct(DatatypeId::Nm, "12a").is_err());
        assert!(construct(DatatypeId::Nm, "inf").is_err());
        assert!(construct(DatatypeId::Si, "3").is_ok());
        assert!(construct(DatatypeId::Si, "-3").is_err());
    }

    #[test]
    fn test_temporal_forms() {
        assert!(construct(DatatypeId::Dt, "20240131").is_ok());
        assert!(construct(DatatypeId::Dt, "2024013").is_err());
        assert!(construct(DatatypeId::Tm, "1230").is_ok());
        assert!(construct(DatatypeId::Tm, "123045.12+0100").is_ok());
        assert!(construct(DatatypeId::Tm, "1230.5").is_err());
        assert!(construct(DatatypeId::Dtm, "20240131123045.1234-0500").is_ok());
        assert!(construct(DatatypeId::Dtm, "2024013112").is_ok());
        assert!(construct(DatatypeId::Dtm, "20240131+05").is_err());
        assert!(construct(DatatypeId::Ts, "20240131^M").is_ok());
        assert!(construct(DatatypeId::Ts, "yesterday").is_err());
    }

    #[test]
    fn test_empty_text_is_an_empty_repetition() {
        for datatype in DatatypeId::all() {
            let value = construct(datatype, "").unwrap();
            assert_eq!(value.encode(), "");
        }
    }

    #[test]
    fn test_failure_keeps_cause() {
        let err = construct(DatatypeId::Dt, "tomorrow").unwrap_err();
        assert_eq!(err.datatype, DatatypeId::Dt);
        assert_eq!(err.text, "tomorrow");
        assert!(err.to_string().contains("YYYY[MM[DD]]"));
    }
}
