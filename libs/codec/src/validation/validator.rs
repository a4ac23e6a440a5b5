//! # Segment Validator
//!
//! Checks a populated segment against its layout: required slots present,
//! rendered values within the declared maximum length, table bindings carried
//! by table-bound values. Required-slot population is checked here rather than
//! on every mutation, since segments are legitimately under-populated while
//! they are being assembled.

use thiserror::Error;
use tracing::warn;
use types::TableId;

use super::policy::ValidationPolicy;
use crate::error::StoreError;
use crate::segment::Segment;

/// One problem found while validating a segment
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("Required field {segment}-{slot} ({name}) is not populated")]
    MissingRequired {
        segment: &'static str,
        slot: usize,
        name: &'static str,
    },

    #[error("Value of {segment}-{slot} ({name}) repetition {repetition} is {length} characters, maximum is {max}")]
    ValueTooLong {
        segment: &'static str,
        slot: usize,
        name: &'static str,
        repetition: usize,
        length: usize,
        max: usize,
    },

    #[error("Value of {segment}-{slot} ({name}) repetition {repetition} is not bound to table {table}")]
    MissingTableBinding {
        segment: &'static str,
        slot: usize,
        name: &'static str,
        repetition: usize,
        table: TableId,
    },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Issues found in one segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub segment: &'static str,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Fail with the first issue, if any
    pub fn into_result(self) -> Result<(), ValidationIssue> {
        match self.issues.into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        }
    }
}

/// Validates populated segments under a policy
#[derive(Debug, Clone, Default)]
pub struct SegmentValidator {
    policy: ValidationPolicy,
}

impl SegmentValidator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Collect every issue in the segment
    pub fn validate(&self, segment: &Segment) -> ValidationReport {
        let mut issues = Vec::new();

        if let Some(err) = segment.layout_error() {
            issues.push(ValidationIssue::Store(StoreError::from(err.clone())));
        }

        for field in segment.store().slots() {
            let descriptor = field.descriptor();

            if self.policy.enforce_required && descriptor.required && field.is_empty() {
                issues.push(ValidationIssue::MissingRequired {
                    segment: segment.id(),
                    slot: descriptor.slot,
                    name: descriptor.name,
                });
                continue;
            }

            if !self.policy.enforce_max_length && !self.policy.enforce_table_binding {
                continue;
            }

            let values = match segment.get_all_values(descriptor.slot) {
                Ok(values) => values,
                Err(err) => {
                    issues.push(ValidationIssue::Store(err));
                    continue;
                }
            };

            for (repetition, value) in values.into_iter().enumerate() {
                if self.policy.enforce_max_length && descriptor.max_length > 0 {
                    let length = value.encode().chars().count();
                    if length > descriptor.max_length {
                        issues.push(ValidationIssue::ValueTooLong {
                            segment: segment.id(),
                            slot: descriptor.slot,
                            name: descriptor.name,
                            repetition,
                            length,
                            max: descriptor.max_length,
                        });
                    }
                }

                if self.policy.enforce_table_binding {
                    if let Some(table) = descriptor.table {
                        if value.table() != Some(table) {
                            issues.push(ValidationIssue::MissingTableBinding {
                                segment: segment.id(),
                                slot: descriptor.slot,
                                name: descriptor.name,
                                repetition,
                                table,
                            });
                        }
                    }
                }
            }
        }

        for issue in &issues {
            warn!(segment = segment.id(), %issue, "segment validation issue");
        }

        ValidationReport {
            segment: segment.id(),
            issues,
        }
    }

    /// Validate, failing on the first issue when the policy is strict
    pub fn check(&self, segment: &Segment) -> Result<ValidationReport, ValidationIssue> {
        let report = self.validate(segment);
        if self.policy.strict {
            report.clone().into_result()?;
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instantiator::{MessageContext, StandardInstantiator};
    use crate::segments::MSA_LAYOUT;
    use crate::value::TextValue;
    use std::sync::Arc;
    use types::DatatypeId;

    fn msa() -> Segment {
        Segment::new(
            &MSA_LAYOUT,
            Arc::new(MessageContext::default()),
            Arc::new(StandardInstantiator),
        )
    }

    #[test]
    fn test_missing_required_fields() {
        let mut segment = msa();
        segment.append_raw(1, "AA").unwrap();

        let report = SegmentValidator::default().validate(&segment);
        assert_eq!(
            report.issues,
            vec![ValidationIssue::MissingRequired {
                segment: "MSA",
                slot: 2,
                name: "Message Control ID",
            }]
        );
        assert!(!report.is_valid());
    }

    #[test]
    fn test_max_length() {
        let mut segment = msa();
        segment.append_raw(1, "AAA").unwrap();
        segment.append_raw(2, "CTRL").unwrap();

        let report = SegmentValidator::default().validate(&segment);
        assert!(matches!(
            report.issues.as_slice(),
            [ValidationIssue::ValueTooLong {
                slot: 1,
                length: 3,
                max: 2,
                ..
            }]
        ));

        let relaxed = SegmentValidator::new(ValidationPolicy::structural()).validate(&segment);
        assert!(relaxed.is_valid());
    }

    #[test]
    fn test_table_binding() {
        let mut segment = msa();
        segment
            .append_value(1, Box::new(TextValue::new(DatatypeId::Id, "AA")))
            .unwrap();
        segment.append_raw(2, "CTRL").unwrap();

        let report = SegmentValidator::new(ValidationPolicy {
            enforce_table_binding: true,
            ..ValidationPolicy::default()
        })
        .validate(&segment);
        assert!(matches!(
            report.issues.as_slice(),
            [ValidationIssue::MissingTableBinding {
                slot: 1,
                table: TableId(8),
                ..
            }]
        ));
    }

    #[test]
    fn test_strict_policy_fails_fast() {
        let segment = msa();
        let validator = SegmentValidator::new(ValidationPolicy::strict());
        let err = validator.check(&segment).unwrap_err();
        assert!(matches!(err, ValidationIssue::MissingRequired { slot: 1, .. }));

        let lenient = SegmentValidator::default().check(&segment).unwrap();
        assert_eq!(lenient.issues.len(), 2);
    }

    #[test]
    fn test_construction_failure_is_reported() {
        let mut segment = msa();
        segment.append_raw(1, "AA").unwrap();
        segment.append_raw(2, "CTRL").unwrap();
        segment.append_raw(4, "not-a-number").unwrap();

        let report = SegmentValidator::default().validate(&segment);
        assert!(matches!(
            report.issues.as_slice(),
            [ValidationIssue::Store(StoreError::DatatypeConstruction { slot: 4, .. })]
        ));
    }
}
