//! # Validation Policy
//!
//! Which populated-segment checks run, and whether any issue fails the
//! segment outright.

use config::ValidationSettings;

/// Segment validation policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Required slots must hold at least one value
    pub enforce_required: bool,
    /// Rendered values must fit the declared maximum length
    pub enforce_max_length: bool,
    /// Values in table-bound slots must carry their table binding
    pub enforce_table_binding: bool,
    /// Fail on the first issue instead of returning a report
    pub strict: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            enforce_required: true,
            enforce_max_length: true,
            enforce_table_binding: false,
            strict: false,
        }
    }
}

impl ValidationPolicy {
    /// Only structural checks: required slots
    pub fn structural() -> Self {
        Self {
            enforce_required: true,
            enforce_max_length: false,
            enforce_table_binding: false,
            strict: false,
        }
    }

    /// Every check, failing on the first issue
    pub fn strict() -> Self {
        Self {
            enforce_required: true,
            enforce_max_length: true,
            enforce_table_binding: true,
            strict: true,
        }
    }
}

impl From<&ValidationSettings> for ValidationPolicy {
    fn from(settings: &ValidationSettings) -> Self {
        Self {
            enforce_required: settings.enforce_required,
            enforce_max_length: settings.enforce_max_length,
            enforce_table_binding: settings.enforce_table_binding,
            strict: settings.strict,
        }
    }
}
