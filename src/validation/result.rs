//! Result of a single field validation

/// Outcome of validating one field value.
///
/// Validation failures are expected and returned as data, never as errors.
/// On success `sanitized_value` holds the normalized form (trimmed,
/// case-folded, separator-normalized); the raw input is never echoed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the value passed validation
    pub valid: bool,
    /// Field-specific message when invalid
    pub error: Option<String>,
    /// Normalized value when valid
    pub sanitized_value: Option<String>,
}

impl ValidationResult {
    /// Create a passing result carrying the normalized value
    pub fn pass(sanitized: impl Into<String>) -> Self {
        Self {
            valid: true,
            error: None,
            sanitized_value: Some(sanitized.into()),
        }
    }

    /// Create a failing result with a field-specific message
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
            sanitized_value: None,
        }
    }
}
