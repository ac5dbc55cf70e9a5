//! Error handling for the distribution engine
//!
//! The engine itself never fails: malformed input is sanitized and structural
//! problems are reported as validation issues. These errors cover the
//! surrounding operations that can fail, namely policy construction and export.

use thiserror::Error;

/// Error type for MoOn Split operations outside the pure computation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplitError {
    /// Invalid engine configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String, setting: Option<String> },

    /// Export rendering failed
    #[error("Export error: {message}")]
    Export { message: String, format: Option<String> },

    /// An export was requested for a result that did not pass validation
    #[error("Distribution is not valid: {errors} blocking issue(s)")]
    InvalidDistribution { errors: usize },
}

impl SplitError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            SplitError::Configuration { .. } => "configuration",
            SplitError::Export { .. } => "export",
            SplitError::InvalidDistribution { .. } => "invalid_distribution",
        }
    }

    /// Create a configuration error for a named setting
    pub fn configuration(setting: &str, message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into(), setting: Some(setting.to_string()) }
    }

    /// Create an export error for a named format
    pub fn export(format: &str, message: impl Into<String>) -> Self {
        Self::Export { message: message.into(), format: Some(format.to_string()) }
    }
}

impl From<csv::Error> for SplitError {
    fn from(err: csv::Error) -> Self {
        Self::export("csv", err.to_string())
    }
}

/// Result type alias for MoOn Split operations
pub type SplitResult<T> = Result<T, SplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(SplitError::configuration("min_tenants", "bad").category(), "configuration");
        assert_eq!(SplitError::export("csv", "bad").category(), "export");
        assert_eq!(SplitError::InvalidDistribution { errors: 2 }.category(), "invalid_distribution");
    }

    #[test]
    fn test_error_display() {
        let err = SplitError::configuration("max_tenants", "max_tenants must be at least min_tenants");
        assert_eq!(err.to_string(), "Configuration error: max_tenants must be at least min_tenants");
        let err = SplitError::InvalidDistribution { errors: 1 };
        assert_eq!(err.to_string(), "Distribution is not valid: 1 blocking issue(s)");
    }
}
