//! Analysis error types.

use thiserror::Error;

/// Structural failures of an analysis request.
///
/// Numerical degeneracy (zero variance, a vanishing recursion denominator)
/// is not represented here: the engines resolve it to defined values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("No numeric data: input contains no numeric values")]
    EmptyInput,

    #[error("Insufficient data: required {required}, got {got}")]
    InsufficientData { required: usize, got: usize },

    #[error("Length mismatch: {values} values but {labels} labels")]
    LengthMismatch { values: usize, labels: usize },

    #[error("Non-finite value at index {index}")]
    NonFiniteValue { index: usize },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl AnalysisError {
    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::EmptyInput => "empty_input",
            AnalysisError::InsufficientData { .. } => "insufficient_data",
            AnalysisError::LengthMismatch { .. } => "length_mismatch",
            AnalysisError::NonFiniteValue { .. } => "non_finite_value",
            AnalysisError::InvalidParameter { .. } => "invalid_parameter",
        }
    }

    /// Shorthand for [`AnalysisError::InvalidParameter`].
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_display() {
        let error = AnalysisError::EmptyInput;
        assert_eq!(
            error.to_string(),
            "No numeric data: input contains no numeric values"
        );
    }

    #[test]
    fn test_insufficient_data_display() {
        let error = AnalysisError::InsufficientData {
            required: 2,
            got: 1,
        };
        assert_eq!(error.to_string(), "Insufficient data: required 2, got 1");
    }

    #[test]
    fn test_length_mismatch_display() {
        let error = AnalysisError::LengthMismatch {
            values: 3,
            labels: 4,
        };
        assert_eq!(error.to_string(), "Length mismatch: 3 values but 4 labels");
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = AnalysisError::invalid_parameter("max_lag", "must be at least 1");
        assert_eq!(
            error.to_string(),
            "Invalid parameter: max_lag - must be at least 1"
        );
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            AnalysisError::EmptyInput,
            AnalysisError::InsufficientData { required: 2, got: 0 },
            AnalysisError::LengthMismatch { values: 1, labels: 2 },
            AnalysisError::NonFiniteValue { index: 0 },
            AnalysisError::invalid_parameter("x", "y"),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err(AnalysisError::EmptyInput);
        assert!(matches!(result.unwrap_err(), AnalysisError::EmptyInput));
    }

    #[test]
    fn test_all_error_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnalysisError>();
    }
}
