//! Error types for quadratic analysis.

use thiserror::Error;

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that block a compute cycle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The plotted range is empty or reversed.
    #[error("x_min must be less than x_max (got x_min = {x_min:.3}, x_max = {x_max:.3})")]
    InvalidRange { x_min: f64, x_max: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalysisError::InvalidRange {
            x_min: 5.0,
            x_max: -5.0,
        };
        assert_eq!(
            err.to_string(),
            "x_min must be less than x_max (got x_min = 5.000, x_max = -5.000)"
        );
    }
}
