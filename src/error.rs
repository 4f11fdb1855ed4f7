// src/error.rs
use thiserror::Error;

/// Custom error types for the bs-greeks library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BsError {
    /// Invalid parameter values (non-positive spot/strike, negative maturity, NaN, ...)
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration or scenario range
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// Closed-form evaluation produced a non-finite value
    #[error("Numerical instability in {method}: {reason}")]
    NumericalInstability { method: String, reason: String },
}

/// Result type alias for bs-greeks operations
pub type BsResult<T> = Result<T, BsError>;

/// Validation utilities
pub mod validation {
    use super::{BsError, BsResult};

    /// Validate that a parameter is finite and strictly positive
    pub fn validate_positive(name: &str, value: f64) -> BsResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(BsError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is finite and non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> BsResult<()> {
        validate_finite(name, value)?;
        if value < 0.0 {
            Err(BsError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> BsResult<()> {
        if !value.is_finite() {
            Err(BsError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a sample sequence has at least one point
    pub fn validate_non_empty(field: &str, values: &[f64]) -> BsResult<()> {
        if values.is_empty() {
            Err(BsError::InvalidConfiguration {
                field: field.to_string(),
                reason: "must contain at least one value".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("spot", 100.0).is_ok());
        assert!(validate_positive("spot", 0.0).is_err());
        assert!(validate_positive("spot", -1.0).is_err());
        assert!(validate_positive("spot", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("volatility", 0.0).is_ok());
        assert!(validate_non_negative("volatility", 0.2).is_ok());
        assert!(validate_non_negative("volatility", -0.01).is_err());
        assert!(validate_non_negative("volatility", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("rate", -0.01).is_ok());
        assert!(validate_finite("rate", f64::NAN).is_err());
        assert!(validate_finite("rate", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty("spot_range", &[100.0]).is_ok());
        assert!(matches!(
            validate_non_empty("spot_range", &[]),
            Err(BsError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_error_display() {
        let error = BsError::InvalidParameters {
            parameter: "strike".to_string(),
            value: -5.0,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("strike"));
        assert!(display.contains("-5"));
        assert!(display.contains("positive"));
    }
}
