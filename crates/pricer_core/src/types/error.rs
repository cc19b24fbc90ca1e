//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations
//!
//! Model crates define their own detailed error enums and convert them into
//! `PricingError` at the layer boundary with `From`.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `NumericalInstability`: Computation produced an undefined result
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Unknown option type: straddle".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Unknown option type: straddle");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl PricingError {
    /// Returns whether the error stems from caller-supplied input.
    ///
    /// Input errors are validation failures and must never be retried.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PricingError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = PricingError::InvalidInput("Negative spot price".to_string());
        assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
    }

    #[test]
    fn test_numerical_instability_display() {
        let err = PricingError::NumericalInstability("u - d = 0".to_string());
        assert_eq!(format!("{}", err), "Numerical instability: u - d = 0");
    }

    #[test]
    fn test_is_invalid_input() {
        assert!(PricingError::InvalidInput("x".to_string()).is_invalid_input());
        assert!(!PricingError::NumericalInstability("x".to_string()).is_invalid_input());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::NumericalInstability("x".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::InvalidInput("x".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
