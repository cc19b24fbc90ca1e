//! Error types for lattice pricing operations.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::instruments::InstrumentError;

/// Lattice pricing errors.
///
/// # Variants
/// - `InvalidOptionType`: Option type text is neither `call` nor `put`
/// - `DegenerateBranching`: Up and down factors coincide, so `u - d = 0`
///
/// Out-of-range risk-neutral probabilities are deliberately not an error.
///
/// # Examples
/// ```
/// use pricer_lattice::lattice::LatticeError;
///
/// let err = LatticeError::DegenerateBranching { up: 1.0, down: 1.0 };
/// assert!(format!("{}", err).contains("u - d"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LatticeError {
    /// Option type not recognised.
    #[error("Invalid option type '{value}'. Use 'call' or 'put'")]
    InvalidOptionType {
        /// The rejected option type text
        value: String,
    },

    /// Up and down factors are equal.
    #[error("Degenerate branching: u - d = 0 (u = {up}, d = {down})")]
    DegenerateBranching {
        /// Up factor
        up: f64,
        /// Down factor
        down: f64,
    },
}

impl LatticeError {
    /// Returns whether this error is an option type validation failure.
    #[inline]
    pub fn is_invalid_option_type(&self) -> bool {
        matches!(self, LatticeError::InvalidOptionType { .. })
    }
}

impl From<InstrumentError> for LatticeError {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::InvalidOptionType { value } => {
                LatticeError::InvalidOptionType { value }
            }
        }
    }
}

impl From<LatticeError> for PricingError {
    fn from(err: LatticeError) -> Self {
        match err {
            LatticeError::InvalidOptionType { .. } => PricingError::InvalidInput(err.to_string()),
            LatticeError::DegenerateBranching { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_type_display() {
        let err = LatticeError::InvalidOptionType {
            value: "straddle".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Invalid option type 'straddle'. Use 'call' or 'put'"
        );
    }

    #[test]
    fn test_degenerate_branching_display() {
        let err = LatticeError::DegenerateBranching { up: 1.0, down: 1.0 };
        assert_eq!(
            format!("{}", err),
            "Degenerate branching: u - d = 0 (u = 1, d = 1)"
        );
    }

    #[test]
    fn test_from_instrument_error() {
        let err: LatticeError = InstrumentError::InvalidOptionType {
            value: "binary".to_string(),
        }
        .into();
        assert!(err.is_invalid_option_type());
    }

    #[test]
    fn test_invalid_option_type_to_pricing_error() {
        let err = LatticeError::InvalidOptionType {
            value: "straddle".to_string(),
        };
        match PricingError::from(err) {
            PricingError::InvalidInput(msg) => assert!(msg.contains("straddle")),
            other => panic!("Expected InvalidInput variant, got {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_branching_to_pricing_error() {
        let err = LatticeError::DegenerateBranching { up: 1.1, down: 1.1 };
        match PricingError::from(err) {
            PricingError::NumericalInstability(msg) => assert!(msg.contains("u - d")),
            other => panic!("Expected NumericalInstability variant, got {:?}", other),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = LatticeError::DegenerateBranching { up: 1.0, down: 1.0 };
        let _: &dyn std::error::Error = &err;
    }
}
