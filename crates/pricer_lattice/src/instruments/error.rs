//! Instrument error types.
//!
//! This module provides structured error handling for option contract
//! construction and parsing.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidOptionType`: Option type text is neither `call` nor `put`
///
/// # Examples
/// ```
/// use pricer_lattice::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidOptionType { value: "straddle".to_string() };
/// assert!(format!("{}", err).contains("straddle"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstrumentError {
    /// Option type not recognised.
    #[error("Invalid option type '{value}'. Use 'call' or 'put'")]
    InvalidOptionType {
        /// The rejected option type text
        value: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::InvalidOptionType { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
        }
    }
}
