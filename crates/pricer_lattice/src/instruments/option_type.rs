//! Option type definitions with exact intrinsic payoffs.
//!
//! Payoffs are evaluated as `max(x, 0)`; at the tie `x == 0` the payoff is
//! exactly zero, and a NaN intrinsic value propagates instead of collapsing
//! to zero.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::InstrumentError;

/// Type of European option.
///
/// # Variants
/// - `Call`: max(S - K, 0) payoff
/// - `Put`: max(K - S, 0) payoff
///
/// # Examples
/// ```
/// use pricer_lattice::instruments::OptionType;
///
/// let call: OptionType = "call".parse().unwrap();
/// assert_eq!(call.payoff(120.0_f64, 100.0), 20.0);
///
/// // Unrecognised text is rejected at the boundary
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Evaluate the intrinsic payoff for given spot and strike.
    ///
    /// # Arguments
    /// * `spot` - Asset price at the node (S)
    /// * `strike` - Strike price (K)
    ///
    /// # Examples
    /// ```
    /// use pricer_lattice::instruments::OptionType;
    ///
    /// assert_eq!(OptionType::Put.payoff(80.0_f64, 100.0), 20.0);
    /// assert_eq!(OptionType::Put.payoff(120.0_f64, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn payoff<T: Float>(&self, spot: T, strike: T) -> T {
        let intrinsic = match self {
            OptionType::Call => spot - strike,
            OptionType::Put => strike - spot,
        };
        // Float::max would discard a NaN operand
        let zero = T::zero();
        if zero > intrinsic {
            zero
        } else {
            intrinsic
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = InstrumentError;

    /// Parses exactly `call` or `put`. Case and whitespace are significant.
    ///
    /// # Examples
    /// ```
    /// use pricer_lattice::instruments::OptionType;
    ///
    /// assert_eq!("put".parse::<OptionType>().unwrap(), OptionType::Put);
    /// assert!("Put".parse::<OptionType>().is_err());
    /// assert!("".parse::<OptionType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, InstrumentError> {
        match s {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(InstrumentError::InvalidOptionType {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Call payoff tests

    #[test]
    fn test_call_payoff_in_the_money() {
        assert_eq!(OptionType::Call.payoff(120.0_f64, 100.0), 20.0);
    }

    #[test]
    fn test_call_payoff_out_of_the_money() {
        assert_eq!(OptionType::Call.payoff(80.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_call_payoff_at_the_money_is_exact_zero() {
        let payoff = OptionType::Call.payoff(100.0_f64, 100.0);
        assert_eq!(payoff, 0.0);
        assert!(payoff.is_sign_positive());
    }

    #[test]
    fn test_call_payoff_nan_propagates() {
        assert!(OptionType::Call.payoff(f64::NAN, 100.0).is_nan());
        assert!(OptionType::Call.payoff(100.0, f64::NAN).is_nan());
    }

    // Put payoff tests

    #[test]
    fn test_put_payoff_in_the_money() {
        assert_eq!(OptionType::Put.payoff(80.0_f64, 100.0), 20.0);
    }

    #[test]
    fn test_put_payoff_out_of_the_money() {
        assert_eq!(OptionType::Put.payoff(120.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_put_payoff_nan_propagates() {
        assert!(OptionType::Put.payoff(f64::NAN, 100.0).is_nan());
        assert!(OptionType::Put.payoff(100.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_put_payoff_at_the_money_is_exact_zero() {
        let payoff = OptionType::Put.payoff(100.0_f64, 100.0);
        assert_eq!(payoff, 0.0);
        assert!(payoff.is_sign_positive());
    }

    // Parsing tests

    #[test]
    fn test_parse_lowercase() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("put".parse::<OptionType>().unwrap(), OptionType::Put);
    }

    #[test]
    fn test_parse_rejects_other_case_and_whitespace() {
        for text in ["CALL", " call", "Put", "put\n", " put "] {
            match text.parse::<OptionType>() {
                Err(InstrumentError::InvalidOptionType { value }) => assert_eq!(value, text),
                other => panic!("Expected InvalidOptionType for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_parse_invalid_keeps_input_text() {
        let err = "straddle".parse::<OptionType>().unwrap_err();
        assert_eq!(
            err,
            InstrumentError::InvalidOptionType {
                value: "straddle".to_string()
            }
        );
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for option_type in [OptionType::Call, OptionType::Put] {
            let text = option_type.to_string();
            assert_eq!(text.parse::<OptionType>().unwrap(), option_type);
        }
    }

    #[test]
    fn test_is_call_is_put() {
        assert!(OptionType::Call.is_call());
        assert!(!OptionType::Call.is_put());
        assert!(OptionType::Put.is_put());
        assert!(!OptionType::Put.is_call());
    }

    #[test]
    fn test_f32_compatibility() {
        assert_eq!(OptionType::Call.payoff(110.0_f32, 100.0_f32), 10.0_f32);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&OptionType::Put).unwrap();
        assert_eq!(json, "\"put\"");
        let parsed: OptionType = serde_json::from_str("\"call\"").unwrap();
        assert_eq!(parsed, OptionType::Call);
    }
}
