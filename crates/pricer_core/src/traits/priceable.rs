//! Traits for priceable instruments.
//!
//! This module defines the `Priceable` abstraction implemented by every
//! instrument/model pair in Layer 2.

use num_traits::Float;

use crate::types::PricingError;

/// Trait for entities that can be priced.
///
/// # Type Parameters
/// * `T` - Floating-point type (f32 or f64)
///
/// # Design Philosophy
///
/// This trait is designed for **static dispatch only**. Do NOT use
/// `Box<dyn Priceable>`. Implement it on concrete instrument structs or
/// on instrument enums:
///
/// ```
/// use pricer_core::traits::priceable::Priceable;
/// use pricer_core::types::PricingError;
/// use num_traits::Float;
///
/// enum Instrument<T: Float> {
///     Cash { amount: T },
///     ZeroCoupon { face: T, rate: T, maturity: T },
/// }
///
/// impl<T: Float> Priceable<T> for Instrument<T> {
///     fn price(&self) -> Result<T, PricingError> {
///         match self {
///             Instrument::Cash { amount } => Ok(*amount),
///             Instrument::ZeroCoupon { face, rate, maturity } => {
///                 Ok(*face * (-*rate * *maturity).exp())
///             }
///         }
///     }
/// }
///
/// let bond = Instrument::ZeroCoupon { face: 100.0_f64, rate: 0.0, maturity: 1.0 };
/// assert_eq!(bond.price().unwrap(), 100.0);
/// ```
pub trait Priceable<T: Float> {
    /// Calculate the price of the instrument.
    ///
    /// # Returns
    /// The calculated present value, or a categorised `PricingError`.
    ///
    /// # Invariants
    /// - The method must be pure (no side effects, deterministic)
    fn price(&self) -> Result<T, PricingError>;
}
