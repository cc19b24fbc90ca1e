//! European option bound to a one-step trinomial model.

use num_traits::Float;
use pricer_core::traits::priceable::Priceable;
use pricer_core::types::PricingError;

use super::OptionType;
use crate::lattice::TrinomialModel;

/// A European option priced on a one-step trinomial lattice.
///
/// Bundles the contract terms (strike, call/put) with the lattice model so
/// the pair can be priced through the workspace-wide [`Priceable`] trait.
///
/// # Examples
/// ```
/// use pricer_core::traits::priceable::Priceable;
/// use pricer_lattice::instruments::{OptionType, TrinomialOption};
/// use pricer_lattice::lattice::TrinomialModel;
///
/// let model = TrinomialModel::new(100.0_f64, 1.2, 1.0, 0.8, 0.0, 1.0);
/// let option = TrinomialOption::new(model, 100.0, OptionType::Call);
/// assert!((option.price().unwrap() - 5.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrinomialOption<T: Float> {
    model: TrinomialModel<T>,
    strike: T,
    option_type: OptionType,
}

impl<T: Float> TrinomialOption<T> {
    /// Creates a new option on the given model.
    pub fn new(model: TrinomialModel<T>, strike: T, option_type: OptionType) -> Self {
        Self {
            model,
            strike,
            option_type,
        }
    }

    /// Returns the lattice model.
    #[inline]
    pub fn model(&self) -> &TrinomialModel<T> {
        &self.model
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }
}

impl<T: Float> Priceable<T> for TrinomialOption<T> {
    fn price(&self) -> Result<T, PricingError> {
        Ok(self.model.price(self.strike, self.option_type)?)
    }
}
