//! One-step trinomial model for European options.
//!
//! The asset moves from `S0` to one of `S0·u`, `S0·m`, `S0·d` over a single
//! step of length `dt`. The option value is the discounted risk-neutral
//! expectation of the intrinsic payoff at those three nodes.

use num_traits::Float;

use super::error::LatticeError;
use super::probabilities::{LatticeNodes, RiskNeutralProbabilities};
use crate::instruments::OptionType;

/// One-step trinomial lattice model.
///
/// Holds the initial price, the three multiplicative factors, the
/// continuously compounded rate and the step length. No economic validation
/// is performed: `d < m < u` and `S0 > 0` are expectations, not checks.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_lattice::instruments::OptionType;
/// use pricer_lattice::lattice::TrinomialModel;
///
/// let model = TrinomialModel::new(100.0_f64, 1.2, 1.0, 0.8, 0.0, 1.0);
/// let call = model.price(100.0, OptionType::Call).unwrap();
/// let put = model.price(100.0, OptionType::Put).unwrap();
///
/// assert!((call - 5.0).abs() < 1e-9);
/// assert!((put - 5.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrinomialModel<T: Float> {
    /// Initial asset price (S0)
    spot: T,
    /// Up factor (u)
    up: T,
    /// Middle factor (m)
    mid: T,
    /// Down factor (d)
    down: T,
    /// Continuously compounded risk-free rate (r)
    rate: T,
    /// Step length (dt)
    dt: T,
}

impl<T: Float> TrinomialModel<T> {
    /// Creates a new trinomial model.
    ///
    /// # Arguments
    /// * `spot` - Initial asset price (S0)
    /// * `up` - Up factor (u)
    /// * `mid` - Middle factor (m), typically 1
    /// * `down` - Down factor (d)
    /// * `rate` - Continuously compounded risk-free rate (r)
    /// * `dt` - Step length in the rate's time unit
    pub fn new(spot: T, up: T, mid: T, down: T, rate: T, dt: T) -> Self {
        Self {
            spot,
            up,
            mid,
            down,
            rate,
            dt,
        }
    }

    /// Returns the initial asset price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the up factor.
    #[inline]
    pub fn up(&self) -> T {
        self.up
    }

    /// Returns the middle factor.
    #[inline]
    pub fn mid(&self) -> T {
        self.mid
    }

    /// Returns the down factor.
    #[inline]
    pub fn down(&self) -> T {
        self.down
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the step length.
    #[inline]
    pub fn dt(&self) -> T {
        self.dt
    }

    /// One-period discount factor, e^(-r·dt).
    #[inline]
    pub fn discount_factor(&self) -> T {
        (-self.rate * self.dt).exp()
    }

    /// One-period growth factor, e^(r·dt).
    #[inline]
    pub fn growth_factor(&self) -> T {
        (self.rate * self.dt).exp()
    }

    /// Risk-neutral branching probabilities.
    ///
    /// # Errors
    /// - `LatticeError::DegenerateBranching` if `u - d == 0`
    #[inline]
    pub fn probabilities(&self) -> Result<RiskNeutralProbabilities<T>, LatticeError> {
        RiskNeutralProbabilities::derive(self)
    }

    /// Terminal asset prices `S0·u`, `S0·m`, `S0·d`.
    #[inline]
    pub fn nodes(&self) -> LatticeNodes<T> {
        LatticeNodes::terminal_prices(self)
    }

    /// Undiscounted risk-neutral expectation of the payoff.
    ///
    /// E = p_up·X_up + p_mid·X_mid + p_down·X_down
    ///
    /// # Errors
    /// - `LatticeError::DegenerateBranching` if `u - d == 0`
    pub fn expected_payoff(&self, strike: T, option_type: OptionType) -> Result<T, LatticeError> {
        let probabilities = self.probabilities()?;
        let payoffs = self.nodes().map(|s| option_type.payoff(s, strike));
        Ok(probabilities.expectation(&payoffs))
    }

    /// Prices a European option on this lattice.
    ///
    /// V = e^(-r·dt) · E
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `option_type` - Call or put
    ///
    /// # Errors
    /// - `LatticeError::DegenerateBranching` if `u - d == 0`
    pub fn price(&self, strike: T, option_type: OptionType) -> Result<T, LatticeError> {
        let discount = self.discount_factor();
        let expected = self.expected_payoff(strike, option_type)?;
        Ok(discount * expected)
    }
}

/// Prices a European option in a one-step trinomial model.
///
/// String-typed entry point: `option_type` must be `"call"` or `"put"`.
/// Anything else fails with `LatticeError::InvalidOptionType` before any
/// arithmetic is performed.
///
/// # Errors
/// - `LatticeError::InvalidOptionType` for unrecognised option type text
/// - `LatticeError::DegenerateBranching` if `u - d == 0`
///
/// # Examples
/// ```
/// use pricer_lattice::lattice::trinomial_option_price;
///
/// let call = trinomial_option_price(100.0_f64, 100.0, 1.2, 1.0, 0.8, 0.0, 1.0, "call").unwrap();
/// assert!((call - 5.0).abs() < 1e-9);
///
/// let err = trinomial_option_price(100.0_f64, 100.0, 1.2, 1.0, 0.8, 0.0, 1.0, "straddle");
/// assert!(err.unwrap_err().is_invalid_option_type());
/// ```
#[allow(clippy::too_many_arguments)]
pub fn trinomial_option_price<T: Float>(
    spot: T,
    strike: T,
    up: T,
    mid: T,
    down: T,
    rate: T,
    dt: T,
    option_type: &str,
) -> Result<T, LatticeError> {
    let option_type: OptionType = option_type.parse()?;
    TrinomialModel::new(spot, up, mid, down, rate, dt).price(strike, option_type)
}
