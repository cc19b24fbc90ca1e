//! Risk-neutral branching probabilities and terminal price nodes.

use num_traits::Float;

use super::error::LatticeError;
use super::trinomial::TrinomialModel;

/// Risk-neutral probabilities of the up, middle and down moves.
///
/// Derived in closed form from the lattice factors and the one-period
/// growth factor. The three values always sum to one by construction
/// (the down probability is the remainder), but they are neither clamped
/// nor checked against `[0, 1]`.
///
/// # Examples
/// ```
/// use pricer_lattice::lattice::{RiskNeutralProbabilities, TrinomialModel};
///
/// let model = TrinomialModel::new(100.0_f64, 1.2, 1.0, 0.8, 0.0, 1.0);
/// let probs = RiskNeutralProbabilities::derive(&model).unwrap();
/// assert!((probs.mid() - 0.5).abs() < 1e-12);
/// assert!((probs.up() - 0.25).abs() < 1e-12);
/// assert!(probs.is_within_unit_interval());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskNeutralProbabilities<T: Float> {
    up: T,
    mid: T,
    down: T,
}

impl<T: Float> RiskNeutralProbabilities<T> {
    /// Derives the probabilities for a trinomial model.
    ///
    /// - p_mid = (e^(r·dt) - d) / (u - d)
    /// - p_up = (m - d) / (u - d) · p_mid
    /// - p_down = 1 - p_up - p_mid
    ///
    /// # Errors
    /// - `LatticeError::DegenerateBranching` if `u - d == 0`
    pub fn derive(model: &TrinomialModel<T>) -> Result<Self, LatticeError> {
        let grow = model.growth_factor();
        let spread = model.up() - model.down();

        if spread == T::zero() {
            return Err(LatticeError::DegenerateBranching {
                up: model.up().to_f64().unwrap_or(f64::NAN),
                down: model.down().to_f64().unwrap_or(f64::NAN),
            });
        }

        let mid = (grow - model.down()) / spread;
        let up = (model.mid() - model.down()) / spread * mid;
        let down = T::one() - up - mid;

        Ok(Self { up, mid, down })
    }

    /// Probability of the up move.
    #[inline]
    pub fn up(&self) -> T {
        self.up
    }

    /// Probability of the middle move.
    #[inline]
    pub fn mid(&self) -> T {
        self.mid
    }

    /// Probability of the down move.
    #[inline]
    pub fn down(&self) -> T {
        self.down
    }

    /// Sum of the three probabilities.
    #[inline]
    pub fn sum(&self) -> T {
        self.up + self.mid + self.down
    }

    /// Returns whether every probability lies in `[0, 1]`.
    ///
    /// Pricing does not consult this; it is a diagnostic for callers.
    /// NaN probabilities are reported as out of range.
    pub fn is_within_unit_interval(&self) -> bool {
        let zero = T::zero();
        let one = T::one();
        [self.up, self.mid, self.down]
            .iter()
            .all(|&p| p >= zero && p <= one)
    }

    /// Probability-weighted sum of per-node values, `p_up·x_up + p_mid·x_mid + p_down·x_down`.
    #[inline]
    pub fn expectation(&self, values: &LatticeNodes<T>) -> T {
        self.up * values.up + self.mid * values.mid + self.down * values.down
    }
}

/// Per-node values of a one-step trinomial lattice.
///
/// Holds the terminal asset prices `S0·u`, `S0·m`, `S0·d`, or any other
/// quantity evaluated at those nodes (payoffs).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeNodes<T: Float> {
    /// Value at the up node
    pub up: T,
    /// Value at the middle node
    pub mid: T,
    /// Value at the down node
    pub down: T,
}

impl<T: Float> LatticeNodes<T> {
    /// Terminal asset prices of a model.
    #[inline]
    pub fn terminal_prices(model: &TrinomialModel<T>) -> Self {
        let spot = model.spot();
        Self {
            up: spot * model.up(),
            mid: spot * model.mid(),
            down: spot * model.down(),
        }
    }

    /// Applies `f` to every node.
    #[inline]
    pub fn map<F: Fn(T) -> T>(&self, f: F) -> Self {
        Self {
            up: f(self.up),
            mid: f(self.mid),
            down: f(self.down),
        }
    }
}
