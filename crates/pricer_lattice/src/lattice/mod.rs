//! One-step trinomial lattice.
//!
//! Pricing flows linearly through four stages:
//! 1. Risk-neutral probability derivation ([`RiskNeutralProbabilities`])
//! 2. Terminal price nodes ([`LatticeNodes`])
//! 3. Intrinsic payoff at each node
//! 4. Expectation and discounting ([`TrinomialModel::price`])
//!
//! ## Mathematical Formulas
//!
//! - p_mid = (e^(r·dt) - d) / (u - d)
//! - p_up = (m - d) / (u - d) · p_mid
//! - p_down = 1 - p_up - p_mid
//! - V = e^(-r·dt) · (p_up·X_up + p_mid·X_mid + p_down·X_down)

pub mod error;
pub mod probabilities;
pub mod trinomial;

pub use error::LatticeError;
pub use probabilities::{LatticeNodes, RiskNeutralProbabilities};
pub use trinomial::{trinomial_option_price, TrinomialModel};
