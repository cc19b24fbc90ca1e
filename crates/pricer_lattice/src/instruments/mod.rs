//! Option contract definitions.
//!
//! This module provides:
//! - [`OptionType`]: call/put flag with intrinsic payoff evaluation
//! - [`TrinomialOption`]: a European option bound to a trinomial model
//! - [`InstrumentError`]: contract construction and parsing errors

mod error;
mod european;
mod option_type;

pub use error::InstrumentError;
pub use european::TrinomialOption;
pub use option_type::OptionType;
