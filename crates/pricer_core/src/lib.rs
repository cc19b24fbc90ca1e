//! # pricer_core: Foundation Layer for the Trinomial Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Traits for pricing (`traits`)
//! - The generic `Float` bound shared by every model (`traits::Float`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::traits::priceable::Priceable;
//! use pricer_core::types::PricingError;
//!
//! struct Cash(f64);
//!
//! impl Priceable<f64> for Cash {
//!     fn price(&self) -> Result<f64, PricingError> {
//!         Ok(self.0)
//!     }
//! }
//!
//! assert_eq!(Cash(42.0).price().unwrap(), 42.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `PricingError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod types;
