//! # Pricer Lattice (L2: Business Logic)
//!
//! European option pricing on a one-step trinomial lattice.
//!
//! This crate provides:
//! - Option type definitions with exact intrinsic payoffs
//! - Closed-form risk-neutral branching probabilities
//! - The one-step trinomial pricing operation
//! - A `Priceable` instrument bundling contract and model
//!
//! ## Design Principles
//!
//! - **Closed enums at the boundary**: option type text is parsed once into
//!   [`instruments::OptionType`]; pricing never branches on strings
//! - **Explicit results**: every fallible operation returns `Result`
//! - **No clamping**: derived probabilities are used exactly as computed
//!
//! ## Example
//!
//! ```
//! use pricer_lattice::lattice::trinomial_option_price;
//!
//! let call = trinomial_option_price(100.0_f64, 100.0, 1.2, 1.0, 0.8, 0.0, 1.0, "call").unwrap();
//! assert!((call - 5.0).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod instruments;
pub mod lattice;
