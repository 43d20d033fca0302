//! Physical quantities with automatic dimensional analysis.
//!
//! Quantities carry a value in SI base units, a named type and a unit
//! exponent. Multiplying or dividing them resolves the result type through
//! a registry keyed by dimensional formula, vector nature and the operation
//! performed; combinations with no registered meaning are errors.

pub mod config;
pub mod errors;
pub mod quantity;
pub mod units;

pub use config::EngineConfig;
pub use errors::{QuantityError, QuantityResult};
