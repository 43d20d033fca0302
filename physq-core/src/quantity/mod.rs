//! Quantity values and the operations between them.
//!
//! - [`PhysicalQuantity`]: any named quantity, with a unit exponent
//! - [`OperationResult`]: an unnamed outcome awaiting narrowing
//! - [`QuantityBase`]: the value/dimensions/nature/provenance state shared by both
//! - [`typed`]: wrappers for quantities with a fixed dimension and nature,
//!   such as [`Force`] and [`Voltage`]
//!
//! Operations that can fail return [`QuantityResult`](crate::errors::QuantityResult)
//! from the operator itself:
//!
//! ```
//! use physq_core::quantity::PhysicalQuantity;
//! use physq_core::units::PhysicalQuantityType;
//!
//! let voltage = PhysicalQuantity::new(12.0, PhysicalQuantityType::Voltage);
//! let current = PhysicalQuantity::new(2.0, PhysicalQuantityType::Current);
//! assert!((voltage + current).is_err());
//! assert!((voltage * current).is_ok());
//! ```

pub mod base;
pub mod physical;
pub mod typed;

pub use base::{OperationResult, QuantityBase};
pub use physical::PhysicalQuantity;
pub use typed::{Displacement, ElectricCurrent, Energy, Force, Power, Resistance, Torque, Voltage};

/// Absolute tolerance, in base units, for value equality.
pub const EQUALITY_TOLERANCE: f64 = 1e-12;

/// Scalar product.
pub trait Dot<Rhs = Self> {
    type Output;

    fn dot(self, rhs: Rhs) -> Self::Output;
}

/// Vector product.
pub trait Cross<Rhs = Self> {
    type Output;

    fn cross(self, rhs: Rhs) -> Self::Output;
}
