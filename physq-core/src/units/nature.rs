//! Tags describing how a quantity transforms and how a value was produced.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a quantity behaves as a scalar, a polar vector, or a
/// pseudovector under reflection.
///
/// # Variants
///
/// - [`Scalar`](QuantityNature::Scalar): energy, mass, time, voltage
/// - [`Vector`](QuantityNature::Vector): force, velocity, displacement
/// - [`Pseudovector`](QuantityNature::Pseudovector): torque, angular
///   momentum, magnetic field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum QuantityNature {
    #[default]
    Scalar,
    Vector,
    Pseudovector,
}

impl fmt::Display for QuantityNature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityNature::Scalar => write!(f, "Scalar"),
            QuantityNature::Vector => write!(f, "Vector"),
            QuantityNature::Pseudovector => write!(f, "Pseudovector"),
        }
    }
}

/// The operation that produced a value.
///
/// Only used as part of a registry resolution key; finished quantities do
/// not keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OperationType {
    /// Constructed directly by the caller.
    #[default]
    Direct,
    /// Scalar × scalar, scalar × vector, or any division.
    ScalarMultiply,
    /// Vector · vector → scalar.
    DotProduct,
    /// Vector × vector → pseudovector.
    CrossProduct,
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationType::Direct => write!(f, "Direct"),
            OperationType::ScalarMultiply => write!(f, "ScalarMultiply"),
            OperationType::DotProduct => write!(f, "DotProduct"),
            OperationType::CrossProduct => write!(f, "CrossProduct"),
        }
    }
}
