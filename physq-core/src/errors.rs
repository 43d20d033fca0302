use crate::units::dimension::DimensionalFormula;
use crate::units::nature::{OperationType, QuantityNature};
use crate::units::quantity_type::PhysicalQuantityType;
use thiserror::Error;

/// Error type for invalid quantity operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantityError {
    #[error("Cannot combine {left} (exponent {left_exponent}) with {right} (exponent {right_exponent}): addition and subtraction require the same quantity type and exponent")]
    IncompatibleOperands {
        left: PhysicalQuantityType,
        left_exponent: i32,
        right: PhysicalQuantityType,
        right_exponent: i32,
    },
    #[error("Unknown dimensional combination: {dimensions} ({nature}, {operation})")]
    UnresolvableDimension {
        dimensions: DimensionalFormula,
        nature: QuantityNature,
        operation: OperationType,
    },
    #[error("Cannot convert {dimensions} ({nature}) to {target}: expected {expected_dimensions} ({expected_nature})")]
    InvalidNarrowing {
        target: &'static str,
        expected_dimensions: DimensionalFormula,
        expected_nature: QuantityNature,
        dimensions: DimensionalFormula,
        nature: QuantityNature,
    },
    #[error("{operation} requires two vectors, got {left} and {right}")]
    UnsupportedNatureForOperation {
        operation: OperationType,
        left: QuantityNature,
        right: QuantityNature,
    },
    #[error("Invalid physics definitions: {0}")]
    InvalidDefinitions(String),
    #[error("Cannot parse '{0}' as a number")]
    MalformedNumber(String),
    #[error("Unknown quantity type '{0}'")]
    UnknownQuantityType(String),
    #[error("Unknown unit prefix '{0}'")]
    UnknownPrefix(String),
    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience type for `Result<T, QuantityError>`.
pub type QuantityResult<T> = Result<T, QuantityError>;
