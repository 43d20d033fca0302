//! Dimensions, unit prefixes and the quantity registry.
//!
//! Everything needed to decide *what* a combination of quantities is,
//! independent of any particular value.
//!
//! # Quick Start
//!
//! ```
//! use physq_core::units::{DimensionalAnalysisEngine, DimensionalFormula, PhysicalQuantityType};
//!
//! // Multiplying adds exponents
//! let power = DimensionalFormula::VOLTAGE * DimensionalFormula::CURRENT;
//! assert_eq!(power, DimensionalFormula::POWER);
//!
//! // The engine names the result
//! let engine = DimensionalAnalysisEngine::global();
//! let result = engine
//!     .divide(
//!         engine.operand(PhysicalQuantityType::Voltage, 1),
//!         engine.operand(PhysicalQuantityType::Resistance, 1),
//!     )
//!     .unwrap();
//! assert_eq!(result.quantity, PhysicalQuantityType::Current);
//! ```
//!
//! # Module Structure
//!
//! - [`dimension`]: SI dimensional formulas (M, L, T, I, Θ, N, J)
//! - [`prefix`]: Power-of-ten unit prefixes (nano … giga)
//! - [`nature`]: Scalar/vector/pseudovector tags and operation provenance
//! - [`quantity_type`]: The closed vocabulary of named quantities
//! - [`registry`]: Which formula and nature each quantity has, and how it may arise
//! - [`engine`]: Nature inference and result resolution for binary operations
//! - [`format`]: Number and exponent rendering
//! - [`bimap`]: Read-only one-to-one map used by the scalar registry

pub mod bimap;
pub mod dimension;
pub mod engine;
pub mod format;
pub mod nature;
pub mod prefix;
pub mod quantity_type;
pub mod registry;

// Re-export the main types for convenient access
pub use dimension::DimensionalFormula;
pub use engine::{DimensionalAnalysisEngine, Operand, Resolution, ScalarAnalysisEngine};
pub use nature::{OperationType, QuantityNature};
pub use prefix::UnitPrefix;
pub use quantity_type::PhysicalQuantityType;
pub use registry::{
    PhysicsDefinitions, QuantityDefinition, ResolutionKey, ScalarDefinitions,
    PHYSICS_DEFINITIONS, SCALAR_DEFINITIONS,
};
