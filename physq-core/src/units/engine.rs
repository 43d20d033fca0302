//! Dimensional analysis: combining operands and naming the result.
//!
//! The engine is responsible for two things the registry does not know
//! about:
//!
//! - which [`QuantityNature`] and [`OperationType`] a binary operation
//!   implies, given the natures of its operands;
//! - the combined [`DimensionalFormula`] of the result.
//!
//! It then asks the registry to name the result. A miss is an error, the
//! engine never falls back to `Dimensionless`.
//!
//! # Nature rules
//!
//! | Operation         | Operands             | Result nature | Tagged as        |
//! |-------------------|----------------------|---------------|------------------|
//! | multiply          | Scalar × X           | X             | `ScalarMultiply` |
//! | multiply          | X × Scalar           | X             | `ScalarMultiply` |
//! | multiply          | Vector × Vector      | Scalar        | `DotProduct`     |
//! | multiply          | anything else        | Scalar        | `ScalarMultiply` |
//! | divide            | Vector ÷ Scalar      | Vector        | `ScalarMultiply` |
//! | divide            | Pseudovector ÷ Scalar| Pseudovector  | `ScalarMultiply` |
//! | divide            | anything else        | Scalar        | `ScalarMultiply` |
//! | dot               | Vector · Vector      | Scalar        | `DotProduct`     |
//! | cross             | Vector × Vector      | Pseudovector  | `CrossProduct`   |

use super::dimension::DimensionalFormula;
use super::nature::{OperationType, QuantityNature};
use super::quantity_type::PhysicalQuantityType;
use super::registry::{PhysicsDefinitions, ResolutionKey, ScalarDefinitions};
use crate::config::EngineConfig;
use crate::errors::{QuantityError, QuantityResult};
use std::collections::BTreeSet;

/// Nature and provenance of a product of two operands.
#[must_use]
pub fn multiplication_nature(
    left: QuantityNature,
    right: QuantityNature,
) -> (QuantityNature, OperationType) {
    use QuantityNature::{Scalar, Vector};

    match (left, right) {
        (Scalar, other) | (other, Scalar) => (other, OperationType::ScalarMultiply),
        // The generic product of two vectors is their dot product
        (Vector, Vector) => (Scalar, OperationType::DotProduct),
        _ => (Scalar, OperationType::ScalarMultiply),
    }
}

/// Nature of a quotient of two operands. Division is always tagged
/// [`OperationType::ScalarMultiply`].
#[must_use]
pub fn division_nature(numerator: QuantityNature, denominator: QuantityNature) -> QuantityNature {
    match (numerator, denominator) {
        (QuantityNature::Vector, QuantityNature::Scalar) => QuantityNature::Vector,
        (QuantityNature::Pseudovector, QuantityNature::Scalar) => QuantityNature::Pseudovector,
        _ => QuantityNature::Scalar,
    }
}

/// Dot and cross products are only defined between two vectors.
pub fn require_vectors(
    operation: OperationType,
    left: QuantityNature,
    right: QuantityNature,
) -> QuantityResult<()> {
    if left == QuantityNature::Vector && right == QuantityNature::Vector {
        Ok(())
    } else {
        Err(QuantityError::UnsupportedNatureForOperation {
            operation,
            left,
            right,
        })
    }
}

/// One side of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    pub dimensions: DimensionalFormula,
    pub nature: QuantityNature,
}

impl Operand {
    #[must_use]
    pub const fn new(dimensions: DimensionalFormula, nature: QuantityNature) -> Self {
        Self { dimensions, nature }
    }
}

/// A named result of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub quantity: PhysicalQuantityType,
    pub dimensions: DimensionalFormula,
    pub nature: QuantityNature,
    pub operation: OperationType,
}

/// Nature-aware dimensional analysis over a [`PhysicsDefinitions`] registry.
#[derive(Debug, Clone, Copy)]
pub struct DimensionalAnalysisEngine<'a> {
    definitions: &'a PhysicsDefinitions,
    config: EngineConfig,
}

impl DimensionalAnalysisEngine<'static> {
    /// An engine over the process-wide registry with the default config.
    #[must_use]
    pub fn global() -> Self {
        Self::new(PhysicsDefinitions::global())
    }
}

impl<'a> DimensionalAnalysisEngine<'a> {
    #[must_use]
    pub fn new(definitions: &'a PhysicsDefinitions) -> Self {
        Self::with_config(definitions, EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(definitions: &'a PhysicsDefinitions, config: EngineConfig) -> Self {
        Self {
            definitions,
            config,
        }
    }

    #[must_use]
    pub fn definitions(&self) -> &'a PhysicsDefinitions {
        self.definitions
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// A registered quantity raised to `exponent`, with the quantity's own nature.
    #[must_use]
    pub fn operand(&self, quantity: PhysicalQuantityType, exponent: i32) -> Operand {
        let definition = self.definitions.definition(quantity);
        Operand::new(
            definition.dimensions.raise_to_power(exponent),
            definition.nature,
        )
    }

    pub fn multiply(&self, left: Operand, right: Operand) -> QuantityResult<Resolution> {
        let (nature, operation) = multiplication_nature(left.nature, right.nature);
        self.resolve(ResolutionKey::new(
            left.dimensions * right.dimensions,
            nature,
            operation,
        ))
    }

    pub fn divide(&self, numerator: Operand, denominator: Operand) -> QuantityResult<Resolution> {
        self.resolve(ResolutionKey::new(
            numerator.dimensions / denominator.dimensions,
            division_nature(numerator.nature, denominator.nature),
            OperationType::ScalarMultiply,
        ))
    }

    /// Scalar product of two vectors.
    pub fn dot(&self, left: Operand, right: Operand) -> QuantityResult<Resolution> {
        require_vectors(OperationType::DotProduct, left.nature, right.nature)?;
        self.resolve(ResolutionKey::new(
            left.dimensions * right.dimensions,
            QuantityNature::Scalar,
            OperationType::DotProduct,
        ))
    }

    /// Vector product of two vectors, always a pseudovector.
    pub fn cross(&self, left: Operand, right: Operand) -> QuantityResult<Resolution> {
        require_vectors(OperationType::CrossProduct, left.nature, right.nature)?;
        self.resolve(ResolutionKey::new(
            left.dimensions * right.dimensions,
            QuantityNature::Pseudovector,
            OperationType::CrossProduct,
        ))
    }

    /// Names the quantity for a resolution key, honouring
    /// [`EngineConfig::operation_fallback`].
    pub fn resolve(&self, key: ResolutionKey) -> QuantityResult<Resolution> {
        let quantity = self
            .definitions
            .find_quantity_type(&key, self.config.operation_fallback)?;
        Ok(Resolution {
            quantity,
            dimensions: key.dimensions,
            nature: key.nature,
            operation: key.operation,
        })
    }

    /// Lists products and quotients of registered quantities whose
    /// dimensions equal `target`'s.
    ///
    /// Tries `A × B`, `A ÷ B`, `A² × B`, `A² ÷ B` and `A ÷ B²` for every
    /// ordered pair of non-dimensionless types. Only dimensions are compared;
    /// nature is ignored. Intended for exploration and debugging.
    #[must_use]
    pub fn find_all_ways_to_create(&self, target: PhysicalQuantityType) -> Vec<String> {
        let target_dimensions = self.definitions.dimensions(target);
        let types: Vec<(PhysicalQuantityType, DimensionalFormula)> = self
            .definitions
            .definitions()
            .filter(|d| d.quantity != PhysicalQuantityType::Dimensionless)
            .map(|d| (d.quantity, d.dimensions))
            .collect();

        let mut results = BTreeSet::new();
        for &(a, dim_a) in &types {
            let dim_a_squared = dim_a.raise_to_power(2);
            for &(b, dim_b) in &types {
                let dim_b_squared = dim_b.raise_to_power(2);

                let candidates = [
                    (dim_a * dim_b, format!("{a} × {b}")),
                    (dim_a / dim_b, format!("{a} ÷ {b}")),
                    (dim_a_squared * dim_b, format!("{a}² × {b}")),
                    (dim_a_squared / dim_b, format!("{a}² ÷ {b}")),
                    (dim_a / dim_b_squared, format!("{a} ÷ {b}²")),
                ];
                for (dimensions, expression) in candidates {
                    if dimensions == target_dimensions {
                        results.insert(format!("{expression} = {target}"));
                    }
                }
            }
        }

        results.into_iter().collect()
    }
}

/// Dimension-only analysis over the scalar registry.
///
/// Nature and provenance are ignored; every result is a scalar quantity.
#[derive(Debug, Clone, Copy)]
pub struct ScalarAnalysisEngine<'a> {
    definitions: &'a ScalarDefinitions,
}

impl ScalarAnalysisEngine<'static> {
    #[must_use]
    pub fn global() -> Self {
        Self::new(ScalarDefinitions::global())
    }
}

impl<'a> ScalarAnalysisEngine<'a> {
    #[must_use]
    pub fn new(definitions: &'a ScalarDefinitions) -> Self {
        Self { definitions }
    }

    /// Dimensions of a scalar quantity raised to `exponent`.
    ///
    /// Vectors and pseudovectors are not part of the scalar registry.
    pub fn dimensions(
        &self,
        quantity: PhysicalQuantityType,
        exponent: i32,
    ) -> QuantityResult<DimensionalFormula> {
        self.definitions
            .dimensions(quantity)
            .map(|d| d.raise_to_power(exponent))
            .ok_or_else(|| {
                QuantityError::UnknownQuantityType(format!("{quantity} is not a scalar quantity"))
            })
    }

    pub fn multiply(
        &self,
        left: DimensionalFormula,
        right: DimensionalFormula,
    ) -> QuantityResult<PhysicalQuantityType> {
        self.resolve(left * right, OperationType::ScalarMultiply)
    }

    pub fn divide(
        &self,
        numerator: DimensionalFormula,
        denominator: DimensionalFormula,
    ) -> QuantityResult<PhysicalQuantityType> {
        self.resolve(numerator / denominator, OperationType::ScalarMultiply)
    }

    /// The scalar quantity with exactly these dimensions. `operation` only
    /// labels the error.
    pub fn resolve(
        &self,
        dimensions: DimensionalFormula,
        operation: OperationType,
    ) -> QuantityResult<PhysicalQuantityType> {
        self.definitions
            .find_quantity_type(&dimensions)
            .ok_or(QuantityError::UnresolvableDimension {
                dimensions,
                nature: QuantityNature::Scalar,
                operation,
            })
    }
}
