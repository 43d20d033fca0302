//! Registry of named quantities and how they can legally arise.
//!
//! Every [`PhysicalQuantityType`] has exactly one [`DimensionalFormula`] and
//! one default [`QuantityNature`], plus the set of operations that may
//! produce it. From that table two lookup structures are built:
//!
//! - [`PhysicsDefinitions`]: resolves a full [`ResolutionKey`]
//!   (formula, nature, operation), with a relaxed (formula, nature) fallback.
//! - [`ScalarDefinitions`]: a one-to-one map between formulas and the
//!   scalar quantities, for code paths where vector nature is irrelevant.
//!
//! Both are validated when built: a table that would make any lookup
//! ambiguous is rejected with [`QuantityError::InvalidDefinitions`].
//!
//! # Example
//!
//! ```
//! use physq_core::units::{
//!     DimensionalFormula, OperationType, PhysicalQuantityType, PhysicsDefinitions,
//!     QuantityNature, ResolutionKey,
//! };
//!
//! let definitions = PhysicsDefinitions::global();
//! let key = ResolutionKey::new(
//!     DimensionalFormula::ENERGY,
//!     QuantityNature::Pseudovector,
//!     OperationType::CrossProduct,
//! );
//! assert_eq!(
//!     definitions.find_quantity_type(&key, true).unwrap(),
//!     PhysicalQuantityType::Torque
//! );
//! ```

use super::bimap::{DuplicateEntry, FrozenBiMap};
use super::dimension::DimensionalFormula;
use super::nature::{OperationType, QuantityNature};
use super::quantity_type::PhysicalQuantityType;
use crate::errors::{QuantityError, QuantityResult};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use OperationType::{CrossProduct, Direct, DotProduct, ScalarMultiply};

/// Scalars that only arise from construction or scaling.
const SCALAR_OPS: &[OperationType] = &[Direct, ScalarMultiply];
/// Scalars that may also be the result of a dot product (work, power, EMF).
const SCALAR_OR_DOT_OPS: &[OperationType] = &[Direct, ScalarMultiply, DotProduct];
/// Vectors never come out of a dot or cross product.
const VECTOR_OPS: &[OperationType] = &[Direct, ScalarMultiply];
/// Pseudovectors that may be the cross product of two vectors.
const PSEUDOVECTOR_OPS: &[OperationType] = &[Direct, ScalarMultiply, CrossProduct];

/// One row of the quantity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityDefinition {
    pub quantity: PhysicalQuantityType,
    pub dimensions: DimensionalFormula,
    pub nature: QuantityNature,
    /// Operations that may legitimately produce this quantity.
    pub arises_from: &'static [OperationType],
}

impl QuantityDefinition {
    pub const fn new(
        quantity: PhysicalQuantityType,
        dimensions: DimensionalFormula,
        nature: QuantityNature,
        arises_from: &'static [OperationType],
    ) -> Self {
        Self {
            quantity,
            dimensions,
            nature,
            arises_from,
        }
    }

    const fn scalar(quantity: PhysicalQuantityType, dimensions: DimensionalFormula) -> Self {
        Self::new(quantity, dimensions, QuantityNature::Scalar, SCALAR_OPS)
    }

    const fn vector(quantity: PhysicalQuantityType, dimensions: DimensionalFormula) -> Self {
        Self::new(quantity, dimensions, QuantityNature::Vector, VECTOR_OPS)
    }
}

/// The key a combined value is resolved by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolutionKey {
    pub dimensions: DimensionalFormula,
    pub nature: QuantityNature,
    pub operation: OperationType,
}

impl ResolutionKey {
    #[must_use]
    pub const fn new(
        dimensions: DimensionalFormula,
        nature: QuantityNature,
        operation: OperationType,
    ) -> Self {
        Self {
            dimensions,
            nature,
            operation,
        }
    }
}

impl fmt::Display for ResolutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ({}, {})", self.dimensions, self.nature, self.operation)
    }
}

/// The standard quantity table.
#[must_use]
pub fn standard_definitions() -> Vec<QuantityDefinition> {
    use PhysicalQuantityType as Q;
    type D = DimensionalFormula;

    let mut definitions = Vec::with_capacity(Q::ALL.len());

    // Base SI quantities
    definitions.extend([
        QuantityDefinition::new(
            Q::Dimensionless,
            D::DIMENSIONLESS,
            QuantityNature::Scalar,
            SCALAR_OR_DOT_OPS,
        ),
        QuantityDefinition::scalar(Q::Mass, D::MASS),
        QuantityDefinition::scalar(Q::Length, D::LENGTH),
        QuantityDefinition::scalar(Q::Time, D::TIME),
        QuantityDefinition::scalar(Q::Temperature, D::TEMPERATURE),
        QuantityDefinition::scalar(Q::AmountOfSubstance, D::AMOUNT),
    ]);

    // Geometry and kinematics
    definitions.extend([
        QuantityDefinition::new(Q::Area, D::AREA, QuantityNature::Scalar, SCALAR_OR_DOT_OPS),
        QuantityDefinition::scalar(Q::Volume, D::VOLUME),
        QuantityDefinition::vector(Q::Displacement, D::LENGTH),
        QuantityDefinition::vector(Q::Velocity, D::VELOCITY),
        QuantityDefinition::vector(Q::Acceleration, D::ACCELERATION),
    ]);

    // Mechanics
    definitions.extend([
        QuantityDefinition::vector(Q::Force, D::FORCE),
        QuantityDefinition::vector(Q::Momentum, D::MOMENTUM),
        QuantityDefinition::new(Q::Energy, D::ENERGY, QuantityNature::Scalar, SCALAR_OR_DOT_OPS),
        QuantityDefinition::new(Q::Power, D::POWER, QuantityNature::Scalar, SCALAR_OR_DOT_OPS),
        QuantityDefinition::new(
            Q::Torque,
            D::ENERGY,
            QuantityNature::Pseudovector,
            PSEUDOVECTOR_OPS,
        ),
        QuantityDefinition::new(
            Q::AngularMomentum,
            D::ANGULAR_MOMENTUM,
            QuantityNature::Pseudovector,
            PSEUDOVECTOR_OPS,
        ),
    ]);

    // Electromagnetism
    definitions.extend([
        QuantityDefinition::new(Q::Voltage, D::VOLTAGE, QuantityNature::Scalar, SCALAR_OR_DOT_OPS),
        QuantityDefinition::scalar(Q::Current, D::CURRENT),
        QuantityDefinition::scalar(Q::Resistance, D::RESISTANCE),
        QuantityDefinition::scalar(Q::Charge, D::CHARGE),
        QuantityDefinition::scalar(Q::Capacitance, D::CAPACITANCE),
        QuantityDefinition::scalar(Q::Inductance, D::INDUCTANCE),
        QuantityDefinition::scalar(Q::Conductance, D::CONDUCTANCE),
        QuantityDefinition::vector(Q::ElectricField, D::ELECTRIC_FIELD),
        QuantityDefinition::new(
            Q::MagneticField,
            D::MAGNETIC_FIELD,
            QuantityNature::Pseudovector,
            SCALAR_OPS,
        ),
        QuantityDefinition::scalar(Q::MagneticFlux, D::MAGNETIC_FLUX),
        QuantityDefinition::scalar(Q::Frequency, D::FREQUENCY),
        QuantityDefinition::scalar(Q::Resistivity, D::RESISTIVITY),
        QuantityDefinition::scalar(Q::Conductivity, D::CONDUCTIVITY),
    ]);

    definitions
}

/// The process-wide nature-aware registry.
pub static PHYSICS_DEFINITIONS: LazyLock<PhysicsDefinitions> = LazyLock::new(|| {
    PhysicsDefinitions::new()
        .unwrap_or_else(|e| panic!("standard quantity table is inconsistent: {e}"))
});

/// The process-wide scalar-only registry.
pub static SCALAR_DEFINITIONS: LazyLock<ScalarDefinitions> = LazyLock::new(|| {
    ScalarDefinitions::new()
        .unwrap_or_else(|e| panic!("standard quantity table is inconsistent: {e}"))
});

/// Nature-aware registry: (formula, nature, operation) → quantity type.
#[derive(Debug, Clone)]
pub struct PhysicsDefinitions {
    /// Indexed by [`PhysicalQuantityType::index`].
    definitions: Vec<QuantityDefinition>,
    exact: HashMap<ResolutionKey, PhysicalQuantityType>,
    relaxed: HashMap<(DimensionalFormula, QuantityNature), PhysicalQuantityType>,
}

impl PhysicsDefinitions {
    /// Builds the registry from the standard table.
    pub fn new() -> QuantityResult<Self> {
        Self::from_definitions(standard_definitions())
    }

    /// The process-wide registry, built on first use.
    pub fn global() -> &'static Self {
        &PHYSICS_DEFINITIONS
    }

    /// Builds a registry from a custom table.
    ///
    /// The table must define every [`PhysicalQuantityType`] exactly once, and
    /// no two types may share a resolution key or a (formula, nature) pair.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = QuantityDefinition>,
    ) -> QuantityResult<Self> {
        let mut slots: Vec<Option<QuantityDefinition>> =
            vec![None; PhysicalQuantityType::ALL.len()];
        let mut exact = HashMap::new();
        let mut relaxed = HashMap::new();

        for definition in definitions {
            let slot = &mut slots[definition.quantity.index()];
            if slot.is_some() {
                return Err(QuantityError::InvalidDefinitions(format!(
                    "{} is defined more than once",
                    definition.quantity
                )));
            }
            *slot = Some(definition);

            if let Some(other) = relaxed.insert(
                (definition.dimensions, definition.nature),
                definition.quantity,
            ) {
                return Err(QuantityError::InvalidDefinitions(format!(
                    "{} and {} share dimensions [{}] and nature {}",
                    other, definition.quantity, definition.dimensions, definition.nature
                )));
            }

            for &operation in definition.arises_from {
                let key = ResolutionKey::new(definition.dimensions, definition.nature, operation);
                if let Some(other) = exact.insert(key, definition.quantity) {
                    return Err(QuantityError::InvalidDefinitions(format!(
                        "resolution key {key} maps to both {other} and {}",
                        definition.quantity
                    )));
                }
            }
        }

        let missing: Vec<&str> = PhysicalQuantityType::ALL
            .iter()
            .filter(|ty| slots[ty.index()].is_none())
            .map(|ty| ty.name())
            .collect();
        if !missing.is_empty() {
            return Err(QuantityError::InvalidDefinitions(format!(
                "no definition for {}",
                missing.join(", ")
            )));
        }

        let definitions: Vec<QuantityDefinition> = slots.into_iter().flatten().collect();
        log::debug!(
            "Built physics definitions: {} quantity types, {} resolution keys",
            definitions.len(),
            exact.len()
        );

        Ok(Self {
            definitions,
            exact,
            relaxed,
        })
    }

    /// The table row for a quantity type.
    #[must_use]
    pub fn definition(&self, quantity: PhysicalQuantityType) -> &QuantityDefinition {
        &self.definitions[quantity.index()]
    }

    #[must_use]
    pub fn dimensions(&self, quantity: PhysicalQuantityType) -> DimensionalFormula {
        self.definition(quantity).dimensions
    }

    #[must_use]
    pub fn nature(&self, quantity: PhysicalQuantityType) -> QuantityNature {
        self.definition(quantity).nature
    }

    /// All table rows, in [`PhysicalQuantityType::ALL`] order.
    pub fn definitions(&self) -> impl Iterator<Item = &QuantityDefinition> {
        self.definitions.iter()
    }

    /// Exact lookup, no fallback.
    #[must_use]
    pub fn find_exact(&self, key: &ResolutionKey) -> Option<PhysicalQuantityType> {
        self.exact.get(key).copied()
    }

    /// Lookup ignoring the operation type.
    #[must_use]
    pub fn find_relaxed(
        &self,
        dimensions: DimensionalFormula,
        nature: QuantityNature,
    ) -> Option<PhysicalQuantityType> {
        self.relaxed.get(&(dimensions, nature)).copied()
    }

    /// Resolves a key to a quantity type.
    ///
    /// An exact match wins. Otherwise, when `allow_fallback` is set, any
    /// quantity with the same formula and nature is accepted regardless of
    /// the operation that produced the value. A miss is an
    /// [`QuantityError::UnresolvableDimension`] error; no type is ever
    /// invented.
    pub fn find_quantity_type(
        &self,
        key: &ResolutionKey,
        allow_fallback: bool,
    ) -> QuantityResult<PhysicalQuantityType> {
        if let Some(quantity) = self.find_exact(key) {
            return Ok(quantity);
        }

        if allow_fallback {
            if let Some(quantity) = self.find_relaxed(key.dimensions, key.nature) {
                log::warn!(
                    "Resolved {key} to {quantity} by ignoring the operation type; \
                     {quantity} is not registered as arising from {}",
                    key.operation
                );
                return Ok(quantity);
            }
        }

        log::debug!("No quantity registered for {key}");
        Err(QuantityError::UnresolvableDimension {
            dimensions: key.dimensions,
            nature: key.nature,
            operation: key.operation,
        })
    }
}

/// Scalar-only registry: a one-to-one map between formulas and scalar
/// quantity types.
#[derive(Debug, Clone)]
pub struct ScalarDefinitions {
    map: FrozenBiMap<DimensionalFormula, PhysicalQuantityType>,
}

impl ScalarDefinitions {
    /// Builds the scalar registry from the standard table.
    pub fn new() -> QuantityResult<Self> {
        Self::from_definitions(&standard_definitions())
    }

    pub fn global() -> &'static Self {
        &SCALAR_DEFINITIONS
    }

    /// Builds the registry from the scalar rows of `definitions`.
    ///
    /// Two scalar types sharing one formula make reverse lookups ambiguous
    /// and are rejected here rather than at lookup time.
    pub fn from_definitions(definitions: &[QuantityDefinition]) -> QuantityResult<Self> {
        let pairs = definitions
            .iter()
            .filter(|d| d.nature == QuantityNature::Scalar)
            .map(|d| (d.dimensions, d.quantity));

        let map = FrozenBiMap::try_from_pairs(pairs).map_err(|e| {
            QuantityError::InvalidDefinitions(match e {
                DuplicateEntry::Key { key, first, second } => {
                    format!("scalar types {first} and {second} share dimensions [{key}]")
                }
                DuplicateEntry::Value { value, .. } => {
                    format!("scalar type {value} is defined more than once")
                }
            })
        })?;

        Ok(Self { map })
    }

    /// The scalar quantity with exactly these dimensions.
    #[must_use]
    pub fn find_quantity_type(&self, dimensions: &DimensionalFormula) -> Option<PhysicalQuantityType> {
        self.map.get_by_key(dimensions)
    }

    /// Dimensions of a scalar quantity type (`None` for vectors and
    /// pseudovectors).
    #[must_use]
    pub fn dimensions(&self, quantity: PhysicalQuantityType) -> Option<DimensionalFormula> {
        self.map.get_by_value(&quantity)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
