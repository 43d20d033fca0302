//! Type-erased quantity state and the transient result of an operation.

use super::physical::PhysicalQuantity;
use super::{Cross, Dot};
use crate::errors::{QuantityError, QuantityResult};
use crate::units::engine::{
    division_nature, multiplication_nature, require_vectors, ScalarAnalysisEngine,
};
use crate::units::format::format_significant;
use crate::units::{
    DimensionalFormula, OperationType, PhysicalQuantityType, PhysicsDefinitions, QuantityNature,
};
use std::fmt;
use std::ops::{Div, Mul};

/// Value, dimensions, nature and provenance of a quantity.
///
/// The value is always in SI base units. Arithmetic on `QuantityBase`
/// never consults the registry; naming the result is left to
/// [`OperationResult`] narrowing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityBase {
    value: f64,
    dimensions: DimensionalFormula,
    nature: QuantityNature,
    created_by: OperationType,
}

impl QuantityBase {
    #[must_use]
    pub const fn new(
        value: f64,
        dimensions: DimensionalFormula,
        nature: QuantityNature,
        created_by: OperationType,
    ) -> Self {
        Self {
            value,
            dimensions,
            nature,
            created_by,
        }
    }

    /// A directly constructed value of a registered quantity.
    #[must_use]
    pub fn of_type(value: f64, quantity: PhysicalQuantityType) -> Self {
        let definition = PhysicsDefinitions::global().definition(quantity);
        Self::new(
            value,
            definition.dimensions,
            definition.nature,
            OperationType::Direct,
        )
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn dimensions(&self) -> DimensionalFormula {
        self.dimensions
    }

    #[must_use]
    pub fn nature(&self) -> QuantityNature {
        self.nature
    }

    #[must_use]
    pub fn created_by(&self) -> OperationType {
        self.created_by
    }

    /// Multiplies the value by a plain number. Dimensions and nature are kept.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(
            self.value * factor,
            self.dimensions,
            self.nature,
            OperationType::ScalarMultiply,
        )
    }

    /// Product of the values with the given nature and provenance.
    pub(crate) fn product(
        &self,
        other: &Self,
        nature: QuantityNature,
        operation: OperationType,
    ) -> Self {
        Self::new(
            self.value * other.value,
            self.dimensions * other.dimensions,
            nature,
            operation,
        )
    }

    pub(crate) fn quotient(&self, other: &Self, nature: QuantityNature) -> Self {
        Self::new(
            self.value / other.value,
            self.dimensions / other.dimensions,
            nature,
            OperationType::ScalarMultiply,
        )
    }
}

impl Mul for QuantityBase {
    type Output = QuantityBase;

    fn mul(self, rhs: Self) -> Self::Output {
        let (nature, operation) = multiplication_nature(self.nature, rhs.nature);
        self.product(&rhs, nature, operation)
    }
}

impl Div for QuantityBase {
    type Output = QuantityBase;

    fn div(self, rhs: Self) -> Self::Output {
        self.quotient(&rhs, division_nature(self.nature, rhs.nature))
    }
}

impl Mul<f64> for QuantityBase {
    type Output = QuantityBase;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Div<f64> for QuantityBase {
    type Output = QuantityBase;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(
            self.value / rhs,
            self.dimensions,
            self.nature,
            OperationType::ScalarMultiply,
        )
    }
}

impl Dot for QuantityBase {
    type Output = QuantityResult<QuantityBase>;

    fn dot(self, rhs: Self) -> Self::Output {
        require_vectors(OperationType::DotProduct, self.nature, rhs.nature)?;
        Ok(self.product(&rhs, QuantityNature::Scalar, OperationType::DotProduct))
    }
}

impl Cross for QuantityBase {
    type Output = QuantityResult<QuantityBase>;

    fn cross(self, rhs: Self) -> Self::Output {
        require_vectors(OperationType::CrossProduct, self.nature, rhs.nature)?;
        Ok(self.product(&rhs, QuantityNature::Pseudovector, OperationType::CrossProduct))
    }
}

/// The unnamed outcome of an operation.
///
/// Carries the value together with its dimensions, nature and provenance
/// until it is narrowed into a named quantity, either a specific wrapper
/// through `TryFrom` or a [`PhysicalQuantity`] through
/// [`OperationResult::to_physical_quantity`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationResult {
    base: QuantityBase,
}

impl OperationResult {
    #[must_use]
    pub const fn new(
        value: f64,
        dimensions: DimensionalFormula,
        nature: QuantityNature,
        created_by: OperationType,
    ) -> Self {
        Self {
            base: QuantityBase::new(value, dimensions, nature, created_by),
        }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.base.value
    }

    #[must_use]
    pub fn dimensions(&self) -> DimensionalFormula {
        self.base.dimensions
    }

    #[must_use]
    pub fn nature(&self) -> QuantityNature {
        self.base.nature
    }

    #[must_use]
    pub fn created_by(&self) -> OperationType {
        self.base.created_by
    }

    #[must_use]
    pub fn base(&self) -> &QuantityBase {
        &self.base
    }

    /// Checks dimensions and nature against a narrowing target.
    pub(crate) fn narrow(
        &self,
        target: &'static str,
        dimensions: DimensionalFormula,
        nature: QuantityNature,
    ) -> QuantityResult<QuantityBase> {
        if self.dimensions() == dimensions && self.nature() == nature {
            Ok(self.base)
        } else {
            Err(QuantityError::InvalidNarrowing {
                target,
                expected_dimensions: dimensions,
                expected_nature: nature,
                dimensions: self.dimensions(),
                nature: self.nature(),
            })
        }
    }

    /// Narrows a scalar result into a [`PhysicalQuantity`] with exponent 1.
    ///
    /// Fails for vector and pseudovector results, and for dimensions that
    /// no scalar quantity has.
    pub fn to_physical_quantity(&self) -> QuantityResult<PhysicalQuantity> {
        if self.nature() != QuantityNature::Scalar {
            return Err(QuantityError::InvalidNarrowing {
                target: "PhysicalQuantity",
                expected_dimensions: self.dimensions(),
                expected_nature: QuantityNature::Scalar,
                dimensions: self.dimensions(),
                nature: self.nature(),
            });
        }
        let quantity =
            ScalarAnalysisEngine::global().resolve(self.dimensions(), self.created_by())?;
        Ok(PhysicalQuantity::new(self.value(), quantity))
    }
}

impl From<QuantityBase> for OperationResult {
    fn from(base: QuantityBase) -> Self {
        Self { base }
    }
}

impl From<PhysicalQuantity> for OperationResult {
    fn from(quantity: PhysicalQuantity) -> Self {
        Self {
            base: quantity.to_base(),
        }
    }
}

impl Mul for OperationResult {
    type Output = OperationResult;

    fn mul(self, rhs: Self) -> Self::Output {
        (self.base * rhs.base).into()
    }
}

impl Div for OperationResult {
    type Output = OperationResult;

    fn div(self, rhs: Self) -> Self::Output {
        (self.base / rhs.base).into()
    }
}

impl Mul<f64> for OperationResult {
    type Output = OperationResult;

    fn mul(self, rhs: f64) -> Self::Output {
        self.base.scale(rhs).into()
    }
}

impl Div<f64> for OperationResult {
    type Output = OperationResult;

    fn div(self, rhs: f64) -> Self::Output {
        (self.base / rhs).into()
    }
}

impl fmt::Display for OperationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] ({})",
            format_significant(self.value(), 6),
            self.dimensions(),
            self.nature()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn force(value: f64) -> QuantityBase {
        QuantityBase::of_type(value, PhysicalQuantityType::Force)
    }

    fn displacement(value: f64) -> QuantityBase {
        QuantityBase::of_type(value, PhysicalQuantityType::Displacement)
    }

    #[test]
    fn test_of_type_uses_registry() {
        let f = force(2.0);
        assert_eq!(f.dimensions(), DimensionalFormula::FORCE);
        assert_eq!(f.nature(), QuantityNature::Vector);
        assert_eq!(f.created_by(), OperationType::Direct);
    }

    #[test]
    fn test_scaling_keeps_nature() {
        let f = force(2.0) * 3.0;
        assert_eq!(f.value(), 6.0);
        assert_eq!(f.nature(), QuantityNature::Vector);
        assert_eq!(f.created_by(), OperationType::ScalarMultiply);

        let half = force(2.0) / 4.0;
        assert_eq!(half.value(), 0.5);
    }

    #[test]
    fn test_product_infers_nature() {
        let mass = QuantityBase::of_type(2.0, PhysicalQuantityType::Mass);
        let acceleration = QuantityBase::of_type(9.81, PhysicalQuantityType::Acceleration);
        let f = mass * acceleration;
        assert_eq!(f.dimensions(), DimensionalFormula::FORCE);
        assert_eq!(f.nature(), QuantityNature::Vector);

        let work = force(10.0) * displacement(2.0);
        assert_eq!(work.nature(), QuantityNature::Scalar);
        assert_eq!(work.created_by(), OperationType::DotProduct);
    }

    #[test]
    fn test_quotient_infers_nature() {
        let time = QuantityBase::of_type(2.0, PhysicalQuantityType::Time);
        let velocity = displacement(10.0) / time;
        assert_eq!(velocity.value(), 5.0);
        assert_eq!(velocity.nature(), QuantityNature::Vector);
        assert_eq!(velocity.dimensions(), DimensionalFormula::VELOCITY);

        let inverse = time / displacement(1.0);
        assert_eq!(inverse.nature(), QuantityNature::Scalar);
    }

    #[test]
    fn test_dot_and_cross() {
        let work = force(10.0).dot(displacement(2.0)).unwrap();
        assert_eq!(work.value(), 20.0);
        assert_eq!(work.nature(), QuantityNature::Scalar);

        let torque = displacement(2.0).cross(force(10.0)).unwrap();
        assert_eq!(torque.nature(), QuantityNature::Pseudovector);
        assert_eq!(torque.created_by(), OperationType::CrossProduct);

        let energy = QuantityBase::of_type(1.0, PhysicalQuantityType::Energy);
        assert!(matches!(
            energy.dot(force(1.0)),
            Err(QuantityError::UnsupportedNatureForOperation { .. })
        ));
    }

    #[test]
    fn test_to_physical_quantity() {
        let voltage =
            OperationResult::from(QuantityBase::of_type(12.0, PhysicalQuantityType::Voltage));
        let current =
            OperationResult::from(QuantityBase::of_type(2.0, PhysicalQuantityType::Current));
        let power = (voltage * current).to_physical_quantity().unwrap();
        assert_eq!(power, PhysicalQuantity::new(24.0, PhysicalQuantityType::Power));
    }

    #[test]
    fn test_to_physical_quantity_rejects_vectors() {
        let result = OperationResult::from(force(1.0));
        assert!(matches!(
            result.to_physical_quantity(),
            Err(QuantityError::InvalidNarrowing {
                nature: QuantityNature::Vector,
                ..
            })
        ));
    }

    #[test]
    fn test_to_physical_quantity_rejects_unknown_dimensions() {
        let result = OperationResult::new(
            1.0,
            DimensionalFormula::TEMPERATURE * DimensionalFormula::CHARGE,
            QuantityNature::Scalar,
            OperationType::ScalarMultiply,
        );
        assert!(matches!(
            result.to_physical_quantity(),
            Err(QuantityError::UnresolvableDimension { .. })
        ));
    }

    #[test]
    fn test_display() {
        let result = OperationResult::new(
            3_600_000.0,
            DimensionalFormula::ENERGY,
            QuantityNature::Scalar,
            OperationType::ScalarMultiply,
        );
        assert_eq!(
            result.to_string(),
            "3.6e6 [Mass Length^2 Time^-2] (Scalar)"
        );

        let scaled = result / 1e6;
        assert_eq!(scaled.to_string(), "3.6 [Mass Length^2 Time^-2] (Scalar)");
    }
}
