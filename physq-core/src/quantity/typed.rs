//! Wrappers for quantities with a fixed dimension and nature.
//!
//! Each wrapper holds a [`QuantityBase`] whose dimensions and nature never
//! change. Operations between wrappers whose result is known statically
//! (Ohm's law, work, torque) return the result wrapper directly. Anything
//! else goes through [`OperationResult`] and a validated `TryFrom`:
//!
//! ```
//! use physq_core::quantity::{Dot, Energy, Force, OperationResult, Torque, Displacement};
//!
//! let work: Energy = Force::new(10.0).dot(Displacement::new(2.0));
//! assert_eq!(work.value(), 20.0);
//!
//! // A scalar result cannot become a torque
//! let result = OperationResult::from(work);
//! assert!(Torque::try_from(result).is_err());
//! ```

use super::base::{OperationResult, QuantityBase};
use super::physical::PhysicalQuantity;
use super::{Cross, Dot, EQUALITY_TOLERANCE};
use crate::errors::{QuantityError, QuantityResult};
use crate::units::format::format_significant;
use crate::units::{
    DimensionalFormula, OperationType, PhysicalQuantityType, QuantityNature, UnitPrefix,
};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Defines a wrapper type for one named quantity.
///
/// # Parameters
///
/// - `$name`: Identifier of the wrapper type
/// - `quantity`: [`PhysicalQuantityType`] variant
/// - `dimensions`: [`DimensionalFormula`] constant
/// - `nature`: [`QuantityNature`] variant
/// - `description`: Doc string for the type
macro_rules! define_quantity {
    (
        $name:ident,
        quantity = $quantity:ident,
        dimensions = $dimensions:ident,
        nature = $nature:ident,
        description = $desc:expr $(,)?
    ) => {
        #[doc = $desc]
        #[derive(Debug, Clone, Copy)]
        pub struct $name(QuantityBase);

        impl $name {
            pub const QUANTITY: PhysicalQuantityType = PhysicalQuantityType::$quantity;
            pub const DIMENSIONS: DimensionalFormula = DimensionalFormula::$dimensions;
            pub const NATURE: QuantityNature = QuantityNature::$nature;

            /// A value in base units.
            #[must_use]
            pub fn new(value: f64) -> Self {
                Self::with_prefix(value, UnitPrefix::Base)
            }

            #[must_use]
            pub fn with_prefix(value: f64, prefix: UnitPrefix) -> Self {
                Self(QuantityBase::new(
                    prefix.to_base(value, 1),
                    Self::DIMENSIONS,
                    Self::NATURE,
                    OperationType::Direct,
                ))
            }

            /// Value in base units.
            #[must_use]
            pub fn value(&self) -> f64 {
                self.0.value()
            }

            #[must_use]
            pub fn value_in(&self, prefix: UnitPrefix) -> f64 {
                prefix.from_base(self.0.value(), 1)
            }

            #[must_use]
            pub fn base(&self) -> &QuantityBase {
                &self.0
            }

            #[must_use]
            pub fn to_physical_quantity(&self) -> PhysicalQuantity {
                PhysicalQuantity::new(self.value(), Self::QUANTITY)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                (self.value() - other.value()).abs() <= EQUALITY_TOLERANCE
            }
        }

        impl TryFrom<OperationResult> for $name {
            type Error = QuantityError;

            fn try_from(result: OperationResult) -> QuantityResult<Self> {
                result
                    .narrow(stringify!($name), Self::DIMENSIONS, Self::NATURE)
                    .map(Self)
            }
        }

        impl TryFrom<PhysicalQuantity> for $name {
            type Error = QuantityError;

            fn try_from(quantity: PhysicalQuantity) -> QuantityResult<Self> {
                Self::try_from(OperationResult::from(quantity))
            }
        }

        impl From<$name> for OperationResult {
            fn from(quantity: $name) -> Self {
                quantity.0.into()
            }
        }

        impl Add for $name {
            type Output = $name;

            fn add(self, rhs: Self) -> Self::Output {
                Self::new(self.value() + rhs.value())
            }
        }

        impl Sub for $name {
            type Output = $name;

            fn sub(self, rhs: Self) -> Self::Output {
                Self::new(self.value() - rhs.value())
            }
        }

        impl Mul<f64> for $name {
            type Output = $name;

            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Mul<$name> for f64 {
            type Output = $name;

            fn mul(self, rhs: $name) -> Self::Output {
                rhs * self
            }
        }

        impl Div<f64> for $name {
            type Output = $name;

            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "{} {}",
                    format_significant(self.value(), 6),
                    Self::QUANTITY.base_symbol()
                )
            }
        }
    };
}

define_quantity!(
    Energy,
    quantity = Energy,
    dimensions = ENERGY,
    nature = Scalar,
    description = "Energy in joules.",
);

define_quantity!(
    Power,
    quantity = Power,
    dimensions = POWER,
    nature = Scalar,
    description = "Power in watts.",
);

define_quantity!(
    Voltage,
    quantity = Voltage,
    dimensions = VOLTAGE,
    nature = Scalar,
    description = "Electric potential difference in volts.",
);

define_quantity!(
    ElectricCurrent,
    quantity = Current,
    dimensions = CURRENT,
    nature = Scalar,
    description = "Electric current in amperes.",
);

define_quantity!(
    Resistance,
    quantity = Resistance,
    dimensions = RESISTANCE,
    nature = Scalar,
    description = "Electrical resistance in ohms.",
);

define_quantity!(
    Force,
    quantity = Force,
    dimensions = FORCE,
    nature = Vector,
    description = "Force in newtons (vector).",
);

define_quantity!(
    Displacement,
    quantity = Displacement,
    dimensions = LENGTH,
    nature = Vector,
    description = "Displacement in metres (vector).",
);

define_quantity!(
    Torque,
    quantity = Torque,
    dimensions = ENERGY,
    nature = Pseudovector,
    description = "Torque in newton-metres (pseudovector).",
);

// Mechanics

impl Dot<Displacement> for Force {
    type Output = Energy;

    /// Work done by a force along a displacement.
    fn dot(self, rhs: Displacement) -> Energy {
        Energy(
            self.0
                .product(&rhs.0, QuantityNature::Scalar, OperationType::DotProduct),
        )
    }
}

impl Dot<Force> for Displacement {
    type Output = Energy;

    fn dot(self, rhs: Force) -> Energy {
        rhs.dot(self)
    }
}

impl Cross<Force> for Displacement {
    type Output = Torque;

    /// Torque of a force applied at a lever arm.
    fn cross(self, rhs: Force) -> Torque {
        Torque(
            self.0
                .product(&rhs.0, QuantityNature::Pseudovector, OperationType::CrossProduct),
        )
    }
}

impl Cross<Displacement> for Force {
    type Output = Torque;

    // Magnitudes only, so the orientation of the product is not tracked
    fn cross(self, rhs: Displacement) -> Torque {
        Torque(
            self.0
                .product(&rhs.0, QuantityNature::Pseudovector, OperationType::CrossProduct),
        )
    }
}

// Circuits

impl Div<ElectricCurrent> for Voltage {
    type Output = Resistance;

    fn div(self, rhs: ElectricCurrent) -> Resistance {
        Resistance(self.0.quotient(&rhs.0, QuantityNature::Scalar))
    }
}

impl Div<Resistance> for Voltage {
    type Output = ElectricCurrent;

    fn div(self, rhs: Resistance) -> ElectricCurrent {
        ElectricCurrent(self.0.quotient(&rhs.0, QuantityNature::Scalar))
    }
}

impl Mul<ElectricCurrent> for Voltage {
    type Output = Power;

    fn mul(self, rhs: ElectricCurrent) -> Power {
        Power(
            self.0
                .product(&rhs.0, QuantityNature::Scalar, OperationType::ScalarMultiply),
        )
    }
}

impl Mul<Resistance> for ElectricCurrent {
    type Output = Voltage;

    fn mul(self, rhs: Resistance) -> Voltage {
        Voltage(
            self.0
                .product(&rhs.0, QuantityNature::Scalar, OperationType::ScalarMultiply),
        )
    }
}

impl Mul<ElectricCurrent> for Resistance {
    type Output = Voltage;

    fn mul(self, rhs: ElectricCurrent) -> Voltage {
        rhs * self
    }
}

impl Div<Voltage> for Power {
    type Output = ElectricCurrent;

    fn div(self, rhs: Voltage) -> ElectricCurrent {
        ElectricCurrent(self.0.quotient(&rhs.0, QuantityNature::Scalar))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::PhysicsDefinitions;
    use is_close::is_close;

    #[test]
    fn test_constants_match_registry() {
        let definitions = PhysicsDefinitions::global();
        let wrappers = [
            (Energy::QUANTITY, Energy::DIMENSIONS, Energy::NATURE),
            (Power::QUANTITY, Power::DIMENSIONS, Power::NATURE),
            (Voltage::QUANTITY, Voltage::DIMENSIONS, Voltage::NATURE),
            (
                ElectricCurrent::QUANTITY,
                ElectricCurrent::DIMENSIONS,
                ElectricCurrent::NATURE,
            ),
            (Resistance::QUANTITY, Resistance::DIMENSIONS, Resistance::NATURE),
            (Force::QUANTITY, Force::DIMENSIONS, Force::NATURE),
            (
                Displacement::QUANTITY,
                Displacement::DIMENSIONS,
                Displacement::NATURE,
            ),
            (Torque::QUANTITY, Torque::DIMENSIONS, Torque::NATURE),
        ];
        for (quantity, dimensions, nature) in wrappers {
            let definition = definitions.definition(quantity);
            assert_eq!(definition.dimensions, dimensions, "{quantity}");
            assert_eq!(definition.nature, nature, "{quantity}");
        }
    }

    #[test]
    fn test_ohms_law() {
        let current = Voltage::new(12.0) / Resistance::new(4.0);
        assert!(is_close!(current.value(), 3.0));

        let resistance = Voltage::new(12.0) / ElectricCurrent::new(3.0);
        assert_eq!(resistance, Resistance::new(4.0));

        let voltage = ElectricCurrent::new(2.0) * Resistance::new(6.0);
        assert_eq!(voltage, Voltage::new(12.0));
        assert_eq!(Resistance::new(6.0) * ElectricCurrent::new(2.0), voltage);
    }

    #[test]
    fn test_power() {
        let power = Voltage::new(120.0) * ElectricCurrent::new(5.0);
        assert_eq!(power, Power::new(600.0));
        assert_eq!(power / Voltage::new(120.0), ElectricCurrent::new(5.0));
    }

    #[test]
    fn test_work_and_torque() {
        let force = Force::new(10.0);
        let lever = Displacement::new(0.5);

        let work = force.dot(lever);
        assert_eq!(work, Energy::new(5.0));
        assert_eq!(work.base().created_by(), OperationType::DotProduct);
        assert_eq!(lever.dot(force), work);

        let torque = lever.cross(force);
        assert_eq!(torque, Torque::new(5.0));
        assert_eq!(torque.base().nature(), QuantityNature::Pseudovector);
        assert_eq!(force.cross(lever), torque);
    }

    #[test]
    fn test_prefixes() {
        let voltage = Voltage::with_prefix(3300.0, UnitPrefix::Milli);
        assert!(is_close!(voltage.value(), 3.3));
        assert!(is_close!(voltage.value_in(UnitPrefix::Milli), 3300.0));
        assert_eq!(voltage.to_string(), "3.3 V");
    }

    #[test]
    fn test_scaling_and_addition() {
        let force = Force::new(2.0);
        assert_eq!(force * 3.0, Force::new(6.0));
        assert_eq!(3.0 * force, Force::new(6.0));
        assert_eq!(force / 2.0, Force::new(1.0));
        assert_eq!(force + Force::new(1.0), Force::new(3.0));
        assert_eq!(force - Force::new(1.0), Force::new(1.0));
    }

    #[test]
    fn test_narrowing_success() {
        let mass = PhysicalQuantity::new(2.0, PhysicalQuantityType::Mass);
        let acceleration = PhysicalQuantity::new(9.0, PhysicalQuantityType::Acceleration);
        let result = OperationResult::from(mass) * OperationResult::from(acceleration);

        let force = Force::try_from(result).unwrap();
        assert_eq!(force, Force::new(18.0));

        let energy = Energy::try_from(PhysicalQuantity::new(4.0, PhysicalQuantityType::Energy));
        assert_eq!(energy.unwrap(), Energy::new(4.0));
    }

    #[test]
    fn test_narrowing_checks_nature() {
        // Same formula, different nature
        let work = OperationResult::from(Energy::new(5.0));
        assert_eq!(
            Torque::try_from(work).unwrap_err(),
            QuantityError::InvalidNarrowing {
                target: "Torque",
                expected_dimensions: DimensionalFormula::ENERGY,
                expected_nature: QuantityNature::Pseudovector,
                dimensions: DimensionalFormula::ENERGY,
                nature: QuantityNature::Scalar,
            }
        );
    }

    #[test]
    fn test_narrowing_checks_dimensions() {
        let power = OperationResult::from(Power::new(5.0));
        assert!(matches!(
            Energy::try_from(power),
            Err(QuantityError::InvalidNarrowing { target: "Energy", .. })
        ));
    }

    #[test]
    fn test_to_physical_quantity() {
        let pq = Force::new(3.0).to_physical_quantity();
        assert_eq!(pq.quantity_type(), PhysicalQuantityType::Force);
        assert_eq!(pq.nature(), QuantityNature::Vector);
    }
}
