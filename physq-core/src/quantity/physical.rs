//! The general-purpose quantity value.
//!
//! # Example
//!
//! ```
//! use physq_core::quantity::PhysicalQuantity;
//! use physq_core::units::{PhysicalQuantityType, UnitPrefix};
//!
//! let voltage = PhysicalQuantity::new(12.0, PhysicalQuantityType::Voltage);
//! let resistance = PhysicalQuantity::with_prefix(4.0, PhysicalQuantityType::Resistance, UnitPrefix::Base);
//!
//! let current = (voltage / resistance).unwrap();
//! assert_eq!(current.quantity_type(), PhysicalQuantityType::Current);
//! assert_eq!(current.to_string_in(UnitPrefix::Milli), "3000 mA");
//! ```

use super::base::{OperationResult, QuantityBase};
use super::{Cross, Dot, EQUALITY_TOLERANCE};
use crate::errors::{QuantityError, QuantityResult};
use crate::units::format::{exponent_glyph, format_significant};
use crate::units::{
    DimensionalAnalysisEngine, DimensionalFormula, OperationType, PhysicalQuantityType,
    PhysicsDefinitions, QuantityNature, UnitPrefix,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

fn default_exponent() -> i32 {
    1
}

/// A value of a named quantity, optionally raised to an integer power.
///
/// The value is stored in SI base units. Prefixes only apply when a
/// quantity is constructed, read back or formatted.
///
/// The exponent is a power on the unit symbol: a `Voltage` with exponent 2
/// is a value in V². Multiplying or dividing two quantities of the same type
/// combines their exponents instead of consulting the registry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "StoredQuantity")]
pub struct PhysicalQuantity {
    value: f64,
    quantity_type: PhysicalQuantityType,
    exponent: i32,
}

/// Serialized form, normalized on the way in.
#[derive(Deserialize)]
struct StoredQuantity {
    value: f64,
    quantity_type: PhysicalQuantityType,
    #[serde(default = "default_exponent")]
    exponent: i32,
}

impl From<StoredQuantity> for PhysicalQuantity {
    fn from(stored: StoredQuantity) -> Self {
        Self::combined(stored.value, stored.quantity_type, stored.exponent)
    }
}

impl PhysicalQuantity {
    /// A value in base units with exponent 1.
    #[must_use]
    pub fn new(value: f64, quantity_type: PhysicalQuantityType) -> Self {
        Self::with_exponent(value, quantity_type, 1, UnitPrefix::Base)
    }

    /// A value expressed in `prefix` units, e.g. 500 mV.
    #[must_use]
    pub fn with_prefix(
        value: f64,
        quantity_type: PhysicalQuantityType,
        prefix: UnitPrefix,
    ) -> Self {
        Self::with_exponent(value, quantity_type, 1, prefix)
    }

    /// A value expressed in `prefix` units raised to `exponent`.
    ///
    /// The stored value is `value × multiplier^exponent`, so 2 km² is stored
    /// as 2 000 000 m². An exponent of 0 yields a dimensionless value.
    #[must_use]
    pub fn with_exponent(
        value: f64,
        quantity_type: PhysicalQuantityType,
        exponent: i32,
        prefix: UnitPrefix,
    ) -> Self {
        Self::combined(prefix.to_base(value, exponent), quantity_type, exponent)
    }

    /// Parses a number typed in base units.
    pub fn parse(text: &str, quantity_type: PhysicalQuantityType) -> QuantityResult<Self> {
        Self::parse_with_prefix(text, quantity_type, UnitPrefix::Base)
    }

    /// Parses a number typed in `prefix` units. Surrounding whitespace is ignored.
    pub fn parse_with_prefix(
        text: &str,
        quantity_type: PhysicalQuantityType,
        prefix: UnitPrefix,
    ) -> QuantityResult<Self> {
        let trimmed = text.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| QuantityError::MalformedNumber(trimmed.to_string()))?;
        Ok(Self::with_prefix(value, quantity_type, prefix))
    }

    /// Result of an arithmetic operation, with exponent normalization.
    ///
    /// A zero exponent collapses to `Dimensionless` and dimensionless values
    /// always carry exponent 1.
    fn combined(value: f64, quantity_type: PhysicalQuantityType, exponent: i32) -> Self {
        if exponent == 0 || quantity_type == PhysicalQuantityType::Dimensionless {
            Self {
                value,
                quantity_type: PhysicalQuantityType::Dimensionless,
                exponent: 1,
            }
        } else {
            Self {
                value,
                quantity_type,
                exponent,
            }
        }
    }

    /// Value in SI base units.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn quantity_type(&self) -> PhysicalQuantityType {
        self.quantity_type
    }

    #[must_use]
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    #[must_use]
    pub fn nature(&self) -> QuantityNature {
        PhysicsDefinitions::global().nature(self.quantity_type)
    }

    /// Dimensions of the type raised to the exponent.
    #[must_use]
    pub fn dimensions(&self) -> DimensionalFormula {
        PhysicsDefinitions::global()
            .dimensions(self.quantity_type)
            .raise_to_power(self.exponent)
    }

    /// Value expressed in `prefix` units.
    #[must_use]
    pub fn value_in(&self, prefix: UnitPrefix) -> f64 {
        prefix.from_base(self.value, self.exponent)
    }

    /// Same type and same exponent.
    #[must_use]
    pub fn is_compatible_for_addition(&self, other: &Self) -> bool {
        self.quantity_type == other.quantity_type && self.exponent == other.exponent
    }

    fn check_addition(&self, other: &Self) -> QuantityResult<()> {
        if self.is_compatible_for_addition(other) {
            Ok(())
        } else {
            Err(QuantityError::IncompatibleOperands {
                left: self.quantity_type,
                left_exponent: self.exponent,
                right: other.quantity_type,
                right_exponent: other.exponent,
            })
        }
    }

    /// The type-erased form of this quantity.
    #[must_use]
    pub fn to_base(&self) -> QuantityBase {
        QuantityBase::new(
            self.value,
            self.dimensions(),
            self.nature(),
            OperationType::Direct,
        )
    }

    /// Product of two quantities, resolved by `engine`.
    pub fn multiply_with(
        &self,
        other: &Self,
        engine: &DimensionalAnalysisEngine<'_>,
    ) -> QuantityResult<Self> {
        let value = self.value * other.value;

        if self.quantity_type == other.quantity_type {
            return Ok(Self::combined(
                value,
                self.quantity_type,
                self.exponent.saturating_add(other.exponent),
            ));
        }
        if other.quantity_type == PhysicalQuantityType::Dimensionless {
            return Ok(Self::combined(value, self.quantity_type, self.exponent));
        }
        if self.quantity_type == PhysicalQuantityType::Dimensionless {
            return Ok(Self::combined(value, other.quantity_type, other.exponent));
        }

        let resolution = engine.multiply(
            engine.operand(self.quantity_type, self.exponent),
            engine.operand(other.quantity_type, other.exponent),
        )?;
        Ok(Self::combined(value, resolution.quantity, 1))
    }

    /// Quotient of two quantities, resolved by `engine`.
    pub fn divide_with(
        &self,
        other: &Self,
        engine: &DimensionalAnalysisEngine<'_>,
    ) -> QuantityResult<Self> {
        let value = self.value / other.value;

        if self.quantity_type == other.quantity_type {
            return Ok(Self::combined(
                value,
                self.quantity_type,
                self.exponent.saturating_sub(other.exponent),
            ));
        }
        if other.quantity_type == PhysicalQuantityType::Dimensionless {
            return Ok(Self::combined(value, self.quantity_type, self.exponent));
        }
        if self.quantity_type == PhysicalQuantityType::Dimensionless {
            let exponent = other.exponent.saturating_neg();
            return Ok(Self::combined(value, other.quantity_type, exponent));
        }

        let resolution = engine.divide(
            engine.operand(self.quantity_type, self.exponent),
            engine.operand(other.quantity_type, other.exponent),
        )?;
        Ok(Self::combined(value, resolution.quantity, 1))
    }

    /// Dot product of two vector quantities, resolved by `engine`.
    pub fn dot_with(
        &self,
        other: &Self,
        engine: &DimensionalAnalysisEngine<'_>,
    ) -> QuantityResult<OperationResult> {
        let resolution = engine.dot(
            engine.operand(self.quantity_type, self.exponent),
            engine.operand(other.quantity_type, other.exponent),
        )?;
        Ok(OperationResult::new(
            self.value * other.value,
            resolution.dimensions,
            resolution.nature,
            resolution.operation,
        ))
    }

    /// Cross product of two vector quantities, resolved by `engine`.
    pub fn cross_with(
        &self,
        other: &Self,
        engine: &DimensionalAnalysisEngine<'_>,
    ) -> QuantityResult<OperationResult> {
        let resolution = engine.cross(
            engine.operand(self.quantity_type, self.exponent),
            engine.operand(other.quantity_type, other.exponent),
        )?;
        Ok(OperationResult::new(
            self.value * other.value,
            resolution.dimensions,
            resolution.nature,
            resolution.operation,
        ))
    }

    /// Renders the value in `prefix` units, e.g. `"12500 mV"`.
    ///
    /// Dimensionless values have no symbol to carry a prefix and are always
    /// rendered in base scale.
    #[must_use]
    pub fn to_string_in(&self, prefix: UnitPrefix) -> String {
        let base_symbol = self.quantity_type.base_symbol();
        if base_symbol.is_empty() {
            return format_significant(self.value, 6);
        }
        let number = format_significant(self.value_in(prefix), 6);

        let symbol = format!("{}{}", prefix.symbol(), base_symbol);
        let unit = if self.exponent == 1 {
            symbol
        } else if base_symbol.contains(['/', '·', '²', '³']) {
            format!("({symbol}){}", exponent_glyph(self.exponent))
        } else {
            format!("{symbol}{}", exponent_glyph(self.exponent))
        };
        format!("{number} {unit}")
    }
}

impl PartialEq for PhysicalQuantity {
    fn eq(&self, other: &Self) -> bool {
        self.quantity_type == other.quantity_type
            && self.exponent == other.exponent
            && (self.value - other.value).abs() <= EQUALITY_TOLERANCE
    }
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_in(UnitPrefix::Base))
    }
}

impl Add for PhysicalQuantity {
    type Output = QuantityResult<PhysicalQuantity>;

    fn add(self, rhs: Self) -> Self::Output {
        self.check_addition(&rhs)?;
        Ok(Self {
            value: self.value + rhs.value,
            ..self
        })
    }
}

impl Sub for PhysicalQuantity {
    type Output = QuantityResult<PhysicalQuantity>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.check_addition(&rhs)?;
        Ok(Self {
            value: self.value - rhs.value,
            ..self
        })
    }
}

impl Mul for PhysicalQuantity {
    type Output = QuantityResult<PhysicalQuantity>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply_with(&rhs, &DimensionalAnalysisEngine::global())
    }
}

impl Div for PhysicalQuantity {
    type Output = QuantityResult<PhysicalQuantity>;

    fn div(self, rhs: Self) -> Self::Output {
        self.divide_with(&rhs, &DimensionalAnalysisEngine::global())
    }
}

impl Mul<f64> for PhysicalQuantity {
    type Output = PhysicalQuantity;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            value: self.value * rhs,
            ..self
        }
    }
}

impl Mul<PhysicalQuantity> for f64 {
    type Output = PhysicalQuantity;

    fn mul(self, rhs: PhysicalQuantity) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for PhysicalQuantity {
    type Output = PhysicalQuantity;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            value: self.value / rhs,
            ..self
        }
    }
}

impl Dot for PhysicalQuantity {
    type Output = QuantityResult<OperationResult>;

    fn dot(self, rhs: Self) -> Self::Output {
        self.dot_with(&rhs, &DimensionalAnalysisEngine::global())
    }
}

impl Cross for PhysicalQuantity {
    type Output = QuantityResult<OperationResult>;

    fn cross(self, rhs: Self) -> Self::Output {
        self.cross_with(&rhs, &DimensionalAnalysisEngine::global())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use is_close::is_close;
    use PhysicalQuantityType as Q;

    #[test]
    fn test_prefix_normalization() {
        let millivolts = PhysicalQuantity::with_prefix(500.0, Q::Voltage, UnitPrefix::Milli);
        assert!(is_close!(millivolts.value(), 0.5));
        assert!(is_close!(millivolts.value_in(UnitPrefix::Milli), 500.0));

        let area = PhysicalQuantity::with_exponent(2.0, Q::Length, 2, UnitPrefix::Kilo);
        assert!(is_close!(area.value(), 2.0e6));
        assert!(is_close!(area.value_in(UnitPrefix::Kilo), 2.0));
    }

    #[test]
    fn test_prefix_equivalence() {
        let base = PhysicalQuantity::new(1.0, Q::Voltage);
        let milli = PhysicalQuantity::with_prefix(1000.0, Q::Voltage, UnitPrefix::Milli);
        assert_eq!(base, milli);
    }

    #[test]
    fn test_equality_requires_type_and_exponent() {
        let volts = PhysicalQuantity::new(1.0, Q::Voltage);
        assert_ne!(volts, PhysicalQuantity::new(1.0, Q::Current));
        assert_ne!(
            volts,
            PhysicalQuantity::with_exponent(1.0, Q::Voltage, 2, UnitPrefix::Base)
        );
        assert_ne!(volts, PhysicalQuantity::new(1.0 + 1e-9, Q::Voltage));
    }

    #[test]
    fn test_addition() {
        let a = PhysicalQuantity::new(12.0, Q::Voltage);
        let b = PhysicalQuantity::with_prefix(500.0, Q::Voltage, UnitPrefix::Milli);
        assert_eq!((a + b).unwrap(), PhysicalQuantity::new(12.5, Q::Voltage));
        assert_eq!((a - b).unwrap(), PhysicalQuantity::new(11.5, Q::Voltage));
    }

    #[test]
    fn test_incompatible_addition() {
        let voltage = PhysicalQuantity::new(12.0, Q::Voltage);
        let current = PhysicalQuantity::new(2.0, Q::Current);
        assert_eq!(
            (voltage + current).unwrap_err(),
            QuantityError::IncompatibleOperands {
                left: Q::Voltage,
                left_exponent: 1,
                right: Q::Current,
                right_exponent: 1,
            }
        );

        let squared = PhysicalQuantity::with_exponent(1.0, Q::Voltage, 2, UnitPrefix::Base);
        assert!((voltage - squared).is_err());
    }

    #[test]
    fn test_same_type_combines_exponents() {
        let v = PhysicalQuantity::new(10.0, Q::Voltage);
        let squared = (v * v).unwrap();
        assert_eq!(squared.quantity_type(), Q::Voltage);
        assert_eq!(squared.exponent(), 2);
        assert_eq!(squared.dimensions(), DimensionalFormula::VOLTAGE.raise_to_power(2));

        let ratio = (v / v).unwrap();
        assert_eq!(ratio.quantity_type(), Q::Dimensionless);
        assert_eq!(ratio.exponent(), 1);
        assert!(is_close!(ratio.value(), 1.0));
    }

    #[test]
    fn test_dimensionless_operand_acts_as_scalar() {
        let gain = PhysicalQuantity::new(2.0, Q::Dimensionless);
        let current = PhysicalQuantity::new(3.0, Q::Current);
        assert_eq!((gain * current).unwrap(), PhysicalQuantity::new(6.0, Q::Current));
        assert_eq!((current / gain).unwrap(), PhysicalQuantity::new(1.5, Q::Current));

        let inverse = (gain / current).unwrap();
        assert_eq!(inverse.quantity_type(), Q::Current);
        assert_eq!(inverse.exponent(), -1);
    }

    #[test]
    fn test_different_types_use_engine() {
        let voltage = PhysicalQuantity::new(120.0, Q::Voltage);
        let current = PhysicalQuantity::new(5.0, Q::Current);
        let power = (voltage * current).unwrap();
        assert_eq!(power.quantity_type(), Q::Power);
        assert_eq!(power.exponent(), 1);
        assert!(is_close!(power.value(), 600.0));
    }

    #[test]
    fn test_unresolvable_product() {
        let temperature = PhysicalQuantity::new(25.0, Q::Temperature);
        let charge = PhysicalQuantity::new(1.0, Q::Charge);
        assert!(matches!(
            temperature * charge,
            Err(QuantityError::UnresolvableDimension { .. })
        ));
    }

    #[test]
    fn test_scaling_by_number() {
        let force = PhysicalQuantity::new(2.0, Q::Force);
        assert_eq!(force * 3.0, PhysicalQuantity::new(6.0, Q::Force));
        assert_eq!(3.0 * force, PhysicalQuantity::new(6.0, Q::Force));
        assert_eq!(force / 4.0, PhysicalQuantity::new(0.5, Q::Force));
    }

    #[test]
    fn test_dot_and_cross() {
        let force = PhysicalQuantity::new(10.0, Q::Force);
        let displacement = PhysicalQuantity::new(3.0, Q::Displacement);

        let work = force.dot(displacement).unwrap();
        assert_eq!(work.nature(), QuantityNature::Scalar);
        assert_eq!(work.created_by(), OperationType::DotProduct);
        assert!(is_close!(work.value(), 30.0));
        assert_eq!(
            work.to_physical_quantity().unwrap(),
            PhysicalQuantity::new(30.0, Q::Energy)
        );

        let torque = displacement.cross(force).unwrap();
        assert_eq!(torque.nature(), QuantityNature::Pseudovector);
        assert_eq!(torque.dimensions(), DimensionalFormula::ENERGY);
    }

    #[test]
    fn test_dot_requires_vectors() {
        let energy = PhysicalQuantity::new(1.0, Q::Energy);
        let force = PhysicalQuantity::new(1.0, Q::Force);
        assert!(matches!(
            energy.dot(force),
            Err(QuantityError::UnsupportedNatureForOperation { .. })
        ));
    }

    #[test]
    fn test_explicit_engine() {
        let definitions = PhysicsDefinitions::new().unwrap();
        let engine = DimensionalAnalysisEngine::with_config(&definitions, EngineConfig::strict());
        let voltage = PhysicalQuantity::new(12.0, Q::Voltage);
        let resistance = PhysicalQuantity::new(4.0, Q::Resistance);
        let current = voltage.divide_with(&resistance, &engine).unwrap();
        assert_eq!(current, PhysicalQuantity::new(3.0, Q::Current));
    }

    #[test]
    fn test_formatting() {
        let voltage = PhysicalQuantity::new(12.5, Q::Voltage);
        assert_eq!(voltage.to_string(), "12.5 V");
        assert_eq!(voltage.to_string_in(UnitPrefix::Milli), "12500 mV");

        let resistance = PhysicalQuantity::new(1000.0, Q::Resistance);
        assert_eq!(resistance.to_string_in(UnitPrefix::Kilo), "1 kΩ");

        let squared = PhysicalQuantity::with_exponent(4.0, Q::Length, 2, UnitPrefix::Base);
        assert_eq!(squared.to_string(), "4 m²");

        let velocity_squared =
            PhysicalQuantity::with_exponent(4.0, Q::Velocity, 2, UnitPrefix::Base);
        assert_eq!(velocity_squared.to_string(), "4 (m/s)²");

        let ratio = PhysicalQuantity::new(0.5, Q::Dimensionless);
        assert_eq!(ratio.to_string(), "0.5");
        assert_eq!(ratio.to_string_in(UnitPrefix::Milli), "0.5");
    }

    #[test]
    fn test_zero_exponent_is_dimensionless() {
        let voltage = PhysicalQuantity::new(3.0, Q::Voltage);
        let ratio = (voltage / voltage).unwrap();

        let constructed = PhysicalQuantity::with_exponent(1.0, Q::Voltage, 0, UnitPrefix::Kilo);
        assert_eq!(constructed.quantity_type(), Q::Dimensionless);
        assert_eq!(constructed.exponent(), 1);
        assert_eq!(constructed, ratio);
        assert_eq!(constructed.to_string(), "1");

        let decoded: PhysicalQuantity =
            serde_json::from_str(r#"{"value":1.0,"quantity_type":"Voltage","exponent":0}"#)
                .unwrap();
        assert_eq!(decoded, ratio);
    }

    #[test]
    fn test_huge_exponents_do_not_overflow() {
        let big = PhysicalQuantity::with_exponent(1.0, Q::Voltage, 1 << 30, UnitPrefix::Base);
        assert_eq!(big.dimensions().mass, i8::MAX);

        let squared = (big * big).unwrap();
        assert_eq!(squared.exponent(), i32::MAX);

        let floor = PhysicalQuantity::with_exponent(1.0, Q::Voltage, i32::MIN, UnitPrefix::Base);
        let quotient = (floor / big).unwrap();
        assert_eq!(quotient.exponent(), i32::MIN);

        let inverse = (PhysicalQuantity::new(2.0, Q::Dimensionless) / floor).unwrap();
        assert_eq!(inverse.exponent(), i32::MAX);
    }

    #[test]
    fn test_parse() {
        let parsed = PhysicalQuantity::parse(" 12.5 ", Q::Voltage).unwrap();
        assert_eq!(parsed, PhysicalQuantity::new(12.5, Q::Voltage));

        let prefixed =
            PhysicalQuantity::parse_with_prefix("470", Q::Resistance, UnitPrefix::Kilo).unwrap();
        assert!(is_close!(prefixed.value(), 470_000.0));

        assert_eq!(
            PhysicalQuantity::parse("twelve", Q::Voltage).unwrap_err(),
            QuantityError::MalformedNumber("twelve".to_string())
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let quantity = PhysicalQuantity::with_exponent(3.0, Q::Current, 2, UnitPrefix::Base);
        let json = serde_json::to_string(&quantity).unwrap();
        assert_eq!(
            json,
            r#"{"value":3.0,"quantity_type":"Current","exponent":2}"#
        );
        let back: PhysicalQuantity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, quantity);

        let defaulted: PhysicalQuantity =
            serde_json::from_str(r#"{"value":1.5,"quantity_type":"Power"}"#).unwrap();
        assert_eq!(defaulted.exponent(), 1);
    }
}
