//! Dimensional formulas over the SI base dimensions.
//!
//! A [`DimensionalFormula`] is a vector of seven integer exponents, one per
//! SI base dimension:
//! - Mass (M)
//! - Length (L)
//! - Time (T)
//! - Electric current (I)
//! - Temperature (Θ)
//! - Amount of substance (N)
//! - Luminous intensity (J)
//!
//! Multiplying two quantities adds their exponents, dividing subtracts them.
//! The all-zero formula is the unique dimensionless formula.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Div, Mul};

/// The dimensional class of a physical quantity, independent of units.
///
/// For example:
/// - Velocity is L·T⁻¹ (length = 1, time = -1)
/// - Force is M·L·T⁻² (mass = 1, length = 1, time = -2)
/// - Voltage is M·L²·T⁻³·I⁻¹
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct DimensionalFormula {
    /// Mass exponent (M)
    pub mass: i8,
    /// Length exponent (L)
    pub length: i8,
    /// Time exponent (T)
    pub time: i8,
    /// Electric current exponent (I)
    pub current: i8,
    /// Temperature exponent (Θ)
    pub temperature: i8,
    /// Amount of substance exponent (N)
    pub amount: i8,
    /// Luminous intensity exponent (J)
    pub luminosity: i8,
}

/// Clamps an exponent product into the `i8` range.
const fn saturate(value: i64) -> i8 {
    if value > i8::MAX as i64 {
        i8::MAX
    } else if value < i8::MIN as i64 {
        i8::MIN
    } else {
        value as i8
    }
}

impl DimensionalFormula {
    /// The dimensionless formula (all exponents zero).
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0, 0, 0, 0);

    /// Creates a formula with the specified exponents.
    #[must_use]
    pub const fn new(
        mass: i8,
        length: i8,
        time: i8,
        current: i8,
        temperature: i8,
        amount: i8,
        luminosity: i8,
    ) -> Self {
        Self {
            mass,
            length,
            time,
            current,
            temperature,
            amount,
            luminosity,
        }
    }

    /// Returns the dimensionless formula.
    #[must_use]
    pub const fn dimensionless() -> Self {
        Self::DIMENSIONLESS
    }

    /// Mass (M¹).
    pub const MASS: Self = Self::new(1, 0, 0, 0, 0, 0, 0);
    /// Length (L¹).
    pub const LENGTH: Self = Self::new(0, 1, 0, 0, 0, 0, 0);
    /// Time (T¹).
    pub const TIME: Self = Self::new(0, 0, 1, 0, 0, 0, 0);
    /// Electric current (I¹).
    pub const CURRENT: Self = Self::new(0, 0, 0, 1, 0, 0, 0);
    /// Temperature (Θ¹).
    pub const TEMPERATURE: Self = Self::new(0, 0, 0, 0, 1, 0, 0);
    /// Amount of substance (N¹).
    pub const AMOUNT: Self = Self::new(0, 0, 0, 0, 0, 1, 0);
    /// Luminous intensity (J¹).
    pub const LUMINOSITY: Self = Self::new(0, 0, 0, 0, 0, 0, 1);

    // Derived formulas used by the standard definitions

    /// Area (L²).
    pub const AREA: Self = Self::new(0, 2, 0, 0, 0, 0, 0);
    /// Volume (L³).
    pub const VOLUME: Self = Self::new(0, 3, 0, 0, 0, 0, 0);
    /// Velocity (L·T⁻¹).
    pub const VELOCITY: Self = Self::new(0, 1, -1, 0, 0, 0, 0);
    /// Acceleration (L·T⁻²).
    pub const ACCELERATION: Self = Self::new(0, 1, -2, 0, 0, 0, 0);
    /// Momentum (M·L·T⁻¹).
    pub const MOMENTUM: Self = Self::new(1, 1, -1, 0, 0, 0, 0);
    /// Angular momentum (M·L²·T⁻¹).
    pub const ANGULAR_MOMENTUM: Self = Self::new(1, 2, -1, 0, 0, 0, 0);
    /// Force (M·L·T⁻²).
    pub const FORCE: Self = Self::new(1, 1, -2, 0, 0, 0, 0);
    /// Energy and torque (M·L²·T⁻²).
    pub const ENERGY: Self = Self::new(1, 2, -2, 0, 0, 0, 0);
    /// Power (M·L²·T⁻³).
    pub const POWER: Self = Self::new(1, 2, -3, 0, 0, 0, 0);
    /// Frequency (T⁻¹).
    pub const FREQUENCY: Self = Self::new(0, 0, -1, 0, 0, 0, 0);

    /// Voltage (M·L²·T⁻³·I⁻¹).
    pub const VOLTAGE: Self = Self::new(1, 2, -3, -1, 0, 0, 0);
    /// Resistance (M·L²·T⁻³·I⁻²).
    pub const RESISTANCE: Self = Self::new(1, 2, -3, -2, 0, 0, 0);
    /// Conductance (M⁻¹·L⁻²·T³·I²).
    pub const CONDUCTANCE: Self = Self::new(-1, -2, 3, 2, 0, 0, 0);
    /// Charge (T·I).
    pub const CHARGE: Self = Self::new(0, 0, 1, 1, 0, 0, 0);
    /// Capacitance (M⁻¹·L⁻²·T⁴·I²).
    pub const CAPACITANCE: Self = Self::new(-1, -2, 4, 2, 0, 0, 0);
    /// Inductance (M·L²·T⁻²·I⁻²).
    pub const INDUCTANCE: Self = Self::new(1, 2, -2, -2, 0, 0, 0);
    /// Electric field (M·L·T⁻³·I⁻¹).
    pub const ELECTRIC_FIELD: Self = Self::new(1, 1, -3, -1, 0, 0, 0);
    /// Magnetic flux density (M·T⁻²·I⁻¹).
    pub const MAGNETIC_FIELD: Self = Self::new(1, 0, -2, -1, 0, 0, 0);
    /// Magnetic flux (M·L²·T⁻²·I⁻¹).
    pub const MAGNETIC_FLUX: Self = Self::new(1, 2, -2, -1, 0, 0, 0);
    /// Resistivity (M·L³·T⁻³·I⁻²).
    pub const RESISTIVITY: Self = Self::new(1, 3, -3, -2, 0, 0, 0);
    /// Conductivity (M⁻¹·L⁻³·T³·I²).
    pub const CONDUCTIVITY: Self = Self::new(-1, -3, 3, 2, 0, 0, 0);

    /// Returns true if every exponent is zero.
    #[must_use]
    pub const fn is_dimensionless(&self) -> bool {
        self.mass == 0
            && self.length == 0
            && self.time == 0
            && self.current == 0
            && self.temperature == 0
            && self.amount == 0
            && self.luminosity == 0
    }

    /// Component-wise sum of exponents (the formula of a product).
    #[must_use]
    pub const fn multiply(&self, other: &Self) -> Self {
        Self {
            mass: saturate(self.mass as i64 + other.mass as i64),
            length: saturate(self.length as i64 + other.length as i64),
            time: saturate(self.time as i64 + other.time as i64),
            current: saturate(self.current as i64 + other.current as i64),
            temperature: saturate(self.temperature as i64 + other.temperature as i64),
            amount: saturate(self.amount as i64 + other.amount as i64),
            luminosity: saturate(self.luminosity as i64 + other.luminosity as i64),
        }
    }

    /// Component-wise difference of exponents (the formula of a quotient).
    #[must_use]
    pub const fn divide(&self, other: &Self) -> Self {
        Self {
            mass: saturate(self.mass as i64 - other.mass as i64),
            length: saturate(self.length as i64 - other.length as i64),
            time: saturate(self.time as i64 - other.time as i64),
            current: saturate(self.current as i64 - other.current as i64),
            temperature: saturate(self.temperature as i64 - other.temperature as i64),
            amount: saturate(self.amount as i64 - other.amount as i64),
            luminosity: saturate(self.luminosity as i64 - other.luminosity as i64),
        }
    }

    /// Raises this formula to an integer power.
    ///
    /// A power of 1 returns the formula unchanged and a power of 0 returns
    /// the dimensionless formula.
    #[must_use]
    pub const fn raise_to_power(&self, exponent: i32) -> Self {
        if exponent == 1 {
            return *self;
        }
        if exponent == 0 {
            return Self::DIMENSIONLESS;
        }
        Self {
            mass: saturate(self.mass as i64 * exponent as i64),
            length: saturate(self.length as i64 * exponent as i64),
            time: saturate(self.time as i64 * exponent as i64),
            current: saturate(self.current as i64 * exponent as i64),
            temperature: saturate(self.temperature as i64 * exponent as i64),
            amount: saturate(self.amount as i64 * exponent as i64),
            luminosity: saturate(self.luminosity as i64 * exponent as i64),
        }
    }

    /// Exponents paired with the long dimension names, in canonical order.
    fn named_exponents(&self) -> [(i8, &'static str); 7] {
        [
            (self.mass, "Mass"),
            (self.length, "Length"),
            (self.time, "Time"),
            (self.current, "ElectricCurrent"),
            (self.temperature, "Temperature"),
            (self.amount, "AmountOfSubstance"),
            (self.luminosity, "LuminousIntensity"),
        ]
    }
}

impl Mul for DimensionalFormula {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Div for DimensionalFormula {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.divide(&rhs)
    }
}

impl fmt::Display for DimensionalFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "Dimensionless");
        }

        let parts: Vec<String> = self
            .named_exponents()
            .into_iter()
            .filter(|(exp, _)| *exp != 0)
            .map(|(exp, name)| {
                if exp == 1 {
                    name.to_string()
                } else {
                    format!("{name}^{exp}")
                }
            })
            .collect();

        write!(f, "{}", parts.join(" "))
    }
}
