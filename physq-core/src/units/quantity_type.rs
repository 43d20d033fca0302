//! The closed vocabulary of named physical quantities.
//!
//! Dimensions and natures for each member live in the
//! [`registry`](super::registry); this module only names the quantities and
//! their SI base-unit symbols.

use crate::errors::QuantityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named physical quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PhysicalQuantityType {
    Dimensionless,

    // Base SI quantities
    Mass,
    Length,
    Time,
    Temperature,
    AmountOfSubstance,

    // Geometric and kinematic quantities
    Area,
    Volume,
    Displacement,
    Velocity,
    Acceleration,

    // Mechanical quantities
    Force,
    Momentum,
    Energy,
    Power,
    Torque,
    AngularMomentum,

    // Electrical quantities
    Voltage,
    Current,
    Resistance,
    Charge,
    Capacitance,
    Inductance,
    Conductance,
    ElectricField,
    MagneticField,
    MagneticFlux,
    Frequency,
    Resistivity,
    Conductivity,
}

impl PhysicalQuantityType {
    /// Every member of the vocabulary, in declaration order.
    pub const ALL: [PhysicalQuantityType; 30] = [
        PhysicalQuantityType::Dimensionless,
        PhysicalQuantityType::Mass,
        PhysicalQuantityType::Length,
        PhysicalQuantityType::Time,
        PhysicalQuantityType::Temperature,
        PhysicalQuantityType::AmountOfSubstance,
        PhysicalQuantityType::Area,
        PhysicalQuantityType::Volume,
        PhysicalQuantityType::Displacement,
        PhysicalQuantityType::Velocity,
        PhysicalQuantityType::Acceleration,
        PhysicalQuantityType::Force,
        PhysicalQuantityType::Momentum,
        PhysicalQuantityType::Energy,
        PhysicalQuantityType::Power,
        PhysicalQuantityType::Torque,
        PhysicalQuantityType::AngularMomentum,
        PhysicalQuantityType::Voltage,
        PhysicalQuantityType::Current,
        PhysicalQuantityType::Resistance,
        PhysicalQuantityType::Charge,
        PhysicalQuantityType::Capacitance,
        PhysicalQuantityType::Inductance,
        PhysicalQuantityType::Conductance,
        PhysicalQuantityType::ElectricField,
        PhysicalQuantityType::MagneticField,
        PhysicalQuantityType::MagneticFlux,
        PhysicalQuantityType::Frequency,
        PhysicalQuantityType::Resistivity,
        PhysicalQuantityType::Conductivity,
    ];

    /// Position of this type in [`PhysicalQuantityType::ALL`].
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Variant name, as used by `Display` and `FromStr`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            PhysicalQuantityType::Dimensionless => "Dimensionless",
            PhysicalQuantityType::Mass => "Mass",
            PhysicalQuantityType::Length => "Length",
            PhysicalQuantityType::Time => "Time",
            PhysicalQuantityType::Temperature => "Temperature",
            PhysicalQuantityType::AmountOfSubstance => "AmountOfSubstance",
            PhysicalQuantityType::Area => "Area",
            PhysicalQuantityType::Volume => "Volume",
            PhysicalQuantityType::Displacement => "Displacement",
            PhysicalQuantityType::Velocity => "Velocity",
            PhysicalQuantityType::Acceleration => "Acceleration",
            PhysicalQuantityType::Force => "Force",
            PhysicalQuantityType::Momentum => "Momentum",
            PhysicalQuantityType::Energy => "Energy",
            PhysicalQuantityType::Power => "Power",
            PhysicalQuantityType::Torque => "Torque",
            PhysicalQuantityType::AngularMomentum => "AngularMomentum",
            PhysicalQuantityType::Voltage => "Voltage",
            PhysicalQuantityType::Current => "Current",
            PhysicalQuantityType::Resistance => "Resistance",
            PhysicalQuantityType::Charge => "Charge",
            PhysicalQuantityType::Capacitance => "Capacitance",
            PhysicalQuantityType::Inductance => "Inductance",
            PhysicalQuantityType::Conductance => "Conductance",
            PhysicalQuantityType::ElectricField => "ElectricField",
            PhysicalQuantityType::MagneticField => "MagneticField",
            PhysicalQuantityType::MagneticFlux => "MagneticFlux",
            PhysicalQuantityType::Frequency => "Frequency",
            PhysicalQuantityType::Resistivity => "Resistivity",
            PhysicalQuantityType::Conductivity => "Conductivity",
        }
    }

    /// Symbol of the SI unit this quantity is stored in.
    #[must_use]
    pub const fn base_symbol(&self) -> &'static str {
        match self {
            PhysicalQuantityType::Dimensionless => "",
            PhysicalQuantityType::Mass => "kg",
            PhysicalQuantityType::Length => "m",
            PhysicalQuantityType::Time => "s",
            PhysicalQuantityType::Temperature => "K",
            PhysicalQuantityType::AmountOfSubstance => "mol",
            PhysicalQuantityType::Area => "m²",
            PhysicalQuantityType::Volume => "m³",
            PhysicalQuantityType::Displacement => "m",
            PhysicalQuantityType::Velocity => "m/s",
            PhysicalQuantityType::Acceleration => "m/s²",
            PhysicalQuantityType::Force => "N",
            PhysicalQuantityType::Momentum => "kg·m/s",
            PhysicalQuantityType::Energy => "J",
            PhysicalQuantityType::Power => "W",
            PhysicalQuantityType::Torque => "N·m",
            PhysicalQuantityType::AngularMomentum => "kg·m²/s",
            PhysicalQuantityType::Voltage => "V",
            PhysicalQuantityType::Current => "A",
            PhysicalQuantityType::Resistance => "Ω",
            PhysicalQuantityType::Charge => "C",
            PhysicalQuantityType::Capacitance => "F",
            PhysicalQuantityType::Inductance => "H",
            PhysicalQuantityType::Conductance => "S",
            PhysicalQuantityType::ElectricField => "V/m",
            PhysicalQuantityType::MagneticField => "T",
            PhysicalQuantityType::MagneticFlux => "Wb",
            PhysicalQuantityType::Frequency => "Hz",
            PhysicalQuantityType::Resistivity => "Ω·m",
            PhysicalQuantityType::Conductivity => "S/m",
        }
    }
}

impl fmt::Display for PhysicalQuantityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PhysicalQuantityType {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PhysicalQuantityType::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| QuantityError::UnknownQuantityType(s.to_string()))
    }
}
