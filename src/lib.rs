//! Physical quantities with automatic dimensional analysis.
//!
//! ```
//! use physq::prelude::*;
//!
//! let voltage = PhysicalQuantity::new(120.0, PhysicalQuantityType::Voltage);
//! let current = PhysicalQuantity::with_prefix(5000.0, PhysicalQuantityType::Current, UnitPrefix::Milli);
//!
//! let power = (voltage * current)?;
//! assert_eq!(power.quantity_type(), PhysicalQuantityType::Power);
//! assert_eq!(power.to_string_in(UnitPrefix::Kilo), "0.6 kW");
//! # Ok::<(), QuantityError>(())
//! ```

pub use physq_core::{config, errors, quantity, units};
pub use physq_core::{EngineConfig, QuantityError, QuantityResult};

/// The types needed for everyday use.
pub mod prelude {
    pub use physq_core::errors::{QuantityError, QuantityResult};
    pub use physq_core::quantity::{
        Cross, Displacement, Dot, ElectricCurrent, Energy, Force, OperationResult,
        PhysicalQuantity, Power, Resistance, Torque, Voltage,
    };
    pub use physq_core::units::{
        DimensionalAnalysisEngine, DimensionalFormula, OperationType, PhysicalQuantityType,
        QuantityNature, UnitPrefix,
    };
    pub use physq_core::EngineConfig;
}
