//! Engine configuration and serialization through the public API.

use physq::prelude::*;
use physq::units::{
    registry::standard_definitions, PhysicsDefinitions, QuantityDefinition,
};

/// The standard table with power no longer registered as a dot product.
fn definitions_without_dot_power() -> PhysicsDefinitions {
    let table: Vec<QuantityDefinition> = standard_definitions()
        .into_iter()
        .map(|d| match d.quantity {
            PhysicalQuantityType::Power => QuantityDefinition {
                arises_from: &[OperationType::Direct, OperationType::ScalarMultiply],
                ..d
            },
            _ => d,
        })
        .collect();
    PhysicsDefinitions::from_definitions(table).unwrap()
}

#[test]
fn test_fallback_enabled_by_default() {
    let definitions = definitions_without_dot_power();
    let engine = DimensionalAnalysisEngine::new(&definitions);

    let force = PhysicalQuantity::new(5.0, PhysicalQuantityType::Force);
    let velocity = PhysicalQuantity::new(2.0, PhysicalQuantityType::Velocity);
    let power = force.dot_with(&velocity, &engine).unwrap();
    assert_eq!(power.dimensions(), DimensionalFormula::POWER);
}

#[test]
fn test_strict_config_from_toml() {
    let definitions = definitions_without_dot_power();
    let config = EngineConfig::from_toml_str("operation_fallback = false").unwrap();
    let engine = DimensionalAnalysisEngine::with_config(&definitions, config);

    let force = PhysicalQuantity::new(5.0, PhysicalQuantityType::Force);
    let velocity = PhysicalQuantity::new(2.0, PhysicalQuantityType::Velocity);
    assert!(matches!(
        force.dot_with(&velocity, &engine),
        Err(QuantityError::UnresolvableDimension {
            operation: OperationType::DotProduct,
            ..
        })
    ));

    // Exact keys are unaffected
    let voltage = PhysicalQuantity::new(12.0, PhysicalQuantityType::Voltage);
    let current = PhysicalQuantity::new(2.0, PhysicalQuantityType::Current);
    let power = voltage.multiply_with(&current, &engine).unwrap();
    assert_eq!(power.quantity_type(), PhysicalQuantityType::Power);
}

#[test]
fn test_invalid_config() {
    assert!(matches!(
        EngineConfig::from_toml_str("operation_fallback = 3"),
        Err(QuantityError::InvalidConfig(_))
    ));
}

#[test]
fn test_quantities_in_toml() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Circuit {
        supply: PhysicalQuantity,
        load: PhysicalQuantity,
    }

    let text = r#"
        [supply]
        value = 12.0
        quantity_type = "Voltage"

        [load]
        value = 470.0
        quantity_type = "Resistance"
        exponent = 1
    "#;
    let circuit: Circuit = toml::from_str(text).unwrap();
    let current = (circuit.supply / circuit.load).unwrap();
    assert_eq!(current.quantity_type(), PhysicalQuantityType::Current);
    assert_eq!(current.to_string_in(UnitPrefix::Milli), "25.5319 mA");

    let back = toml::to_string(&circuit).unwrap();
    let reparsed: Circuit = toml::from_str(&back).unwrap();
    assert_eq!(reparsed.supply, circuit.supply);
    assert_eq!(reparsed.load, circuit.load);
}

#[test]
fn test_tags_serialize_by_name() {
    assert_eq!(
        serde_json::to_string(&QuantityNature::Pseudovector).unwrap(),
        r#""Pseudovector""#
    );
    assert_eq!(
        serde_json::to_string(&UnitPrefix::Kilo).unwrap(),
        r#""Kilo""#
    );
    let formula: DimensionalFormula = serde_json::from_str(
        r#"{"mass":1,"length":2,"time":-3,"current":-1,"temperature":0,"amount":0,"luminosity":0}"#,
    )
    .unwrap();
    assert_eq!(formula, DimensionalFormula::VOLTAGE);
}
