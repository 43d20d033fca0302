//! Engine configuration.
//!
//! Configuration is plain data and can be read from TOML:
//!
//! ```
//! use physq_core::config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str("operation_fallback = false").unwrap();
//! assert!(!config.operation_fallback);
//! ```

use crate::errors::{QuantityError, QuantityResult};
use serde::{Deserialize, Serialize};

/// Behaviour switches for [`DimensionalAnalysisEngine`](crate::units::DimensionalAnalysisEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Retry a failed exact lookup by (formula, nature) alone, ignoring the
    /// operation that produced the value.
    ///
    /// Every lookup that only succeeds this way is logged at `warn` level.
    pub operation_fallback: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            operation_fallback: true,
        }
    }
}

impl EngineConfig {
    /// Exact (formula, nature, operation) lookups only.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            operation_fallback: false,
        }
    }

    /// Parses a TOML document. Missing keys take their default values.
    pub fn from_toml_str(input: &str) -> QuantityResult<Self> {
        toml::from_str(input).map_err(|e| QuantityError::InvalidConfig(e.to_string()))
    }

    pub fn to_toml_string(&self) -> QuantityResult<String> {
        toml::to_string(self).map_err(|e| QuantityError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allows_fallback() {
        assert!(EngineConfig::default().operation_fallback);
        assert!(!EngineConfig::strict().operation_fallback);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig::strict();
        let text = config.to_toml_string().unwrap();
        assert_eq!(text.trim(), "operation_fallback = false");
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_document() {
        let err = EngineConfig::from_toml_str("operation_fallback = \"sometimes\"").unwrap_err();
        assert!(matches!(err, QuantityError::InvalidConfig(_)));
    }
}
