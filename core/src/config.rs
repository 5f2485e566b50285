//! Engine configuration.
//!
//! ```toml
//! # intestacy.toml
//! statutory_legacy = 322000.00
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Statutory legacy for England & Wales, in pounds.
pub const STATUTORY_LEGACY: Decimal = Decimal::from_parts(32_200_000, 0, 0, false, 2);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Statutory legacy must be greater than zero, got {0}")]
    NonPositiveLegacy(Decimal),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Amount a surviving spouse takes before the remainder is split with children
    pub statutory_legacy: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            statutory_legacy: STATUTORY_LEGACY,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(raw)?;
        config.validate()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.statutory_legacy <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveLegacy(self.statutory_legacy));
        }
        Ok(self)
    }
}
