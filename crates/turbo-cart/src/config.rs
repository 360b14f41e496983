//! Cart configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CartError;

/// Slot name the cart snapshot lives under.
///
/// Changing it orphans every snapshot written under the old name.
pub const DEFAULT_STORAGE_KEY: &str = "@GoMarkeplace";

/// Cart store configuration.
///
/// ```toml
/// storage_key = "@GoMarkeplace"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Key of the persistence slot shared by load and save.
    pub storage_key: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl CartConfig {
    /// Parse config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, CartError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CartError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CartError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), CartError> {
        if self.storage_key.trim().is_empty() {
            return Err(CartError::Config("storage_key must not be empty".to_string()));
        }
        Ok(())
    }
}
