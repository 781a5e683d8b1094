//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::storage::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which key-value store backs the ledger
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process memory only, nothing survives a restart
    #[default]
    Memory,
    /// Embedded LMDB environment (requires the `lmdb` feature)
    Lmdb,
}

/// Storage section of the configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key holding the order blob
    #[serde(default = "default_key")]
    pub key: String,

    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory of the LMDB environment
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            backend: StorageBackend::default(),
            path: None,
        }
    }
}

/// Complete configuration for the ledger
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

impl LedgerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_string(),
            },
            _ => ConfigError::ParseError {
                file: Some(path.to_string()),
                message: e.to_string(),
            },
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// In-memory storage under the default key
    pub fn default_config() -> Self {
        Self::default()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.key".to_string(),
                value: self.storage.key.clone(),
                message: "must not be blank".to_string(),
            });
        }
        if self.storage.backend == StorageBackend::Lmdb && self.storage.path.is_none() {
            return Err(ConfigError::InvalidValue {
                field: "storage.path".to_string(),
                value: String::new(),
                message: "the lmdb backend needs a path".to_string(),
            });
        }
        Ok(())
    }
}
