//! Typed error handling for the order ledger
//!
//! This module provides the error hierarchy used across the crate so callers
//! can match on specific failures instead of dealing with `anyhow::Error`.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: Errors related to order input validation
//! - [`StorageError`]: Errors related to key-value store backends
//! - [`ConfigError`]: Errors related to configuration parsing and validation
//!
//! Only validation errors ever reach the caller of
//! [`OrderRepository::save`](crate::ledger::OrderRepository::save). Storage
//! errors are logged and swallowed by the repository; the in-memory
//! collection stays authoritative.
//!
//! # Example
//!
//! ```rust,ignore
//! use kodhiyas::prelude::*;
//!
//! match repo.save(draft) {
//!     Ok(order) => println!("Saved {}", order.id),
//!     Err(LedgerError::Validation(ValidationError::FieldError { field, .. })) => {
//!         println!("Please fill in {}", field);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use serde::Serialize;
use std::fmt;

/// The main error type for the order ledger
#[derive(Debug)]
pub enum LedgerError {
    /// Validation errors (rejected save)
    Validation(ValidationError),

    /// Storage backend errors
    Storage(StorageError),

    /// Configuration errors
    Config(ConfigError),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::Validation(e) => write!(f, "{}", e),
            LedgerError::Storage(e) => write!(f, "{}", e),
            LedgerError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LedgerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LedgerError::Validation(e) => Some(e),
            LedgerError::Storage(e) => Some(e),
            LedgerError::Config(e) => Some(e),
        }
    }
}

impl LedgerError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            LedgerError::Validation(_) => "VALIDATION_ERROR",
            LedgerError::Storage(e) => e.error_code(),
            LedgerError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Returns true if this is a validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, LedgerError::Validation(_))
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to order input validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Single field validation error
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    FieldErrors(Vec<FieldValidationError>),
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    /// Shorthand for a required field that was left blank
    pub fn required(field: &str) -> Self {
        ValidationError::FieldError {
            field: field.to_string(),
            message: "is required".to_string(),
        }
    }

    /// Names of every field that failed
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ValidationError::FieldError { field, .. } => vec![field.as_str()],
            ValidationError::FieldErrors(errors) => {
                errors.iter().map(|e| e.field.as_str()).collect()
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldError { field, message } => {
                write!(f, "Validation failed for '{}': {}", field, message)
            }
            ValidationError::FieldErrors(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                write!(f, "Validation failed for fields: {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for LedgerError {
    fn from(err: ValidationError) -> Self {
        LedgerError::Validation(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to key-value store backends
#[derive(Debug)]
pub enum StorageError {
    /// Filesystem or OS level failure
    Io { message: String },

    /// The stored blob could not be encoded or decoded
    Serialization { key: String, message: String },

    /// The backend rejected the operation (quota, map full, lock poisoned)
    Backend { backend: String, message: String },

    /// Backend not available
    Unavailable { backend: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io { message } => write!(f, "Storage I/O error: {}", message),
            StorageError::Serialization { key, message } => {
                write!(f, "Failed to serialize/deserialize '{}': {}", key, message)
            }
            StorageError::Backend { backend, message } => {
                write!(f, "{} storage error: {}", backend, message)
            }
            StorageError::Unavailable { backend } => {
                write!(f, "Storage backend '{}' is unavailable", backend)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl StorageError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::Io { .. } => "STORAGE_IO_ERROR",
            StorageError::Serialization { .. } => "STORAGE_SERIALIZATION_ERROR",
            StorageError::Backend { .. } => "STORAGE_BACKEND_ERROR",
            StorageError::Unavailable { .. } => "STORAGE_UNAVAILABLE",
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io {
            message: err.to_string(),
        }
    }
}

impl From<StorageError> for LedgerError {
    fn from(err: StorageError) -> Self {
        LedgerError::Storage(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Configuration file not found
    FileNotFound { path: String },

    /// A configuration value is not usable
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for config field '{}': {}",
                    value, field, message
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for LedgerError {
    fn from(err: ConfigError) -> Self {
        LedgerError::Config(err)
    }
}
