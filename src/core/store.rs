//! Key-value store port
//!
//! The ledger persists into an opaque string-keyed slot. Implementations
//! provide the three primitive operations; everything about the order blob
//! (key name, JSON encoding, fail-soft loading) lives in
//! [`OrderStorage`](crate::storage::OrderStorage).

use crate::core::error::StorageError;

/// Minimal key-value storage contract
///
/// The ledger does not care about the underlying mechanism: an in-memory map,
/// an embedded database, anything that can hold a string per key.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Short backend name used in logs
    fn backend_name(&self) -> &'static str;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }

    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }
}
