//! LedgerBuilder for assembling a repository from its collaborators

use crate::config::{LedgerConfig, StorageBackend};
use crate::core::error::{ConfigError, LedgerError};
use crate::core::id::{IdGenerator, UuidIdGenerator};
use crate::core::store::KeyValueStore;
use crate::ledger::repository::OrderRepository;
use crate::storage::{DEFAULT_STORAGE_KEY, InMemoryStore, OrderStorage};

/// Repository over a store chosen at runtime
pub type DynRepository = OrderRepository<Box<dyn KeyValueStore>>;

/// Builder for an [`OrderRepository`] with injected storage and id generation
///
/// # Example
///
/// ```ignore
/// let repo = LedgerBuilder::new()
///     .with_store(InMemoryStore::new())
///     .with_id_generator(SequentialIdGenerator::default())
///     .build();
/// ```
pub struct LedgerBuilder {
    store: Option<Box<dyn KeyValueStore>>,
    storage_key: String,
    ids: Option<Box<dyn IdGenerator>>,
}

impl LedgerBuilder {
    /// Create a new LedgerBuilder
    pub fn new() -> Self {
        Self {
            store: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            ids: None,
        }
    }

    /// Start from a configuration, opening the configured backend
    pub fn from_config(config: &LedgerConfig) -> Result<Self, LedgerError> {
        let store = open_backend(config)?;
        Ok(Self::new()
            .with_boxed_store(store)
            .with_storage_key(config.storage.key.clone()))
    }

    /// Set the key-value store (defaults to a fresh [`InMemoryStore`])
    pub fn with_store(self, store: impl KeyValueStore + 'static) -> Self {
        self.with_boxed_store(Box::new(store))
    }

    pub fn with_boxed_store(mut self, store: Box<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the key holding the order blob
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the id generator (defaults to [`UuidIdGenerator`])
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Some(Box::new(ids));
        self
    }

    /// Load the stored collection and return the repository
    pub fn build(self) -> DynRepository {
        let store = self
            .store
            .unwrap_or_else(|| Box::new(InMemoryStore::new()));
        let ids = self.ids.unwrap_or_else(|| Box::new(UuidIdGenerator));
        OrderRepository::with_boxed_ids(OrderStorage::new(store, self.storage_key), ids)
    }
}

impl Default for LedgerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn open_backend(config: &LedgerConfig) -> Result<Box<dyn KeyValueStore>, LedgerError> {
    match &config.storage.backend {
        StorageBackend::Memory => Ok(Box::new(InMemoryStore::new())),
        StorageBackend::Lmdb => open_lmdb(config),
    }
}

#[cfg(feature = "lmdb")]
fn open_lmdb(config: &LedgerConfig) -> Result<Box<dyn KeyValueStore>, LedgerError> {
    let path = config.storage.path.as_ref().ok_or_else(|| ConfigError::InvalidValue {
        field: "storage.path".to_string(),
        value: String::new(),
        message: "the lmdb backend needs a path".to_string(),
    })?;
    let store = crate::storage::LmdbStore::open(path)?;
    Ok(Box::new(store))
}

#[cfg(not(feature = "lmdb"))]
fn open_lmdb(_config: &LedgerConfig) -> Result<Box<dyn KeyValueStore>, LedgerError> {
    Err(ConfigError::InvalidValue {
        field: "storage.backend".to_string(),
        value: "lmdb".to_string(),
        message: "built without the `lmdb` feature".to_string(),
    }
    .into())
}
