//! Shared test harness for key-value store backends
//!
//! Provides a failing store for best-effort persistence tests, draft helpers
//! and the `key_value_store_tests!` macro.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod store_harness;
//! use store_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod store_contract_tests;

use kodhiyas::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// ---------------------------------------------------------------------------
// FailingStore: every write fails, reads return a fixed value
// ---------------------------------------------------------------------------

/// Store whose writes always fail, like a full browser quota
#[derive(Clone, Default)]
pub struct FailingStore {
    pub stored: Option<String>,
    pub write_attempts: Arc<AtomicUsize>,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stored(raw: &str) -> Self {
        Self {
            stored: Some(raw.to_string()),
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> usize {
        self.write_attempts.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.stored.clone())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Backend {
            backend: "failing".to_string(),
            message: "quota exceeded".to_string(),
        })
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Unavailable {
            backend: "failing".to_string(),
        })
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}

// ---------------------------------------------------------------------------
// Draft helpers
// ---------------------------------------------------------------------------

pub fn sales(party: &str, broker: &str, qty: &str, given: &str) -> OrderDraft {
    OrderDraft::sales()
        .party(party)
        .broker(broker)
        .commodity(Commodity::PalmolienOil)
        .quantity(qty)
        .given(given)
}

pub fn purchase(party: &str, broker: &str, qty: &str, given: &str) -> OrderDraft {
    OrderDraft::purchase()
        .party(party)
        .broker(broker)
        .commodity(Commodity::Cotton)
        .quantity(qty)
        .given(given)
}

/// Repository over a fresh in-memory store with `order-N` ids
pub fn memory_repo() -> (OrderRepository<InMemoryStore>, InMemoryStore) {
    let store = InMemoryStore::new();
    let repo = OrderRepository::open(
        store.clone(),
        DEFAULT_STORAGE_KEY,
        SequentialIdGenerator::default(),
    );
    (repo, store)
}

/// Ids of a repository in list order
pub fn ids<S: KeyValueStore>(repo: &OrderRepository<S>) -> Vec<String> {
    repo.iter().map(|o| o.id.to_string()).collect()
}
