//! Integration tests for the LMDB store using the store test harness.
//!
//! # Requirements
//!
//! - Feature flag `lmdb` must be enabled
//! - No external services needed (LMDB is an embedded database)
//!
//! # Running
//!
//! ```sh
//! cargo test --features lmdb --test lmdb_tests
//! ```
//!
//! Each test gets a fresh temporary directory via `tempfile::TempDir`, so
//! environments never overlap.

#![cfg(feature = "lmdb")]

#[macro_use]
mod store_harness;

use kodhiyas::storage::LmdbStore;
use store_harness::*;
use tempfile::TempDir;

fn fresh_lmdb_store() -> LmdbStore {
    let dir = TempDir::new().expect("Failed to create temp dir");
    // Leak the TempDir so it lives for the duration of the test
    // (otherwise it would be dropped immediately, deleting the DB files)
    let path = dir.path().to_path_buf();
    std::mem::forget(dir);
    LmdbStore::open(&path).expect("Failed to open LMDB store")
}

key_value_store_tests!(fresh_lmdb_store());

#[test]
fn test_builder_opens_configured_lmdb() {
    use kodhiyas::prelude::*;

    let dir = TempDir::new().unwrap();
    let yaml = format!(
        "storage:\n  backend: lmdb\n  path: {}\n",
        dir.path().join("ledger").display()
    );
    let config = LedgerConfig::from_yaml_str(&yaml).unwrap();

    {
        let mut repo = LedgerBuilder::from_config(&config).unwrap().build();
        repo.save(sales("Govind", "Ramesh", "10", "4")).unwrap();
    }

    let repo = LedgerBuilder::from_config(&config).unwrap().build();
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.list()[0].pending, 6.0);
}
