//! LMDB storage backend using heed (memory-mapped B-tree).
//!
//! LMDB is an embedded key-value store, no external server required. The
//! ledger only ever touches one key, so a single named database holds the
//! slots as UTF-8 strings.
//!
//! # Feature flag
//!
//! Enable with `--features lmdb`. Requires the `heed` crate.

use crate::core::error::StorageError;
use crate::core::store::KeyValueStore;
use heed::types::Str;
use heed::{Database, Env, EnvOpenOptions};
use std::path::Path;
use std::sync::Arc;

const BACKEND: &str = "lmdb";

fn backend_err(e: heed::Error) -> StorageError {
    StorageError::Backend {
        backend: BACKEND.to_string(),
        message: e.to_string(),
    }
}

/// LMDB-backed implementation of [`KeyValueStore`].
///
/// The `Env` is wrapped in an `Arc` for cheap cloning.
///
/// # Example
///
/// ```rust,ignore
/// use kodhiyas::storage::LmdbStore;
///
/// let store = LmdbStore::open("/var/lib/kodhiyas")?;
/// let repo = OrderRepository::open(store, "kodhiyas_orders_v2", UuidIdGenerator);
/// ```
#[derive(Clone)]
pub struct LmdbStore {
    env: Arc<Env>,
    db: Database<Str, Str>,
}

impl LmdbStore {
    /// Open (or create) an LMDB environment at `path` and initialise the
    /// `slots` named database.
    ///
    /// The map size is a virtual address space reservation; LMDB does not
    /// allocate it up front.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        std::fs::create_dir_all(path.as_ref())?;

        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(64 * 1024 * 1024)
                .max_dbs(2)
                .open(path.as_ref())
                .map_err(backend_err)?
        };

        let mut wtxn = env.write_txn().map_err(backend_err)?;
        let db: Database<Str, Str> = env
            .create_database(&mut wtxn, Some("slots"))
            .map_err(backend_err)?;
        wtxn.commit().map_err(backend_err)?;

        Ok(Self {
            env: Arc::new(env),
            db,
        })
    }
}

impl KeyValueStore for LmdbStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let rtxn = self.env.read_txn().map_err(backend_err)?;
        let value = self.db.get(&rtxn, key).map_err(backend_err)?;
        Ok(value.map(str::to_string))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut wtxn = self.env.write_txn().map_err(backend_err)?;
        self.db.put(&mut wtxn, key, value).map_err(backend_err)?;
        wtxn.commit().map_err(backend_err)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut wtxn = self.env.write_txn().map_err(backend_err)?;
        self.db.delete(&mut wtxn, key).map_err(backend_err)?;
        wtxn.commit().map_err(backend_err)
    }

    fn backend_name(&self) -> &'static str {
        BACKEND
    }
}
