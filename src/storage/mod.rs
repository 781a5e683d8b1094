//! Storage implementations for different backends

pub mod in_memory;
#[cfg(feature = "lmdb")]
pub mod lmdb;
pub mod orders;

pub use in_memory::InMemoryStore;
#[cfg(feature = "lmdb")]
pub use lmdb::LmdbStore;
pub use orders::{DEFAULT_STORAGE_KEY, OrderStorage};
