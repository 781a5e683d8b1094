//! # Kodhiyas Orders
//!
//! A ledger for commodity trade orders (sales and purchases) with the
//! aggregation behind a simple outstanding-balance dashboard.
//!
//! ## Features
//!
//! - **Order Repository**: create, update, delete and list orders, most
//!   recently saved first
//! - **Pending Balances**: ordered minus delivered, rounded to three decimals,
//!   over-delivery included
//! - **Grouping**: orders bucketed by broker and party, or by party and
//!   commodity, largest balance first
//! - **Search**: case-insensitive match on party and broker names
//! - **Pluggable Storage**: the whole collection is one JSON blob in any
//!   key-value store (in-memory by default, LMDB with the `lmdb` feature)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kodhiyas::prelude::*;
//!
//! let mut repo = LedgerBuilder::new().build();
//!
//! repo.save(
//!     OrderDraft::sales()
//!         .party("Govind")
//!         .broker("Ramesh")
//!         .commodity(Commodity::PalmolienOil)
//!         .quantity("500")
//!         .given("120"),
//! )?;
//!
//! let dashboard = Dashboard::build(repo.iter(), "");
//! for group in &dashboard.sales {
//!     println!("{} / {}: {}", group.broker, group.party, group.totals.pending);
//! }
//! ```

pub mod config;
pub mod core;
pub mod ledger;
pub mod report;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        BLANK_SENTINEL, COMMODITIES, Commodity, ConfigError, IdGenerator, KeyValueStore,
        LedgerError, ORDER_TYPES, Order, OrderDraft, OrderId, OrderType, PendingStatus,
        SequentialIdGenerator, StorageError, UNITS, Unit, UuidIdGenerator, ValidationError,
        compute_pending, filter_orders, matches,
    };

    // === Ledger ===
    pub use crate::ledger::{DynRepository, LedgerBuilder, OrderRepository};

    // === Reports ===
    pub use crate::report::{
        Aggregate, Dashboard, Group, OutstandingReport, Tab, TabView, Totals,
        group_by_broker_party, outstanding_by_type,
    };

    // === Storage ===
    pub use crate::storage::{DEFAULT_STORAGE_KEY, InMemoryStore, OrderStorage};
    #[cfg(feature = "lmdb")]
    pub use crate::storage::LmdbStore;

    // === Config ===
    pub use crate::config::{LedgerConfig, StorageBackend, StorageConfig};

    // === External dependencies ===
    pub use chrono::{DateTime, Utc};
}
