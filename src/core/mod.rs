//! Core module containing the order model, rules and storage port

pub mod draft;
pub mod error;
pub mod filter;
pub mod id;
pub mod order;
pub mod pending;
pub mod store;

pub use draft::OrderDraft;
pub use error::{ConfigError, LedgerError, StorageError, ValidationError};
pub use filter::{filter_orders, matches};
pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use order::{
    BLANK_SENTINEL, COMMODITIES, Commodity, ORDER_TYPES, Order, OrderId, OrderType, UNITS, Unit,
};
pub use pending::{PendingStatus, compute_pending};
pub use store::KeyValueStore;
