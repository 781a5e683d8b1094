//! Order id generation
//!
//! The repository receives its generator at construction so tests can use
//! predictable ids while production code uses random UUIDs.

use crate::core::order::OrderId;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of fresh order ids
///
/// Ids should not repeat. The repository skips ids it already holds and,
/// after a bounded number of clashes, falls back to a random UUID.
pub trait IdGenerator: Send + Sync {
    /// Produce an id that has never been returned before
    fn next_id(&self) -> OrderId;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> OrderId {
        OrderId::new(Uuid::new_v4().to_string())
    }
}

/// Monotonic counter with a fixed prefix (`order-1`, `order-2`, ...)
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("order")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> OrderId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        OrderId::new(format!("{}-{}", self.prefix, n))
    }
}
