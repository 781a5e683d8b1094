//! Order collection blob on top of a key-value store
//!
//! The whole collection lives under one key as a JSON array. Loading is
//! fail-soft (absent or malformed content reads as an empty collection, a
//! single bad element is dropped on its own) and
//! saving is best-effort: the in-memory collection is the source of truth
//! for the session, so storage failures are logged and dropped.

use crate::core::error::StorageError;
use crate::core::order::Order;
use crate::core::store::KeyValueStore;

/// Default key of the order blob
pub const DEFAULT_STORAGE_KEY: &str = "kodhiyas_orders_v2";

/// Storage adapter for the full order collection
pub struct OrderStorage<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> OrderStorage<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Adapter using [`DEFAULT_STORAGE_KEY`]
    pub fn with_default_key(store: S) -> Self {
        Self::new(store, DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the collection, surfacing read and decode failures
    ///
    /// A blob that is not a JSON array is an error. Elements of the array that
    /// do not decode as an order are skipped with a warning, so one bad entry
    /// never costs the rest of the collection. Stored `pending` values are
    /// recomputed, since older blobs may lack them or carry stale ones.
    pub fn try_load(&self) -> Result<Vec<Order>, StorageError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };

        let elements: Vec<serde_json::Value> =
            serde_json::from_str(&raw).map_err(|e| StorageError::Serialization {
                key: self.key.clone(),
                message: e.to_string(),
            })?;

        let mut orders = Vec::with_capacity(elements.len());
        for (index, element) in elements.into_iter().enumerate() {
            match serde_json::from_value::<Order>(element) {
                Ok(mut order) => {
                    order.refresh_pending();
                    orders.push(order);
                }
                Err(e) => {
                    tracing::warn!(
                        key = %self.key,
                        index,
                        error = %e,
                        "Skipping undecodable stored order"
                    );
                }
            }
        }
        Ok(orders)
    }

    /// Read the collection, treating any failure as an empty collection
    pub fn load(&self) -> Vec<Order> {
        match self.try_load() {
            Ok(orders) => {
                tracing::info!(
                    backend = self.store.backend_name(),
                    key = %self.key,
                    count = orders.len(),
                    "Loaded order collection"
                );
                orders
            }
            Err(e) => {
                tracing::warn!(
                    backend = self.store.backend_name(),
                    key = %self.key,
                    error = %e,
                    "Stored orders unreadable, starting with an empty collection"
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the blob with `orders`, surfacing failures
    pub fn try_save<'a, I>(&self, orders: I) -> Result<(), StorageError>
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let orders: Vec<&Order> = orders.into_iter().collect();
        let raw = serde_json::to_string(&orders).map_err(|e| StorageError::Serialization {
            key: self.key.clone(),
            message: e.to_string(),
        })?;
        self.store.set(&self.key, &raw)
    }

    /// Overwrite the blob with `orders`; failures are logged and swallowed
    pub fn save<'a, I>(&self, orders: I)
    where
        I: IntoIterator<Item = &'a Order>,
    {
        if let Err(e) = self.try_save(orders) {
            tracing::warn!(
                backend = self.store.backend_name(),
                key = %self.key,
                error = %e,
                "Failed to persist orders, keeping in-memory state"
            );
        }
    }

    /// Remove the blob; failures are logged and swallowed
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(&self.key) {
            tracing::warn!(
                backend = self.store.backend_name(),
                key = %self.key,
                error = %e,
                "Failed to remove stored orders"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::draft::OrderDraft;
    use crate::core::order::OrderId;
    use crate::storage::InMemoryStore;
    use chrono::Utc;

    #[test]
    fn test_missing_key_loads_empty() {
        let storage = OrderStorage::with_default_key(InMemoryStore::new());
        assert!(storage.load().is_empty());
        assert!(storage.try_load().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_blob_loads_empty() {
        let store = InMemoryStore::with_slot(DEFAULT_STORAGE_KEY, "{not json");
        let storage = OrderStorage::with_default_key(store);
        assert!(storage.load().is_empty());
        assert!(matches!(
            storage.try_load(),
            Err(StorageError::Serialization { .. })
        ));
    }

    #[test]
    fn test_save_then_load() {
        let storage = OrderStorage::new(InMemoryStore::new(), "orders");
        let order = OrderDraft::sales()
            .party("Govind")
            .quantity("10")
            .given("4")
            .into_order(OrderId::from("a"), Utc::now());

        storage.save([&order]);
        let loaded = storage.load();
        assert_eq!(loaded, vec![order]);
    }

    #[test]
    fn test_load_recomputes_pending() {
        let blob = r#"[{"id":"x1","type":"SALES","partyName":"Govind","brokerName":"Ramesh",
            "commodity":"Palmolien Oil","quantity":500,"unit":"MT","quantityGiven":120,
            "rate":1000,"timestamp":"2025-01-15T10:00:00.000Z","remarks":""}]"#;
        let storage = OrderStorage::with_default_key(InMemoryStore::with_slot(
            DEFAULT_STORAGE_KEY,
            blob,
        ));

        let loaded = storage.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].pending, 380.0);
    }

    #[test]
    fn test_bad_element_is_skipped() {
        let blob = r#"[
            {"id":"g1","type":"SALES","partyName":"Govind","commodity":"Palmolien Oil",
             "quantity":500,"quantityGiven":120,"timestamp":"2025-01-15T10:00:00Z"},
            {"id":"b1","type":"SALES","partyName":"Hari","commodity":"Groundnut Oil",
             "quantity":10,"quantityGiven":0,"timestamp":"2025-01-15T10:00:00Z"},
            42,
            {"id":"u1","type":"PURCHASE","partyName":"Upendra","commodity":"Cotton",
             "quantity":100,"quantityGiven":40,"timestamp":"2025-01-14T10:00:00Z"}
        ]"#;
        let storage = OrderStorage::with_default_key(InMemoryStore::with_slot(
            DEFAULT_STORAGE_KEY,
            blob,
        ));

        let loaded = storage.try_load().unwrap();
        let ids: Vec<&str> = loaded.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["g1", "u1"]);
        assert_eq!(loaded[1].pending, 60.0);
    }

    #[test]
    fn test_non_array_blob_is_an_error() {
        let store = InMemoryStore::with_slot(DEFAULT_STORAGE_KEY, r#"{"orders":[]}"#);
        let storage = OrderStorage::with_default_key(store);
        assert!(matches!(
            storage.try_load(),
            Err(StorageError::Serialization { .. })
        ));
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_clear_removes_key() {
        let store = InMemoryStore::new();
        let storage = OrderStorage::with_default_key(store.clone());
        storage.save(std::iter::empty());
        assert_eq!(store.len(), 1);
        storage.clear();
        assert!(store.is_empty());
    }
}
