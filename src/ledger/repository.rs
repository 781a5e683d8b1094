//! In-memory order collection mirrored to storage

use crate::core::draft::OrderDraft;
use crate::core::error::LedgerError;
use crate::core::id::{IdGenerator, UuidIdGenerator};
use crate::core::order::{Order, OrderId, OrderType};
use crate::core::store::KeyValueStore;
use crate::ledger::sample::sample_drafts;
use crate::storage::OrderStorage;
use chrono::Utc;
use indexmap::IndexMap;

/// Generator ids tried before falling back to a random UUID
const MAX_ID_ATTEMPTS: usize = 16;

/// The order collection for one session
///
/// Orders are kept most-recently-saved first. Every mutation rewrites the
/// whole collection to storage; storage failures never reach the caller and
/// never roll back the in-memory state.
pub struct OrderRepository<S: KeyValueStore> {
    orders: IndexMap<OrderId, Order>,
    storage: OrderStorage<S>,
    ids: Box<dyn IdGenerator>,
}

impl<S: KeyValueStore> OrderRepository<S> {
    /// Load the collection from `storage`, starting empty if nothing usable
    /// is stored
    pub fn new(storage: OrderStorage<S>, ids: impl IdGenerator + 'static) -> Self {
        Self::with_boxed_ids(storage, Box::new(ids))
    }

    /// Shorthand for [`OrderRepository::new`] over a raw store and key
    pub fn open(store: S, key: impl Into<String>, ids: impl IdGenerator + 'static) -> Self {
        Self::new(OrderStorage::new(store, key), ids)
    }

    pub(crate) fn with_boxed_ids(storage: OrderStorage<S>, ids: Box<dyn IdGenerator>) -> Self {
        let mut orders = IndexMap::new();
        for order in storage.load() {
            // first occurrence is the most recent one
            orders.entry(order.id.clone()).or_insert(order);
        }

        Self {
            orders,
            storage,
            ids,
        }
    }

    /// All orders, most-recently-saved first
    pub fn list(&self) -> Vec<&Order> {
        self.orders.values().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    /// Orders of one type, keeping list order
    pub fn orders_of(&self, order_type: OrderType) -> Vec<&Order> {
        self.orders
            .values()
            .filter(|o| o.order_type == order_type)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn find_by_id(&self, id: &OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    /// Populated edit form for an existing order
    pub fn edit_draft(&self, id: &OrderId) -> Option<OrderDraft> {
        self.find_by_id(id).map(OrderDraft::from)
    }

    /// Create or update an order
    ///
    /// A draft without id gets a fresh one; a draft with an id replaces the
    /// order holding that id. Either way the saved order moves to the front.
    /// A blank party name rejects the save without touching any state.
    pub fn save(&mut self, draft: OrderDraft) -> Result<Order, LedgerError> {
        draft.validate()?;

        let is_update = draft.id.is_some();
        let id = match draft.id.clone() {
            Some(id) => id,
            None => self.fresh_id(),
        };
        let order = draft.into_order(id, Utc::now());

        self.orders.shift_remove(&order.id);
        self.orders.shift_insert(0, order.id.clone(), order.clone());
        self.persist();

        tracing::debug!(
            order_id = %order.id,
            order_type = %order.order_type,
            update = is_update,
            pending = order.pending,
            "Saved order"
        );
        Ok(order)
    }

    /// Remove an order; returns whether one was removed
    pub fn delete(&mut self, id: &OrderId) -> bool {
        let removed = self.orders.shift_remove(id).is_some();
        if removed {
            self.persist();
            tracing::debug!(order_id = %id, "Deleted order");
        }
        removed
    }

    /// Drop every order and remove the stored blob
    pub fn clear_all(&mut self) {
        let count = self.orders.len();
        self.orders.clear();
        self.storage.clear();
        tracing::debug!(count, "Cleared all orders");
    }

    /// Prepend the demonstration orders, returning their ids in list order
    pub fn add_sample_data(&mut self) -> Vec<OrderId> {
        let now = Utc::now();
        let mut ids = Vec::new();
        for (index, draft) in sample_drafts().into_iter().enumerate() {
            let order = draft.into_order(self.fresh_id(), now);
            ids.push(order.id.clone());
            self.orders.shift_insert(index, order.id.clone(), order);
        }
        self.persist();

        tracing::debug!(count = ids.len(), "Added sample orders");
        ids
    }

    pub fn storage(&self) -> &OrderStorage<S> {
        &self.storage
    }

    /// Next generator id not already held, falling back to a random UUID
    /// when the generator keeps repeating itself
    fn fresh_id(&self) -> OrderId {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if !self.orders.contains_key(&id) {
                return id;
            }
        }

        tracing::warn!(
            attempts = MAX_ID_ATTEMPTS,
            "Id generator only returned ids already in use, using a random UUID"
        );
        loop {
            let id = UuidIdGenerator.next_id();
            if !self.orders.contains_key(&id) {
                return id;
            }
        }
    }

    fn persist(&self) {
        self.storage.save(self.orders.values());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::id::SequentialIdGenerator;
    use crate::core::order::Commodity;
    use crate::storage::InMemoryStore;

    fn repo() -> OrderRepository<InMemoryStore> {
        OrderRepository::open(InMemoryStore::new(), "orders", SequentialIdGenerator::default())
    }

    fn govind(qty: &str, given: &str) -> OrderDraft {
        OrderDraft::sales()
            .party("Govind")
            .broker("Ramesh")
            .commodity(Commodity::PalmolienOil)
            .quantity(qty)
            .given(given)
    }

    #[test]
    fn test_save_new_assigns_id_and_prepends() {
        let mut repo = repo();
        let first = repo.save(govind("500", "120")).unwrap();
        let second = repo.save(govind("200", "50")).unwrap();

        assert_eq!(first.id.as_str(), "order-1");
        assert_eq!(second.id.as_str(), "order-2");
        let ids: Vec<&str> = repo.list().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["order-2", "order-1"]);
    }

    #[test]
    fn test_save_existing_replaces_and_moves_to_front() {
        let mut repo = repo();
        let first = repo.save(govind("500", "120")).unwrap();
        repo.save(govind("200", "50")).unwrap();

        let mut draft = repo.edit_draft(&first.id).unwrap();
        draft.quantity_given = "500".to_string();
        let updated = repo.save(draft).unwrap();

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.list()[0].id, first.id);
        assert_eq!(updated.pending, 0.0);
        assert_eq!(updated.timestamp, first.timestamp);
    }

    #[test]
    fn test_save_blank_party_is_rejected_without_change() {
        let mut repo = repo();
        repo.save(govind("1", "0")).unwrap();

        let err = repo.save(OrderDraft::sales().party("  ")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut repo = repo();
        repo.save(govind("1", "0")).unwrap();
        assert!(!repo.delete(&OrderId::from("missing")));
        assert_eq!(repo.len(), 1);
    }

    struct RepeatingIds;

    impl IdGenerator for RepeatingIds {
        fn next_id(&self) -> OrderId {
            OrderId::from("same")
        }
    }

    #[test]
    fn test_repeating_generator_does_not_hang() {
        let mut repo = OrderRepository::open(InMemoryStore::new(), "orders", RepeatingIds);
        let first = repo.save(govind("1", "0")).unwrap();
        let second = repo.save(govind("2", "0")).unwrap();
        let samples = repo.add_sample_data();

        assert_eq!(first.id.as_str(), "same");
        assert_ne!(second.id, first.id);
        assert_eq!(samples.len(), 3);
        assert_eq!(repo.len(), 5);
    }

    #[test]
    fn test_fresh_id_skips_ids_already_loaded() {
        let store = InMemoryStore::new();
        let mut seeded = OrderRepository::open(
            store.clone(),
            "orders",
            SequentialIdGenerator::default(),
        );
        seeded.save(govind("1", "0")).unwrap();

        let mut reopened =
            OrderRepository::open(store, "orders", SequentialIdGenerator::default());
        let order = reopened.save(govind("2", "0")).unwrap();
        assert_eq!(order.id.as_str(), "order-2");
        assert_eq!(reopened.len(), 2);
    }
}
