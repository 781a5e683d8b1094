//! Outstanding report: balances per party and commodity

use crate::core::order::{Commodity, Order};
use crate::core::pending::{PendingStatus, compute_pending};
use indexmap::IndexMap;
use serde::Serialize;

/// Summed quantities for one party and commodity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregate {
    /// Lowercased `party||commodity`
    pub key: String,
    pub party: String,
    pub commodity: Commodity,
    pub total: f64,
    pub given: f64,
    pub pending: f64,
}

impl Aggregate {
    pub fn status(&self) -> PendingStatus {
        PendingStatus::of(self.pending)
    }
}

/// Aggregation key of an order: lowercased `party||commodity`
pub fn party_commodity_key(order: &Order) -> String {
    format!("{}||{}", order.party_label(), order.commodity.label()).to_lowercase()
}

/// Sum orders per party and commodity, largest pending balance first
///
/// Callers pass the orders of a single type; the function itself does not
/// look at `order_type`. Ties keep first-encounter order.
pub fn outstanding_by_type<'a, I>(orders: I) -> Vec<Aggregate>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut buckets: IndexMap<String, Aggregate> = IndexMap::new();
    for order in orders {
        let key = party_commodity_key(order);
        let entry = buckets.entry(key.clone()).or_insert_with(|| Aggregate {
            key,
            party: order.party_label().to_string(),
            commodity: order.commodity,
            total: 0.0,
            given: 0.0,
            pending: 0.0,
        });
        entry.total += order.quantity;
        entry.given += order.quantity_given;
    }

    let mut aggregates: Vec<Aggregate> = buckets
        .into_values()
        .map(|mut agg| {
            agg.pending = compute_pending(agg.total, agg.given);
            agg
        })
        .collect();
    aggregates.sort_by(|a, b| b.pending.total_cmp(&a.pending));
    aggregates
}
