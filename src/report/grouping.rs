//! Dashboard grouping by broker and party

use crate::core::order::{Order, Unit};
use crate::core::pending::{PendingStatus, compute_pending};
use indexmap::IndexMap;
use serde::Serialize;

/// Summed quantities of a set of orders
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub total: f64,
    pub given: f64,
    pub pending: f64,
}

impl Totals {
    /// Sum quantities over `orders` and derive pending from the sums
    pub fn of<'a, I>(orders: I) -> Self
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let (total, given) = orders
            .into_iter()
            .fold((0.0, 0.0), |(total, given), o| {
                (total + o.quantity, given + o.quantity_given)
            });
        Self {
            total,
            given,
            pending: compute_pending(total, given),
        }
    }

    pub fn status(&self) -> PendingStatus {
        PendingStatus::of(self.pending)
    }
}

/// Orders sharing a broker and party
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    /// Lowercased `broker||party`
    pub key: String,
    /// Broker as written on the first order of the group
    pub broker: String,
    /// Party as written on the first order of the group
    pub party: String,
    /// Members in encounter order
    pub items: Vec<Order>,
    pub totals: Totals,
}

impl Group {
    /// Unit shown next to the group total (that of the first member)
    pub fn unit(&self) -> Option<Unit> {
        self.items.first().map(|o| o.unit)
    }
}

/// Grouping key of an order: lowercased `broker||party`, blanks as `-`
pub fn broker_party_key(order: &Order) -> String {
    format!("{}||{}", order.broker_label(), order.party_label()).to_lowercase()
}

/// Bucket orders by broker and party, largest pending balance first
///
/// The key is case-insensitive. Groups with equal pending keep the order in
/// which they were first encountered.
pub fn group_by_broker_party<'a, I>(orders: I) -> Vec<Group>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut buckets: IndexMap<String, Group> = IndexMap::new();
    for order in orders {
        let key = broker_party_key(order);
        buckets
            .entry(key.clone())
            .or_insert_with(|| Group {
                key,
                broker: order.broker_label().to_string(),
                party: order.party_label().to_string(),
                items: Vec::new(),
                totals: Totals::default(),
            })
            .items
            .push(order.clone());
    }

    let mut groups: Vec<Group> = buckets
        .into_values()
        .map(|mut group| {
            group.totals = Totals::of(&group.items);
            group
        })
        .collect();
    groups.sort_by(|a, b| b.totals.pending.total_cmp(&a.totals.pending));
    groups
}
