//! Search filter over party and broker names

use crate::core::order::Order;

/// Case-insensitive substring match of `query` against "party broker"
///
/// An empty query matches every order.
pub fn matches(order: &Order, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let haystack = format!("{} {}", order.party_name, order.broker_name).to_lowercase();
    haystack.contains(&query.to_lowercase())
}

/// Orders matching `query`, in input order
pub fn filter_orders<'a, I>(orders: I, query: &str) -> Vec<&'a Order>
where
    I: IntoIterator<Item = &'a Order>,
{
    orders
        .into_iter()
        .filter(|order| matches(order, query))
        .collect()
}
