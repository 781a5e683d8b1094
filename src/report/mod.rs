//! Aggregation views over an order collection
//!
//! Everything here is a pure function of the orders passed in; nothing is
//! cached between calls.

pub mod dashboard;
pub mod grouping;
pub mod outstanding;

pub use dashboard::{Dashboard, OutstandingReport, Tab, TabView};
pub use grouping::{Group, Totals, broker_party_key, group_by_broker_party};
pub use outstanding::{Aggregate, outstanding_by_type, party_commodity_key};
