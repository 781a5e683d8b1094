//! Demonstration orders

use crate::core::draft::OrderDraft;
use crate::core::order::{Commodity, Unit};

/// Two sales orders for Govind through Ramesh and one purchase from Upendra
/// through Suresh
pub fn sample_drafts() -> Vec<OrderDraft> {
    vec![
        OrderDraft::sales()
            .party("Govind")
            .broker("Ramesh")
            .commodity(Commodity::PalmolienOil)
            .quantity("500")
            .unit(Unit::MT)
            .given("120")
            .rate("1000"),
        OrderDraft::sales()
            .party("Govind")
            .broker("Ramesh")
            .commodity(Commodity::PalmolienOil)
            .quantity("200")
            .unit(Unit::MT)
            .given("50")
            .rate("1010"),
        OrderDraft::purchase()
            .party("Upendra")
            .broker("Suresh")
            .commodity(Commodity::Cotton)
            .quantity("100")
            .unit(Unit::MT)
            .given("40")
            .rate("500"),
    ]
}
