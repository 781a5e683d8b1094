//! The three views of the order ledger
//!
//! Sales and purchase dashboards apply the search filter before grouping.
//! The outstanding report always covers every order of each type, whatever
//! the search text.

use crate::core::filter::matches;
use crate::core::order::{Order, OrderType};
use crate::report::grouping::{Group, group_by_broker_party};
use crate::report::outstanding::{Aggregate, outstanding_by_type};
use serde::Serialize;

/// Selectable view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Sales,
    Purchase,
    Outstanding,
}

impl Tab {
    /// Order type whose form is shown on this tab, if any
    pub fn order_type(&self) -> Option<OrderType> {
        match self {
            Tab::Sales => Some(OrderType::Sales),
            Tab::Purchase => Some(OrderType::Purchase),
            Tab::Outstanding => None,
        }
    }
}

impl From<OrderType> for Tab {
    fn from(order_type: OrderType) -> Self {
        match order_type {
            OrderType::Sales => Tab::Sales,
            OrderType::Purchase => Tab::Purchase,
        }
    }
}

/// Outstanding balances of both sides
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OutstandingReport {
    pub sales: Vec<Aggregate>,
    pub purchase: Vec<Aggregate>,
}

/// One view's content
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TabView<'a> {
    Groups(&'a [Group]),
    Outstanding(&'a OutstandingReport),
}

/// Everything the presentation layer needs for one render
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Dashboard {
    pub query: String,
    pub sales: Vec<Group>,
    pub purchase: Vec<Group>,
    pub outstanding: OutstandingReport,
}

impl Dashboard {
    /// Recompute all views from `orders` and the search `query`
    pub fn build<'a, I>(orders: I, query: &str) -> Self
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let mut sales: Vec<&Order> = Vec::new();
        let mut purchase: Vec<&Order> = Vec::new();
        for order in orders {
            match order.order_type {
                OrderType::Sales => sales.push(order),
                OrderType::Purchase => purchase.push(order),
            }
        }

        Self {
            query: query.to_string(),
            sales: group_by_broker_party(sales.iter().copied().filter(|o| matches(o, query))),
            purchase: group_by_broker_party(
                purchase.iter().copied().filter(|o| matches(o, query)),
            ),
            outstanding: OutstandingReport {
                sales: outstanding_by_type(sales.iter().copied()),
                purchase: outstanding_by_type(purchase.iter().copied()),
            },
        }
    }

    /// Content of one tab
    pub fn tab(&self, tab: Tab) -> TabView<'_> {
        match tab {
            Tab::Sales => TabView::Groups(&self.sales),
            Tab::Purchase => TabView::Groups(&self.purchase),
            Tab::Outstanding => TabView::Outstanding(&self.outstanding),
        }
    }

    /// Groups of one dashboard
    pub fn groups(&self, order_type: OrderType) -> &[Group] {
        match order_type {
            OrderType::Sales => &self.sales,
            OrderType::Purchase => &self.purchase,
        }
    }
}
