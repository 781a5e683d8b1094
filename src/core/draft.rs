//! Editable order candidate and numeric coercion
//!
//! An [`OrderDraft`] is what a data-entry form holds before saving: quantities
//! are raw text and the id is only present when editing an existing order.
//! Saving turns it into an [`Order`] through [`OrderDraft::into_order`].

use crate::core::error::ValidationError;
use crate::core::order::{Commodity, Order, OrderId, OrderType, Unit};
use crate::core::pending::compute_pending;
use chrono::{DateTime, Utc};

/// Candidate order as typed into a form
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    /// Present when editing, absent when creating
    pub id: Option<OrderId>,
    pub order_type: OrderType,
    pub party_name: String,
    pub broker_name: String,
    pub commodity: Commodity,
    pub quantity: String,
    pub unit: Unit,
    pub quantity_given: String,
    pub rate: String,
    /// Kept from the edited order
    pub timestamp: Option<DateTime<Utc>>,
    pub remarks: String,
}

impl OrderDraft {
    /// Empty form for the given dashboard
    pub fn new(order_type: OrderType) -> Self {
        Self {
            id: None,
            order_type,
            party_name: String::new(),
            broker_name: String::new(),
            commodity: Commodity::default(),
            quantity: String::new(),
            unit: Unit::default(),
            quantity_given: String::new(),
            rate: String::new(),
            timestamp: None,
            remarks: String::new(),
        }
    }

    pub fn sales() -> Self {
        Self::new(OrderType::Sales)
    }

    pub fn purchase() -> Self {
        Self::new(OrderType::Purchase)
    }

    pub fn party(mut self, name: impl Into<String>) -> Self {
        self.party_name = name.into();
        self
    }

    pub fn broker(mut self, name: impl Into<String>) -> Self {
        self.broker_name = name.into();
        self
    }

    pub fn commodity(mut self, commodity: Commodity) -> Self {
        self.commodity = commodity;
        self
    }

    pub fn quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = quantity.into();
        self
    }

    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn given(mut self, quantity_given: impl Into<String>) -> Self {
        self.quantity_given = quantity_given.into();
        self
    }

    pub fn rate(mut self, rate: impl Into<String>) -> Self {
        self.rate = rate.into();
        self
    }

    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<OrderId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Switch the draft to another dashboard
    pub fn with_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    /// The only rule enforced on save: a non-blank party name
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.party_name.trim().is_empty() {
            return Err(ValidationError::required("partyName"));
        }
        Ok(())
    }

    /// Coerce the draft into an order with the given id
    ///
    /// `now` is used when the draft carries no timestamp. Names are kept as
    /// typed; validation is the caller's job.
    pub fn into_order(self, id: OrderId, now: DateTime<Utc>) -> Order {
        let quantity = coerce_quantity(&self.quantity);
        let quantity_given = coerce_quantity(&self.quantity_given);

        Order {
            id,
            order_type: self.order_type,
            party_name: self.party_name,
            broker_name: self.broker_name,
            commodity: self.commodity,
            quantity,
            unit: self.unit,
            quantity_given,
            rate: coerce_rate(&self.rate),
            timestamp: self.timestamp.unwrap_or(now),
            remarks: self.remarks,
            pending: compute_pending(quantity, quantity_given),
        }
    }
}

impl From<&Order> for OrderDraft {
    fn from(order: &Order) -> Self {
        Self {
            id: Some(order.id.clone()),
            order_type: order.order_type,
            party_name: order.party_name.clone(),
            broker_name: order.broker_name.clone(),
            commodity: order.commodity,
            quantity: order.quantity.to_string(),
            unit: order.unit,
            quantity_given: order.quantity_given.to_string(),
            rate: order.rate.map(|r| r.to_string()).unwrap_or_default(),
            timestamp: Some(order.timestamp),
            remarks: order.remarks.clone(),
        }
    }
}

/// Parse a quantity field, falling back to zero
pub fn coerce_quantity(input: &str) -> f64 {
    parse_leading_number(input)
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Parse the rate field; anything unparsable leaves it absent
pub fn coerce_rate(input: &str) -> Option<f64> {
    parse_leading_number(input).filter(|n| n.is_finite())
}

/// Parse the longest decimal prefix of `input`, ignoring leading whitespace
///
/// `"12.5 MT"` gives `12.5`, `".5"` gives `0.5`, `"1e3x"` gives `1000`,
/// `"abc"` and `""` give `None`.
pub fn parse_leading_number(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if s[pos..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &s[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent = "";
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exponent = &s[pos..end];
        }
    }

    let literal = format!(
        "{}{}.{}{}",
        if negative { "-" } else { "" },
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits },
        exponent
    );
    literal.parse::<f64>().ok()
}
