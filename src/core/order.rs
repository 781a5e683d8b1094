//! The order entity and its enumerated attributes

use crate::core::draft::{coerce_quantity, coerce_rate};
use crate::core::error::ValidationError;
use crate::core::pending::compute_pending;
use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder shown (and keyed) for a blank broker or party name
pub const BLANK_SENTINEL: &str = "-";

/// Opaque order identifier
///
/// New ids are generated by an [`IdGenerator`](crate::core::id::IdGenerator);
/// ids loaded from an existing blob are kept verbatim, whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Which dashboard an order belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Sales,
    Purchase,
}

/// Both order types, sales first
pub const ORDER_TYPES: [OrderType; 2] = [OrderType::Sales, OrderType::Purchase];

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Sales => "SALES",
            OrderType::Purchase => "PURCHASE",
        }
    }

    /// Label of the counterparty for this side of the trade
    pub fn party_label(&self) -> &'static str {
        match self {
            OrderType::Sales => "Buyer",
            OrderType::Purchase => "Seller",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SALES" => Ok(OrderType::Sales),
            "PURCHASE" => Ok(OrderType::Purchase),
            other => Err(ValidationError::FieldError {
                field: "type".to_string(),
                message: format!("unknown order type '{}'", other),
            }),
        }
    }
}

/// The commodities an order can be placed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Commodity {
    #[serde(rename = "Cotton")]
    Cotton,
    #[serde(rename = "Degummed Soybean Oil")]
    DegummedSoybeanOil,
    #[serde(rename = "Palmolien Oil")]
    PalmolienOil,
    #[serde(rename = "Super Palmolien Oil")]
    SuperPalmolienOil,
    #[serde(rename = "Soybean Refined Oil")]
    SoybeanRefinedOil,
    #[serde(rename = "Crude Palm Oil")]
    CrudePalmOil,
    #[serde(rename = "RBD Refined Oil")]
    RbdRefinedOil,
    #[serde(rename = "Sunflower Refined Oil")]
    SunflowerRefinedOil,
}

/// Every commodity, in form order
pub const COMMODITIES: [Commodity; 8] = [
    Commodity::Cotton,
    Commodity::DegummedSoybeanOil,
    Commodity::PalmolienOil,
    Commodity::SuperPalmolienOil,
    Commodity::SoybeanRefinedOil,
    Commodity::CrudePalmOil,
    Commodity::RbdRefinedOil,
    Commodity::SunflowerRefinedOil,
];

impl Commodity {
    pub fn label(&self) -> &'static str {
        match self {
            Commodity::Cotton => "Cotton",
            Commodity::DegummedSoybeanOil => "Degummed Soybean Oil",
            Commodity::PalmolienOil => "Palmolien Oil",
            Commodity::SuperPalmolienOil => "Super Palmolien Oil",
            Commodity::SoybeanRefinedOil => "Soybean Refined Oil",
            Commodity::CrudePalmOil => "Crude Palm Oil",
            Commodity::RbdRefinedOil => "RBD Refined Oil",
            Commodity::SunflowerRefinedOil => "Sunflower Refined Oil",
        }
    }
}

impl Default for Commodity {
    fn default() -> Self {
        COMMODITIES[0]
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Commodity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        COMMODITIES
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| ValidationError::FieldError {
                field: "commodity".to_string(),
                message: format!("unknown commodity '{}'", wanted),
            })
    }
}

/// Quantity unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Unit {
    MT,
    QTL,
    KG,
}

/// Every unit, in form order
pub const UNITS: [Unit; 3] = [Unit::MT, Unit::QTL, Unit::KG];

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::MT => "MT",
            Unit::QTL => "QTL",
            Unit::KG => "KG",
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        UNITS[0]
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MT" => Ok(Unit::MT),
            "QTL" => Ok(Unit::QTL),
            "KG" => Ok(Unit::KG),
            other => Err(ValidationError::FieldError {
                field: "unit".to_string(),
                message: format!("unknown unit '{}'", other),
            }),
        }
    }
}

/// A single sales or purchase order
///
/// Serialized with the camelCase keys of the persisted blob
/// (`partyName`, `quantityGiven`, ...). `pending` is stored alongside the
/// quantities but is always derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,

    #[serde(rename = "type")]
    pub order_type: OrderType,

    pub party_name: String,

    #[serde(default)]
    pub broker_name: String,

    pub commodity: Commodity,

    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub quantity: f64,

    #[serde(default)]
    pub unit: Unit,

    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub quantity_given: f64,

    #[serde(default, deserialize_with = "deserialize_rate")]
    pub rate: Option<f64>,

    pub timestamp: DateTime<Utc>,

    #[serde(default)]
    pub remarks: String,

    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub pending: f64,
}

impl Order {
    /// Recompute the stored pending figure from the quantities
    pub fn refresh_pending(&mut self) {
        self.pending = compute_pending(self.quantity, self.quantity_given);
    }

    /// Broker name, or the sentinel when blank
    pub fn broker_label(&self) -> &str {
        label_or_sentinel(&self.broker_name)
    }

    /// Party name, or the sentinel when blank
    pub fn party_label(&self) -> &str {
        label_or_sentinel(&self.party_name)
    }

    pub fn is_sales(&self) -> bool {
        self.order_type == OrderType::Sales
    }

    pub fn is_purchase(&self) -> bool {
        self.order_type == OrderType::Purchase
    }
}

/// A number as found in a stored blob
///
/// Older blobs hold the rate as the raw form text, and non-finite quantities
/// were written out as `null`.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

fn deserialize_rate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StoredNumber>::deserialize(deserializer)? {
        Some(StoredNumber::Number(n)) => Some(n).filter(|n| n.is_finite()),
        Some(StoredNumber::Text(text)) => coerce_rate(&text),
        Some(StoredNumber::Other(_)) | None => None,
    })
}

/// Quantities fall back to zero when null, non-numeric or non-finite
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StoredNumber>::deserialize(deserializer)? {
        Some(StoredNumber::Number(n)) if n.is_finite() => n,
        Some(StoredNumber::Text(text)) => coerce_quantity(&text),
        _ => 0.0,
    })
}

pub(crate) fn label_or_sentinel(value: &str) -> &str {
    if value.is_empty() {
        BLANK_SENTINEL
    } else {
        value
    }
}
