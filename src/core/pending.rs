//! Pending (outstanding) quantity rule
//!
//! The same rule applies to a single order and to any aggregate of orders:
//! ordered minus delivered, rounded to three decimal places.

use serde::{Deserialize, Serialize};

/// Decimal places kept in a pending figure
pub const PENDING_DECIMALS: u32 = 3;

/// Round to the nearest integer, halves rounding toward positive infinity
///
/// `x.fract()` is exact, so values just below a half (such as
/// `0.49999999999999994`) round down instead of being pushed up by `+ 0.5`.
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Round to three decimal places, halves rounding toward positive infinity
///
/// Values too large to scale are already whole numbers and come back as is.
pub fn round3(value: f64) -> f64 {
    let factor = 10_f64.powi(PENDING_DECIMALS as i32);
    let scaled = value * factor;
    let rounded = if scaled.is_finite() {
        round_half_up(scaled) / factor
    } else {
        value
    };
    // -0.0 would otherwise print as "-0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Outstanding balance: `round3(quantity - quantity_given)`
///
/// Negative results are valid and mean more was delivered than ordered.
pub fn compute_pending(quantity: f64, quantity_given: f64) -> f64 {
    round3(quantity - quantity_given)
}

/// Sign of a pending figure, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingStatus {
    /// Still to be delivered
    Outstanding,
    /// Fully delivered
    Settled,
    /// Delivered more than ordered
    OverDelivered,
}

impl PendingStatus {
    pub fn of(pending: f64) -> Self {
        if pending > 0.0 {
            PendingStatus::Outstanding
        } else if pending < 0.0 {
            PendingStatus::OverDelivered
        } else {
            PendingStatus::Settled
        }
    }

    pub fn is_outstanding(&self) -> bool {
        matches!(self, PendingStatus::Outstanding)
    }
}
