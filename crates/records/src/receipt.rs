use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mahameru_core::{Entity, MaterialId, ReceiptId};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// An incoming transaction: goods received from a supplier.
///
/// Receipts are immutable once recorded and append-only within their
/// collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: ReceiptId,
    /// Date the goods arrived.
    pub transaction_date: DateTime<Utc>,
    pub document_number: String,
    pub material_id: MaterialId,
    /// Received quantity, always positive.
    pub quantity: i64,
    pub supplier: String,
    /// Whole days between placing the order and receiving it, never negative.
    pub lead_time_days: i64,
    /// Date the order was placed.
    pub ordered_date: DateTime<Utc>,
    /// Ordering cost attributed to this purchase, in the smallest currency
    /// unit.
    pub ordering_cost: i64,
    pub note: String,
}

impl Receipt {
    /// Whole-day lead time between ordering and receiving.
    ///
    /// Fractional days round up; an order date after the receiving date
    /// clamps to 0.
    pub fn lead_time_between(ordered: DateTime<Utc>, received: DateTime<Utc>) -> i64 {
        let days = (received - ordered).num_seconds() as f64 / SECONDS_PER_DAY;
        (days.ceil() as i64).max(0)
    }
}

impl Entity for Receipt {
    type Id = ReceiptId;

    fn id(&self) -> ReceiptId {
        self.id
    }
}
