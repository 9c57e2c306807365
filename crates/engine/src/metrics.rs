//! Pure metric functions over the transaction history.
//!
//! Every function filters the full collection down to one material and
//! derives a number. Sparse history never fails: missing demand, receipt or
//! cost data degrades to 0 (or to the lead-time default), so a caller always
//! has something to display.

use chrono::{DateTime, Utc};

use mahameru_core::MaterialId;
use mahameru_records::{Issuance, Receipt, StorageCost};

use crate::selection::{latest_receipt, latest_storage_cost};

/// Lead-time fallback, in days, for materials with no receipt history.
/// Keeps the reorder point from collapsing to 0 just because no deliveries
/// have been logged yet.
pub const DEFAULT_LEAD_TIME_DAYS: f64 = 7.0;

const DAYS_PER_YEAR: f64 = 365.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Average units consumed per day, from the issuance history.
///
/// Total issued quantity spread over the day span between the earliest and
/// latest issuance (rounded up, clamped to at least one day). Returns 0 with
/// no history. A single day of transactions overstates the rate; the
/// estimate stabilizes as history spreads out.
pub fn average_daily_demand(material_id: MaterialId, issuances: &[Issuance]) -> f64 {
    let mut total = 0i64;
    let mut earliest: Option<DateTime<Utc>> = None;
    let mut latest: Option<DateTime<Utc>> = None;

    for issuance in issuances.iter().filter(|i| i.material_id == material_id) {
        total += issuance.quantity;
        earliest = Some(match earliest {
            Some(e) => e.min(issuance.transaction_date),
            None => issuance.transaction_date,
        });
        latest = Some(match latest {
            Some(l) => l.max(issuance.transaction_date),
            None => issuance.transaction_date,
        });
    }

    match (earliest, latest) {
        (Some(earliest), Some(latest)) => total as f64 / day_span(earliest, latest) as f64,
        _ => 0.0,
    }
}

/// Day span between two instants, rounded up and never below one day.
fn day_span(earliest: DateTime<Utc>, latest: DateTime<Utc>) -> i64 {
    let days = (latest - earliest).num_seconds() as f64 / SECONDS_PER_DAY;
    (days.ceil() as i64).max(1)
}

/// Arithmetic mean of the recorded per-receipt lead times, in days.
///
/// Falls back to [`DEFAULT_LEAD_TIME_DAYS`] when the material has no receipt
/// history.
pub fn average_lead_time(material_id: MaterialId, receipts: &[Receipt]) -> f64 {
    let mut total = 0i64;
    let mut count = 0usize;
    for receipt in receipts.iter().filter(|r| r.material_id == material_id) {
        total += receipt.lead_time_days;
        count += 1;
    }
    if count == 0 {
        return DEFAULT_LEAD_TIME_DAYS;
    }
    total as f64 / count as f64
}

/// Reorder point: the stock level at which a new order must be placed so it
/// arrives before stock depletes.
///
/// `ceil(average daily demand × average lead time)`, always a non-negative
/// integer.
pub fn reorder_point(material_id: MaterialId, receipts: &[Receipt], issuances: &[Issuance]) -> i64 {
    let demand = average_daily_demand(material_id, issuances);
    let lead_time = average_lead_time(material_id, receipts);
    (demand * lead_time).ceil() as i64
}

/// Economic order quantity: `ceil(sqrt(2 × D × S / H))`.
///
/// Ordering cost S comes from the newest receipt and holding cost H from the
/// newest storage-cost record. Costs change over time, so the quantity
/// tracks the current cost structure rather than a stale material attribute.
/// The fallbacks run in order: no demand, no receipt, no storage-cost record
/// or a non-positive holding cost all yield 0.
pub fn economic_order_quantity(
    material_id: MaterialId,
    receipts: &[Receipt],
    issuances: &[Issuance],
    storage_costs: &[StorageCost],
) -> i64 {
    let annual_demand = average_daily_demand(material_id, issuances) * DAYS_PER_YEAR;
    if annual_demand == 0.0 {
        return 0;
    }
    let Some(receipt) = latest_receipt(material_id, receipts) else {
        return 0;
    };
    let Some(storage_cost) = latest_storage_cost(material_id, storage_costs) else {
        return 0;
    };
    if storage_cost.cost_per_unit <= 0 {
        return 0;
    }

    let ordering_cost = receipt.ordering_cost as f64;
    let holding_cost = storage_cost.cost_per_unit as f64;
    ((2.0 * annual_demand * ordering_cost) / holding_cost).sqrt().ceil() as i64
}

/// Stock level implied by the transaction log alone: received minus issued,
/// assuming an initial stock of zero.
pub fn derived_stock(material_id: MaterialId, receipts: &[Receipt], issuances: &[Issuance]) -> i64 {
    let received: i64 = receipts
        .iter()
        .filter(|r| r.material_id == material_id)
        .map(|r| r.quantity)
        .sum();
    let issued: i64 = issuances
        .iter()
        .filter(|i| i.material_id == material_id)
        .map(|i| i.quantity)
        .sum();
    received - issued
}
