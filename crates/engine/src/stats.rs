//! Per-material usage summary for the reporting screens.

use serde::Serialize;

use mahameru_core::MaterialId;
use mahameru_records::{Issuance, Receipt};

use crate::metrics::{average_daily_demand, average_lead_time, reorder_point};

/// Aggregated usage view for one material, shaped for display.
///
/// The rate fields are pre-formatted strings (two decimals for demand, one
/// for lead time) so every consumer renders them identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageStats {
    pub average_daily_demand: String,
    pub average_lead_time: String,
    pub reorder_point: i64,
    pub total_received: i64,
    pub total_issued: i64,
    pub receipt_count: usize,
    pub issuance_count: usize,
}

/// Derive the usage summary for a material from the transaction history.
pub fn usage_stats(
    material_id: MaterialId,
    receipts: &[Receipt],
    issuances: &[Issuance],
) -> UsageStats {
    let demand = average_daily_demand(material_id, issuances);
    let lead_time = average_lead_time(material_id, receipts);

    let mut total_received = 0i64;
    let mut receipt_count = 0usize;
    for receipt in receipts.iter().filter(|r| r.material_id == material_id) {
        total_received += receipt.quantity;
        receipt_count += 1;
    }

    let mut total_issued = 0i64;
    let mut issuance_count = 0usize;
    for issuance in issuances.iter().filter(|i| i.material_id == material_id) {
        total_issued += issuance.quantity;
        issuance_count += 1;
    }

    UsageStats {
        average_daily_demand: format!("{demand:.2}"),
        average_lead_time: format!("{lead_time:.1}"),
        reorder_point: reorder_point(material_id, receipts, issuances),
        total_received,
        total_issued,
        receipt_count,
        issuance_count,
    }
}
