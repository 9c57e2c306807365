//! Walk through the engine end to end: seed a store, record a delivery and
//! a production draw, then print the control metrics for the material.
//!
//! ```sh
//! cargo run -p mahameru-engine --example quickstart
//! ```

use std::sync::Arc;

use anyhow::Result;
use chrono::{Duration, Utc};

use mahameru_core::{StorageCostId, find_by_id};
use mahameru_engine::{
    IssuanceDraft, ReceiptDraft, TransactionLedger, economic_order_quantity, usage_stats,
};
use mahameru_records::StorageCost;
use mahameru_store::{InMemoryRecordStore, RecordStore};

fn main() -> Result<()> {
    mahameru_observability::tracing::init();

    let store = Arc::new(InMemoryRecordStore::with_sample_catalogue());
    let materials = store.materials()?;
    let material = &materials[0];
    println!("material: {} ({})", material.name, material.code);

    // Current holding cost for the material, one record per period.
    store.save_storage_costs(vec![StorageCost {
        id: StorageCostId::new(),
        material_id: material.id,
        cost_per_unit: material.holding_cost.unwrap_or(2_500),
        period: "2024".to_string(),
        note: String::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }])?;

    let ledger = TransactionLedger::new(store.clone());

    let today = Utc::now();
    ledger.record_receipt(ReceiptDraft {
        transaction_date: today - Duration::days(10),
        document_number: "RCV-0001".to_string(),
        material_id: material.id,
        quantity: 200,
        supplier: "PT Sumber Tekstil".to_string(),
        ordered_date: today - Duration::days(16),
        ordering_cost: material.ordering_cost,
        note: "initial delivery".to_string(),
    })?;
    ledger.record_issuance(IssuanceDraft {
        transaction_date: today - Duration::days(3),
        document_number: "ISS-0001".to_string(),
        material_id: material.id,
        quantity: 60,
        destination: "Produksi Batch 1".to_string(),
        note: String::new(),
    })?;

    let materials = store.materials()?;
    let receipts = store.receipts()?;
    let issuances = store.issuances()?;
    let storage_costs = store.storage_costs()?;

    let on_hand = find_by_id(&materials, material.id)
        .map(|m| m.current_stock)
        .unwrap_or_default();
    println!("on hand:  {} {}", on_hand, material.unit);

    let stats = usage_stats(material.id, &receipts, &issuances);
    println!("demand:   {}/day", stats.average_daily_demand);
    println!("lead:     {} days", stats.average_lead_time);
    println!("ROP:      {}", stats.reorder_point);
    println!(
        "EOQ:      {}",
        economic_order_quantity(material.id, &receipts, &issuances, &storage_costs)
    );

    Ok(())
}
