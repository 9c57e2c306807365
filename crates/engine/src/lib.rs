//! `mahameru-engine` — the inventory calculation engine.
//!
//! Two halves:
//!
//! - **Metric functions** ([`metrics`], [`selection`], [`stats`]): pure
//!   derivations over the transaction history: average daily demand,
//!   average lead time, reorder point (ROP), economic order quantity (EOQ)
//!   and the per-material usage summary. No side effects, no stored state;
//!   sparse history degrades to documented fallback values instead of
//!   failing.
//! - **Transaction ledger** ([`ledger`]): the only stateful operation.
//!   Records receipts and issuances against an injected
//!   [`RecordStore`](mahameru_store::RecordStore) and keeps each material's
//!   stored stock consistent with the logs.

pub mod ledger;
pub mod metrics;
pub mod selection;
pub mod stats;

pub use ledger::{IssuanceDraft, LedgerError, ReceiptDraft, StockDrift, TransactionLedger};
pub use metrics::{
    DEFAULT_LEAD_TIME_DAYS, average_daily_demand, average_lead_time, derived_stock,
    economic_order_quantity, reorder_point,
};
pub use selection::{latest_receipt, latest_storage_cost};
pub use stats::{UsageStats, usage_stats};
