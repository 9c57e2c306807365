//! `mahameru-records` — the record collections held by the system of record.
//!
//! Four collections make up the data model: materials, receipts (incoming
//! transactions), issuances (outgoing transactions) and storage costs.
//! Receipts and issuances are append-only; materials carry the stored stock
//! level the transaction ledger keeps consistent with the logs.

pub mod issuance;
pub mod material;
pub mod receipt;
pub mod storage_cost;

pub use issuance::Issuance;
pub use material::Material;
pub use receipt::Receipt;
pub use storage_cost::StorageCost;
