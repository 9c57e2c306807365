//! Transaction recording against the record store.
//!
//! The ledger is the sole writer of `Material::current_stock`. Every
//! operation resolves the referenced material first and aborts before any
//! write on failure; the appended transaction and the stock change then
//! travel in one [`WriteBatch`], so the store never sees a half-applied
//! movement.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use mahameru_core::{DomainError, IssuanceId, MaterialId, ReceiptId};
use mahameru_records::{Issuance, Receipt};
use mahameru_store::{RecordStore, StoreError, WriteBatch};

use crate::metrics::derived_stock;

/// Failure while recording a transaction: either the draft violated a domain
/// rule or the store could not be read/written.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Form input for recording an incoming transaction.
///
/// The lead time is not part of the form; it is derived from the order and
/// receiving dates when the receipt is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptDraft {
    pub transaction_date: DateTime<Utc>,
    pub document_number: String,
    pub material_id: MaterialId,
    pub quantity: i64,
    pub supplier: String,
    pub ordered_date: DateTime<Utc>,
    pub ordering_cost: i64,
    pub note: String,
}

impl ReceiptDraft {
    fn validate(&self) -> Result<(), DomainError> {
        if self.quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if self.document_number.trim().is_empty() {
            return Err(DomainError::validation("document number cannot be empty"));
        }
        if self.ordering_cost < 0 {
            return Err(DomainError::validation("ordering cost cannot be negative"));
        }
        Ok(())
    }
}

/// Form input for recording an outgoing transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceDraft {
    pub transaction_date: DateTime<Utc>,
    pub document_number: String,
    pub material_id: MaterialId,
    pub quantity: i64,
    pub destination: String,
    pub note: String,
}

impl IssuanceDraft {
    fn validate(&self) -> Result<(), DomainError> {
        if self.quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if self.document_number.trim().is_empty() {
            return Err(DomainError::validation("document number cannot be empty"));
        }
        Ok(())
    }
}

/// A material whose stored stock disagrees with the transaction log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockDrift {
    pub material_id: MaterialId,
    pub stored: i64,
    pub derived: i64,
}

/// Records receipts and issuances and keeps material stock consistent with
/// the transaction logs.
pub struct TransactionLedger<S> {
    store: S,
}

impl<S: RecordStore> TransactionLedger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record goods received from a supplier.
    ///
    /// Derives the receipt's lead time from the order and receiving dates,
    /// appends the receipt and increments the material's stock in one
    /// commit. Fails with [`DomainError::MaterialNotFound`] when the
    /// referenced material does not resolve.
    pub fn record_receipt(&self, draft: ReceiptDraft) -> Result<Receipt, LedgerError> {
        draft.validate()?;

        let mut materials = self.store.materials()?;
        let material = materials
            .iter_mut()
            .find(|m| m.id == draft.material_id)
            .ok_or(DomainError::MaterialNotFound(draft.material_id))?;

        let lead_time_days = Receipt::lead_time_between(draft.ordered_date, draft.transaction_date);
        let receipt = Receipt {
            id: ReceiptId::new(),
            transaction_date: draft.transaction_date,
            document_number: draft.document_number,
            material_id: draft.material_id,
            quantity: draft.quantity,
            supplier: draft.supplier,
            lead_time_days,
            ordered_date: draft.ordered_date,
            ordering_cost: draft.ordering_cost,
            note: draft.note,
        };

        material.current_stock += receipt.quantity;

        let mut receipts = self.store.receipts()?;
        receipts.push(receipt.clone());

        self.store.apply(
            WriteBatch::new()
                .with_receipts(receipts)
                .with_materials(materials),
        )?;

        info!(
            material_id = %receipt.material_id,
            quantity = receipt.quantity,
            lead_time_days,
            "receipt recorded"
        );
        Ok(receipt)
    }

    /// Record material issued to a destination.
    ///
    /// Rejects with [`DomainError::InsufficientStock`] before any write when
    /// the material has fewer units on hand than requested.
    pub fn record_issuance(&self, draft: IssuanceDraft) -> Result<Issuance, LedgerError> {
        draft.validate()?;

        let mut materials = self.store.materials()?;
        let material = materials
            .iter_mut()
            .find(|m| m.id == draft.material_id)
            .ok_or(DomainError::MaterialNotFound(draft.material_id))?;

        if material.current_stock < draft.quantity {
            return Err(
                DomainError::insufficient_stock(draft.quantity, material.current_stock).into(),
            );
        }

        let issuance = Issuance {
            id: IssuanceId::new(),
            transaction_date: draft.transaction_date,
            document_number: draft.document_number,
            material_id: draft.material_id,
            quantity: draft.quantity,
            destination: draft.destination,
            note: draft.note,
        };

        material.current_stock -= issuance.quantity;

        let mut issuances = self.store.issuances()?;
        issuances.push(issuance.clone());

        self.store.apply(
            WriteBatch::new()
                .with_issuances(issuances)
                .with_materials(materials),
        )?;

        info!(
            material_id = %issuance.material_id,
            quantity = issuance.quantity,
            "issuance recorded"
        );
        Ok(issuance)
    }

    /// Materials whose stored stock disagrees with the transaction logs.
    ///
    /// Empty on a healthy store. A non-empty report means a write was torn
    /// outside the ledger (or records were edited directly); the derived
    /// value is the one to trust.
    pub fn stock_drift(&self) -> Result<Vec<StockDrift>, LedgerError> {
        let materials = self.store.materials()?;
        let receipts = self.store.receipts()?;
        let issuances = self.store.issuances()?;

        Ok(materials
            .iter()
            .filter_map(|material| {
                let derived = derived_stock(material.id, &receipts, &issuances);
                (derived != material.current_stock).then_some(StockDrift {
                    material_id: material.id,
                    stored: material.current_stock,
                    derived,
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mahameru_records::Material;
    use mahameru_store::InMemoryRecordStore;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn seeded_ledger(stock: i64) -> (TransactionLedger<InMemoryRecordStore>, MaterialId) {
        let store = InMemoryRecordStore::new();
        let material_id = MaterialId::new();
        store
            .save_materials(vec![Material {
                id: material_id,
                code: "BB001".to_string(),
                name: "Kain Cotton Combed 30s".to_string(),
                unit: "Meter".to_string(),
                current_stock: stock,
                unit_price: 35_000,
                ordering_cost: 150_000,
                holding_cost: Some(2_500),
                created_at: Utc::now(),
            }])
            .unwrap();
        (TransactionLedger::new(store), material_id)
    }

    fn receipt_draft(material_id: MaterialId, quantity: i64) -> ReceiptDraft {
        ReceiptDraft {
            transaction_date: date(2024, 3, 10),
            document_number: "RCV-001".to_string(),
            material_id,
            quantity,
            supplier: "PT Sumber Tekstil".to_string(),
            ordered_date: date(2024, 3, 4),
            ordering_cost: 150_000,
            note: String::new(),
        }
    }

    fn issuance_draft(material_id: MaterialId, quantity: i64) -> IssuanceDraft {
        IssuanceDraft {
            transaction_date: date(2024, 3, 12),
            document_number: "ISS-001".to_string(),
            material_id,
            quantity,
            destination: "Produksi Batch 12".to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn receipt_appends_record_and_increments_stock() {
        let (ledger, material_id) = seeded_ledger(100);

        let receipt = ledger.record_receipt(receipt_draft(material_id, 50)).unwrap();

        assert_eq!(receipt.lead_time_days, 6);
        let materials = ledger.store().materials().unwrap();
        assert_eq!(materials[0].current_stock, 150);
        let receipts = ledger.store().receipts().unwrap();
        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0], receipt);
    }

    #[test]
    fn receipt_clamps_negative_lead_time_to_zero() {
        let (ledger, material_id) = seeded_ledger(0);
        let mut draft = receipt_draft(material_id, 10);
        draft.ordered_date = date(2024, 3, 20); // after the receiving date

        let receipt = ledger.record_receipt(draft).unwrap();
        assert_eq!(receipt.lead_time_days, 0);
    }

    #[test]
    fn receipt_rejects_unknown_material() {
        let (ledger, _) = seeded_ledger(0);
        let unknown = MaterialId::new();

        let err = ledger.record_receipt(receipt_draft(unknown, 10)).unwrap_err();
        match err {
            LedgerError::Domain(DomainError::MaterialNotFound(id)) => assert_eq!(id, unknown),
            other => panic!("expected MaterialNotFound, got {other:?}"),
        }
        assert!(ledger.store().receipts().unwrap().is_empty());
    }

    #[test]
    fn issuance_appends_record_and_decrements_stock() {
        let (ledger, material_id) = seeded_ledger(100);

        ledger.record_issuance(issuance_draft(material_id, 30)).unwrap();

        assert_eq!(ledger.store().materials().unwrap()[0].current_stock, 70);
        assert_eq!(ledger.store().issuances().unwrap().len(), 1);
    }

    #[test]
    fn issuance_rejects_insufficient_stock_without_writing() {
        let (ledger, material_id) = seeded_ledger(20);

        let err = ledger.record_issuance(issuance_draft(material_id, 30)).unwrap_err();
        match err {
            LedgerError::Domain(DomainError::InsufficientStock {
                requested,
                available,
            }) => {
                assert_eq!(requested, 30);
                assert_eq!(available, 20);
            }
            other => panic!("expected InsufficientStock, got {other:?}"),
        }

        assert!(ledger.store().issuances().unwrap().is_empty());
        assert_eq!(ledger.store().materials().unwrap()[0].current_stock, 20);
    }

    #[test]
    fn issuance_rejects_unknown_material() {
        let (ledger, _) = seeded_ledger(100);
        let unknown = MaterialId::new();

        let err = ledger
            .record_issuance(issuance_draft(unknown, 10))
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Domain(DomainError::MaterialNotFound(_))
        ));
    }

    #[test]
    fn drafts_reject_nonpositive_quantity() {
        let (ledger, material_id) = seeded_ledger(100);

        let err = ledger.record_receipt(receipt_draft(material_id, 0)).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Domain(DomainError::Validation(_))
        ));

        let err = ledger
            .record_issuance(issuance_draft(material_id, -5))
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Domain(DomainError::Validation(_))
        ));
    }

    #[test]
    fn drafts_reject_blank_document_number() {
        let (ledger, material_id) = seeded_ledger(100);
        let mut draft = receipt_draft(material_id, 10);
        draft.document_number = "   ".to_string();

        let err = ledger.record_receipt(draft).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Domain(DomainError::Validation(_))
        ));
    }

    #[test]
    fn stock_stays_consistent_with_the_logs() {
        let (ledger, material_id) = seeded_ledger(0);

        ledger.record_receipt(receipt_draft(material_id, 80)).unwrap();
        ledger.record_receipt(receipt_draft(material_id, 40)).unwrap();
        ledger.record_issuance(issuance_draft(material_id, 50)).unwrap();

        assert_eq!(ledger.store().materials().unwrap()[0].current_stock, 70);
        assert!(ledger.stock_drift().unwrap().is_empty());
    }

    #[test]
    fn stock_drift_reports_tampered_stock() {
        let (ledger, material_id) = seeded_ledger(0);
        ledger.record_receipt(receipt_draft(material_id, 80)).unwrap();

        // Edit the stored stock behind the ledger's back.
        let mut materials = ledger.store().materials().unwrap();
        materials[0].current_stock = 75;
        ledger.store().save_materials(materials).unwrap();

        let drift = ledger.stock_drift().unwrap();
        assert_eq!(drift.len(), 1);
        assert_eq!(drift[0].stored, 75);
        assert_eq!(drift[0].derived, 80);
    }
}
