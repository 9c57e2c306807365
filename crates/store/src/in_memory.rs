use std::sync::RwLock;

use mahameru_records::{Issuance, Material, Receipt, StorageCost};

use crate::record_store::{RecordStore, StoreError, WriteBatch};
use crate::seed;

#[derive(Debug, Default)]
struct Collections {
    materials: Vec<Material>,
    receipts: Vec<Receipt>,
    issuances: Vec<Issuance>,
    storage_costs: Vec<StorageCost>,
}

/// In-memory record store.
///
/// Intended for tests/dev. `apply` swaps all batched collections under one
/// write lock, so a batch is fully atomic.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    collections: RwLock<Collections>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the first-run material catalogue.
    pub fn with_sample_catalogue() -> Self {
        let store = Self::new();
        {
            let mut collections = store
                .collections
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            collections.materials = seed::sample_materials();
        }
        store
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Collections>, StoreError> {
        self.collections
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))
    }
}

impl RecordStore for InMemoryRecordStore {
    fn materials(&self) -> Result<Vec<Material>, StoreError> {
        Ok(self.read()?.materials.clone())
    }

    fn receipts(&self) -> Result<Vec<Receipt>, StoreError> {
        Ok(self.read()?.receipts.clone())
    }

    fn issuances(&self) -> Result<Vec<Issuance>, StoreError> {
        Ok(self.read()?.issuances.clone())
    }

    fn storage_costs(&self) -> Result<Vec<StorageCost>, StoreError> {
        Ok(self.read()?.storage_costs.clone())
    }

    fn apply(&self, batch: WriteBatch) -> Result<(), StoreError> {
        if batch.is_empty() {
            return Ok(());
        }

        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        if let Some(materials) = batch.materials {
            collections.materials = materials;
        }
        if let Some(receipts) = batch.receipts {
            collections.receipts = receipts;
        }
        if let Some(issuances) = batch.issuances {
            collections.issuances = issuances;
        }
        if let Some(storage_costs) = batch.storage_costs {
            collections.storage_costs = storage_costs;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mahameru_core::{MaterialId, ReceiptId};

    fn material(code: &str) -> Material {
        Material {
            id: MaterialId::new(),
            code: code.to_string(),
            name: format!("Material {code}"),
            unit: "Meter".to_string(),
            current_stock: 0,
            unit_price: 1_000,
            ordering_cost: 10_000,
            holding_cost: None,
            created_at: Utc::now(),
        }
    }

    fn receipt(material_id: MaterialId) -> Receipt {
        Receipt {
            id: ReceiptId::new(),
            transaction_date: Utc::now(),
            document_number: "RCV-001".to_string(),
            material_id,
            quantity: 10,
            supplier: "PT Sumber".to_string(),
            lead_time_days: 3,
            ordered_date: Utc::now(),
            ordering_cost: 10_000,
            note: String::new(),
        }
    }

    #[test]
    fn new_store_is_empty() {
        let store = InMemoryRecordStore::new();
        assert!(store.materials().unwrap().is_empty());
        assert!(store.receipts().unwrap().is_empty());
        assert!(store.issuances().unwrap().is_empty());
        assert!(store.storage_costs().unwrap().is_empty());
    }

    #[test]
    fn apply_replaces_only_batched_collections() {
        let store = InMemoryRecordStore::new();
        let m = material("BB001");
        store.save_materials(vec![m.clone()]).unwrap();

        store
            .apply(WriteBatch::new().with_receipts(vec![receipt(m.id)]))
            .unwrap();

        assert_eq!(store.materials().unwrap(), vec![m]);
        assert_eq!(store.receipts().unwrap().len(), 1);
    }

    #[test]
    fn apply_commits_multiple_collections_together() {
        let store = InMemoryRecordStore::new();
        let mut m = material("BB002");
        m.current_stock = 10;
        let r = receipt(m.id);

        store
            .apply(
                WriteBatch::new()
                    .with_materials(vec![m.clone()])
                    .with_receipts(vec![r]),
            )
            .unwrap();

        assert_eq!(store.materials().unwrap()[0].current_stock, 10);
        assert_eq!(store.receipts().unwrap().len(), 1);
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let store = InMemoryRecordStore::new();
        store.save_materials(vec![material("BB003")]).unwrap();
        store.apply(WriteBatch::new()).unwrap();
        assert_eq!(store.materials().unwrap().len(), 1);
    }

    #[test]
    fn sample_catalogue_starts_with_zero_stock() {
        let store = InMemoryRecordStore::with_sample_catalogue();
        let materials = store.materials().unwrap();
        assert_eq!(materials.len(), 10);
        assert!(materials.iter().all(|m| m.current_stock == 0));
    }
}
