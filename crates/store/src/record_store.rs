use std::sync::Arc;

use thiserror::Error;

use mahameru_records::{Issuance, Material, Receipt, StorageCost};

/// Record store operation error.
///
/// These are **infrastructure errors** (io, serialization, backend state) as
/// opposed to domain errors (validation, stock invariants).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("record serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Batched collection writes, committed by [`RecordStore::apply`].
///
/// Only the collections set on the batch are touched. Each one replaces the
/// stored collection wholesale, mirroring the read contract (full collection
/// per read). A transaction append plus the matching stock change travel in
/// the same batch so the stock invariant survives the write.
#[derive(Debug, Clone, Default)]
pub struct WriteBatch {
    pub materials: Option<Vec<Material>>,
    pub receipts: Option<Vec<Receipt>>,
    pub issuances: Option<Vec<Issuance>>,
    pub storage_costs: Option<Vec<StorageCost>>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_materials(mut self, materials: Vec<Material>) -> Self {
        self.materials = Some(materials);
        self
    }

    pub fn with_receipts(mut self, receipts: Vec<Receipt>) -> Self {
        self.receipts = Some(receipts);
        self
    }

    pub fn with_issuances(mut self, issuances: Vec<Issuance>) -> Self {
        self.issuances = Some(issuances);
        self
    }

    pub fn with_storage_costs(mut self, storage_costs: Vec<StorageCost>) -> Self {
        self.storage_costs = Some(storage_costs);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_none()
            && self.receipts.is_none()
            && self.issuances.is_none()
            && self.storage_costs.is_none()
    }
}

/// Read/write contract of the system of record.
///
/// Reads return the full in-memory collection; there is no query language and
/// no pagination. Writes go through [`apply`](RecordStore::apply), which must
/// commit every collection in the batch as a single operation; callers may
/// never observe a state where only part of a batch landed.
///
/// The store assumes a single writer (last write wins); implementations
/// serialize concurrent `apply` calls but do not coordinate across processes.
pub trait RecordStore: Send + Sync {
    fn materials(&self) -> Result<Vec<Material>, StoreError>;

    fn receipts(&self) -> Result<Vec<Receipt>, StoreError>;

    fn issuances(&self) -> Result<Vec<Issuance>, StoreError>;

    fn storage_costs(&self) -> Result<Vec<StorageCost>, StoreError>;

    /// Commit every collection in the batch atomically.
    fn apply(&self, batch: WriteBatch) -> Result<(), StoreError>;

    fn save_materials(&self, materials: Vec<Material>) -> Result<(), StoreError> {
        self.apply(WriteBatch::new().with_materials(materials))
    }

    fn save_receipts(&self, receipts: Vec<Receipt>) -> Result<(), StoreError> {
        self.apply(WriteBatch::new().with_receipts(receipts))
    }

    fn save_issuances(&self, issuances: Vec<Issuance>) -> Result<(), StoreError> {
        self.apply(WriteBatch::new().with_issuances(issuances))
    }

    fn save_storage_costs(&self, storage_costs: Vec<StorageCost>) -> Result<(), StoreError> {
        self.apply(WriteBatch::new().with_storage_costs(storage_costs))
    }
}

impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    fn materials(&self) -> Result<Vec<Material>, StoreError> {
        (**self).materials()
    }

    fn receipts(&self) -> Result<Vec<Receipt>, StoreError> {
        (**self).receipts()
    }

    fn issuances(&self) -> Result<Vec<Issuance>, StoreError> {
        (**self).issuances()
    }

    fn storage_costs(&self) -> Result<Vec<StorageCost>, StoreError> {
        (**self).storage_costs()
    }

    fn apply(&self, batch: WriteBatch) -> Result<(), StoreError> {
        (**self).apply(batch)
    }
}
