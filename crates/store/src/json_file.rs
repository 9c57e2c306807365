use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use mahameru_records::{Issuance, Material, Receipt, StorageCost};

use crate::record_store::{RecordStore, StoreError, WriteBatch};

const MATERIALS_KEY: &str = "materials";
const RECEIPTS_KEY: &str = "receipts";
const ISSUANCES_KEY: &str = "issuances";
const STORAGE_COSTS_KEY: &str = "storage-costs";

/// File-backed record store: one JSON document per collection, named by the
/// fixed collection keys (`materials`, `receipts`, `issuances`,
/// `storage-costs`). A missing document reads as an empty collection.
///
/// Each collection write lands via a temp-file rename, and `apply` holds an
/// exclusive lock for the whole batch. Transaction collections are persisted
/// before materials: an interruption mid-batch leaves the logs ahead of the
/// stored stock, a state the engine's drift report can detect and repair.
#[derive(Debug)]
pub struct JsonFileStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        let path = self.document_path(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn write_collection<T: Serialize>(&self, key: &str, records: &[T]) -> Result<(), StoreError> {
        let path = self.document_path(key);
        let tmp = self.root.join(format!("{key}.json.tmp"));
        fs::write(&tmp, serde_json::to_vec_pretty(records)?)?;
        fs::rename(&tmp, &path)?;
        debug!(key, count = records.len(), "collection persisted");
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn materials(&self) -> Result<Vec<Material>, StoreError> {
        self.read_collection(MATERIALS_KEY)
    }

    fn receipts(&self) -> Result<Vec<Receipt>, StoreError> {
        self.read_collection(RECEIPTS_KEY)
    }

    fn issuances(&self) -> Result<Vec<Issuance>, StoreError> {
        self.read_collection(ISSUANCES_KEY)
    }

    fn storage_costs(&self) -> Result<Vec<StorageCost>, StoreError> {
        self.read_collection(STORAGE_COSTS_KEY)
    }

    fn apply(&self, batch: WriteBatch) -> Result<(), StoreError> {
        if batch.is_empty() {
            return Ok(());
        }

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        // Logs first, stock last.
        if let Some(receipts) = &batch.receipts {
            self.write_collection(RECEIPTS_KEY, receipts)?;
        }
        if let Some(issuances) = &batch.issuances {
            self.write_collection(ISSUANCES_KEY, issuances)?;
        }
        if let Some(storage_costs) = &batch.storage_costs {
            self.write_collection(STORAGE_COSTS_KEY, storage_costs)?;
        }
        if let Some(materials) = &batch.materials {
            self.write_collection(MATERIALS_KEY, materials)?;
        }

        Ok(())
    }
}
