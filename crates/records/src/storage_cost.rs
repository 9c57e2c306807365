use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mahameru_core::{Entity, MaterialId, StorageCostId};

/// Cost of holding one unit of a material for one year.
///
/// A material can carry one record per period; the newest record by
/// `created_at` is the current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageCost {
    pub id: StorageCostId,
    pub material_id: MaterialId,
    /// Cost per unit per year, in the smallest currency unit.
    pub cost_per_unit: i64,
    /// Human-readable period label (e.g. "2024", "2024-H1").
    pub period: String,
    pub note: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for StorageCost {
    type Id = StorageCostId;

    fn id(&self) -> StorageCostId {
        self.id
    }
}
