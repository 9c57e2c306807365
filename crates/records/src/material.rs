use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mahameru_core::{Entity, MaterialId};

/// A raw material tracked by the inventory system.
///
/// Owned by the record store. The `current_stock` field is mutated only by
/// the transaction ledger; every other field belongs to the catalogue
/// maintenance screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    /// Short catalogue code (e.g. "BB001").
    pub code: String,
    pub name: String,
    /// Unit-of-measure label shown next to quantities (e.g. "Meter", "Kg").
    pub unit: String,
    /// Stored stock level. Must equal the sum of receipt quantities minus the
    /// sum of issuance quantities for this material.
    pub current_stock: i64,
    /// Price per unit, in the smallest currency unit.
    pub unit_price: i64,
    /// Fixed cost per purchase order, in the smallest currency unit.
    pub ordering_cost: i64,
    /// Per-material holding cost carried by older data sets. Current holding
    /// cost is read from the newest storage-cost record instead.
    pub holding_cost: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Material {
    type Id = MaterialId;

    fn id(&self) -> MaterialId {
        self.id
    }
}
