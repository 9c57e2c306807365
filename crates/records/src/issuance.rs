use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mahameru_core::{Entity, IssuanceId, MaterialId};

/// An outgoing transaction: material issued to production or another
/// destination. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuance {
    pub id: IssuanceId,
    pub transaction_date: DateTime<Utc>,
    pub document_number: String,
    pub material_id: MaterialId,
    /// Issued quantity, always positive.
    pub quantity: i64,
    /// Where the material went (e.g. a production batch).
    pub destination: String,
    pub note: String,
}

impl Entity for Issuance {
    type Id = IssuanceId;

    fn id(&self) -> IssuanceId {
        self.id
    }
}
