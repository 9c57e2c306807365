//! Latest-record selection.
//!
//! EOQ reads its cost inputs from the most recent transactional records
//! rather than from material attributes, so "most recent" needs a single
//! definition: newest by the relevant date, and when two records collide on
//! the date, the later one in the collection wins (collections are
//! append-only, so insertion order is creation order).

use mahameru_core::MaterialId;
use mahameru_records::{Receipt, StorageCost};

/// Newest receipt for a material, by transaction date.
pub fn latest_receipt(material_id: MaterialId, receipts: &[Receipt]) -> Option<&Receipt> {
    receipts
        .iter()
        .filter(|r| r.material_id == material_id)
        .fold(None, |best, candidate| match best {
            Some(current) if candidate.transaction_date < current.transaction_date => Some(current),
            _ => Some(candidate),
        })
}

/// Newest storage-cost record for a material, by creation timestamp.
pub fn latest_storage_cost(
    material_id: MaterialId,
    storage_costs: &[StorageCost],
) -> Option<&StorageCost> {
    storage_costs
        .iter()
        .filter(|c| c.material_id == material_id)
        .fold(None, |best, candidate| match best {
            Some(current) if candidate.created_at < current.created_at => Some(current),
            _ => Some(candidate),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use mahameru_core::{ReceiptId, StorageCostId};

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn receipt(material_id: MaterialId, day: DateTime<Utc>, ordering_cost: i64) -> Receipt {
        Receipt {
            id: ReceiptId::new(),
            transaction_date: day,
            document_number: "RCV".to_string(),
            material_id,
            quantity: 1,
            supplier: "PT Sumber".to_string(),
            lead_time_days: 0,
            ordered_date: day,
            ordering_cost,
            note: String::new(),
        }
    }

    fn storage_cost(material_id: MaterialId, created_at: DateTime<Utc>, cost: i64) -> StorageCost {
        StorageCost {
            id: StorageCostId::new(),
            material_id,
            cost_per_unit: cost,
            period: "2024".to_string(),
            note: String::new(),
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn picks_the_newest_receipt_by_date() {
        let id = MaterialId::new();
        let receipts = vec![
            receipt(id, date(2024, 3, 10), 100),
            receipt(id, date(2024, 1, 5), 200),
            receipt(id, date(2024, 2, 20), 300),
        ];
        assert_eq!(latest_receipt(id, &receipts).unwrap().ordering_cost, 100);
    }

    #[test]
    fn date_tie_resolves_to_the_later_record() {
        let id = MaterialId::new();
        let day = date(2024, 3, 10);
        let receipts = vec![receipt(id, day, 100), receipt(id, day, 200)];
        assert_eq!(latest_receipt(id, &receipts).unwrap().ordering_cost, 200);
    }

    #[test]
    fn ignores_other_materials() {
        let id = MaterialId::new();
        let other = MaterialId::new();
        let receipts = vec![receipt(other, date(2024, 3, 10), 100)];
        assert!(latest_receipt(id, &receipts).is_none());
    }

    #[test]
    fn picks_the_newest_storage_cost_by_creation() {
        let id = MaterialId::new();
        let costs = vec![
            storage_cost(id, date(2023, 1, 1), 2_000),
            storage_cost(id, date(2024, 1, 1), 2_500),
        ];
        assert_eq!(latest_storage_cost(id, &costs).unwrap().cost_per_unit, 2_500);
    }

    #[test]
    fn storage_cost_tie_resolves_to_the_later_record() {
        let id = MaterialId::new();
        let day = date(2024, 1, 1);
        let costs = vec![storage_cost(id, day, 2_000), storage_cost(id, day, 2_500)];
        assert_eq!(latest_storage_cost(id, &costs).unwrap().cost_per_unit, 2_500);
    }
}
