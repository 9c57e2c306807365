//! First-run material catalogue.
//!
//! A fresh install ships with the raw materials of a small garment
//! manufacturer so the screens have something to show before any
//! transactions are recorded.

use chrono::Utc;

use mahameru_core::MaterialId;
use mahameru_records::Material;

/// The catalogue shipped with a fresh install. Stock starts at zero; it is
/// built up exclusively through recorded receipts.
pub fn sample_materials() -> Vec<Material> {
    let catalogue: [(&str, &str, &str, i64, i64, i64); 10] = [
        ("BB001", "Kain Cotton Combed 30s", "Meter", 35_000, 150_000, 2_500),
        ("BB002", "Kain Polyester PE", "Meter", 28_000, 120_000, 2_000),
        ("BB003", "Benang Jahit Polyester", "Cone", 15_000, 80_000, 1_000),
        ("BB004", "Benang Obras", "Cone", 12_000, 70_000, 800),
        ("BB005", "Rib Kain (Bahan Kerah)", "Meter", 25_000, 100_000, 1_500),
        ("BB006", "Tinta Sablon Rubber Putih", "Kg", 75_000, 80_000, 3_000),
        ("BB007", "Tinta Sablon Rubber Hitam", "Kg", 75_000, 80_000, 3_000),
        ("BB008", "Tinta Sablon Plastisol", "Kg", 95_000, 90_000, 3_500),
        ("BB009", "Kardus Packing Kaos (30x25x5 cm)", "Pcs", 3_500, 60_000, 200),
        ("BB010", "Kardus Packing Kemeja (35x30x7 cm)", "Pcs", 4_500, 60_000, 250),
    ];

    catalogue
        .into_iter()
        .map(
            |(code, name, unit, unit_price, ordering_cost, holding_cost)| Material {
                id: MaterialId::new(),
                code: code.to_string(),
                name: name.to_string(),
                unit: unit.to_string(),
                current_stock: 0,
                unit_price,
                ordering_cost,
                holding_cost: Some(holding_cost),
                created_at: Utc::now(),
            },
        )
        .collect()
}
