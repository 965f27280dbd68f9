//! Part supply qualification against shipment thresholds

use std::collections::{BTreeSet, HashSet};

use crate::core::identity::{PartKey, SupplierKey};
use crate::entities::PartSupply;
use crate::query::shipments::ShipmentThresholds;

/// Suppliers holding more than the threshold of at least one matching part
///
/// A row with no threshold entry is skipped rather than compared against zero.
pub fn qualifying_suppliers(
    part_supplies: &[PartSupply],
    parts: &HashSet<PartKey>,
    thresholds: &ShipmentThresholds,
) -> BTreeSet<SupplierKey> {
    part_supplies
        .iter()
        .filter(|ps| parts.contains(&ps.part))
        .filter(|ps| {
            thresholds
                .exceeded_by(ps.part, ps.supplier, ps.available)
                .unwrap_or(false)
        })
        .map(|ps| ps.supplier)
        .collect()
}
