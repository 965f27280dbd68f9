//! Supplier and nation resolution

use std::collections::{BTreeSet, HashMap};
use tracing::warn;

use crate::core::identity::{NationKey, SupplierKey};
use crate::entities::{Nation, Supplier};

/// A qualifying supplier located in the requested nation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierRow {
    pub key: SupplierKey,
    pub name: String,
    pub address: String,
}

/// Qualifying suppliers whose nation is named exactly `nation_name`
///
/// A supplier whose nation_id has no nation row is dropped with a warning.
pub fn resolve_suppliers(
    suppliers: &[Supplier],
    nations: &[Nation],
    qualifying: &BTreeSet<SupplierKey>,
    nation_name: &str,
) -> Vec<SupplierRow> {
    let nation_names: HashMap<NationKey, &str> =
        nations.iter().map(|n| (n.key, n.name.as_str())).collect();

    suppliers
        .iter()
        .filter(|s| qualifying.contains(&s.key))
        .filter(|s| match nation_names.get(&s.nation) {
            Some(name) => *name == nation_name,
            None => {
                warn!(supplier = %s.key, nation = %s.nation, "supplier references unknown nation");
                false
            }
        })
        .map(|s| SupplierRow {
            key: s.key,
            name: s.name.clone(),
            address: s.address.clone(),
        })
        .collect()
}
