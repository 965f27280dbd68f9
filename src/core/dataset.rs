//! The five materialized input tables

use std::collections::HashSet;

use serde::Serialize;

use crate::core::error::QueryError;
use crate::core::identity::NationKey;
use crate::entities::{LineItem, Nation, Part, PartSupply, Supplier};

/// Read-only input tables for one evaluation
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub suppliers: Vec<Supplier>,
    pub nations: Vec<Nation>,
    pub parts: Vec<Part>,
    pub part_supplies: Vec<PartSupply>,
    pub line_items: Vec<LineItem>,
}

/// Row counts reported by `partpromo check`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub suppliers: usize,
    pub nations: usize,
    pub parts: usize,
    pub part_supplies: usize,
    pub line_items: usize,
    /// Suppliers whose nation_id has no nation row
    pub unresolved_suppliers: usize,
}

impl Dataset {
    /// Check the table invariants the query relies on
    ///
    /// Fails on the first duplicate partsupp pair or negative quantity.
    pub fn validate(&self) -> Result<(), QueryError> {
        let mut seen = HashSet::with_capacity(self.part_supplies.len());
        for ps in &self.part_supplies {
            if ps.available < 0 {
                return Err(QueryError::NegativeAvailableQuantity {
                    part: ps.part,
                    supplier: ps.supplier,
                    quantity: ps.available,
                });
            }
            if !seen.insert((ps.part, ps.supplier)) {
                return Err(QueryError::DuplicatePartSupply {
                    part: ps.part,
                    supplier: ps.supplier,
                });
            }
        }

        if let Some(item) = self.line_items.iter().find(|l| l.quantity.is_negative()) {
            return Err(QueryError::NegativeShipmentQuantity {
                part: item.part,
                supplier: item.supplier,
                quantity: item.quantity,
            });
        }

        Ok(())
    }

    pub fn summary(&self) -> DatasetSummary {
        let nation_keys: HashSet<NationKey> = self.nations.iter().map(|n| n.key).collect();

        DatasetSummary {
            suppliers: self.suppliers.len(),
            nations: self.nations.len(),
            parts: self.parts.len(),
            part_supplies: self.part_supplies.len(),
            line_items: self.line_items.len(),
            unresolved_suppliers: self
                .suppliers
                .iter()
                .filter(|s| !nation_keys.contains(&s.nation))
                .count(),
        }
    }
}
