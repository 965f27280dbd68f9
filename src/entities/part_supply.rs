//! Part supply entity type - On-hand inventory of a part at a supplier

use serde::{Deserialize, Serialize};

use crate::core::entity::Record;
use crate::core::identity::{PartKey, SupplierKey};

/// One row of the `partsupp` table
///
/// The (part, supplier) pair is unique across the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartSupply {
    #[serde(rename = "part_id", alias = "ps_partkey")]
    pub part: PartKey,

    #[serde(rename = "supplier_id", alias = "ps_suppkey")]
    pub supplier: SupplierKey,

    /// Signed so that a negative value in the input is reported, not a parse failure
    #[serde(rename = "available_quantity", alias = "ps_availqty")]
    pub available: i64,
}

impl Record for PartSupply {
    const TABLE: &'static str = "partsupp";
    // ps_partkey|ps_suppkey|ps_availqty|ps_supplycost|ps_comment
    const TBL_COLUMNS: &'static [usize] = &[0, 1, 2];
}

impl PartSupply {
    pub fn new(part: impl Into<PartKey>, supplier: impl Into<SupplierKey>, available: i64) -> Self {
        Self {
            part: part.into(),
            supplier: supplier.into(),
            available,
        }
    }
}
