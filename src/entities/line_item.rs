//! Line item entity type - Individual shipment events

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::Record;
use crate::core::identity::{PartKey, SupplierKey};
use crate::core::quantity::Quantity;

/// One row of the `lineitem` table
///
/// Many rows may share the same (part, supplier) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "part_id", alias = "l_partkey")]
    pub part: PartKey,

    #[serde(rename = "supplier_id", alias = "l_suppkey")]
    pub supplier: SupplierKey,

    #[serde(alias = "l_shipdate")]
    pub ship_date: NaiveDate,

    #[serde(alias = "l_quantity")]
    pub quantity: Quantity,
}

impl Record for LineItem {
    const TABLE: &'static str = "lineitem";
    // l_orderkey|l_partkey|l_suppkey|l_linenumber|l_quantity|l_extendedprice|l_discount|
    // l_tax|l_returnflag|l_linestatus|l_shipdate|...
    const TBL_COLUMNS: &'static [usize] = &[1, 2, 10, 4];
}

impl LineItem {
    pub fn new(
        part: impl Into<PartKey>,
        supplier: impl Into<SupplierKey>,
        ship_date: NaiveDate,
        quantity: Quantity,
    ) -> Self {
        Self {
            part: part.into(),
            supplier: supplier.into(),
            ship_date,
            quantity,
        }
    }
}
