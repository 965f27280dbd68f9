//! Supplier entity type - Vendors stocking parts, located in a nation

use serde::{Deserialize, Serialize};

use crate::core::entity::Record;
use crate::core::identity::{NationKey, SupplierKey};

/// One row of the `supplier` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "supplier_id", alias = "s_suppkey")]
    pub key: SupplierKey,

    #[serde(alias = "s_name")]
    pub name: String,

    #[serde(alias = "s_address")]
    pub address: String,

    #[serde(rename = "nation_id", alias = "s_nationkey")]
    pub nation: NationKey,
}

impl Record for Supplier {
    const TABLE: &'static str = "supplier";
    // s_suppkey|s_name|s_address|s_nationkey|s_phone|s_acctbal|s_comment
    const TBL_COLUMNS: &'static [usize] = &[0, 1, 2, 3];
}

impl Supplier {
    pub fn new(
        key: impl Into<SupplierKey>,
        name: impl Into<String>,
        address: impl Into<String>,
        nation: impl Into<NationKey>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            address: address.into(),
            nation: nation.into(),
        }
    }
}
