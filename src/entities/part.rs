//! Part entity type - Catalog of part types

use serde::{Deserialize, Serialize};

use crate::core::entity::Record;
use crate::core::identity::PartKey;

/// One row of the `part` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    #[serde(rename = "part_id", alias = "p_partkey")]
    pub key: PartKey,

    /// Space-separated color words in TPC-H data (e.g. "midnight linen tan")
    #[serde(alias = "p_name")]
    pub name: String,
}

impl Record for Part {
    const TABLE: &'static str = "part";
    // p_partkey|p_name|p_mfgr|p_brand|p_type|p_size|p_container|p_retailprice|p_comment
    const TBL_COLUMNS: &'static [usize] = &[0, 1];
}

impl Part {
    pub fn new(key: impl Into<PartKey>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}
