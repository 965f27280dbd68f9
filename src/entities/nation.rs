//! Nation entity type - Small reference table of supplier locations

use serde::{Deserialize, Serialize};

use crate::core::entity::Record;
use crate::core::identity::NationKey;

/// One row of the `nation` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nation {
    #[serde(rename = "nation_id", alias = "n_nationkey")]
    pub key: NationKey,

    #[serde(alias = "n_name")]
    pub name: String,
}

impl Record for Nation {
    const TABLE: &'static str = "nation";
    // n_nationkey|n_name|n_regionkey|n_comment
    const TBL_COLUMNS: &'static [usize] = &[0, 1];
}

impl Nation {
    pub fn new(key: impl Into<NationKey>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}
