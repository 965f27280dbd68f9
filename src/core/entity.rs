//! Record trait - common interface for all table record types

use serde::{de::DeserializeOwned, Serialize};

/// Common trait for the five input tables
///
/// Struct fields must be declared in the same order as `TBL_COLUMNS`, since
/// headerless `.tbl` rows are projected and then deserialized positionally.
pub trait Record: Serialize + DeserializeOwned {
    /// Table name, also the file stem looked up by the loader (e.g. "lineitem")
    const TABLE: &'static str;

    /// Zero-based positions of this record's fields in a TPC-H `dbgen` row
    const TBL_COLUMNS: &'static [usize];
}
