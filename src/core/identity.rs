//! Typed record keys
//!
//! Each table's primary key gets its own newtype so a part key can never be
//! compared against a supplier key by accident.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! record_key {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Get the raw integer value
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $label, self.0)
            }
        }
    };
}

record_key!(
    /// Primary key of the `part` table
    PartKey,
    "part"
);

record_key!(
    /// Primary key of the `supplier` table
    SupplierKey,
    "supplier"
);

record_key!(
    /// Primary key of the `nation` table
    NationKey,
    "nation"
);
