//! Errors raised when the input data breaks a table invariant

use miette::Diagnostic;
use thiserror::Error;

use crate::core::identity::{PartKey, SupplierKey};
use crate::core::quantity::Quantity;

/// Malformed input detected before evaluation starts
///
/// Any of these aborts evaluation; no partial result is produced.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum QueryError {
    #[error("duplicate partsupp row for ({part}, {supplier})")]
    #[diagnostic(
        code(partpromo::input::duplicate_partsupp),
        help("each (part_id, supplier_id) pair may appear only once in partsupp")
    )]
    DuplicatePartSupply { part: PartKey, supplier: SupplierKey },

    #[error("negative available quantity {quantity} for ({part}, {supplier})")]
    #[diagnostic(code(partpromo::input::negative_availqty))]
    NegativeAvailableQuantity {
        part: PartKey,
        supplier: SupplierKey,
        quantity: i64,
    },

    #[error("negative shipped quantity {quantity} for ({part}, {supplier})")]
    #[diagnostic(code(partpromo::input::negative_quantity))]
    NegativeShipmentQuantity {
        part: PartKey,
        supplier: SupplierKey,
        quantity: Quantity,
    },

    #[error("shipped quantity for ({part}, {supplier}) overflows")]
    #[diagnostic(
        code(partpromo::input::quantity_overflow),
        help("the in-window lineitem quantities for this pair sum past the supported range")
    )]
    ShipmentSumOverflow { part: PartKey, supplier: SupplierKey },
}
