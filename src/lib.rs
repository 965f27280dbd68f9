//! partpromo: Potential Part Promotion
//!
//! Finds the supplier in a nation that holds more than half of what it
//! shipped, over one year, of parts with a given name prefix (TPC-H Q20).

pub mod cli;
pub mod core;
pub mod entities;
pub mod query;
