//! Entity type definitions
//!
//! The query reads five tables, each modelled as a [`Record`](crate::core::Record):
//!
//! - [`Supplier`] - Vendors with name, address and home nation
//! - [`Nation`] - Reference table of nation names
//! - [`Part`] - Catalog of part types
//! - [`PartSupply`] - On-hand quantity of a part at a supplier
//! - [`LineItem`] - Shipment events with date and quantity

pub mod line_item;
pub mod nation;
pub mod part;
pub mod part_supply;
pub mod supplier;

pub use line_item::LineItem;
pub use nation::Nation;
pub use part::Part;
pub use part_supply::PartSupply;
pub use supplier::Supplier;
