//! Core module - fundamental types and utilities

pub mod config;
pub mod dataset;
pub mod entity;
pub mod error;
pub mod identity;
pub mod loader;
pub mod quantity;

pub use config::{Config, ConfigError};
pub use dataset::{Dataset, DatasetSummary};
pub use entity::Record;
pub use error::QueryError;
pub use identity::{NationKey, PartKey, SupplierKey};
pub use loader::{load_dataset, LoadError};
pub use quantity::Quantity;
