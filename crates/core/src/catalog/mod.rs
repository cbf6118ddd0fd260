//! Catalog records and their JSON file store.

pub mod store;
mod types;

pub use store::{load, save, CatalogError};
pub use types::Artwork;
