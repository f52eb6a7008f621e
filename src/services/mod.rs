// Service exports
pub mod catalog;
pub mod images;

pub use catalog::{BreedCatalog, CatalogError};
pub use images::{breed_folder, ImageLinks};
