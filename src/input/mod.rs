//! Catalog input
//! Handles record types, repositories and file loading

pub mod catalog;
pub mod file_detector;
pub mod loader;
pub mod records;

pub use catalog::{CourseRepository, InMemoryCatalog, ProfileRepository};
pub use loader::CatalogLoader;
