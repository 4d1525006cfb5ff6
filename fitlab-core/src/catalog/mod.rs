//! Exercise catalog access.

pub mod provider;
pub mod query;
pub mod rapidapi;

pub use provider::{CatalogError, ExerciseCatalog};
pub use query::ExerciseQuery;
pub use rapidapi::RapidApiCatalog;
