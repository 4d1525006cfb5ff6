//! FitLab Core: exercise domain types, catalog query building, HTTP client, configuration.
//!
//! This crate contains everything that does not depend on a terminal:
//! - Exercise records as returned by the catalog, plus display helpers
//! - Result sets with a keyed id index
//! - Query construction (only non-empty filters become parameters)
//! - The `ExerciseCatalog` trait and its RapidAPI-backed implementation
//! - TOML configuration with environment overrides

pub mod catalog;
pub mod config;
pub mod domain;

pub use catalog::{CatalogError, ExerciseCatalog, ExerciseQuery, RapidApiCatalog};
pub use config::{CatalogConfig, ConfigError, FilterOptions, FitlabConfig};
pub use domain::{capitalize_first, Exercise, ResultSet};
