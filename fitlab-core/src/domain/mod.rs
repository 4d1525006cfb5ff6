//! Domain types for catalog records.

pub mod exercise;
pub mod result_set;

pub use exercise::{capitalize_first, Exercise};
pub use result_set::ResultSet;
