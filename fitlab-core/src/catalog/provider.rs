//! Catalog trait and structured error types.
//!
//! The `ExerciseCatalog` trait abstracts over where exercises come from so the
//! UI worker can be driven by a fake in tests.

use thiserror::Error;

use super::ExerciseQuery;
use crate::domain::Exercise;

/// Structured error types for catalog operations.
///
/// Displayable in both CLI and TUI contexts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no API key configured (set FITLAB_API_KEY or [catalog].api_key)")]
    MissingApiKey,

    #[error("invalid catalog URL: {0}")]
    InvalidUrl(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error {status} - {message}")]
    Http { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl CatalogError {
    /// HTTP status, if the provider answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short category tag for error history display.
    pub fn category(&self) -> &'static str {
        match self {
            CatalogError::MissingApiKey | CatalogError::InvalidUrl(_) => "config",
            CatalogError::Network(_) => "network",
            CatalogError::Http { .. } => "http",
            CatalogError::Decode(_) => "data",
        }
    }
}

/// Anything that can answer an exercise search.
pub trait ExerciseCatalog: Send + Sync {
    /// Human-readable name of this catalog.
    fn name(&self) -> &str;

    /// Run one search. Exactly one request, no retries.
    fn search(&self, query: &ExerciseQuery) -> Result<Vec<Exercise>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_mentions_status() {
        let err = CatalogError::Http {
            status: 404,
            message: "Not Found".into(),
        };
        assert!(err.to_string().contains("404"));
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.category(), "http");
    }

    #[test]
    fn non_http_errors_have_no_status() {
        assert_eq!(CatalogError::MissingApiKey.status(), None);
        assert_eq!(CatalogError::Network("reset".into()).category(), "network");
    }
}
