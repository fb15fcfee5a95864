use std::path::PathBuf;
use thiserror::Error;

/// Errors raised below the presentation layer.
///
/// Views never see these; they collapse to the generic error branch. The
/// detail is kept so it can be logged before collapsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Request to '{url}' failed: {message}")]
    Request { url: String, message: String },

    #[error("Request to '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response from '{url}': {message}")]
    Decode { url: String, message: String },

    #[error("Movie {id} not found")]
    NotFound { id: i64 },

    #[error("Category '{category}' is not available")]
    UnknownCategory { category: String },

    #[error("Failed to load catalog '{path}': {message}")]
    Catalog { path: PathBuf, message: String },

    #[error("Repository misconfigured: {0}")]
    Config(String),
}
