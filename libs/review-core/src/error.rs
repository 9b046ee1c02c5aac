//! Error types for review-core.

use thiserror::Error;

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors a key-value persistence capability may surface.
///
/// These stop at the store boundary: load failures fall open to an
/// empty record map and save failures are logged, so consumers of the
/// reviewer never see them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
