//! Error types for the storefront data layer
//!
//! Provides unified error handling using thiserror.
//!
//! Only remote-store failures ever reach callers: cache-side problems
//! (corrupt entries, storage quota) degrade to misses or are swallowed at
//! the cache manager boundary, because caching is a performance
//! optimization and never a correctness requirement.

use thiserror::Error;

// == Store Error Enum ==
/// Unified error type for the storefront data layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A remote fetch or mutation failed
    #[error("Remote request failed: {0}")]
    Remote(String),

    /// The requested resource does not exist on the remote store
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backing store rejected a write (e.g. quota exceeded)
    #[error("Storage write failed: {0}")]
    StorageFull(String),

    /// Payload could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the storefront data layer.
pub type Result<T> = std::result::Result<T, StoreError>;
