//! Error taxonomy for remote store operations
//!
//! Every failure a provider surfaces carries its retry classification in the
//! variant itself. `RateLimited` and `ServerUnavailable` are the only
//! retryable classes; everything else is terminal, including conditions the
//! provider could not recognize (fail safe rather than retry indefinitely).

use thiserror::Error;

/// Errors surfaced by remote store operations and the client core.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The remote API rejected the call due to rate limiting (retryable)
    #[error("Rate limited by remote store: {message}")]
    RateLimited { message: String },

    /// The remote API failed server-side, 5xx-equivalent (retryable)
    #[error("Remote store unavailable (status {status_code}): {message}")]
    ServerUnavailable { status_code: u16, message: String },

    /// The request was malformed or semantically invalid
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Authentication or authorization failure
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The referenced resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The operation conflicts with current remote state
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Transport-level failure with no status classification
    #[error("Network error: {0}")]
    Network(String),

    /// The remote payload could not be decoded
    #[error("Failed to decode remote response: {0}")]
    Decode(String),

    /// A status the provider does not classify
    #[error("Unclassified remote error (status {status_code}): {message}")]
    Unknown { status_code: u16, message: String },

    /// A tree traversal was aborted mid-flight; no partial tree is returned
    #[error("Traversal aborted: {source}")]
    TraversalAborted {
        #[source]
        source: Box<StoreError>,
    },
}

impl StoreError {
    /// Whether the resilient invoker may re-issue the failed operation.
    ///
    /// Only rate limiting and server-side unavailability benefit from
    /// waiting; every other class fails immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            StoreError::RateLimited { .. } | StoreError::ServerUnavailable { .. }
        )
    }
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
