//! Error types for intake
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Lookups that miss (`get_by_id`, `load_into_draft`) are not errors; they
//! return `None`/`false`. Only infrastructure problems land here.

use std::io;
use thiserror::Error;

/// Result type alias for intake operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by a durable key/value store
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The store refused the write because it would exceed its capacity
    #[error("quota exceeded: {needed} bytes needed, {limit} bytes allowed")]
    QuotaExceeded {
        /// Bytes the store would hold after the write
        needed: usize,
        /// Capacity of the store
        limit: usize,
    },

    /// Key cannot be used by this store
    #[error("invalid key '{key}': {reason}")]
    InvalidKey {
        /// Offending key
        key: String,
        /// Why it was rejected
        reason: String,
    },

    /// Store is not reachable at all
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Error types for intake
#[derive(Debug, Error)]
pub enum Error {
    /// Durable write or read failed; in-memory state is retained
    #[error("persistence failure for '{key}': {source}")]
    Persistence {
        /// Store key that could not be written or read
        key: String,
        /// Underlying store failure
        #[source]
        source: StoreError,
    },

    /// Value could not be serialized for storage
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Persisted state could not be parsed
    #[error("malformed persisted state under '{key}': {reason}")]
    MalformedState {
        /// Store key holding the bad blob
        key: String,
        /// Parser message
        reason: String,
    },

    /// Configuration could not be read, parsed or validated
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid input from a caller
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Build a persistence error for `key`
    pub fn persistence(key: impl Into<String>, source: StoreError) -> Self {
        Error::Persistence {
            key: key.into(),
            source,
        }
    }

    /// Whether this error means the durable copy is behind memory
    pub fn is_persistence(&self) -> bool {
        matches!(self, Error::Persistence { .. } | Error::Serialization(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
