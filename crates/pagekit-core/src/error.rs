//! Error handling for PageKit
//!
//! Provides error types for all layers of the page builder:
//! - Layout errors (block/wire validation)
//! - Storage errors (save/load collaborator failures)
//!
//! All error types use `thiserror` for ergonomic error handling. No error is
//! fatal to the session; each is scoped to the single operation that raised
//! it.

use thiserror::Error;

/// Layout validation error type
///
/// Represents errors raised while validating a wire-format layout item or
/// creating a block from untrusted input. Recoverable per item: a batch
/// restore rejects the offending item and continues with the rest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Block kind string is not one of the recognized kinds
    #[error("Unknown block kind: {kind}")]
    UnknownBlockKind {
        /// The unrecognized kind string.
        kind: String,
    },

    /// A pixel field did not parse as `"<n>px"`
    #[error("Invalid pixel value for {field}: {value:?}")]
    InvalidPixelValue {
        /// The field that failed to parse.
        field: String,
        /// The offending wire value.
        value: String,
    },

    /// Width and height must be present together or absent together
    #[error("Incomplete size: {present} given without {missing}")]
    IncompleteSize {
        /// The dimension that was present.
        present: String,
        /// The dimension that was missing.
        missing: String,
    },
}

/// Storage error type
///
/// Represents failures of the external storage collaborator during save or
/// load. Recoverable: the canvas state is left exactly as it was before the
/// call.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The storage backend rejected or failed the operation
    #[error("Storage backend error: {message}")]
    Backend {
        /// The backend's failure message.
        message: String,
    },

    /// Layout could not be encoded for storage
    #[error("Failed to encode layout: {reason}")]
    Encode {
        /// The reason encoding failed.
        reason: String,
    },

    /// Stored layout could not be decoded
    #[error("Failed to decode layout: {reason}")]
    Decode {
        /// The reason decoding failed.
        reason: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main error type for PageKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout validation error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Storage error
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Layout(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Error::Storage(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
