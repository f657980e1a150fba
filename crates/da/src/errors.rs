//! Errors raised by DA providers.

use alloy_primitives::B256;
use thiserror::Error;

/// Errors that can occur while computing or validating a DA commitment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DaError {
    /// The transaction carries no blob at the referenced index.
    #[error("no-blob-attached: no blob at index {index}")]
    NoBlobAttached {
        /// The referenced blob index.
        index: u8,
    },

    /// The blob at the referenced index has a different versioned hash.
    #[error("blob-hash-mismatch: expected {expected}, found {actual}")]
    BlobHashMismatch {
        /// The hash announced in the metadata.
        expected: B256,
        /// The hash of the attached blob.
        actual: B256,
    },

    /// The commitment is zero or does not match the metadata.
    #[error("invalid-commitment")]
    InvalidCommitment,

    /// The metadata could not be decoded.
    #[error("invalid-da-metadata: {0}")]
    InvalidMetadata(#[from] MetadataError),
}

/// The result type for DA operations.
pub type DaResult<T> = Result<T, DaError>;

/// Errors that can occur while decoding blob metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetadataError {
    /// The metadata is neither the 64-byte nor the 33-byte encoding.
    #[error("unexpected metadata length {0}")]
    BadLength(usize),

    /// The blob index word of the 64-byte encoding does not fit in a byte.
    #[error("blob index word is out of range")]
    IndexOutOfRange,
}
