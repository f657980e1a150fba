//! Basic types that are shared across the settlement core.

use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

/// The identifier of a finalized batch.
pub type BatchId = u64;

/// The key under which a DA provider is registered.
pub type DaId = u8;

/// The execution context of a single call into the settlement core.
///
/// This carries the caller identity and the versioned hashes of the blobs attached to the
/// transaction that carries the call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxContext {
    /// The address of the caller.
    pub sender: Address,

    /// The versioned hashes of the blobs attached to the transaction, in attachment order.
    #[serde(default)]
    pub blob_hashes: Vec<B256>,
}

impl TxContext {
    /// Creates a new context for the given caller without any attached blobs.
    pub const fn new(sender: Address) -> Self {
        Self {
            sender,
            blob_hashes: Vec::new(),
        }
    }

    /// Attaches the given blob versioned hashes to the context.
    pub fn with_blob_hashes(mut self, blob_hashes: Vec<B256>) -> Self {
        self.blob_hashes = blob_hashes;
        self
    }

    /// Returns the caller of this context.
    pub const fn sender(&self) -> Address {
        self.sender
    }

    /// Returns the versioned hash of the blob at `index`.
    ///
    /// Mirrors the platform blob-hash primitive: an index without an attached blob yields the
    /// zero value rather than an error.
    pub fn blob_hash(&self, index: u8) -> B256 {
        self.blob_hashes
            .get(usize::from(index))
            .copied()
            .unwrap_or(B256::ZERO)
    }
}
