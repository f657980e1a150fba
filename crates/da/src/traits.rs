//! The interfaces consumed by the settlement layer.

use std::fmt::Debug;

use alloy_primitives::{Address, B256};
use rollup_bridge_primitives::{
    da::{DaCommitment, DaMode},
    types::TxContext,
};

use crate::errors::DaResult;

/// A data-availability provider.
///
/// Both operations are pure with respect to the settlement state: they only read the
/// transaction context.
pub trait DaProvider: Debug + Send + Sync {
    /// The address this provider is registered under.
    fn address(&self) -> Address;

    /// The mode commitments of this provider are tagged with.
    fn mode(&self) -> DaMode;

    /// Derives the commitment for a batch from its payload and metadata.
    ///
    /// Each provider ignores the input it has no use for.
    fn compute_commitment(
        &self,
        ctx: &TxContext,
        payload: &[u8],
        meta: &[u8],
    ) -> DaResult<DaCommitment>;

    /// Confirms that `expected` is backed by data available in `ctx`.
    fn validate_da(&self, ctx: &TxContext, expected: B256, meta: &[u8]) -> DaResult<()>;
}

/// Looks up the versioned hash of the blob attached at an index.
///
/// Returns the zero value when no blob is attached there.
pub trait BlobHashSource: Debug + Send + Sync {
    /// Returns the versioned hash at `index` for the transaction described by `ctx`.
    fn blob_hash(&self, ctx: &TxContext, index: u8) -> B256;
}
