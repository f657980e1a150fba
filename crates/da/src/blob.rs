//! The blob DA provider.

use alloy_primitives::{Address, B256};
use rollup_bridge_primitives::{
    da::{DaCommitment, DaMode},
    types::TxContext,
};
use tracing::{trace, warn};

use crate::{
    errors::{DaError, DaResult},
    meta::BlobMeta,
    traits::{BlobHashSource, DaProvider},
};

/// Reads blob hashes straight from the transaction context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TxBlobHashes;

impl BlobHashSource for TxBlobHashes {
    fn blob_hash(&self, ctx: &TxContext, index: u8) -> B256 {
        ctx.blob_hash(index)
    }
}

/// Commits to a batch posted as a blob by the blob's versioned hash.
///
/// The payload is ignored; the metadata names the blob index and the hash it must carry.
#[derive(Debug, Clone)]
pub struct BlobDa<S = TxBlobHashes> {
    address: Address,
    source: S,
}

impl BlobDa {
    /// Creates a blob provider registered under `address` that reads the transaction's blobs.
    pub const fn new(address: Address) -> Self {
        Self {
            address,
            source: TxBlobHashes,
        }
    }
}

impl<S: BlobHashSource> BlobDa<S> {
    /// Creates a blob provider with a custom blob-hash source.
    pub const fn with_source(address: Address, source: S) -> Self {
        Self { address, source }
    }

    /// Returns the blob-hash source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    fn check_blob(&self, ctx: &TxContext, meta: &BlobMeta) -> DaResult<()> {
        let actual = self.source.blob_hash(ctx, meta.blob_index);
        if actual.is_zero() {
            warn!(index = meta.blob_index, "no blob attached");
            return Err(DaError::NoBlobAttached {
                index: meta.blob_index,
            });
        }

        if actual != meta.expected_versioned_hash {
            warn!(
                index = meta.blob_index,
                expected = %meta.expected_versioned_hash,
                %actual,
                "blob hash mismatch"
            );
            return Err(DaError::BlobHashMismatch {
                expected: meta.expected_versioned_hash,
                actual,
            });
        }

        Ok(())
    }
}

impl<S: BlobHashSource> DaProvider for BlobDa<S> {
    fn address(&self) -> Address {
        self.address
    }

    fn mode(&self) -> DaMode {
        DaMode::Blob
    }

    fn compute_commitment(
        &self,
        ctx: &TxContext,
        _payload: &[u8],
        meta: &[u8],
    ) -> DaResult<DaCommitment> {
        let meta = BlobMeta::decode(meta)?;
        if meta.expected_versioned_hash.is_zero() {
            return Err(DaError::InvalidCommitment);
        }

        self.check_blob(ctx, &meta)?;
        trace!(
            index = meta.blob_index,
            value = %meta.expected_versioned_hash,
            "computed blob commitment"
        );

        Ok(DaCommitment::new(meta.expected_versioned_hash, DaMode::Blob))
    }

    fn validate_da(&self, ctx: &TxContext, expected: B256, meta: &[u8]) -> DaResult<()> {
        let meta = BlobMeta::decode(meta)?;
        if meta.expected_versioned_hash != expected || meta.expected_versioned_hash.is_zero() {
            return Err(DaError::InvalidCommitment);
        }

        self.check_blob(ctx, &meta)
    }
}
