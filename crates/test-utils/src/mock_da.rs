//! A blob DA provider with injectable blob hashes.

use std::collections::HashMap;

use alloy_primitives::{Address, B256};
use parking_lot::Mutex;
use rollup_bridge_da::{BlobDa, BlobHashSource};
use rollup_bridge_primitives::types::TxContext;

/// A blob-hash source that prefers injected hashes and falls back to the transaction's blobs.
#[derive(Debug, Default)]
pub struct MockBlobHashes {
    hashes: Mutex<HashMap<u8, B256>>,
}

impl MockBlobHashes {
    /// Makes `index` resolve to `hash` regardless of the transaction.
    pub fn set_blob_hash(&self, index: u8, hash: B256) {
        self.hashes.lock().insert(index, hash);
    }

    /// Drops every injected hash.
    pub fn clear(&self) {
        self.hashes.lock().clear();
    }
}

impl BlobHashSource for MockBlobHashes {
    fn blob_hash(&self, ctx: &TxContext, index: u8) -> B256 {
        self.hashes
            .lock()
            .get(&index)
            .copied()
            .unwrap_or_else(|| ctx.blob_hash(index))
    }
}

/// The blob provider used by tests that cannot attach real blobs.
pub type MockBlobDa = BlobDa<MockBlobHashes>;

/// Creates a [`MockBlobDa`] registered under `address` with no injected hashes.
pub fn mock_blob_da(address: Address) -> MockBlobDa {
    BlobDa::with_source(address, MockBlobHashes::default())
}

#[cfg(test)]
mod tests {
    use rollup_bridge_da::{BlobMeta, DaError, DaProvider};

    use super::*;
    use crate::fixtures::{versioned_hash, BLOB_DA, SEQUENCER};

    #[test]
    fn injected_hash_takes_precedence() {
        let da = mock_blob_da(BLOB_DA);
        let hash = versioned_hash(0x42);
        let meta = BlobMeta::new(hash, 0).encode();
        let ctx = TxContext::new(SEQUENCER);

        assert_eq!(
            da.compute_commitment(&ctx, &[], &meta),
            Err(DaError::NoBlobAttached { index: 0 })
        );

        da.source().set_blob_hash(0, hash);
        assert_eq!(da.compute_commitment(&ctx, &[], &meta).map(|c| c.value()), Ok(hash));

        da.source().clear();
        let ctx = ctx.with_blob_hashes(vec![hash]);
        assert!(da.validate_da(&ctx, hash, &meta).is_ok());
    }
}
