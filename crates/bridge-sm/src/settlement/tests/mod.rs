//! Tests for the Settlement State Machine.


use alloy_primitives::{keccak256, B256};
use rollup_bridge_da::BlobMeta;
use rollup_bridge_primitives::{constants::CALLDATA_DA_ID, proof::Proof};

use crate::settlement::{SettlementError, SettlementEvent};

/// A calldata batch through the registry.
fn calldata_batch(payload: &[u8], new_root: B256) -> SettlementEvent {
    SettlementEvent::CommitBatch {
        da_id: CALLDATA_DA_ID,
        payload: payload.to_vec(),
        da_meta: Vec::new(),
        new_root,
        proof: Proof::zero(),
    }
}

/// A batch through the registry under `da_id` with blob metadata for `(hash, index)`.
fn blob_batch(da_id: u8, hash: B256, index: u8, new_root: B256) -> SettlementEvent {
    SettlementEvent::CommitBatch {
        da_id,
        payload: Vec::new(),
        da_meta: BlobMeta::new(hash, index).encode().to_vec(),
        new_root,
        proof: Proof::zero(),
    }
}

fn new_root() -> B256 {
    keccak256("new-root")
}

fn is_invalid_proof(err: &SettlementError) -> bool {
    matches!(err, SettlementError::InvalidProof)
}
