//! The events that are processed by the Settlement State Machine.

use std::{fmt, sync::Arc};

use alloy_primitives::{Address, B256};
use rollup_bridge_da::DaProvider;
use rollup_bridge_primitives::{proof::Proof, types::DaId};

/// The external calls that affect the Settlement State Machine.
#[derive(Debug, Clone)]
pub enum SettlementEvent {
    /// Submission of a batch bound to the DA provider registered under `da_id`.
    CommitBatch {
        /// The registry key of the DA provider.
        da_id: DaId,
        /// The batch payload, empty in blob mode.
        payload: Vec<u8>,
        /// The provider-specific metadata.
        da_meta: Vec<u8>,
        /// The state root after the batch.
        new_root: B256,
        /// The proof of the transition.
        proof: Proof,
    },

    /// Submission of a batch posted inline, using the built-in calldata provider.
    CommitCalldata {
        /// The batch payload.
        payload: Vec<u8>,
        /// The state root after the batch.
        new_root: B256,
        /// The proof of the transition.
        proof: Proof,
    },

    /// Submission of a batch posted as a blob, using the built-in blob provider.
    CommitBlob {
        /// The encoded blob metadata.
        da_meta: Vec<u8>,
        /// The state root after the batch.
        new_root: B256,
        /// The proof of the transition.
        proof: Proof,
    },

    /// Change of the designated sequencer.
    SetSequencer {
        /// The new sequencer, zero for permissionless submission.
        sequencer: Address,
    },

    /// Registration, enabling or disabling of a DA provider.
    SetDaProvider {
        /// The registry key.
        da_id: DaId,
        /// The provider.
        provider: Arc<dyn DaProvider>,
        /// Whether the provider is enabled.
        enabled: bool,
    },

    /// Transfer of the owner role.
    TransferOwnership {
        /// The new owner.
        new_owner: Address,
    },
}

impl fmt::Display for SettlementEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettlementEvent::CommitBatch {
                da_id, new_root, ..
            } => write!(f, "CommitBatch(da_id: {da_id}, new_root: {new_root})"),
            SettlementEvent::CommitCalldata {
                payload, new_root, ..
            } => write!(
                f,
                "CommitCalldata(payload: {} bytes, new_root: {new_root})",
                payload.len()
            ),
            SettlementEvent::CommitBlob { new_root, .. } => {
                write!(f, "CommitBlob(new_root: {new_root})")
            }
            SettlementEvent::SetSequencer { sequencer } => {
                write!(f, "SetSequencer({sequencer})")
            }
            SettlementEvent::SetDaProvider {
                da_id,
                provider,
                enabled,
            } => write!(
                f,
                "SetDaProvider(da_id: {da_id}, provider: {}, enabled: {enabled})",
                provider.address()
            ),
            SettlementEvent::TransferOwnership { new_owner } => {
                write!(f, "TransferOwnership({new_owner})")
            }
        }
    }
}
