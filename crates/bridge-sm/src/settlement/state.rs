//! The mutable state owned by the Settlement State Machine.

use std::{collections::BTreeMap, sync::Arc};

use alloy_primitives::{Address, B256};
use rollup_bridge_da::DaProvider;
use rollup_bridge_primitives::{
    constants::FIRST_BATCH_ID,
    da::DaCommitment,
    types::{BatchId, DaId},
};
use serde::{Deserialize, Serialize};

use crate::settlement::logs::BridgeLog;

/// What is recorded about a finalized batch. Never modified once written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    /// The DA commitment of the batch.
    pub commitment: DaCommitment,

    /// The state root after the batch.
    pub new_root: B256,
}

/// A DA registry entry.
#[derive(Debug, Clone)]
pub struct DaEntry {
    /// The registered provider.
    pub provider: Arc<dyn DaProvider>,

    /// Whether batches may currently use the provider.
    pub enabled: bool,
}

impl DaEntry {
    /// Returns the address of the registered provider.
    pub fn address(&self) -> Address {
        self.provider.address()
    }

    /// Returns `true` if `provider` is the very object registered in this entry.
    ///
    /// The address is what a provider reports about itself, so two distinct providers may share
    /// one.
    pub fn is_same_provider(&self, provider: &Arc<dyn DaProvider>) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.provider), Arc::as_ptr(provider))
    }
}

// Structural: entries built independently compare equal when they register the same address and
// mode. Registry writes are guarded by `is_same_provider`.
impl PartialEq for DaEntry {
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address()
            && self.provider.mode() == other.provider.mode()
            && self.enabled == other.enabled
    }
}

impl Eq for DaEntry {}

/// The state of the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeState {
    /// The account allowed to perform administrative operations.
    pub owner: Address,

    /// The current canonical state root.
    pub state_root: B256,

    /// The id the next finalized batch receives.
    pub next_batch_id: BatchId,

    /// The designated sequencer, zero for permissionless submission.
    pub sequencer: Address,

    /// The DA registry.
    pub da_registry: BTreeMap<DaId, DaEntry>,

    /// The finalized batches.
    pub batches: BTreeMap<BatchId, BatchRecord>,

    /// Every record emitted so far, oldest first.
    pub logs: Vec<BridgeLog>,
}

impl BridgeState {
    /// Creates the state at deployment.
    pub const fn new(owner: Address, genesis_root: B256) -> Self {
        Self {
            owner,
            state_root: genesis_root,
            next_batch_id: FIRST_BATCH_ID,
            sequencer: Address::ZERO,
            da_registry: BTreeMap::new(),
            batches: BTreeMap::new(),
            logs: Vec::new(),
        }
    }
}
