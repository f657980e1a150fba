//! The Settlement State Machine (SSM).
//!
//! Responsible for finalizing batches and for the administrative operations that configure who
//! may submit them and which DA providers they may use.

use std::sync::Arc;

use alloy_primitives::{Address, B256};
use rollup_bridge_da::{BlobDa, CalldataDa, DaProvider};
use rollup_bridge_primitives::{
    da::DaCommitment,
    proof::Proof,
    types::{BatchId, DaId, TxContext},
};
use rollup_bridge_verifier::ProofVerifier;
use tracing::info;

use crate::{
    settlement::{
        errors::{SettlementError, SettlementResult},
        events::SettlementEvent,
        logs::{BatchFinalized, BridgeLog},
        state::{BatchRecord, BridgeState, DaEntry},
        transitions::{DaSelector, PendingBatch, SettlementTransition},
    },
    state_machine::{SMOutput, StateMachine},
};

/// The output of the Settlement State Machine after processing an event.
pub type SettlementOutput = SMOutput<BridgeLog>;

/// The collaborators of the Settlement State Machine that are fixed at deployment.
#[derive(Debug, Clone)]
pub struct SettlementCtx {
    /// The proof verifier.
    pub verifier: Arc<dyn ProofVerifier>,

    /// The provider used by calldata-mode submissions that bypass the registry.
    pub calldata: Arc<dyn DaProvider>,

    /// The provider used by blob-mode submissions that bypass the registry.
    pub blob: Arc<dyn DaProvider>,
}

/// The State Machine that owns the canonical state root of the rollup.
#[derive(Debug, Clone)]
pub struct SettlementSM {
    /// The collaborators fixed at deployment.
    pub(crate) context: SettlementCtx,
    /// The current state.
    pub(crate) state: BridgeState,
}

impl StateMachine for SettlementSM {
    type Context = TxContext;
    type Event = SettlementEvent;
    type Transition = SettlementTransition;
    type Log = BridgeLog;
    type Error = SettlementError;

    fn plan(
        &self,
        ctx: &Self::Context,
        event: Self::Event,
    ) -> Result<Self::Transition, Self::Error> {
        let finalize = |pending: SettlementResult<PendingBatch>| {
            pending.map(SettlementTransition::Finalize)
        };

        match event {
            SettlementEvent::CommitBatch {
                da_id,
                payload,
                da_meta,
                new_root,
                proof,
            } => finalize(self.plan_commit(
                ctx,
                DaSelector::Registry(da_id),
                &payload,
                &da_meta,
                new_root,
                &proof,
            )),
            SettlementEvent::CommitCalldata {
                payload,
                new_root,
                proof,
            } => finalize(self.plan_commit(
                ctx,
                DaSelector::Calldata,
                &payload,
                &[],
                new_root,
                &proof,
            )),
            SettlementEvent::CommitBlob {
                da_meta,
                new_root,
                proof,
            } => finalize(self.plan_commit(
                ctx,
                DaSelector::Blob,
                &[],
                &da_meta,
                new_root,
                &proof,
            )),
            SettlementEvent::SetSequencer { sequencer } => self.plan_set_sequencer(ctx, sequencer),
            SettlementEvent::SetDaProvider {
                da_id,
                provider,
                enabled,
            } => self.plan_set_da_provider(ctx, da_id, DaEntry { provider, enabled }),
            SettlementEvent::TransferOwnership { new_owner } => {
                self.plan_transfer_ownership(ctx, new_owner)
            }
        }
    }

    fn apply(&mut self, transition: Self::Transition) -> SMOutput<Self::Log> {
        let log = match transition {
            SettlementTransition::Finalize(pending) => {
                BridgeLog::BatchFinalized(self.apply_batch_record(pending))
            }
            SettlementTransition::SetSequencer { sequencer } => {
                self.state.sequencer = sequencer;
                info!(%sequencer, "sequencer updated");

                BridgeLog::SequencerUpdated { sequencer }
            }
            SettlementTransition::SetDaProvider { da_id, entry } => {
                let provider = entry.address();
                let enabled = entry.enabled;
                self.state.da_registry.insert(da_id, entry);
                info!(%da_id, %provider, %enabled, "DA provider set");

                BridgeLog::DaProviderSet {
                    da_id,
                    provider,
                    enabled,
                }
            }
            SettlementTransition::TransferOwnership {
                previous_owner,
                new_owner,
            } => {
                self.state.owner = new_owner;
                info!(%previous_owner, %new_owner, "ownership transferred");

                BridgeLog::OwnershipTransferred {
                    previous_owner,
                    new_owner,
                }
            }
        };

        self.state.logs.push(log.clone());

        SMOutput::with_logs(vec![log])
    }
}

impl SettlementSM {
    /// Creates a new [`SettlementSM`] at deployment.
    ///
    /// Fails with [`SettlementError::InvalidVerifier`] if no verifier is given or if it has the
    /// zero address, and with [`SettlementError::InvalidOwner`] if the owner is zero. The sequencer
    /// starts unset and the DA registry starts empty.
    pub fn new(
        owner: Address,
        verifier: Option<Arc<dyn ProofVerifier>>,
        genesis_root: B256,
    ) -> SettlementResult<Self> {
        let verifier = verifier
            .filter(|verifier| !verifier.address().is_zero())
            .ok_or(SettlementError::InvalidVerifier)?;

        if owner.is_zero() {
            return Err(SettlementError::InvalidOwner);
        }

        info!(
            %owner,
            verifier = %verifier.address(),
            %genesis_root,
            "settlement state machine deployed"
        );

        Ok(Self {
            context: SettlementCtx {
                verifier,
                calldata: Arc::new(CalldataDa::new(Address::ZERO)),
                blob: Arc::new(BlobDa::new(Address::ZERO)),
            },
            state: BridgeState::new(owner, genesis_root),
        })
    }

    /// Replaces the providers used by [`commit_batch_calldata`](Self::commit_batch_calldata) and
    /// [`commit_batch_blob`](Self::commit_batch_blob).
    pub fn with_builtin_providers(
        mut self,
        calldata: Arc<dyn DaProvider>,
        blob: Arc<dyn DaProvider>,
    ) -> Self {
        self.context.calldata = calldata;
        self.context.blob = blob;
        self
    }

    /// Returns a reference to the collaborators of the state machine.
    pub const fn context(&self) -> &SettlementCtx {
        &self.context
    }

    /// Returns a reference to the current state.
    pub const fn state(&self) -> &BridgeState {
        &self.state
    }

    /// Records a planned batch and advances the root.
    pub(crate) fn apply_batch_record(&mut self, pending: PendingBatch) -> BatchFinalized {
        let finalized = pending.finalized();

        self.state.batches.insert(pending.batch_id, pending.record);
        self.state.state_root = pending.record.new_root;
        self.state.next_batch_id = pending.next_batch_id;

        info!(
            batch_id = %finalized.batch_id,
            commitment = %finalized.commitment,
            old_root = %finalized.old_root,
            new_root = %finalized.new_root,
            da_mode = %finalized.da_mode,
            "batch finalized"
        );

        finalized
    }

    /// Applies a planned batch and returns its finalization record.
    pub fn apply_batch(&mut self, pending: PendingBatch) -> BatchFinalized {
        let finalized = self.apply_batch_record(pending);
        self.state.logs.push(BridgeLog::BatchFinalized(finalized));

        finalized
    }

    fn commit(
        &mut self,
        ctx: &TxContext,
        selector: DaSelector,
        payload: &[u8],
        da_meta: &[u8],
        new_root: B256,
        proof: &Proof,
    ) -> SettlementResult<BatchFinalized> {
        let pending = self.plan_commit(ctx, selector, payload, da_meta, new_root, proof)?;

        Ok(self.apply_batch(pending))
    }

    /// Finalizes a batch bound to the DA provider registered under `da_id`.
    pub fn commit_batch(
        &mut self,
        ctx: &TxContext,
        da_id: DaId,
        payload: &[u8],
        da_meta: &[u8],
        new_root: B256,
        proof: &Proof,
    ) -> SettlementResult<BatchFinalized> {
        self.commit(
            ctx,
            DaSelector::Registry(da_id),
            payload,
            da_meta,
            new_root,
            proof,
        )
    }

    /// Finalizes a batch posted inline, using the built-in calldata provider.
    pub fn commit_batch_calldata(
        &mut self,
        ctx: &TxContext,
        payload: &[u8],
        new_root: B256,
        proof: &Proof,
    ) -> SettlementResult<BatchFinalized> {
        self.commit(ctx, DaSelector::Calldata, payload, &[], new_root, proof)
    }

    /// Finalizes a batch posted as a blob, using the built-in blob provider.
    pub fn commit_batch_blob(
        &mut self,
        ctx: &TxContext,
        da_meta: &[u8],
        new_root: B256,
        proof: &Proof,
    ) -> SettlementResult<BatchFinalized> {
        self.commit(ctx, DaSelector::Blob, &[], da_meta, new_root, proof)
    }

    /// Changes the designated sequencer. The zero address opens submission to everyone.
    pub fn set_sequencer(
        &mut self,
        ctx: &TxContext,
        sequencer: Address,
    ) -> SettlementResult<SettlementOutput> {
        self.process_event(ctx, SettlementEvent::SetSequencer { sequencer })
    }

    /// Registers, enables or disables the DA provider under `da_id`.
    ///
    /// An enabled id cannot be pointed at a different provider directly; it has to be disabled
    /// first.
    pub fn set_da_provider(
        &mut self,
        ctx: &TxContext,
        da_id: DaId,
        provider: Arc<dyn DaProvider>,
        enabled: bool,
    ) -> SettlementResult<SettlementOutput> {
        self.process_event(
            ctx,
            SettlementEvent::SetDaProvider {
                da_id,
                provider,
                enabled,
            },
        )
    }

    /// Hands the owner role to `new_owner`.
    pub fn transfer_ownership(
        &mut self,
        ctx: &TxContext,
        new_owner: Address,
    ) -> SettlementResult<SettlementOutput> {
        self.process_event(ctx, SettlementEvent::TransferOwnership { new_owner })
    }

    /// The current canonical state root.
    pub const fn state_root(&self) -> B256 {
        self.state.state_root
    }

    /// The id the next finalized batch receives.
    pub const fn next_batch_id(&self) -> BatchId {
        self.state.next_batch_id
    }

    /// The designated sequencer, zero when submission is permissionless.
    pub const fn sequencer(&self) -> Address {
        self.state.sequencer
    }

    /// The owner.
    pub const fn owner(&self) -> Address {
        self.state.owner
    }

    /// The address of the verifier.
    pub fn verifier_address(&self) -> Address {
        self.context.verifier.address()
    }

    /// The address of the provider registered under `da_id`, enabled or not.
    pub fn da_provider(&self, da_id: DaId) -> Option<Address> {
        self.state.da_registry.get(&da_id).map(DaEntry::address)
    }

    /// Whether the provider under `da_id` is enabled.
    pub fn da_enabled(&self, da_id: DaId) -> bool {
        self.state
            .da_registry
            .get(&da_id)
            .is_some_and(|entry| entry.enabled)
    }

    /// The record of a finalized batch.
    pub fn batch(&self, batch_id: BatchId) -> Option<&BatchRecord> {
        self.state.batches.get(&batch_id)
    }

    /// The DA commitment of a finalized batch.
    pub fn batch_commitment(&self, batch_id: BatchId) -> Option<DaCommitment> {
        self.batch(batch_id).map(|record| record.commitment)
    }

    /// The root a finalized batch advanced to.
    pub fn batch_new_root(&self, batch_id: BatchId) -> Option<B256> {
        self.batch(batch_id).map(|record| record.new_root)
    }

    /// Every record emitted so far, oldest first.
    pub fn logs(&self) -> &[BridgeLog] {
        &self.state.logs
    }
}
