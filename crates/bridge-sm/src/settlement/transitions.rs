//! Planning of state transitions.
//!
//! Each `plan_*` method runs every check of one operation against the current state and the
//! external collaborators it needs, without mutating anything. The result is a transition that
//! [`SettlementSM`] applies infallibly.

use alloy_primitives::{Address, B256, U256};
use rollup_bridge_da::DaProvider;
use rollup_bridge_primitives::{
    constants::NUM_PUBLIC_INPUTS,
    field::bytes32_to_scalar,
    proof::Proof,
    types::{BatchId, DaId, TxContext},
};
use tracing::{debug, warn};

use crate::settlement::{
    errors::{SettlementError, SettlementResult},
    logs::BatchFinalized,
    machine::SettlementSM,
    state::{BatchRecord, DaEntry},
};

/// Which DA provider a batch submission is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaSelector {
    /// The provider registered and enabled under the id.
    Registry(DaId),

    /// The built-in calldata provider.
    Calldata,

    /// The built-in blob provider.
    Blob,
}

/// A batch that passed every check and only awaits being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingBatch {
    /// The id the batch is finalized under.
    pub batch_id: BatchId,

    /// The id the following batch will receive.
    pub next_batch_id: BatchId,

    /// The root the batch builds on.
    pub old_root: B256,

    /// What gets recorded for the batch.
    pub record: BatchRecord,
}

impl PendingBatch {
    /// The finalization record emitted when the batch is applied.
    pub const fn finalized(&self) -> BatchFinalized {
        BatchFinalized {
            batch_id: self.batch_id,
            commitment: self.record.commitment.value,
            old_root: self.old_root,
            new_root: self.record.new_root,
            da_mode: self.record.commitment.mode,
        }
    }
}

/// A checked change to the bridge state.
#[derive(Debug, Clone)]
pub enum SettlementTransition {
    /// Record a batch and advance the root.
    Finalize(PendingBatch),

    /// Replace the sequencer.
    SetSequencer {
        /// The new sequencer.
        sequencer: Address,
    },

    /// Write a DA registry entry.
    SetDaProvider {
        /// The registry key.
        da_id: DaId,
        /// The new entry.
        entry: DaEntry,
    },

    /// Replace the owner.
    TransferOwnership {
        /// The owner being replaced.
        previous_owner: Address,
        /// The new owner.
        new_owner: Address,
    },
}

/// Builds the public inputs of a batch: `[old_root, new_root, commitment]`, each reduced modulo
/// the scalar-field modulus.
pub fn public_inputs(
    old_root: B256,
    new_root: B256,
    commitment: B256,
) -> [U256; NUM_PUBLIC_INPUTS] {
    [
        bytes32_to_scalar(old_root),
        bytes32_to_scalar(new_root),
        bytes32_to_scalar(commitment),
    ]
}

impl SettlementSM {
    pub(crate) fn ensure_owner(&self, caller: Address) -> SettlementResult<()> {
        if caller != self.state.owner {
            warn!(%caller, "rejected administrative call from non-owner");
            return Err(SettlementError::NotOwner { caller });
        }

        Ok(())
    }

    pub(crate) fn ensure_sequencer(&self, caller: Address) -> SettlementResult<()> {
        let sequencer = self.state.sequencer;
        if !sequencer.is_zero() && caller != sequencer {
            warn!(%caller, %sequencer, "rejected batch from non-sequencer");
            return Err(SettlementError::NotSequencer { caller });
        }

        Ok(())
    }

    fn resolve_provider(&self, selector: DaSelector) -> SettlementResult<&dyn DaProvider> {
        match selector {
            DaSelector::Registry(da_id) => self
                .state
                .da_registry
                .get(&da_id)
                .filter(|entry| entry.enabled)
                .map(|entry| entry.provider.as_ref())
                .ok_or(SettlementError::DaProviderNotEnabled(da_id)),
            DaSelector::Calldata => Ok(self.context.calldata.as_ref()),
            DaSelector::Blob => Ok(self.context.blob.as_ref()),
        }
    }

    /// Plans the finalization of a batch.
    ///
    /// Checks, in order: caller authorization, provider resolution, non-zero new root, DA
    /// commitment and validation, proof verification.
    pub fn plan_commit(
        &self,
        ctx: &TxContext,
        selector: DaSelector,
        payload: &[u8],
        da_meta: &[u8],
        new_root: B256,
        proof: &Proof,
    ) -> SettlementResult<PendingBatch> {
        self.ensure_sequencer(ctx.sender())?;

        let provider = self.resolve_provider(selector)?;

        if new_root.is_zero() {
            warn!("rejected batch with zero new root");
            return Err(SettlementError::InvalidNewRoot);
        }

        let commitment = provider.compute_commitment(ctx, payload, da_meta)?;
        provider.validate_da(ctx, commitment.value(), da_meta)?;

        let old_root = self.state.state_root;
        let inputs = public_inputs(old_root, new_root, commitment.value());
        if !self.context.verifier.verify_proof(proof, &inputs)? {
            warn!(%old_root, %new_root, commitment = %commitment.value(), "proof rejected");
            return Err(SettlementError::InvalidProof);
        }

        let batch_id = self.state.next_batch_id;
        let next_batch_id = batch_id
            .checked_add(1)
            .ok_or(SettlementError::BatchIdExhausted)?;

        debug!(%batch_id, mode = %commitment.mode(), "batch passed all checks");

        Ok(PendingBatch {
            batch_id,
            next_batch_id,
            old_root,
            record: BatchRecord {
                commitment,
                new_root,
            },
        })
    }

    pub(crate) fn plan_set_sequencer(
        &self,
        ctx: &TxContext,
        sequencer: Address,
    ) -> SettlementResult<SettlementTransition> {
        self.ensure_owner(ctx.sender())?;

        Ok(SettlementTransition::SetSequencer { sequencer })
    }

    pub(crate) fn plan_set_da_provider(
        &self,
        ctx: &TxContext,
        da_id: DaId,
        entry: DaEntry,
    ) -> SettlementResult<SettlementTransition> {
        self.ensure_owner(ctx.sender())?;

        let provider = entry.address();
        if provider.is_zero() {
            return Err(SettlementError::InvalidDaProvider);
        }

        if let Some(current) = self.state.da_registry.get(&da_id) {
            // An enabled entry can only be toggled, never pointed at another provider.
            if current.enabled && !current.is_same_provider(&entry.provider) {
                warn!(
                    %da_id,
                    current = %current.address(),
                    %provider,
                    "refused to replace enabled DA provider"
                );
                return Err(SettlementError::DaProviderAlreadySet {
                    da_id,
                    current: current.address(),
                });
            }
        }

        Ok(SettlementTransition::SetDaProvider { da_id, entry })
    }

    pub(crate) fn plan_transfer_ownership(
        &self,
        ctx: &TxContext,
        new_owner: Address,
    ) -> SettlementResult<SettlementTransition> {
        self.ensure_owner(ctx.sender())?;

        if new_owner.is_zero() {
            return Err(SettlementError::InvalidOwner);
        }

        Ok(SettlementTransition::TransferOwnership {
            previous_owner: self.state.owner,
            new_owner,
        })
    }
}
