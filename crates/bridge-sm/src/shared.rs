//! A thread-safe handle to a [`SettlementSM`].
//!
//! Writers are serialized. A writer plans its operation under a shared read lock, so queries keep
//! being served while proofs are verified, and takes the exclusive lock only for the infallible
//! commit. Readers therefore only ever observe fully committed states.

use std::sync::Arc;

use alloy_primitives::{Address, B256};
use parking_lot::{Mutex, RwLock};
use rollup_bridge_primitives::{
    proof::Proof,
    types::{BatchId, DaId, TxContext},
};

use crate::{
    settlement::{
        BatchFinalized, BatchRecord, DaSelector, SettlementEvent, SettlementOutput,
        SettlementResult, SettlementSM,
    },
    state_machine::StateMachine,
};

#[derive(Debug)]
struct Inner {
    writer: Mutex<()>,
    sm: RwLock<SettlementSM>,
}

/// A cloneable, thread-safe handle to a [`SettlementSM`].
#[derive(Debug, Clone)]
pub struct SharedBridge {
    inner: Arc<Inner>,
}

impl SharedBridge {
    /// Wraps a state machine in a shared handle.
    pub fn new(sm: SettlementSM) -> Self {
        Self {
            inner: Arc::new(Inner {
                writer: Mutex::new(()),
                sm: RwLock::new(sm),
            }),
        }
    }

    /// Processes an event as one indivisible operation.
    pub fn process_event(
        &self,
        ctx: &TxContext,
        event: SettlementEvent,
    ) -> SettlementResult<SettlementOutput> {
        let _writer = self.inner.writer.lock();

        let transition = self.inner.sm.read().plan(ctx, event)?;

        Ok(self.inner.sm.write().apply(transition))
    }

    fn commit(
        &self,
        ctx: &TxContext,
        selector: DaSelector,
        payload: &[u8],
        da_meta: &[u8],
        new_root: B256,
        proof: &Proof,
    ) -> SettlementResult<BatchFinalized> {
        let _writer = self.inner.writer.lock();

        let pending =
            self.inner
                .sm
                .read()
                .plan_commit(ctx, selector, payload, da_meta, new_root, proof)?;

        Ok(self.inner.sm.write().apply_batch(pending))
    }

    /// See [`SettlementSM::commit_batch`].
    pub fn commit_batch(
        &self,
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

    /// See [`SettlementSM::commit_batch_calldata`].
    pub fn commit_batch_calldata(
        &self,
        ctx: &TxContext,
        payload: &[u8],
        new_root: B256,
        proof: &Proof,
    ) -> SettlementResult<BatchFinalized> {
        self.commit(ctx, DaSelector::Calldata, payload, &[], new_root, proof)
    }

    /// See [`SettlementSM::commit_batch_blob`].
    pub fn commit_batch_blob(
        &self,
        ctx: &TxContext,
        da_meta: &[u8],
        new_root: B256,
        proof: &Proof,
    ) -> SettlementResult<BatchFinalized> {
        self.commit(ctx, DaSelector::Blob, &[], da_meta, new_root, proof)
    }

    /// Runs `f` against a committed snapshot of the state machine.
    pub fn read<R>(&self, f: impl FnOnce(&SettlementSM) -> R) -> R {
        f(&self.inner.sm.read())
    }

    /// See [`SettlementSM::state_root`].
    pub fn state_root(&self) -> B256 {
        self.read(SettlementSM::state_root)
    }

    /// See [`SettlementSM::next_batch_id`].
    pub fn next_batch_id(&self) -> BatchId {
        self.read(SettlementSM::next_batch_id)
    }

    /// See [`SettlementSM::sequencer`].
    pub fn sequencer(&self) -> Address {
        self.read(SettlementSM::sequencer)
    }

    /// See [`SettlementSM::batch`].
    pub fn batch(&self, batch_id: BatchId) -> Option<BatchRecord> {
        self.read(|sm| sm.batch(batch_id).copied())
    }
}
