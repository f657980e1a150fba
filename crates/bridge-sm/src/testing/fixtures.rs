//! Bridges wired to mock collaborators.

use std::sync::Arc;

use rollup_bridge_da::CalldataDa;
use rollup_bridge_primitives::{
    constants::{BLOB_DA_ID, CALLDATA_DA_ID},
    types::TxContext,
};
use rollup_bridge_test_utils::prelude::*;
use rollup_bridge_verifier::ProofVerifier;

use crate::settlement::SettlementSM;

/// The context of a call made by the owner.
pub(crate) fn owner_ctx() -> TxContext {
    TxContext::new(OWNER)
}

/// The context of a call made by the sequencer.
pub(crate) fn sequencer_ctx() -> TxContext {
    TxContext::new(SEQUENCER)
}

/// A bridge at genesis with an accepting mock verifier, no sequencer and an empty registry.
pub(crate) fn bare_bridge() -> (SettlementSM, Arc<MockVerifier>) {
    let verifier = Arc::new(MockVerifier::new(VERIFIER));
    let shared: Arc<dyn ProofVerifier> = verifier.clone();
    let sm = SettlementSM::new(OWNER, Some(shared), GENESIS_ROOT)
        .expect("fixture bridge must deploy");

    (sm, verifier)
}

/// A bridge with [`SEQUENCER`] as sequencer and calldata and blob providers registered under
/// their conventional ids.
///
/// The blob provider in the registry and the built-in blob provider are the returned
/// [`MockBlobDa`], so tests can inject blob hashes.
pub(crate) fn configured_bridge() -> (SettlementSM, Arc<MockVerifier>, Arc<MockBlobDa>) {
    let (sm, verifier) = bare_bridge();
    let blob = Arc::new(mock_blob_da(BLOB_DA));
    let mut sm = sm.with_builtin_providers(Arc::new(CalldataDa::new(CALLDATA_DA)), blob.clone());

    let ctx = owner_ctx();
    sm.set_sequencer(&ctx, SEQUENCER)
        .expect("owner can set the sequencer");
    sm.set_da_provider(
        &ctx,
        CALLDATA_DA_ID,
        Arc::new(CalldataDa::new(CALLDATA_DA)),
        true,
    )
    .expect("owner can register calldata DA");
    sm.set_da_provider(&ctx, BLOB_DA_ID, blob.clone(), true)
        .expect("owner can register blob DA");

    (sm, verifier, blob)
}

/// Same as [`configured_bridge`] without access to the blob provider.
pub(crate) fn bridge_with_mock_verifier() -> (SettlementSM, Arc<MockVerifier>) {
    let (sm, verifier, _) = configured_bridge();

    (sm, verifier)
}
