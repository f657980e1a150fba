use std::sync::Arc;

use alloy_primitives::{Address, Bytes, B256};
use anyhow::{Context, Result};
use rollup_bridge_da::{BlobDa, CalldataDa, DaProvider};
use rollup_bridge_params::prelude::BridgeParams;
use rollup_bridge_primitives::{
    constants::{BLOB_DA_ID, CALLDATA_DA_ID},
    proof::Proof,
    types::{DaId, TxContext},
};
use rollup_bridge_sm::settlement::{BatchFinalized, SettlementResult, SettlementSM};
use rollup_bridge_verifier::{Groth16Verifier, ProofVerifier, VerifyingKey};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{cli::ReplayArgs, config::Config};

/// Which entry point a submission goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Target {
    Calldata,
    Blob,
    Registry(DaId),
}

/// A single batch submission as it would arrive in a transaction.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Submission {
    pub(crate) sender: Address,

    #[serde(default)]
    pub(crate) blob_hashes: Vec<B256>,

    pub(crate) target: Target,

    #[serde(default)]
    pub(crate) payload: Bytes,

    #[serde(default)]
    pub(crate) da_meta: Bytes,

    pub(crate) new_root: B256,

    pub(crate) proof: Proof,
}

impl Submission {
    fn submit(&self, sm: &mut SettlementSM) -> SettlementResult<BatchFinalized> {
        let ctx = TxContext::new(self.sender).with_blob_hashes(self.blob_hashes.clone());

        match self.target {
            Target::Calldata => {
                sm.commit_batch_calldata(&ctx, &self.payload, self.new_root, &self.proof)
            }
            Target::Blob => sm.commit_batch_blob(&ctx, &self.da_meta, self.new_root, &self.proof),
            Target::Registry(da_id) => sm.commit_batch(
                &ctx,
                da_id,
                &self.payload,
                &self.da_meta,
                self.new_root,
                &self.proof,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ReplaySummary {
    pub(crate) finalized: usize,
    pub(crate) rejected: usize,
}

pub(crate) async fn handle_replay(args: ReplayArgs) -> Result<()> {
    let ReplayArgs {
        params,
        config,
        submissions,
    } = args;

    let params = BridgeParams::from_path(params)?;
    let config = Config::from_path(config)?;

    let contents = tokio::fs::read_to_string(&submissions)
        .await
        .with_context(|| format!("failed to read submissions {}", submissions.display()))?;
    let submissions: Vec<Submission> = serde_json::from_str(&contents)?;

    let genesis_root = params.genesis_root;
    let mut sm = build_bridge(&config, genesis_root, params.into_verifying_key()?)?;

    let summary = replay(&mut sm, &submissions);

    for line in render_logs(&sm)? {
        println!("{line}");
    }

    info!(
        finalized = summary.finalized,
        rejected = summary.rejected,
        state_root = %sm.state_root(),
        "replay complete"
    );

    Ok(())
}

/// Deploys an in-memory bridge and performs the owner's setup calls.
pub(crate) fn build_bridge(
    config: &Config,
    genesis_root: B256,
    vk: Arc<VerifyingKey>,
) -> Result<SettlementSM> {
    let verifier: Arc<dyn ProofVerifier> =
        Arc::new(Groth16Verifier::new(config.verifier_address, vk)?);
    let calldata: Arc<dyn DaProvider> = Arc::new(CalldataDa::new(config.calldata_da_address));
    let blob: Arc<dyn DaProvider> = Arc::new(BlobDa::new(config.blob_da_address));

    let mut sm = SettlementSM::new(config.owner, Some(verifier), genesis_root)?
        .with_builtin_providers(calldata.clone(), blob.clone());

    let owner = TxContext::new(config.owner);
    sm.set_sequencer(&owner, config.sequencer)?;
    sm.set_da_provider(&owner, CALLDATA_DA_ID, calldata, true)?;
    sm.set_da_provider(&owner, BLOB_DA_ID, blob, true)?;

    Ok(sm)
}

/// Submits every batch in order. Rejected submissions are logged and skipped.
pub(crate) fn replay(sm: &mut SettlementSM, submissions: &[Submission]) -> ReplaySummary {
    let mut summary = ReplaySummary::default();

    for (index, submission) in submissions.iter().enumerate() {
        match submission.submit(sm) {
            Ok(finalized) => {
                debug!(%index, batch_id = %finalized.batch_id, "submission finalized");
                summary.finalized += 1;
            }
            Err(err) => {
                warn!(%index, %err, "submission rejected");
                summary.rejected += 1;
            }
        }
    }

    summary
}

pub(crate) fn render_logs(sm: &SettlementSM) -> Result<Vec<String>> {
    sm.logs()
        .iter()
        .map(|log| serde_json::to_string(log).map_err(Into::into))
        .collect()
}
