use anyhow::{Context, Result};
use rollup_bridge_da::{CalldataDa, DaProvider};
use rollup_bridge_primitives::{constants::CALLDATA_DA_ID, types::TxContext, Address};
use tracing::info;

use crate::cli::CommitmentArgs;

pub(crate) async fn handle_commitment(args: CommitmentArgs) -> Result<()> {
    let CommitmentArgs { payload, hex } = args;

    let contents = tokio::fs::read(&payload)
        .await
        .with_context(|| format!("failed to read payload file {}", payload.display()))?;
    let payload_bytes = if hex {
        decode_hex_payload(&contents)?
    } else {
        contents
    };

    let commitment = CalldataDa::new(Address::ZERO).compute_commitment(
        &TxContext::default(),
        &payload_bytes,
        &[],
    )?
    .value();
    info!(da_id = CALLDATA_DA_ID, len = payload_bytes.len(), %commitment, "computed commitment");
    println!("{commitment}");

    Ok(())
}

fn decode_hex_payload(contents: &[u8]) -> Result<Vec<u8>> {
    let text = std::str::from_utf8(contents).context("hex payload is not valid utf-8")?;
    let text = text.trim();
    let digits = text.strip_prefix("0x").unwrap_or(text);

    hex::decode(digits).context("hex payload is malformed")
}
