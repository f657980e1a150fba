use std::path::PathBuf;

use alloy_primitives::B256;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bridge-cli",
    about = "Settlement core tooling: proof verification, DA commitments and batch replay",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
    Verify(VerifyArgs),

    Commitment(CommitmentArgs),

    BlobMeta(BlobMetaArgs),

    Replay(ReplayArgs),
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Check a Groth16 proof against the verifying key in the params file", version)]
pub(crate) struct VerifyArgs {
    #[arg(long, env = "BRIDGE_PARAMS", help = "the path to the params file")]
    pub(crate) params: PathBuf,

    #[arg(
        long,
        help = "the path to a JSON file holding the proof and its public inputs"
    )]
    pub(crate) proof: PathBuf,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Compute the calldata DA commitment of a payload", version)]
pub(crate) struct CommitmentArgs {
    #[arg(long, help = "the path to the payload file")]
    pub(crate) payload: PathBuf,

    #[arg(long, help = "treat the payload file as hex text instead of raw bytes")]
    pub(crate) hex: bool,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Encode the metadata of a blob batch", version)]
pub(crate) struct BlobMetaArgs {
    #[arg(long, help = "the versioned hash the blob must carry")]
    pub(crate) versioned_hash: B256,

    #[arg(long, default_value_t = 0, help = "the index of the blob in the transaction")]
    pub(crate) index: u8,

    #[arg(long, help = "emit the 33-byte packed encoding")]
    pub(crate) packed: bool,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Run a list of batch submissions through an in-memory bridge",
    version
)]
pub(crate) struct ReplayArgs {
    #[arg(long, env = "BRIDGE_PARAMS", help = "the path to the params file")]
    pub(crate) params: PathBuf,

    #[arg(long, env = "BRIDGE_CONFIG", help = "the path to the config file")]
    pub(crate) config: PathBuf,

    #[arg(long, help = "the path to a JSON list of submissions")]
    pub(crate) submissions: PathBuf,
}
