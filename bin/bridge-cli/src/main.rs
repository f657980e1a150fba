//! CLI for proving-side tooling and offline replay of the settlement core.

mod cli;
mod config;
mod handlers;

use anyhow::{Error, Result};
use clap::Parser;
use rollup_bridge_common::logging::{self, LoggerConfig};

use crate::handlers::{blob_meta, commitment, replay, verify};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let mut logger_config = LoggerConfig::with_base_name("bridge-cli");
    if let Some(url) = logging::get_otlp_url_from_env() {
        logger_config.set_otlp_url(url);
    }
    logging::init(logger_config)?;

    let cli = cli::Cli::parse();
    match cli.command {
        cli::Commands::Verify(args) => verify::handle_verify(args).await,
        cli::Commands::Commitment(args) => commitment::handle_commitment(args).await,
        cli::Commands::BlobMeta(args) => blob_meta::handle_blob_meta(args),
        cli::Commands::Replay(args) => replay::handle_replay(args).await,
    }
}
