use std::{fs, path::Path};

use alloy_primitives::Address;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// Deployment addresses of the in-memory bridge.
///
/// None of these are consensus-critical; they only decide who may call what during a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Config {
    pub(crate) owner: Address,

    /// Zero opens submission to everyone.
    pub(crate) sequencer: Address,

    pub(crate) calldata_da_address: Address,

    pub(crate) blob_da_address: Address,

    pub(crate) verifier_address: Address,
}

impl Config {
    pub(crate) fn from_toml_str(contents: &str) -> Result<Self, anyhow::Error> {
        toml::from_str(contents).map_err(|e| anyhow!(format!("Failed to parse config file: {}", e)))
    }

    pub(crate) fn from_path(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let contents = fs::read_to_string(path)?;

        Self::from_toml_str(&contents)
    }
}
