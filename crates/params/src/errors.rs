//! Errors for the settlement parameters.

use std::io;

use rollup_bridge_verifier::VerifyingKeyError;
use thiserror::Error;

/// Error while loading or validating the settlement parameters.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The params file could not be read.
    #[error("failed to read params file: {0}")]
    Io(#[from] io::Error),

    /// The params file is not valid TOML of the expected shape.
    #[error("failed to parse params file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The verifying key is unusable.
    #[error("invalid verifying key: {0}")]
    InvalidVerifyingKey(#[from] VerifyingKeyError),
}
