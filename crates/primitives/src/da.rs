//! Data-availability types shared between the DA providers and the settlement layer.

use std::fmt;

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::errors::ParseError;

/// The encoding that a batch's data was made available with.
///
/// Serializes as its numeric tag, which is how finalization records carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum DaMode {
    /// The batch payload is posted inline and committed to by its content hash.
    Calldata = 0,

    /// The batch payload is posted as a blob and committed to by its versioned hash.
    Blob = 1,
}

impl DaMode {
    /// Returns the numeric tag of the mode as it appears in finalization records.
    pub const fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl From<DaMode> for u8 {
    fn from(mode: DaMode) -> Self {
        mode.as_u8()
    }
}

impl TryFrom<u8> for DaMode {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Calldata),
            1 => Ok(Self::Blob),
            other => Err(ParseError::InvalidDaMode(other)),
        }
    }
}

impl fmt::Display for DaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaMode::Calldata => write!(f, "calldata"),
            DaMode::Blob => write!(f, "blob"),
        }
    }
}

/// The single 32-byte value that binds a batch to its data, tagged with the DA mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DaCommitment {
    /// The commitment value.
    pub value: B256,

    /// The mode the commitment was produced under.
    pub mode: DaMode,
}

impl DaCommitment {
    /// Creates a new commitment.
    pub const fn new(value: B256, mode: DaMode) -> Self {
        Self { value, mode }
    }

    /// Returns the commitment value.
    pub const fn value(&self) -> B256 {
        self.value
    }

    /// Returns the DA mode.
    pub const fn mode(&self) -> DaMode {
        self.mode
    }
}
