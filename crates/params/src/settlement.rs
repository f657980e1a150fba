//! The parameters that fix which proofs the settlement core accepts.

use std::{fs, path::Path, sync::Arc};

use alloy_primitives::B256;
use rollup_bridge_verifier::VerifyingKey;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{default, errors::ParamsError};

/// The consensus-critical settlement parameters.
///
/// These values must be identical for every party that replays the bridge, otherwise they will
/// disagree on which batches are final.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeParams {
    /// The state root before the first batch.
    pub genesis_root: B256,

    /// The number of public inputs of the settlement circuit.
    #[serde(default = "default::num_public_inputs")]
    pub num_public_inputs: usize,

    /// The trusted-setup verifying key.
    pub verifying_key: VerifyingKey,
}

impl BridgeParams {
    /// Parses the params from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self, ParamsError> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads and parses the params file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        debug!(path = %path.display(), "loaded params file");

        Self::from_toml_str(&contents)
    }

    /// Validates the verifying key against the declared number of public inputs.
    pub fn validate(&self) -> Result<(), ParamsError> {
        Ok(self.verifying_key.validate(self.num_public_inputs)?)
    }

    /// Validates the verifying key and freezes it.
    pub fn into_verifying_key(self) -> Result<Arc<VerifyingKey>, ParamsError> {
        self.validate()?;

        Ok(Arc::new(self.verifying_key))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rollup_bridge_primitives::U256;
    use rollup_bridge_verifier::VerifyingKeyError;

    use super::*;

    const G2: &str = r#"[
    ["11559732032986387107991004021392285783925812861821192530917403151452391805634", "10857046999023057135944570762232829481370756359578518086990519993285655852781"],
    ["4082367875863433681332203403145435568316851327593401208105741076214120093531", "8495653923123431417604973247489272438418190587263600148770280649306958101930"],
]"#;

    fn params_toml(ic: &str) -> String {
        format!(
            r#"
genesis_root = "0x1111111111111111111111111111111111111111111111111111111111111111"

[verifying_key]
alpha = ["1", "2"]
beta = {G2}
gamma = {G2}
delta = {G2}
ic = {ic}
"#
        )
    }

    #[test]
    fn parses_and_validates() {
        let contents = params_toml(r#"[["1", "2"], ["1", "2"], ["0x1", "0x2"], [1, 2]]"#);

        let params = BridgeParams::from_toml_str(&contents).expect("must parse");
        assert_eq!(params.genesis_root, B256::repeat_byte(0x11));
        assert_eq!(params.num_public_inputs, 3);
        assert_eq!(params.verifying_key.ic.len(), 4);
        assert_eq!(params.verifying_key.alpha.y, U256::from(2));

        let vk = params.into_verifying_key().expect("generator key is valid");
        assert_eq!(vk.num_public_inputs(), 3);
    }

    #[test]
    fn serde_roundtrip() {
        let contents = params_toml(r#"[["1", "2"], ["1", "2"], ["1", "2"], ["1", "2"]]"#);
        let params = BridgeParams::from_toml_str(&contents).expect("must parse");

        let serialized = toml::to_string(&params).expect("must serialize");
        let reparsed = BridgeParams::from_toml_str(&serialized).expect("must reparse");

        assert_eq!(reparsed, params);
    }

    #[test]
    fn rejects_short_ic() {
        let contents = params_toml(r#"[["1", "2"], ["1", "2"]]"#);
        let params = BridgeParams::from_toml_str(&contents).expect("must parse");

        assert!(matches!(
            params.into_verifying_key(),
            Err(ParamsError::InvalidVerifyingKey(
                VerifyingKeyError::IcLengthMismatch {
                    expected: 4,
                    got: 2
                }
            ))
        ));
    }

    #[test]
    fn rejects_off_curve_point() {
        let contents = params_toml(r#"[["1", "2"], ["1", "3"], ["1", "2"], ["1", "2"]]"#);
        let params = BridgeParams::from_toml_str(&contents).expect("must parse");

        assert!(matches!(
            params.validate(),
            Err(ParamsError::InvalidVerifyingKey(
                VerifyingKeyError::InvalidPoint { .. }
            ))
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            BridgeParams::from_toml_str("genesis_root = 7"),
            Err(ParamsError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_path() {
        let contents = params_toml(r#"[["1", "2"], ["1", "2"], ["1", "2"], ["1", "2"]]"#);
        let mut file = tempfile::NamedTempFile::new().expect("must create temp file");
        file.write_all(contents.as_bytes()).expect("must write");

        let params = BridgeParams::from_path(file.path()).expect("must load");
        assert_eq!(params.genesis_root, B256::repeat_byte(0x11));

        assert!(matches!(
            BridgeParams::from_path(file.path().with_extension("missing")),
            Err(ParamsError::Io(_))
        ));
    }
}
