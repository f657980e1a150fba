use std::path::Path;

use alloy_primitives::{Address, U256};
use anyhow::{ensure, Result};
use rollup_bridge_params::prelude::BridgeParams;
use rollup_bridge_primitives::{proof::Proof, serde_utils::FieldString};
use rollup_bridge_verifier::{Groth16Verifier, ProofVerifier};
use serde::Deserialize;
use tracing::info;

use crate::cli::VerifyArgs;

/// A proof together with the public inputs it was produced for.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProofFile {
    pub(crate) proof: Proof,
    pub(crate) public_inputs: Vec<FieldString>,
}

impl ProofFile {
    pub(crate) fn public_inputs(&self) -> Vec<U256> {
        self.public_inputs.iter().map(|input| input.0).collect()
    }
}

pub(crate) async fn handle_verify(args: VerifyArgs) -> Result<()> {
    let VerifyArgs { params, proof } = args;

    let params = BridgeParams::from_path(params)?;
    let proof_file = read_proof_file(&proof).await?;

    let valid = verify_with_params(params, &proof_file)?;
    info!(%valid, path = %proof.display(), "verified proof");
    println!("{}", serde_json::json!({ "valid": valid }));

    ensure!(valid, "proof rejected by the verifying key");

    Ok(())
}

async fn read_proof_file(path: &Path) -> Result<ProofFile> {
    let contents = tokio::fs::read_to_string(path).await?;

    Ok(serde_json::from_str(&contents)?)
}

/// The verifier address does not matter outside of a bridge deployment.
pub(crate) fn verify_with_params(params: BridgeParams, proof_file: &ProofFile) -> Result<bool> {
    let verifier = Groth16Verifier::new(Address::ZERO, params.into_verifying_key()?)?;

    Ok(verifier.verify_proof(&proof_file.proof, &proof_file.public_inputs())?)
}

#[cfg(test)]
mod tests {
    use rollup_bridge_primitives::proof::{G1Point, G2Point};

    use super::*;

    fn devnet_params() -> BridgeParams {
        BridgeParams::from_toml_str(include_str!("../../params.devnet.toml")).unwrap()
    }

    fn generator_proof(public_inputs: [u64; 3]) -> ProofFile {
        let params = devnet_params();
        let vk = &params.verifying_key;

        // With every key element a generator, `A = (2 + sum of inputs) * G` and `C = O` balance
        // the pairing equation.
        let generator = vk.alpha;
        let scalar = U256::from(2 + public_inputs.iter().sum::<u64>());
        let a = scalar_times(generator, scalar);

        let proof = Proof::new(a, vk.beta, G1Point::IDENTITY);

        ProofFile {
            proof,
            public_inputs: public_inputs
                .iter()
                .map(|input| FieldString(U256::from(*input)))
                .collect(),
        }
    }

    fn scalar_times(point: G1Point, scalar: U256) -> G1Point {
        rollup_bridge_curve::scalar_mul(&point, &scalar).unwrap()
    }

    #[test]
    fn devnet_params_are_valid() {
        let params = devnet_params();
        assert_eq!(params.num_public_inputs, 3);
        assert!(params.into_verifying_key().is_ok());
    }

    #[test]
    fn generator_proof_verifies() {
        let proof_file = generator_proof([1, 2, 3]);
        assert!(verify_with_params(devnet_params(), &proof_file).unwrap());
    }

    #[test]
    fn tampered_inputs_are_rejected() {
        let mut proof_file = generator_proof([1, 2, 3]);
        proof_file.public_inputs[2] = FieldString(U256::from(4));

        assert!(!verify_with_params(devnet_params(), &proof_file).unwrap());
    }

    #[test]
    fn wrong_input_count_is_an_error() {
        let mut proof_file = generator_proof([1, 2, 3]);
        proof_file.public_inputs.pop();

        assert!(verify_with_params(devnet_params(), &proof_file).is_err());
    }

    #[test]
    fn parses_proof_json() {
        let json = r#"{
            "proof": {
                "a": ["1", "2"],
                "b": [["0", "0"], ["0", "0"]],
                "c": ["0x0", "0"]
            },
            "public_inputs": ["1", 2, "0x3"]
        }"#;

        let proof_file: ProofFile = serde_json::from_str(json).unwrap();
        assert_eq!(proof_file.proof.a, G1Point::new(U256::from(1), U256::from(2)));
        assert_eq!(proof_file.proof.b, G2Point::IDENTITY);
        assert_eq!(
            proof_file.public_inputs(),
            vec![U256::from(1), U256::from(2), U256::from(3)]
        );
    }
}
