//! End-to-end verification of proofs produced by a real Groth16 prover.

use std::sync::Arc;

use rollup_bridge_primitives::{constants::NUM_PUBLIC_INPUTS, U256};
use rollup_bridge_test_utils::prelude::*;
use rollup_bridge_verifier::{Groth16Verifier, ProofVerifier, VerifierError};

fn verifier(prover: &TransitionProver) -> Groth16Verifier {
    let vk = prover.verifying_key();
    assert_eq!(vk.num_public_inputs(), NUM_PUBLIC_INPUTS);

    Groth16Verifier::new(VERIFIER, Arc::new(vk)).expect("setup produces a valid key")
}

#[test]
fn accepts_genuine_proof() {
    let mut prover = TransitionProver::setup(7);
    let verifier = verifier(&prover);

    let (proof, inputs) = prover.prove(U256::from(11), U256::from(22), U256::from(33));

    assert_eq!(verifier.verify_proof(&proof, &inputs), Ok(true));
}

#[test]
fn rejects_proof_with_changed_input() {
    let mut prover = TransitionProver::setup(7);
    let verifier = verifier(&prover);

    let (proof, mut inputs) = prover.prove(U256::from(11), U256::from(22), U256::from(33));
    inputs[1] = U256::from(23);

    assert_eq!(verifier.verify_proof(&proof, &inputs), Ok(false));
}

#[test]
fn rejects_proof_from_another_setup() {
    let mut prover = TransitionProver::setup(7);
    let other = verifier(&TransitionProver::setup(8));

    let (proof, inputs) = prover.prove(U256::from(1), U256::from(2), U256::from(3));

    assert_eq!(other.verify_proof(&proof, &inputs), Ok(false));
}

#[test]
fn unreduced_inputs_are_refused() {
    let mut prover = TransitionProver::setup(7);
    let verifier = verifier(&prover);

    let (proof, mut inputs) = prover.prove(U256::MAX, U256::from(2), U256::from(3));
    assert!(inputs[0] < U256::MAX);

    inputs[0] = U256::MAX;
    assert!(matches!(
        verifier.verify_proof(&proof, &inputs),
        Err(VerifierError::GteSnarkScalarField { index: 0, .. })
    ));
}
