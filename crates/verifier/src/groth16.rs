//! The Groth16 verifier over BN254.

use std::sync::Arc;

use alloy_primitives::{Address, U256};
use rollup_bridge_curve::{add, negate, pairing_check, scalar_mul};
use rollup_bridge_primitives::{field::is_in_scalar_field, proof::Proof};
use tracing::debug;

use crate::{
    errors::{VerifierError, VerifierResult, VerifyingKeyError},
    traits::ProofVerifier,
    vk::VerifyingKey,
};

/// Verifies Groth16 proofs against a frozen [`VerifyingKey`].
#[derive(Debug, Clone)]
pub struct Groth16Verifier {
    address: Address,
    vk: Arc<VerifyingKey>,
}

impl Groth16Verifier {
    /// Creates a verifier registered under `address`.
    ///
    /// The key is validated for the number of public inputs implied by its `ic` length, so a
    /// verifier can never hold a key without a constant term.
    pub fn new(address: Address, vk: Arc<VerifyingKey>) -> Result<Self, VerifyingKeyError> {
        vk.validate(vk.num_public_inputs())?;

        Ok(Self { address, vk })
    }

    /// Returns the verifying key.
    pub fn vk(&self) -> &VerifyingKey {
        &self.vk
    }

    fn check_inputs(&self, public_inputs: &[U256]) -> VerifierResult<()> {
        let expected = self.vk.num_public_inputs();
        if public_inputs.len() != expected {
            return Err(VerifierError::InputLengthMismatch {
                expected,
                got: public_inputs.len(),
            });
        }

        if let Some((index, value)) = public_inputs
            .iter()
            .enumerate()
            .find(|(_, value)| !is_in_scalar_field(value))
        {
            return Err(VerifierError::GteSnarkScalarField {
                index,
                value: *value,
            });
        }

        Ok(())
    }
}

impl ProofVerifier for Groth16Verifier {
    fn address(&self) -> Address {
        self.address
    }

    fn verify_proof(&self, proof: &Proof, public_inputs: &[U256]) -> VerifierResult<bool> {
        self.check_inputs(public_inputs)?;

        let (constant, bases) = self
            .vk
            .ic
            .split_first()
            .ok_or(VerifierError::InputLengthMismatch {
                expected: 0,
                got: public_inputs.len(),
            })?;

        let mut vk_x = *constant;
        for (base, input) in bases.iter().zip(public_inputs) {
            vk_x = add(&vk_x, &scalar_mul(base, input)?)?;
        }

        let vk = &self.vk;
        let accepted = pairing_check(&[
            (negate(&proof.a), proof.b),
            (vk.alpha, vk.beta),
            (vk_x, vk.gamma),
            (proof.c, vk.delta),
        ])?;

        debug!(verifier = %self.address, %accepted, "groth16 pairing check evaluated");

        Ok(accepted)
    }
}

#[cfg(test)]
mod tests {
    use rollup_bridge_curve::{
        codec::{g1_generator, g2_generator},
        CurveError, PrecompileFault,
    };
    use rollup_bridge_primitives::{
        constants::{PRIME_Q, SNARK_SCALAR_FIELD},
        proof::{G1Point, Proof},
    };

    use super::*;

    const VERIFIER: Address = Address::repeat_byte(0x5a);

    /// A key whose every base is a generator, which makes the pairing equation collapse to a
    /// scalar relation in the exponent.
    fn generator_verifier() -> Groth16Verifier {
        let g1 = g1_generator();
        let g2 = g2_generator();

        let vk = VerifyingKey {
            alpha: g1,
            beta: g2,
            gamma: g2,
            delta: g2,
            ic: vec![g1; 4],
        };

        Groth16Verifier::new(VERIFIER, Arc::new(vk)).expect("generator key must be valid")
    }

    /// With generator bases the equation is `-a + 1 + (1 + sum(inputs)) = 0`, so `A = (2 + sum)G`,
    /// `B = H` and `C = O` is accepted.
    fn proof_for(inputs: &[u64]) -> Proof {
        let sum: u64 = inputs.iter().sum();
        let a = scalar_mul(&g1_generator(), &U256::from(2 + sum)).expect("generator is valid");

        Proof::new(a, g2_generator(), G1Point::IDENTITY)
    }

    fn inputs(values: &[u64]) -> Vec<U256> {
        values.iter().map(|v| U256::from(*v)).collect()
    }

    #[test]
    fn accepts_satisfying_proof() {
        let verifier = generator_verifier();

        let proof = proof_for(&[1, 2, 3]);
        assert_eq!(verifier.verify_proof(&proof, &inputs(&[1, 2, 3])), Ok(true));
    }

    #[test]
    fn rejects_proof_for_other_inputs() {
        let verifier = generator_verifier();

        let proof = proof_for(&[1, 2, 3]);
        assert_eq!(verifier.verify_proof(&proof, &inputs(&[1, 2, 4])), Ok(false));
    }

    #[test]
    fn zero_proof_is_rejected_not_an_error() {
        let verifier = generator_verifier();

        assert_eq!(
            verifier.verify_proof(&Proof::zero(), &inputs(&[0, 0, 0])),
            Ok(false)
        );
    }

    #[test]
    fn input_at_modulus_is_rejected() {
        let verifier = generator_verifier();
        let public_inputs = vec![U256::from(1), SNARK_SCALAR_FIELD, U256::from(3)];

        assert_eq!(
            verifier.verify_proof(&Proof::zero(), &public_inputs),
            Err(VerifierError::GteSnarkScalarField {
                index: 1,
                value: SNARK_SCALAR_FIELD,
            })
        );
    }

    #[test]
    fn wrong_input_count_is_rejected() {
        let verifier = generator_verifier();

        assert_eq!(
            verifier.verify_proof(&Proof::zero(), &inputs(&[1, 2])),
            Err(VerifierError::InputLengthMismatch {
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn out_of_field_proof_point_fails_the_pairing() {
        let verifier = generator_verifier();
        let mut proof = proof_for(&[0, 0, 0]);
        proof.a = G1Point::new(PRIME_Q, U256::ZERO);

        assert_eq!(
            verifier.verify_proof(&proof, &inputs(&[0, 0, 0])),
            Err(VerifierError::Curve(CurveError::PairingOpcodeFailed(
                PrecompileFault::CoordinateOutOfField
            )))
        );
    }

    #[test]
    fn key_without_constant_term_is_refused() {
        let mut vk = generator_verifier().vk().clone();
        vk.ic.clear();

        assert!(Groth16Verifier::new(VERIFIER, Arc::new(vk)).is_err());
    }
}
