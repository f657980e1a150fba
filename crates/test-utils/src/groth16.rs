//! A real Groth16 circuit with the settlement core's public-input shape.
//!
//! The circuit exposes three public inputs `(old_root, new_root, commitment)` and enforces two
//! trivial relations over them, which is enough to produce proofs that only verify for the exact
//! inputs they were created with.

use alloy_primitives::U256;
use ark_bn254::{Bn254, Fr};
use ark_ff::PrimeField;
use ark_groth16::{Groth16, ProvingKey};
use ark_relations::{
    lc,
    r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError, Variable},
};
use ark_std::rand::{rngs::StdRng, SeedableRng};
use rollup_bridge_curve::codec::{encode_g1, encode_g2};
use rollup_bridge_primitives::proof::Proof;
use rollup_bridge_verifier::VerifyingKey;

/// The fixture circuit.
#[derive(Debug, Clone, Copy)]
pub struct TransitionCircuit {
    /// The pre-state root, reduced into the scalar field.
    pub old_root: Fr,

    /// The post-state root, reduced into the scalar field.
    pub new_root: Fr,

    /// The DA commitment, reduced into the scalar field.
    pub commitment: Fr,
}

impl TransitionCircuit {
    /// Creates a circuit instance for the given public inputs, reducing each modulo `R`.
    pub fn new(old_root: U256, new_root: U256, commitment: U256) -> Self {
        Self {
            old_root: to_fr(old_root),
            new_root: to_fr(new_root),
            commitment: to_fr(commitment),
        }
    }
}

impl ConstraintSynthesizer<Fr> for TransitionCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let old_root = cs.new_input_variable(|| Ok(self.old_root))?;
        let new_root = cs.new_input_variable(|| Ok(self.new_root))?;
        let commitment = cs.new_input_variable(|| Ok(self.commitment))?;

        let link = cs.new_witness_variable(|| Ok(self.old_root + self.new_root))?;
        let square = cs.new_witness_variable(|| Ok(self.commitment * self.commitment))?;

        // (old + new) * 1 = link
        cs.enforce_constraint(
            lc!() + old_root + new_root,
            lc!() + Variable::One,
            lc!() + link,
        )?;
        // commitment * commitment = square
        cs.enforce_constraint(lc!() + commitment, lc!() + commitment, lc!() + square)?;

        Ok(())
    }
}

/// Holds a proving key for [`TransitionCircuit`] and produces proofs in the settlement encoding.
#[derive(Debug)]
pub struct TransitionProver {
    pk: ProvingKey<Bn254>,
    rng: StdRng,
}

impl TransitionProver {
    /// Runs a deterministic setup from `seed`.
    pub fn setup(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let shape = TransitionCircuit::new(U256::ZERO, U256::ZERO, U256::ZERO);
        let pk = Groth16::<Bn254>::generate_random_parameters_with_reduction(shape, &mut rng)
            .expect("fixture circuit setup must succeed");

        Self { pk, rng }
    }

    /// Returns the verifying key in the settlement encoding.
    pub fn verifying_key(&self) -> VerifyingKey {
        let vk = &self.pk.vk;

        VerifyingKey {
            alpha: encode_g1(&vk.alpha_g1),
            beta: encode_g2(&vk.beta_g2),
            gamma: encode_g2(&vk.gamma_g2),
            delta: encode_g2(&vk.delta_g2),
            ic: vk.gamma_abc_g1.iter().map(encode_g1).collect(),
        }
    }

    /// Proves a transition and returns the proof with its reduced public inputs.
    pub fn prove(
        &mut self,
        old_root: U256,
        new_root: U256,
        commitment: U256,
    ) -> (Proof, Vec<U256>) {
        let circuit = TransitionCircuit::new(old_root, new_root, commitment);
        let proof =
            Groth16::<Bn254>::create_random_proof_with_reduction(circuit, &self.pk, &mut self.rng)
                .expect("fixture circuit is satisfiable");

        let proof = Proof::new(encode_g1(&proof.a), encode_g2(&proof.b), encode_g1(&proof.c));
        let public_inputs = [circuit.old_root, circuit.new_root, circuit.commitment]
            .iter()
            .map(from_fr)
            .collect();

        (proof, public_inputs)
    }
}

fn to_fr(value: U256) -> Fr {
    Fr::from_le_bytes_mod_order(&value.to_le_bytes::<32>())
}

fn from_fr(value: &Fr) -> U256 {
    U256::from_limbs(value.into_bigint().0)
}
