//! The verifier interface consumed by the settlement layer.

use std::fmt::Debug;

use alloy_primitives::{Address, U256};
use rollup_bridge_primitives::proof::Proof;

use crate::errors::VerifierResult;

/// A component that attests to the correctness of a batch's state transition.
///
/// Implementations must be deterministic: the same `(proof, public_inputs)` always produces the
/// same result for a given configuration.
pub trait ProofVerifier: Debug + Send + Sync {
    /// The address this verifier is registered under.
    ///
    /// The zero address is never a valid verifier.
    fn address(&self) -> Address;

    /// Verifies `proof` against `public_inputs`.
    ///
    /// Returns `Ok(false)` when the proof is rejected and an error only when the inputs are
    /// malformed or a primitive fails.
    fn verify_proof(&self, proof: &Proof, public_inputs: &[U256]) -> VerifierResult<bool>;
}
