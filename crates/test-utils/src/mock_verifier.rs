//! A programmable [`ProofVerifier`].

use alloy_primitives::{Address, U256};
use parking_lot::Mutex;
use rollup_bridge_primitives::proof::Proof;
use rollup_bridge_verifier::{ProofVerifier, VerifierError, VerifierResult};

/// What [`MockVerifier`] does when the inputs differ from the expected ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// Return `Ok(false)`.
    #[default]
    Reject,

    /// Fail with a backend error.
    Revert,
}

#[derive(Debug)]
struct MockState {
    should_verify: bool,
    expected_inputs: Option<Vec<U256>>,
    policy: MismatchPolicy,
    calls: Vec<Vec<U256>>,
}

/// A verifier whose answer is set by the test.
///
/// It accepts every proof by default. When expected inputs are configured, any call with
/// different inputs is handled according to the [`MismatchPolicy`]. Every call's inputs are
/// recorded.
#[derive(Debug)]
pub struct MockVerifier {
    address: Address,
    state: Mutex<MockState>,
}

impl MockVerifier {
    /// Creates a verifier registered under `address` that accepts every proof.
    pub fn new(address: Address) -> Self {
        Self {
            address,
            state: Mutex::new(MockState {
                should_verify: true,
                expected_inputs: None,
                policy: MismatchPolicy::default(),
                calls: Vec::new(),
            }),
        }
    }

    /// Sets whether proofs are accepted.
    pub fn set_should_verify(&self, should_verify: bool) {
        self.state.lock().should_verify = should_verify;
    }

    /// Sets the inputs every call must carry, or clears them with `None`.
    pub fn set_expected_inputs(&self, expected_inputs: Option<Vec<U256>>) {
        self.state.lock().expected_inputs = expected_inputs;
    }

    /// Sets what happens on an input mismatch.
    pub fn set_mismatch_policy(&self, policy: MismatchPolicy) {
        self.state.lock().policy = policy;
    }

    /// Returns the inputs of every call so far, oldest first.
    pub fn calls(&self) -> Vec<Vec<U256>> {
        self.state.lock().calls.clone()
    }
}

impl ProofVerifier for MockVerifier {
    fn address(&self) -> Address {
        self.address
    }

    fn verify_proof(&self, _proof: &Proof, public_inputs: &[U256]) -> VerifierResult<bool> {
        let mut state = self.state.lock();
        state.calls.push(public_inputs.to_vec());

        if !state.should_verify {
            return Ok(false);
        }

        if let Some(expected) = &state.expected_inputs {
            if expected.as_slice() != public_inputs {
                return match state.policy {
                    MismatchPolicy::Reject => Ok(false),
                    MismatchPolicy::Revert => Err(VerifierError::Backend(
                        "unexpected public inputs".to_string(),
                    )),
                };
            }
        }

        Ok(true)
    }
}
