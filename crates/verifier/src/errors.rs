//! Errors for proof verification and verifying-key validation.

use alloy_primitives::U256;
use rollup_bridge_curve::{CurveError, PrecompileFault};
use thiserror::Error;

/// Errors that can occur while verifying a proof.
///
/// A proof that is well-formed but simply wrong is *not* an error: verification returns
/// `Ok(false)` for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifierError {
    /// A public input is at or above the scalar-field modulus.
    #[error("verifier-gte-snark-scalar-field: public input {index} ({value}) is not below R")]
    GteSnarkScalarField {
        /// The position of the offending input.
        index: usize,
        /// The offending value.
        value: U256,
    },

    /// The number of public inputs does not match the verifying key.
    #[error("verifier-bad-input-length: expected {expected} public inputs, got {got}")]
    InputLengthMismatch {
        /// The number of inputs the verifying key was set up for.
        expected: usize,
        /// The number of inputs supplied.
        got: usize,
    },

    /// A curve primitive rejected its inputs.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// A verifier backend failed for a reason of its own.
    #[error("verifier backend failure: {0}")]
    Backend(String),
}

/// The result type for proof verification.
pub type VerifierResult<T> = Result<T, VerifierError>;

/// Errors that make a verifying key unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyingKeyError {
    /// `IC` must hold exactly one point per public input plus the constant term.
    #[error("verifying key has {got} IC points, expected {expected}")]
    IcLengthMismatch {
        /// `num_public_inputs + 1`.
        expected: usize,
        /// The number of IC points present.
        got: usize,
    },

    /// A point of the verifying key is not a valid group element.
    #[error("verifying key point {name} is invalid: {fault}")]
    InvalidPoint {
        /// The name of the offending point, e.g. `alpha` or `ic[2]`.
        name: String,
        /// Why the point was rejected.
        fault: PrecompileFault,
    },
}
