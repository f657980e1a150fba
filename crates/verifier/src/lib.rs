//! Verification of Groth16-shaped settlement proofs over BN254.
//!
//! The settlement layer only talks to a [`ProofVerifier`]; [`Groth16Verifier`] is the production
//! implementation that folds a frozen [`VerifyingKey`] and the public inputs into the pairing
//! equation.

pub mod errors;
pub mod groth16;
pub mod traits;
pub mod vk;

pub use errors::{VerifierError, VerifierResult, VerifyingKeyError};
pub use groth16::Groth16Verifier;
pub use traits::ProofVerifier;
pub use vk::VerifyingKey;
