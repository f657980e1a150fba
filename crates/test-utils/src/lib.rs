//! This crate provides test doubles and fixtures for the settlement core.
//!
//! It contains a programmable verifier, a blob DA provider whose blob hashes can be injected, a
//! real Groth16 circuit for end-to-end verification tests and a handful of `proptest` strategies.

pub mod fixtures;
pub mod groth16;
pub mod mock_da;
pub mod mock_verifier;
pub mod strategies;

pub mod prelude {
    //! Re-exports of the most commonly used test utilities.

    pub use crate::{
        fixtures::*,
        groth16::TransitionProver,
        mock_da::{mock_blob_da, MockBlobDa, MockBlobHashes},
        mock_verifier::{MismatchPolicy, MockVerifier},
    };
}
