//! This crate contains the consensus-critical parameters of the settlement core: the genesis
//! state root and the verifying key that every batch proof is checked against.
//!
//! The parameters are loaded once at start-up and frozen for the lifetime of the process.

pub mod default;
pub mod errors;
pub mod prelude;
pub mod settlement;
