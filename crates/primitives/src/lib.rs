//! This crate contains general types, constants and pure functions that need to be shared across
//! multiple crates of the settlement core.
//!
//! It is not intended to be used directly by end users, but rather to be used as a dependency by
//! other crates. Also note that this crate lies at the bottom of the crate-hierarchy in this
//! workspace i.e., it does not depend on any other crate in this workspace.

pub mod constants;
pub mod da;
pub mod errors;
pub mod field;
pub mod proof;
pub mod serde_utils;
pub mod types;

// Re-export the 32-byte value, address and 256-bit integer types for convenience.
pub use alloy_primitives::{Address, B256, U256};
