//! Field-membership checks and the reduction of 256-bit values into the scalar field.

use alloy_primitives::{B256, U256};

use crate::constants::{PRIME_Q, SNARK_SCALAR_FIELD};

/// Returns `true` if `value` is a canonical element of the base field, i.e. `value < Q`.
pub fn is_in_base_field(value: &U256) -> bool {
    *value < PRIME_Q
}

/// Returns `true` if `value` is a canonical element of the scalar field, i.e. `value < R`.
pub fn is_in_scalar_field(value: &U256) -> bool {
    *value < SNARK_SCALAR_FIELD
}

/// Reduces an arbitrary 256-bit value modulo the scalar-field prime `R`.
pub fn reduce_to_scalar_field(value: U256) -> U256 {
    value % SNARK_SCALAR_FIELD
}

/// Interprets a 32-byte value as a big-endian integer and reduces it into the scalar field.
///
/// This is how roots and DA commitments become circuit inputs.
pub fn bytes32_to_scalar(value: B256) -> U256 {
    reduce_to_scalar_field(U256::from_be_bytes(value.0))
}
