//! `proptest` strategies for the settlement core's value types.

use alloy_primitives::{B256, U256};
use proptest::prelude::*;

/// Generates an arbitrary 32-byte value.
pub fn arb_b256() -> impl Strategy<Value = B256> {
    any::<[u8; 32]>().prop_map(B256::from)
}

/// Generates an arbitrary non-zero 32-byte value.
pub fn arb_nonzero_b256() -> impl Strategy<Value = B256> {
    arb_b256().prop_filter("value must be non-zero", |value| !value.is_zero())
}

/// Generates an arbitrary 256-bit integer.
pub fn arb_u256() -> impl Strategy<Value = U256> {
    any::<[u8; 32]>().prop_map(U256::from_be_bytes)
}

/// Generates a batch payload of up to 256 bytes.
pub fn arb_payload() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..=256)
}
