//! Well-known addresses and values used across tests.

use alloy_primitives::{Address, B256};

/// The owner of the bridge under test.
pub const OWNER: Address = Address::repeat_byte(0x0a);

/// The designated sequencer.
pub const SEQUENCER: Address = Address::repeat_byte(0x5e);

/// An account without any role.
pub const STRANGER: Address = Address::repeat_byte(0xee);

/// The address the verifier under test is registered under.
pub const VERIFIER: Address = Address::repeat_byte(0x7e);

/// The address of the calldata DA provider.
pub const CALLDATA_DA: Address = Address::repeat_byte(0xca);

/// The address of the blob DA provider.
pub const BLOB_DA: Address = Address::repeat_byte(0xb1);

/// The genesis state root used by most tests.
pub const GENESIS_ROOT: B256 = B256::repeat_byte(0x11);

/// Creates a state root distinct for every `tag`.
pub fn root(tag: u8) -> B256 {
    let mut value = B256::repeat_byte(tag);
    value.0[0] = 0xf0;
    value
}

/// Creates a well-formed (version-prefixed) blob versioned hash distinct for every `tag`.
pub fn versioned_hash(tag: u8) -> B256 {
    let mut value = B256::repeat_byte(tag);
    value.0[0] = 0x01;
    value
}
