//! Constants that are integral to the settlement core.
//!
//! The two BN254 moduli govern every curve-point coordinate and every circuit scalar. Changing
//! any of these values changes the statement that the settlement proof attests to.

use alloy_primitives::U256;

use crate::types::{BatchId, DaId};

/// The BN254 base-field prime `Q`.
///
/// Every G1/G2 coordinate must lie in `[0, Q)`.
pub const PRIME_Q: U256 = U256::from_limbs([
    0x3c20_8c16_d87c_fd47,
    0x9781_6a91_6871_ca8d,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
]);

/// The BN254 scalar-field prime `R`.
///
/// Every public input handed to the verifier must lie in `[0, R)`.
pub const SNARK_SCALAR_FIELD: U256 = U256::from_limbs([
    0x43e1_f593_f000_0001,
    0x2833_e848_79b9_7091,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
]);

/// Number of public inputs of the settlement circuit: `[old_root, new_root, da_commitment]`.
pub const NUM_PUBLIC_INPUTS: usize = 3;

/// The id of the first batch that can be finalized.
pub const FIRST_BATCH_ID: BatchId = 1;

/// Conventional registry id for the calldata DA provider.
pub const CALLDATA_DA_ID: DaId = 0;

/// Conventional registry id for the blob DA provider.
pub const BLOB_DA_ID: DaId = 1;
