//! The calldata DA provider.

use alloy_primitives::{keccak256, Address, B256};
use rollup_bridge_primitives::{
    da::{DaCommitment, DaMode},
    types::TxContext,
};
use tracing::trace;

use crate::{
    errors::{DaError, DaResult},
    traits::DaProvider,
};

/// Commits to a batch posted inline by the keccak-256 hash of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalldataDa {
    address: Address,
}

impl CalldataDa {
    /// Creates a calldata provider registered under `address`.
    pub const fn new(address: Address) -> Self {
        Self { address }
    }

    /// Recomputes the commitment of `payload` and compares it with `expected`.
    pub fn verify_payload(payload: &[u8], expected: B256) -> bool {
        keccak256(payload) == expected
    }
}

impl DaProvider for CalldataDa {
    fn address(&self) -> Address {
        self.address
    }

    fn mode(&self) -> DaMode {
        DaMode::Calldata
    }

    fn compute_commitment(
        &self,
        _ctx: &TxContext,
        payload: &[u8],
        _meta: &[u8],
    ) -> DaResult<DaCommitment> {
        let value = keccak256(payload);
        trace!(len = payload.len(), %value, "computed calldata commitment");

        Ok(DaCommitment::new(value, DaMode::Calldata))
    }

    // The commitment is derived from the payload in the same call, so only the zero value is
    // rejected here.
    fn validate_da(&self, _ctx: &TxContext, expected: B256, _meta: &[u8]) -> DaResult<()> {
        if expected.is_zero() {
            return Err(DaError::InvalidCommitment);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::b256;

    use super::*;

    const PROVIDER: Address = Address::repeat_byte(0xca);

    #[test]
    fn commitment_is_payload_hash() {
        let da = CalldataDa::new(PROVIDER);
        let ctx = TxContext::new(Address::repeat_byte(1));
        let payload = b"hello-batch";

        let commitment = da
            .compute_commitment(&ctx, payload, &[0xff; 7])
            .expect("calldata never fails");

        assert_eq!(commitment.value(), keccak256(payload));
        assert_eq!(commitment.mode(), DaMode::Calldata);
        assert!(CalldataDa::verify_payload(payload, commitment.value()));
        assert!(!CalldataDa::verify_payload(b"other", commitment.value()));
    }

    #[test]
    fn empty_payload_hashes_to_the_empty_keccak() {
        let da = CalldataDa::new(PROVIDER);
        let ctx = TxContext::default();

        let commitment = da.compute_commitment(&ctx, &[], &[]).unwrap();
        assert_eq!(
            commitment.value(),
            b256!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
    }

    #[test]
    fn validation_rejects_only_zero() {
        let da = CalldataDa::new(PROVIDER);
        let ctx = TxContext::default();

        assert_eq!(
            da.validate_da(&ctx, B256::ZERO, &[]),
            Err(DaError::InvalidCommitment)
        );
        assert!(da.validate_da(&ctx, B256::repeat_byte(9), &[]).is_ok());
    }
}
