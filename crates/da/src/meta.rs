//! The blob metadata codec.
//!
//! The canonical encoding is the 64-byte ABI tuple `(bytes32, uint8)`: the expected versioned
//! hash followed by the blob index left-padded to a full word. The 33-byte packed form
//! `bytes32 || uint8` is accepted on decode as well.

use alloy_primitives::B256;

use crate::errors::MetadataError;

/// Length of the canonical ABI encoding.
pub const ENCODED_LEN: usize = 64;

/// Length of the packed encoding.
pub const PACKED_LEN: usize = 33;

/// Blob metadata: which blob carries the batch, and the versioned hash it must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlobMeta {
    /// The versioned hash the attached blob must have.
    pub expected_versioned_hash: B256,

    /// The index of the blob within the transaction.
    pub blob_index: u8,
}

impl BlobMeta {
    /// Creates new metadata.
    pub const fn new(expected_versioned_hash: B256, blob_index: u8) -> Self {
        Self {
            expected_versioned_hash,
            blob_index,
        }
    }

    /// Encodes the metadata in the canonical 64-byte form.
    pub fn encode(&self) -> [u8; ENCODED_LEN] {
        let mut out = [0u8; ENCODED_LEN];
        out[..32].copy_from_slice(self.expected_versioned_hash.as_slice());
        out[ENCODED_LEN - 1] = self.blob_index;

        out
    }

    /// Encodes the metadata in the packed 33-byte form.
    pub fn encode_packed(&self) -> [u8; PACKED_LEN] {
        let mut out = [0u8; PACKED_LEN];
        out[..32].copy_from_slice(self.expected_versioned_hash.as_slice());
        out[32] = self.blob_index;

        out
    }

    /// Decodes metadata from either supported encoding.
    pub fn decode(bytes: &[u8]) -> Result<Self, MetadataError> {
        let blob_index = match bytes.len() {
            ENCODED_LEN => {
                let (padding, index) = bytes[32..].split_at(31);
                if padding.iter().any(|b| *b != 0) {
                    return Err(MetadataError::IndexOutOfRange);
                }
                index[0]
            }
            PACKED_LEN => bytes[32],
            other => return Err(MetadataError::BadLength(other)),
        };

        Ok(Self {
            expected_versioned_hash: B256::from_slice(&bytes[..32]),
            blob_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn canonical_layout() {
        let meta = BlobMeta::new(B256::repeat_byte(0x11), 7);
        let encoded = meta.encode();

        assert_eq!(&encoded[..32], &[0x11; 32]);
        assert_eq!(&encoded[32..63], &[0u8; 31]);
        assert_eq!(encoded[63], 7);
    }

    #[test]
    fn packed_form_is_accepted() {
        let meta = BlobMeta::new(B256::repeat_byte(0x22), 3);

        assert_eq!(BlobMeta::decode(&meta.encode_packed()), Ok(meta));
    }

    #[test]
    fn rejects_other_lengths() {
        assert_eq!(BlobMeta::decode(&[]), Err(MetadataError::BadLength(0)));
        assert_eq!(
            BlobMeta::decode(&[0u8; 32]),
            Err(MetadataError::BadLength(32))
        );
        assert_eq!(
            BlobMeta::decode(&[0u8; 65]),
            Err(MetadataError::BadLength(65))
        );
    }

    #[test]
    fn rejects_dirty_index_padding() {
        let mut encoded = BlobMeta::new(B256::repeat_byte(0x33), 1).encode();
        encoded[62] = 1;

        assert_eq!(
            BlobMeta::decode(&encoded),
            Err(MetadataError::IndexOutOfRange)
        );
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(hash in any::<[u8; 32]>(), index in any::<u8>()) {
            let meta = BlobMeta::new(B256::from(hash), index);

            prop_assert_eq!(BlobMeta::decode(&meta.encode()), Ok(meta));
        }
    }
}
