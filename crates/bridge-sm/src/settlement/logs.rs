//! The records emitted by the Settlement State Machine.

use alloy_primitives::{Address, B256};
use rollup_bridge_primitives::{
    da::DaMode,
    types::{BatchId, DaId},
};
use serde::{Deserialize, Serialize};

/// The finalization record of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFinalized {
    /// The id the batch was finalized under.
    pub batch_id: BatchId,

    /// The DA commitment of the batch.
    pub commitment: B256,

    /// The state root before the batch.
    pub old_root: B256,

    /// The state root after the batch.
    pub new_root: B256,

    /// The DA mode of the commitment.
    pub da_mode: DaMode,
}

/// A record emitted by a successful operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BridgeLog {
    /// A batch was finalized.
    BatchFinalized(BatchFinalized),

    /// The sequencer was changed.
    SequencerUpdated {
        /// The new sequencer, zero for permissionless submission.
        sequencer: Address,
    },

    /// A DA provider was registered, enabled or disabled.
    DaProviderSet {
        /// The DA id.
        da_id: DaId,
        /// The provider address.
        provider: Address,
        /// Whether the provider is enabled.
        enabled: bool,
    },

    /// Ownership was transferred.
    OwnershipTransferred {
        /// The previous owner.
        previous_owner: Address,
        /// The new owner.
        new_owner: Address,
    },
}

#[cfg(test)]
mod tests {
    use alloy_primitives::keccak256;
    use serde_json::json;

    use super::*;

    #[test]
    fn finalization_record_json() {
        let log = BridgeLog::BatchFinalized(BatchFinalized {
            batch_id: 1,
            commitment: keccak256("hello-batch"),
            old_root: B256::repeat_byte(0x11),
            new_root: keccak256("new-root"),
            da_mode: DaMode::Calldata,
        });

        let value = serde_json::to_value(&log).unwrap();
        assert_eq!(value["event"], "batch_finalized");
        assert_eq!(value["batch_id"], 1);
        assert_eq!(value["da_mode"], 0);
        assert_eq!(value["old_root"], json!(B256::repeat_byte(0x11)));

        let parsed: BridgeLog = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, log);
    }

    #[test]
    fn blob_mode_is_tagged_one() {
        let log = BridgeLog::BatchFinalized(BatchFinalized {
            batch_id: 2,
            commitment: B256::repeat_byte(0x01),
            old_root: B256::ZERO,
            new_root: B256::repeat_byte(0x22),
            da_mode: DaMode::Blob,
        });

        let line = serde_json::to_string(&log).unwrap();
        assert!(line.contains(r#""da_mode":1"#));
    }

    #[test]
    fn admin_records_json() {
        let log = BridgeLog::DaProviderSet {
            da_id: 1,
            provider: Address::repeat_byte(0xb1),
            enabled: false,
        };

        let value = serde_json::to_value(&log).unwrap();
        assert_eq!(value["event"], "da_provider_set");
        assert_eq!(value["da_id"], 1);
        assert_eq!(value["enabled"], false);
    }
}
