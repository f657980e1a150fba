//! Errors raised by the Settlement State Machine.

use alloy_primitives::Address;
use rollup_bridge_da::DaError;
use rollup_bridge_primitives::types::DaId;
use rollup_bridge_verifier::VerifierError;
use thiserror::Error;

/// Errors that can occur while processing a settlement or administrative operation.
///
/// Every error aborts the operation without touching the state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementError {
    /// The verifier reference is missing or registered under the zero address.
    #[error("InvalidVerifier: verifier is missing or has the zero address")]
    InvalidVerifier,

    /// The owner would become the zero address.
    #[error("InvalidOwner: owner cannot be the zero address")]
    InvalidOwner,

    /// An administrative operation was called by someone other than the owner.
    #[error("NotOwner: {caller} is not the owner")]
    NotOwner {
        /// The caller.
        caller: Address,
    },

    /// A batch was submitted by someone other than the designated sequencer.
    #[error("NotSequencer: {caller} is not the sequencer")]
    NotSequencer {
        /// The caller.
        caller: Address,
    },

    /// No enabled DA provider is registered under the id.
    #[error("DAProviderNotEnabled: no enabled provider for DA id {0}")]
    DaProviderNotEnabled(DaId),

    /// The DA id is enabled for a different provider, which must be disabled first.
    #[error("DAProviderAlreadySet: DA id {da_id} is enabled for {current}")]
    DaProviderAlreadySet {
        /// The DA id.
        da_id: DaId,
        /// The address of the currently enabled provider.
        current: Address,
    },

    /// The DA provider is registered under the zero address.
    #[error("InvalidDAProvider: provider cannot have the zero address")]
    InvalidDaProvider,

    /// The submitted new root is zero.
    #[error("InvalidNewRoot: new root cannot be zero")]
    InvalidNewRoot,

    /// The verifier rejected the proof.
    #[error("InvalidProof: proof was rejected by the verifier")]
    InvalidProof,

    /// Every batch id has been used.
    #[error("BatchIdExhausted: no batch id left")]
    BatchIdExhausted,

    /// The verifier failed.
    #[error(transparent)]
    Verifier(#[from] VerifierError),

    /// The DA provider failed.
    #[error(transparent)]
    Da(#[from] DaError),
}

/// The result type for settlement operations.
pub type SettlementResult<T> = Result<T, SettlementError>;
