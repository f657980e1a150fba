//! The Settlement State Machine.
//!
//! Accepts batches of state transitions, binds each to a DA commitment, verifies its proof and
//! atomically advances the canonical state root.

pub mod errors;
pub mod events;
pub mod logs;
pub mod machine;
pub mod state;
pub mod transitions;

#[cfg(test)]
mod tests;

pub use errors::{SettlementError, SettlementResult};
pub use events::SettlementEvent;
pub use logs::{BatchFinalized, BridgeLog};
pub use machine::{SettlementCtx, SettlementOutput, SettlementSM};
pub use state::{BatchRecord, BridgeState, DaEntry};
pub use transitions::{public_inputs, DaSelector, PendingBatch, SettlementTransition};
