//! This crate implements the batch settlement state machine of the bridge.
//!
//! The state machine owns the canonical state root and the batch counter. It gates who may submit
//! a batch, resolves the DA provider a batch is bound to, invokes the proof verifier and finally
//! advances the root. Every operation is split into a read-only planning step, which performs all
//! checks and sub-calls, and an infallible application step, so that a failed submission never
//! leaves a trace in the state.

pub mod settlement;
pub mod shared;
pub mod state_machine;

#[cfg(test)]
pub(crate) mod testing;
