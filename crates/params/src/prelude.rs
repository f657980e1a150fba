//! Re-exports of the most commonly used parameter types.

pub use crate::{errors::ParamsError, settlement::BridgeParams};
