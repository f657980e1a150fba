//! Errors for the shared primitives.

use thiserror::Error;

/// Error while parsing a primitive from its serialized representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The string is neither a decimal nor a `0x`-prefixed hexadecimal 256-bit integer.
    #[error("invalid 256-bit integer: {0}")]
    InvalidInteger(String),

    /// The tag does not name a DA mode.
    #[error("invalid DA mode tag: {0}")]
    InvalidDaMode(u8),
}
