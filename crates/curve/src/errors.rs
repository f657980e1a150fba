//! Errors produced by the curve primitives.

use thiserror::Error;

/// The reason a point encoding was rejected by a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PrecompileFault {
    /// A coordinate is at or above the base-field modulus.
    #[error("coordinate is not below the base-field modulus")]
    CoordinateOutOfField,

    /// The coordinates are valid field elements but do not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotOnCurve,

    /// The G2 point is on the twist but outside the prime-order subgroup.
    #[error("point is not in the prime-order subgroup")]
    NotInSubgroup,
}

/// Errors that can occur while evaluating a curve primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// The point-addition primitive rejected its inputs.
    #[error("pairing-add-failed: {0}")]
    PairingAddFailed(PrecompileFault),

    /// The scalar-multiplication primitive rejected its inputs.
    #[error("pairing-mul-failed: {0}")]
    PairingMulFailed(PrecompileFault),

    /// The pairing primitive rejected one of its inputs.
    #[error("pairing-opcode-failed: {0}")]
    PairingOpcodeFailed(PrecompileFault),
}

/// The result type for curve primitives.
pub type CurveResult<T> = Result<T, CurveError>;
