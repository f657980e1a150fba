//! BN254 curve arithmetic with alt_bn128 precompile semantics.
//!
//! The settlement verifier only ever needs four primitives: G1 negation, G1 addition, G1 scalar
//! multiplication and a multi-pairing check. Points arrive as raw 256-bit coordinates and are
//! decoded into arkworks types here, so every range and curve-membership check lives in one place.
//!
//! Failures are reported per primitive ([`CurveError`]) so that callers can tell "the primitive
//! rejected its input" apart from "the pairing check evaluated to false".

pub mod codec;
pub mod errors;
pub mod ops;

pub use errors::{CurveError, PrecompileFault};
pub use ops::{add, negate, pairing_check, scalar_mul};
