//! The curve-point and proof shapes accepted by the settlement core.
//!
//! Coordinates are kept as raw 256-bit integers exactly as they arrive from the submitter. They
//! are only interpreted as field elements by the curve layer, which is where range and curve
//! membership checks happen.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::serde_utils::FieldString;

/// A point of the BN254 G1 group in affine coordinates.
///
/// `(0, 0)` encodes the point at infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[FieldString; 2]", into = "[FieldString; 2]")]
pub struct G1Point {
    /// The x coordinate.
    pub x: U256,
    /// The y coordinate.
    pub y: U256,
}

impl G1Point {
    /// The point at infinity.
    pub const IDENTITY: Self = Self {
        x: U256::ZERO,
        y: U256::ZERO,
    };

    /// Creates a new point from its coordinates.
    pub const fn new(x: U256, y: U256) -> Self {
        Self { x, y }
    }

    /// Returns `true` if this is the `(0, 0)` encoding of the point at infinity.
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl From<[FieldString; 2]> for G1Point {
    fn from([x, y]: [FieldString; 2]) -> Self {
        Self::new(x.0, y.0)
    }
}

impl From<G1Point> for [FieldString; 2] {
    fn from(p: G1Point) -> Self {
        [FieldString(p.x), FieldString(p.y)]
    }
}

/// A point of the BN254 G2 group in affine coordinates.
///
/// Each coordinate is an element of the quadratic extension `Fq2 = Fq[u] / (u^2 + 1)` stored in
/// precompile order: `[imaginary, real]`. The all-zero point encodes the point at infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[[FieldString; 2]; 2]", into = "[[FieldString; 2]; 2]")]
pub struct G2Point {
    /// The x coordinate as `[imaginary, real]`.
    pub x: [U256; 2],
    /// The y coordinate as `[imaginary, real]`.
    pub y: [U256; 2],
}

impl G2Point {
    /// The point at infinity.
    pub const IDENTITY: Self = Self {
        x: [U256::ZERO; 2],
        y: [U256::ZERO; 2],
    };

    /// Creates a new point from its coordinates, each given as `[imaginary, real]`.
    pub const fn new(x: [U256; 2], y: [U256; 2]) -> Self {
        Self { x, y }
    }

    /// Returns `true` if this is the all-zero encoding of the point at infinity.
    pub fn is_identity(&self) -> bool {
        self.x.iter().chain(self.y.iter()).all(U256::is_zero)
    }
}

impl From<[[FieldString; 2]; 2]> for G2Point {
    fn from([x, y]: [[FieldString; 2]; 2]) -> Self {
        Self::new([x[0].0, x[1].0], [y[0].0, y[1].0])
    }
}

impl From<G2Point> for [[FieldString; 2]; 2] {
    fn from(p: G2Point) -> Self {
        [p.x.map(FieldString), p.y.map(FieldString)]
    }
}

/// A Groth16-shaped proof: `A` in G1, `B` in G2 and `C` in G1.
///
/// A proof only lives for the duration of the verification call that consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Proof {
    /// The `A` element.
    pub a: G1Point,
    /// The `B` element.
    pub b: G2Point,
    /// The `C` element.
    pub c: G1Point,
}

impl Proof {
    /// Creates a new proof from its three elements.
    pub const fn new(a: G1Point, b: G2Point, c: G1Point) -> Self {
        Self { a, b, c }
    }

    /// The all-zero proof.
    ///
    /// This never satisfies a real verifying key but is handy when the verifier is a stand-in.
    pub const fn zero() -> Self {
        Self {
            a: G1Point::IDENTITY,
            b: G2Point::IDENTITY,
            c: G1Point::IDENTITY,
        }
    }
}
