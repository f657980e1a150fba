//! The four curve primitives used by the proof verifier.

use alloy_primitives::U256;
use ark_bn254::Bn254;
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::One;
use rollup_bridge_primitives::{
    constants::PRIME_Q,
    proof::{G1Point, G2Point},
};
use tracing::trace;

use crate::{
    codec::{decode_g1, decode_g2, encode_g1},
    errors::{CurveError, CurveResult},
};

/// Negates a G1 point.
///
/// The identity maps to itself; any other point `(x, y)` maps to `(x, Q - y)`, reduced so that
/// `y = 0` maps to `0`. This is pure arithmetic: curve membership is *not* checked, so
/// `(0, y)` with `y != 0` maps to `(0, Q - y)` even though it is not a curve point.
pub fn negate(point: &G1Point) -> G1Point {
    if point.is_identity() {
        return G1Point::IDENTITY;
    }

    let y = (PRIME_Q - point.y % PRIME_Q) % PRIME_Q;
    G1Point::new(point.x, y)
}

/// Adds two G1 points.
pub fn add(lhs: &G1Point, rhs: &G1Point) -> CurveResult<G1Point> {
    let lhs_affine = decode_g1(lhs).map_err(CurveError::PairingAddFailed)?;
    let rhs_affine = decode_g1(rhs).map_err(CurveError::PairingAddFailed)?;

    let sum = (lhs_affine.into_group() + rhs_affine.into_group()).into_affine();
    trace!(?lhs, ?rhs, "added G1 points");

    Ok(encode_g1(&sum))
}

/// Multiplies a G1 point by a scalar.
///
/// The scalar is used as a full 256-bit integer; it does not need to be reduced modulo the group
/// order.
pub fn scalar_mul(point: &G1Point, scalar: &U256) -> CurveResult<G1Point> {
    let affine = decode_g1(point).map_err(CurveError::PairingMulFailed)?;

    let product = affine.mul_bigint(scalar.as_limbs()).into_affine();
    trace!(?point, %scalar, "multiplied G1 point");

    Ok(encode_g1(&product))
}

/// Checks whether the product of pairings `e(P_1, Q_1) * ... * e(P_n, Q_n)` is the identity of
/// the target group.
///
/// Returns `Ok(false)` for well-formed inputs whose product is not the identity. Malformed inputs
/// are an error, *not* a `false` result. An empty input trivially succeeds.
pub fn pairing_check(pairs: &[(G1Point, G2Point)]) -> CurveResult<bool> {
    let mut g1s = Vec::with_capacity(pairs.len());
    let mut g2s = Vec::with_capacity(pairs.len());

    for (p, q) in pairs {
        g1s.push(decode_g1(p).map_err(CurveError::PairingOpcodeFailed)?);
        g2s.push(decode_g2(q).map_err(CurveError::PairingOpcodeFailed)?);
    }

    if g1s.is_empty() {
        return Ok(true);
    }

    let product = Bn254::multi_pairing(g1s, g2s);
    let accepted = product.0.is_one();
    trace!(num_pairs = pairs.len(), %accepted, "evaluated pairing check");

    Ok(accepted)
}
