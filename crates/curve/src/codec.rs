//! Conversions between the raw coordinate encoding and arkworks curve types.

use alloy_primitives::U256;
use ark_bn254::{Fq, Fq2, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use ark_ff::{BigInt, PrimeField};
use rollup_bridge_primitives::proof::{G1Point, G2Point};

use crate::errors::PrecompileFault;

/// Decodes a base-field element, rejecting non-canonical values (`>= Q`).
pub fn decode_fq(value: &U256) -> Result<Fq, PrecompileFault> {
    Fq::from_bigint(BigInt::new(*value.as_limbs())).ok_or(PrecompileFault::CoordinateOutOfField)
}

/// Encodes a base-field element as its canonical integer.
pub fn encode_fq(value: &Fq) -> U256 {
    U256::from_limbs(value.into_bigint().0)
}

/// Decodes a G1 point, checking that both coordinates are in the base field and that the point
/// lies on the curve.
///
/// G1 has cofactor one, so curve membership implies subgroup membership.
pub fn decode_g1(point: &G1Point) -> Result<G1Affine, PrecompileFault> {
    let x = decode_fq(&point.x)?;
    let y = decode_fq(&point.y)?;

    if point.is_identity() {
        return Ok(G1Affine::zero());
    }

    let affine = G1Affine::new_unchecked(x, y);
    if !affine.is_on_curve() {
        return Err(PrecompileFault::NotOnCurve);
    }

    Ok(affine)
}

/// Encodes a G1 point, mapping the point at infinity to `(0, 0)`.
pub fn encode_g1(point: &G1Affine) -> G1Point {
    if point.infinity {
        return G1Point::IDENTITY;
    }

    G1Point::new(encode_fq(&point.x), encode_fq(&point.y))
}

/// Decodes a G2 point whose coordinates are given as `[imaginary, real]`.
///
/// Unlike G1, the twist has a non-trivial cofactor, so the prime-order subgroup check is
/// required in addition to the curve equation.
pub fn decode_g2(point: &G2Point) -> Result<G2Affine, PrecompileFault> {
    let x = decode_fq2(&point.x)?;
    let y = decode_fq2(&point.y)?;

    if point.is_identity() {
        return Ok(G2Affine::zero());
    }

    let affine = G2Affine::new_unchecked(x, y);
    if !affine.is_on_curve() {
        return Err(PrecompileFault::NotOnCurve);
    }
    if !affine.is_in_correct_subgroup_assuming_on_curve() {
        return Err(PrecompileFault::NotInSubgroup);
    }

    Ok(affine)
}

/// Encodes a G2 point, mapping the point at infinity to the all-zero encoding.
pub fn encode_g2(point: &G2Affine) -> G2Point {
    if point.infinity {
        return G2Point::IDENTITY;
    }

    G2Point::new(encode_fq2(&point.x), encode_fq2(&point.y))
}

fn decode_fq2([imaginary, real]: &[U256; 2]) -> Result<Fq2, PrecompileFault> {
    Ok(Fq2::new(decode_fq(real)?, decode_fq(imaginary)?))
}

fn encode_fq2(value: &Fq2) -> [U256; 2] {
    [encode_fq(&value.c1), encode_fq(&value.c0)]
}

/// Returns the standard G1 generator `(1, 2)`.
pub fn g1_generator() -> G1Point {
    encode_g1(&G1Affine::generator())
}

/// Returns the standard G2 generator.
pub fn g2_generator() -> G2Point {
    encode_g2(&G2Affine::generator())
}
