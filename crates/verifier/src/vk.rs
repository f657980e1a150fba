//! The Groth16 verifying key.

use rollup_bridge_curve::{
    codec::{decode_g1, decode_g2},
    PrecompileFault,
};
use rollup_bridge_primitives::proof::{G1Point, G2Point};
use serde::{Deserialize, Serialize};

use crate::errors::VerifyingKeyError;

/// The trusted-setup constants of a Groth16 circuit.
///
/// `ic` holds the constant term followed by one point per public input. A key is frozen once
/// loaded; nothing in this workspace mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKey {
    /// `[alpha]_1`.
    pub alpha: G1Point,

    /// `[beta]_2`.
    pub beta: G2Point,

    /// `[gamma]_2`.
    pub gamma: G2Point,

    /// `[delta]_2`.
    pub delta: G2Point,

    /// The input commitment bases.
    pub ic: Vec<G1Point>,
}

impl VerifyingKey {
    /// The number of public inputs this key accepts.
    pub fn num_public_inputs(&self) -> usize {
        self.ic.len().saturating_sub(1)
    }

    /// Checks that the key has exactly `expected_inputs + 1` IC points and that every point is a
    /// valid group element.
    pub fn validate(&self, expected_inputs: usize) -> Result<(), VerifyingKeyError> {
        let expected = expected_inputs + 1;
        if self.ic.len() != expected {
            return Err(VerifyingKeyError::IcLengthMismatch {
                expected,
                got: self.ic.len(),
            });
        }

        let invalid = |name: String| {
            move |fault: PrecompileFault| VerifyingKeyError::InvalidPoint { name, fault }
        };

        decode_g1(&self.alpha)
            .map(drop)
            .map_err(invalid("alpha".to_string()))?;
        for (name, point) in [
            ("beta", &self.beta),
            ("gamma", &self.gamma),
            ("delta", &self.delta),
        ] {
            decode_g2(point)
                .map(drop)
                .map_err(invalid(name.to_string()))?;
        }
        for (i, point) in self.ic.iter().enumerate() {
            decode_g1(point)
                .map(drop)
                .map_err(invalid(format!("ic[{i}]")))?;
        }

        Ok(())
    }
}
