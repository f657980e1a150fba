//! Default values for the settlement parameters.

use rollup_bridge_primitives::constants::NUM_PUBLIC_INPUTS;

/// Default number of public inputs of the settlement circuit.
pub(crate) const DEFAULT_NUM_PUBLIC_INPUTS: usize = NUM_PUBLIC_INPUTS;

pub(crate) const fn num_public_inputs() -> usize {
    DEFAULT_NUM_PUBLIC_INPUTS
}
