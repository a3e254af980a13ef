//! Circular distance on the identifier ring.

use num_bigint::BigUint;
use tracing::debug;

use crate::domain::{NodeId, NodeIdError};

/// Shorter arc between `a` and `b` on the ring of size `R = 16^L`.
///
/// With `F = |V(a) - V(b)|`, the result is `min(F, R - F)`.
///
/// # Properties
/// - Symmetric: `diff(a, b) == diff(b, a)`
/// - `diff(a, a) == 0`
/// - `0 <= diff(a, b) <= R / 2`
///
/// # Errors
///
/// `InvalidLength` if `a` and `b` have different digit counts.
pub fn diff(a: &NodeId, b: &NodeId) -> Result<BigUint, NodeIdError> {
    if a.len() != b.len() {
        debug!(
            left = a.len(),
            right = b.len(),
            "Rejected distance between identifiers of different lengths"
        );
        return Err(NodeIdError::InvalidLength {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let va = a.to_biguint();
    let vb = b.to_biguint();
    let forward = if va >= vb { va - vb } else { vb - va };
    let backward = a.ring_size() - &forward;

    Ok(forward.min(backward))
}

/// True if `candidate` is strictly closer to `target` than `current`.
///
/// A leaf set uses this to decide whether a candidate should replace an
/// existing member.
pub fn is_closer(target: &NodeId, candidate: &NodeId, current: &NodeId) -> Result<bool, NodeIdError> {
    Ok(diff(target, candidate)? < diff(target, current)?)
}
