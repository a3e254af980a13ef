//! Prefix matching for routing-table row and column selection.

use crate::domain::{digits_equal, NodeId, NodeIdDigit};

/// Length of the longest common leading-digit run of `a` and `b`.
///
/// Returns the index of the first differing digit, or the length of the
/// shorter identifier when one is a prefix of the other. A routing table
/// uses this as the row index for `b` relative to a local `a`.
pub fn common_prefix_len(a: &NodeId, b: &NodeId) -> usize {
    a.digits()
        .iter()
        .zip(b.digits())
        .position(|(&x, &y)| !digits_equal(x, y))
        .unwrap_or_else(|| a.len().min(b.len()))
}

/// First digit of `key` that `local` does not share.
///
/// This is the routing-table column for `key` in row
/// `common_prefix_len(local, key)`. `None` when `key` has no digit past the
/// shared prefix, e.g. when the identifiers are equal.
pub fn next_digit(local: &NodeId, key: &NodeId) -> Option<NodeIdDigit> {
    key.digit(common_prefix_len(local, key))
}
