//! Ranking helpers built on prefix length and ring distance.

use std::cmp::Ordering;

use crate::domain::{common_prefix_len, diff, NodeId, NodeIdError};

/// Sort identifiers by circular distance from `target` (closest first).
///
/// Ties, which occur for the two points equidistant on either side of
/// `target`, are broken by identifier order so the result is deterministic.
pub fn sort_by_distance(ids: &[NodeId], target: &NodeId) -> Result<Vec<NodeId>, NodeIdError> {
    let mut keyed = ids
        .iter()
        .map(|id| Ok((diff(id, target)?, id.clone())))
        .collect::<Result<Vec<_>, NodeIdError>>()?;

    keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    Ok(keyed.into_iter().map(|(_, id)| id).collect())
}

/// Up to `k` identifiers closest to `target`, closest first.
pub fn find_k_closest(
    ids: &[NodeId],
    target: &NodeId,
    k: usize,
) -> Result<Vec<NodeId>, NodeIdError> {
    let mut sorted = sort_by_distance(ids, target)?;
    sorted.truncate(k);
    Ok(sorted)
}

/// Candidate sharing the longest prefix with `key`.
///
/// Ties are broken by smaller circular distance. Candidates whose length
/// differs from `key` can still win on prefix length but lose every
/// distance tie-break.
pub fn best_next_hop<'a>(candidates: &'a [NodeId], key: &NodeId) -> Option<&'a NodeId> {
    candidates.iter().max_by(|a, b| {
        common_prefix_len(a, key)
            .cmp(&common_prefix_len(b, key))
            .then_with(|| closer_ordering(a, b, key))
    })
}

/// `Greater` when `a` is closer to `key` than `b`.
fn closer_ordering(a: &NodeId, b: &NodeId, key: &NodeId) -> Ordering {
    match (diff(a, key).ok(), diff(b, key).ok()) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
