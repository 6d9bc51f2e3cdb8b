//! Remote ranking and eligibility filtering.

/// Position of an eligible remote in the network's collection, with the
/// score value it was ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedRemote {
    /// Index into the network's remote collection.
    pub index: usize,
    /// Score value snapshotted for this decision cycle.
    pub value: u64,
}

/// Rank remotes by score value, highest first, dropping every remote whose
/// value is not strictly greater than `min_score`.
///
/// `values[i]` is the snapshot of remote `i`. The sort is stable, so equal
/// values keep their collection order and repeated calls on the same
/// snapshot give the same ranking.
pub fn rank_eligible(values: &[u64], min_score: u64) -> Vec<RankedRemote> {
    let mut ranked: Vec<RankedRemote> = values
        .iter()
        .enumerate()
        .filter(|(_, value)| **value > min_score)
        .map(|(index, value)| RankedRemote {
            index,
            value: *value,
        })
        .collect();
    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked
}
