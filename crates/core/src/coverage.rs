//! Coverage sets and their extraction from raw hit counts.

use std::collections::{BTreeMap, BTreeSet};

/// Edges reached by one trial.
///
/// Ordered so every derived value and every rendered table is deterministic.
pub type CoverageSet<E> = BTreeSet<E>;

/// Raw `edge -> hit count` mapping for one trial, as read from disk.
pub type HitCounts<E> = BTreeMap<E, u64>;

/// Keep only the edges whose hit count is strictly positive.
///
/// This is the only place hit counts are consulted; everything downstream
/// works on sets.
pub fn covered_edges<E: Ord + Clone>(counts: &HitCounts<E>) -> CoverageSet<E> {
    counts.iter().filter(|(_, count)| **count > 0).map(|(edge, _)| edge.clone()).collect()
}
