//! Per-approach view of coverage grouped by trial.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::coverage::{covered_edges, CoverageSet, HitCounts};
use crate::error::{ScoreError, ScoreResult};

/// Placeholder name used until a campaign attaches the approach's real name.
pub(crate) const UNNAMED_APPROACH: &str = "<unnamed>";

/// Immutable aggregate over one approach's trials.
///
/// The union and intersection of all trial coverage sets are computed once at
/// construction. Two values are equal iff their trial-to-coverage mappings are
/// equal; derived sets take no part in the comparison.
#[derive(Debug, Clone)]
pub struct ApproachData<T, E> {
    edges_by_trial: BTreeMap<T, CoverageSet<E>>,
    edges_union: CoverageSet<E>,
    edges_intersection: CoverageSet<E>,
}

impl<T, E> ApproachData<T, E>
where
    T: Ord + Clone + Display,
    E: Ord + Clone,
{
    /// Build from already-extracted coverage collections.
    ///
    /// Rejects an empty mapping (`EmptyApproach`) and any trial whose
    /// collection is empty (`EmptyTrial`).
    pub fn new<I, C>(trials: I) -> ScoreResult<Self>
    where
        I: IntoIterator<Item = (T, C)>,
        C: IntoIterator<Item = E>,
    {
        let mut edges_by_trial = BTreeMap::new();
        for (trial, edges) in trials {
            let edges: CoverageSet<E> = edges.into_iter().collect();
            if edges.is_empty() {
                return Err(ScoreError::EmptyTrial { trial: trial.to_string() });
            }
            edges_by_trial.insert(trial, edges);
        }
        Self::from_trial_sets(edges_by_trial)
    }

    /// Build from raw hit counts, as read from coverage files.
    ///
    /// Trials whose recorded edges all have a zero count are kept as empty
    /// coverage sets instead of being rejected; relscore weights them out and
    /// relcov treats them as reproducing nothing. An empty mapping is still an
    /// `EmptyApproach` error.
    pub fn from_hit_counts<I>(trials: I) -> ScoreResult<Self>
    where
        I: IntoIterator<Item = (T, HitCounts<E>)>,
    {
        let edges_by_trial =
            trials.into_iter().map(|(trial, counts)| (trial, covered_edges(&counts))).collect();
        Self::from_trial_sets(edges_by_trial)
    }
}

impl<T, E> ApproachData<T, E>
where
    T: Ord + Clone,
    E: Ord + Clone,
{
    fn from_trial_sets(edges_by_trial: BTreeMap<T, CoverageSet<E>>) -> ScoreResult<Self> {
        let mut sets = edges_by_trial.values();
        let first = sets
            .next()
            .ok_or_else(|| ScoreError::EmptyApproach { approach: UNNAMED_APPROACH.to_string() })?;

        let mut edges_union = first.clone();
        let mut edges_intersection = first.clone();
        for edges in sets {
            edges_union.extend(edges.iter().cloned());
            edges_intersection.retain(|edge| edges.contains(edge));
        }

        Ok(Self { edges_by_trial, edges_union, edges_intersection })
    }

    /// Union of the coverage of every trial.
    pub fn edges_union(&self) -> &CoverageSet<E> {
        &self.edges_union
    }

    /// Edges covered by every trial. Empty when trials are disjoint.
    pub fn edges_intersection(&self) -> &CoverageSet<E> {
        &self.edges_intersection
    }

    /// Read-only view: trial identifier to its coverage set.
    pub fn edges_by_trial(&self) -> &BTreeMap<T, CoverageSet<E>> {
        &self.edges_by_trial
    }

    pub fn trial_count(&self) -> usize {
        self.edges_by_trial.len()
    }

    /// Number of trials that covered at least one edge.
    pub fn nonempty_trial_count(&self) -> usize {
        self.edges_by_trial.values().filter(|edges| !edges.is_empty()).count()
    }

    /// Number of trials that covered `edge`.
    pub fn trials_hitting(&self, edge: &E) -> usize {
        self.edges_by_trial.values().filter(|edges| edges.contains(edge)).count()
    }
}

impl<T: PartialEq, E: PartialEq> PartialEq for ApproachData<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.edges_by_trial == other.edges_by_trial
    }
}

impl<T: Eq, E: Eq> Eq for ApproachData<T, E> {}
