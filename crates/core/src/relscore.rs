//! relscore: campaign-wide contribution score.
//!
//! For every edge `e` observed anywhere in the campaign, `never_hit(e)` is the
//! number of approaches none of whose trials covered `e`. An approach earns
//! `never_hit(e) * hit_trials(a, e) / nonempty_trials(a)` for each edge, so
//! rare edges that are hit reliably dominate the score.

use std::collections::BTreeMap;

use crate::approach::ApproachData;

/// Per-edge rarity weights, shared by every approach's score computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRarity<E> {
    never_hit: BTreeMap<E, usize>,
}

impl<E: Ord + Clone> EdgeRarity<E> {
    /// Compute `never_hit(e)` for every edge in the union of all approaches.
    pub fn from_approaches<'a, T, I>(approaches: I) -> Self
    where
        T: Ord + Clone + 'a,
        E: 'a,
        I: IntoIterator<Item = &'a ApproachData<T, E>>,
    {
        let approaches: Vec<&ApproachData<T, E>> = approaches.into_iter().collect();

        let mut never_hit: BTreeMap<E, usize> = BTreeMap::new();
        for approach in &approaches {
            for edge in approach.edges_union() {
                never_hit.entry(edge.clone()).or_insert(0);
            }
        }
        for (edge, count) in never_hit.iter_mut() {
            *count = approaches
                .iter()
                .filter(|approach| !approach.edges_union().contains(edge))
                .count();
        }

        Self { never_hit }
    }

    /// Number of approaches that never covered `edge`; `None` for edges no
    /// approach ever observed.
    pub fn never_hit(&self, edge: &E) -> Option<usize> {
        self.never_hit.get(edge).copied()
    }

    /// Every edge observed in the campaign with its rarity weight.
    pub fn iter(&self) -> impl Iterator<Item = (&E, usize)> {
        self.never_hit.iter().map(|(edge, count)| (edge, *count))
    }

    pub fn edge_count(&self) -> usize {
        self.never_hit.len()
    }
}

/// relscore of one approach against precomputed campaign rarity.
///
/// Returns `None` when the approach has no trial with non-empty coverage, in
/// which case the score is undefined; callers report it as `0.0` and warn.
pub fn approach_relscore<T, E>(approach: &ApproachData<T, E>, rarity: &EdgeRarity<E>) -> Option<f64>
where
    T: Ord + Clone,
    E: Ord + Clone,
{
    let nonempty = approach.nonempty_trial_count();
    if nonempty == 0 {
        return None;
    }

    let score = rarity
        .iter()
        .filter(|(_, weight)| *weight > 0)
        .map(|(edge, weight)| {
            let hits = approach.trials_hitting(edge);
            weight as f64 * hits as f64 / nonempty as f64
        })
        .sum();
    Some(score)
}
