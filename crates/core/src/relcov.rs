//! relcov: how much of a reference coverage set another approach reproduces.

use crate::approach::ApproachData;
use crate::config::ScoringConfig;
use crate::coverage::CoverageSet;
use crate::error::{ScoreError, ScoreResult};
use crate::reducer::{CollectionReducer, ValueReducer};

/// `|querying ∩ reference| / |reference|`.
///
/// Fails with `DivisionByZero` when `reference` is empty.
pub fn relcov<E: Ord>(querying: &CoverageSet<E>, reference: &CoverageSet<E>) -> ScoreResult<f64> {
    if reference.is_empty() {
        return Err(ScoreError::DivisionByZero);
    }
    let shared = querying.intersection(reference).count();
    Ok(shared as f64 / reference.len() as f64)
}

impl<T, E> ApproachData<T, E>
where
    T: Ord + Clone,
    E: Ord + Clone,
{
    /// Pairwise relcov of every trial of `self` against `other`.
    ///
    /// `other` is first collapsed to one reference set with
    /// `collection_reducer`; the per-trial ratios of `self` are then collapsed
    /// with `value_reducer`. The result lies in `[0, 1]`.
    pub fn relcov(
        &self,
        other: &ApproachData<T, E>,
        value_reducer: ValueReducer,
        collection_reducer: CollectionReducer,
    ) -> ScoreResult<f64> {
        let reference = collection_reducer.reduce(other);
        let ratios = self
            .edges_by_trial()
            .values()
            .map(|edges| relcov(edges, reference))
            .collect::<ScoreResult<Vec<f64>>>()?;
        value_reducer.reduce(&ratios)
    }

    /// Same as [`ApproachData::relcov`], with reducers taken from a config.
    pub fn relcov_with(
        &self,
        other: &ApproachData<T, E>,
        config: &ScoringConfig,
    ) -> ScoreResult<f64> {
        self.relcov(other, config.value_reducer, config.collection_reducer)
    }

    /// How consistently the trials of this approach reproduce its own union.
    pub fn reliability(&self) -> ScoreResult<f64> {
        self.relcov(self, ValueReducer::Median, CollectionReducer::Union)
    }
}

/// Performance of `approach` over a fixed input corpus.
///
/// Roles are reversed compared to approach-vs-approach relcov: the corpus's
/// single trial is the querying side and the union of `approach` is the
/// reference. `corpus` must have exactly one trial.
pub fn performance_over_corpus<T, E>(
    corpus_name: &str,
    corpus: &ApproachData<T, E>,
    approach: &ApproachData<T, E>,
) -> ScoreResult<f64>
where
    T: Ord + Clone,
    E: Ord + Clone,
{
    ensure_single_trial(corpus_name, corpus)?;
    corpus.relcov(approach, ValueReducer::Median, CollectionReducer::Union)
}

/// Reject corpora that do not consist of exactly one trial.
pub fn ensure_single_trial<T, E>(corpus_name: &str, corpus: &ApproachData<T, E>) -> ScoreResult<()>
where
    T: Ord + Clone,
    E: Ord + Clone,
{
    match corpus.trial_count() {
        1 => Ok(()),
        trials => Err(ScoreError::InvalidCorpus { approach: corpus_name.to_string(), trials }),
    }
}
