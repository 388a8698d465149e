//! Campaign aggregate: every approach under comparison, and the scoring
//! operations that need a global view of them.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;
use tracing::{debug, warn};

use crate::approach::{ApproachData, UNNAMED_APPROACH};
use crate::config::ScoringConfig;
use crate::coverage::HitCounts;
use crate::error::{ScoreError, ScoreResult};
use crate::relcov::{ensure_single_trial, performance_over_corpus};
use crate::relscore::{approach_relscore, EdgeRarity};

/// Row-by-column table of relcov values.
///
/// `columns` lists the reference (or corpus) approaches in display order;
/// `rows` maps each querying approach to its value per column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreTable<A: Ord> {
    pub columns: Vec<A>,
    pub rows: BTreeMap<A, BTreeMap<A, f64>>,
}

impl<A: Ord> ScoreTable<A> {
    /// Value at `row`/`column`, if present.
    pub fn get(&self, row: &A, column: &A) -> Option<f64> {
        self.rows.get(row).and_then(|cells| cells.get(column)).copied()
    }
}

/// All approaches of one campaign, keyed by approach identifier.
///
/// Built once and read-only thereafter. Filtering approaches in or out is the
/// caller's job and happens before construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Campaign<A, T, E> {
    approaches: BTreeMap<A, ApproachData<T, E>>,
}

impl<A, T, E> Campaign<A, T, E>
where
    A: Ord + Clone + Display,
    T: Ord + Clone + Display,
    E: Ord + Clone,
{
    /// Build from `approach -> trial -> edges` collections (strict API).
    ///
    /// Every approach needs at least one trial and every trial at least one
    /// edge.
    pub fn new<I, TI, C>(campaign: I) -> ScoreResult<Self>
    where
        I: IntoIterator<Item = (A, TI)>,
        TI: IntoIterator<Item = (T, C)>,
        C: IntoIterator<Item = E>,
    {
        let approaches = campaign
            .into_iter()
            .map(|(name, trials)| {
                let data = ApproachData::new(trials).map_err(|err| name_approach(err, &name))?;
                Ok((name, data))
            })
            .collect::<ScoreResult<BTreeMap<_, _>>>()?;
        Self::from_approaches(approaches)
    }

    /// Build from raw hit counts; all-zero trials are kept as empty coverage.
    pub fn from_hit_counts<I, TI>(campaign: I) -> ScoreResult<Self>
    where
        I: IntoIterator<Item = (A, TI)>,
        TI: IntoIterator<Item = (T, HitCounts<E>)>,
    {
        let approaches = campaign
            .into_iter()
            .map(|(name, trials)| {
                let data = ApproachData::from_hit_counts(trials)
                    .map_err(|err| name_approach(err, &name))?;
                debug!(
                    approach = %name,
                    trials = data.trial_count(),
                    nonempty = data.nonempty_trial_count(),
                    "loaded approach"
                );
                Ok((name, data))
            })
            .collect::<ScoreResult<BTreeMap<_, _>>>()?;
        Self::from_approaches(approaches)
    }
}

impl<A, T, E> Campaign<A, T, E>
where
    A: Ord + Clone + Display,
    T: Ord + Clone,
    E: Ord + Clone,
{
    /// Build from already-constructed approach data.
    pub fn from_approaches<I>(approaches: I) -> ScoreResult<Self>
    where
        I: IntoIterator<Item = (A, ApproachData<T, E>)>,
    {
        let approaches: BTreeMap<A, ApproachData<T, E>> = approaches.into_iter().collect();
        if approaches.is_empty() {
            return Err(ScoreError::EmptyCampaign);
        }
        Ok(Self { approaches })
    }

    pub fn approaches(&self) -> &BTreeMap<A, ApproachData<T, E>> {
        &self.approaches
    }

    /// Approach identifiers in sorted order.
    pub fn names(&self) -> Vec<A> {
        self.approaches.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.approaches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.approaches.is_empty()
    }

    /// Look up an approach used as a reference or corpus.
    pub fn get(&self, name: &A) -> ScoreResult<&ApproachData<T, E>> {
        self.approaches
            .get(name)
            .ok_or_else(|| ScoreError::ReferenceNotFound { name: name.to_string() })
    }

    /// Per-edge rarity over the whole campaign.
    pub fn edge_rarity(&self) -> EdgeRarity<E> {
        EdgeRarity::from_approaches(self.approaches.values())
    }

    /// relscore of every approach.
    ///
    /// Approaches without any non-empty trial score `0.0` and emit a warning;
    /// the remaining approaches are unaffected.
    pub fn relscores(&self) -> BTreeMap<A, f64> {
        let rarity = self.edge_rarity();
        debug!(
            approaches = self.approaches.len(),
            edges = rarity.edge_count(),
            "computing relscores"
        );

        self.approaches
            .iter()
            .map(|(name, data)| {
                let score = approach_relscore(data, &rarity).unwrap_or_else(|| {
                    warn!(
                        approach = %name,
                        "approach has no trials with non-empty coverage; relscore is 0.0"
                    );
                    0.0
                });
                (name.clone(), score)
            })
            .collect()
    }

    /// Reliability (self-relcov) of every approach.
    pub fn reliabilities(&self) -> ScoreResult<BTreeMap<A, f64>> {
        self.approaches
            .iter()
            .map(|(name, data)| Ok((name.clone(), data.reliability()?)))
            .collect()
    }

    /// relcov of every other approach against `reference`.
    pub fn performance_over_approach(
        &self,
        reference: &A,
        config: &ScoringConfig,
    ) -> ScoreResult<BTreeMap<A, f64>> {
        let reference_data = self.get(reference)?;
        self.approaches
            .iter()
            .filter(|(name, _)| *name != reference)
            .map(|(name, data)| Ok((name.clone(), data.relcov_with(reference_data, config)?)))
            .collect()
    }

    /// Every approach against every approach as reference.
    ///
    /// Diagonal cells hold the approach's reliability.
    pub fn performance_table(&self, config: &ScoringConfig) -> ScoreResult<ScoreTable<A>> {
        let columns = self.names();
        let mut rows = BTreeMap::new();
        for (name, data) in &self.approaches {
            let mut cells = BTreeMap::new();
            for reference in &columns {
                let value = if reference == name {
                    data.reliability()?
                } else {
                    data.relcov_with(self.get(reference)?, config)?
                };
                cells.insert(reference.clone(), value);
            }
            rows.insert(name.clone(), cells);
        }
        Ok(ScoreTable { columns, rows })
    }

    /// Approaches usable as an input corpus: those with exactly one trial.
    pub fn corpus_approaches(&self) -> Vec<A> {
        self.approaches
            .iter()
            .filter(|(_, data)| data.trial_count() == 1)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Performance of every other approach over the input corpus `corpus`.
    pub fn performance_over_corpus(&self, corpus: &A) -> ScoreResult<BTreeMap<A, f64>> {
        let corpus_data = self.get(corpus)?;
        let corpus_name = corpus.to_string();
        ensure_single_trial(&corpus_name, corpus_data)?;
        self.approaches
            .iter()
            .filter(|(name, _)| *name != corpus)
            .map(|(name, data)| {
                Ok((name.clone(), performance_over_corpus(&corpus_name, corpus_data, data)?))
            })
            .collect()
    }

    /// Every approach against every single-trial corpus; diagonal is `1.0`.
    pub fn corpus_table(&self) -> ScoreResult<ScoreTable<A>> {
        let columns = self.corpus_approaches();
        let mut rows: BTreeMap<A, BTreeMap<A, f64>> =
            self.approaches.keys().map(|name| (name.clone(), BTreeMap::new())).collect();

        for corpus in &columns {
            for (name, value) in self.performance_over_corpus(corpus)? {
                rows.entry(name).or_default().insert(corpus.clone(), value);
            }
            rows.entry(corpus.clone()).or_default().insert(corpus.clone(), 1.0);
        }
        Ok(ScoreTable { columns, rows })
    }
}

/// Attach the approach's name to errors raised before it was known.
fn name_approach<A: Display>(err: ScoreError, name: &A) -> ScoreError {
    match err {
        ScoreError::EmptyApproach { approach } if approach == UNNAMED_APPROACH => {
            ScoreError::EmptyApproach { approach: name.to_string() }
        }
        other => other,
    }
}
