//! Reduction strategies injected into relcov computations.
//!
//! Two orthogonal axes:
//! - `ValueReducer`: collapses the per-trial ratios of the querying approach.
//! - `CollectionReducer`: collapses the reference approach's trials into one
//!   reference coverage set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::approach::ApproachData;
use crate::coverage::CoverageSet;
use crate::error::{ScoreError, ScoreResult};

/// Error returned when a reducer name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} reducer '{name}' (expected one of: {expected})")]
pub struct ParseReducerError {
    kind: &'static str,
    name: String,
    expected: &'static str,
}

/// How to collapse a sequence of per-trial ratios into one number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueReducer {
    /// Robust to outlier trials (e.g. one crashed run).
    #[default]
    Median,
    Min,
    Max,
    Average,
}

impl ValueReducer {
    pub const ALL: [ValueReducer; 4] =
        [ValueReducer::Median, ValueReducer::Min, ValueReducer::Max, ValueReducer::Average];

    /// Reduce `values` to a single number. The input is left untouched.
    ///
    /// The median of an even-length sequence is the mean of the two middle
    /// values.
    pub fn reduce(&self, values: &[f64]) -> ScoreResult<f64> {
        if values.is_empty() {
            return Err(ScoreError::EmptyValues);
        }
        let reduced = match self {
            ValueReducer::Median => {
                let mut sorted = values.to_vec();
                sorted.sort_by(|a, b| a.total_cmp(b));
                let mid = sorted.len() / 2;
                if sorted.len() % 2 == 0 {
                    (sorted[mid - 1] + sorted[mid]) / 2.0
                } else {
                    sorted[mid]
                }
            }
            ValueReducer::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            ValueReducer::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            ValueReducer::Average => values.iter().sum::<f64>() / values.len() as f64,
        };
        Ok(reduced)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueReducer::Median => "median",
            ValueReducer::Min => "min",
            ValueReducer::Max => "max",
            ValueReducer::Average => "average",
        }
    }
}

impl fmt::Display for ValueReducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueReducer {
    type Err = ParseReducerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "median" => Ok(ValueReducer::Median),
            "min" => Ok(ValueReducer::Min),
            "max" => Ok(ValueReducer::Max),
            "average" | "avg" | "mean" => Ok(ValueReducer::Average),
            _ => Err(ParseReducerError {
                kind: "value",
                name: s.to_string(),
                expected: "median, min, max, average",
            }),
        }
    }
}

/// How to collapse a reference approach's trials into one coverage set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionReducer {
    /// Credit any edge the reference reached in any trial.
    #[default]
    Union,
    Intersection,
}

impl CollectionReducer {
    pub const ALL: [CollectionReducer; 2] =
        [CollectionReducer::Union, CollectionReducer::Intersection];

    /// Borrow the reference coverage set selected by this strategy.
    pub fn reduce<'a, T, E>(&self, approach: &'a ApproachData<T, E>) -> &'a CoverageSet<E>
    where
        T: Ord + Clone,
        E: Ord + Clone,
    {
        match self {
            CollectionReducer::Union => approach.edges_union(),
            CollectionReducer::Intersection => approach.edges_intersection(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionReducer::Union => "union",
            CollectionReducer::Intersection => "intersection",
        }
    }
}

impl fmt::Display for CollectionReducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionReducer {
    type Err = ParseReducerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "union" => Ok(CollectionReducer::Union),
            "intersection" => Ok(CollectionReducer::Intersection),
            _ => Err(ParseReducerError {
                kind: "collection",
                name: s.to_string(),
                expected: "union, intersection",
            }),
        }
    }
}
