//! Error taxonomy for campaign construction and scoring.

use thiserror::Error;

/// Error type for building coverage aggregates and computing scores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// A campaign was built without any approach.
    #[error("Did not provide any approaches")]
    EmptyCampaign,

    /// An approach was built without any trial.
    #[error("Approach {approach} has no trials")]
    EmptyApproach { approach: String },

    /// A trial had no covered edge while building through the strict API.
    #[error("Trial {trial} has no edges")]
    EmptyTrial { trial: String },

    /// An approach used as an input corpus does not have exactly one trial.
    #[error("Input corpus {approach} must have exactly one trial, found {trials}")]
    InvalidCorpus { approach: String, trials: usize },

    /// A named reference or corpus approach is not part of the campaign.
    ///
    /// Most often this means the approach was removed by an include/exclude
    /// filter before the campaign was built.
    #[error("Approach {name} not found in campaign (it may have been excluded)")]
    ReferenceNotFound { name: String },

    /// relcov against an empty reference coverage set.
    #[error("Reference coverage is empty; relcov is undefined")]
    DivisionByZero,

    /// A value reducer was asked to reduce an empty sequence.
    #[error("Cannot reduce an empty sequence of values")]
    EmptyValues,
}

impl ScoreError {
    /// Whether the error reports a violated modelling invariant
    /// (empty campaign, approach or trial, or a malformed corpus).
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ScoreError::EmptyCampaign
                | ScoreError::EmptyApproach { .. }
                | ScoreError::EmptyTrial { .. }
                | ScoreError::InvalidCorpus { .. }
        )
    }
}

/// Convenience result type for scoring operations.
pub type ScoreResult<T> = Result<T, ScoreError>;
