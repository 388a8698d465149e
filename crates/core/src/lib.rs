//! diffcov-core
//!
//! Core library for differential coverage scoring of test-generation
//! approaches (fuzzers, static corpora) across repeated trials.
//!
//! This crate defines the coverage data model, the reducer strategies, the
//! two scoring metrics (`relscore` and `relcov`), the campaign aggregate that
//! orchestrates them, and the loader for directories of hit-count files.
//!
//! All substantive logic lives here so it is fully testable and reusable from
//! multiple frontends; the CLI only parses arguments and renders results.

pub mod approach;
pub mod campaign;
pub mod config;
pub mod coverage;
pub mod error;
pub mod loader;
pub mod reducer;
pub mod relcov;
pub mod relscore;

pub use approach::ApproachData;
pub use campaign::{Campaign, ScoreTable};
pub use config::{ScoringConfig, ToolConfig};
pub use coverage::{covered_edges, CoverageSet, HitCounts};
pub use error::{ScoreError, ScoreResult};
pub use reducer::{CollectionReducer, ValueReducer};

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
