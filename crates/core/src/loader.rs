//! Reading campaign directories of hit-count files.
//!
//! Layout: one subdirectory per approach, each holding one file per trial.
//! Every line of a trial file is `<edge-id>:<count>`; blank lines are ignored.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::campaign::Campaign;
use crate::coverage::HitCounts;
use crate::error::ScoreError;

/// Trial identifier to raw hit counts, for one approach.
pub type RawApproach = BTreeMap<String, HitCounts<String>>;

/// Approach identifier to its raw trials.
pub type RawCampaign = BTreeMap<String, RawApproach>;

/// Error type for loading coverage from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Something other than a directory in the campaign root, or other than
    /// a regular file inside an approach directory.
    #[error("Invalid file: {0}")]
    UnexpectedEntry(PathBuf),

    /// A line that does not split into exactly `<edge-id>:<count>`.
    #[error("Invalid line {}:{line}: {content}", .path.display())]
    Malformed { path: PathBuf, line: usize, content: String },

    #[error("Invalid hit count {}:{line}: {value}", .path.display())]
    InvalidCount { path: PathBuf, line: usize, value: String },

    /// Two files of one approach share a file stem, so they map to the same
    /// trial identifier.
    #[error("Duplicate trial '{trial}' in {}", .path.display())]
    DuplicateTrial { path: PathBuf, trial: String },

    /// The loaded data violates a campaign invariant.
    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// Convenience result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Parse hit-count lines. `path` is only used in error messages.
pub fn parse_hit_counts(path: &Path, body: &str) -> LoadResult<HitCounts<String>> {
    let mut edges = HitCounts::new();
    for (idx, line) in body.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let mut parts = line.split(':');
        let (edge, count) = match (parts.next(), parts.next(), parts.next()) {
            (Some(edge), Some(count), None) => (edge.trim(), count.trim()),
            _ => {
                return Err(LoadError::Malformed {
                    path: path.to_path_buf(),
                    line: line_no,
                    content: line.to_string(),
                })
            }
        };
        let count: u64 = count.parse().map_err(|_| LoadError::InvalidCount {
            path: path.to_path_buf(),
            line: line_no,
            value: count.to_string(),
        })?;
        edges.insert(edge.to_string(), count);
    }
    Ok(edges)
}

/// Read one trial file.
pub fn read_hit_count_file(path: &Path) -> LoadResult<HitCounts<String>> {
    let body = fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    parse_hit_counts(path, &body)
}

/// Read every trial file of one approach directory; trial id is the file stem.
pub fn read_approach_dir(path: &Path) -> LoadResult<RawApproach> {
    let mut trials = RawApproach::new();
    for entry in read_dir_sorted(path)? {
        if !entry.is_file() {
            return Err(LoadError::UnexpectedEntry(entry));
        }
        let trial = entry
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();
        let counts = read_hit_count_file(&entry)?;
        if trials.insert(trial.clone(), counts).is_some() {
            return Err(LoadError::DuplicateTrial { path: entry, trial });
        }
    }
    Ok(trials)
}

/// Read a campaign directory: one subdirectory per approach.
pub fn read_campaign_dir(path: &Path) -> LoadResult<RawCampaign> {
    if !path.is_dir() {
        return Err(LoadError::NotADirectory(path.to_path_buf()));
    }
    let mut campaign = RawCampaign::new();
    for entry in read_dir_sorted(path)? {
        if !entry.is_dir() {
            return Err(LoadError::UnexpectedEntry(entry));
        }
        let approach = entry
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let trials = read_approach_dir(&entry)?;
        debug!(approach = %approach, trials = trials.len(), "read approach directory");
        campaign.insert(approach, trials);
    }
    Ok(campaign)
}

/// Read a campaign directory and build the campaign from its hit counts.
pub fn load_campaign(path: &Path) -> LoadResult<Campaign<String, String, String>> {
    let raw = read_campaign_dir(path)?;
    Ok(Campaign::from_hit_counts(raw)?)
}

impl Campaign<String, String, String> {
    /// Load every approach found under `path`. See [`load_campaign`].
    pub fn from_campaign_dir(path: impl AsRef<Path>) -> LoadResult<Self> {
        load_campaign(path.as_ref())
    }
}

fn read_dir_sorted(path: &Path) -> LoadResult<Vec<PathBuf>> {
    let entries = fs::read_dir(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}
