use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reducer::{CollectionReducer, ValueReducer};

/// Error type for loading a tool configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse config YAML at {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Only `.json`, `.yaml` and `.yml` are understood.
    #[error("Unsupported config format for {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },
}

/// Reducers injected into relcov computations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub value_reducer: ValueReducer,
    #[serde(default)]
    pub collection_reducer: CollectionReducer,
}

impl ScoringConfig {
    pub fn new(value_reducer: ValueReducer, collection_reducer: CollectionReducer) -> Self {
        Self { value_reducer, collection_reducer }
    }
}

/// Serializable defaults for a scoring run, typically kept next to a
/// campaign directory and passed with `--config`.
///
/// Every field is optional; command-line flags extend or override it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Approach include patterns (exact name or regex).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,
    /// Approach exclude patterns, applied after `include`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
    /// Output format name (plain, csv, latex, json).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Colour map for coloured LaTeX cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colormap: Option<String>,
    #[serde(default)]
    pub latex_color: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latex_rotate_headers: Option<f64>,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl ToolConfig {
    /// Load a config file, picking the parser from the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_string();
        if !matches!(ext.as_str(), "json" | "yaml" | "yml") {
            return Err(ConfigError::UnsupportedFormat { path: path.to_path_buf() });
        }

        let body = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        if ext == "json" {
            serde_json::from_str(&body)
                .map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })
        } else {
            serde_yaml::from_str(&body)
                .map_err(|source| ConfigError::Yaml { path: path.to_path_buf(), source })
        }
    }
}
