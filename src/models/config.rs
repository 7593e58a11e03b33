//! Pipeline parameter configuration.
//!
//! Parameters resolve in three layers: an explicit CLI flag wins over a
//! value from an optional YAML config file, which wins over the built-in
//! default. The resolved [`Params`] quadruple is the only configuration the
//! pipeline ever sees.

use std::path::Path;

use cartoon_core::api::{
    DEFAULT_DEVIATION, DEFAULT_EDGE_WIDTH, DEFAULT_PALETTE_STEP, DEFAULT_THRESHOLD,
};
use serde::Deserialize;
use thiserror::Error;

/// Error type for loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Pipeline parameters from a YAML config file; absent fields fall through
/// to the next layer.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FileConfig {
    pub threshold: Option<u32>,
    pub edge: Option<u32>,
    pub palette: Option<u32>,
    pub deviation: Option<u32>,
}

impl FileConfig {
    /// Load and parse a YAML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Explicit CLI overrides, highest-precedence layer.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub threshold: Option<u32>,
    pub edge: Option<u32>,
    pub palette: Option<u32>,
    pub deviation: Option<u32>,
}

/// The resolved pipeline parameter quadruple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub threshold: u32,
    pub edge_width: u32,
    pub palette_step: u32,
    pub deviation: u32,
}

impl Params {
    /// Layer CLI overrides over file values over built-in defaults.
    pub fn resolve(cli: &Overrides, file: &FileConfig) -> Self {
        Self {
            threshold: cli.threshold.or(file.threshold).unwrap_or(DEFAULT_THRESHOLD),
            edge_width: cli.edge.or(file.edge).unwrap_or(DEFAULT_EDGE_WIDTH),
            palette_step: cli
                .palette
                .or(file.palette)
                .unwrap_or(DEFAULT_PALETTE_STEP),
            deviation: cli
                .deviation
                .or(file.deviation)
                .unwrap_or(DEFAULT_DEVIATION),
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::resolve(&Overrides::default(), &FileConfig::default())
    }
}
