//! Configuration: ingestion tuning and dataset location.
//!
//! Three sources, lowest to highest precedence: built-in defaults, a JSON file
//! ([`DatasetConfig::from_json_file`]), environment variables ([`DatasetConfig::from_env`]).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ImdbxError, ImdbxResult};
use crate::record::TsvRecord;
use crate::source::DEFAULT_READ_BUFFER_BYTES;

/// Directory holding the snapshot files (default: `data`)
pub const ENV_DATA_DIR: &str = "IMDBX_DATA_DIR";
/// Read buffer size in bytes
pub const ENV_READ_BUFFER_BYTES: &str = "IMDBX_READ_BUFFER_BYTES";
/// Rows between progress log lines; 0 disables progress logging
pub const ENV_PROGRESS_INTERVAL: &str = "IMDBX_PROGRESS_INTERVAL";

/// Default number of rows between progress log lines.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1_000_000;

/// Per-file ingestion settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub read_buffer_bytes: usize,
    pub progress_interval: u64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            read_buffer_bytes: DEFAULT_READ_BUFFER_BYTES,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl IngestConfig {
    pub fn with_read_buffer_bytes(mut self, bytes: usize) -> Self {
        self.read_buffer_bytes = bytes;
        self
    }

    pub fn with_progress_interval(mut self, rows: u64) -> Self {
        self.progress_interval = rows;
        self
    }

    fn validate(&self) -> ImdbxResult<()> {
        if self.read_buffer_bytes == 0 {
            return Err(ImdbxError::Config(
                "read_buffer_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Where a dataset lives and how its files are ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub data_dir: PathBuf,
    pub ingest: IngestConfig,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            ingest: IngestConfig::default(),
        }
    }
}

impl DatasetConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::default().with_data_dir(data_dir)
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_ingest(mut self, ingest: IngestConfig) -> Self {
        self.ingest = ingest;
        self
    }

    /// Full path of the standard file for schema `R`.
    pub fn path_for<R: TsvRecord>(&self) -> PathBuf {
        self.data_dir.join(R::FILE_NAME)
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> ImdbxResult<Self> {
        Self::default().merge_env()
    }

    /// Defaults overridden by `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> ImdbxResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().merge_lookup(lookup)
    }

    /// Reads a JSON file; missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> ImdbxResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            ImdbxError::Config(format!("cannot read '{}': {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|e| {
            ImdbxError::Config(format!("invalid config '{}': {e}", path.display()))
        })?;
        config.ingest.validate()?;
        Ok(config)
    }

    /// Applies the environment on top of `self`.
    pub fn merge_env(self) -> ImdbxResult<Self> {
        self.merge_lookup(|name| env::var(name).ok())
    }

    fn merge_lookup<F>(mut self, lookup: F) -> ImdbxResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|dir| !dir.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(value) = lookup(ENV_READ_BUFFER_BYTES) {
            self.ingest.read_buffer_bytes = parse_number(ENV_READ_BUFFER_BYTES, &value)?;
        }
        if let Some(value) = lookup(ENV_PROGRESS_INTERVAL) {
            self.ingest.progress_interval = parse_number(ENV_PROGRESS_INTERVAL, &value)?;
        }
        self.ingest.validate()?;
        Ok(self)
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> ImdbxResult<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ImdbxError::Config(format!("{name}={value:?}: {e}")))
}
