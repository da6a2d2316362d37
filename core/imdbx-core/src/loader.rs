//! Loader: drives one file through source, header check, parser, pipeline and index.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument};

use crate::config::IngestConfig;
use crate::error::{ImdbxError, ImdbxResult};
use crate::header::validate_header;
use crate::index::RecordIndex;
use crate::pipeline::Pipeline;
use crate::record::{TsvRecord, parse_row};
use crate::source::LineSource;

/// Counters collected while ingesting one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Data rows parsed (header excluded)
    pub rows_read: u64,
    /// Rows rejected by the filter
    pub rows_filtered: u64,
    /// Rows stored in the index
    pub rows_indexed: u64,
    pub elapsed: Duration,
}

/// A fully ingested file and its index.
///
/// Built once and read-only afterwards; a failed load never yields a `Loader`.
/// Schema-specific queries live on the concrete aliases in [`crate::loaders`].
pub struct Loader<I> {
    path: PathBuf,
    index: I,
    stats: IngestStats,
}

impl<I> Loader<I>
where
    I: RecordIndex,
{
    /// Loads `path` with no filter or transform.
    pub fn open(path: impl AsRef<Path>) -> ImdbxResult<Self> {
        Self::load(path, Pipeline::new())
    }

    /// Loads `path` through `pipeline` with the default ingest settings.
    pub fn load(path: impl AsRef<Path>, pipeline: Pipeline<I::Record>) -> ImdbxResult<Self> {
        Self::load_with_config(path, pipeline, &IngestConfig::default())
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display(), file = <I::Record as TsvRecord>::FILE_NAME))]
    pub fn load_with_config(
        path: impl AsRef<Path>,
        pipeline: Pipeline<I::Record>,
        config: &IngestConfig,
    ) -> ImdbxResult<Self> {
        let path = path.as_ref();
        let started = Instant::now();

        let mut source = LineSource::open_with_capacity(path, config.read_buffer_bytes)?;
        validate_header(&mut source, <I::Record as TsvRecord>::HEADER)?;

        let mut index = I::default();
        let mut stats = IngestStats::default();

        while let Some(line) = source.next_line()? {
            let record = parse_row::<I::Record>(path, &line)?;
            stats.rows_read += 1;

            if config.progress_interval > 0 && stats.rows_read % config.progress_interval == 0 {
                debug!(rows = stats.rows_read, indexed = stats.rows_indexed, "ingest progress");
            }

            if !pipeline.accepts(&record) {
                stats.rows_filtered += 1;
                continue;
            }

            // key is fixed before the transform can touch the record
            let key = I::key_of(&record);
            let record = pipeline.transform(record);
            index
                .insert(key, record)
                .map_err(|err| ImdbxError::DuplicateKey {
                    path: path.to_path_buf(),
                    key: err.key,
                })?;
            stats.rows_indexed += 1;
        }

        stats.elapsed = started.elapsed();
        info!(
            rows_read = stats.rows_read,
            rows_filtered = stats.rows_filtered,
            rows_indexed = stats.rows_indexed,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "file loaded"
        );

        Ok(Self {
            path: path.to_path_buf(),
            index,
            stats,
        })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl<I> Loader<I> {
    /// The finished index, for queries the schema API does not cover.
    pub fn index(&self) -> &I {
        &self.index
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    /// Takes the index out of the loader.
    pub fn into_index(self) -> I {
        self.index
    }
}

impl<I: std::fmt::Debug> std::fmt::Debug for Loader<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader")
            .field("path", &self.path)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
