//! Dataset: several snapshot files loaded side by side.
//!
//! Each selected table is ingested by its own loader on a rayon task. Files are
//! independent, so no index is ever written from two threads.

use std::fmt;
use std::path::PathBuf;

use tracing::{info, instrument};

use crate::config::DatasetConfig;
use crate::error::ImdbxResult;
use crate::index::RecordIndex;
use crate::loader::Loader;
use crate::loaders::{
    NameBasicsLoader, Person, TitleAka, TitleAkaLoader, TitleBasics, TitleBasicsLoader,
    TitleEpisode, TitleEpisodeLoader, TitlePrincipal, TitlePrincipalsLoader, TitleRating,
    TitleRatingsLoader,
};
use crate::pipeline::Pipeline;
use crate::record::TsvRecord;

/// The snapshot files a dataset can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    NameBasics,
    TitleBasics,
    TitleAkas,
    TitleEpisode,
    TitlePrincipals,
    TitleRatings,
}

impl Table {
    pub const ALL: [Table; 6] = [
        Table::NameBasics,
        Table::TitleBasics,
        Table::TitleAkas,
        Table::TitleEpisode,
        Table::TitlePrincipals,
        Table::TitleRatings,
    ];

    /// Standard file name of the table's snapshot.
    pub fn file_name(&self) -> &'static str {
        match self {
            Table::NameBasics => Person::FILE_NAME,
            Table::TitleBasics => TitleBasics::FILE_NAME,
            Table::TitleAkas => TitleAka::FILE_NAME,
            Table::TitleEpisode => TitleEpisode::FILE_NAME,
            Table::TitlePrincipals => TitlePrincipal::FILE_NAME,
            Table::TitleRatings => TitleRating::FILE_NAME,
        }
    }

    pub fn path_in(&self, config: &DatasetConfig) -> PathBuf {
        config.data_dir.join(self.file_name())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Loaded tables; a table that was not selected is `None`.
#[derive(Debug, Default)]
pub struct Dataset {
    pub names: Option<NameBasicsLoader>,
    pub titles: Option<TitleBasicsLoader>,
    pub akas: Option<TitleAkaLoader>,
    pub episodes: Option<TitleEpisodeLoader>,
    pub principals: Option<TitlePrincipalsLoader>,
    pub ratings: Option<TitleRatingsLoader>,
}

impl Dataset {
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::new()
    }

    /// Loads every table with no filters.
    pub fn load_all(config: &DatasetConfig) -> ImdbxResult<Self> {
        DatasetBuilder::all().load(config)
    }

    /// Tables present in this dataset.
    pub fn tables(&self) -> Vec<Table> {
        let present = [
            self.names.is_some(),
            self.titles.is_some(),
            self.akas.is_some(),
            self.episodes.is_some(),
            self.principals.is_some(),
            self.ratings.is_some(),
        ];
        Table::ALL
            .into_iter()
            .zip(present)
            .filter_map(|(table, loaded)| loaded.then_some(table))
            .collect()
    }
}

/// Chooses which tables to load and the pipeline of each.
#[derive(Default)]
pub struct DatasetBuilder {
    names: Option<Pipeline<Person>>,
    titles: Option<Pipeline<TitleBasics>>,
    akas: Option<Pipeline<TitleAka>>,
    episodes: Option<Pipeline<TitleEpisode>>,
    principals: Option<Pipeline<TitlePrincipal>>,
    ratings: Option<Pipeline<TitleRating>>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every table, unfiltered.
    pub fn all() -> Self {
        Table::ALL
            .into_iter()
            .fold(Self::new(), |builder, table| builder.table(table))
    }

    /// Selects `table` with an empty pipeline.
    pub fn table(self, table: Table) -> Self {
        match table {
            Table::NameBasics => self.names(Pipeline::new()),
            Table::TitleBasics => self.titles(Pipeline::new()),
            Table::TitleAkas => self.akas(Pipeline::new()),
            Table::TitleEpisode => self.episodes(Pipeline::new()),
            Table::TitlePrincipals => self.principals(Pipeline::new()),
            Table::TitleRatings => self.ratings(Pipeline::new()),
        }
    }

    pub fn names(mut self, pipeline: Pipeline<Person>) -> Self {
        self.names = Some(pipeline);
        self
    }

    pub fn titles(mut self, pipeline: Pipeline<TitleBasics>) -> Self {
        self.titles = Some(pipeline);
        self
    }

    pub fn akas(mut self, pipeline: Pipeline<TitleAka>) -> Self {
        self.akas = Some(pipeline);
        self
    }

    pub fn episodes(mut self, pipeline: Pipeline<TitleEpisode>) -> Self {
        self.episodes = Some(pipeline);
        self
    }

    pub fn principals(mut self, pipeline: Pipeline<TitlePrincipal>) -> Self {
        self.principals = Some(pipeline);
        self
    }

    pub fn ratings(mut self, pipeline: Pipeline<TitleRating>) -> Self {
        self.ratings = Some(pipeline);
        self
    }

    /// Loads the selected tables in parallel. The first failure (in table order) is
    /// returned and every other result is dropped.
    #[instrument(skip_all, fields(data_dir = %config.data_dir.display()))]
    pub fn load(self, config: &DatasetConfig) -> ImdbxResult<Dataset> {
        let mut names: Slot<NameBasicsLoader> = None;
        let mut titles: Slot<TitleBasicsLoader> = None;
        let mut akas: Slot<TitleAkaLoader> = None;
        let mut episodes: Slot<TitleEpisodeLoader> = None;
        let mut principals: Slot<TitlePrincipalsLoader> = None;
        let mut ratings: Slot<TitleRatingsLoader> = None;

        rayon::scope(|s| {
            spawn_load(s, &mut names, self.names, config);
            spawn_load(s, &mut titles, self.titles, config);
            spawn_load(s, &mut akas, self.akas, config);
            spawn_load(s, &mut episodes, self.episodes, config);
            spawn_load(s, &mut principals, self.principals, config);
            spawn_load(s, &mut ratings, self.ratings, config);
        });

        let dataset = Dataset {
            names: names.transpose()?,
            titles: titles.transpose()?,
            akas: akas.transpose()?,
            episodes: episodes.transpose()?,
            principals: principals.transpose()?,
            ratings: ratings.transpose()?,
        };
        info!(tables = dataset.tables().len(), "dataset loaded");
        Ok(dataset)
    }
}

impl fmt::Debug for DatasetBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatasetBuilder")
            .field("names", &self.names)
            .field("titles", &self.titles)
            .field("akas", &self.akas)
            .field("episodes", &self.episodes)
            .field("principals", &self.principals)
            .field("ratings", &self.ratings)
            .finish()
    }
}

/// Result of one table's load; `None` when the table was not selected.
type Slot<L> = Option<ImdbxResult<L>>;

/// Spawns one load on `scope` when a pipeline was selected, writing into `slot`.
fn spawn_load<'scope, I>(
    scope: &rayon::Scope<'scope>,
    slot: &'scope mut Slot<Loader<I>>,
    pipeline: Option<Pipeline<I::Record>>,
    config: &'scope DatasetConfig,
) where
    I: RecordIndex + Send + 'scope,
    I::Record: 'scope,
{
    if let Some(pipeline) = pipeline {
        scope.spawn(move |_| {
            let path = config.path_for::<I::Record>();
            *slot = Some(Loader::load_with_config(path, pipeline, &config.ingest));
        });
    }
}
