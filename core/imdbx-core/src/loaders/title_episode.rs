//! Episodes (`title.episode.tsv.gz`).

use crate::TsvRecord;
use crate::index::{FlatIndex, Matches};
use crate::loader::Loader;

/// One episode, keyed by its own `tconst`; `parent_id` points at the series.
#[derive(Debug, Clone, PartialEq, Eq, TsvRecord)]
#[tsv(file_name = "title.episode.tsv.gz")]
pub struct TitleEpisode {
    #[tsv(column = "tconst", key)]
    pub episode_id: String,
    #[tsv(column = "parentTconst")]
    pub parent_id: String,
    pub season_number: Option<i32>,
    pub episode_number: Option<i32>,
}

pub type TitleEpisodeLoader = Loader<FlatIndex<TitleEpisode>>;

impl Loader<FlatIndex<TitleEpisode>> {
    pub fn get_episode(&self, episode_id: &str) -> Option<&TitleEpisode> {
        self.index().get(episode_id)
    }

    /// All episodes of a series; empty when it has none.
    pub fn get_episodes_by_parent_id(&self, parent_id: &str) -> Matches<'_, TitleEpisode> {
        self.index()
            .find_by(parent_id, |episode| episode.parent_id.as_str())
    }
}
