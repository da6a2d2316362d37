//! Titles (`title.basics.tsv.gz`).

use crate::TsvRecord;
use crate::index::{FlatIndex, Matches};
use crate::loader::Loader;

/// Genre names used in the snapshot's `genres` column.
pub const GENRES: &[&str] = &[
    "Action",
    "Adult",
    "Adventure",
    "Animation",
    "Biography",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Family",
    "Fantasy",
    "Film-Noir",
    "Game-Show",
    "History",
    "Horror",
    "Music",
    "Musical",
    "Mystery",
    "News",
    "Reality-TV",
    "Romance",
    "Sci-Fi",
    "Short",
    "Sport",
    "Talk-Show",
    "Thriller",
    "War",
    "Western",
];

/// Values of the `titleType` column.
pub const TITLE_TYPES: &[&str] = &[
    "movie",
    "short",
    "tvEpisode",
    "tvMiniSeries",
    "tvMovie",
    "tvPilot",
    "tvSeries",
    "tvShort",
    "tvSpecial",
    "video",
    "videoGame",
];

/// One title, keyed by `tconst`.
///
/// `genres` is never absent: `\N` decodes to an empty list.
#[derive(Debug, Clone, PartialEq, Eq, TsvRecord)]
#[tsv(file_name = "title.basics.tsv.gz")]
pub struct TitleBasics {
    #[tsv(column = "tconst", key)]
    pub title_id: String,
    pub title_type: String,
    pub primary_title: String,
    pub original_title: String,
    pub is_adult: bool,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub runtime_minutes: Option<i32>,
    pub genres: Vec<String>,
}

impl TitleBasics {
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

pub type TitleBasicsLoader = Loader<FlatIndex<TitleBasics>>;

impl Loader<FlatIndex<TitleBasics>> {
    pub fn get_title(&self, title_id: &str) -> Option<&TitleBasics> {
        self.index().get(title_id)
    }

    /// Case-insensitive substring match on the primary title.
    pub fn search_by_title(&self, title: &str) -> Matches<'_, TitleBasics> {
        self.index()
            .search_text(title, |basics| basics.primary_title.as_str())
    }
}
