//! Ratings (`title.ratings.tsv.gz`).

use std::cmp::Ordering;

use crate::TsvRecord;
use crate::index::FlatIndex;
use crate::loader::Loader;

#[derive(Debug, Clone, PartialEq, TsvRecord)]
#[tsv(file_name = "title.ratings.tsv.gz")]
pub struct TitleRating {
    #[tsv(column = "tconst", key)]
    pub title_id: String,
    pub average_rating: f64,
    pub num_votes: u32,
}

impl TitleRating {
    /// Rating truncated to thousandths, the precision rankings compare at.
    fn rating_millis(&self) -> i64 {
        (self.average_rating * 1000.0) as i64
    }
}

pub type TitleRatingsLoader = Loader<FlatIndex<TitleRating>>;

impl Loader<FlatIndex<TitleRating>> {
    pub fn get_rating(&self, title_id: &str) -> Option<&TitleRating> {
        self.index().get(title_id)
    }

    /// Highest rated first, ties broken by vote count. `limit == 0` returns everything.
    pub fn top_rated(&self, limit: usize) -> Vec<&TitleRating> {
        self.ranked(limit, |a, b| {
            b.rating_millis()
                .cmp(&a.rating_millis())
                .then_with(|| b.num_votes.cmp(&a.num_votes))
        })
    }

    /// Most voted first, ties broken by rating. `limit == 0` returns everything.
    pub fn top_voted(&self, limit: usize) -> Vec<&TitleRating> {
        self.ranked(limit, |a, b| {
            b.num_votes
                .cmp(&a.num_votes)
                .then_with(|| b.rating_millis().cmp(&a.rating_millis()))
        })
    }

    fn ranked<F>(&self, limit: usize, compare: F) -> Vec<&TitleRating>
    where
        F: Fn(&TitleRating, &TitleRating) -> Ordering,
    {
        let mut ratings: Vec<&TitleRating> = self.index().values().collect();
        // stable: equal ranks keep file order
        ratings.sort_by(|a, b| compare(*a, *b));
        if limit > 0 {
            ratings.truncate(limit);
        }
        ratings
    }
}
