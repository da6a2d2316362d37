//! Localized titles (`title.akas.tsv.gz`), nested by title then ordering.

use crate::TsvRecord;
use crate::index::{NestedIndex, OrderedMap};
use crate::loader::Loader;

/// One localized title. `types` and `attributes` are `", "`-separated in the file.
#[derive(Debug, Clone, PartialEq, Eq, TsvRecord)]
#[tsv(file_name = "title.akas.tsv.gz")]
pub struct TitleAka {
    #[tsv(key)]
    pub title_id: String,
    #[tsv(ordering)]
    pub ordering: i32,
    pub title: String,
    pub region: Option<String>,
    pub language: Option<String>,
    #[tsv(separator = ", ")]
    pub types: Option<Vec<String>>,
    #[tsv(separator = ", ")]
    pub attributes: Option<Vec<String>>,
    pub is_original_title: bool,
}

pub type TitleAkaLoader = Loader<NestedIndex<TitleAka>>;

impl Loader<NestedIndex<TitleAka>> {
    /// Every localization of a title, by ordering.
    pub fn get_akas(&self, title_id: &str) -> Option<&OrderedMap<i32, TitleAka>> {
        self.index().get(title_id)
    }

    pub fn get_aka(&self, title_id: &str, ordering: i32) -> Option<&TitleAka> {
        self.index().get_entry(title_id, ordering)
    }
}
