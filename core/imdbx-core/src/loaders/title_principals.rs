//! Cast and crew (`title.principals.tsv.gz`), nested by title then ordering.

use crate::TsvRecord;
use crate::index::{NestedIndex, NestedMatches, OrderedMap};
use crate::loader::Loader;

#[derive(Debug, Clone, PartialEq, Eq, TsvRecord)]
#[tsv(file_name = "title.principals.tsv.gz")]
pub struct TitlePrincipal {
    #[tsv(column = "tconst", key)]
    pub title_id: String,
    #[tsv(ordering)]
    pub ordering: i32,
    #[tsv(column = "nconst")]
    pub person_id: String,
    pub category: String,
    pub job: Option<String>,
    pub characters: Option<String>,
}

pub type TitlePrincipalsLoader = Loader<NestedIndex<TitlePrincipal>>;

impl Loader<NestedIndex<TitlePrincipal>> {
    pub fn get_principals(&self, title_id: &str) -> Option<&OrderedMap<i32, TitlePrincipal>> {
        self.index().get(title_id)
    }

    pub fn get_principal(&self, title_id: &str, ordering: i32) -> Option<&TitlePrincipal> {
        self.index().get_entry(title_id, ordering)
    }

    /// Every credit of one person across all titles, grouped by title.
    pub fn get_principals_by_person_id(
        &self,
        person_id: &str,
    ) -> NestedMatches<'_, TitlePrincipal> {
        self.index()
            .find_by(person_id, |principal| principal.person_id.as_str())
    }
}
