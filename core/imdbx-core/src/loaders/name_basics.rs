//! People (`name.basics.tsv.gz`).

use crate::TsvRecord;
use crate::index::{FlatIndex, Matches};
use crate::loader::Loader;

/// One person, keyed by `nconst`.
#[derive(Debug, Clone, PartialEq, Eq, TsvRecord)]
#[tsv(file_name = "name.basics.tsv.gz")]
pub struct Person {
    #[tsv(column = "nconst", key)]
    pub person_id: String,
    pub primary_name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub primary_profession: Option<Vec<String>>,
    pub known_for_titles: Option<Vec<String>>,
}

pub type NameBasicsLoader = Loader<FlatIndex<Person>>;

impl Loader<FlatIndex<Person>> {
    pub fn get_person_by_id(&self, person_id: &str) -> Option<&Person> {
        self.index().get(person_id)
    }

    /// Case-insensitive substring match on the primary name.
    pub fn search_by_name(&self, name: &str) -> Matches<'_, Person> {
        self.index().search_text(name, |person| person.primary_name.as_str())
    }
}
