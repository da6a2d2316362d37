//! derive(TsvRecord) 매크로 테스트

use imdbx_core::record::{FlatRecord, NestedRecord, ParseFieldError, TsvRecord as _};
use imdbx_derive::TsvRecord;

#[derive(Debug, PartialEq, TsvRecord)]
#[tsv(file_name = "title.episode.tsv.gz")]
pub struct Episode {
    #[tsv(column = "tconst", key)]
    pub episode_id: String,
    #[tsv(column = "parentTconst")]
    pub parent_id: String,
    pub season_number: Option<i32>,
    pub episode_number: Option<i32>,
}

#[derive(Debug, PartialEq, TsvRecord)]
pub struct Credit {
    #[tsv(key)]
    pub title_id: String,
    #[tsv(ordering)]
    pub ordering: i32,
    #[tsv(separator = "|")]
    pub roles: Vec<String>,
    pub r#type: Option<String>,
}

#[derive(Debug, TsvRecord)]
pub struct Unkeyed {
    pub value: u64,
}

#[test]
fn test_header_from_field_names() {
    assert_eq!(
        Episode::HEADER,
        &["tconst", "parentTconst", "seasonNumber", "episodeNumber"]
    );
    // raw 식별자는 접두사 없이
    assert_eq!(Credit::HEADER, &["titleId", "ordering", "roles", "type"]);
}

#[test]
fn test_file_name() {
    assert_eq!(Episode::FILE_NAME, "title.episode.tsv.gz");
    assert_eq!(Credit::FILE_NAME, "credit.tsv.gz");
}

#[test]
fn test_from_fields() {
    let episode = Episode::from_fields(&["tt2", "tt1", "\\N", "7"]).unwrap();
    assert_eq!(
        episode,
        Episode {
            episode_id: "tt2".to_string(),
            parent_id: "tt1".to_string(),
            season_number: None,
            episode_number: Some(7),
        }
    );
    assert_eq!(episode.key(), "tt2");
}

#[test]
fn test_nested_keys_and_separator() {
    let credit = Credit::from_fields(&["tt9", "3", "actor|producer", "\\N"]).unwrap();
    assert_eq!(credit.primary_key(), "tt9");
    assert_eq!(credit.ordering(), 3);
    assert_eq!(credit.roles, ["actor", "producer"]);
    assert_eq!(credit.r#type, None);
}

#[test]
fn test_field_error_names_column() {
    let err = Credit::from_fields(&["tt9", "third", "actor", "\\N"]).unwrap_err();
    assert_eq!(err.column, "ordering");
    assert!(matches!(err.kind, ParseFieldError::Integer { .. }));

    let err = Unkeyed::from_fields(&["\\N"]).unwrap_err();
    assert_eq!(err.kind, ParseFieldError::UnexpectedNull);
}

#[test]
fn test_unkeyed_record() {
    assert_eq!(Unkeyed::HEADER, &["value"]);
    assert_eq!(Unkeyed::from_fields(&["42"]).unwrap().value, 42);
}
