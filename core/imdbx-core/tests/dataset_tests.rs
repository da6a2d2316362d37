// Dataset 통합 테스트: 여러 파일 병렬 로드

mod common;

use common::*;
use imdbx_core::{
    Dataset, DatasetBuilder, DatasetConfig, ImdbxError, IngestConfig, Pipeline, Table,
    TitleRating,
};
use tempfile::tempdir;

fn full_dataset_dir() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    people(dir.path());
    titles(dir.path());
    akas(dir.path());
    episodes(dir.path());
    principals(dir.path());
    ratings(dir.path());
    dir
}

#[test]
fn load_all_tables() {
    let dir = full_dataset_dir();
    let config = DatasetConfig::new(dir.path());

    let dataset = Dataset::load_all(&config).unwrap();
    assert_eq!(dataset.tables(), Table::ALL.to_vec());

    let names = dataset.names.as_ref().unwrap();
    let principals = dataset.principals.as_ref().unwrap();
    let titles = dataset.titles.as_ref().unwrap();

    // 인물 → 출연작 → 제목
    let credits = principals.get_principals_by_person_id("nm0000158");
    let mut movies: Vec<&str> = credits
        .keys()
        .filter_map(|id| titles.get_title(id))
        .map(|t| t.primary_title.as_str())
        .collect();
    movies.sort();
    assert_eq!(movies, vec!["Forrest Gump", "Sleepless in Seattle"]);
    assert_eq!(names.get_person_by_id("nm0000158").unwrap().primary_name, "Tom Hanks");
}

#[test]
fn selected_tables_with_pipelines() {
    let dir = full_dataset_dir();
    let config = DatasetConfig::new(dir.path())
        .with_ingest(IngestConfig::default().with_read_buffer_bytes(1024));

    let dataset = DatasetBuilder::new()
        .ratings(Pipeline::new().with_filter(|r: &TitleRating| r.num_votes >= 1000))
        .table(Table::TitleEpisode)
        .load(&config)
        .unwrap();

    assert_eq!(dataset.tables(), vec![Table::TitleEpisode, Table::TitleRatings]);
    assert!(dataset.names.is_none());
    assert_eq!(dataset.ratings.as_ref().unwrap().len(), 4);
    assert_eq!(dataset.episodes.as_ref().unwrap().len(), 4);
}

#[test]
fn one_bad_file_fails_the_dataset() {
    let dir = full_dataset_dir();
    fixture(
        dir.path(),
        Table::TitleAkas.file_name(),
        AKA_HEADER,
        &["tt1\t0\tA\t\\N\t\\N\t\\N\t\\N\t0", "tt1\t0\tB\t\\N\t\\N\t\\N\t\\N\t0"],
    );

    let err = Dataset::load_all(&DatasetConfig::new(dir.path())).unwrap_err();
    assert!(matches!(err, ImdbxError::DuplicateKey { .. }));
    assert!(err.path().unwrap().ends_with("title.akas.tsv.gz"));
}
