//! # imdbx: IMDb snapshot loaders
//!
//! imdbx는 gzip으로 압축된 IMDb TSV 스냅샷 파일을 스트리밍으로 읽어 메모리 인덱스를 만듭니다.
//! Every file goes through the same ingestion path; the schemas differ only in their
//! field layout, declared with `#[derive(TsvRecord)]`.
//!
//! ## 주요 특징
//!
//! - **Streaming decompression**: one buffered line at a time, never the whole file
//! - **Strict header check**: a renamed or missing column aborts the load
//! - **Null sentinel**: `\N` decodes to `None`, never to an empty string or zero
//! - **Two index shapes**: flat (key → record) and nested (key → ordering → record)
//! - **Filter/transform pipeline** applied before indexing
//!
//! ## 빠른 시작
//!
//! ```rust,no_run
//! use imdbx_core::{NameBasicsLoader, Person, Pipeline};
//!
//! # fn main() -> imdbx_core::ImdbxResult<()> {
//! // 파일 로드 (출생 연도가 있는 인물만)
//! let names = NameBasicsLoader::load(
//!     "data/name.basics.tsv.gz",
//!     Pipeline::new().with_filter(|person: &Person| person.birth_year.is_some()),
//! )?;
//!
//! // 키로 조회
//! if let Some(person) = names.get_person_by_id("nm0000102") {
//!     println!("{}", person.primary_name);
//! }
//!
//! // 대소문자 무시 부분 문자열 검색
//! for (id, person) in names.search_by_name("bacon") {
//!     println!("{id}: {}", person.primary_name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### 여러 파일 병렬 로드
//!
//! ```rust,no_run
//! use imdbx_core::{DatasetBuilder, DatasetConfig, Pipeline, Table, TitleBasics};
//!
//! # fn main() -> imdbx_core::ImdbxResult<()> {
//! let config = DatasetConfig::from_env()?;
//! let dataset = DatasetBuilder::new()
//!     .table(Table::TitleRatings)
//!     .titles(Pipeline::new().with_filter(|title: &TitleBasics| title.title_type == "movie"))
//!     .load(&config)?;
//!
//! if let Some(ratings) = &dataset.ratings {
//!     for rating in ratings.top_rated(10) {
//!         println!("{} {:.1}", rating.title_id, rating.average_rating);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## 모듈 구조
//!
//! - [`source`]: gzip line source
//! - [`header`]: header validation
//! - [`record`]: row parsing and field decoding
//! - [`pipeline`]: filter/transform stages
//! - [`index`]: flat and nested indexes
//! - [`loader`]: generic ingestion driver
//! - [`loaders`]: schema bindings and their lookup APIs
//! - [`dataset`]: parallel loading of several files
//! - [`config`], [`logging`], [`error`]

// `#[derive(TsvRecord)]` expands to `::imdbx_core::...` paths, also inside this crate.
extern crate self as imdbx_core;

pub mod config;
pub mod dataset;
pub mod error;
pub mod header;
pub mod index;
pub mod loader;
pub mod loaders;
pub mod logging;
pub mod pipeline;
pub mod record;
pub mod source;

pub use config::{DatasetConfig, IngestConfig};
pub use dataset::{Dataset, DatasetBuilder, Table};
pub use error::{ImdbxError, ImdbxResult};
pub use imdbx_derive::TsvRecord;
pub use index::{FlatIndex, NestedIndex, OrderedMap, RecordIndex};
pub use loader::{IngestStats, Loader};
pub use loaders::{
    GENRES, NameBasicsLoader, Person, TITLE_TYPES, TitleAka, TitleAkaLoader, TitleBasics,
    TitleBasicsLoader, TitleEpisode, TitleEpisodeLoader, TitlePrincipal, TitlePrincipalsLoader,
    TitleRating, TitleRatingsLoader,
};
pub use pipeline::Pipeline;
pub use record::{FlatRecord, NestedRecord, TsvRecord};
pub use source::LineSource;
