// 필드 디코딩 속성 테스트 (proptest)

use std::path::Path;

use imdbx_core::record::{FromField, NULL_SENTINEL, parse_row};
use imdbx_core::source::Line;
use imdbx_core::{TitleEpisode, TitleRating};
use proptest::prelude::*;

proptest! {
    #[test]
    fn optional_integers_round_trip(value in any::<i32>()) {
        let decoded = Option::<i32>::from_field(&value.to_string(), ",").unwrap();
        prop_assert_eq!(decoded, Some(value));
    }

    #[test]
    fn non_numeric_integers_fail(raw in "[a-zA-Z]{1,8}") {
        prop_assert!(Option::<i32>::from_field(&raw, ",").is_err());
        prop_assert!(i32::from_field(&raw, ",").is_err());
    }

    #[test]
    fn booleans_only_accept_one(raw in "[^\t\n]{0,4}") {
        prop_assert_eq!(bool::from_field(&raw, ",").unwrap(), raw == "1");
    }

    #[test]
    fn optional_strings_keep_content(raw in "[^\t\n]{0,16}") {
        let decoded = Option::<String>::from_field(&raw, ",").unwrap();
        if raw == NULL_SENTINEL {
            prop_assert_eq!(decoded, None);
        } else {
            prop_assert_eq!(decoded, Some(raw));
        }
    }

    #[test]
    fn lists_split_back_into_items(items in prop::collection::vec("[a-z]{1,6}", 1..6)) {
        let joined = items.join(", ");
        let decoded = Option::<Vec<String>>::from_field(&joined, ", ").unwrap();
        prop_assert_eq!(decoded, Some(items));
    }

    #[test]
    fn episode_rows_parse(
        id in "tt[0-9]{7}",
        parent in "tt[0-9]{7}",
        season in prop::option::of(0i32..100),
        episode in prop::option::of(0i32..10_000),
    ) {
        let show = |v: Option<i32>| v.map_or(NULL_SENTINEL.to_string(), |n| n.to_string());
        let text = format!("{id}\t{parent}\t{}\t{}", show(season), show(episode));
        let record: TitleEpisode =
            parse_row(Path::new("title.episode.tsv.gz"), &Line { number: 2, text: &text }).unwrap();

        prop_assert_eq!(record.episode_id, id);
        prop_assert_eq!(record.parent_id, parent);
        prop_assert_eq!(record.season_number, season);
        prop_assert_eq!(record.episode_number, episode);
    }

    #[test]
    fn extra_or_missing_fields_are_rejected(extra in 1usize..4) {
        let mut text = "tt0000001\t5.0\t10".to_string();
        for _ in 0..extra {
            text.push_str("\tx");
        }
        let line = Line { number: 2, text: &text };
        prop_assert!(parse_row::<TitleRating>(Path::new("r.tsv.gz"), &line).is_err());

        let line = Line { number: 2, text: "tt0000001\t5.0" };
        prop_assert!(parse_row::<TitleRating>(Path::new("r.tsv.gz"), &line).is_err());
    }
}
