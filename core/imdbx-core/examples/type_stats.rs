//! 제목 유형별 평점 통계 예제
//!
//! 실행: IMDBX_DATA_DIR=data cargo run --example type_stats --features logging

use std::collections::HashMap;

use imdbx_core::{DatasetBuilder, DatasetConfig, Pipeline, Table, TitleBasics};

fn main() -> imdbx_core::ImdbxResult<()> {
    imdbx_core::logging::init();

    let config = DatasetConfig::from_env()?;
    println!("=== 제목 유형별 통계 ({}) ===\n", config.data_dir.display());

    // 통계에 필요 없는 필드는 비워서 메모리 절약
    let dataset = DatasetBuilder::new()
        .titles(Pipeline::new().with_transform(|title: TitleBasics| TitleBasics {
            original_title: String::new(),
            ..title
        }))
        .table(Table::TitleRatings)
        .load(&config)?;

    let (Some(titles), Some(ratings)) = (&dataset.titles, &dataset.ratings) else {
        return Ok(());
    };

    // 유형 → (개수, 평점 합, 투표 합)
    let mut by_type: HashMap<&str, (u64, f64, u64)> = HashMap::new();
    for (title_id, rating) in ratings.index().iter() {
        let Some(title) = titles.get_title(title_id) else {
            continue;
        };
        let entry = by_type.entry(title.title_type.as_str()).or_default();
        entry.0 += 1;
        entry.1 += rating.average_rating;
        entry.2 += u64::from(rating.num_votes);
    }

    let mut rows: Vec<_> = by_type.into_iter().collect();
    rows.sort_by(|a, b| b.1.0.cmp(&a.1.0));

    println!("{:<14} {:>10} {:>8} {:>12}", "type", "count", "rating", "avg votes");
    for (title_type, (count, rating_sum, vote_sum)) in rows {
        println!(
            "{:<14} {:>10} {:>8.2} {:>12}",
            title_type,
            count,
            rating_sum / count as f64,
            vote_sum / count
        );
    }

    println!("\n=== 최고 평점 5개 ===");
    for rating in ratings.top_rated(5) {
        let name = titles
            .get_title(&rating.title_id)
            .map_or("?", |t| t.primary_title.as_str());
        println!(
            "{} {:.1} ({} votes) {name}",
            rating.title_id, rating.average_rating, rating.num_votes
        );
    }

    Ok(())
}
