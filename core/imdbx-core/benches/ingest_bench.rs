// 수집 처리량 벤치마크
//
// Section 1: flat index (name.basics 형식)
// Section 2: nested index (title.principals 형식)
// Section 3: 조회 (key lookup, substring scan)

use std::fs::File;
use std::io::Write;
use std::path::Path;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use flate2::Compression;
use flate2::write::GzEncoder;
use imdbx_core::{NameBasicsLoader, Person, Pipeline, TitlePrincipalsLoader};
use tempfile::TempDir;

const ROWS: u64 = 50_000;

fn write_names(path: &Path) {
    let mut encoder = GzEncoder::new(File::create(path).unwrap(), Compression::fast());
    writeln!(
        encoder,
        "nconst\tprimaryName\tbirthYear\tdeathYear\tprimaryProfession\tknownForTitles"
    )
    .unwrap();
    for i in 0..ROWS {
        let death = if i % 3 == 0 { "\\N".to_string() } else { (1950 + i % 70).to_string() };
        writeln!(
            encoder,
            "nm{i:07}\tPerson {i}\t{}\t{death}\tactor,producer\ttt{:07},tt{:07}",
            1900 + i % 100,
            i,
            i + 1
        )
        .unwrap();
    }
    encoder.finish().unwrap();
}

fn write_principals(path: &Path) {
    let mut encoder = GzEncoder::new(File::create(path).unwrap(), Compression::fast());
    writeln!(encoder, "tconst\tordering\tnconst\tcategory\tjob\tcharacters").unwrap();
    for i in 0..ROWS {
        writeln!(
            encoder,
            "tt{:07}\t{}\tnm{:07}\tactor\t\\N\t[\"Role {i}\"]",
            i / 10,
            i % 10,
            i % 5_000
        )
        .unwrap();
    }
    encoder.finish().unwrap();
}

// ═══════════════════════════════════════════════════════════════════════════
// Section 1 + 2: 수집
// ═══════════════════════════════════════════════════════════════════════════

fn bench_ingest(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let names = dir.path().join("name.basics.tsv.gz");
    let principals = dir.path().join("title.principals.tsv.gz");
    write_names(&names);
    write_principals(&principals);

    let mut group = c.benchmark_group("ingest");
    group.throughput(Throughput::Elements(ROWS));
    group.sample_size(10);

    group.bench_function("flat_name_basics", |b| {
        b.iter(|| NameBasicsLoader::open(black_box(&names)).unwrap())
    });

    group.bench_function("flat_name_basics_filtered", |b| {
        b.iter(|| {
            NameBasicsLoader::load(
                black_box(&names),
                Pipeline::new().with_filter(|p: &Person| p.death_year.is_none()),
            )
            .unwrap()
        })
    });

    group.bench_function("nested_principals", |b| {
        b.iter(|| TitlePrincipalsLoader::open(black_box(&principals)).unwrap())
    });

    group.finish();
}

// ═══════════════════════════════════════════════════════════════════════════
// Section 3: 조회
// ═══════════════════════════════════════════════════════════════════════════

fn bench_lookup(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("name.basics.tsv.gz");
    write_names(&path);
    let names = NameBasicsLoader::open(&path).unwrap();

    let mut group = c.benchmark_group("lookup");

    group.bench_function("get_person_by_id", |b| {
        let mut counter = 0u64;
        b.iter(|| {
            let key = format!("nm{:07}", counter % ROWS);
            counter += 1;
            black_box(names.get_person_by_id(&key));
        })
    });

    group.bench_function("search_by_name", |b| {
        b.iter(|| black_box(names.search_by_name(black_box("person 4999"))).len())
    });

    group.finish();
}

criterion_group!(benches, bench_ingest, bench_lookup);
criterion_main!(benches);
