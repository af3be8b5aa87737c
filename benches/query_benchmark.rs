use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use std::io::Cursor;
use std::sync::Arc;
use tabdex::core::config::IndexConfig;
use tabdex::core::types::RecordId;
use tabdex::index::builder::IndexBuilder;
use tabdex::index::posting::PostingList;
use tabdex::query::processor::QueryProcessor;

/// Helper to generate a tab-separated corpus of random word soup
fn synthetic_corpus(lines: usize) -> String {
    let words = ["the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog"];
    let mut rng = rand::thread_rng();
    let mut corpus = String::new();
    for i in 0..lines {
        let description: String = (0..20)
            .map(|_| words[rng.gen_range(0..words.len())])
            .collect::<Vec<_>>()
            .join(" ");
        corpus.push_str(&format!(
            "Record {}\t{}\t{}\t{}\t{}\n",
            i,
            description,
            i % 100,
            "3.5",
            i % 10
        ));
    }
    corpus
}

/// Benchmark the two-pointer posting list merge
fn bench_intersect(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersect");
    for size in [1_000u32, 10_000, 100_000].iter() {
        let a = PostingList::from_ids((1..=*size).map(RecordId::new).collect());
        let b = PostingList::from_ids((1..=*size).step_by(3).map(RecordId::new).collect());
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bencher, _| {
            bencher.iter(|| black_box(a.intersect(&b)));
        });
    }
    group.finish();
}

/// Benchmark index construction over a synthetic corpus
fn bench_build(c: &mut Criterion) {
    let corpus = synthetic_corpus(10_000);
    let builder = IndexBuilder::new(IndexConfig::default());
    c.bench_function("build_10k_records", |b| {
        b.iter(|| {
            black_box(
                builder
                    .build_from_reader(Cursor::new(corpus.as_bytes()))
                    .unwrap(),
            )
        });
    });
}

/// Benchmark multi-keyword AND queries against a built index
fn bench_query(c: &mut Criterion) {
    let corpus = synthetic_corpus(10_000);
    let index = IndexBuilder::new(IndexConfig::default())
        .build_from_reader(Cursor::new(corpus.as_bytes()))
        .unwrap();
    let processor = QueryProcessor::new(Arc::new(index));

    c.bench_function("two_term_query", |b| {
        b.iter(|| black_box(processor.process(&["quick", "dog"])));
    });

    c.bench_function("four_term_query", |b| {
        b.iter(|| black_box(processor.process(&["quick", "dog", "lazy", "fox"])));
    });
}

criterion_group!(benches, bench_intersect, bench_build, bench_query);
criterion_main!(benches);
