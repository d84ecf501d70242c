//! Benchmarks for rapid_similarity

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rapid_similarity::*;

/// Sample text for benchmarking
const SAMPLE_TEXT: &str = r#"
Machine learning is a subset of artificial intelligence (AI) that provides systems
the ability to automatically learn and improve from experience without being explicitly
programmed. Machine learning focuses on the development of computer programs that can
access data and use it to learn for themselves.

Deep learning is a subset of machine learning that uses artificial neural networks
with representation learning. The learning can be supervised, semi-supervised or
unsupervised. Deep learning has been applied to various fields including computer
vision, speech recognition, natural language processing, and drug design.
"#;

/// Deterministic variants of the sample: every `k`-th token is replaced.
fn corpus(count: usize) -> Vec<Vec<String>> {
    let base = Tokenizer::new().tokenize(SAMPLE_TEXT);
    (0..count)
        .map(|k| {
            base.iter()
                .enumerate()
                .map(|(i, t)| {
                    if (i + 1) % (k + 2) == 0 {
                        format!("{}s", t)
                    } else {
                        t.clone()
                    }
                })
                .collect()
        })
        .collect()
}

fn benchmark_edit_distance(c: &mut Criterion) {
    let docs = corpus(2);

    let mut group = c.benchmark_group("edit_distance_strategy");
    for strategy in [MatrixStrategy::Dense, MatrixStrategy::TwoRow] {
        let engine = WeightedEditDistance::new(NormalizedLevenshtein).with_strategy(strategy);
        group.bench_function(format!("{:?}", strategy), |b| {
            b.iter(|| engine.distance(black_box(&docs[0]), black_box(&docs[1])))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("edit_distance_by_length");
    for size in [1usize, 2, 4].iter() {
        let a: Vec<String> = docs[0].iter().cycle().take(docs[0].len() * size).cloned().collect();
        let b: Vec<String> = docs[1].iter().cycle().take(docs[1].len() * size).cloned().collect();
        group.throughput(Throughput::Elements((a.len() * b.len()) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &(a, b), |bench, (a, b)| {
            bench.iter(|| weighted_edit_distance(black_box(a), black_box(b), &UnitDistance))
        });
    }
    group.finish();
}

fn benchmark_lcs(c: &mut Criterion) {
    let docs = corpus(2);

    let mut group = c.benchmark_group("lcs");
    group.bench_function("table_backtrack", |b| {
        b.iter(|| longest_common_subsequence(black_box(&docs[0]), black_box(&docs[1])))
    });
    group.bench_function("linear_space", |b| {
        b.iter(|| longest_common_subsequence_linear_space(black_box(&docs[0]), black_box(&docs[1])))
    });
    group.finish();
}

fn benchmark_compare_all(c: &mut Criterion) {
    let docs = corpus(24);

    let mut group = c.benchmark_group("compare_all_parallel");
    group.throughput(Throughput::Elements(pair_count(docs.len()) as u64));
    group.bench_function("sequential", |b| {
        let comparator = PairwiseComparator::with_config(
            NormalizedLevenshtein,
            CompareConfig::new().with_parallel(false),
        );
        b.iter(|| comparator.compare_all(black_box(&docs)).map(|r| r.len()))
    });
    group.bench_function("parallel", |b| {
        let comparator = PairwiseComparator::with_config(
            NormalizedLevenshtein,
            CompareConfig::new().with_parallel_min_pairs(1),
        );
        b.iter(|| comparator.compare_all(black_box(&docs)).map(|r| r.len()))
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_edit_distance,
    benchmark_lcs,
    benchmark_compare_all
);
criterion_main!(benches);
