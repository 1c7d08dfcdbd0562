//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use binarytree::generate::{random_bst, random_tree};
use binarytree::{GeneratorConfig, PrettyPrintOptions, MAX_HEIGHT};

fn benchmark_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("inspect");
    for height in [3, 6, MAX_HEIGHT] {
        let config = GeneratorConfig::new(height).expect("valid height").with_perfect(true);
        let root = random_tree(&config, &mut StdRng::seed_from_u64(7));
        group.bench_with_input(BenchmarkId::from_parameter(height), &root, |b, root| {
            b.iter(|| black_box(root.inspect()));
        });
    }
    group.finish();

    let config = GeneratorConfig::new(MAX_HEIGHT).expect("valid height");
    let root = random_bst(&config, &mut StdRng::seed_from_u64(7));
    c.bench_function("properties_bst_h9", |b| {
        b.iter(|| black_box(root.properties()));
    });
}

fn benchmark_layout(c: &mut Criterion) {
    let config = GeneratorConfig::new(6).expect("valid height");
    let root = random_tree(&config, &mut StdRng::seed_from_u64(11));
    let indexed = PrettyPrintOptions::default().with_index(true);

    c.bench_function("pretty_h6", |b| {
        b.iter(|| black_box(root.pretty(&PrettyPrintOptions::default())));
    });
    c.bench_function("pretty_indexed_h6", |b| {
        b.iter(|| black_box(root.pretty(&indexed)));
    });
}

criterion_group!(benches, benchmark_analysis, benchmark_layout);
criterion_main!(benches);
