//! Criterion benchmarks for the unique-draw generator.

use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lotto_core::sampler::{DrawRng, GeneratorConfig, UniqueDrawGenerator};
use lotto_core::types::{Draw, Rules};

/// Builds a history of the given size, the way a loaded data file would
/// supply it.
fn synthetic_history(rules: &Rules, size: usize) -> HashSet<Draw> {
    let mut rng = DrawRng::from_seed(0xD5AA);
    let mut history = HashSet::with_capacity(size);
    while history.len() < size {
        history.insert(rng.sample_draw(rules));
    }
    history
}

fn bench_generate(c: &mut Criterion) {
    let rules = Rules::powerball();
    let generator = UniqueDrawGenerator::new(rules);
    // Roughly the size of the real historical record.
    let history = synthetic_history(&rules, 1_700);

    c.bench_function("generate_5_draws_1700_history", |b| {
        let config = GeneratorConfig::builder().count(5).seed(42).build().unwrap();
        b.iter(|| {
            let draws = generator.generate(black_box(&history), &config).unwrap();
            black_box(draws)
        })
    });

    c.bench_function("generate_50_draws_1700_history", |b| {
        let config = GeneratorConfig::builder().count(50).seed(42).build().unwrap();
        b.iter(|| {
            let draws = generator.generate(black_box(&history), &config).unwrap();
            black_box(draws)
        })
    });
}

fn bench_total_space(c: &mut Criterion) {
    let rules = Rules::powerball();
    c.bench_function("total_space_powerball", |b| {
        b.iter(|| black_box(rules.total_space()))
    });
}

criterion_group!(benches, bench_generate, bench_total_space);
criterion_main!(benches);
