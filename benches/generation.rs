//! Performance measurement for complete grid generation

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use catwalk::algorithm::generator::{GeneratorOptions, generate};
use catwalk::algorithm::selection::RandomSelector;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Measures time to generate one default-sized grid including all walks
fn bench_default_generation(c: &mut Criterion) {
    c.bench_function("generate_default_grid", |b| {
        let mut selector = RandomSelector::new(12345);
        b.iter(|| {
            let Ok(generation) = generate(GeneratorOptions::default(), &mut selector) else {
                return;
            };
            black_box(generation.walks_made);
        });
    });
}

/// Measures a large grid with maximal walk chaining
fn bench_large_busy_grid(c: &mut Criterion) {
    let options = GeneratorOptions {
        cat_chance: Some(100),
        min_steps: Some(40),
        max_steps: Some(60),
        grid_width: Some(48),
        grid_height: Some(27),
        ..Default::default()
    };
    c.bench_function("generate_large_busy_grid", |b| {
        let mut selector = RandomSelector::new(12345);
        b.iter(|| {
            let Ok(generation) = generate(options, &mut selector) else {
                return;
            };
            black_box(generation.grid.count(catwalk::algorithm::parts::Part::Cross));
        });
    });
}

criterion_group!(benches, bench_default_generation, bench_large_busy_grid);
criterion_main!(benches);
