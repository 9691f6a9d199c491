use circmean::{Reading, average, average_with_trig};
use criterion::{Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;

fn generate_readings(n_rdgs: usize) -> Vec<Reading> {
    let mut rng = rand::rng();
    (0..n_rdgs)
        .map(|_| Reading::new(rng.random_range(0.0..360.0), 1.0))
        .collect()
}

fn bench_averages(c: &mut Criterion) {
    let readings = generate_readings(100);

    let mut group = c.benchmark_group("average (100 readings)");

    group.bench_function("complex", |b| b.iter(|| average(black_box(&readings))));
    group.bench_function("trig", |b| {
        b.iter(|| average_with_trig(black_box(&readings)))
    });

    group.finish();
}

criterion_group!(benches, bench_averages);
criterion_main!(benches);
