use criterion::Throughput;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use range_buckets::{buckets, Config};

fn buckets_default(c: &mut Criterion) {
    let mut group = c.benchmark_group("buckets");

    group.throughput(Throughput::Elements(1));

    group.bench_function("positive", |b| {
        b.iter(|| buckets(black_box(0.0), black_box(33.0), black_box(5)))
    });
    group.bench_function("straddling", |b| {
        b.iter(|| buckets(black_box(-20.0), black_box(33.0), black_box(5)))
    });
    group.bench_function("negative", |b| {
        b.iter(|| buckets(black_box(-20.0), black_box(-5.0), black_box(5)))
    });
    group.bench_function("small", |b| {
        b.iter(|| buckets(black_box(0.012), black_box(0.047), black_box(10)))
    });
}

fn layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    group.throughput(Throughput::Elements(1));

    let config = Config::default();

    group.bench_function("plan", |b| {
        b.iter(|| config.layout(black_box(0.0), black_box(33.0), black_box(5)))
    });

    let plan = config.layout(0.0, 1_000_000.0, 100).unwrap();

    group.bench_function("assemble (100)", |b| b.iter(|| plan.buckets()));
}

criterion_group!(benches, buckets_default, layout);
criterion_main!(benches);
