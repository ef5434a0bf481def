use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use letterveil::{Hider, Seed};
use std::hint::black_box;

fn sample_text(size: usize) -> String {
    "Mixed text 123 with 数字 and ascii. "
        .chars()
        .cycle()
        .take(size)
        .collect()
}

fn bench_hide(c: &mut Criterion) {
    let hider = Hider::builder().key("bench key").build();
    let seed = Seed::new(42).unwrap();
    let mut group = c.benchmark_group("hide");

    for size in [16, 256, 4096].iter() {
        let text = sample_text(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| hider.hide_with_seed(black_box(text), seed));
        });
    }

    group.finish();
}

fn bench_recover(c: &mut Criterion) {
    let hider = Hider::builder().key("bench key").build();
    let seed = Seed::new(42).unwrap();
    let mut group = c.benchmark_group("recover");

    for size in [16, 256, 4096].iter() {
        let hidden = hider.hide_with_seed(&sample_text(*size), seed);
        group.throughput(Throughput::Bytes(hidden.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &hidden, |b, hidden| {
            b.iter(|| hider.recover(black_box(hidden)).unwrap());
        });
    }

    group.finish();
}

fn bench_compress(c: &mut Criterion) {
    let hider = Hider::new();
    let hidden = hider.hide_with_seed(&sample_text(4096), Seed::new(42).unwrap());
    let compressed = hider.compress(&hidden).unwrap();

    let mut group = c.benchmark_group("compression");
    group.throughput(Throughput::Bytes(hidden.len() as u64));
    group.bench_function("compress", |b| {
        b.iter(|| hider.compress(black_box(&hidden)).unwrap());
    });
    group.bench_function("decompress", |b| {
        b.iter(|| hider.decompress(black_box(&compressed)).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_hide, bench_recover, bench_compress);
criterion_main!(benches);
