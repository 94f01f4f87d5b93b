/// Buffer inversion throughput benchmarks
///
/// Measures the in-memory complement transform on its own and the
/// transform-plus-write that the benchmark loop performs per iteration.
/// These help separate compute cost from filesystem cost in the reported
/// end-to-end numbers.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use invertir::invert;

fn bench_invert_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("invert_buffer");

    for size in [4 * 1024, 64 * 1024, 1024 * 1024] {
        let data = vec![0xA5u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(invert::invert_buffer(black_box(data))));
        });
    }

    group.finish();
}

fn bench_invert_and_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("invert_and_write");
    group.sample_size(20);

    let size = 1024 * 1024;
    let data = vec![0x5Au8; size];
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("inverted_0.bin");

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("1MiB", |b| {
        b.iter(|| {
            let inverted = invert::invert_buffer(black_box(&data));
            std::fs::write(&path, &inverted).expect("Failed to write benchmark file");
        });
    });

    group.finish();
}

criterion_group!(benches, bench_invert_buffer, bench_invert_and_write);
criterion_main!(benches);
