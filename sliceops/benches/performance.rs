use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sliceops::{compact, delete, insert};

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("middle", size), size, |b, &size| {
            let base: Vec<u64> = (0..size as u64).collect();
            let values = [1u64, 2, 3, 4];
            b.iter(|| {
                let s = base.clone();
                black_box(insert(s, size / 2, black_box(&values)))
            });
        });
    }
    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("front_quarter", size), size, |b, &size| {
            let base: Vec<u64> = (0..size as u64).collect();
            b.iter(|| {
                let s = base.clone();
                black_box(delete(s, 0, size / 4))
            });
        });
    }
    group.finish();
}

fn bench_compact(c: &mut Criterion) {
    let mut group = c.benchmark_group("compact");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("paired_runs", size), size, |b, &size| {
            // Every element appears twice in a row; compact halves the input.
            let base: Vec<u64> = (0..size as u64).flat_map(|v| [v, v]).collect();
            b.iter(|| {
                let s = base.clone();
                black_box(compact(s))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_delete, bench_compact);
criterion_main!(benches);
