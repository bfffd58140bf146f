use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use seq_diff::{DiffConfig, diff_slices};
use std::time::Duration;

const MAX_BENCH_TIME_SECS: u64 = 30;
const WARMUP_SECS: u64 = 3;
const SAMPLE_SIZE: usize = 10;

fn make_sequence(len: usize, alphabet: u32, seed: u32) -> Vec<u32> {
    let mut x = seed | 1;
    (0..len)
        .map(|_| {
            x = x.wrapping_mul(1664525).wrapping_add(1013904223);
            (x >> 16) % alphabet
        })
        .collect()
}

fn make_repetitive_sequence(len: usize, pattern_length: usize) -> Vec<u32> {
    (0..len).map(|i| (i % pattern_length) as u32).collect()
}

fn bench_identical_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("identical_sequences");
    group.measurement_time(Duration::from_secs(MAX_BENCH_TIME_SECS));
    group.warm_up_time(Duration::from_secs(WARMUP_SECS));
    group.sample_size(SAMPLE_SIZE);

    for size in [1_000usize, 10_000, 100_000].iter() {
        let left = make_sequence(*size, 1 << 16, 0x1234_5678);
        let right = left.clone();
        let config = DiffConfig::default();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("elements", size), size, move |b, _| {
            b.iter(|| {
                let blocks = diff_slices(&left, &right, &config).expect("diff should succeed");
                criterion::black_box(blocks);
            });
        });
    }
    group.finish();
}

fn bench_single_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_edit");
    group.measurement_time(Duration::from_secs(MAX_BENCH_TIME_SECS));
    group.warm_up_time(Duration::from_secs(WARMUP_SECS));
    group.sample_size(SAMPLE_SIZE);

    for size in [1_000usize, 10_000, 100_000].iter() {
        let left = make_sequence(*size, 1 << 16, 0x1234_5678);
        let mut right = left.clone();
        right[size / 2] = u32::MAX;
        let config = DiffConfig::default();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("elements", size), size, move |b, _| {
            b.iter(|| {
                let blocks = diff_slices(&left, &right, &config).expect("diff should succeed");
                criterion::black_box(blocks);
            });
        });
    }
    group.finish();
}

fn bench_scattered_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("scattered_edits");
    group.measurement_time(Duration::from_secs(MAX_BENCH_TIME_SECS));
    group.warm_up_time(Duration::from_secs(WARMUP_SECS));
    group.sample_size(SAMPLE_SIZE);

    for size in [1_000usize, 10_000, 50_000].iter() {
        let left = make_sequence(*size, 1 << 16, 0x1234_5678);
        let mut right = left.clone();
        for i in (0..*size).step_by(97) {
            right[i] = right[i].wrapping_add(1_000_000);
        }
        let config = DiffConfig::default();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("elements", size), size, move |b, _| {
            b.iter(|| {
                let blocks = diff_slices(&left, &right, &config).expect("diff should succeed");
                criterion::black_box(blocks);
            });
        });
    }
    group.finish();
}

fn bench_adversarial_repetitive(c: &mut Criterion) {
    let mut group = c.benchmark_group("adversarial_repetitive");
    group.measurement_time(Duration::from_secs(MAX_BENCH_TIME_SECS));
    group.warm_up_time(Duration::from_secs(WARMUP_SECS));
    group.sample_size(SAMPLE_SIZE);

    for size in [1_000usize, 5_000, 10_000].iter() {
        let left = make_repetitive_sequence(*size, 100);
        let mut right = left.clone();
        right.insert(size / 2, u32::MAX);
        let config = DiffConfig::default();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("elements", size), size, move |b, _| {
            b.iter(|| {
                let blocks = diff_slices(&left, &right, &config).expect("diff should succeed");
                criterion::black_box(blocks);
            });
        });
    }
    group.finish();
}

fn bench_one_sided_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_sided_noise");
    group.measurement_time(Duration::from_secs(MAX_BENCH_TIME_SECS));
    group.warm_up_time(Duration::from_secs(WARMUP_SECS));
    group.sample_size(SAMPLE_SIZE);

    // A shared backbone interleaved with elements unique to each side.
    // With discarding enabled the search only sees the backbone.
    for size in [10_000usize, 50_000].iter() {
        let backbone = make_sequence(*size, 1 << 16, 0x1234_5678);
        let mut left = Vec::with_capacity(size * 2);
        let mut right = Vec::with_capacity(size * 2);
        for (i, value) in backbone.iter().enumerate() {
            left.push(*value);
            right.push(*value);
            if i % 3 == 0 {
                left.push(0x8000_0000 | i as u32);
            }
            if i % 4 == 0 {
                right.push(0xC000_0000 | i as u32);
            }
        }

        for enable_discard in [true, false] {
            let config = DiffConfig::builder()
                .enable_discard(enable_discard)
                .build()
                .expect("valid config");
            let label = if enable_discard { "discard" } else { "no_discard" };
            let left = left.clone();
            let right = right.clone();

            group.throughput(Throughput::Elements((left.len() + right.len()) as u64));
            group.bench_with_input(
                BenchmarkId::new(label, size),
                size,
                move |b, _| {
                    b.iter(|| {
                        let blocks =
                            diff_slices(&left, &right, &config).expect("diff should succeed");
                        criterion::black_box(blocks);
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_identical_sequences,
    bench_single_edit,
    bench_scattered_edits,
    bench_adversarial_repetitive,
    bench_one_sided_noise,
);

criterion_main!(benches);
