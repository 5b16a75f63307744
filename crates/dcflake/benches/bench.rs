use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use dcflake::{Poll, SnowflakeGenerator, SystemClock, TimeSource, parse_id};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};

struct FixedMockTime {
    millis: i64,
}

impl TimeSource for FixedMockTime {
    fn current_millis(&self) -> i64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration. With a fixed clock this
// is exactly one millisecond's worth of sequence, so `next_id` never blocks.
const TOTAL_IDS: usize = 4096;

fn mock_generator() -> SnowflakeGenerator<FixedMockTime> {
    SnowflakeGenerator::with_clock(1, 1, FixedMockTime {
        millis: 1_700_000_000_000,
    })
    .expect("valid ids")
}

/// Benchmarks the hot path where the sequence never runs out.
fn bench_generator<T>(
    c: &mut Criterion,
    group_name: &str,
    generator_factory: impl Fn() -> SnowflakeGenerator<T>,
) where
    T: TimeSource,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = generator_factory();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.next_id());
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks the non-blocking path, spinning on `Pending`.
fn bench_generator_poll<T>(
    c: &mut Criterion,
    group_name: &str,
    generator_factory: impl Fn() -> SnowflakeGenerator<T>,
) where
    T: TimeSource,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = generator_factory();
                for _ in 0..TOTAL_IDS {
                    loop {
                        match generator.poll_id() {
                            Poll::Ready { id } => {
                                black_box(id);
                                break;
                            }
                            Poll::Pending { .. } => core::hint::spin_loop(),
                        }
                    }
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks one generator shared across threads.
fn bench_generator_contended<T>(
    c: &mut Criterion,
    group_name: &str,
    generator_factory: impl Fn() -> SnowflakeGenerator<T>,
) where
    T: TimeSource + Send + Sync,
{
    let mut group = c.benchmark_group(group_name);
    let max_threads = num_cpus::get().max(1);

    for thread_count in [1, 2, 4, 8, 16]
        .into_iter()
        .filter(|&n| n <= max_threads)
    {
        let ids_per_thread = TOTAL_IDS / thread_count;

        group.throughput(Throughput::Elements(TOTAL_IDS as u64));
        group.bench_function(format!("elems/{TOTAL_IDS}/threads/{thread_count}"), |b| {
            b.iter_custom(|iters| {
                let start = Instant::now();

                for _ in 0..iters {
                    let generator = Arc::new(generator_factory());
                    let barrier = Arc::new(Barrier::new(thread_count + 1));
                    scope(|s| {
                        for _ in 0..thread_count {
                            let generator = Arc::clone(&generator);
                            let barrier = Arc::clone(&barrier);
                            s.spawn(move || {
                                barrier.wait();
                                for _ in 0..ids_per_thread {
                                    black_box(generator.next_id());
                                }
                            });
                        }
                        barrier.wait();
                    });
                }

                start.elapsed()
            });
        });
    }

    group.finish();
}

fn benchmark_mock_sequential(c: &mut Criterion) {
    bench_generator(c, "mock/sequential", mock_generator);
}

fn benchmark_mock_poll(c: &mut Criterion) {
    bench_generator_poll(c, "mock/poll", mock_generator);
}

fn benchmark_mock_contended(c: &mut Criterion) {
    bench_generator_contended(c, "mock/contended", mock_generator);
}

fn benchmark_system_sequential(c: &mut Criterion) {
    bench_generator(c, "system/sequential", || {
        SnowflakeGenerator::with_clock(1, 1, SystemClock).expect("valid ids")
    });
}

fn benchmark_system_contended(c: &mut Criterion) {
    bench_generator_contended(c, "system/contended", || {
        SnowflakeGenerator::with_clock(1, 1, SystemClock).expect("valid ids")
    });
}

fn benchmark_parse(c: &mut Criterion) {
    let generator = SnowflakeGenerator::new(3, 7).expect("valid ids");
    let ids: Vec<i64> = (0..TOTAL_IDS).map(|_| generator.next_id().to_raw()).collect();

    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));
    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for &id in &ids {
                black_box(parse_id(black_box(id)));
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    // Mock clock
    benchmark_mock_sequential,
    benchmark_mock_poll,
    benchmark_mock_contended,
    // Wall clock
    benchmark_system_sequential,
    benchmark_system_contended,
    // Decoding
    benchmark_parse,
);
criterion_main!(benches);
