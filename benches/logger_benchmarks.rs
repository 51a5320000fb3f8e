//! Criterion benchmarks for rlog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rlog::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counts delivered records without doing any I/O
struct Counting {
    min: LogLevel,
    delivered: AtomicU64,
}

impl LogHandler for Counting {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min
    }

    fn handle(&self, record: LogRecord) {
        black_box(record);
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }
}

fn logger() -> Logger {
    Logger::new(
        "bench",
        Arc::new(Counting {
            min: LogLevel::Info,
            delivered: AtomicU64::new(0),
        }),
    )
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));
    let logger = logger();

    group.bench_function("disabled", |b| {
        b.iter(|| {
            logger.debug(black_box("Debug message"), [LogAttr::new("k", 1)]);
        });
    });

    group.bench_function("disabled_macro", |b| {
        b.iter(|| {
            rlog::debug!(logger, "Debug {}", black_box(1); "k" => 1);
        });
    });

    group.bench_function("enabled_no_attrs", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"), []);
        });
    });

    group.bench_function("enabled_three_attrs", |b| {
        b.iter(|| {
            logger.info(
                black_box("Info message"),
                [
                    LogAttr::new("port", 8080),
                    LogAttr::new("host", "localhost"),
                    LogAttr::new("tls", true),
                ],
            );
        });
    });

    group.bench_function("builder_three_attrs", |b| {
        b.iter(|| {
            logger
                .info_builder()
                .message(black_box("Info message"))
                .attr("port", 8080)
                .attr("host", "localhost")
                .attr("tls", true)
                .log();
        });
    });

    group.finish();
}

// ============================================================================
// Retrieval Benchmarks
// ============================================================================

fn bench_retrieval(c: &mut Criterion) {
    let mut group = c.benchmark_group("retrieval");
    let slot = HandlerSlot::new();
    slot.set(Counting {
        min: LogLevel::Info,
        delivered: AtomicU64::new(0),
    })
    .expect("fresh slot");

    group.bench_function("module_logger", |b| {
        b.iter(|| black_box(slot.logger(black_box("extension"))));
    });

    group.bench_function("default_logger", |b| {
        b.iter(|| black_box(slot.default_logger()));
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_retrieval);
criterion_main!(benches);
