//! Criterion benchmarks for logz

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use logz::destinations::MemoryDestination;
use logz::prelude::*;
use std::io;
use std::sync::Arc;

/// Accepts and drops everything, so only the logger's own cost is measured
struct Sink;

impl Destination for Sink {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn name(&self) -> &str {
        "sink"
    }
}

fn sink() -> SharedDestination {
    Arc::new(Sink)
}

fn quiet_logger(config: &LoggerConfig) -> Logger {
    let logger = Logger::builder().stdout(sink()).bootstrap(sink()).build();
    logger
        .init_with_config(sink(), config)
        .expect("fresh logger accepts init");
    logger
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let config = LoggerConfig::new()
        .with_stdout_level(LogLevel::Error)
        .with_output_level(LogLevel::Info)
        .with_stack_level(LogLevel::Critical);
    let logger = quiet_logger(&config);

    group.bench_function("disabled_level", |b| {
        b.iter(|| logger.trace(black_box("Trace message")));
    });

    group.bench_function("output_only", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("stdout_and_output", |b| {
        b.iter(|| logger.error(black_box("Error message")));
    });

    group.bench_function("formatted", |b| {
        b.iter(|| logger.infof(format_args!("User {} logged in from {}", black_box(42), "10.0.0.1")));
    });

    group.bench_function("value_list", |b| {
        let values: [&dyn std::fmt::Display; 4] = [&"User ", &42, &" logged in from ", &"10.0.0.1"];
        b.iter(|| logger.info(Concat(black_box(&values))));
    });

    let located = quiet_logger(&config.clone().with_include_location(true));
    group.bench_function("with_location", |b| {
        b.iter(|| located.info(black_box("Info message")));
    });

    let bare = quiet_logger(
        &config
            .clone()
            .with_formatter(FormatterConfig::new().without_timestamp()),
    );
    group.bench_function("without_timestamp", |b| {
        b.iter(|| bare.info(black_box("Info message")));
    });

    group.finish();
}

fn bench_stack_dump(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_dump");
    group.sample_size(20);

    let logger = quiet_logger(
        &LoggerConfig::new()
            .with_stdout_level(LogLevel::Critical)
            .with_output_level(LogLevel::Trace)
            .with_stack_level(LogLevel::Error),
    );

    group.bench_function("error_with_trace", |b| {
        b.iter(|| logger.error(black_box("Error message")));
    });

    group.finish();
}

// ============================================================================
// Fan-out Benchmarks
// ============================================================================

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out");
    let line = b"2026/10/19 12:00:00  INFO| payment settled for order 1234\n";
    group.throughput(Throughput::Bytes(line.len() as u64));

    for width in [1usize, 2, 4, 8] {
        let fan_out = compose((0..width).map(|_| sink()));
        group.bench_with_input(BenchmarkId::new("write", width), &fan_out, |b, fan_out| {
            b.iter(|| fan_out.write(black_box(line)));
        });
    }

    let memory = compose([
        Arc::new(MemoryDestination::new()) as SharedDestination,
        sink(),
    ]);
    group.bench_function("write_to_memory", |b| {
        b.iter(|| memory.write(black_box(line)));
    });

    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    group.bench_function("flat", |b| {
        b.iter(|| compose(black_box([sink(), sink(), sink()])));
    });

    let nested = compose([sink(), sink()]);
    group.bench_function("nested", |b| {
        b.iter(|| compose(black_box([Arc::clone(&nested), sink()])));
    });

    group.finish();
}

// ============================================================================
// Level Parsing Benchmarks
// ============================================================================

fn bench_level_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_parsing");

    for name in ["trace", "information", "fatal"] {
        group.bench_with_input(BenchmarkId::new("parse", name), name, |b, name| {
            b.iter(|| black_box(name).parse::<LogLevel>());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_emission,
    bench_stack_dump,
    bench_fan_out,
    bench_compose,
    bench_level_parsing
);
criterion_main!(benches);
