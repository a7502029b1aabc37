//! File logging example
//!
//! Demonstrates a file output fanned out with standard error, and a worker
//! panic captured by `run` and logged at Critical before it propagates.
//!
//! Run with: cargo run --example file_logging

use logz::destinations::{FileDestination, StderrDestination};
use logz::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Logz - File Logging Example ===\n");

    // Every record for the output goes to the file and to stderr
    let file = Arc::new(FileDestination::new("application.log")?.with_exclusive_lock()?);
    let out = compose([
        file as SharedDestination,
        Arc::new(StderrDestination::new()) as SharedDestination,
    ]);

    let config = LoggerConfig::new()
        .with_stdout_level(LogLevel::Warning)
        .with_output_level(LogLevel::Trace)
        .with_stack_level(LogLevel::Critical)
        .with_include_location(true)
        .with_formatter(FormatterConfig::new().with_timestamp_format(TimestampFormat::Iso8601));
    logz::init_with_config(out, &config)?;

    println!("1. Logging to file, stderr and (for warnings) stdout:");
    logz::info!("Application started");
    logz::trace!("Loading configuration...");
    logz::warning!("Using default settings for some options");

    println!("\n2. Performing some operations:");
    let processed = logz::run(|| {
        for i in 1..=5 {
            logz::infof!("Processing item {}/5", i);
            if i == 3 {
                logz::warning!("Item ", i, " took longer than expected");
            }
        }
        5
    })?;

    // `run` closes the logger once the closure returns
    println!("\n=== Example completed successfully ({} items) ===", processed);
    println!("Check 'application.log' for the full log output");

    Ok(())
}
