//! Basic logger usage example
//!
//! Demonstrates the process-wide logger with split routing: info and above
//! on the console, everything into an in-memory output, and a stack trace
//! after errors.
//!
//! Run with: cargo run --example basic_usage

use logz::destinations::MemoryDestination;
use logz::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Logz - Basic Usage Example ===\n");

    let out = Arc::new(MemoryDestination::new());
    logz::init(out.clone(), LogLevel::Info, LogLevel::Trace, LogLevel::Error, true)?;

    println!("1. Logging at different levels (info and above reach the console):");
    logz::trace!("This is a trace message");
    logz::info!("This is an info message");
    logz::warning!("Retry ", 1, " of ", 3);
    logz::infof!("Listening on {}:{}", "0.0.0.0", 8080);

    println!("\n2. Level names from configuration:");
    for name in ["trace", "information", "warn", "fatal", "verbose"] {
        println!("   {:<12} -> {}", name, logz::get_log_level(name));
    }

    println!("\n3. An error, followed by a stack trace in the output:");
    logz::errorf!("Upstream returned {}", 503);

    logz::close()?;

    println!("\n4. Everything the configured output received:");
    let captured = out.contents();
    for line in captured.lines().take(8) {
        println!("   {}", line);
    }
    println!("   ... {} lines in total", captured.lines().count());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
