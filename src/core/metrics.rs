//! Logger metrics for observability
//!
//! Counters describing what the logger did with the calls it received.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use logz::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_written();
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.records_written(), 1);
/// assert_eq!(metrics.records_suppressed(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records handed to a routed destination
    records_written: AtomicU64,

    /// Records dropped because their level routes nowhere
    records_suppressed: AtomicU64,

    /// Emit calls made while the logger was not initialized
    uninitialized_calls: AtomicU64,

    /// Stack traces written to the configured output
    stack_dumps: AtomicU64,

    /// Routed writes that returned an error or panicked
    write_failures: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            records_written: AtomicU64::new(0),
            records_suppressed: AtomicU64::new(0),
            uninitialized_calls: AtomicU64::new(0),
            stack_dumps: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_written(&self) -> u64 {
        self.records_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn records_suppressed(&self) -> u64 {
        self.records_suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn uninitialized_calls(&self) -> u64 {
        self.uninitialized_calls.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn stack_dumps(&self) -> u64 {
        self.stack_dumps.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.records_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.records_suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_uninitialized(&self) -> u64 {
        self.uninitialized_calls.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_stack_dump(&self) -> u64 {
        self.stack_dumps.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.records_written.store(0, Ordering::Relaxed);
        self.records_suppressed.store(0, Ordering::Relaxed);
        self.uninitialized_calls.store(0, Ordering::Relaxed);
        self.stack_dumps.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            records_written: AtomicU64::new(self.records_written()),
            records_suppressed: AtomicU64::new(self.records_suppressed()),
            uninitialized_calls: AtomicU64::new(self.uninitialized_calls()),
            stack_dumps: AtomicU64::new(self.stack_dumps()),
            write_failures: AtomicU64::new(self.write_failures()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.records_written(), 0);
        assert_eq!(metrics.records_suppressed(), 0);
        assert_eq!(metrics.uninitialized_calls(), 0);
        assert_eq!(metrics.stack_dumps(), 0);
        assert_eq!(metrics.write_failures(), 0);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_written(), 0);
        assert_eq!(metrics.record_written(), 1);
        assert_eq!(metrics.records_written(), 2);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_stack_dump();
        metrics.record_uninitialized();
        metrics.record_write_failure();

        metrics.reset();

        assert_eq!(metrics.stack_dumps(), 0);
        assert_eq!(metrics.uninitialized_calls(), 0);
        assert_eq!(metrics.write_failures(), 0);
    }

    #[test]
    fn test_metrics_clone_is_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_suppressed();

        let snapshot = metrics.clone();
        metrics.record_suppressed();

        assert_eq!(metrics.records_suppressed(), 2);
        assert_eq!(snapshot.records_suppressed(), 1);
    }
}
