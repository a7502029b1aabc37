//! Fan-out destination
//!
//! Broadcasts every write to a flat list of child destinations. Failures of
//! individual children are swallowed so one misbehaving sink cannot break
//! logging for its siblings or surface an error to the caller.

use crate::core::{Destination, SharedDestination};
use std::io;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub struct FanOutWriter {
    writers: Vec<SharedDestination>,
    /// Child writes that returned an error or panicked
    failures: AtomicU64,
}

impl FanOutWriter {
    /// Leaf destinations, in broadcast order
    pub fn writers(&self) -> &[SharedDestination] {
        &self.writers
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }

    /// Number of child writes swallowed so far
    pub fn failure_count(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }
}

/// Build a fan-out over `writers`.
///
/// Any input that is itself a [`FanOutWriter`] has its children spliced in,
/// so the result never nests and a broadcast touches each leaf exactly once.
///
/// # Example
///
/// ```
/// use logz::destinations::{compose, MemoryDestination};
/// use logz::{Destination, SharedDestination};
/// use std::sync::Arc;
///
/// let a = Arc::new(MemoryDestination::new());
/// let b = Arc::new(MemoryDestination::new());
/// let c = Arc::new(MemoryDestination::new());
///
/// let inner = compose(vec![a.clone() as SharedDestination, b.clone() as SharedDestination]);
/// let outer = compose(vec![inner, c.clone() as SharedDestination]);
///
/// assert_eq!(outer.as_fan_out().unwrap().len(), 3);
/// outer.write(b"hello").unwrap();
/// assert_eq!(a.contents(), "hello");
/// assert_eq!(c.contents(), "hello");
/// ```
pub fn compose(writers: impl IntoIterator<Item = SharedDestination>) -> SharedDestination {
    let mut all = Vec::new();
    for writer in writers {
        match writer.as_fan_out() {
            Some(fan_out) => all.extend(fan_out.writers.iter().cloned()),
            None => all.push(writer),
        }
    }

    Arc::new(FanOutWriter {
        writers: all,
        failures: AtomicU64::new(0),
    })
}

impl Destination for FanOutWriter {
    /// Always reports the full length; child failures are counted, never returned.
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        for writer in &self.writers {
            let result = catch_unwind(AssertUnwindSafe(|| writer.write(buf)));
            if !matches!(result, Ok(Ok(_))) {
                self.failures.fetch_add(1, Ordering::Relaxed);
            }
        }
        Ok(buf.len())
    }

    fn flush(&self) -> io::Result<()> {
        for writer in &self.writers {
            let _ = catch_unwind(AssertUnwindSafe(|| writer.flush()));
        }
        Ok(())
    }

    fn is_stdout(&self) -> bool {
        !self.writers.is_empty() && self.writers.iter().all(|w| w.is_stdout())
    }

    fn name(&self) -> &str {
        "fan-out"
    }

    fn as_fan_out(&self) -> Option<&FanOutWriter> {
        Some(self)
    }
}
