//! Destination trait for log output sinks

use crate::destinations::FanOutWriter;
use std::io;
use std::sync::Arc;

/// A byte sink that receives formatted log lines.
///
/// Destinations are shared: the same instance may sit behind several
/// severities and be held by the caller at the same time, so every method
/// takes `&self` and implementations serialise their own writes.
pub trait Destination: Send + Sync {
    fn write(&self, buf: &[u8]) -> io::Result<usize>;

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }

    /// Release the underlying resource.
    ///
    /// Returns `None` for destinations that have nothing to close.
    fn close(&self) -> Option<io::Result<()>> {
        None
    }

    /// Whether this destination writes to the process's standard output.
    fn is_stdout(&self) -> bool {
        false
    }

    fn name(&self) -> &str;

    /// Downcast hook used by [`compose`](crate::destinations::compose) to splice
    /// nested fan-outs.
    fn as_fan_out(&self) -> Option<&FanOutWriter> {
        None
    }
}

pub type SharedDestination = Arc<dyn Destination>;

/// Identity comparison of two shared destinations.
pub fn same_destination(a: &SharedDestination, b: &SharedDestination) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}
