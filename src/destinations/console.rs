//! Console destinations

use crate::core::Destination;
use std::io::{self, Write};

/// The process's standard output.
///
/// Routing compares the configured output against this destination so a
/// record is never written to stdout twice.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutDestination;

impl StdoutDestination {
    pub fn new() -> Self {
        Self
    }
}

impl Destination for StdoutDestination {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        // Lock once so a whole record lands contiguously
        let mut out = io::stdout().lock();
        out.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().flush()
    }

    fn is_stdout(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

/// The process's standard error; the default bootstrap destination for
/// the logger's own diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrDestination;

impl StderrDestination {
    pub fn new() -> Self {
        Self
    }
}

impl Destination for StderrDestination {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        let mut err = io::stderr().lock();
        err.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&self) -> io::Result<()> {
        io::stderr().flush()
    }

    fn name(&self) -> &str {
        "stderr"
    }
}
