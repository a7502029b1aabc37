//! Adapter from any `std::io::Write` to a destination

use crate::core::Destination;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Wraps an arbitrary writer behind a mutex.
///
/// When built with [`WriterDestination::closable`], `close` flushes and drops
/// the inner writer; later writes fail with `BrokenPipe`.
pub struct WriterDestination<W: Write + Send> {
    inner: Mutex<Option<W>>,
    name: String,
    closable: bool,
}

impl<W: Write + Send> WriterDestination<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(Some(writer)),
            name: "writer".to_string(),
            closable: false,
        }
    }

    /// Let `close` release the wrapped writer
    #[must_use]
    pub fn closable(mut self) -> Self {
        self.closable = true;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().is_none()
    }

    /// Take the wrapped writer back out, if still open
    pub fn into_inner(self) -> Option<W> {
        self.inner.into_inner()
    }
}

impl<W: Write + Send> Destination for WriterDestination<W> {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.inner.lock();
        let writer = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "writer closed"))?;
        writer.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&self) -> io::Result<()> {
        if let Some(ref mut writer) = *self.inner.lock() {
            writer.flush()?;
        }
        Ok(())
    }

    fn close(&self) -> Option<io::Result<()>> {
        if !self.closable {
            return None;
        }
        let writer = self.inner.lock().take();
        Some(match writer {
            Some(mut writer) => writer.flush(),
            None => Ok(()),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
