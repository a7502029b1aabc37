//! In-memory destination

use crate::core::Destination;
use parking_lot::Mutex;
use std::io;

/// Collects everything written to it in a shared buffer.
///
/// Handy for tests and for embedding the logger where records are
/// inspected or forwarded by the host program.
#[derive(Default)]
pub struct MemoryDestination {
    buffer: Mutex<Vec<u8>>,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the raw bytes written so far
    pub fn bytes(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    /// Buffer contents decoded as UTF-8 (lossy)
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Destination for MemoryDestination {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
