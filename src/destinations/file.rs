//! File destination implementation

use crate::core::{Destination, LoggerError, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Appends records to a log file.
///
/// Writes are unbuffered so every record reaches the file before the emit
/// call returns. The destination is closable: after `close` the file handle
/// (and any lock on it) is released and further writes fail.
pub struct FileDestination {
    file: Mutex<Option<File>>,
    path: PathBuf,
    locked: bool,
}

impl FileDestination {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            file: Mutex::new(Some(file)),
            path,
            locked: false,
        })
    }

    /// Take an exclusive advisory lock on the file so a second process
    /// cannot log into it at the same time
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use logz::destinations::FileDestination;
    ///
    /// let dest = FileDestination::new("/var/log/app.log")
    ///     .and_then(|d| d.with_exclusive_lock())
    ///     .expect("log file is held by another process");
    /// ```
    pub fn with_exclusive_lock(mut self) -> Result<Self> {
        {
            let guard = self.file.lock();
            let file = guard
                .as_ref()
                .ok_or_else(|| LoggerError::file_destination(self.path_str(), "file closed"))?;
            fs2::FileExt::try_lock_exclusive(file)
                .map_err(|_| LoggerError::file_lock(self.path_str()))?;
        }
        self.locked = true;
        Ok(self)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.file.lock().is_none()
    }

    fn path_str(&self) -> String {
        self.path.display().to_string()
    }
}

impl Destination for FileDestination {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.file.lock();
        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "log file closed"))?;
        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&self) -> io::Result<()> {
        if let Some(ref mut file) = *self.file.lock() {
            file.flush()?;
        }
        Ok(())
    }

    fn close(&self) -> Option<io::Result<()>> {
        let file = self.file.lock().take();
        let result = match file {
            Some(file) => {
                let synced = file.sync_data();
                if self.locked {
                    let _ = fs2::FileExt::unlock(&file);
                }
                synced
            }
            None => Ok(()),
        };
        Some(result)
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileDestination {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
