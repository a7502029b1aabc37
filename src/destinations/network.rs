//! Network destination for remote logging
//!
//! Streams records to a remote server over TCP.

use crate::core::{Destination, Result};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;

const IO_TIMEOUT: Duration = Duration::from_secs(5);

/// Destination that sends records to a remote TCP server
///
/// With reconnection enabled, a failed write is retried in full on a fresh
/// connection. If the failure happened part way through, the server may
/// receive the start of that record twice.
///
/// # Example
///
/// ```no_run
/// use logz::destinations::TcpDestination;
/// use std::sync::Arc;
///
/// let dest = TcpDestination::connect("127.0.0.1:8080")
///     .expect("Failed to connect to log server");
///
/// let logger = logz::Logger::new();
/// logger
///     .init(Arc::new(dest), logz::LogLevel::Info, logz::LogLevel::Trace, logz::LogLevel::Critical, false)
///     .unwrap();
/// logger.info("This record will be sent to 127.0.0.1:8080");
/// ```
pub struct TcpDestination {
    stream: Mutex<Option<TcpStream>>,
    address: String,
    reconnect_on_error: bool,
}

impl TcpDestination {
    /// Connect to `addr` (e.g. "localhost:8080")
    ///
    /// # Errors
    ///
    /// Returns error if connection fails
    pub fn connect(addr: impl Into<String>) -> Result<Self> {
        let address = addr.into();
        let stream = Self::open(&address)?;

        Ok(Self {
            stream: Mutex::new(Some(stream)),
            address,
            reconnect_on_error: true,
        })
    }

    /// Enable or disable automatic reconnection on errors
    ///
    /// Default: enabled
    #[must_use]
    pub fn with_reconnect(mut self, enable: bool) -> Self {
        self.reconnect_on_error = enable;
        self
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Connect to the first reachable address `address` resolves to.
    ///
    /// Connecting and every later read or write are bounded by `IO_TIMEOUT`
    /// so a dead host cannot hang the emitting thread.
    fn open(address: &str) -> io::Result<TcpStream> {
        let mut last_error = None;
        for addr in address.to_socket_addrs()? {
            match TcpStream::connect_timeout(&addr, IO_TIMEOUT) {
                Ok(stream) => {
                    stream.set_write_timeout(Some(IO_TIMEOUT))?;
                    stream.set_read_timeout(Some(IO_TIMEOUT))?;
                    stream.set_nodelay(true)?;
                    return Ok(stream);
                }
                Err(e) => last_error = Some(e),
            }
        }
        Err(last_error.unwrap_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} resolved to no addresses", address),
            )
        }))
    }
}

impl Destination for TcpDestination {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.stream.lock();

        let result = match guard.as_mut() {
            Some(stream) => stream.write_all(buf),
            None => Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "stream not connected",
            )),
        };

        match result {
            Ok(()) => Ok(buf.len()),
            Err(e) => {
                *guard = None;
                if !self.reconnect_on_error {
                    return Err(e);
                }
                let mut stream = Self::open(&self.address)?;
                stream.write_all(buf)?;
                *guard = Some(stream);
                Ok(buf.len())
            }
        }
    }

    fn flush(&self) -> io::Result<()> {
        if let Some(ref mut stream) = *self.stream.lock() {
            stream.flush()?;
        }
        Ok(())
    }

    fn close(&self) -> Option<io::Result<()>> {
        let stream = self.stream.lock().take();
        Some(match stream {
            Some(stream) => stream.shutdown(Shutdown::Both),
            None => Ok(()),
        })
    }

    fn name(&self) -> &str {
        "tcp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::net::TcpListener;

    #[test]
    fn test_connect_failure() {
        // Bind then drop to get a port nobody listens on
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let result = TcpDestination::connect(format!("127.0.0.1:{}", port));
        assert!(result.is_err());
    }

    #[test]
    fn test_sends_records() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        let server = std::thread::spawn(move || {
            let (mut socket, _) = listener.accept().unwrap();
            let mut received = String::new();
            socket.read_to_string(&mut received).unwrap();
            received
        });

        let dest = TcpDestination::connect(addr).unwrap().with_reconnect(false);
        dest.write(b"remote record\n").unwrap();
        assert!(matches!(dest.close(), Some(Ok(()))));

        assert_eq!(server.join().unwrap(), "remote record\n");
    }

    #[test]
    fn test_write_after_close_without_reconnect() {
        let dest = TcpDestination {
            stream: Mutex::new(None),
            address: "127.0.0.1:9".to_string(),
            reconnect_on_error: false,
        };

        let err = dest.write(b"test").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotConnected);
    }

    #[test]
    fn test_connect_resolves_host_names() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let dest = TcpDestination::connect(format!("localhost:{}", port));
        assert!(dest.is_ok());
    }

    #[test]
    fn test_connect_rejects_malformed_address() {
        let result = TcpDestination::connect("no-port-here");
        assert!(result.is_err());
    }

    #[test]
    fn test_reconnects_after_lost_stream() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        let server = std::thread::spawn(move || {
            let (mut socket, _) = listener.accept().unwrap();
            let mut received = String::new();
            socket.read_to_string(&mut received).unwrap();
            received
        });

        let dest = TcpDestination {
            stream: Mutex::new(None),
            address: addr,
            reconnect_on_error: true,
        };
        assert_eq!(dest.write(b"after reconnect\n").unwrap(), 16);
        assert!(matches!(dest.close(), Some(Ok(()))));

        assert_eq!(server.join().unwrap(), "after reconnect\n");
    }
}
