//! Destination implementations

pub mod console;
pub mod fan_out;
pub mod memory;
pub mod writer;

#[cfg(feature = "file")]
pub mod file;
#[cfg(feature = "network")]
pub mod network;

pub use console::{StderrDestination, StdoutDestination};
pub use fan_out::{compose, FanOutWriter};
pub use memory::MemoryDestination;
pub use writer::WriterDestination;

#[cfg(feature = "file")]
pub use file::FileDestination;
#[cfg(feature = "network")]
pub use network::TcpDestination;

pub use crate::core::{Destination, SharedDestination};
