//! Memory-mapped devices attached to the bus.

/// Standard-stream and buffered console implementations.
pub mod console;

pub use console::{BufferedConsole, StdConsole};
