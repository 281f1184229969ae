//! System-on-Chip components.
//!
//! Main memory, the console device behind the memory-mapped I/O ports, and
//! the bus that routes CPU accesses between them.

/// Console device implementations.
pub mod devices;

/// Address routing between memory and the console ports.
pub mod interconnect;

/// Ring-addressed main memory.
pub mod memory;

/// Device interfaces.
pub mod traits;

pub use devices::{BufferedConsole, StdConsole};
pub use interconnect::{Bus, IO_DIAGNOSTIC, IO_INPUT, IO_OUTPUT};
pub use memory::Memory;
pub use traits::{Console, INPUT_EOF};
