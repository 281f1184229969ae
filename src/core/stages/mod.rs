//! Instruction processing stages.
//!
//! The core is not pipelined: every step runs fetch, decode and execute
//! back to back for a single instruction, so each instruction's memory
//! effects are visible to the next fetch.

/// Standard and compressed decoders.
pub mod decode;

/// Standard (32-bit) instruction executor.
pub mod execute;

/// Compressed (16-bit) instruction executor.
pub mod execute_rvc;

/// Instruction fetch.
pub mod fetch;

pub use decode::{decode_compressed, decode_standard};
pub use execute::execute_standard;
pub use execute_rvc::execute_compressed;
pub use fetch::{fetch, Fetched};
