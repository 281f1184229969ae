//! CPU core implementation.
//!
//! A single in-order hart with no pipeline: architectural state (`arch`),
//! decoded operation types (`control`), the execution units (`units`) and
//! the fetch/decode/execute stages (`stages`), tied together by [`Cpu`].

/// Architectural state and the environment-call handler.
pub mod arch;

/// Decoded operation types.
pub mod control;

/// The core and its step function.
pub mod cpu;

/// Fetch, decode and execute.
pub mod stages;

/// ALU and load/store unit.
pub mod units;

pub use cpu::Cpu;
