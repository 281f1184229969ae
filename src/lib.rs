//! RISC-V 32-bit Emulator Library.
//!
//! This crate implements an instruction-level emulator for the RV32IMC
//! architecture, with the F/D load/store subset carried as raw bit moves.
//! Programs are flat ROM images that talk to the host through three
//! memory-mapped console ports and stop through the exit syscall.
//!
//! # Architecture
//!
//! * **Core**: single in-order hart; fetch, decode and execute one
//!   instruction at a time.
//! * **Memory**: power-of-two ring of bytes, no faults and no protection.
//! * **Console**: input, output and diagnostic ports at `0xF0000000`,
//!   `0xF0000004` and `0xF0000008`.
//! * **Pacing**: frames of `cpu_freq / framerate` instructions, slept to
//!   wall-clock deadlines.
//!
//! # Modules
//!
//! * `common`: Shared helpers and the error type.
//! * `config`: Configuration loading and validation.
//! * `core`: CPU core implementation.
//! * `isa`: Instruction Set Architecture definitions.
//! * `sim`: Loader, pacer and the assembled machine.
//! * `soc`: Memory, bus and console devices.
//! * `stats`: Execution statistics.

/// Shared helpers: access widths, sign extension and the error type.
pub mod common;

/// TOML configuration for the core, memory and pacing.
pub mod config;

/// CPU core: architectural state, execution units and stages.
pub mod core;

/// RV32IMC encoding definitions and raw field decoders.
pub mod isa;

/// ROM loading, frame pacing and the machine facade.
pub mod sim;

/// Memory, the interconnect bus and the console devices.
pub mod soc;

/// Instruction mix and pacing statistics.
pub mod stats;
