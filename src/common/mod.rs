//! Common utilities and types used throughout the RV32 emulator.
//!
//! This module provides the small shared vocabulary of the simulator:
//! memory access widths, immediate sign extension, and the error type
//! returned by the configuration and loading layers.

/// Bit-field helpers (sign extension).
pub mod bits;

/// Memory access width definitions.
pub mod data;

/// Error types for the configuration, loader and host layers.
pub mod error;

pub use bits::sign_extend;
pub use data::MemWidth;
pub use error::SimError;
