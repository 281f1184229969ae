//! RISC-V architectural state.
//!
//! This module contains the architecturally visible state of the core:
//! the integer and floating-point register files, the status flags, and
//! the environment-call trap handler.

/// Floating-Point Register file implementation.
pub mod fpr;

/// General-Purpose Register file implementation.
pub mod gpr;

/// Status flag word.
pub mod status;

/// Environment call handling.
pub mod trap;
