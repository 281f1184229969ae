//! Execution units shared by the standard and compressed executors.

/// Integer arithmetic logic unit.
pub mod alu;

/// Load/store unit.
pub mod lsu;
