//! Simulation harness: ROM loading, pacing and the assembled machine.

/// ROM image loader.
pub mod loader;

/// Assembled machine exposing the host interface.
pub mod machine;

/// Frame pacer and clock abstraction.
pub mod scheduler;

/// Terminal helper for the exit pause.
pub mod terminal;

pub use loader::load_binary;
pub use machine::Machine;
pub use scheduler::{Clock, FrameReport, Scheduler, SystemClock};
