//! Environment call numbers understood by the trap handler.

/// Terminates the guest program (Linux `exit` number).
pub const SYS_EXIT: u32 = 93;
