//! ABI names for the integer registers the core refers to directly.

/// Hard-wired zero register (`x0`).
pub const REG_ZERO: usize = 0;

/// Return address / link register (`x1`).
pub const REG_RA: usize = 1;

/// Stack pointer (`x2`).
pub const REG_SP: usize = 2;

/// First argument and return value register (`x10`).
pub const REG_A0: usize = 10;

/// Syscall number register (`x17`).
pub const REG_A7: usize = 17;

/// First register of the compressed register window (`x8`..`x15`).
pub const RVC_REG_BASE: usize = 8;
