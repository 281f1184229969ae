//! CPU Status Flags.
//!
//! A small bit-flag word. Only the halted bit is defined: the exit syscall
//! sets it and the scheduler checks it once per frame.

/// Status flag word of the CPU.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Status(u32);

impl Status {
    /// Execution should stop; set by the exit syscall.
    pub const HALTED: u32 = 1 << 0;

    /// Returns the raw flag bits.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if every bit of `flag` is set.
    pub fn contains(self, flag: u32) -> bool {
        self.0 & flag == flag
    }

    /// Sets the bits of `flag`.
    pub fn insert(&mut self, flag: u32) {
        self.0 |= flag;
    }
}
