//! Floating-Point Register File.
//!
//! The core performs no floating-point arithmetic. These 32 registers only
//! carry raw bit patterns between memory locations for the F/D load and
//! store instructions, and they have no hard-wired zero.

/// Floating-Point Register file holding raw 64-bit patterns.
pub struct Fpr {
    regs: [u64; 32],
}

impl Default for Fpr {
    fn default() -> Self {
        Self::new()
    }
}

impl Fpr {
    /// Creates a register file with every register cleared.
    pub fn new() -> Self {
        Self { regs: [0; 32] }
    }

    #[inline]
    pub fn read(&self, idx: usize) -> u64 {
        self.regs[idx]
    }

    #[inline]
    pub fn write(&mut self, idx: usize, val: u64) {
        self.regs[idx] = val;
    }
}
