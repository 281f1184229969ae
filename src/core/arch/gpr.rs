//! Integer register file.
//!
//! Thirty-two 32-bit registers. `x0` reads as zero: [`Gpr::write`] is the
//! only way instructions update a register and it drops writes to index 0,
//! so no executor has to special-case the zero register.

/// The x0..x31 register file.
pub struct Gpr {
    regs: [u32; 32],
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

impl Gpr {
    /// Returns a register file with every register cleared.
    pub fn new() -> Self {
        Self { regs: [0; 32] }
    }

    /// Returns the value of register `idx`.
    ///
    /// `idx` comes from a 5-bit field, so it is always in range.
    #[inline]
    pub fn read(&self, idx: usize) -> u32 {
        self.regs[idx]
    }

    /// Sets register `idx` to `val`; writes to x0 are discarded.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Prints the registers to stderr, four to a line.
    pub fn dump(&self) {
        for (row, chunk) in self.regs.chunks(4).enumerate() {
            let line: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(col, val)| format!("x{:<2}={:#010x}", row * 4 + col, val))
                .collect();
            eprintln!("{}", line.join(" "));
        }
    }
}
