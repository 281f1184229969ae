//! Instruction fetch stage.

use crate::core::Cpu;

/// An instruction word as fetched, before decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fetched {
    /// A 16-bit RVC halfword (low two bits not `0b11`).
    Compressed(u16),
    /// A full 32-bit instruction word.
    Standard(u32),
}

impl Fetched {
    /// The raw bits, zero-extended for compressed halfwords.
    pub fn raw(self) -> u32 {
        match self {
            Fetched::Compressed(half) => half as u32,
            Fetched::Standard(word) => word,
        }
    }
}

/// Reads the instruction at `pc` and classifies it by its length bits.
///
/// A full word is always read. When the low two bits mark a compressed
/// instruction only the low halfword is kept; the upper halfword belongs to
/// the next instruction.
pub fn fetch(cpu: &mut Cpu) -> Fetched {
    let word = cpu.bus.read_u32(cpu.pc);
    if word & 0x3 != 0x3 {
        Fetched::Compressed(word as u16)
    } else {
        Fetched::Standard(word)
    }
}
