//! Memory Access Widths.
//!
//! This module defines the access widths used by the load/store unit when
//! talking to the bus. The width decides both how many bytes are moved and
//! which bus entry point is used (only word accesses reach the I/O ports).

/// Width of a data memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemWidth {
    /// Single byte access (`lb`, `lbu`, `sb`).
    Byte,

    /// Half-word (16-bit) access (`lh`, `lhu`, `sh`).
    Half,

    /// Word (32-bit) access (`lw`, `sw`, and the compressed forms).
    ///
    /// The only width that is routed to the memory-mapped console ports.
    Word,
}

impl MemWidth {
    /// Returns the number of bytes moved by an access of this width.
    pub fn bytes(self) -> u32 {
        match self {
            MemWidth::Byte => 1,
            MemWidth::Half => 2,
            MemWidth::Word => 4,
        }
    }

    /// Returns the number of significant bits for sign extension.
    pub fn bits(self) -> u32 {
        self.bytes() * 8
    }
}
