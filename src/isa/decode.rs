//! Raw field decoder for 32-bit instructions.
//!
//! Splits a word into its fixed fields and picks the immediate format that
//! belongs to the primary opcode. This step is purely structural: it does not
//! decide which operation the word names. That happens in
//! [`crate::core::stages::decode`].

use super::instruction::InstructionBits;
use super::opcodes;

/// Fixed fields of a 32-bit instruction with its format-specific immediate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub opcode: u32,
    pub rd: usize,
    pub rs1: usize,
    pub rs2: usize,
    pub funct3: u32,
    pub funct7: u32,
    /// Immediate for the opcode's format. U-type immediates keep their
    /// position in bits 31:12; R-type and unknown opcodes carry zero.
    pub imm: i32,
}

/// Decodes the fixed fields of `inst`.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();
    let imm = match opcode {
        opcodes::OP_LOAD
        | opcodes::OP_LOAD_FP
        | opcodes::OP_IMM
        | opcodes::OP_JALR
        | opcodes::OP_MISC_MEM
        | opcodes::OP_SYSTEM => inst.imm_i(),
        opcodes::OP_STORE | opcodes::OP_STORE_FP => inst.imm_s(),
        opcodes::OP_BRANCH => inst.imm_b(),
        opcodes::OP_LUI | opcodes::OP_AUIPC => inst.imm_u() as i32,
        opcodes::OP_JAL => inst.imm_j(),
        _ => 0,
    };

    Decoded {
        opcode,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm,
    }
}
