//! Decoded operation types.
//!
//! Instruction words are decoded into one of two tagged enums before
//! execution: [`StandardOp`] for 32-bit words and [`CompressedOp`] for 16-bit
//! words. Every encoding that names no supported operation decodes to the
//! `Illegal` variant, so "unhandled combination" is an explicit arm in the
//! executors rather than a silent fall-through.

use crate::common::MemWidth;

/// Integer ALU operation, shared by both decoders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Sub,
    Sll,
    Slt,
    Sltu,
    Xor,
    Srl,
    Sra,
    Or,
    And,
    Mul,
    Mulh,
    Mulhsu,
    Mulhu,
    Div,
    Divu,
    Rem,
    Remu,
}

/// Conditional branch comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCond {
    Eq,
    Ne,
    Lt,
    Ge,
    Ltu,
    Geu,
}

impl BranchCond {
    /// Evaluates the comparison on two register values.
    pub fn taken(self, a: u32, b: u32) -> bool {
        match self {
            BranchCond::Eq => a == b,
            BranchCond::Ne => a != b,
            BranchCond::Lt => (a as i32) < (b as i32),
            BranchCond::Ge => (a as i32) >= (b as i32),
            BranchCond::Ltu => a < b,
            BranchCond::Geu => a >= b,
        }
    }
}

/// Width of a floating-point register transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FpWidth {
    /// 32-bit transfer; only the low half of the register is meaningful.
    Single,
    /// 64-bit transfer as two consecutive 32-bit words, low word first.
    Double,
}

/// A decoded 32-bit instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StandardOp {
    Lui {
        rd: usize,
        imm: u32,
    },
    Auipc {
        rd: usize,
        imm: u32,
    },
    Jal {
        rd: usize,
        offset: i32,
    },
    Jalr {
        rd: usize,
        rs1: usize,
        offset: i32,
    },
    Branch {
        cond: BranchCond,
        rs1: usize,
        rs2: usize,
        offset: i32,
    },
    Load {
        width: MemWidth,
        signed: bool,
        rd: usize,
        rs1: usize,
        offset: i32,
    },
    Store {
        width: MemWidth,
        rs1: usize,
        rs2: usize,
        offset: i32,
    },
    LoadFp {
        width: FpWidth,
        rd: usize,
        rs1: usize,
        offset: i32,
    },
    StoreFp {
        width: FpWidth,
        rs1: usize,
        rs2: usize,
        offset: i32,
    },
    /// Register-immediate ALU operation. Shift amounts are already reduced
    /// to their low 5 bits.
    OpImm {
        op: AluOp,
        rd: usize,
        rs1: usize,
        imm: u32,
    },
    Op {
        op: AluOp,
        rd: usize,
        rs1: usize,
        rs2: usize,
    },
    Fence,
    Ecall,
    Ebreak,
    Illegal(u32),
}

/// A decoded 16-bit compressed instruction.
///
/// Register fields hold architectural indices: windowed `rd'`/`rs1'`/`rs2'`
/// fields are already offset into x8..x15.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompressedOp {
    /// `C.ADDI4SPN`: `rd' = sp + imm`.
    Addi4spn { rd: usize, imm: u32 },
    /// `C.LW`, `C.LWSP`.
    Lw { rd: usize, rs1: usize, imm: u32 },
    /// `C.SW`, `C.SWSP`.
    Sw { rs1: usize, rs2: usize, imm: u32 },
    /// `C.FLW`, `C.FLD`, `C.FLWSP`, `C.FLDSP`.
    LoadFp {
        width: FpWidth,
        rd: usize,
        rs1: usize,
        imm: u32,
    },
    /// `C.FSW`, `C.FSD`, `C.FSWSP`, `C.FSDSP`.
    StoreFp {
        width: FpWidth,
        rs1: usize,
        rs2: usize,
        imm: u32,
    },
    /// `C.ADDI`, `C.ADDI16SP`, `C.SRLI`, `C.SRAI`, `C.ANDI`, `C.SLLI`:
    /// `rd = rd op imm`.
    AluImm { op: AluOp, rd: usize, imm: u32 },
    /// `C.SUB`, `C.XOR`, `C.OR`, `C.AND`, `C.ADD`: `rd = rd op rs2`.
    Alu { op: AluOp, rd: usize, rs2: usize },
    /// `C.LI`, `C.LUI`: `rd = imm`.
    Li { rd: usize, imm: u32 },
    /// `C.MV`: `rd = rs2`.
    Mv { rd: usize, rs2: usize },
    /// `C.J` (`link == false`) and `C.JAL` (`link == true`, writes `ra`).
    Jump { link: bool, offset: i32 },
    /// `C.JR` (`link == false`) and `C.JALR` (`link == true`, writes `ra`).
    JumpReg { link: bool, rs1: usize },
    /// `C.BEQZ` (`zero == true`) and `C.BNEZ`.
    BranchZero { zero: bool, rs1: usize, offset: i32 },
    Ebreak,
    Illegal(u16),
}
