//! Instruction decode stage.
//!
//! Turns raw instruction words into [`StandardOp`] and [`CompressedOp`]
//! values. Decoding never fails: any word that names no supported operation
//! (including the reserved RVC encodings) becomes `Illegal` carrying the raw
//! bits, and it is up to the executor to decide what that means.

use crate::common::MemWidth;
use crate::core::control::{AluOp, BranchCond, CompressedOp, FpWidth, StandardOp};
use crate::isa::decode::decode;
use crate::isa::instruction::{CompressedBits, InstructionBits};
use crate::isa::{abi, funct3, funct7, opcodes, rvc};

/// Decodes a 32-bit instruction word.
pub fn decode_standard(inst: u32) -> StandardOp {
    let d = decode(inst);
    let (rd, rs1, rs2) = (d.rd, d.rs1, d.rs2);

    match d.opcode {
        opcodes::OP_LUI => StandardOp::Lui {
            rd,
            imm: inst.imm_u(),
        },
        opcodes::OP_AUIPC => StandardOp::Auipc {
            rd,
            imm: inst.imm_u(),
        },
        opcodes::OP_JAL => StandardOp::Jal { rd, offset: d.imm },
        opcodes::OP_JALR if d.funct3 == funct3::JALR => StandardOp::Jalr {
            rd,
            rs1,
            offset: d.imm,
        },
        opcodes::OP_BRANCH => {
            let cond = match d.funct3 {
                funct3::BEQ => BranchCond::Eq,
                funct3::BNE => BranchCond::Ne,
                funct3::BLT => BranchCond::Lt,
                funct3::BGE => BranchCond::Ge,
                funct3::BLTU => BranchCond::Ltu,
                funct3::BGEU => BranchCond::Geu,
                _ => return StandardOp::Illegal(inst),
            };
            StandardOp::Branch {
                cond,
                rs1,
                rs2,
                offset: d.imm,
            }
        }
        opcodes::OP_LOAD => {
            let (width, signed) = match d.funct3 {
                funct3::LB => (MemWidth::Byte, true),
                funct3::LH => (MemWidth::Half, true),
                funct3::LW => (MemWidth::Word, false),
                funct3::LBU => (MemWidth::Byte, false),
                funct3::LHU => (MemWidth::Half, false),
                _ => return StandardOp::Illegal(inst),
            };
            StandardOp::Load {
                width,
                signed,
                rd,
                rs1,
                offset: d.imm,
            }
        }
        opcodes::OP_STORE => {
            let width = match d.funct3 {
                funct3::SB => MemWidth::Byte,
                funct3::SH => MemWidth::Half,
                funct3::SW => MemWidth::Word,
                _ => return StandardOp::Illegal(inst),
            };
            StandardOp::Store {
                width,
                rs1,
                rs2,
                offset: d.imm,
            }
        }
        opcodes::OP_LOAD_FP => match fp_width(d.funct3) {
            Some(width) => StandardOp::LoadFp {
                width,
                rd,
                rs1,
                offset: d.imm,
            },
            None => StandardOp::Illegal(inst),
        },
        opcodes::OP_STORE_FP => match fp_width(d.funct3) {
            Some(width) => StandardOp::StoreFp {
                width,
                rs1,
                rs2,
                offset: d.imm,
            },
            None => StandardOp::Illegal(inst),
        },
        opcodes::OP_IMM => {
            let imm = d.imm as u32;
            let shamt = rs2 as u32;
            let (op, imm) = match d.funct3 {
                funct3::ADD_SUB => (AluOp::Add, imm),
                funct3::SLT => (AluOp::Slt, imm),
                funct3::SLTU => (AluOp::Sltu, imm),
                funct3::XOR => (AluOp::Xor, imm),
                funct3::OR => (AluOp::Or, imm),
                funct3::AND => (AluOp::And, imm),
                funct3::SLL => (AluOp::Sll, shamt),
                _ if d.funct7 & funct7::ALT != 0 => (AluOp::Sra, shamt),
                _ => (AluOp::Srl, shamt),
            };
            StandardOp::OpImm { op, rd, rs1, imm }
        }
        opcodes::OP_REG => {
            let op = if d.funct7 & funct7::M_EXT != 0 {
                match d.funct3 {
                    funct3::MUL => AluOp::Mul,
                    funct3::MULH => AluOp::Mulh,
                    funct3::MULHSU => AluOp::Mulhsu,
                    funct3::MULHU => AluOp::Mulhu,
                    funct3::DIV => AluOp::Div,
                    funct3::DIVU => AluOp::Divu,
                    funct3::REM => AluOp::Rem,
                    _ => AluOp::Remu,
                }
            } else {
                let alt = d.funct7 & funct7::ALT != 0;
                match d.funct3 {
                    funct3::ADD_SUB if alt => AluOp::Sub,
                    funct3::ADD_SUB => AluOp::Add,
                    funct3::SLL => AluOp::Sll,
                    funct3::SLT => AluOp::Slt,
                    funct3::SLTU => AluOp::Sltu,
                    funct3::XOR => AluOp::Xor,
                    funct3::SRL_SRA if alt => AluOp::Sra,
                    funct3::SRL_SRA => AluOp::Srl,
                    funct3::OR => AluOp::Or,
                    _ => AluOp::And,
                }
            };
            StandardOp::Op { op, rd, rs1, rs2 }
        }
        opcodes::OP_MISC_MEM => StandardOp::Fence,
        opcodes::OP_SYSTEM if d.funct3 == funct3::PRIV => {
            // Bit 20 separates EBREAK from ECALL.
            if d.imm & 1 != 0 {
                StandardOp::Ebreak
            } else {
                StandardOp::Ecall
            }
        }
        _ => StandardOp::Illegal(inst),
    }
}

fn fp_width(f3: u32) -> Option<FpWidth> {
    match f3 {
        funct3::FP_WORD => Some(FpWidth::Single),
        funct3::FP_DOUBLE => Some(FpWidth::Double),
        _ => None,
    }
}

/// Decodes a 16-bit compressed instruction.
///
/// Immediates follow the RVC layout tables; see [`crate::isa::rvc`].
pub fn decode_compressed(inst: u16) -> CompressedOp {
    match inst.quadrant() {
        0 => decode_q0(inst),
        1 => decode_q1(inst),
        2 => decode_q2(inst),
        _ => CompressedOp::Illegal(inst),
    }
}

fn decode_q0(inst: u16) -> CompressedOp {
    let rd = inst.c_rs2_prime();
    let rs1 = inst.c_rs1_prime();
    let rs2 = inst.c_rs2_prime();

    match inst.c_funct3() {
        0 => match rvc::addi4spn_imm(inst) {
            // Covers the all-zero halfword as well.
            0 => CompressedOp::Illegal(inst),
            imm => CompressedOp::Addi4spn { rd, imm },
        },
        1 => CompressedOp::LoadFp {
            width: FpWidth::Double,
            rd,
            rs1,
            imm: rvc::cl_double_imm(inst),
        },
        2 => CompressedOp::Lw {
            rd,
            rs1,
            imm: rvc::cl_word_imm(inst),
        },
        3 => CompressedOp::LoadFp {
            width: FpWidth::Single,
            rd,
            rs1,
            imm: rvc::cl_word_imm(inst),
        },
        5 => CompressedOp::StoreFp {
            width: FpWidth::Double,
            rs1,
            rs2,
            imm: rvc::cl_double_imm(inst),
        },
        6 => CompressedOp::Sw {
            rs1,
            rs2,
            imm: rvc::cl_word_imm(inst),
        },
        7 => CompressedOp::StoreFp {
            width: FpWidth::Single,
            rs1,
            rs2,
            imm: rvc::cl_word_imm(inst),
        },
        _ => CompressedOp::Illegal(inst),
    }
}

fn decode_q1(inst: u16) -> CompressedOp {
    let rd = inst.c_rd();

    match inst.c_funct3() {
        0 => CompressedOp::AluImm {
            op: AluOp::Add,
            rd,
            imm: rvc::ci_imm(inst) as u32,
        },
        1 => CompressedOp::Jump {
            link: true,
            offset: rvc::cj_imm(inst),
        },
        2 => CompressedOp::Li {
            rd,
            imm: rvc::ci_imm(inst) as u32,
        },
        3 if rd == abi::REG_SP => CompressedOp::AluImm {
            op: AluOp::Add,
            rd,
            imm: rvc::addi16sp_imm(inst) as u32,
        },
        3 => CompressedOp::Li {
            rd,
            imm: rvc::lui_imm(inst) as u32,
        },
        4 => decode_misc_alu(inst),
        5 => CompressedOp::Jump {
            link: false,
            offset: rvc::cj_imm(inst),
        },
        6 => CompressedOp::BranchZero {
            zero: true,
            rs1: inst.c_rs1_prime(),
            offset: rvc::cb_imm(inst),
        },
        _ => CompressedOp::BranchZero {
            zero: false,
            rs1: inst.c_rs1_prime(),
            offset: rvc::cb_imm(inst),
        },
    }
}

fn decode_misc_alu(inst: u16) -> CompressedOp {
    let rd = inst.c_rs1_prime();

    match inst.c_funct2() {
        // shamt[5] must be clear on RV32.
        0 | 1 if inst.c_bit12() => CompressedOp::Illegal(inst),
        0 => CompressedOp::AluImm {
            op: AluOp::Srl,
            rd,
            imm: rvc::ci_uimm(inst),
        },
        1 => CompressedOp::AluImm {
            op: AluOp::Sra,
            rd,
            imm: rvc::ci_uimm(inst),
        },
        2 => CompressedOp::AluImm {
            op: AluOp::And,
            rd,
            imm: rvc::ci_imm(inst) as u32,
        },
        _ if inst.c_bit12() => CompressedOp::Illegal(inst),
        _ => {
            let op = match inst.c_funct2_low() {
                0 => AluOp::Sub,
                1 => AluOp::Xor,
                2 => AluOp::Or,
                _ => AluOp::And,
            };
            CompressedOp::Alu {
                op,
                rd,
                rs2: inst.c_rs2_prime(),
            }
        }
    }
}

fn decode_q2(inst: u16) -> CompressedOp {
    let rd = inst.c_rd();
    let rs2 = inst.c_rs2();
    let sp = abi::REG_SP;

    match inst.c_funct3() {
        0 if inst.c_bit12() => CompressedOp::Illegal(inst),
        0 => CompressedOp::AluImm {
            op: AluOp::Sll,
            rd,
            imm: rvc::ci_uimm(inst),
        },
        1 => CompressedOp::LoadFp {
            width: FpWidth::Double,
            rd,
            rs1: sp,
            imm: rvc::ldsp_imm(inst),
        },
        2 => CompressedOp::Lw {
            rd,
            rs1: sp,
            imm: rvc::lwsp_imm(inst),
        },
        3 => CompressedOp::LoadFp {
            width: FpWidth::Single,
            rd,
            rs1: sp,
            imm: rvc::lwsp_imm(inst),
        },
        4 => match (inst.c_bit12(), rd, rs2) {
            (false, 0, 0) => CompressedOp::Illegal(inst),
            (false, rs1, 0) => CompressedOp::JumpReg { link: false, rs1 },
            (false, rd, rs2) => CompressedOp::Mv { rd, rs2 },
            (true, 0, 0) => CompressedOp::Ebreak,
            (true, rs1, 0) => CompressedOp::JumpReg { link: true, rs1 },
            (true, rd, rs2) => CompressedOp::Alu {
                op: AluOp::Add,
                rd,
                rs2,
            },
        },
        5 => CompressedOp::StoreFp {
            width: FpWidth::Double,
            rs1: sp,
            rs2,
            imm: rvc::sdsp_imm(inst),
        },
        6 => CompressedOp::Sw {
            rs1: sp,
            rs2,
            imm: rvc::swsp_imm(inst),
        },
        _ => CompressedOp::StoreFp {
            width: FpWidth::Single,
            rs1: sp,
            rs2,
            imm: rvc::swsp_imm(inst),
        },
    }
}
