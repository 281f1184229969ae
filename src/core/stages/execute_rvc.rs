//! Compressed (16-bit) instruction executor.
//!
//! Mirrors [`super::execute`] with a default advance of 2 bytes. Link
//! values written by `c.jal` and `c.jalr` are `pc + 2`.

use crate::common::MemWidth;
use crate::core::control::CompressedOp;
use crate::core::units::alu::Alu;
use crate::core::units::lsu::Lsu;
use crate::core::Cpu;
use crate::isa::abi;
use crate::stats::InstClass;

/// Executes one decoded compressed instruction and advances `pc`.
pub fn execute_compressed(cpu: &mut Cpu, op: CompressedOp) -> InstClass {
    let pc = cpu.pc;
    let link = pc.wrapping_add(2);
    let mut next_pc = link;

    let class = match op {
        CompressedOp::Addi4spn { rd, imm } => {
            let val = cpu.regs.read(abi::REG_SP).wrapping_add(imm);
            cpu.regs.write(rd, val);
            InstClass::Alu
        }
        CompressedOp::Lw { rd, rs1, imm } => {
            let addr = cpu.regs.read(rs1).wrapping_add(imm);
            let val = Lsu::load(&mut cpu.bus, addr, MemWidth::Word, false);
            cpu.regs.write(rd, val);
            InstClass::Load
        }
        CompressedOp::Sw { rs1, rs2, imm } => {
            let addr = cpu.regs.read(rs1).wrapping_add(imm);
            Lsu::store(&mut cpu.bus, addr, MemWidth::Word, cpu.regs.read(rs2));
            InstClass::Store
        }
        CompressedOp::LoadFp {
            width,
            rd,
            rs1,
            imm,
        } => {
            let addr = cpu.regs.read(rs1).wrapping_add(imm);
            let bits = Lsu::load_fp(&mut cpu.bus, addr, width);
            cpu.fregs.write(rd, bits);
            InstClass::Load
        }
        CompressedOp::StoreFp {
            width,
            rs1,
            rs2,
            imm,
        } => {
            let addr = cpu.regs.read(rs1).wrapping_add(imm);
            Lsu::store_fp(&mut cpu.bus, addr, width, cpu.fregs.read(rs2));
            InstClass::Store
        }
        CompressedOp::AluImm { op, rd, imm } => {
            let val = Alu::execute(op, cpu.regs.read(rd), imm);
            cpu.regs.write(rd, val);
            InstClass::Alu
        }
        CompressedOp::Alu { op, rd, rs2 } => {
            let val = Alu::execute(op, cpu.regs.read(rd), cpu.regs.read(rs2));
            cpu.regs.write(rd, val);
            InstClass::Alu
        }
        CompressedOp::Li { rd, imm } => {
            cpu.regs.write(rd, imm);
            InstClass::Alu
        }
        CompressedOp::Mv { rd, rs2 } => {
            let val = cpu.regs.read(rs2);
            cpu.regs.write(rd, val);
            InstClass::Alu
        }
        CompressedOp::Jump { link: with_link, offset } => {
            if with_link {
                cpu.regs.write(abi::REG_RA, link);
            }
            next_pc = pc.wrapping_add(offset as u32);
            InstClass::Jump
        }
        CompressedOp::JumpReg { link: with_link, rs1 } => {
            let target = cpu.regs.read(rs1) & !1;
            if with_link {
                cpu.regs.write(abi::REG_RA, link);
            }
            next_pc = target;
            InstClass::Jump
        }
        CompressedOp::BranchZero { zero, rs1, offset } => {
            if (cpu.regs.read(rs1) == 0) == zero {
                next_pc = pc.wrapping_add(offset as u32);
            }
            InstClass::Branch
        }
        CompressedOp::Ebreak => InstClass::System,
        CompressedOp::Illegal(raw) => {
            cpu.illegal_instruction(raw as u32);
            InstClass::Illegal
        }
    };

    cpu.pc = next_pc;
    class
}
