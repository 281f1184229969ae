//! Standard (32-bit) instruction executor.

use crate::core::arch::trap::TrapHandler;
use crate::core::control::StandardOp;
use crate::core::units::alu::Alu;
use crate::core::units::lsu::Lsu;
use crate::core::Cpu;
use crate::isa::abi;
use crate::stats::InstClass;

/// Executes one decoded 32-bit instruction and advances `pc`.
///
/// The next pc defaults to `pc + 4`; taken branches and jumps replace it.
/// Link values are computed from the pc of the executing instruction, and
/// a `jalr` target is read before the link register is written so that
/// `rd == rs1` behaves as a call through that register.
///
/// # Returns
///
/// The class of the instruction, for statistics.
pub fn execute_standard(cpu: &mut Cpu, op: StandardOp) -> InstClass {
    let pc = cpu.pc;
    let link = pc.wrapping_add(4);
    let mut next_pc = link;

    let class = match op {
        StandardOp::Lui { rd, imm } => {
            cpu.regs.write(rd, imm);
            InstClass::Alu
        }
        StandardOp::Auipc { rd, imm } => {
            cpu.regs.write(rd, pc.wrapping_add(imm));
            InstClass::Alu
        }
        StandardOp::Jal { rd, offset } => {
            cpu.regs.write(rd, link);
            next_pc = pc.wrapping_add(offset as u32);
            InstClass::Jump
        }
        StandardOp::Jalr { rd, rs1, offset } => {
            let target = cpu.regs.read(rs1).wrapping_add(offset as u32) & !1;
            cpu.regs.write(rd, link);
            next_pc = target;
            InstClass::Jump
        }
        StandardOp::Branch {
            cond,
            rs1,
            rs2,
            offset,
        } => {
            if cond.taken(cpu.regs.read(rs1), cpu.regs.read(rs2)) {
                next_pc = pc.wrapping_add(offset as u32);
            }
            InstClass::Branch
        }
        StandardOp::Load {
            width,
            signed,
            rd,
            rs1,
            offset,
        } => {
            let addr = cpu.regs.read(rs1).wrapping_add(offset as u32);
            let val = Lsu::load(&mut cpu.bus, addr, width, signed);
            cpu.regs.write(rd, val);
            InstClass::Load
        }
        StandardOp::Store {
            width,
            rs1,
            rs2,
            offset,
        } => {
            let addr = cpu.regs.read(rs1).wrapping_add(offset as u32);
            Lsu::store(&mut cpu.bus, addr, width, cpu.regs.read(rs2));
            InstClass::Store
        }
        StandardOp::LoadFp {
            width,
            rd,
            rs1,
            offset,
        } => {
            let addr = cpu.regs.read(rs1).wrapping_add(offset as u32);
            let bits = Lsu::load_fp(&mut cpu.bus, addr, width);
            cpu.fregs.write(rd, bits);
            InstClass::Load
        }
        StandardOp::StoreFp {
            width,
            rs1,
            rs2,
            offset,
        } => {
            let addr = cpu.regs.read(rs1).wrapping_add(offset as u32);
            Lsu::store_fp(&mut cpu.bus, addr, width, cpu.fregs.read(rs2));
            InstClass::Store
        }
        StandardOp::OpImm { op, rd, rs1, imm } => {
            let val = Alu::execute(op, cpu.regs.read(rs1), imm);
            cpu.regs.write(rd, val);
            InstClass::Alu
        }
        StandardOp::Op { op, rd, rs1, rs2 } => {
            let val = Alu::execute(op, cpu.regs.read(rs1), cpu.regs.read(rs2));
            cpu.regs.write(rd, val);
            InstClass::Alu
        }
        StandardOp::Ecall => {
            let ret = TrapHandler::ecall(cpu);
            cpu.regs.write(abi::REG_A0, ret);
            InstClass::System
        }
        StandardOp::Fence | StandardOp::Ebreak => InstClass::System,
        StandardOp::Illegal(raw) => {
            cpu.illegal_instruction(raw);
            InstClass::Illegal
        }
    };

    cpu.pc = next_pc;
    class
}
