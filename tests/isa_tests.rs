//! Tests for 32-bit instruction decoding and execution.

#[path = "support/mod.rs"]
mod support;

use rv32_emulator::common::MemWidth;
use rv32_emulator::core::control::{AluOp, BranchCond, FpWidth, StandardOp};
use rv32_emulator::core::stages::decode_standard;
use rv32_emulator::isa::instruction::InstructionBits;
use support::*;

/// Tests extraction of the fixed fields and the immediate formats.
#[test]
fn test_field_extraction() {
    let inst = enc_r(0x20, 3, 2, 0, 1, OP_REG);
    assert_eq!(inst.opcode(), OP_REG);
    assert_eq!(inst.rd(), 1);
    assert_eq!(inst.rs1(), 2);
    assert_eq!(inst.rs2(), 3);
    assert_eq!(inst.funct7(), 0x20);

    assert_eq!(addi(1, 0, -1).imm_i(), -1);
    assert_eq!(sw(1, 2, -4).imm_s(), -4);
    assert_eq!(enc_b(-8, 1, 2, 0).imm_b(), -8);
    assert_eq!(enc_b(4094, 1, 2, 0).imm_b(), 4094);
    assert_eq!(enc_j(-2, 1).imm_j(), -2);
    assert_eq!(enc_j(0xF_FFFE, 1).imm_j(), 0xF_FFFE);
    assert_eq!(lui(1, 0xABCD_E000).imm_u(), 0xABCD_E000);
}

/// Tests that each opcode group decodes to the expected operation.
#[test]
fn test_decode_standard_groups() {
    assert_eq!(
        decode_standard(add(3, 1, 2)),
        StandardOp::Op {
            op: AluOp::Add,
            rd: 3,
            rs1: 1,
            rs2: 2
        }
    );
    assert_eq!(
        decode_standard(enc_r(0x20, 2, 1, 0, 3, OP_REG)),
        StandardOp::Op {
            op: AluOp::Sub,
            rd: 3,
            rs1: 1,
            rs2: 2
        }
    );
    assert_eq!(
        decode_standard(enc_r(0x01, 2, 1, 7, 3, OP_REG)),
        StandardOp::Op {
            op: AluOp::Remu,
            rd: 3,
            rs1: 1,
            rs2: 2
        }
    );
    assert_eq!(
        decode_standard(enc_i(0x405, 1, 5, 2, OP_IMM)),
        StandardOp::OpImm {
            op: AluOp::Sra,
            rd: 2,
            rs1: 1,
            imm: 5
        }
    );
    assert_eq!(
        decode_standard(enc_i(-1, 1, 4, 2, OP_LOAD)),
        StandardOp::Load {
            width: MemWidth::Byte,
            signed: false,
            rd: 2,
            rs1: 1,
            offset: -1
        }
    );
    assert_eq!(
        decode_standard(enc_b(16, 2, 1, 6)),
        StandardOp::Branch {
            cond: BranchCond::Ltu,
            rs1: 1,
            rs2: 2,
            offset: 16
        }
    );
    assert_eq!(
        decode_standard(enc_i(8, 2, 3, 4, OP_LOAD_FP)),
        StandardOp::LoadFp {
            width: FpWidth::Double,
            rd: 4,
            rs1: 2,
            offset: 8
        }
    );
    assert_eq!(decode_standard(ECALL), StandardOp::Ecall);
    assert_eq!(decode_standard(EBREAK), StandardOp::Ebreak);
    assert_eq!(decode_standard(0x0000_000F), StandardOp::Fence);
}

/// Tests that unsupported encodings decode as illegal.
#[test]
fn test_decode_standard_illegal() {
    let csrrw = 0x3000_1073;
    assert_eq!(decode_standard(csrrw), StandardOp::Illegal(csrrw));
    let bad_branch = enc_b(8, 0, 0, 2);
    assert_eq!(decode_standard(bad_branch), StandardOp::Illegal(bad_branch));
    let bad_load = enc_i(0, 0, 3, 1, OP_LOAD);
    assert_eq!(decode_standard(bad_load), StandardOp::Illegal(bad_load));
    assert_eq!(decode_standard(0xFFFF_FFFF), StandardOp::Illegal(0xFFFF_FFFF));
}

/// Tests upper-immediate instructions.
#[test]
fn test_exec_lui_auipc() {
    let (cpu, _) = run_words(&[lui(1, 0x1234_5000), enc_u(0x1000, 2, OP_AUIPC)]);
    assert_eq!(cpu.regs.read(1), 0x1234_5000);
    assert_eq!(cpu.regs.read(2), 0x1004);
}

/// Tests that `jal` links `pc + 4` and jumps to `pc + offset`.
#[test]
fn test_exec_jal_links_and_jumps() {
    let (mut cpu, _) = test_cpu();
    cpu.load_image(&words_to_bytes(&[NOP, NOP, enc_j(12, 1)]));
    cpu.pc = 8;
    cpu.step();
    assert_eq!(cpu.regs.read(1), 12);
    assert_eq!(cpu.pc, 20);
}

/// Tests `jalr` with rd == rs1 and the cleared low target bit.
#[test]
fn test_exec_jalr() {
    let (mut cpu, _) = test_cpu();
    cpu.load_image(&words_to_bytes(&[enc_i(3, 5, 0, 5, OP_JALR)]));
    cpu.regs.write(5, 0x100);
    cpu.step();
    assert_eq!(cpu.pc, 0x102);
    assert_eq!(cpu.regs.read(5), 4);
}

/// Tests taken and not-taken branches of each comparison kind.
#[test]
fn test_exec_branches() {
    let cases = [
        (0, 5, 5, true),
        (1, 5, 5, false),
        (4, (-1i32) as u32, 1, true),
        (5, (-1i32) as u32, 1, false),
        (6, (-1i32) as u32, 1, false),
        (7, (-1i32) as u32, 1, true),
    ];
    for (f3, a, b, taken) in cases {
        let (mut cpu, _) = test_cpu();
        cpu.load_image(&words_to_bytes(&[enc_b(-4, 2, 1, f3)]));
        cpu.pc = 0;
        cpu.regs.write(1, a);
        cpu.regs.write(2, b);
        cpu.step();
        let expected = if taken { 0u32.wrapping_sub(4) } else { 4 };
        assert_eq!(cpu.pc, expected, "funct3={}", f3);
    }
}

/// Tests load sign and zero extension and narrow stores.
#[test]
fn test_exec_loads_and_stores() {
    let (cpu, _) = run_words(&[
        addi(1, 0, 0x400),
        addi(2, 0, -2),
        sw(2, 1, 0),
        enc_i(0, 1, 0, 3, OP_LOAD),
        enc_i(0, 1, 4, 4, OP_LOAD),
        enc_i(0, 1, 1, 5, OP_LOAD),
        enc_i(0, 1, 5, 6, OP_LOAD),
        enc_s(5, 2, 1, 0, OP_STORE),
        lw(7, 1, 4),
    ]);
    assert_eq!(cpu.regs.read(3), 0xFFFF_FFFE);
    assert_eq!(cpu.regs.read(4), 0xFE);
    assert_eq!(cpu.regs.read(5), 0xFFFF_FFFE);
    assert_eq!(cpu.regs.read(6), 0xFFFE);
    assert_eq!(cpu.regs.read(7), 0x0000_FE00);
}

/// Tests that float load/store moves raw bits, doubles as two words.
#[test]
fn test_exec_fp_transfers() {
    let (mut cpu, _) = test_cpu();
    cpu.bus.mem.write_u32(0x200, 0x5444_2D18);
    cpu.bus.mem.write_u32(0x204, 0x4009_21FB);
    cpu.load_image(&words_to_bytes(&[
        enc_i(0x200, 0, 3, 1, OP_LOAD_FP),
        enc_s(0x300, 1, 0, 3, OP_STORE_FP),
        enc_i(0x204, 0, 2, 2, OP_LOAD_FP),
        enc_s(0x310, 2, 0, 2, OP_STORE_FP),
    ]));
    for _ in 0..4 {
        cpu.step();
    }
    assert_eq!(cpu.fregs.read(1), 0x4009_21FB_5444_2D18);
    assert_eq!(cpu.fregs.read(2), 0x4009_21FB);
    assert_eq!(cpu.bus.mem.read_u32(0x300), 0x5444_2D18);
    assert_eq!(cpu.bus.mem.read_u32(0x304), 0x4009_21FB);
    assert_eq!(cpu.bus.mem.read_u32(0x310), 0x4009_21FB);
    assert_eq!(cpu.bus.mem.read_u32(0x314), 0);
}

/// Tests that writes targeting x0 leave it reading zero.
#[test]
fn test_exec_x0_stays_zero() {
    let (cpu, _) = run_words(&[addi(0, 0, 5), lui(0, 0xFFFF_F000), enc_j(4, 0)]);
    assert_eq!(cpu.regs.read(0), 0);
}

/// Tests that a straight-line program stops at its last word.
#[test]
fn test_exec_straight_line_stops_at_end() {
    let (cpu, _) = run_words(&[addi(1, 0, 1), addi(1, 1, 1)]);
    assert_eq!(cpu.regs.read(1), 2);
    assert_eq!(cpu.pc, 8);
    assert_eq!(cpu.stats.instructions_retired, 2);
    assert_eq!(cpu.stats.inst_illegal, 0);
}

/// Tests that an illegal instruction is a counted no-op by default.
#[test]
fn test_exec_illegal_is_noop() {
    let (cpu, _) = run_words(&[0xFFFF_FFFF, addi(1, 0, 1)]);
    assert_eq!(cpu.regs.read(1), 1);
    assert_eq!(cpu.pc, 8);
    assert_eq!(cpu.stats.inst_illegal, 1);
    assert!(!cpu.is_halted());
}

/// Tests that `halt_on_illegal` stops the core on an illegal instruction.
#[test]
fn test_exec_illegal_halts_when_configured() {
    let mut config = test_config();
    config.general.halt_on_illegal = true;
    let (mut cpu, _) = test_cpu_with(&config, Default::default());
    cpu.load_image(&words_to_bytes(&[0xFFFF_FFFF]));
    cpu.step();
    assert!(cpu.is_halted());
    assert_eq!(cpu.exit_code, None);
}

/// Tests that `ecall` with a7 = 93 halts, records a0 and clears it.
#[test]
fn test_exec_exit_syscall() {
    let (cpu, _) = run_words(&[addi(10, 0, 7), addi(17, 0, 93), ECALL, addi(1, 0, 1)]);
    assert!(cpu.is_halted());
    assert_eq!(cpu.exit_code, Some(7));
    assert_eq!(cpu.regs.read(10), 0);
    assert_eq!(cpu.regs.read(1), 0);
}

/// Tests that other syscalls only clear a0, and ebreak does nothing.
#[test]
fn test_exec_other_syscall() {
    let (cpu, _) = run_words(&[addi(10, 0, 7), addi(17, 0, 64), ECALL, EBREAK]);
    assert!(!cpu.is_halted());
    assert_eq!(cpu.regs.read(10), 0);
    assert_eq!(cpu.pc, 16);
}
