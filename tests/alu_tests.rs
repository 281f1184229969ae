//! Unit tests for ALU operations.

use rv32_emulator::core::control::AluOp;
use rv32_emulator::core::units::alu::Alu;

/// Tests wrapping addition and subtraction.
#[test]
fn test_alu_add_sub() {
    assert_eq!(Alu::execute(AluOp::Add, 10, 20), 30);
    assert_eq!(Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1), 0);
    assert_eq!(Alu::execute(AluOp::Sub, 30, 10), 20);
    assert_eq!(Alu::execute(AluOp::Sub, 0, 1), 0xFFFF_FFFF);
}

/// Tests shifts, including that only the low 5 bits of the amount count.
#[test]
fn test_alu_shifts() {
    assert_eq!(Alu::execute(AluOp::Sll, 1, 3), 8);
    assert_eq!(Alu::execute(AluOp::Sll, 1, 31), 0x8000_0000);
    assert_eq!(Alu::execute(AluOp::Sll, 1, 33), 2);
    assert_eq!(Alu::execute(AluOp::Srl, 0x8000_0000, 31), 1);
    assert_eq!(Alu::execute(AluOp::Sra, 0x8000_0000, 31), 0xFFFF_FFFF);
    assert_eq!(Alu::execute(AluOp::Sra, 0x4000_0000, 30), 1);
    assert_eq!(Alu::execute(AluOp::Srl, 0xF0, 0x24), 0x0F);
}

/// Tests signed and unsigned set-less-than.
#[test]
fn test_alu_compare() {
    assert_eq!(Alu::execute(AluOp::Slt, (-1i32) as u32, 1), 1);
    assert_eq!(Alu::execute(AluOp::Sltu, (-1i32) as u32, 1), 0);
    assert_eq!(Alu::execute(AluOp::Slt, 5, 5), 0);
    assert_eq!(Alu::execute(AluOp::Sltu, 0, 1), 1);
}

/// Tests bitwise logic operations.
#[test]
fn test_alu_logic() {
    assert_eq!(Alu::execute(AluOp::And, 0b1100, 0b1010), 0b1000);
    assert_eq!(Alu::execute(AluOp::Or, 0b1100, 0b1010), 0b1110);
    assert_eq!(Alu::execute(AluOp::Xor, 0b1100, 0b1010), 0b0110);
}

/// Tests the low-word multiply.
#[test]
fn test_alu_mul() {
    assert_eq!(Alu::execute(AluOp::Mul, 6, 7), 42);
    assert_eq!(Alu::execute(AluOp::Mul, 0x1_0001, 0x1_0001), 0x0002_0001);
    assert_eq!(Alu::execute(AluOp::Mul, (-3i32) as u32, 4), (-12i32) as u32);
}

/// Tests the three multiply-high variants.
#[test]
fn test_alu_mul_high() {
    let minus_one = (-1i32) as u32;
    assert_eq!(Alu::execute(AluOp::Mulh, minus_one, minus_one), 0);
    assert_eq!(Alu::execute(AluOp::Mulhu, 0xFFFF_FFFF, 0xFFFF_FFFF), 0xFFFF_FFFE);
    assert_eq!(Alu::execute(AluOp::Mulhsu, minus_one, 0xFFFF_FFFF), 0xFFFF_FFFF);
    assert_eq!(Alu::execute(AluOp::Mulh, 0x8000_0000, 0x8000_0000), 0x4000_0000);
    assert_eq!(Alu::execute(AluOp::Mulhu, 0x8000_0000, 2), 1);
}

/// Tests ordinary signed and unsigned division and remainder.
#[test]
fn test_alu_div_rem() {
    assert_eq!(Alu::execute(AluOp::Div, (-7i32) as u32, 2), (-3i32) as u32);
    assert_eq!(Alu::execute(AluOp::Rem, (-7i32) as u32, 2), (-1i32) as u32);
    assert_eq!(Alu::execute(AluOp::Divu, 7, 2), 3);
    assert_eq!(Alu::execute(AluOp::Remu, 7, 2), 1);
    assert_eq!(Alu::execute(AluOp::Divu, 0xFFFF_FFFF, 2), 0x7FFF_FFFF);
}

/// Tests that division by zero yields all ones and remainder the dividend.
#[test]
fn test_alu_div_by_zero() {
    assert_eq!(Alu::execute(AluOp::Div, 42, 0), 0xFFFF_FFFF);
    assert_eq!(Alu::execute(AluOp::Divu, 42, 0), 0xFFFF_FFFF);
    assert_eq!(Alu::execute(AluOp::Rem, (-42i32) as u32, 0), (-42i32) as u32);
    assert_eq!(Alu::execute(AluOp::Remu, 42, 0), 42);
}

/// Tests that `i32::MIN / -1` overflows to `i32::MIN` with remainder 0.
#[test]
fn test_alu_div_overflow() {
    let min = i32::MIN as u32;
    let minus_one = (-1i32) as u32;
    assert_eq!(Alu::execute(AluOp::Div, min, minus_one), min);
    assert_eq!(Alu::execute(AluOp::Rem, min, minus_one), 0);
}
