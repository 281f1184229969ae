//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by both executors. It handles
//! the RV32I arithmetic, logical and shift operations and the RV32M
//! multiply/divide operations on 32-bit operands.

use crate::core::control::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// All operations are total: additions and multiplications wrap, shift
/// amounts use only their low 5 bits, and division never traps.
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a` - First operand
    /// * `b` - Second operand (also used as shift amount)
    ///
    /// # Returns
    ///
    /// The 32-bit result.
    ///
    /// # Division
    ///
    /// Division follows the RISC-V M extension rather than host semantics:
    /// dividing by zero yields all ones (`div`, `divu`) or the dividend
    /// (`rem`, `remu`), and `i32::MIN / -1` yields `i32::MIN` with a zero
    /// remainder.
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        /// Bit mask for shift amounts (5 bits: 0-31).
        const SHAMT_MASK: u32 = 0x1f;

        /// Number of bits in a word.
        const WORD_BITS: u32 = 32;

        let shamt = b & SHAMT_MASK;
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::Sll => a << shamt,
            AluOp::Srl => a >> shamt,
            AluOp::Sra => ((a as i32) >> shamt) as u32,
            AluOp::Or => a | b,
            AluOp::And => a & b,
            AluOp::Xor => a ^ b,
            AluOp::Slt => ((a as i32) < (b as i32)) as u32,
            AluOp::Sltu => (a < b) as u32,
            AluOp::Mul => a.wrapping_mul(b),
            AluOp::Mulh => ((a as i32 as i64 * b as i32 as i64) >> WORD_BITS) as u32,
            AluOp::Mulhsu => ((a as i32 as i64 * b as i64) >> WORD_BITS) as u32,
            AluOp::Mulhu => ((a as u64 * b as u64) >> WORD_BITS) as u32,
            AluOp::Div => {
                if b == 0 {
                    u32::MAX
                } else {
                    (a as i32).wrapping_div(b as i32) as u32
                }
            }
            AluOp::Divu => {
                if b == 0 {
                    u32::MAX
                } else {
                    a / b
                }
            }
            AluOp::Rem => {
                if b == 0 {
                    a
                } else {
                    (a as i32).wrapping_rem(b as i32) as u32
                }
            }
            AluOp::Remu => {
                if b == 0 {
                    a
                } else {
                    a % b
                }
            }
        }
    }
}
