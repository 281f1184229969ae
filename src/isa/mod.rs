//! RISC-V RV32IMC instruction set definitions.
//!
//! This module holds everything that is a property of the encoding rather
//! than of the simulated machine: register ABI names, opcode and function
//! field values, syscall numbers, field extraction for 32-bit and 16-bit
//! words, and the raw field decoders.

/// ABI register indices.
pub mod abi;

/// Raw 32-bit field decoder.
pub mod decode;

/// Bit-field accessors for instruction words.
pub mod instruction;

/// Opcode and function field constants.
pub mod opcodes;

/// Compressed (RVC) immediate reconstruction.
pub mod rvc;

/// Environment call numbers.
pub mod sys_ops;

pub use opcodes::{funct3, funct7};
