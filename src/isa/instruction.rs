//! Instruction word field accessors.
//!
//! `InstructionBits` exposes the fixed fields of a 32-bit instruction and
//! the five immediate formats. `CompressedBits` exposes the register and
//! selector fields of a 16-bit compressed instruction; compressed
//! immediates are scattered differently per opcode and live in
//! [`crate::isa::rvc`].

use crate::common::sign_extend;
use crate::isa::abi::RVC_REG_BASE;

/// Field extraction for 32-bit instruction words.
pub trait InstructionBits {
    /// Primary opcode, bits 6:0.
    fn opcode(&self) -> u32;
    /// Destination register, bits 11:7.
    fn rd(&self) -> usize;
    /// `funct3`, bits 14:12.
    fn funct3(&self) -> u32;
    /// First source register, bits 19:15.
    fn rs1(&self) -> usize;
    /// Second source register, bits 24:20.
    fn rs2(&self) -> usize;
    /// `funct7`, bits 31:25.
    fn funct7(&self) -> u32;
    /// I-type immediate, sign-extended from 12 bits.
    fn imm_i(&self) -> i32;
    /// S-type immediate (split across bits 31:25 and 11:7), sign-extended.
    fn imm_s(&self) -> i32;
    /// B-type branch offset, sign-extended from 13 bits.
    fn imm_b(&self) -> i32;
    /// U-type immediate, already shifted into bits 31:12.
    fn imm_u(&self) -> u32;
    /// J-type jump offset, sign-extended from 21 bits.
    fn imm_j(&self) -> i32;
}

impl InstructionBits for u32 {
    #[inline]
    fn opcode(&self) -> u32 {
        *self & 0x7f
    }

    #[inline]
    fn rd(&self) -> usize {
        ((*self >> 7) & 0x1f) as usize
    }

    #[inline]
    fn funct3(&self) -> u32 {
        (*self >> 12) & 0x7
    }

    #[inline]
    fn rs1(&self) -> usize {
        ((*self >> 15) & 0x1f) as usize
    }

    #[inline]
    fn rs2(&self) -> usize {
        ((*self >> 20) & 0x1f) as usize
    }

    #[inline]
    fn funct7(&self) -> u32 {
        (*self >> 25) & 0x7f
    }

    #[inline]
    fn imm_i(&self) -> i32 {
        sign_extend((*self >> 20) & 0xfff, 12)
    }

    #[inline]
    fn imm_s(&self) -> i32 {
        let imm = ((*self >> 20) & (0x7f << 5)) | ((*self >> 7) & 0x1f);
        sign_extend(imm, 12)
    }

    #[inline]
    fn imm_b(&self) -> i32 {
        let imm = ((*self >> 19) & (1 << 12))
            | ((*self << 4) & (1 << 11))
            | ((*self >> 20) & (0x3f << 5))
            | ((*self >> 7) & (0xf << 1));
        sign_extend(imm, 13)
    }

    #[inline]
    fn imm_u(&self) -> u32 {
        *self & 0xffff_f000
    }

    #[inline]
    fn imm_j(&self) -> i32 {
        let imm = ((*self >> 11) & (1 << 20))
            | (*self & (0xff << 12))
            | ((*self >> 9) & (1 << 11))
            | ((*self >> 20) & (0x3ff << 1));
        sign_extend(imm, 21)
    }
}

/// Field extraction for 16-bit compressed instruction words.
pub trait CompressedBits {
    /// Quadrant selector, bits 1:0.
    fn quadrant(&self) -> u16;
    /// Secondary opcode, bits 15:13.
    fn c_funct3(&self) -> u16;
    /// Full-width `rd`/`rs1` field, bits 11:7.
    fn c_rd(&self) -> usize;
    /// Full-width `rs2` field, bits 6:2.
    fn c_rs2(&self) -> usize;
    /// Windowed `rs1'`/`rd'` field (bits 9:7), mapped to x8..x15.
    fn c_rs1_prime(&self) -> usize;
    /// Windowed `rs2'`/`rd'` field (bits 4:2), mapped to x8..x15.
    fn c_rs2_prime(&self) -> usize;
    /// MISC-ALU selector, bits 11:10.
    fn c_funct2(&self) -> u16;
    /// Register-register MISC-ALU selector, bits 6:5.
    fn c_funct2_low(&self) -> u16;
    /// Bit 12, used to disambiguate several quadrant 1/2 encodings.
    fn c_bit12(&self) -> bool;
}

impl CompressedBits for u16 {
    #[inline]
    fn quadrant(&self) -> u16 {
        *self & 0x3
    }

    #[inline]
    fn c_funct3(&self) -> u16 {
        (*self >> 13) & 0x7
    }

    #[inline]
    fn c_rd(&self) -> usize {
        ((*self >> 7) & 0x1f) as usize
    }

    #[inline]
    fn c_rs2(&self) -> usize {
        ((*self >> 2) & 0x1f) as usize
    }

    #[inline]
    fn c_rs1_prime(&self) -> usize {
        RVC_REG_BASE + ((*self >> 7) & 0x7) as usize
    }

    #[inline]
    fn c_rs2_prime(&self) -> usize {
        RVC_REG_BASE + ((*self >> 2) & 0x7) as usize
    }

    #[inline]
    fn c_funct2(&self) -> u16 {
        (*self >> 10) & 0x3
    }

    #[inline]
    fn c_funct2_low(&self) -> u16 {
        (*self >> 5) & 0x3
    }

    #[inline]
    fn c_bit12(&self) -> bool {
        *self & (1 << 12) != 0
    }
}
