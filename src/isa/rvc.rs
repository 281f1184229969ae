//! Compressed (RVC) immediate reconstruction.
//!
//! Each compressed format scatters its immediate across the 16-bit word in a
//! different order. The functions here gather those groups back into a
//! contiguous value following the RVC layout tables of the RISC-V unprivileged
//! specification. Unsigned offsets are returned as `u32`, signed immediates
//! are returned already sign-extended to their nominal width.

use crate::common::sign_extend;

/// `C.ADDI4SPN`: `nzuimm[5:4|9:6|2|3]` in bits 12:5, scaled by 4.
pub fn addi4spn_imm(inst: u16) -> u32 {
    let i = inst as u32;
    ((i >> 7) & 0x30) | ((i >> 1) & 0x3c0) | ((i >> 4) & 0x4) | ((i >> 2) & 0x8)
}

/// `C.LW`/`C.SW`/`C.FLW`/`C.FSW`: `uimm[5:3]` in 12:10, `uimm[2|6]` in 6:5.
pub fn cl_word_imm(inst: u16) -> u32 {
    let i = inst as u32;
    ((i >> 7) & 0x38) | ((i >> 4) & 0x4) | ((i << 1) & 0x40)
}

/// `C.FLD`/`C.FSD`: `uimm[5:3]` in 12:10, `uimm[7:6]` in 6:5.
pub fn cl_double_imm(inst: u16) -> u32 {
    let i = inst as u32;
    ((i >> 7) & 0x38) | ((i << 1) & 0xc0)
}

/// CI-format 6-bit immediate (`imm[5]` in bit 12, `imm[4:0]` in 6:2), signed.
///
/// Used by `C.ADDI`, `C.LI` and `C.ANDI`.
pub fn ci_imm(inst: u16) -> i32 {
    sign_extend(ci_uimm(inst), 6)
}

/// CI-format 6-bit field without sign extension, used as a shift amount.
pub fn ci_uimm(inst: u16) -> u32 {
    let i = inst as u32;
    ((i >> 7) & 0x20) | ((i >> 2) & 0x1f)
}

/// `C.LUI`: `nzimm[17]` in bit 12, `nzimm[16:12]` in 6:2, signed from 18 bits.
pub fn lui_imm(inst: u16) -> i32 {
    let i = inst as u32;
    sign_extend(((i << 5) & 0x2_0000) | ((i << 10) & 0x1_f000), 18)
}

/// `C.ADDI16SP`: `nzimm[9]` in bit 12, `nzimm[4|6|8:7|5]` in 6:2, signed.
pub fn addi16sp_imm(inst: u16) -> i32 {
    let i = inst as u32;
    let imm = ((i >> 3) & 0x200)
        | ((i >> 2) & 0x10)
        | ((i << 1) & 0x40)
        | ((i << 4) & 0x180)
        | ((i << 3) & 0x20);
    sign_extend(imm, 10)
}

/// CJ-format jump offset `[11|4|9:8|10|6|7|3:1|5]` in bits 12:2, signed.
///
/// Used by `C.J` and `C.JAL`.
pub fn cj_imm(inst: u16) -> i32 {
    let i = inst as u32;
    let imm = ((i >> 1) & 0x800)
        | ((i >> 7) & 0x10)
        | ((i >> 1) & 0x300)
        | ((i << 2) & 0x400)
        | ((i >> 1) & 0x40)
        | ((i << 1) & 0x80)
        | ((i >> 2) & 0xe)
        | ((i << 3) & 0x20);
    sign_extend(imm, 12)
}

/// CB-format branch offset: `[8|4:3]` in 12:10, `[7:6|2:1|5]` in 6:2, signed.
///
/// Used by `C.BEQZ` and `C.BNEZ`.
pub fn cb_imm(inst: u16) -> i32 {
    let i = inst as u32;
    let imm = ((i >> 4) & 0x100)
        | ((i >> 7) & 0x18)
        | ((i << 1) & 0xc0)
        | ((i >> 2) & 0x6)
        | ((i << 3) & 0x20);
    sign_extend(imm, 9)
}

/// `C.LWSP`/`C.FLWSP`: `uimm[5]` in bit 12, `uimm[4:2|7:6]` in 6:2.
pub fn lwsp_imm(inst: u16) -> u32 {
    let i = inst as u32;
    ((i >> 7) & 0x20) | ((i >> 2) & 0x1c) | ((i << 4) & 0xc0)
}

/// `C.FLDSP`: `uimm[5]` in bit 12, `uimm[4:3|8:6]` in 6:2.
pub fn ldsp_imm(inst: u16) -> u32 {
    let i = inst as u32;
    ((i >> 7) & 0x20) | ((i >> 2) & 0x18) | ((i << 4) & 0x1c0)
}

/// `C.SWSP`/`C.FSWSP`: `uimm[5:2|7:6]` in bits 12:7.
pub fn swsp_imm(inst: u16) -> u32 {
    let i = inst as u32;
    ((i >> 7) & 0x3c) | ((i >> 1) & 0xc0)
}

/// `C.FSDSP`: `uimm[5:3|8:6]` in bits 12:7.
pub fn sdsp_imm(inst: u16) -> u32 {
    let i = inst as u32;
    ((i >> 7) & 0x38) | ((i >> 1) & 0x1c0)
}
