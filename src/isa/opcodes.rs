//! Primary opcodes and function field values for RV32IM plus the F/D
//! load/store subset.

pub const OP_LOAD: u32 = 0x03;
pub const OP_LOAD_FP: u32 = 0x07;
pub const OP_MISC_MEM: u32 = 0x0F;
pub const OP_IMM: u32 = 0x13;
pub const OP_AUIPC: u32 = 0x17;
pub const OP_STORE: u32 = 0x23;
pub const OP_STORE_FP: u32 = 0x27;
pub const OP_REG: u32 = 0x33;
pub const OP_LUI: u32 = 0x37;
pub const OP_BRANCH: u32 = 0x63;
pub const OP_JALR: u32 = 0x67;
pub const OP_JAL: u32 = 0x6F;
pub const OP_SYSTEM: u32 = 0x73;

/// `funct3` values, grouped by the opcode they qualify.
pub mod funct3 {
    pub const BEQ: u32 = 0x0;
    pub const BNE: u32 = 0x1;
    pub const BLT: u32 = 0x4;
    pub const BGE: u32 = 0x5;
    pub const BLTU: u32 = 0x6;
    pub const BGEU: u32 = 0x7;

    pub const LB: u32 = 0x0;
    pub const LH: u32 = 0x1;
    pub const LW: u32 = 0x2;
    pub const LBU: u32 = 0x4;
    pub const LHU: u32 = 0x5;

    pub const SB: u32 = 0x0;
    pub const SH: u32 = 0x1;
    pub const SW: u32 = 0x2;

    /// Single-precision width for `FLW`/`FSW`.
    pub const FP_WORD: u32 = 0x2;
    /// Double-precision width for `FLD`/`FSD`.
    pub const FP_DOUBLE: u32 = 0x3;

    pub const ADD_SUB: u32 = 0x0;
    pub const SLL: u32 = 0x1;
    pub const SLT: u32 = 0x2;
    pub const SLTU: u32 = 0x3;
    pub const XOR: u32 = 0x4;
    pub const SRL_SRA: u32 = 0x5;
    pub const OR: u32 = 0x6;
    pub const AND: u32 = 0x7;

    pub const MUL: u32 = 0x0;
    pub const MULH: u32 = 0x1;
    pub const MULHSU: u32 = 0x2;
    pub const MULHU: u32 = 0x3;
    pub const DIV: u32 = 0x4;
    pub const DIVU: u32 = 0x5;
    pub const REM: u32 = 0x6;
    pub const REMU: u32 = 0x7;

    pub const JALR: u32 = 0x0;
    pub const PRIV: u32 = 0x0;
}

/// `funct7` bits inspected by the register-register group.
pub mod funct7 {
    /// Bit 0: selects the multiply/divide group.
    pub const M_EXT: u32 = 0x01;
    /// Bit 5 (instruction bit 30): selects `sub` and arithmetic shifts.
    pub const ALT: u32 = 0x20;
}
