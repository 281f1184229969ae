//! Shared helpers for the integration tests: instruction encoders and a
//! small machine wired to an in-memory console.

#![allow(dead_code)]

use rv32_emulator::config::Config;
use rv32_emulator::core::Cpu;
use rv32_emulator::soc::{BufferedConsole, Bus, Memory};

/// Memory used by test machines; small enough to allocate per test.
pub const TEST_MEM_SIZE: usize = 0x1_0000;

/// Configuration with a reset pc of 0 and [`TEST_MEM_SIZE`] bytes of memory.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.general.start_pc = "0x0".to_string();
    config.memory.size = format!("{:#x}", TEST_MEM_SIZE);
    config
}

/// Builds a core over a buffered console and returns a handle to its buffers.
pub fn test_cpu() -> (Cpu, BufferedConsole) {
    test_cpu_with(&test_config(), BufferedConsole::new())
}

pub fn test_cpu_with(config: &Config, console: BufferedConsole) -> (Cpu, BufferedConsole) {
    let mem = Memory::new(config.memory.size_val() as usize);
    let bus = Bus::new(mem, Box::new(console.clone()));
    (Cpu::new(bus, config), console)
}

/// Flattens instruction words into a little-endian image.
pub fn words_to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// Flattens compressed halfwords into a little-endian image.
pub fn halves_to_bytes(halves: &[u16]) -> Vec<u8> {
    halves.iter().flat_map(|h| h.to_le_bytes()).collect()
}

/// Loads `image` at 0 and steps until halted or `max_steps` instructions ran.
pub fn run_image(image: &[u8], max_steps: usize) -> (Cpu, BufferedConsole) {
    let (mut cpu, console) = test_cpu();
    cpu.load_image(image);
    for _ in 0..max_steps {
        if cpu.is_halted() {
            break;
        }
        cpu.step();
    }
    (cpu, console)
}

/// Runs a straight-line program, one step per word.
pub fn run_words(words: &[u32]) -> (Cpu, BufferedConsole) {
    run_image(&words_to_bytes(words), words.len())
}

pub const OP_LOAD: u32 = 0x03;
pub const OP_LOAD_FP: u32 = 0x07;
pub const OP_IMM: u32 = 0x13;
pub const OP_AUIPC: u32 = 0x17;
pub const OP_STORE: u32 = 0x23;
pub const OP_STORE_FP: u32 = 0x27;
pub const OP_REG: u32 = 0x33;
pub const OP_LUI: u32 = 0x37;
pub const OP_BRANCH: u32 = 0x63;
pub const OP_JALR: u32 = 0x67;
pub const OP_JAL: u32 = 0x6F;

pub const ECALL: u32 = 0x0000_0073;
pub const EBREAK: u32 = 0x0010_0073;
pub const NOP: u32 = 0x0000_0013;

pub fn enc_r(funct7: u32, rs2: u32, rs1: u32, funct3: u32, rd: u32, opcode: u32) -> u32 {
    (funct7 << 25) | (rs2 << 20) | (rs1 << 15) | (funct3 << 12) | (rd << 7) | opcode
}

pub fn enc_i(imm: i32, rs1: u32, funct3: u32, rd: u32, opcode: u32) -> u32 {
    (((imm as u32) & 0xfff) << 20) | (rs1 << 15) | (funct3 << 12) | (rd << 7) | opcode
}

pub fn enc_s(imm: i32, rs2: u32, rs1: u32, funct3: u32, opcode: u32) -> u32 {
    let imm = imm as u32;
    (((imm >> 5) & 0x7f) << 25)
        | (rs2 << 20)
        | (rs1 << 15)
        | (funct3 << 12)
        | ((imm & 0x1f) << 7)
        | opcode
}

pub fn enc_b(imm: i32, rs2: u32, rs1: u32, funct3: u32) -> u32 {
    let imm = imm as u32;
    (((imm >> 12) & 1) << 31)
        | (((imm >> 5) & 0x3f) << 25)
        | (rs2 << 20)
        | (rs1 << 15)
        | (funct3 << 12)
        | (((imm >> 1) & 0xf) << 8)
        | (((imm >> 11) & 1) << 7)
        | OP_BRANCH
}

pub fn enc_u(imm: u32, rd: u32, opcode: u32) -> u32 {
    (imm & 0xffff_f000) | (rd << 7) | opcode
}

pub fn enc_j(imm: i32, rd: u32) -> u32 {
    let imm = imm as u32;
    (((imm >> 20) & 1) << 31)
        | (((imm >> 1) & 0x3ff) << 21)
        | (((imm >> 11) & 1) << 20)
        | (((imm >> 12) & 0xff) << 12)
        | (rd << 7)
        | OP_JAL
}

pub fn addi(rd: u32, rs1: u32, imm: i32) -> u32 {
    enc_i(imm, rs1, 0, rd, OP_IMM)
}

pub fn add(rd: u32, rs1: u32, rs2: u32) -> u32 {
    enc_r(0, rs2, rs1, 0, rd, OP_REG)
}

pub fn lui(rd: u32, imm: u32) -> u32 {
    enc_u(imm, rd, OP_LUI)
}

pub fn lw(rd: u32, rs1: u32, imm: i32) -> u32 {
    enc_i(imm, rs1, 2, rd, OP_LOAD)
}

pub fn sw(rs2: u32, rs1: u32, imm: i32) -> u32 {
    enc_s(imm, rs2, rs1, 2, OP_STORE)
}
