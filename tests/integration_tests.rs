//! End-to-end tests running ROM images through the assembled machine.

#[path = "support/mod.rs"]
mod support;

use rv32_emulator::config::Config;
use rv32_emulator::sim::{loader, Machine};
use rv32_emulator::soc::BufferedConsole;
use std::io::Write;
use support::*;

fn boot(config: &Config, image: &[u8], console: BufferedConsole) -> Machine {
    let mut machine = Machine::new(config, Box::new(console)).expect("valid config");
    machine.load_image(image);
    machine
}

/// Tests the add-and-report program: 5 + 7 goes to the diagnostic port.
#[test]
fn test_rom_add_to_diagnostic_port() {
    let rom = words_to_bytes(&[
        addi(1, 0, 5),
        addi(2, 0, 7),
        add(3, 1, 2),
        lui(4, 0xF000_0000),
        sw(3, 4, 8),
        addi(17, 0, 93),
        ECALL,
    ]);
    let console = BufferedConsole::new();
    let mut machine = boot(&test_config(), &rom, console.clone());

    machine.run(Some(10));
    assert!(machine.is_halted());
    assert_eq!(console.diagnostic(), vec![12]);
    assert!(console.output().is_empty());
}

/// Tests a program that copies console input to output until end of stream.
#[test]
fn test_rom_echo_until_eof() {
    let rom = words_to_bytes(&[
        lui(4, 0xF000_0000),
        lw(5, 4, 0),
        addi(6, 0, -1),
        enc_b(12, 6, 5, 0),
        sw(5, 4, 4),
        enc_j(-16, 0),
        addi(17, 0, 93),
        ECALL,
    ]);
    let console = BufferedConsole::with_input(b"hello, rv32\n");
    let mut machine = boot(&test_config(), &rom, console.clone());

    machine.run(Some(10));
    assert!(machine.is_halted());
    assert_eq!(console.output(), b"hello, rv32\n".to_vec());
}

/// Tests that the guest's exit argument becomes the exit code.
#[test]
fn test_rom_exit_code() {
    let rom = words_to_bytes(&[addi(10, 0, 42), addi(17, 0, 93), ECALL]);
    let mut machine = boot(&test_config(), &rom, BufferedConsole::new());

    machine.run(Some(10));
    assert_eq!(machine.exit_code(), Some(42));
    assert_eq!(machine.cpu.regs.read(10), 0);
}

/// Tests that the default reset pc of 0x80000000 wraps onto the image at 0.
#[test]
fn test_default_reset_pc_wraps_to_image() {
    let rom = words_to_bytes(&[addi(10, 0, 1), addi(17, 0, 93), ECALL]);
    let mut config = Config::default();
    config.timing.cpu_freq = 500;
    let mut machine = boot(&config, &rom, BufferedConsole::new());

    assert_eq!(machine.cpu.pc, 0x8000_0000);
    machine.run(Some(1));
    assert_eq!(machine.exit_code(), Some(1));
}

/// Tests a compressed program computing 1 + 2 + ... + 10 in a loop.
#[test]
fn test_rom_compressed_loop() {
    // c.li a0, 0 ; c.li a1, 10 ; loop: c.add a0, a1 ; c.addi a1, -1 ;
    // c.bnez a1, loop ; c.li a7, 31 ; c.addi a7, 31 ; c.addi a7, 31 ;
    // ecall (with a7 = 93)
    let mut rom = halves_to_bytes(&[0x4501, 0x45A9, 0x952E, 0x15FD, 0xFDF5, 0x48FD, 0x08FD, 0x08FD]);
    rom.extend(words_to_bytes(&[ECALL]));
    let mut machine = boot(&test_config(), &rom, BufferedConsole::new());

    machine.run(Some(10));
    assert!(machine.is_halted());
    assert_eq!(machine.exit_code(), Some(55));
}

/// Tests loading a ROM from disk into a machine.
#[test]
fn test_rom_from_file() {
    let rom = words_to_bytes(&[addi(10, 0, 9), addi(17, 0, 93), ECALL]);
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(&rom).expect("write rom");

    let image = loader::load_binary(file.path()).expect("load rom");
    assert_eq!(image, rom);

    let mut machine = boot(&test_config(), &image, BufferedConsole::new());
    machine.run(Some(10));
    assert_eq!(machine.exit_code(), Some(9));
}

/// Tests that a missing ROM file is an error rather than an empty image.
#[test]
fn test_missing_rom_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = loader::load_binary(dir.path().join("missing.bin")).unwrap_err();
    assert!(err.to_string().contains("missing.bin"));
}
