//! System Bus Interconnect.
//!
//! This module implements the system bus, which routes every CPU memory
//! access either to main memory or to the console device. Three fixed
//! addresses are intercepted on 32-bit accesses only, compared against the
//! raw (unmasked) address before memory wraparound is applied. Byte and
//! half-word accesses to the same addresses reach ordinary memory.

use super::memory::Memory;
use super::traits::Console;

/// Console input port: a 32-bit load returns the next input character.
pub const IO_INPUT: u32 = 0xF000_0000;

/// Console output port: a 32-bit store writes its low byte to the output stream.
pub const IO_OUTPUT: u32 = 0xF000_0004;

/// Diagnostic port: a 32-bit store writes its low byte to the diagnostic stream.
pub const IO_DIAGNOSTIC: u32 = 0xF000_0008;

/// System interconnect bus.
///
/// Owns main memory and the console device behind the I/O ports.
pub struct Bus {
    /// Main memory.
    pub mem: Memory,

    console: Box<dyn Console>,
}

impl Bus {
    /// Creates a bus over `mem` with `console` attached to the I/O ports.
    pub fn new(mem: Memory, console: Box<dyn Console>) -> Self {
        log::info!(
            "[Bus] Memory: {} bytes (mask {:#010x}), console: {} @ {:#010x}",
            mem.size(),
            mem.mask(),
            console.name(),
            IO_INPUT
        );
        Self { mem, console }
    }

    /// Loads a binary image into memory starting at address 0.
    ///
    /// Returns the number of bytes written after truncation to capacity.
    pub fn load_image(&mut self, data: &[u8]) -> usize {
        let written = self.mem.load_image(data);
        log::info!("[Loader] Writing {} bytes to {:#x}", written, 0);
        if written < data.len() {
            log::warn!(
                "[Loader] Image truncated: {} of {} bytes fit in memory",
                written,
                data.len()
            );
        }
        written
    }

    /// Returns the attached console device.
    pub fn console_mut(&mut self) -> &mut dyn Console {
        self.console.as_mut()
    }

    /// Drains buffered console output.
    pub fn flush(&mut self) {
        self.console.flush();
    }

    /// Reads a byte. Never intercepted by the I/O ports.
    #[inline(always)]
    pub fn read_u8(&mut self, addr: u32) -> u8 {
        self.mem.read_u8(addr)
    }

    /// Reads a half-word. Never intercepted by the I/O ports.
    #[inline(always)]
    pub fn read_u16(&mut self, addr: u32) -> u16 {
        self.mem.read_u16(addr)
    }

    /// Reads a word, serving the console input port.
    ///
    /// Loads from the output and diagnostic ports fall through to memory.
    #[inline(always)]
    pub fn read_u32(&mut self, addr: u32) -> u32 {
        match addr {
            IO_INPUT => self.console.read_char(),
            _ => self.mem.read_u32(addr),
        }
    }

    /// Writes a byte. Never intercepted by the I/O ports.
    #[inline(always)]
    pub fn write_u8(&mut self, addr: u32, val: u8) {
        self.mem.write_u8(addr, val);
    }

    /// Writes a half-word. Never intercepted by the I/O ports.
    #[inline(always)]
    pub fn write_u16(&mut self, addr: u32, val: u16) {
        self.mem.write_u16(addr, val);
    }

    /// Writes a word, serving the console ports.
    ///
    /// Stores to the input port are discarded.
    #[inline(always)]
    pub fn write_u32(&mut self, addr: u32, val: u32) {
        match addr {
            IO_INPUT => {}
            IO_OUTPUT => self.console.write_output(val as u8),
            IO_DIAGNOSTIC => self.console.write_diagnostic(val as u8),
            _ => self.mem.write_u32(addr, val),
        }
    }
}
