//! System-on-Chip Traits.
//!
//! This module defines the interface of the character device that sits
//! behind the memory-mapped I/O ports. The bus talks to it through a trait
//! object so the host can supply standard streams, in-memory buffers, or
//! anything else that moves bytes.

/// Value returned by [`Console::read_char`] when the input is exhausted.
///
/// Matches a C `EOF` (-1) reinterpreted as an unsigned 32-bit word.
pub const INPUT_EOF: u32 = u32::MAX;

/// Character device behind the console ports.
pub trait Console {
    /// Returns the user-friendly name of the device.
    ///
    /// Used for logging purposes.
    fn name(&self) -> &str;

    /// Reads the next input character, or [`INPUT_EOF`] at end of stream.
    fn read_char(&mut self) -> u32;

    /// Writes one byte to the primary output stream.
    fn write_output(&mut self, byte: u8);

    /// Writes one byte to the diagnostic output stream.
    fn write_diagnostic(&mut self, byte: u8);

    /// Drains any buffered output. Called when the machine halts.
    fn flush(&mut self) {}
}
