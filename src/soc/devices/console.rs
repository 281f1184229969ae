//! Console devices.
//!
//! [`StdConsole`] binds the ports to the host process streams: input from
//! stdin, output to stdout, diagnostics to stderr. [`BufferedConsole`] keeps
//! all three streams in shared in-memory buffers, so an embedder (or a test)
//! can feed input and inspect output while the machine owns the device.

use std::collections::VecDeque;
use std::io::{self, Read, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::soc::traits::{Console, INPUT_EOF};

/// Console bound to the host's standard streams.
#[derive(Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn name(&self) -> &str {
        "StdConsole"
    }

    fn read_char(&mut self) -> u32 {
        read_byte(&mut io::stdin().lock(), &mut io::stdout())
    }

    fn write_output(&mut self, byte: u8) {
        io::stdout().write_all(&[byte]).ok();
    }

    fn write_diagnostic(&mut self, byte: u8) {
        io::stderr().write_all(&[byte]).ok();
    }

    fn flush(&mut self) {
        io::stdout().flush().ok();
        io::stderr().flush().ok();
    }
}

/// Reads one byte from `input` for the input port.
///
/// `output` is flushed first so a prompt without a trailing newline is
/// visible while the guest blocks. Interrupted reads are retried; any other
/// error or end of stream yields [`INPUT_EOF`].
fn read_byte<R: Read, W: Write>(input: &mut R, output: &mut W) -> u32 {
    output.flush().ok();

    let mut buf = [0u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(1) => return buf[0] as u32,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            _ => return INPUT_EOF,
        }
    }
}

/// Console that reads from an input queue and appends to output buffers.
///
/// Cloning shares the underlying buffers, so a clone kept by the host sees
/// everything the guest writes through the copy owned by the bus.
#[derive(Clone, Default)]
pub struct BufferedConsole {
    input: Arc<Mutex<VecDeque<u8>>>,
    output: Arc<Mutex<Vec<u8>>>,
    diagnostic: Arc<Mutex<Vec<u8>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

impl BufferedConsole {
    /// Creates a console with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a console whose input stream yields `input` then end of stream.
    pub fn with_input(input: &[u8]) -> Self {
        let console = Self::new();
        console.push_input(input);
        console
    }

    /// Appends bytes to the pending input stream.
    pub fn push_input(&self, bytes: &[u8]) {
        lock(&self.input).extend(bytes.iter().copied());
    }

    /// Returns a copy of everything written to the output port so far.
    pub fn output(&self) -> Vec<u8> {
        lock(&self.output).clone()
    }

    /// Returns a copy of everything written to the diagnostic port so far.
    pub fn diagnostic(&self) -> Vec<u8> {
        lock(&self.diagnostic).clone()
    }
}

impl Console for BufferedConsole {
    fn name(&self) -> &str {
        "BufferedConsole"
    }

    fn read_char(&mut self) -> u32 {
        lock(&self.input)
            .pop_front()
            .map_or(INPUT_EOF, u32::from)
    }

    fn write_output(&mut self, byte: u8) {
        lock(&self.output).push(byte);
    }

    fn write_diagnostic(&mut self, byte: u8) {
        lock(&self.diagnostic).push(byte);
    }
}
