//! The RV32IMC core.
//!
//! [`Cpu`] owns the complete architectural state together with the bus, so
//! one `&mut Cpu` is all an instruction needs. [`Cpu::step`] runs a single
//! fetch, decode and execute sequence; pacing and the halt check live in
//! [`crate::sim::Scheduler`].

use super::arch::fpr::Fpr;
use super::arch::gpr::Gpr;
use super::arch::status::Status;
use super::stages::{self, Fetched};
use crate::config::Config;
use crate::soc::Bus;
use crate::stats::SimStats;

/// Processor state and the bus it executes against.
pub struct Cpu {
    pub regs: Gpr,
    /// Bit-pattern carriers for the float load/store instructions.
    pub fregs: Fpr,
    pub pc: u32,
    pub status: Status,
    /// Carried for completeness; nothing reads or writes it.
    pub fcsr: u32,
    pub bus: Bus,
    pub stats: SimStats,

    /// Logs every executed instruction at trace level.
    pub trace: bool,
    /// Treats illegal encodings as fatal instead of as no-ops.
    pub halt_on_illegal: bool,
    /// Value of `a0` passed to the exit syscall, once it has been called.
    pub exit_code: Option<u32>,
}

impl Cpu {
    /// Creates a core in its reset state.
    ///
    /// # Arguments
    ///
    /// * `bus` - The bus, with memory already sized
    /// * `config` - Supplies the reset pc and the trace and illegal policies
    pub fn new(bus: Bus, config: &Config) -> Self {
        let trace = config.general.trace_instructions || cfg!(feature = "always-trace");
        let pc = config.general.start_pc_val();
        log::info!("[Cpu] Reset pc={:#010x}", pc);

        Self {
            regs: Gpr::new(),
            fregs: Fpr::new(),
            pc,
            status: Status::default(),
            fcsr: 0,
            bus,
            stats: SimStats::default(),
            trace,
            halt_on_illegal: config.general.halt_on_illegal,
            exit_code: None,
        }
    }

    /// Copies a ROM image into memory at address 0.
    ///
    /// # Returns
    ///
    /// The number of bytes actually written after truncation to capacity.
    pub fn load_image(&mut self, image: &[u8]) -> usize {
        self.bus.load_image(image)
    }

    /// Returns true once the exit syscall (or an illegal instruction under
    /// `halt_on_illegal`) has set the halted flag.
    pub fn is_halted(&self) -> bool {
        self.status.contains(Status::HALTED)
    }

    /// Executes exactly one instruction.
    ///
    /// Runs regardless of the halted flag; callers decide when to stop.
    pub fn step(&mut self) {
        let fetched = stages::fetch(self);

        if self.trace {
            log::trace!("pc={:#010x} inst={:#010x}", self.pc, fetched.raw());
        }

        let (class, compressed) = match fetched {
            Fetched::Compressed(half) => {
                let op = stages::decode_compressed(half);
                (stages::execute_compressed(self, op), true)
            }
            Fetched::Standard(word) => {
                let op = stages::decode_standard(word);
                (stages::execute_standard(self, op), false)
            }
        };

        self.stats.record(class, compressed);
    }

    /// Handles an encoding that names no supported operation.
    ///
    /// By default the instruction is a no-op and the pc still advances.
    /// With `halt_on_illegal` the core is halted instead.
    pub fn illegal_instruction(&mut self, raw: u32) {
        if self.halt_on_illegal {
            log::warn!(
                "[Cpu] Illegal instruction {:#010x} at pc={:#010x}, halting",
                raw,
                self.pc
            );
            self.status.insert(Status::HALTED);
        } else {
            log::debug!("[Cpu] Illegal instruction {:#010x} at pc={:#010x}", raw, self.pc);
        }
    }

    /// Dumps the pc, status word and integer registers to stderr.
    pub fn dump_state(&self) {
        eprintln!(
            "pc={:#010x} status={:#x} exit={:?}",
            self.pc,
            self.status.bits(),
            self.exit_code
        );
        self.regs.dump();
    }
}
