//! The assembled emulator.
//!
//! [`Machine`] wires memory, the console and the core together from a
//! [`Config`] and exposes the collaborator interface the host drives:
//! `load_image`, `is_halted` and `run_one_frame`.

use super::scheduler::{Clock, FrameReport, Scheduler, SystemClock};
use crate::common::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::soc::{Bus, Console, Memory};

/// A core paced by a scheduler.
pub struct Machine<C: Clock = SystemClock> {
    pub cpu: Cpu,
    scheduler: Scheduler<C>,
}

impl Machine<SystemClock> {
    /// Builds a machine on the host clock.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` has an invalid memory size
    /// or timing.
    pub fn new(config: &Config, console: Box<dyn Console>) -> Result<Self, SimError> {
        Self::with_clock(config, console, SystemClock)
    }
}

impl<C: Clock> Machine<C> {
    /// Builds a machine on an explicit clock.
    pub fn with_clock(
        config: &Config,
        console: Box<dyn Console>,
        clock: C,
    ) -> Result<Self, SimError> {
        config.validate()?;

        let mem = Memory::new(config.memory.size_val() as usize);
        let bus = Bus::new(mem, console);
        let cpu = Cpu::new(bus, config);
        let scheduler = Scheduler::with_clock(&config.timing, clock);
        log::info!(
            "[Sim] {} instructions per frame at {} Hz",
            scheduler.cycles_per_frame(),
            config.timing.framerate
        );

        Ok(Self { cpu, scheduler })
    }

    /// Preloads memory with a ROM image at address 0.
    pub fn load_image(&mut self, image: &[u8]) -> usize {
        self.cpu.load_image(image)
    }

    /// Returns true once the core has halted.
    pub fn is_halted(&self) -> bool {
        self.cpu.is_halted()
    }

    /// Executes exactly one frame's instruction budget.
    ///
    /// Console output is flushed if the frame ended with the core halted.
    pub fn run_one_frame(&mut self) -> FrameReport {
        let report = self.scheduler.run_one_frame(&mut self.cpu);
        if self.cpu.is_halted() {
            self.cpu.bus.flush();
        }
        report
    }

    /// Runs frames until the core halts or `max_frames` frames have run.
    ///
    /// # Returns
    ///
    /// The number of frames executed.
    pub fn run(&mut self, max_frames: Option<u64>) -> u64 {
        let frames = self.scheduler.run(&mut self.cpu, max_frames);
        self.cpu.bus.flush();
        frames
    }

    /// Returns the pacer.
    pub fn scheduler(&self) -> &Scheduler<C> {
        &self.scheduler
    }

    /// Returns the guest exit code, if the exit syscall was made.
    pub fn exit_code(&self) -> Option<u32> {
        self.cpu.exit_code
    }
}
