//! Frame pacer.
//!
//! Runs the core in frames of `cpu_freq / framerate` instructions and
//! sleeps away whatever is left of each frame period, so the guest sees an
//! average rate of `cpu_freq` instructions per second. Pacing is best
//! effort: a frame that overruns its deadline is not compensated for, the
//! next frame simply starts late.

use std::thread;
use std::time::{Duration, Instant};

use crate::config::TimingConfig;
use crate::core::Cpu;

/// Source of wall-clock time for the pacer.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;

    /// Blocks for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// The host clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Outcome of one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameReport {
    /// Instructions executed; always the full frame budget.
    pub executed: u64,
    /// Time spent sleeping after the budget was executed.
    pub slept: Duration,
    /// True if execution finished after the frame deadline.
    pub overrun: bool,
}

/// Frame-based pacer driving a [`Cpu`].
pub struct Scheduler<C: Clock = SystemClock> {
    cycles_per_frame: u32,
    frame_period: Duration,
    clock: C,
    next_deadline: Option<Instant>,
}

impl Scheduler<SystemClock> {
    /// Creates a pacer on the host clock.
    pub fn new(timing: &TimingConfig) -> Self {
        Self::with_clock(timing, SystemClock)
    }
}

impl<C: Clock> Scheduler<C> {
    /// Creates a pacer on an explicit clock.
    ///
    /// A zero framerate is treated as one frame per second; configurations
    /// are validated before they get here.
    pub fn with_clock(timing: &TimingConfig, clock: C) -> Self {
        let framerate = timing.framerate.max(1);
        Self {
            cycles_per_frame: timing.cycles_per_frame(),
            frame_period: Duration::from_secs(1) / framerate,
            clock,
            next_deadline: None,
        }
    }

    /// Instructions executed per frame.
    pub fn cycles_per_frame(&self) -> u32 {
        self.cycles_per_frame
    }

    /// Wall-clock length of one frame.
    pub fn frame_period(&self) -> Duration {
        self.frame_period
    }

    /// Returns the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Executes one frame's instruction budget and sleeps until its deadline.
    ///
    /// The deadline is the previous frame's deadline plus one frame period,
    /// or now plus one period on the first frame. The halted flag is not
    /// consulted here, so the whole budget runs even if the program halts
    /// part way through.
    pub fn run_one_frame(&mut self, cpu: &mut Cpu) -> FrameReport {
        let start = self.next_deadline.unwrap_or_else(|| self.clock.now());
        let deadline = start + self.frame_period;
        self.next_deadline = Some(deadline);

        for _ in 0..self.cycles_per_frame {
            cpu.step();
        }

        let now = self.clock.now();
        let (slept, overrun) = match deadline.checked_duration_since(now) {
            Some(remaining) if !remaining.is_zero() => {
                self.clock.sleep(remaining);
                (remaining, false)
            }
            _ => (Duration::ZERO, now > deadline),
        };

        cpu.stats.frames += 1;
        cpu.stats.host_sleep_us += slept.as_micros() as u64;
        if overrun {
            cpu.stats.frames_overrun += 1;
            log::debug!("[Sim] Frame {} overran by {:?}", cpu.stats.frames, now - deadline);
        }

        FrameReport {
            executed: self.cycles_per_frame as u64,
            slept,
            overrun,
        }
    }

    /// Runs frames until the core halts or `max_frames` frames have run.
    ///
    /// The halted flag is checked once per frame, before the frame starts.
    ///
    /// # Returns
    ///
    /// The number of frames executed.
    pub fn run(&mut self, cpu: &mut Cpu, max_frames: Option<u64>) -> u64 {
        let mut frames = 0;
        while !cpu.is_halted() {
            if max_frames.is_some_and(|max| frames >= max) {
                log::info!("[Sim] Frame limit of {} reached", frames);
                break;
            }
            self.run_one_frame(cpu);
            frames += 1;
        }
        frames
    }
}
