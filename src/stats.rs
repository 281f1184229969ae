//! Simulation statistics collection and reporting.
//!
//! Tracks the executed instruction mix and the pacing behavior of the
//! scheduler, and renders them either as a text report on stderr or as a
//! JSON document.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::common::SimError;

/// Broad class of an executed instruction, reported by the executors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstClass {
    Alu,
    Load,
    Store,
    Branch,
    Jump,
    System,
    /// An encoding that names no supported operation.
    Illegal,
}

/// Simulation statistics.
///
/// Counters are updated by [`SimStats::record`] once per executed
/// instruction and by the scheduler once per frame.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,

    pub instructions_retired: u64,
    pub inst_compressed: u64,
    pub inst_standard: u64,

    pub inst_alu: u64,
    pub inst_load: u64,
    pub inst_store: u64,
    pub inst_branch: u64,
    pub inst_jump: u64,
    pub inst_system: u64,
    pub inst_illegal: u64,

    pub frames: u64,
    pub frames_overrun: u64,
    pub host_sleep_us: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_compressed: 0,
            inst_standard: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_system: 0,
            inst_illegal: 0,
            frames: 0,
            frames_overrun: 0,
            host_sleep_us: 0,
        }
    }
}

impl SimStats {
    /// Counts one executed instruction.
    ///
    /// Illegal encodings are counted separately and do not retire.
    pub fn record(&mut self, class: InstClass, compressed: bool) {
        let counter = match class {
            InstClass::Alu => &mut self.inst_alu,
            InstClass::Load => &mut self.inst_load,
            InstClass::Store => &mut self.inst_store,
            InstClass::Branch => &mut self.inst_branch,
            InstClass::Jump => &mut self.inst_jump,
            InstClass::System => &mut self.inst_system,
            InstClass::Illegal => {
                self.inst_illegal += 1;
                return;
            }
        };
        *counter += 1;

        self.instructions_retired += 1;
        if compressed {
            self.inst_compressed += 1;
        } else {
            self.inst_standard += 1;
        }
    }

    /// Prints a formatted summary to stderr.
    ///
    /// Stdout carries guest output, so the report never goes there.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let mips = if seconds > 0.0 {
            (self.instructions_retired as f64 / seconds) / 1_000_000.0
        } else {
            0.0
        };
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        eprintln!("\n==========================================================");
        eprintln!("RV32 EMULATOR STATISTICS");
        eprintln!("==========================================================");
        eprintln!("host_seconds             {:.4} s", seconds);
        eprintln!("sim_insts                {}", self.instructions_retired);
        eprintln!("sim_mips                 {:.2}", mips);
        eprintln!("----------------------------------------------------------");
        eprintln!("INSTRUCTION MIX");
        eprintln!(
            "  enc.compressed         {} ({:.2}%)",
            self.inst_compressed,
            pct(self.inst_compressed)
        );
        eprintln!(
            "  enc.standard           {} ({:.2}%)",
            self.inst_standard,
            pct(self.inst_standard)
        );
        eprintln!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
        eprintln!("  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load));
        eprintln!("  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store));
        eprintln!("  op.branch              {} ({:.2}%)", self.inst_branch, pct(self.inst_branch));
        eprintln!("  op.jump                {} ({:.2}%)", self.inst_jump, pct(self.inst_jump));
        eprintln!("  op.system              {} ({:.2}%)", self.inst_system, pct(self.inst_system));
        eprintln!("  op.illegal             {}", self.inst_illegal);
        eprintln!("----------------------------------------------------------");
        eprintln!("PACING");
        eprintln!("  frames                 {}", self.frames);
        eprintln!("  frames.overrun         {}", self.frames_overrun);
        eprintln!(
            "  host.sleep             {:.4} s",
            self.host_sleep_us as f64 / 1_000_000.0
        );
        eprintln!("==========================================================");
    }

    /// Writes the counters to `path` as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<(), SimError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        log::info!("[Sim] Statistics written to {}", path.display());
        Ok(())
    }
}
