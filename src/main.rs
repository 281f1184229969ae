//! RISC-V 32-bit Emulator CLI.
//!
//! The main executable for the emulator. It parses the command line,
//! assembles a [`Machine`] from the configuration, loads the ROM image and
//! runs frames until the guest calls exit.
//!
//! Guest output goes to stdout, guest diagnostics and all emulator messages
//! go to stderr.

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::PathBuf;
use std::process;

use rv32_emulator::common::SimError;
use rv32_emulator::config::Config;
use rv32_emulator::sim::{loader, terminal, Machine};
use rv32_emulator::soc::StdConsole;

/// Command-line arguments for the emulator.
///
/// Flags override the corresponding configuration file values.
#[derive(Parser, Debug)]
#[command(author, version, about = "RISC-V RV32IMC Emulator")]
struct Args {
    /// Flat ROM image, loaded at address 0.
    #[arg(default_value = "rom.bin")]
    rom: PathBuf,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<String>,

    /// Log every executed instruction.
    #[arg(short, long)]
    trace: bool,

    /// Log loader and scheduler messages.
    #[arg(short, long)]
    verbose: bool,

    /// Instructions per second.
    #[arg(long)]
    freq: Option<u32>,

    /// Frames per second.
    #[arg(long)]
    framerate: Option<u32>,

    /// Stop after this many frames even if the guest has not exited.
    #[arg(long)]
    max_frames: Option<u64>,

    /// Print statistics on exit.
    #[arg(long)]
    stats: bool,

    /// Write statistics as JSON to this file on exit.
    #[arg(long)]
    stats_json: Option<PathBuf>,

    /// Wait for a keypress before exiting.
    #[arg(long)]
    pause: bool,
}

/// Main entry point for the emulator.
///
/// # Behavior
///
/// 1. **Configuration**: Parses arguments, loads the optional TOML file and
///    applies flag overrides.
/// 2. **Initialization**: Installs the logger and builds the machine with
///    the standard-stream console.
/// 3. **Loader**: Reads the ROM image and copies it to address 0.
/// 4. **Simulation Loop**: Runs paced frames until the guest exits.
/// 5. **Teardown**: Reports statistics and exits with the guest's exit code.
fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("\n[!] FATAL: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<i32, SimError> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    apply_overrides(&mut config, &args);

    let level = if config.general.trace_instructions || cfg!(feature = "always-trace") {
        LevelFilter::Trace
    } else if args.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).init()?;

    let rom = loader::load_binary(&args.rom)?;
    let mut machine = Machine::new(&config, Box::new(StdConsole::new()))?;
    machine.load_image(&rom);

    let frames = machine.run(args.max_frames);
    log::info!("[Sim] Stopped after {} frames", frames);

    if !machine.is_halted() {
        log::warn!("[Sim] Guest did not exit");
        machine.cpu.dump_state();
    }

    if args.stats {
        machine.cpu.stats.print();
    }
    if let Some(path) = &args.stats_json {
        machine.cpu.stats.write_json(path)?;
    }

    if args.pause || config.general.pause_on_exit {
        eprintln!("\n[*] Press any key to exit...");
        terminal::wait_for_key()?;
    }

    let code = machine.exit_code().unwrap_or(0);
    log::info!("[Sim] Exiting with code {}", code as i32);
    Ok((code & 0xff) as i32)
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if args.trace {
        config.general.trace_instructions = true;
    }
    if let Some(freq) = args.freq {
        config.timing.cpu_freq = freq;
    }
    if let Some(framerate) = args.framerate {
        config.timing.framerate = framerate;
    }
}
