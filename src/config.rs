use serde::Deserialize;
use std::fs;

use crate::common::SimError;

const DEFAULT_START_PC: u32 = 0x8000_0000;
const DEFAULT_MEM_SIZE: u64 = 64 * 1024 * 1024;
const MAX_MEM_SIZE: u64 = 1 << 32;

const CPU_FREQ: u32 = 1_000_000;
const FRAMERATE: u32 = 50;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

impl Config {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &str) -> Result<Self, SimError> {
        let content = fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a TOML configuration document. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, SimError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Checks the values that the core relies on as invariants.
    pub fn validate(&self) -> Result<(), SimError> {
        let size = self.memory.size_val();
        if !size.is_power_of_two() || !(4..=MAX_MEM_SIZE).contains(&size) {
            return Err(SimError::MemorySize(size));
        }
        if self.timing.framerate == 0 || self.timing.cycles_per_frame() == 0 {
            return Err(SimError::Timing {
                cpu_freq: self.timing.cpu_freq,
                framerate: self.timing.framerate,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneralConfig {
    #[serde(default)]
    pub trace_instructions: bool,
    #[serde(default = "default_start_pc")]
    pub start_pc: String,
    #[serde(default)]
    pub halt_on_illegal: bool,
    #[serde(default)]
    pub pause_on_exit: bool,
}

impl GeneralConfig {
    pub fn start_pc_val(&self) -> u32 {
        let s = self.start_pc.trim_start_matches("0x");
        u32::from_str_radix(s, 16).unwrap_or(DEFAULT_START_PC)
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: default_start_pc(),
            halt_on_illegal: false,
            pause_on_exit: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MemoryConfig {
    #[serde(default = "default_mem_size")]
    pub size: String,
}

impl MemoryConfig {
    pub fn size_val(&self) -> u64 {
        parse_hex(&self.size, DEFAULT_MEM_SIZE)
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: default_mem_size(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TimingConfig {
    #[serde(default = "default_cpu_freq")]
    pub cpu_freq: u32,
    #[serde(default = "default_framerate")]
    pub framerate: u32,
}

impl TimingConfig {
    /// Instructions executed per wall-clock frame.
    pub fn cycles_per_frame(&self) -> u32 {
        self.cpu_freq.checked_div(self.framerate).unwrap_or(0)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            cpu_freq: CPU_FREQ,
            framerate: FRAMERATE,
        }
    }
}

fn parse_hex(s: &str, default: u64) -> u64 {
    let s = s.trim_start_matches("0x");
    u64::from_str_radix(s, 16).unwrap_or(default)
}

fn default_start_pc() -> String {
    format!("{:#x}", DEFAULT_START_PC)
}

fn default_mem_size() -> String {
    format!("{:#x}", DEFAULT_MEM_SIZE)
}

fn default_cpu_freq() -> u32 {
    CPU_FREQ
}

fn default_framerate() -> u32 {
    FRAMERATE
}
