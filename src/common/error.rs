//! Error types for the host-facing layers.
//!
//! The CPU core itself never fails: addresses wrap, unknown encodings are
//! no-ops and division is total. Errors only arise while loading the
//! configuration or the ROM image, exporting statistics, or setting up the
//! host process.

use thiserror::Error;

/// Errors raised outside of the fetch-decode-execute core.
#[derive(Debug, Error)]
pub enum SimError {
    /// The ROM image could not be read from disk.
    #[error("could not read ROM image '{path}': {source}")]
    RomRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be read from disk.
    #[error("could not read config '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::Config`].
    #[error("could not parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Memory capacity must be a power of two of at least four bytes.
    #[error("memory size {0:#x} must be a power of two between 4 bytes and 4 GiB")]
    MemorySize(u64),

    /// Timing parameters leave no instructions to run per frame.
    #[error("invalid timing: cpu_freq={cpu_freq} framerate={framerate}")]
    Timing { cpu_freq: u32, framerate: u32 },

    /// Statistics could not be serialized.
    #[error("could not serialize statistics: {0}")]
    StatsEncode(#[from] serde_json::Error),

    /// The logger backend was already installed.
    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    /// Any other host I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
