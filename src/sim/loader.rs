//! ROM image loader.

use std::fs;
use std::path::Path;

use crate::common::SimError;

/// Reads a flat binary image from disk.
///
/// The image is returned verbatim; truncation to memory capacity happens
/// when it is copied onto the bus.
///
/// # Errors
///
/// [`SimError::RomRead`] if the file is missing or unreadable.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, SimError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| SimError::RomRead {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("[Loader] Read {} bytes from {}", data.len(), path.display());
    Ok(data)
}
