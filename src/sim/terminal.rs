//! Host terminal helper for the exit pause.

use std::io::{self, Read};

/// Blocks until a single key is pressed on stdin.
///
/// On unix the terminal is switched to non-canonical, no-echo mode for the
/// duration of the read so that no Enter is needed. The previous settings
/// are restored afterwards. If stdin is not a terminal this degrades to a
/// plain one-byte read.
#[cfg(unix)]
pub fn wait_for_key() -> io::Result<()> {
    let fd = libc::STDIN_FILENO;

    // SAFETY: termios is plain data and `tcgetattr` fully initializes it on
    // success; on failure we never read it.
    let mut original: libc::termios = unsafe { std::mem::zeroed() };
    if unsafe { libc::tcgetattr(fd, &mut original) } != 0 {
        return read_one_byte();
    }

    let mut raw = original;
    raw.c_lflag &= !(libc::ICANON | libc::ECHO);
    raw.c_cc[libc::VMIN] = 1;
    raw.c_cc[libc::VTIME] = 0;

    // SAFETY: `raw` is a valid termios derived from the current settings.
    if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &raw) } != 0 {
        return Err(io::Error::last_os_error());
    }

    let result = read_one_byte();

    // A failed restore is ignored; the key read result is what we report.
    // SAFETY: restores the settings read above.
    unsafe { libc::tcsetattr(fd, libc::TCSANOW, &original) };
    result
}

/// Blocks until a line (or one byte) is available on stdin.
#[cfg(not(unix))]
pub fn wait_for_key() -> io::Result<()> {
    read_one_byte()
}

fn read_one_byte() -> io::Result<()> {
    let mut buf = [0u8; 1];
    let _ = io::stdin().lock().read(&mut buf)?;
    Ok(())
}
