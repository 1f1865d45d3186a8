//! Newline-terminated field reading into a growable buffer.

use std::io::{self, BufRead};

/// Read one newline-terminated field from `src` into `buf`, replacing its
/// contents and growing it as needed.
///
/// Trailing ASCII whitespace (including the newline and any `\r`) is
/// stripped. Returns `Ok(false)` only when the source is exhausted before
/// any byte is read; a final line without a trailing newline is still a
/// field.
pub fn read_field<R: BufRead + ?Sized>(src: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    let n = src.read_until(b'\n', buf)?;
    if n == 0 {
        return Ok(false);
    }
    while buf.last().is_some_and(|b| b.is_ascii_whitespace()) {
        buf.pop();
    }
    Ok(true)
}
