//! Candidate source
//!
//! Reads newline-separated candidates. Every input line becomes one
//! candidate, empty lines included; invalid UTF-8 is replaced rather than
//! rejected.

use std::io::{self, BufRead};
use tracing::debug;

/// Read every line of `reader` as a candidate
///
/// Lines are split on `\n` with one trailing `\r` removed.
///
/// # Errors
///
/// Returns any I/O error raised by the reader.
pub fn read_candidates(mut reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut candidates = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        candidates.push(String::from_utf8_lossy(&buf).into_owned());
    }

    debug!(count = candidates.len(), "read candidates");
    Ok(candidates)
}
