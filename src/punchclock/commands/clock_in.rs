//! Appends a clock-in line to the log and checks that it landed.
//!
//! Line format: `i YYYY-MM-DD HH:MM:SS[ <account>[<delimiter><account>...]]\n`
//!
//! After appending, the log is read back and its final line must equal the
//! rendered one. A mismatch means something else touched the file between
//! the write and the read (another writer, a truncation, a short write) and
//! is reported as [`PunchClockError::PostWriteInvariant`], never as a plain
//! I/O error.
//!
//! There is no locking. Two processes clocking in to the same log at the same
//! time may interleave their lines.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PunchClockError, Result};
use crate::params::InvocationParams;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{error, info};

pub const CLOCK_IN_MARKER: &str = "i";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn render_line(params: &InvocationParams) -> String {
    let mut line = format!(
        "{} {}",
        CLOCK_IN_MARKER,
        params.timestamp().format(TIMESTAMP_FORMAT)
    );
    if !params.accounts().is_empty() {
        let joined = params
            .accounts()
            .iter()
            .map(|account| account.as_str())
            .collect::<Vec<_>>()
            .join(params.delimiter());
        line.push(' ');
        line.push_str(&joined);
    }
    line.push('\n');
    line
}

pub fn run(params: &InvocationParams) -> Result<CmdResult> {
    let path = params.path().as_path();
    let line = render_line(params);

    append(path, &line)?;
    let line_count = verify_last_line(path, &line)?;

    info!(
        path = %path.display(),
        lines = line_count,
        entry = line.trim_end(),
        "clocked in"
    );

    let mut result = CmdResult::default().with_appended_line(line.clone(), line_count);
    result.add_message(CmdMessage::success(format!(
        "Clocked in: {}",
        line.trim_end()
    )));
    Ok(result)
}

fn append(path: &Path, line: &str) -> Result<()> {
    let mut file = OpenOptions::new().append(true).open(path)?;
    file.write_all(line.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// Counts the lines in `path` and checks the last one equals `expected`.
///
/// Lines are compared as bytes; earlier history need not be UTF-8.
/// Returns the line count on success.
pub(crate) fn verify_last_line(path: &Path, expected: &str) -> Result<usize> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut lines = 0;
    let mut last: Option<Vec<u8>> = None;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines += 1;
        match last.as_mut() {
            Some(last) => {
                last.clear();
                last.extend_from_slice(&buf);
            }
            None => last = Some(buf.clone()),
        }
    }

    if lines > 0 && last.as_deref() == Some(expected.as_bytes()) {
        return Ok(lines);
    }

    let found = last.map(|bytes| String::from_utf8_lossy(&bytes).into_owned());
    error!(
        path = %path.display(),
        lines,
        expected = expected.trim_end(),
        found = ?found,
        "log does not end with the appended line"
    );
    Err(PunchClockError::PostWriteInvariant {
        path: path.to_path_buf(),
        expected: expected.to_string(),
        found,
        lines,
    })
}
