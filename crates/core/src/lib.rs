// crates/core/src/lib.rs
//! Validation of tab separated `kN<TAB>vN` record streams.
//!
//! A stream is a sequence of text lines, each holding a key of the form
//! `k` + suffix and a value that must be `v` + the same suffix, separated
//! by the first tab on the line. A blank line or the end of the stream
//! terminates the run; the first offending line aborts it.

use std::io::BufRead;

pub mod error;
pub mod record;
pub mod stats;

use crate::error::{CheckError, Result};
use crate::record::Record;
use crate::stats::Report;

/// Validate tab separated key/value records from `reader`.
///
/// Reads one line at a time until a blank line (after stripping
/// surrounding whitespace) or the end of input; the two termination paths
/// are indistinguishable. Each non-blank line must parse as a
/// `kN<TAB>vN` record whose value echoes the key suffix.
///
/// Returns the count of validated records. Validation is all-or-nothing:
/// the count accumulated before a failing line is dropped with the error.
///
/// # Errors
///
/// Returns [`CheckError::Read`] when the reader fails,
/// [`CheckError::Malformed`] for a line that does not parse as a record
/// and [`CheckError::ValueMismatch`] when a value does not match the one
/// derived from its key. Every error names the 1-based line it was
/// raised on; lines past it are never read.
pub fn validate<R: BufRead>(mut reader: R) -> Result<Report> {
    let mut report = Report::new();
    let mut buf = String::new();
    let mut line = 0usize;

    loop {
        line += 1;
        buf.clear();
        let bytes = reader
            .read_line(&mut buf)
            .map_err(|source| CheckError::Read { line, source })?;
        if bytes == 0 {
            // End of input terminates like a blank line.
            break;
        }

        let trimmed = buf.trim();
        if trimmed.is_empty() {
            break;
        }

        let record = Record::parse(trimmed)
            .map_err(|source| CheckError::Malformed { line, source })?;
        if !record.matches() {
            return Err(CheckError::ValueMismatch {
                line,
                expected: record.expected_value(),
                actual: record.value.to_string(),
            });
        }
        report.records += 1;
    }

    Ok(report)
}
