//! JSON I/O handling for CLI
//!
//! - Input: one JSON object per line
//! - Output: one JSON object per line
//! - UTF-8 only

use std::io::{BufRead, Write};

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read JSON requests line by line, skipping blank lines.
///
/// Lines are split as raw bytes, so a line that is not UTF-8 or not JSON
/// yields `BadRequest` for that line only. `Io` is reserved for read
/// failures.
pub fn read_requests<R: BufRead>(reader: R) -> impl Iterator<Item = CliResult<Value>> {
    reader
        .split(b'\n')
        .filter(|line| {
            line.as_ref()
                .map_or(true, |l| !l.iter().all(u8::is_ascii_whitespace))
        })
        .map(|line| {
            let line = line.map_err(CliError::from)?;
            parse_line(&line)
        })
}

fn parse_line(line: &[u8]) -> CliResult<Value> {
    let text = std::str::from_utf8(line)
        .map_err(|e| CliError::bad_request(format!("request is not valid UTF-8: {}", e)))?;
    serde_json::from_str(text).map_err(CliError::from)
}

/// Write a success response
pub fn write_response<W: Write>(writer: &mut W, data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });
    write_line(writer, &response)
}

/// Write an error response
pub fn write_error<W: Write>(writer: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });
    write_line(writer, &response)
}

fn write_line<W: Write>(writer: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value).map_err(|e| CliError::Io(e.into()))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
