//! Text and JSON Lines rendering of search results.

use std::io::Write;

use super::models::{FileReport, MatchRecord};
use crate::AppError;

/// Writes `path:line:column: text` followed by one indented line per capture.
pub(crate) fn write_human<W: Write>(out: &mut W, record: &MatchRecord) -> Result<(), AppError> {
    writeln!(
        out,
        "{}:{}:{}: {}",
        record.path, record.line, record.column, record.text
    )?;
    for (index, capture) in record.captures.iter().enumerate() {
        writeln!(out, "    ${} = {capture}", index + 1)?;
    }
    Ok(())
}

/// Writes one JSON object per line.
pub(crate) fn write_json_line<W, T>(out: &mut W, value: &T) -> Result<(), AppError>
where
    W: Write,
    T: serde::Serialize,
{
    serde_json::to_writer(&mut *out, value).map_err(AppError::SerialiseMatch)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Writes `path:count`.
pub(crate) fn write_human_count<W: Write>(out: &mut W, report: &FileReport) -> Result<(), AppError> {
    writeln!(out, "{}:{}", report.path, report.matches.len())?;
    Ok(())
}
