//! High-level, ergonomic library API: minimize single numerals and scan lists of
//! numerals (in memory, from any `BufRead`, or from a file) for the characters
//! saved by rewriting each one in minimal form. Prefer these entrypoints over
//! the low-level `core` modules when integrating numerus.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::params::SavingsParams;
use crate::core::{decode, encode};
use crate::error::{Error, Result};
use crate::types::InvalidLinePolicy;

/// Rewrite a numeral in its minimal form.
pub fn minimize(numeral: &str) -> Result<String> {
    encode(decode(numeral)?)
}

/// True if `numeral` is already written in minimal form.
pub fn is_minimal(numeral: &str) -> Result<bool> {
    Ok(minimize(numeral)? == numeral)
}

/// Characters saved by writing one line's numeral in minimal form.
/// Surrounding whitespace is trimmed before decoding and does not count.
/// Negative when the input is a token sequence shorter than its minimal form (`IXIX`).
pub fn line_savings(line: &str) -> Result<i64> {
    let numeral = line.trim();
    let minimal = minimize(numeral)?;
    Ok(char_delta(numeral, &minimal))
}

fn char_delta(original: &str, minimal: &str) -> i64 {
    original.len() as i64 - minimal.len() as i64
}

/// A line that failed to decode during a scan run with `InvalidLinePolicy::Skip`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidLine {
    /// 1-based line number
    pub line: usize,
    pub text: String,
    pub message: String,
}

/// Summary of a savings scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SavingsReport {
    /// Lines read, including skipped and invalid ones
    pub lines: usize,
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub original_chars: usize,
    pub minimal_chars: usize,
    pub saved: i64,
    pub invalid: Vec<InvalidLine>,
}

impl SavingsReport {
    fn record(&mut self, original: &str, minimal: &str) {
        self.processed += 1;
        self.original_chars += original.len();
        self.minimal_chars += minimal.len();
        self.saved += char_delta(original, minimal);
    }
}

fn scan_line(
    report: &mut SavingsReport,
    line_no: usize,
    raw: &str,
    params: &SavingsParams,
) -> Result<()> {
    report.lines += 1;
    let numeral = raw.trim();

    if numeral.is_empty() && params.skip_blank_lines {
        debug!("Skipping blank line {}", line_no);
        report.skipped += 1;
        return Ok(());
    }

    match minimize(numeral) {
        Ok(minimal) => {
            debug!("Line {}: {} -> {}", line_no, numeral, minimal);
            report.record(numeral, &minimal);
            Ok(())
        }
        Err(e) => reject_line(report, line_no, numeral, e, params),
    }
}

fn reject_line(
    report: &mut SavingsReport,
    line_no: usize,
    text: &str,
    err: Error,
    params: &SavingsParams,
) -> Result<()> {
    match params.on_invalid {
        InvalidLinePolicy::Abort => Err(err.at_line(line_no)),
        InvalidLinePolicy::Skip => {
            warn!("Skipping line {}: {}", line_no, err);
            report.errors += 1;
            report.invalid.push(InvalidLine {
                line: line_no,
                text: text.to_string(),
                message: err.to_string(),
            });
            Ok(())
        }
    }
}

/// Scan an in-memory list of lines
pub fn savings_from_lines<I, S>(lines: I, params: &SavingsParams) -> Result<SavingsReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = SavingsReport::default();
    for (idx, line) in lines.into_iter().enumerate() {
        scan_line(&mut report, idx + 1, line.as_ref(), params)?;
    }
    info!(
        "Scan complete: lines={} processed={} skipped={} errors={} saved={}",
        report.lines, report.processed, report.skipped, report.errors, report.saved
    );
    Ok(report)
}

/// Scan lines from any buffered reader. Bytes that are not UTF-8 make the
/// line an invalid numeral; only read failures always abort.
pub fn savings_from_reader<R: BufRead>(
    mut reader: R,
    params: &SavingsParams,
) -> Result<SavingsReport> {
    let mut report = SavingsReport::default();
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        match std::str::from_utf8(&buf) {
            Ok(line) => scan_line(&mut report, line_no, line, params)?,
            Err(e) => {
                report.lines += 1;
                let text = String::from_utf8_lossy(&buf);
                let text = text.trim();
                let err = Error::invalid_numeral(text, e.valid_up_to());
                reject_line(&mut report, line_no, text, err, params)?;
            }
        }
    }
    info!(
        "Scan complete: lines={} processed={} skipped={} errors={} saved={}",
        report.lines, report.processed, report.skipped, report.errors, report.saved
    );
    Ok(report)
}

/// Scan a file holding one numeral per line
pub fn savings_from_path(path: &Path, params: &SavingsParams) -> Result<SavingsReport> {
    info!("Reading numerals from {:?}", path);
    let file = File::open(path)?;
    savings_from_reader(BufReader::new(file), params)
}

/// Render a report as pretty JSON
pub fn report_to_json(report: &SavingsReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Error::from)
}
