//! The conversion pipeline: parse, group, encode, package.
//!
//! One linear pass per invocation with no shared state, so independent
//! conversions may run concurrently. A parse failure aborts the run with no
//! archive; missing-field losses are recovered locally and only summarized
//! in the report.

use std::io::{Cursor, Seek, Write};
use std::path::Path;

use crate::archive::write_archive_to_writer;
use crate::bookmark::{Diagnostics, group_by_file, parse_bookmarks};
use crate::error::Result;
use crate::io::{ProgressFn, read_source};

/// Outcome of one conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Report {
    /// Number of label track entries written to the archive.
    pub entries: usize,
    /// Aggregated warnings for bookmarks that lost data.
    pub diagnostics: Diagnostics,
}

/// Convert bookmark XML text into a label track archive.
///
/// Writes the archive to `writer` and returns the run report. On a parse
/// failure nothing is written.
pub fn convert_str<W: Write + Seek>(xml: &str, writer: W) -> Result<Report> {
    let records = parse_bookmarks(xml)?;

    let mut diagnostics = Diagnostics::default();
    let grouped = group_by_file(records, &mut diagnostics);
    write_archive_to_writer(&grouped, writer, &mut diagnostics)?;

    Ok(Report {
        entries: grouped.len(),
        diagnostics,
    })
}

/// Convert a bookmark export file on disk into an archive file on disk.
///
/// `progress` observes byte progress of the input read; it plays no part in
/// the conversion itself. The archive is built in memory and only written to
/// `output` once the conversion has succeeded, so a failed run leaves
/// whatever was at `output` untouched.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    progress: Option<&mut ProgressFn<'_>>,
) -> Result<Report> {
    let xml = read_source(input, progress)?;

    let mut buffer = Cursor::new(Vec::new());
    let report = convert_str(&xml, &mut buffer)?;
    std::fs::write(output, buffer.into_inner())?;

    Ok(report)
}
