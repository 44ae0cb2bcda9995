/// Report driver: scan each file in order and write its rows to a sink.
use crate::error::ScanError;
use crate::scan::scan_file;
use std::io::Write;
use std::path::PathBuf;

/// Totals for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub rows_emitted: usize,
}

/// Scan `files` in order, writing one line per row to `out`.
///
/// Stops at the first error; rows already written stay written.
pub fn run<W: Write>(files: &[PathBuf], out: &mut W) -> Result<RunSummary, ScanError> {
    let mut summary = RunSummary::default();

    for path in files {
        let mut rows = 0usize;
        for row in scan_file(path)? {
            let row = row?;
            writeln!(out, "{row}").map_err(ScanError::Write)?;
            rows += 1;
        }
        tracing::debug!(path = %path.display(), rows, "scanned log file");
        summary.files_scanned += 1;
        summary.rows_emitted += rows;
    }

    out.flush().map_err(ScanError::Write)?;
    Ok(summary)
}
