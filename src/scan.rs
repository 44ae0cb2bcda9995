/// Per-file scanning: thread the current frame size through a file's lines
/// and yield one output row per percentile line.
use crate::classify::{classify_line, FrameSize, LineKind, PercentileRecord};
use crate::error::ScanError;
use std::fmt;
use std::collections::VecDeque;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// One emitted row: frame size, app percentiles, and the source file's basename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub frame: FrameSize,
    pub record: PercentileRecord,
    pub source: String,
}

impl fmt::Display for OutputRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.record;
        write!(
            f,
            "{},{},{},{},{},{},{},{},{},{}",
            self.frame.width,
            self.frame.height,
            r.app,
            r.p1,
            r.p5,
            r.p75,
            r.p9,
            r.p95,
            r.p99,
            self.source
        )
    }
}

/// Apply one line to the per-file frame size.
///
/// Frame-size lines replace `frame`; percentile lines produce a row tagged
/// with `source`; anything else is ignored.
pub fn step(frame: &mut FrameSize, line: &str, source: &str) -> Option<OutputRow> {
    match classify_line(line) {
        LineKind::FrameSizeLine(size) => {
            *frame = size;
            None
        }
        LineKind::PercentileLine(record) => Some(OutputRow {
            frame: frame.clone(),
            record,
            source: source.to_string(),
        }),
        LineKind::Unrecognized => None,
    }
}

/// File name component of `path`, or the whole path if it has none.
pub fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Split one `\n`-terminated chunk into lines, also breaking on `\r`.
///
/// `\n`, `\r\n` and a lone `\r` all end a line; the terminators are dropped.
fn split_chunk(chunk: &str) -> impl Iterator<Item = &str> {
    let chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
    let chunk = chunk.strip_suffix('\r').unwrap_or(chunk);
    chunk.split('\r')
}

/// Lazy, single-pass sequence of rows for one file.
///
/// The frame size starts at `(0, 0)` for every scanner and never leaks into
/// another file's scan.
pub struct FileScan<R> {
    path: PathBuf,
    source: String,
    reader: R,
    buf: Vec<u8>,
    pending: VecDeque<String>,
    frame: FrameSize,
    done: bool,
}

impl<R: BufRead> FileScan<R> {
    /// Scan an already-open reader; `path` is used for the basename and errors.
    pub fn from_reader(path: impl Into<PathBuf>, reader: R) -> Self {
        let path = path.into();
        Self {
            source: basename(&path),
            path,
            reader,
            buf: Vec::new(),
            pending: VecDeque::new(),
            frame: FrameSize::default(),
            done: false,
        }
    }

    /// Next line of the file, or `None` at end of input.
    fn next_line(&mut self) -> Option<std::io::Result<String>> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }

            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }

            let chunk = match std::str::from_utf8(&self.buf) {
                Ok(c) => c,
                Err(e) => return Some(Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e))),
            };
            self.pending.extend(split_chunk(chunk).map(str::to_string));
        }
    }
}

impl<R: BufRead> Iterator for FileScan<R> {
    type Item = Result<OutputRow, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        while let Some(line) = self.next_line() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    self.done = true;
                    return Some(Err(ScanError::Read {
                        path: self.path.clone(),
                        source: e,
                    }));
                }
            };
            if let Some(row) = step(&mut self.frame, &line, &self.source) {
                return Some(Ok(row));
            }
        }
        self.done = true;
        None
    }
}

/// Open `path` and return its row sequence.
pub fn scan_file(path: &Path) -> Result<FileScan<BufReader<std::fs::File>>, ScanError> {
    let file = std::fs::File::open(path).map_err(|e| ScanError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(FileScan::from_reader(path, BufReader::new(file)))
}
