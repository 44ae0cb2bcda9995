/// Input discovery: expand the input pattern into the list of log files to scan.
use crate::error::ScanError;
use std::path::{Path, PathBuf};

/// Pattern used when nothing is configured, and appended to directory inputs.
pub const DEFAULT_PATTERN: &str = "*.txt";

/// Turn an input argument into a glob pattern.
///
/// A path naming an existing directory becomes `<dir>/*.txt`, with glob
/// metacharacters in the directory name escaped; anything else is used as a
/// pattern verbatim.
pub fn resolve_pattern(input: &str) -> String {
    let path = Path::new(input);
    if path.is_dir() {
        let dir = glob::Pattern::escape(&path.to_string_lossy());
        Path::new(&dir)
            .join(DEFAULT_PATTERN)
            .to_string_lossy()
            .into_owned()
    } else {
        input.to_string()
    }
}

/// Expand `pattern` into the regular files it matches, in the order glob
/// yields them.
pub fn discover(pattern: &str) -> Result<Vec<PathBuf>, ScanError> {
    let paths = glob::glob(pattern).map_err(|e| ScanError::Pattern {
        pattern: pattern.to_string(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in paths {
        let path = entry.map_err(ScanError::Glob)?;
        if path.is_file() {
            files.push(path);
        } else {
            tracing::debug!(path = %path.display(), "skipping non-file match");
        }
    }

    if files.is_empty() {
        tracing::warn!(pattern, "input pattern matched no files");
    }

    Ok(files)
}
