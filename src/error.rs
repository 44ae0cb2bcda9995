use crate::config::ConfigError;
use std::path::PathBuf;

/// Fatal failures while discovering, reading or reporting log files.
///
/// Lines that don't match either pattern are never errors.
#[derive(Debug)]
pub enum ScanError {
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },
    Glob(glob::GlobError),
    Write(std::io::Error),
    Config(ConfigError),
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::Open { path, source } => {
                write!(f, "failed to open {}: {source}", path.display())
            }
            ScanError::Read { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            ScanError::Pattern { pattern, source } => {
                write!(f, "invalid input pattern {pattern:?}: {source}")
            }
            ScanError::Glob(e) => write!(f, "failed to expand input pattern: {e}"),
            ScanError::Write(e) => write!(f, "failed to write output: {e}"),
            ScanError::Config(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Open { source, .. } => Some(source),
            ScanError::Read { source, .. } => Some(source),
            ScanError::Pattern { source, .. } => Some(source),
            ScanError::Glob(e) => Some(e),
            ScanError::Write(e) => Some(e),
            ScanError::Config(e) => Some(e),
        }
    }
}

impl From<ConfigError> for ScanError {
    fn from(e: ConfigError) -> Self {
        ScanError::Config(e)
    }
}
