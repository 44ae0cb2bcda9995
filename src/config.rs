use crate::discover::DEFAULT_PATTERN;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "framestat.toml";

/// Top-level configuration loaded from framestat.toml.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FramestatConfig {
    pub input: InputConfig,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Directory or glob pattern selecting the log files to scan.
    pub pattern: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

impl FramestatConfig {
    /// Load config from `path`.
    ///
    /// When `required` is false a missing file yields the defaults; any other
    /// read failure, and any parse failure, is an error.
    pub fn load(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Pick the input pattern: CLI argument first, then the config value.
    pub fn input_pattern(&self, cli_input: Option<&str>) -> String {
        cli_input.unwrap_or(self.input.pattern.as_str()).to_string()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse config {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let cfg = FramestatConfig::default();
        assert_eq!(cfg.input.pattern, "*.txt");
    }

    #[test]
    fn test_load_pattern() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("framestat.toml");
        std::fs::write(&path, "[input]\npattern = \"perf/*.txt\"\n").unwrap();
        let cfg = FramestatConfig::load(&path, true).unwrap();
        assert_eq!(cfg.input.pattern, "perf/*.txt");
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("framestat.toml");
        std::fs::write(&path, "").unwrap();
        let cfg = FramestatConfig::load(&path, true).unwrap();
        assert_eq!(cfg, FramestatConfig::default());
    }

    #[test]
    fn test_missing_optional_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let cfg = FramestatConfig::load(&dir.path().join("framestat.toml"), false).unwrap();
        assert_eq!(cfg, FramestatConfig::default());
    }

    #[test]
    fn test_missing_required_file_is_error() {
        let dir = tempdir().unwrap();
        let result = FramestatConfig::load(&dir.path().join("custom.toml"), true);
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("framestat.toml");
        std::fs::write(&path, "[input\npattern = ").unwrap();
        let result = FramestatConfig::load(&path, false);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_unknown_key_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("framestat.toml");
        std::fs::write(&path, "[input]\npatern = \"x\"\n").unwrap();
        assert!(FramestatConfig::load(&path, true).is_err());
    }

    #[test]
    fn test_cli_input_overrides_config() {
        let cfg = FramestatConfig {
            input: InputConfig {
                pattern: "from-config/*.txt".to_string(),
            },
        };
        assert_eq!(cfg.input_pattern(Some("cli/*.txt")), "cli/*.txt");
        assert_eq!(cfg.input_pattern(None), "from-config/*.txt");
    }
}
