/// Line classification: decide which of the two recognized log line shapes a
/// line has, if any.
///
/// Looks for:
/// - `new frame size (W, H) ` (the trailing space is part of the pattern)
/// - `Video frame processing time percentile of app NAME: {"0.1":N,...,"0.99":N}`
///
/// Frame-size matches win over percentile matches on the same line.
use regex::Regex;
use std::sync::LazyLock;

static FRAME_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"new frame size \((\d+), (\d+)\) ").unwrap());

static PERCENTILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"Video frame processing time percentile of app ([^:]+): ",
        r#"\{"0\.1":(\d+),"0\.5":(\d+),"0\.75":(\d+),"0\.9":(\d+),"0\.95":(\d+),"0\.99":(\d+)\}"#,
    ))
    .unwrap()
});

/// Most recent resolution announced in a log file.
///
/// Width and height are kept as the captured digit strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSize {
    pub width: String,
    pub height: String,
}

impl FrameSize {
    pub fn new(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }
}

impl Default for FrameSize {
    fn default() -> Self {
        Self::new("0", "0")
    }
}

/// Percentiles for one app, in key order 0.1, 0.5, 0.75, 0.9, 0.95, 0.99.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentileRecord {
    pub app: String,
    pub p1: String,
    pub p5: String,
    pub p75: String,
    pub p9: String,
    pub p95: String,
    pub p99: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    FrameSizeLine(FrameSize),
    PercentileLine(PercentileRecord),
    Unrecognized,
}

/// Classify a single log line.
pub fn classify_line(line: &str) -> LineKind {
    if let Some(caps) = FRAME_SIZE.captures(line) {
        return LineKind::FrameSizeLine(FrameSize::new(&caps[1], &caps[2]));
    }

    if let Some(caps) = PERCENTILE.captures(line) {
        return LineKind::PercentileLine(PercentileRecord {
            app: caps[1].to_string(),
            p1: caps[2].to_string(),
            p5: caps[3].to_string(),
            p75: caps[4].to_string(),
            p9: caps[5].to_string(),
            p95: caps[6].to_string(),
            p99: caps[7].to_string(),
        });
    }

    LineKind::Unrecognized
}
