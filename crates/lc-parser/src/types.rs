//! Core record types shared by the dialect decoders.

use serde::{Deserialize, Serialize};

// ── Severity ──────────────────────────────────────────────────

/// Log severity level, ordered from least to most severe.
///
/// Variant declaration order matters — `#[derive(Ord)]` uses it,
/// so Verbose < Debug < Info < Warn < Error < Assert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    Assert,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Assert => "assert",
        }
    }

    /// Map a logcat severity letter (V/D/I/W/E/A) to `Severity`.
    ///
    /// `F` is deliberately not a member of this mapping: `Log.wtf()` emits
    /// the undocumented `F` level instead of the documented `A`, and the
    /// decoders fold that case into [`Severity::Assert`] themselves.
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "V" => Some(Self::Verbose),
            "D" => Some(Self::Debug),
            "I" => Some(Self::Info),
            "W" => Some(Self::Warn),
            "E" => Some(Self::Error),
            "A" => Some(Self::Assert),
            _ => None,
        }
    }

    /// The single-letter form used in capture files.
    pub fn letter(&self) -> &'static str {
        match self {
            Self::Verbose => "V",
            Self::Debug => "D",
            Self::Info => "I",
            Self::Warn => "W",
            Self::Error => "E",
            Self::Assert => "A",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Dialect ───────────────────────────────────────────────────

/// Capture layouts produced by `logcat -v <format>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// `logcat -v long` — bracketed header line, multi-line message body.
    Long,
    /// `logcat -v time` — timestamp prefix, no thread id.
    Time,
    /// Default `logcat` output — severity/tag(pid) only.
    Brief,
    /// `logcat -v threadtime` — timestamp plus pid and tid columns.
    Threadtime,
    /// No grammar matched. Never a terminal classification for a stream
    /// that produces records.
    Unknown,
}

// ── Log Record ────────────────────────────────────────────────

/// A decoded logcat record, normalized from any dialect.
///
/// Constructed once by a decoder and immutable thereafter. Records are
/// emitted in the same relative order as their originating lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Severity level; always a valid member of the closed set.
    pub severity: Severity,
    /// Process id; `"?"` when the dialect does not carry it.
    pub pid: String,
    /// Thread id; `"?"` or `""` when the dialect does not carry it.
    pub tid: String,
    /// Trimmed source-component tag.
    pub tag: String,
    /// Timestamp in the dialect's native textual form, not parsed further.
    pub timestamp: String,
    /// Message body. Long-format captures emit one record per body line
    /// rather than joining the lines.
    pub message: String,
}
