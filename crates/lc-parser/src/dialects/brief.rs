//! Default `logcat` output: `SEVERITY/TAG(PID): MESSAGE`.
//!
//! Carries no timestamp and no thread id; both stay at the decoder
//! defaults (`"?"`).

use regex::Regex;
use std::sync::LazyLock;

use super::{DecodeState, severity_from_capture};
use crate::types::LogRecord;

// I/MediaUploader(22541): No need to wake up
static RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([VDIWEAF])/(.*?)\((\s*\d+)\):\s+(.*)$").unwrap());

pub(crate) fn matches(line: &str) -> bool {
    RE.is_match(line)
}

/// Decode a brief-format capture, one record per matching line.
///
/// Non-matching and empty lines are skipped silently.
pub fn decode(lines: &[String]) -> Vec<LogRecord> {
    let mut state = DecodeState::default();
    let mut records = Vec::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }
        let Some(caps) = RE.captures(line) else {
            continue;
        };
        let Some(severity) = severity_from_capture(&caps[1]) else {
            continue;
        };
        state.severity = severity;
        state.tag = caps[2].trim().to_string();
        state.pid = caps[3].trim().to_string();
        records.push(state.record(&caps[4]));
    }
    records
}
