//! `logcat -v time` output: `MM-DD HH:MM:SS.fff SEVERITY/TAG(PID): MESSAGE`.
//!
//! Carries no thread id; matched lines record an empty tid.

use regex::Regex;
use std::sync::LazyLock;

use super::{DecodeState, severity_from_capture};
use crate::types::LogRecord;

// 04-08 12:57:40.370 I/Installer(   89): connecting...
// The fraction of a second may have any number of digits.
static RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d\d-\d\d\s\d\d:\d\d:\d\d\.\d+)\s([VDIWEAF])/(.*?)\((\s*\d+)\):\s+(.*)$")
        .unwrap()
});

pub(crate) fn matches(line: &str) -> bool {
    RE.is_match(line)
}

/// Decode a time-format capture, one record per matching line.
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
        let Some(severity) = severity_from_capture(&caps[2]) else {
            continue;
        };
        state.timestamp = caps[1].to_string();
        state.severity = severity;
        state.tag = caps[3].trim().to_string();
        state.pid = caps[4].trim().to_string();
        // This layout has no thread id column.
        state.tid = String::new();
        records.push(state.record(&caps[5]));
    }
    records
}
