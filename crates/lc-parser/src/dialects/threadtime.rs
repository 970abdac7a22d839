//! `logcat -v threadtime` output:
//! `MM-DD HH:MM:SS.fff PID TID SEVERITY TAG: MESSAGE`.

use regex::Regex;
use std::sync::LazyLock;

use super::{DecodeState, severity_from_capture};
use crate::types::LogRecord;

// 04-08 12:57:40.370    89   103 I Installer: connecting...
static RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d\d-\d\d\s\d\d:\d\d:\d\d\.\d+)\s*(\d+)\s*(\d+)\s([VDIWEAF])\s(.*?):\s+(.*)$",
    )
    .unwrap()
});

pub(crate) fn matches(line: &str) -> bool {
    RE.is_match(line)
}

/// Decode a threadtime-format capture, one record per matching line.
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
        let Some(severity) = severity_from_capture(&caps[4]) else {
            continue;
        };
        state.timestamp = caps[1].to_string();
        state.pid = caps[2].trim().to_string();
        state.tid = caps[3].trim().to_string();
        state.severity = severity;
        state.tag = caps[5].trim().to_string();
        records.push(state.record(&caps[6]));
    }
    records
}
