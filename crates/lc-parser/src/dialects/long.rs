//! `logcat -v long` output: a bracketed header line followed by free-form
//! message lines.
//!
//! Header shape: `[ MM-DD HH:MM:SS.fff PID:TID SEVERITY/TAG]`. The header
//! itself emits no record; each following non-header line becomes one
//! record carrying the most recent header's fields. Body lines are
//! intentionally not joined into a single message.

use regex::Regex;
use std::sync::LazyLock;

use super::{DecodeState, severity_from_capture};
use crate::types::LogRecord;

// [ 04-08 12:57:40.370 89:0x1 W/Installer]
// The fraction of a second may have any number of digits, and the tag may
// carry trailing spaces inside the bracket.
static RE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[\s(\d\d-\d\d\s\d\d:\d\d:\d\d\.\d+)\s+(\d*):\s*(\S+)\s([VDIWEAF])/(.*)\]$")
        .unwrap()
});

pub(crate) fn is_header(line: &str) -> bool {
    RE_HEADER.is_match(line)
}

/// Decode a long-format capture.
///
/// A body line seen before any header uses the decoder defaults
/// (severity warn, `"?"` everywhere else). Empty lines are skipped.
pub fn decode(lines: &[String]) -> Vec<LogRecord> {
    let mut state = DecodeState::default();
    let mut records = Vec::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }
        if let Some(caps) = RE_HEADER.captures(line) {
            state.timestamp = caps[1].to_string();
            state.pid = caps[2].to_string();
            state.tid = caps[3].to_string();
            if let Some(severity) = severity_from_capture(&caps[4]) {
                state.severity = severity;
            }
            state.tag = caps[5].trim().to_string();
        } else {
            records.push(state.record(line));
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn header_state_carries_over_body_lines() {
        let records = decode(&lines(&[
            "[ 04-08 12:57:40.370 89:0x1 W/Installer]",
            "connecting...",
            "retrying",
        ]));
        assert_eq!(records.len(), 2);
        for r in &records {
            assert_eq!(r.pid, "89");
            assert_eq!(r.tid, "0x1");
            assert_eq!(r.tag, "Installer");
            assert_eq!(r.severity, Severity::Warn);
            assert_eq!(r.timestamp, "04-08 12:57:40.370");
        }
        assert_eq!(records[0].message, "connecting...");
        assert_eq!(records[1].message, "retrying");
    }

    #[test]
    fn header_emits_no_record() {
        let records = decode(&lines(&["[ 04-08 12:57:40.370 89:0x1 W/Installer]"]));
        assert!(records.is_empty());
    }

    #[test]
    fn next_header_resets_state() {
        let records = decode(&lines(&[
            "[ 04-08 12:57:40.370 89:0x1 W/Installer]",
            "first body",
            "[ 04-08 12:57:41.002 120:0x2 E/Zygote]",
            "second body",
        ]));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].tag, "Installer");
        assert_eq!(records[0].severity, Severity::Warn);
        assert_eq!(records[1].tag, "Zygote");
        assert_eq!(records[1].pid, "120");
        assert_eq!(records[1].severity, Severity::Error);
    }

    #[test]
    fn body_before_any_header_uses_defaults() {
        let records = decode(&lines(&["stray line before a header"]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].severity, Severity::Warn);
        assert_eq!(records[0].pid, "?");
        assert_eq!(records[0].tid, "?");
        assert_eq!(records[0].tag, "?");
        assert_eq!(records[0].timestamp, "?");
    }

    #[test]
    fn wtf_header_decodes_to_assert() {
        let records = decode(&lines(&[
            "[ 04-08 12:57:40.370 1234:0x4d2 F/libc]",
            "Fatal signal 11 (SIGSEGV)",
        ]));
        assert_eq!(records[0].severity, Severity::Assert);
        assert_eq!(records[0].tag, "libc");
    }

    #[test]
    fn tag_trailing_spaces_trimmed() {
        let records = decode(&lines(&[
            "[ 04-08 12:57:40.370 89:0x1 W/Installer  ]",
            "body",
        ]));
        assert_eq!(records[0].tag, "Installer");
    }

    #[test]
    fn empty_lines_skipped_not_emitted() {
        let records = decode(&lines(&[
            "[ 04-08 12:57:40.370 89:0x1 W/Installer]",
            "",
            "body",
        ]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "body");
    }
}
