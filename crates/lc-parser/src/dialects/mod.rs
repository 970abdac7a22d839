//! Dialect detection and per-dialect decode passes.
//!
//! A capture's dialect is decided by probing raw lines against the four
//! grammars in a fixed precedence order: LONG → TIME → BRIEF → THREADTIME.
//! BRIEF's shape is a field subset of TIME's, so TIME must be probed
//! first; whenever grammars overlap, precedence order is the tie-break
//! authority, not pattern tightness.

pub mod brief;
pub mod long;
pub mod threadtime;
pub mod time;

use crate::types::{Dialect, LogRecord, Severity};

/// Classify a single raw line; the first full grammar match wins.
pub fn detect_line(line: &str) -> Dialect {
    if long::is_header(line) {
        return Dialect::Long;
    }
    if time::matches(line) {
        return Dialect::Time;
    }
    if brief::matches(line) {
        return Dialect::Brief;
    }
    if threadtime::matches(line) {
        return Dialect::Threadtime;
    }
    Dialect::Unknown
}

/// Decode an already-classified line sequence with its dialect's decoder.
pub fn decode_lines(lines: &[String], dialect: Dialect) -> Vec<LogRecord> {
    match dialect {
        Dialect::Long => long::decode(lines),
        Dialect::Time => time::decode(lines),
        Dialect::Brief => brief::decode(lines),
        Dialect::Threadtime => threadtime::decode(lines),
        Dialect::Unknown => Vec::new(),
    }
}

/// A fully decoded capture: the locked dialect plus its records in
/// originating-line order.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedStream {
    pub dialect: Dialect,
    pub records: Vec<LogRecord>,
}

/// Probe lines until one locks a dialect, then decode from that line on.
///
/// Lines seen before the lock are discarded, never retroactively decoded.
/// Returns `None` when no line matches any grammar.
pub fn decode_stream(lines: &[String]) -> Option<DecodedStream> {
    let (start, dialect) = lines
        .iter()
        .enumerate()
        .find_map(|(i, line)| match detect_line(line) {
            Dialect::Unknown => None,
            d => Some((i, d)),
        })?;

    Some(DecodedStream {
        dialect,
        records: decode_lines(&lines[start..], dialect),
    })
}

// ── Decoder scratch state ─────────────────────────────────────

/// Header fields carried across one decode pass.
///
/// LONG headers reset it and body lines reuse it; the single-line decoders
/// overwrite their captured fields on every grammar match. Fresh per
/// invocation, so repeated decodes of the same stream cannot leak state.
#[derive(Debug, Clone)]
pub(crate) struct DecodeState {
    pub severity: Severity,
    pub pid: String,
    pub tid: String,
    pub tag: String,
    pub timestamp: String,
}

impl Default for DecodeState {
    fn default() -> Self {
        Self {
            severity: Severity::Warn,
            pid: "?".into(),
            tid: "?".into(),
            tag: "?".into(),
            timestamp: "?".into(),
        }
    }
}

impl DecodeState {
    /// Emit one record with the current header fields and the given body.
    pub fn record(&self, message: &str) -> LogRecord {
        LogRecord {
            severity: self.severity,
            pid: self.pid.clone(),
            tid: self.tid.clone(),
            tag: self.tag.clone(),
            timestamp: self.timestamp.clone(),
            message: message.to_string(),
        }
    }
}

/// Map a captured severity letter, applying the `F` → Assert legacy rule.
///
/// `Log.wtf()` is documented to log at `A` but emits the undocumented `F`
/// level; every decoder folds it into [`Severity::Assert`]. `None` means
/// the line must be skipped without touching decoder state.
pub(crate) fn severity_from_capture(letter: &str) -> Option<Severity> {
    match letter {
        "F" => Some(Severity::Assert),
        other => Severity::from_letter(other),
    }
}
