//! Offline logcat capture parsing.
//!
//! Reconstructs structured records from text dumps of `adb logcat` output.
//! Four capture layouts are recognized (brief, time, threadtime, long);
//! the dialect of a capture is auto-detected from its first recognizable
//! line and every line is decoded accordingly, including the multi-line
//! message bodies of `-v long` captures.

pub mod dialects;
pub mod types;

// Re-export key types for convenience
pub use dialects::{DecodedStream, decode_lines, decode_stream, detect_line};
pub use types::{Dialect, LogRecord, Severity};
