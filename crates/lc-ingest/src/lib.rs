//! Capture ingest for offline logcat parsing.
//!
//! Wraps the pure `lc-parser` core with the I/O seams around it: a
//! `LogSource` abstraction for testability, a mock source serving
//! pre-loaded captures, and caller-owned `CaptureSession`s that decode
//! files and fan the resulting records out to registered listeners.

pub mod error;
pub mod mock;
pub mod session;
pub mod source;

// Re-export key types for convenience
pub use error::{LogError, LogResult};
pub use mock::MockLogSource;
pub use session::{CaptureSession, Channel, RecordListener};
pub use source::{FileLogSource, LogSource};
