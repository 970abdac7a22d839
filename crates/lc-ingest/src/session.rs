//! Caller-owned capture sessions: decode dump files and fan the resulting
//! records out to registered listeners.

use std::sync::Arc;

use lc_parser::{LogRecord, decode_stream};
use tracing::{debug, warn};

use crate::error::{LogError, LogResult};
use crate::source::LogSource;

// ── Channel ───────────────────────────────────────────────────

/// Logical output channel a decoded capture is attributed to.
///
/// Passed through to listeners unchanged; the decoders attach no meaning
/// to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Main,
    Events,
    Radio,
}

impl Channel {
    /// Route a capture file to a channel by its name.
    ///
    /// Matches the naming convention of pulled device buffers: a file name
    /// containing `main`, `event`, or `radio` (case-insensitive) maps to
    /// the corresponding channel. Anything else is not routable.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if lower.contains("main") {
            Some(Self::Main)
        } else if lower.contains("event") {
            Some(Self::Events)
        } else if lower.contains("radio") {
            Some(Self::Radio)
        } else {
            None
        }
    }
}

// ── Record Listener ───────────────────────────────────────────

/// Observer of completed capture decodes.
///
/// Notified exactly once per decoded stream, after the whole stream has
/// been decoded — never with partial results. Notification order across
/// listeners is unspecified.
pub trait RecordListener: Send + Sync {
    fn records_received(&self, records: &[LogRecord], channel: Channel);
}

// ── Capture Session ───────────────────────────────────────────

/// A capture-decoding session owning its source and listener set.
///
/// Replaces the usual process-wide parser singleton: construct one per
/// use. Independent sessions share no state and may run concurrently.
pub struct CaptureSession {
    source: Arc<dyn LogSource>,
    listeners: Vec<Arc<dyn RecordListener>>,
}

impl CaptureSession {
    pub fn new(source: Arc<dyn LogSource>) -> Self {
        Self {
            source,
            listeners: Vec::new(),
        }
    }

    /// Register a listener for decode notifications.
    pub fn add_listener(&mut self, listener: Arc<dyn RecordListener>) {
        self.listeners.push(listener);
    }

    /// Remove a previously registered listener, matched by pointer
    /// identity.
    pub fn remove_listener(&mut self, listener: &Arc<dyn RecordListener>) {
        self.listeners.retain(|l| !Arc::ptr_eq(l, listener));
    }

    /// Decode a single capture file and notify listeners on the given
    /// channel.
    ///
    /// A file in which no dialect can be detected yields no records and no
    /// notification.
    pub async fn parse_file(&self, path: &str, channel: Channel) -> LogResult<()> {
        if path.is_empty() {
            return Err(LogError::NotFound(String::new()));
        }
        let lines = self.source.read_lines(path).await?;
        match decode_stream(&lines) {
            Some(decoded) => {
                debug!(
                    path,
                    dialect = ?decoded.dialect,
                    records = decoded.records.len(),
                    "capture decoded"
                );
                self.notify(&decoded.records, channel);
            }
            None => {
                debug!(path, "no dialect detected, capture dropped");
            }
        }
        Ok(())
    }

    /// Scan a folder and decode every file whose name routes to a channel.
    ///
    /// Files no channel heuristic matches are skipped; unreadable ones are
    /// logged and the scan continues.
    pub async fn parse_folder(&self, path: &str) -> LogResult<()> {
        if path.is_empty() {
            return Err(LogError::NotFound(String::new()));
        }
        let base = path.trim_end_matches('/');
        for name in self.source.list_dir(base).await? {
            let Some(channel) = Channel::from_file_name(&name) else {
                continue;
            };
            let file_path = format!("{base}/{name}");
            if let Err(e) = self.parse_file(&file_path, channel).await {
                warn!(path = %file_path, error = %e, "skipping unreadable capture");
            }
        }
        Ok(())
    }

    fn notify(&self, records: &[LogRecord], channel: Channel) {
        for listener in &self.listeners {
            listener.records_received(records, channel);
        }
    }
}
