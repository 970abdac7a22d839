//! Mock capture source for testing — serves pre-loaded log dumps.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::{LogError, LogResult};
use crate::source::LogSource;

/// A mock log source that serves pre-loaded captures by path.
pub struct MockLogSource {
    files: HashMap<String, Vec<String>>,
}

impl MockLogSource {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    /// Add a capture file with the given lines.
    pub fn add_file(&mut self, path: impl Into<String>, lines: Vec<String>) {
        self.files.insert(path.into(), lines);
    }

    /// Create a mock with a sample brief-format capture.
    pub fn with_brief_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/captures/main.log",
            vec![
                "I/MediaUploader(22541): No need to wake up".into(),
                "W/PackageParser(  127): Unknown element under <manifest>".into(),
                "E/SurfaceFlinger(   78): ro.sf.lcd_density must be defined".into(),
                "D/dalvikvm(22541): GC_CONCURRENT freed 1024K".into(),
                "F/libc( 1234): Fatal signal 11 (SIGSEGV) at 0x00000000".into(),
            ],
        );
        m
    }

    /// Create a mock with a sample threadtime-format capture.
    pub fn with_threadtime_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/captures/main.log",
            vec![
                "04-08 12:57:40.370    89   103 I Installer: connecting...".into(),
                "04-08 12:57:40.912    89   103 W Installer: slow response from installd".into(),
                "04-08 12:57:41.004   127   127 E PackageParser: parse failed".into(),
            ],
        );
        m
    }

    /// Create a mock with a sample time-format capture.
    pub fn with_time_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/captures/radio.log",
            vec![
                "04-08 12:57:40.370 I/RILJ (  137): [UNSL]< UNSOL_RESPONSE_NEW_SMS".into(),
                "04-08 12:57:40.512 D/GSM  (  137): [DSAC DEB] trySetupData".into(),
                "04-08 12:57:41.233 E/RILJ (  137): socket disconnected".into(),
            ],
        );
        m
    }

    /// Create a mock with a sample long-format capture.
    pub fn with_long_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/captures/events.log",
            vec![
                "[ 04-08 12:57:40.370 89:0x1 W/Installer]".into(),
                "connecting...".into(),
                "retrying".into(),
                "".into(),
                "[ 04-08 12:57:41.002 120:0x2 E/Zygote]".into(),
                "setreuid() failed".into(),
            ],
        );
        m
    }

    /// Create a mock with a folder of captures routed by filename, plus a
    /// file no channel heuristic matches.
    pub fn with_capture_folder() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/captures/logcat_main.txt",
            vec!["I/MediaUploader(22541): No need to wake up".into()],
        );
        m.add_file(
            "/captures/logcat_events.txt",
            vec![
                "[ 04-08 12:57:40.370 89:0x1 W/Installer]".into(),
                "connecting...".into(),
            ],
        );
        m.add_file(
            "/captures/logcat_radio.txt",
            vec!["04-08 12:57:40.370 I/RILJ (  137): socket connected".into()],
        );
        m.add_file("/captures/notes.txt", vec!["not a capture".into()]);
        m
    }
}

impl Default for MockLogSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogSource for MockLogSource {
    async fn read_lines(&self, path: &str) -> LogResult<Vec<String>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| LogError::NotFound(path.to_string()))
    }

    async fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    async fn list_dir(&self, path: &str) -> LogResult<Vec<String>> {
        let prefix = format!("{}/", path.trim_end_matches('/'));
        let mut names: Vec<String> = self
            .files
            .keys()
            .filter_map(|k| k.strip_prefix(&prefix))
            .filter(|rest| !rest.contains('/'))
            .map(String::from)
            .collect();
        if names.is_empty() {
            return Err(LogError::NotFound(path.to_string()));
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_read_lines() {
        let source = MockLogSource::with_brief_sample();
        let lines = source.read_lines("/captures/main.log").await.unwrap();
        assert_eq!(lines.len(), 5);
    }

    #[tokio::test]
    async fn mock_not_found() {
        let source = MockLogSource::new();
        let result = source.read_lines("/nonexistent").await;
        assert!(matches!(result, Err(LogError::NotFound(_))));
    }

    #[tokio::test]
    async fn mock_exists() {
        let source = MockLogSource::with_long_sample();
        assert!(source.exists("/captures/events.log").await);
        assert!(!source.exists("/captures/main.log").await);
    }

    #[tokio::test]
    async fn mock_list_dir() {
        let source = MockLogSource::with_capture_folder();
        let names = source.list_dir("/captures").await.unwrap();
        assert_eq!(
            names,
            vec![
                "logcat_events.txt",
                "logcat_main.txt",
                "logcat_radio.txt",
                "notes.txt"
            ]
        );
    }

    #[tokio::test]
    async fn mock_list_dir_missing() {
        let source = MockLogSource::new();
        assert!(source.list_dir("/captures").await.is_err());
    }
}
