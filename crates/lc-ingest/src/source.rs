//! Capture source abstraction — read log dumps from files, mocks, or other
//! backends.

use async_trait::async_trait;

use crate::error::{LogError, LogResult};

/// Abstraction for reading capture data.
///
/// Enables mocking for tests and swappable backends (plain files, extracted
/// bug-report archives, etc.). The parser core never touches a source
/// directly; it only sees the line sequences produced here.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Read all lines from the given path.
    async fn read_lines(&self, path: &str) -> LogResult<Vec<String>>;

    /// Check if a path exists and is readable.
    async fn exists(&self, path: &str) -> bool;

    /// List file names directly under the given directory.
    async fn list_dir(&self, path: &str) -> LogResult<Vec<String>>;
}

/// Reads captures from the local filesystem.
pub struct FileLogSource;

impl FileLogSource {
    fn io_err(path: &str, e: std::io::Error) -> LogError {
        if e.kind() == std::io::ErrorKind::NotFound {
            LogError::NotFound(path.to_string())
        } else {
            LogError::Io(format!("{path}: {e}"))
        }
    }
}

#[async_trait]
impl LogSource for FileLogSource {
    async fn read_lines(&self, path: &str) -> LogResult<Vec<String>> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Self::io_err(path, e))?;
        Ok(content.lines().map(String::from).collect())
    }

    async fn exists(&self, path: &str) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }

    async fn list_dir(&self, path: &str) -> LogResult<Vec<String>> {
        let mut dir = tokio::fs::read_dir(path)
            .await
            .map_err(|e| Self::io_err(path, e))?;
        let mut names = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| Self::io_err(path, e))?
        {
            let is_file = entry.file_type().await.map(|t| t.is_file()).unwrap_or(false);
            if is_file && let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        // Directory iteration order is platform-dependent; keep it stable.
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let source = FileLogSource;
        let result = source.read_lines("/nonexistent/capture.log").await;
        assert!(matches!(result, Err(LogError::NotFound(_))));
    }

    #[tokio::test]
    async fn missing_path_does_not_exist() {
        let source = FileLogSource;
        assert!(!source.exists("/nonexistent/capture.log").await);
    }

    #[tokio::test]
    async fn read_lines_splits_on_newlines() {
        let dir = std::env::temp_dir().join("lc-ingest-source-test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("main.log");
        tokio::fs::write(&path, "first\nsecond\n").await.unwrap();

        let source = FileLogSource;
        let lines = source.read_lines(path.to_str().unwrap()).await.unwrap();
        assert_eq!(lines, vec!["first".to_string(), "second".to_string()]);
    }
}
