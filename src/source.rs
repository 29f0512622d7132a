//! Event log sources
//!
//! Abstracts where raw event files come from, so decoding can run against the
//! file system or against logs held in memory.

use crate::decoder::Decoder;
use crate::eventfile::{EventFile, read_games};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// File extensions used for event files (`.EVN`, `.EVA`, plus the generic `.EVE`)
pub const EVENT_FILE_EXTENSIONS: &[&str] = &["evn", "eva", "eve"];

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Event log not found: {name}")]
    NotFound { name: String },

    #[error("Failed to read event log {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Where event logs are read from
#[async_trait]
pub trait EventLogSource: Send + Sync {
    /// Read the full text of one log
    async fn read_log(&self, name: &str) -> Result<String, SourceError>;

    /// Names of all logs this source can read, sorted
    async fn list_logs(&self) -> Result<Vec<String>, SourceError>;
}

/// Read one log from `source` and decode every game in it
pub async fn decode_log(
    source: &dyn EventLogSource,
    name: &str,
    decoder: &Decoder,
) -> Result<EventFile, SourceError> {
    let text = source.read_log(name).await?;
    log::debug!("decoding {} ({} bytes)", name, text.len());
    Ok(read_games(&text, decoder))
}

/// File system implementation of EventLogSource
///
/// Log names are paths relative to the base directory. Absolute names are read
/// as given.
pub struct FileSystemEventLogSource {
    base_path: PathBuf,
}

impl FileSystemEventLogSource {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn log_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }
}

#[async_trait]
impl EventLogSource for FileSystemEventLogSource {
    async fn read_log(&self, name: &str) -> Result<String, SourceError> {
        let path = self.log_path(name);

        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(SourceError::NotFound {
                name: name.to_string(),
            }),
            Err(e) => Err(SourceError::Io {
                name: name.to_string(),
                source: e,
            }),
        }
    }

    async fn list_logs(&self) -> Result<Vec<String>, SourceError> {
        let io_error = |source| SourceError::Io {
            name: self.base_path.display().to_string(),
            source,
        };

        let mut logs = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.base_path)
            .await
            .map_err(io_error)?;

        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let path = entry.path();
            if let Some(extension) = path.extension().and_then(|ext| ext.to_str())
                && EVENT_FILE_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str())
                && let Some(name) = path.file_name().and_then(|n| n.to_str())
            {
                logs.push(name.to_string());
            }
        }

        logs.sort();
        Ok(logs)
    }
}

/// In-memory implementation for testing
#[derive(Default)]
pub struct InMemoryEventLogSource {
    logs: BTreeMap<String, String>,
}

impl InMemoryEventLogSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_log(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.logs.insert(name.into(), text.into());
    }
}

#[async_trait]
impl EventLogSource for InMemoryEventLogSource {
    async fn read_log(&self, name: &str) -> Result<String, SourceError> {
        self.logs
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                name: name.to_string(),
            })
    }

    async fn list_logs(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.logs.keys().cloned().collect())
    }
}
