use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default number of entries retained.
pub const DEFAULT_UPDATE_LOG_LIMIT: usize = 50;

/// Outcome of one update run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateLogEntry {
    pub timestamp: DateTime<Utc>,
    pub success: bool,
    pub message: String,
}

impl UpdateLogEntry {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateLogError {
    #[error("failed to serialize update log: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write update log {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A JSON array of run outcomes, newest first, capped at `limit` entries.
#[derive(Debug, Clone)]
pub struct UpdateLog {
    path: PathBuf,
    limit: usize,
}

impl UpdateLog {
    pub fn new(path: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            path: path.into(),
            limit,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current entries; a missing or unreadable log reads as empty.
    pub fn entries(&self) -> Vec<UpdateLogEntry> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(error) => {
                warn!(path = %self.path.display(), %error, "update log unreadable");
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|error| {
            warn!(path = %self.path.display(), %error, "update log corrupt, starting fresh");
            Vec::new()
        })
    }

    pub fn append(&self, entry: UpdateLogEntry) -> Result<(), UpdateLogError> {
        let mut entries = self.entries();
        entries.insert(0, entry);
        entries.truncate(self.limit);

        let body = serde_json::to_string_pretty(&entries)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| UpdateLogError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        fs::write(&self.path, body).map_err(|source| UpdateLogError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
