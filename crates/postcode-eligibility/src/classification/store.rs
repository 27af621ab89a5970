use super::record::Dataset;
use chrono::Utc;
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Persistence for the canonical snapshot read by the lookup service.
pub trait SnapshotStore: Send + Sync {
    fn load(&self) -> Result<Dataset, LoadError>;
    /// Backs up any existing snapshot, then overwrites it with `dataset`.
    fn save(&self, dataset: &Dataset) -> Result<SaveReceipt, SaveError>;
}

/// Where a save landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveReceipt {
    pub path: PathBuf,
    /// `None` when there was no prior snapshot to back up.
    pub backup: Option<PathBuf>,
    pub records: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("snapshot {0} does not exist")]
    Missing(PathBuf),
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("snapshot {path} is not a valid postcode document: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("failed to back up {path}: {source}")]
    Backup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write snapshot {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Loads the snapshot, substituting an empty dataset when it is missing or
/// unreadable.
pub fn load_or_empty<S: SnapshotStore + ?Sized>(store: &S) -> Dataset {
    match store.load() {
        Ok(dataset) => dataset,
        Err(error) => {
            warn!(%error, "starting from an empty dataset");
            Dataset::new()
        }
    }
}

/// A pretty-printed JSON object keyed by postcode, with timestamped backups
/// written beside it (or into a dedicated directory).
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_path: PathBuf,
    backup_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_path: impl Into<PathBuf>, backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            backup_dir: backup_dir.into(),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    fn backup_path(&self, timestamp: &str, attempt: usize) -> PathBuf {
        let stem = self
            .data_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("postcodes");
        let name = match attempt {
            0 => format!("{stem}_backup_{timestamp}.json"),
            n => format!("{stem}_backup_{timestamp}_{n}.json"),
        };
        self.backup_dir.join(name)
    }

    fn backup_existing(&self) -> Result<Option<PathBuf>, SaveError> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S-%3fZ").to_string();
        self.backup_existing_at(&timestamp)
    }

    /// Copies the current snapshot into a backup file that did not exist
    /// before; a name already taken gets a numeric suffix.
    fn backup_existing_at(&self, timestamp: &str) -> Result<Option<PathBuf>, SaveError> {
        let mut current = match File::open(&self.data_path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SaveError::Backup {
                    path: self.data_path.clone(),
                    source,
                })
            }
        };
        fs::create_dir_all(&self.backup_dir).map_err(|source| SaveError::Backup {
            path: self.backup_dir.clone(),
            source,
        })?;

        let mut attempt = 0;
        let (backup, mut file) = loop {
            let candidate = self.backup_path(timestamp, attempt);
            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&candidate)
            {
                Ok(file) => break (candidate, file),
                Err(error) if error.kind() == ErrorKind::AlreadyExists => attempt += 1,
                Err(source) => {
                    return Err(SaveError::Backup {
                        path: candidate,
                        source,
                    })
                }
            }
        };
        io::copy(&mut current, &mut file).map_err(|source| SaveError::Backup {
            path: backup.clone(),
            source,
        })?;
        Ok(Some(backup))
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Dataset, LoadError> {
        let raw = fs::read_to_string(&self.data_path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                LoadError::Missing(self.data_path.clone())
            } else {
                LoadError::Io {
                    path: self.data_path.clone(),
                    source,
                }
            }
        })?;
        serde_json::from_str(&raw).map_err(|source| LoadError::Corrupt {
            path: self.data_path.clone(),
            source,
        })
    }

    fn save(&self, dataset: &Dataset) -> Result<SaveReceipt, SaveError> {
        let body = serde_json::to_string_pretty(dataset)?;
        let backup = self.backup_existing()?;

        if let Some(parent) = self.data_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SaveError::Write {
                path: self.data_path.clone(),
                source,
            })?;
        }
        fs::write(&self.data_path, body).map_err(|source| SaveError::Write {
            path: self.data_path.clone(),
            source,
        })?;

        info!(
            path = %self.data_path.display(),
            records = dataset.len(),
            backup = ?backup,
            "snapshot saved"
        );
        Ok(SaveReceipt {
            path: self.data_path.clone(),
            backup,
            records: dataset.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::postcode::Postcode;
    use crate::classification::record::ClassificationRecord;

    #[test]
    fn missing_snapshot_is_a_load_error_and_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("postcodes.json"), dir.path());

        assert!(matches!(store.load(), Err(LoadError::Missing(_))));
        assert!(load_or_empty(&store).is_empty());
    }

    #[test]
    fn corrupt_snapshot_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("postcodes.json");
        fs::write(&path, "{ not json").expect("write");
        let store = JsonFileStore::new(&path, dir.path());

        assert!(matches!(store.load(), Err(LoadError::Corrupt { .. })));
        assert!(load_or_empty(&store).is_empty());
    }

    #[test]
    fn first_save_skips_backup_and_second_save_takes_one() {
        let dir = tempfile::tempdir().expect("tempdir");
        let backups = dir.path().join("backups");
        let store = JsonFileStore::new(dir.path().join("postcodes.json"), &backups);
        let dataset: Dataset = [(
            Postcode::literal(800),
            ClassificationRecord::new(true, true, true, false, false),
        )]
        .into_iter()
        .collect();

        let first = store.save(&dataset).expect("first save");
        assert!(first.backup.is_none());
        assert!(!backups.exists());

        let second = store.save(&dataset).expect("second save");
        let backup = second.backup.expect("backup taken");
        assert!(backup.starts_with(&backups));
        let name = backup.file_name().and_then(|n| n.to_str()).expect("name");
        assert!(name.starts_with("postcodes_backup_"));
        let previous: Dataset =
            serde_json::from_str(&fs::read_to_string(&backup).expect("read backup"))
                .expect("backup parses");
        assert_eq!(previous, dataset);
    }

    #[test]
    fn backups_in_the_same_millisecond_keep_distinct_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let backups = dir.path().join("backups");
        let store = JsonFileStore::new(dir.path().join("postcodes.json"), &backups);
        let first: Dataset = [(
            Postcode::literal(800),
            ClassificationRecord::new(true, true, true, false, false),
        )]
        .into_iter()
        .collect();
        store.save(&first).expect("save");

        let stamp = "2026-01-01T00-00-00-000Z";
        let earlier = store
            .backup_existing_at(stamp)
            .expect("first backup")
            .expect("snapshot exists");
        fs::write(store.data_path(), "{}").expect("overwrite snapshot");
        let later = store
            .backup_existing_at(stamp)
            .expect("second backup")
            .expect("snapshot exists");

        assert_ne!(earlier, later);
        assert!(later
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.ends_with("_1.json")));
        let kept: Dataset =
            serde_json::from_str(&fs::read_to_string(&earlier).expect("read")).expect("parses");
        assert_eq!(kept, first);
        assert_eq!(fs::read_to_string(&later).expect("read"), "{}");
    }
}
