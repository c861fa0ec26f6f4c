use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("best score file {path} is not accessible")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("best score file {path} is malformed")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("best score store rejected the write")]
    Unavailable,
}

/// A single durable "best score" value
pub trait BestScoreStore {
    /// Read the stored value; a slot that was never written reads as 0
    fn load(&self) -> Result<u32, StoreError>;

    fn save(&mut self, best: u32) -> Result<(), StoreError>;
}

/// On-disk layout of the best score file
#[derive(Debug, Serialize, Deserialize)]
struct BestScoreRecord {
    best_score: u32,
}

/// Keeps the best score as a small JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl BestScoreStore for JsonFileStore {
    fn load(&self) -> Result<u32, StoreError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(self.io_error(e)),
        };
        let record: BestScoreRecord =
            serde_json::from_str(&text).map_err(|source| StoreError::Format {
                path: self.path.clone(),
                source,
            })?;
        Ok(record.best_score)
    }

    fn save(&mut self, best: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let json = serde_json::to_string_pretty(&BestScoreRecord { best_score: best }).map_err(
            |source| StoreError::Format {
                path: self.path.clone(),
                source,
            },
        )?;
        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }
}

/// In-memory store, records every write
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    value: u32,
    writes: Vec<u32>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }

    /// A store whose every `save` fails
    pub fn failing(value: u32) -> Self {
        Self {
            value,
            fail_writes: true,
            ..Default::default()
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn writes(&self) -> &[u32] {
        &self.writes
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&self) -> Result<u32, StoreError> {
        Ok(self.value)
    }

    fn save(&mut self, best: u32) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable);
        }
        self.value = best;
        self.writes.push(best);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_zero() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("best.json"));
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("best.json");

        let mut store = JsonFileStore::new(&path);
        store.save(17).unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.load().unwrap(), 17);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"best_score\": 17"));
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("best.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Format { .. })));
    }

    #[test]
    fn test_save_into_unwritable_location() {
        let dir = TempDir::new().unwrap();
        // A directory sits where the file should go
        let mut store = JsonFileStore::new(dir.path());
        assert!(matches!(store.save(3), Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new(4);
        assert_eq!(store.load().unwrap(), 4);
        store.save(9).unwrap();
        assert_eq!(store.value(), 9);
        assert_eq!(store.writes(), &[9]);

        let mut failing = MemoryStore::failing(2);
        assert!(failing.save(5).is_err());
        assert_eq!(failing.value(), 2);
    }
}
