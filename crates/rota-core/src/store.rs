use crate::error::Result;
use crate::schedule::Schedule;
use std::path::PathBuf;
use std::sync::Mutex;

/// Persistence seam for schedule snapshots.
///
/// `load` returns `Ok(None)` when no prior snapshot exists; that is a
/// normal first-run condition, not an error. A cloud object-store
/// backend would implement this same trait.
pub trait SnapshotStore: Send + Sync {
    fn load(&self) -> Result<Option<Schedule>>;
    fn save(&self, schedule: &Schedule) -> Result<()>;
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// JSON snapshot in a local file, written atomically.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Option<Schedule>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(&self.path)?;
        let schedule: Schedule = serde_json::from_str(&data)?;
        Ok(Some(schedule))
    }

    fn save(&self, schedule: &Schedule) -> Result<()> {
        let data = serde_json::to_string(schedule)?;
        crate::io::atomic_write(&self.path, data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Option<Schedule>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schedule(schedule: Schedule) -> Self {
        Self {
            inner: Mutex::new(Some(schedule)),
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Schedule>> {
        let guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, schedule: &Schedule) -> Result<()> {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(schedule.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Assignment;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample() -> Schedule {
        Schedule::from_entries(vec![Assignment {
            user: "alice".into(),
            date: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
        }])
    }

    #[test]
    fn file_store_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("data.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn file_store_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("data.json"));
        store.save(&sample()).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn file_store_rejects_corrupt_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileStore::new(path);
        assert!(store.load().is_err());
    }

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap().unwrap(), sample());
    }
}
