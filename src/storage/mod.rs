// Local storage module using the sled embedded database.
// Records are bincode-encoded and keyed by the names below; the engine
// only ever sees the `Store` capability, never sled directly.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sled::Db;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

pub const KEY_USER_DATA: &str = "userData";
pub const KEY_ROADMAP: &str = "roadmap";
pub const KEY_STREAK_DATA: &str = "streakData";
pub const KEY_LAST_LOGIN: &str = "lastLogin";
pub const KEY_ACHIEVEMENTS: &str = "achievements";
pub const KEY_POMODORO_SESSIONS: &str = "pomodoroSessions";
pub const KEY_PERFECT_QUIZZES: &str = "perfectQuizzes";

/// Key-value capability the engine reads from and writes to.
/// Implemented by the sled backend and by an in-memory fake for tests.
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn put(&self, key: &str, value: Vec<u8>) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
    /// Clear every record. Reset is all-or-nothing from the engine's
    /// point of view.
    fn clear(&self) -> Result<()>;
}

/// Read and decode one record
pub fn get_record<T: DeserializeOwned>(store: &dyn Store, key: &str) -> Result<Option<T>> {
    match store.get(key)? {
        Some(bytes) => {
            let value = bincode::deserialize(&bytes)
                .with_context(|| format!("Failed to deserialize record {}", key))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Encode and write one record
pub fn put_record<T: Serialize>(store: &dyn Store, key: &str, value: &T) -> Result<()> {
    let bytes = bincode::serialize(value)
        .with_context(|| format!("Failed to serialize record {}", key))?;
    store.put(key, bytes)
}

/// Sled-backed store at `~/.skillplan/` (or `SKILLPLAN_DB_PATH`)
pub struct SledStore {
    db: Db,
}

impl SledStore {
    /// Get database directory path
    pub fn db_path() -> Result<PathBuf> {
        // Check for test environment variable first
        if let Ok(test_path) = std::env::var("SKILLPLAN_DB_PATH") {
            return Ok(PathBuf::from(test_path));
        }

        let config_dir = crate::config::Config::config_dir()?;
        Ok(config_dir.join("db"))
    }

    /// Open the database at the default path
    pub fn open_default() -> Result<Self> {
        let db_path = Self::db_path()?;
        tracing::info!("Opening sled database at {:?}", db_path);

        let db = sled::open(db_path).context("Failed to open sled database")?;
        Ok(Self { db })
    }

    /// Open the database at a custom path
    pub fn open(path: PathBuf) -> Result<Self> {
        let db = sled::open(path).context("Failed to open sled database")?;
        Ok(Self { db })
    }
}

impl Store for SledStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self
            .db
            .get(key.as_bytes())
            .with_context(|| format!("Failed to read record {}", key))?;
        Ok(value.map(|ivec| ivec.to_vec()))
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.db
            .insert(key.as_bytes(), value)
            .with_context(|| format!("Failed to write record {}", key))?;
        self.db.flush().context("Failed to flush database")?;

        tracing::debug!("Saved record {}", key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.db
            .remove(key.as_bytes())
            .with_context(|| format!("Failed to remove record {}", key))?;
        self.db.flush().context("Failed to flush database")?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.db.clear().context("Failed to clear database")?;
        self.db.flush().context("Failed to flush database")?;

        tracing::info!("Cleared all records");
        Ok(())
    }
}

/// In-memory store for tests
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.records.lock().unwrap().get(key).cloned())
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.records.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.records.lock().unwrap().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.records.lock().unwrap().clear();
        Ok(())
    }
}
