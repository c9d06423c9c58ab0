//! Device-local favorites
//!
//! Favorite restaurant ids live only on the device, keyed by a storage key
//! shared with older app versions. Persistence is best effort: a write
//! failure keeps the in-memory set so the session stays consistent, and the
//! ids are reloaded on the next start.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored value is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Small string-keyed persistence, the shape the device platform offers
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Volatile storage for tests and the demo binary
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self
            .values
            .lock()
            .map_err(|_| StorageError::Backend("storage lock poisoned".into()))?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| StorageError::Backend("storage lock poisoned".into()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key under a base directory
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.base_dir).await?;
        tokio::fs::write(self.path_for(key), value).await?;
        Ok(())
    }
}

/// The set of favorited restaurant ids, persisted as a JSON string array
pub struct FavoritesStore {
    storage: Box<dyn KeyValueStorage>,
    key: String,
    ids: Mutex<Vec<String>>,
}

impl FavoritesStore {
    pub fn new(storage: Box<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            ids: Mutex::new(Vec::new()),
        }
    }

    /// Load the persisted ids, once, at startup.
    ///
    /// A corrupt or unreadable value starts the session with an empty set
    /// instead of failing; the next toggle overwrites it.
    pub async fn load(&self) -> Result<(), StorageError> {
        let stored = match self.storage.get(&self.key).await {
            Ok(stored) => stored,
            Err(err) => {
                warn!(error = %err, "could not read favorites; starting empty");
                return Ok(());
            }
        };
        let ids: Vec<String> = match stored.as_deref().map(serde_json::from_str) {
            Some(Ok(ids)) => ids,
            Some(Err(err)) => {
                warn!(error = %err, "stored favorites are corrupt; starting empty");
                Vec::new()
            }
            None => Vec::new(),
        };
        *self.lock()? = ids;
        Ok(())
    }

    /// Current favorites, in insertion order
    pub fn ids(&self) -> Vec<String> {
        self.ids
            .lock()
            .map(|ids| ids.clone())
            .unwrap_or_default()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids
            .lock()
            .map(|ids| ids.iter().any(|i| i == id))
            .unwrap_or(false)
    }

    /// Flip one id in or out of the set and persist the whole array.
    ///
    /// The in-memory flip always sticks; a persistence failure only costs
    /// durability across restarts.
    pub async fn toggle(&self, id: &str) -> Result<bool, StorageError> {
        let (ids, now_favorite) = {
            let mut ids = self.lock()?;
            match ids.iter().position(|i| i == id) {
                Some(index) => {
                    ids.remove(index);
                    (ids.clone(), false)
                }
                None => {
                    ids.push(id.to_string());
                    (ids.clone(), true)
                }
            }
        };
        let encoded = serde_json::to_string(&ids)?;
        if let Err(err) = self.storage.set(&self.key, &encoded).await {
            warn!(error = %err, "could not persist favorites");
        }
        Ok(now_favorite)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<String>>, StorageError> {
        self.ids
            .lock()
            .map_err(|_| StorageError::Backend("favorites lock poisoned".into()))
    }
}
