use std::collections::HashMap;

use crate::error::{StoreError, StoreResult};
use crate::models::VideoIdea;

pub const DEFAULT_STORAGE_KEY: &str = "youtube-ideas";

/// A synchronous string slot store, shaped like the browser `Storage` API.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// Load/save port used by [`crate::store::IdeaStore`].
pub trait IdeaPersistence {
    /// `Ok(None)` means nothing has ever been stored.
    fn load(&self) -> StoreResult<Option<Vec<VideoIdea>>>;

    /// Replaces whatever was stored before with the full list.
    fn save(&mut self, ideas: &[VideoIdea]) -> StoreResult<()>;
}

/// Stores the whole idea list as one JSON array under a single key.
#[derive(Debug, Clone)]
pub struct JsonPersistence<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> JsonPersistence<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn with_default_key(storage: S) -> Self {
        Self::new(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: KeyValueStore> IdeaPersistence for JsonPersistence<S> {
    fn load(&self) -> StoreResult<Option<Vec<VideoIdea>>> {
        match self.storage.get_item(&self.key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, ideas: &[VideoIdea]) -> StoreResult<()> {
        let raw = serde_json::to_string(ideas).map_err(|e| StoreError::Write(e.to_string()))?;
        self.storage.set_item(&self.key, &raw)
    }
}

/// In-process storage. Counts writes so callers can observe write-through.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `value` under `key`.
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut items = HashMap::new();
        items.insert(key.to_string(), value.to_string());
        Self { items, writes: 0 }
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
