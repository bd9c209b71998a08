use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::AssetError;
use crate::source::{AssetFuture, AssetSource};

/// In-memory asset source, useful for tests and generated content.
///
/// Cloning is cheap and all clones share the same storage.
#[derive(Default, Clone)]
pub struct MemoryAssets {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores raw bytes under `key`, replacing any previous entry.
    pub fn insert(&self, key: impl Into<String>, data: Vec<u8>) {
        let mut entries = self.entries.write().unwrap();
        entries.insert(key.into(), data);
    }

    /// Stores a text asset under `key`.
    pub fn insert_text(&self, key: impl Into<String>, text: impl Into<String>) {
        self.insert(key, text.into().into_bytes());
    }

    /// Removes the entry under `key`, returning whether it existed.
    pub fn remove(&self, key: &str) -> bool {
        let mut entries = self.entries.write().unwrap();
        entries.remove(key).is_some()
    }
}

impl AssetSource for MemoryAssets {
    fn read(&self, key: &str) -> AssetFuture<Vec<u8>> {
        let entries = self.entries.clone();
        let key = key.to_string();
        Box::pin(async move {
            let entries = entries.read().unwrap();
            entries
                .get(&key)
                .cloned()
                .ok_or(AssetError::NotFound(key))
        })
    }

    fn exists(&self, key: &str) -> AssetFuture<bool> {
        let entries = self.entries.clone();
        let key = key.to_string();
        Box::pin(async move {
            let entries = entries.read().unwrap();
            Ok(entries.contains_key(&key))
        })
    }

    fn is_read_only(&self) -> bool {
        false
    }

    fn write(&self, key: &str, data: Vec<u8>) -> AssetFuture<()> {
        let entries = self.entries.clone();
        let key = key.to_string();
        Box::pin(async move {
            let mut entries = entries.write().unwrap();
            entries.insert(key, data);
            Ok(())
        })
    }
}
