use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use anyhow::{Result, anyhow};

use super::KeyValueStorage;

/// [KeyValueStorage] kept in memory. Counts every write and removal, which lets callers check
/// that an operation left storage untouched.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
    mutations: AtomicUsize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` and `remove` calls served so far.
    pub fn mutations(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }

    /// Stored keys, sorted.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut keys = self.with_values(|values| values.keys().cloned().collect::<Vec<_>>())?;
        keys.sort();
        Ok(keys)
    }

    fn with_values<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> Result<T> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| anyhow!("Memory storage lock was poisoned"))?;
        Ok(f(&mut values))
    }
}

impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.with_values(|values| values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        self.with_values(|values| {
            values.insert(key.to_owned(), value);
        })
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        self.with_values(|values| {
            values.remove(key);
        })
    }
}
