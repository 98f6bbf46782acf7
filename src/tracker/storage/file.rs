use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, trace};

use crate::fs::operations::{read_locked, remove_if_exists, write_locked};

use super::KeyValueStorage;

/// The main realization of [KeyValueStorage]. Every key is a `<key>.json` file inside
/// `storage_dir`.
pub struct FileStorage {
    storage_dir: PathBuf,
}

impl FileStorage {
    pub fn new(storage_dir: PathBuf) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(&storage_dir)?;

        Ok(Self { storage_dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        anyhow::ensure!(
            !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
            "Illegal storage key {key:?}"
        );
        Ok(self.storage_dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        trace!("Reading {path:?}");
        read_locked(&path)
            .await
            .with_context(|| format!("Failed to read {path:?}"))
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let path = self.path_for(key)?;
        debug!("Writing {} bytes into {path:?}", value.len());
        write_locked(&path, value.as_bytes())
            .await
            .with_context(|| format!("Failed to write {path:?}"))
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        debug!("Removing {path:?}");
        remove_if_exists(&path)
            .await
            .with_context(|| format!("Failed to remove {path:?}"))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::Result;
    use tempfile::tempdir;

    use crate::tracker::storage::{KeyValueStorage, LAST_VISIT_DATE, MEALS};

    use super::FileStorage;

    #[tokio::test]
    async fn test_file_storage_basic() -> Result<()> {
        let dir = tempdir()?;
        let storage = FileStorage::new(dir.path().join("storage"))?;

        assert_eq!(storage.get(LAST_VISIT_DATE).await?, None);

        storage.set(LAST_VISIT_DATE, "\"2026-10-18\"".into()).await?;
        assert_eq!(
            storage.get(LAST_VISIT_DATE).await?.as_deref(),
            Some("\"2026-10-18\"")
        );
        assert!(dir.path().join("storage/lastVisitDate.json").exists());

        storage.remove(LAST_VISIT_DATE).await?;
        storage.remove(LAST_VISIT_DATE).await?;
        assert_eq!(storage.get(LAST_VISIT_DATE).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_file_storage_survives_reopen() -> Result<()> {
        let dir = tempdir()?;
        {
            let storage = FileStorage::new(dir.path().to_owned())?;
            storage.set(MEALS, "{}".into()).await?;
        }
        let storage = Arc::new(FileStorage::new(dir.path().to_owned())?);
        assert_eq!(storage.get(MEALS).await?.as_deref(), Some("{}"));
        Ok(())
    }

    #[tokio::test]
    async fn test_file_storage_rejects_path_like_keys() -> Result<()> {
        let dir = tempdir()?;
        let storage = FileStorage::new(dir.path().to_owned())?;
        assert!(storage.set("../escape", "1".into()).await.is_err());
        assert!(storage.get("").await.is_err());
        Ok(())
    }
}
