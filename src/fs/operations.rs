use std::{io::ErrorKind, path::Path};

use fs4::tokio::AsyncFileExt;
use tokio::{
    fs::File,
    io::{self, AsyncReadExt, AsyncWriteExt},
};

/// Reads the whole file under a shared lock. A missing file is reported as `None`.
pub async fn read_locked(path: &Path) -> Result<Option<String>, io::Error> {
    let mut file = match File::open(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    file.lock_shared()?;
    let mut contents = String::new();
    let result = file.read_to_string(&mut contents).await;
    file.unlock_async().await?;
    result?;
    Ok(Some(contents))
}

/// Replaces file contents under an exclusive lock. The file is truncated only once the lock is
/// held, so a concurrent reader never sees a half-written value.
pub async fn write_locked(path: &Path, contents: &[u8]) -> Result<(), io::Error> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .await?;
    file.lock_exclusive()?;
    let result = replace_contents(&mut file, contents).await;
    file.unlock_async().await?;
    result
}

async fn replace_contents(file: &mut File, contents: &[u8]) -> Result<(), io::Error> {
    file.set_len(0).await?;
    file.write_all(contents).await?;
    file.flush().await?;
    file.sync_data().await
}

/// Removes a file. Removing a file that is already gone is not an error.
pub async fn remove_if_exists(path: &Path) -> Result<(), io::Error> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use tempfile::tempdir;

    use super::{read_locked, remove_if_exists, write_locked};

    #[tokio::test]
    async fn test_read_missing_file() -> Result<()> {
        let dir = tempdir()?;
        assert_eq!(read_locked(&dir.path().join("missing.json")).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_write_replaces_longer_contents() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("value.json");

        write_locked(&path, b"a much longer first value").await?;
        write_locked(&path, b"short").await?;

        assert_eq!(read_locked(&path).await?.as_deref(), Some("short"));
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("value.json");
        write_locked(&path, b"1").await?;

        remove_if_exists(&path).await?;
        remove_if_exists(&path).await?;

        assert!(!path.exists());
        Ok(())
    }
}
