//! File blob store - one `<key>.json` file per key inside a directory.
//!
//! Writes go to a temporary sibling file that is then renamed over the target, so a
//! reader sees either the previous snapshot or the new one, never a torn write.

use crate::{
    errors::{Error, Result},
    persistence::BlobStore,
};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Blob store backed by plain files.
#[derive(Clone, Debug)]
pub struct FileBlobStore {
    directory: PathBuf,
}

impl FileBlobStore {
    /// Uses `directory` for storage; it is created on first write.
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// The directory holding the blob files.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let is_plain_name = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\']);
        if !is_plain_name {
            return Err(Error::Storage {
                message: format!("Blob key {key:?} is not a valid file name"),
            });
        }
        Ok(self.directory.join(format!("{key}.json")))
    }
}

impl BlobStore for FileBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No blob file at {:?}", path);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let staging = self.directory.join(format!("{key}.json.tmp"));

        tokio::fs::create_dir_all(&self.directory).await?;
        tokio::fs::write(&staging, value).await?;
        tokio::fs::rename(&staging, &path).await?;
        debug!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::unique_temp_dir;

    #[tokio::test]
    async fn test_missing_file_is_absent() -> Result<()> {
        let store = FileBlobStore::new(unique_temp_dir("file-missing"));
        assert_eq!(store.get("transactions").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_set_then_get() -> Result<()> {
        let dir = unique_temp_dir("file-roundtrip");
        let store = FileBlobStore::new(&dir);

        store.set("transactions", "[]").await?;
        store.set("transactions", "[{\"id\":1}]").await?;
        assert_eq!(
            store.get("transactions").await?,
            Some("[{\"id\":1}]".to_string())
        );
        assert!(dir.join("transactions.json").exists());
        assert!(!dir.join("transactions.json.tmp").exists());

        tokio::fs::remove_dir_all(&dir).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let store = FileBlobStore::new(unique_temp_dir("file-keys"));
        for key in ["", "..", "a/b", "a\\b"] {
            assert!(matches!(
                store.set(key, "[]").await,
                Err(Error::Storage { .. })
            ));
        }
    }
}
