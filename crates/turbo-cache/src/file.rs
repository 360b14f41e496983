//! Directory-backed store, one file per key.

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::Rng;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::{CacheError, KvStore};

/// Extension of slot files.
const SLOT_EXTENSION: &str = "kv";

/// Durable store that keeps each key in its own file under a directory.
///
/// Keys are base64url-encoded into file names, so any key string is
/// accepted. Writes land in a temp file in the same directory and are
/// flushed to disk before being renamed over the slot, so a crash mid-write
/// leaves the previous value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let store = FileStore::open(dirs::data_dir().join("shop")).await?;
    /// ```
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| CacheError::Open(format!("{}: {}", dir.display(), e)))?;
        tracing::debug!(dir = %dir.display(), "opened file store");
        Ok(Self { dir })
    }

    /// Directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{}", URL_SAFE_NO_PAD.encode(key), SLOT_EXTENSION))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        let suffix: u32 = rand::thread_rng().gen();
        self.dir.join(format!(
            ".{}.{:08x}.tmp",
            URL_SAFE_NO_PAD.encode(key),
            suffix
        ))
    }
}

/// Write `value` to `path` and flush it to disk.
async fn write_synced(path: &Path, value: &str) -> io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(value.as_bytes()).await?;
    file.sync_all().await
}

#[async_trait]
impl KvStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        match fs::read_to_string(self.slot_path(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CacheError::read(key, e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let temp = self.temp_path(key);

        let written = match write_synced(&temp, value).await {
            Ok(()) => fs::rename(&temp, self.slot_path(key)).await,
            Err(e) => Err(e),
        };

        if let Err(e) = written {
            let _ = fs::remove_file(&temp).await;
            return Err(CacheError::write(key, e));
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        match fs::remove_file(self.slot_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CacheError::Delete {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
