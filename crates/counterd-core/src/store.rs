//! File-backed counter store.
//!
//! The counter lives in one file as plain decimal text. Reading is
//! forgiving: a missing, empty, or unparsable file reads as 0 so the service
//! heals itself after manual edits or a truncated file. Only real storage
//! failures (permissions, a directory in the way, a full disk) surface as
//! [`CounterError::Io`].
//!
//! Writes go to a sibling temp file which is fsynced and renamed over the
//! target, so a reader sees either the old value or the new one. The parent
//! directory is fsynced after the rename (unix) so the new entry survives a
//! crash.
//!
//! Concurrency: every mutating sequence (`write`, `increment_and_get`,
//! `reset`, `probe`) holds a store-wide async mutex. Without it two
//! concurrent increments could both read N and both write N + 1.
//! `read` takes no lock since renames are atomic.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::error::{CounterError, Result};

#[derive(Debug)]
pub struct CounterStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CounterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current value. Missing, empty, or corrupt content reads as 0.
    ///
    /// A path whose parent component is a regular file cannot exist, so
    /// `NotADirectory` reads as missing too.
    pub async fn read(&self) -> Result<u64> {
        let bytes = match fs::read(&self.path).await {
            Ok(b) => b,
            Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
                return Ok(0)
            }
            Err(e) => return Err(CounterError::io(&self.path, e)),
        };

        match parse_counter(&bytes) {
            Some(v) => Ok(v),
            None => {
                tracing::warn!(path = %self.path.display(), "counter file is not a number; reading as 0");
                Ok(0)
            }
        }
    }

    /// Persist `value`, creating parent directories as needed.
    pub async fn write(&self, value: u64) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.persist(value).await
    }

    /// Read, add one, write, and return the new value.
    pub async fn increment_and_get(&self) -> Result<u64> {
        let _guard = self.write_lock.lock().await;
        let next = self
            .read()
            .await?
            .checked_add(1)
            .ok_or(CounterError::Overflow)?;
        self.persist(next).await?;
        Ok(next)
    }

    pub async fn reset(&self) -> Result<()> {
        self.write(0).await
    }

    /// Readiness round-trip: read the value and write it straight back.
    ///
    /// The write is real, so a read-only mount or a full disk fails here
    /// even though the logical value does not change.
    pub async fn probe(&self) -> Result<u64> {
        let _guard = self.write_lock.lock().await;
        let value = self.read().await?;
        self.persist(value).await?;
        Ok(value)
    }

    /// Caller must hold `write_lock`.
    async fn persist(&self, value: u64) -> Result<()> {
        let parent = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| CounterError::io(parent, e))?;
        }

        let tmp = self.temp_path()?;
        if let Err(e) = write_synced(&tmp, value.to_string().as_bytes()).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(CounterError::io(&tmp, e));
        }
        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(CounterError::io(&self.path, e));
        }
        if let Some(parent) = parent {
            sync_dir(parent)
                .await
                .map_err(|e| CounterError::io(parent, e))?;
        }

        tracing::debug!(path = %self.path.display(), value, "counter persisted");
        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let name = self.path.file_name().ok_or_else(|| {
            CounterError::io(
                &self.path,
                io::Error::new(io::ErrorKind::InvalidInput, "counter path has no file name"),
            )
        })?;
        let mut tmp_name = std::ffi::OsString::from(".");
        tmp_name.push(name);
        tmp_name.push(".tmp");
        Ok(self.path.with_file_name(tmp_name))
    }
}

async fn write_synced(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(data).await?;
    file.sync_all().await
}

/// Flush the directory entry created by the rename.
#[cfg(unix)]
async fn sync_dir(dir: &Path) -> io::Result<()> {
    fs::File::open(dir).await?.sync_all().await
}

#[cfg(not(unix))]
async fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

/// Parse persisted content. `None` means corrupt; empty content is 0.
fn parse_counter(bytes: &[u8]) -> Option<u64> {
    let text = std::str::from_utf8(bytes).ok()?.trim();
    if text.is_empty() {
        return Some(0);
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_counter;

    #[test]
    fn parse_accepts_trimmed_decimal() {
        assert_eq!(parse_counter(b"42"), Some(42));
        assert_eq!(parse_counter(b"  42\n"), Some(42));
        assert_eq!(parse_counter(b""), Some(0));
        assert_eq!(parse_counter(b" \n"), Some(0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_counter(b"abc"), None);
        assert_eq!(parse_counter(b"-5"), None);
        assert_eq!(parse_counter(b"12abc"), None);
        assert_eq!(parse_counter(&[0xff, 0xfe]), None);
        assert_eq!(parse_counter(b"18446744073709551616"), None);
    }
}
