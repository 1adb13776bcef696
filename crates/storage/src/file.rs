//! File-backed key/value store
//!
//! Each key is stored as `<dir>/<key>.json`. Writes are atomic: the value
//! goes to `<key>.json.tmp` first and is renamed over the final path, so a
//! crash mid-write leaves the previous value intact.
//!
//! Keys must be non-empty, made of ASCII alphanumerics, `-`, `_` or `.`, and
//! must not start with `.`. That keeps every key inside the store directory.

use crate::store::{KeyValueStore, StoreResult};
use intake_core::StoreError;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "json.tmp";

/// Directory of one JSON file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        debug!(target: "intake::store", dir = %dir.display(), "Opened file store");
        Ok(FileStore { dir })
    }

    /// Root directory of the store
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{EXTENSION}")))
    }
}

fn validate_key(key: &str) -> StoreResult<()> {
    let reason = if key.is_empty() {
        Some("key is empty")
    } else if key.starts_with('.') {
        Some("key starts with '.'")
    } else if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        Some("key contains characters other than [A-Za-z0-9._-]")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(StoreError::InvalidKey {
            key: key.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        let temp_path = path.with_extension(TEMP_EXTENSION);

        if temp_path.exists() {
            warn!(target: "intake::store", path = %temp_path.display(), "Removing stale temp file");
            let _ = fs::remove_file(&temp_path);
        }

        let written = File::create(&temp_path).and_then(|mut file| {
            file.write_all(value.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&temp_path, &path) {
            warn!(
                target: "intake::store",
                temp_path = %temp_path.display(),
                error = %e,
                "Rename failed, cleaning up temp file"
            );
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        debug!(target: "intake::store", path = %path.display(), bytes = value.len(), "Atomic write completed");
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
