use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::{KeyValueStore, StorageError};

/// Directory-backed key-value store: each key lives in `<dir>/<key>.json`.
///
/// Writes go to a uniquely named temp file in the same directory and are
/// then renamed over the target, so a reader sees either the old or the new
/// value, never a partial one.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::WriteFailure`] if the directory cannot be
    /// created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StorageError::WriteFailure {
            key: String::new(),
            path: dir.clone(),
            source,
        })?;
        tracing::debug!(dir = %dir.display(), "opened file storage");
        Ok(Self { dir })
    }

    /// The directory holding the value files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file that holds `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidKey`] for keys that are empty, start
    /// with a dot or contain path separators.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let reason = if key.is_empty() {
            Some("must not be empty")
        } else if key.starts_with('.') {
            Some("must not start with a dot")
        } else if key.contains(['/', '\\']) {
            Some("must not contain path separators")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(StorageError::InvalidKey {
                key: key.to_owned(),
                reason,
            });
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::ReadFailure {
                key: key.to_owned(),
                path,
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        atomic_write(&path, value.as_bytes()).map_err(|source| StorageError::WriteFailure {
            key: key.to_owned(),
            path: path.clone(),
            source,
        })?;
        tracing::trace!(key, bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::WriteFailure {
                key: key.to_owned(),
                path,
                source,
            }),
        }
    }
}

/// Writes to a sibling temp file and renames it over `path`.
fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let temp_path = path.with_file_name(format!(
        ".{}.tmp.{}",
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("value"),
        Uuid::new_v4()
    ));

    if let Err(e) = std::fs::write(&temp_path, data) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }
    std::fs::rename(&temp_path, path).inspect_err(|_| {
        let _ = std::fs::remove_file(&temp_path);
    })
}
