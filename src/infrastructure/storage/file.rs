//! File-backed key-value medium
//!
//! Each key is stored as `<base_dir>/<key>.json`. Writes go to a uniquely
//! named temporary file in the same directory which is then renamed over the
//! target, so readers only ever see a complete previous or complete new value.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::storage::KeyValueStore;
use crate::domain::DomainError;

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    /// Open a medium rooted at `base_dir`, creating the directory if needed
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let base_dir = base_dir.into();

        fs::create_dir_all(&base_dir).map_err(|e| {
            DomainError::storage(format!(
                "Failed to create storage directory '{}': {}",
                base_dir.display(),
                e
            ))
        })?;

        debug!("Opened file storage at {}", base_dir.display());

        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, DomainError> {
        validate_key(key)?;
        Ok(self.base_dir.join(format!("{}.json", key)))
    }
}

/// Keys become file names, so only a conservative character set is allowed
fn validate_key(key: &str) -> Result<(), DomainError> {
    if key.is_empty() {
        return Err(DomainError::validation("Storage key cannot be empty"));
    }

    if key.starts_with('.') {
        return Err(DomainError::validation(format!(
            "Storage key '{}' cannot start with '.'",
            key
        )));
    }

    if let Some(c) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(DomainError::validation(format!(
            "Storage key '{}' contains invalid character '{}'",
            key, c
        )));
    }

    Ok(())
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::storage(format!(
                "Failed to read '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self.path_for(key)?;

        // dropping the temp file on any error path deletes it
        let mut temp = NamedTempFile::new_in(&self.base_dir).map_err(|e| {
            DomainError::storage(format!(
                "Failed to create temp file in '{}': {}",
                self.base_dir.display(),
                e
            ))
        })?;

        temp.write_all(value.as_bytes())
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to write temp file for '{}': {}",
                    path.display(),
                    e
                ))
            })?;

        temp.persist(&path).map_err(|e| {
            DomainError::storage(format!(
                "Failed to move '{}' into place: {}",
                path.display(),
                e.error
            ))
        })?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, DomainError> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DomainError::storage(format!(
                "Failed to delete '{}': {}",
                path.display(),
                e
            ))),
        }
    }
}
