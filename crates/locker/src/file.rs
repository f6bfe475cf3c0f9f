//! JSON-file-backed assessment store.

use std::fs;
use std::path::{Path, PathBuf};

use wajibika_core::Assessment;

use crate::error::LockerError;
use crate::store::AssessmentStore;

/// File name holding the saved collection inside a storage directory.
pub const COLLECTION_FILE: &str = "assessments.json";

/// Stores the collection as one JSON array on disk.
///
/// A missing file loads as the empty collection. Every save rewrites the
/// whole document; parent directories are created on first save.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by the fixed collection file inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(COLLECTION_FILE))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AssessmentStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<Assessment>, LockerError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn save_all(&self, assessments: &[Assessment]) -> Result<(), LockerError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(assessments)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
