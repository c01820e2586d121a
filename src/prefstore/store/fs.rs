use super::StorageAdapter;
use crate::error::{Result, StoreError};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILENAME: &str = "settings.json";

/// File-based storage: one `settings.json` under a root directory.
/// The directory is created on first write.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Path of the backing file (it may not exist yet).
    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(StoreError::Io)?;
        }
        Ok(())
    }
}

impl StorageAdapter for FileStore {
    fn read_raw(&self) -> Result<Option<String>> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path).map_err(StoreError::Io)?;
        Ok(Some(raw))
    }

    fn write_raw(&mut self, raw: &str) -> Result<()> {
        self.ensure_dir(&self.root)?;
        fs::write(self.settings_path(), raw).map_err(StoreError::Io)?;
        Ok(())
    }
}
