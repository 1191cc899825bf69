use super::BlobStore;
use crate::error::StoreError;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed blob store: each key becomes one file under the root
/// directory, `{key}{ext}`.
pub struct FileStore {
    root: PathBuf,
    file_ext: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_ext: ".json".to_string(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
        self
    }

    /// Per-user data directory for the default store location.
    pub fn default_root() -> Result<PathBuf, StoreError> {
        let proj_dirs = ProjectDirs::from("com", "tabdeck", "tabdeck")
            .ok_or_else(|| StoreError::Backend("could not determine data dir".to_string()))?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}{}", key, self.file_ext))
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(StoreError::Io)?;
        }
        Ok(())
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(path).map_err(StoreError::Io)?;
        Ok(Some(value))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.ensure_dir()?;
        fs::write(self.key_path(key), value).map_err(StoreError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.read("nothing").unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.write("slot", "payload").unwrap();
        assert_eq!(store.read("slot").unwrap().as_deref(), Some("payload"));
    }

    #[test]
    fn write_creates_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("store");
        let mut store = FileStore::new(root.clone());
        store.write("slot", "x").unwrap();
        assert!(root.join("slot.json").exists());
    }

    #[test]
    fn file_ext_is_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf()).with_file_ext("blob");
        store.write("slot", "x").unwrap();
        assert!(dir.path().join("slot.blob").exists());
    }
}
