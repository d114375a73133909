use std::fs;
use std::path::PathBuf;

use uuid::Uuid;

use super::backend::StorageBackend;
use crate::error::Result;

/// Default file name for the stored record.
pub const RECORD_FILE: &str = "todos_v1.json";

/// File-backed storage backend: one JSON record file inside a root directory.
pub struct FsBackend {
    root: PathBuf,
    file_name: String,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: RECORD_FILE.to_string(),
        }
    }

    pub fn with_file_name(mut self, name: &str) -> Self {
        self.file_name = name.to_string();
        self
    }

    fn record_path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_record(&self) -> Result<Option<String>> {
        let path = self.record_path();
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write_record(&self, raw: &str) -> Result<()> {
        self.ensure_dir()?;

        // Atomic write: tmp then rename, so a crash never leaves a torn record.
        let tmp = self
            .root
            .join(format!(".{}-{}.tmp", self.file_name, Uuid::new_v4()));
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, self.record_path())?;
        Ok(())
    }
}
