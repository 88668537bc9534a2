use super::backend::{parse_document, Document, DocumentBackend};
use crate::error::{Result, WorklaunchError};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// A document stored as one pretty-printed JSON file.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(WorklaunchError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let stem = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("document");
        self.path
            .with_file_name(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }
}

impl DocumentBackend for FsBackend {
    fn load_document(&self) -> Result<Option<Document>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(WorklaunchError::Io)?;
        parse_document(&content, &self.location()).map(Some)
    }

    fn save_document(&self, document: &Document) -> Result<()> {
        self.ensure_parent_dir()?;

        let content =
            serde_json::to_string_pretty(document).map_err(WorklaunchError::Serialization)?;

        // Atomic write: a crash mid-write leaves the old file intact
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(WorklaunchError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(WorklaunchError::Io(e));
        }

        log::debug!("Saved {} entries to {}", document.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
