use super::backend::StorageBackend;
use crate::codec;
use crate::error::{NotesError, Result};
use crate::model::Note;
use log::debug;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

pub const DEFAULT_STORE_FILE: &str = "notes.json";

/// Stores the collection as a single JSON file, in the export format.
pub struct FsBackend {
    root: PathBuf,
    file_name: String,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: DEFAULT_STORE_FILE.to_string(),
        }
    }

    pub fn with_file_name(mut self, name: &str) -> Self {
        self.file_name = name.to_string();
        self
    }

    pub fn store_path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotesError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load(&self) -> Result<Option<Vec<Note>>> {
        let path = self.store_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(NotesError::Io)?;
        let notes = codec::deserialize(&content)?;
        debug!("loaded {} notes from {}", notes.len(), path.display());
        Ok(Some(notes))
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        self.ensure_dir()?;
        let content = codec::serialize(notes)?;

        // Atomic write
        let tmp_path = self.root.join(format!(".notes-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(NotesError::Io)?;
        fs::rename(&tmp_path, self.store_path()).map_err(NotesError::Io)?;

        debug!("saved {} notes to {}", notes.len(), self.store_path().display());
        Ok(())
    }
}
