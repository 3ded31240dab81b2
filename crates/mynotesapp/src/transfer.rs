//! # File Transfer
//!
//! Export and import never touch the filesystem directly. They go through a
//! [`FileTransfer`], which plays two roles:
//!
//! 1. **Picking** a target (the save/open dialog). `Ok(None)` means the user
//!    cancelled, and the calling command must leave the store untouched.
//! 2. **Raw I/O**: reading and writing whole text files.
//!
//! [`FixedPathTransfer`] answers the pickers with a path chosen up front (a
//! CLI argument) and performs real file I/O. [`MemTransfer`] keeps files in
//! memory for tests.

use crate::error::{NotesError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File-type restriction shown by the pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

impl FileFilter {
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }

    /// Append the first allowed extension when `path` lacks one the filter accepts.
    pub fn apply_to(&self, path: PathBuf) -> PathBuf {
        if self.accepts(&path) {
            return path;
        }
        match self.extensions.first() {
            Some(ext) => {
                let mut name = path.into_os_string();
                name.push(".");
                name.push(ext);
                PathBuf::from(name)
            }
            None => path,
        }
    }
}

pub trait FileTransfer {
    fn pick_save_target(&self, filter: &FileFilter) -> Result<Option<PathBuf>>;

    fn pick_open_target(&self, filter: &FileFilter) -> Result<Option<PathBuf>>;

    fn write_text(&self, path: &Path, text: &str) -> Result<()>;

    fn read_text(&self, path: &Path) -> Result<String>;
}

/// Picker answers are fixed at construction; `None` behaves like a cancelled dialog.
pub struct FixedPathTransfer {
    path: Option<PathBuf>,
}

impl FixedPathTransfer {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl FileTransfer for FixedPathTransfer {
    fn pick_save_target(&self, _filter: &FileFilter) -> Result<Option<PathBuf>> {
        Ok(self.path.clone())
    }

    fn pick_open_target(&self, _filter: &FileFilter) -> Result<Option<PathBuf>> {
        Ok(self.path.clone())
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        fs::write(path, text).map_err(NotesError::Io)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(NotesError::Io)
    }
}

/// In-memory transfer for tests. Reads of unknown paths fail with `NotFound`.
#[derive(Default)]
pub struct MemTransfer {
    pick: Option<PathBuf>,
    files: RefCell<HashMap<PathBuf, String>>,
    fail_writes: bool,
}

impl MemTransfer {
    pub fn new(pick: Option<&str>) -> Self {
        Self {
            pick: pick.map(PathBuf::from),
            ..Default::default()
        }
    }

    pub fn with_file(self, path: &str, text: &str) -> Self {
        self.files
            .borrow_mut()
            .insert(PathBuf::from(path), text.to_string());
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.borrow().get(Path::new(path)).cloned()
    }
}

impl FileTransfer for MemTransfer {
    fn pick_save_target(&self, _filter: &FileFilter) -> Result<Option<PathBuf>> {
        Ok(self.pick.clone())
    }

    fn pick_open_target(&self, _filter: &FileFilter) -> Result<Option<PathBuf>> {
        Ok(self.pick.clone())
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        if self.fail_writes {
            return Err(NotesError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Simulated write error",
            )));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), text.to_string());
        Ok(())
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            NotesError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        })
    }
}
